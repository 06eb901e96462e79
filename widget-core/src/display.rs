//! Current-conditions mapper: turns one observation into the display
//! strings and icon the frontend slots expect.

use crate::icon::{self, Icon};
use crate::model::{CurrentConditions, Unit};

/// Display-ready rendition of one observation. All strings are final; the
/// frontend writes them into its slots verbatim.
#[derive(Debug, Clone, PartialEq)]
pub struct CurrentDisplay {
    pub city: String,
    /// Rounded temperature with unit suffix, e.g. "72°F".
    pub temperature: String,
    pub description: String,
    pub icon: Icon,
    /// Trailing-hour rain with a percent sign, "0%" when absent. The
    /// provider reports a volume, not a percentage; the widget shows it
    /// with a percent sign regardless.
    pub rain: String,
    pub humidity: String,
    /// Rounded wind speed with unit label, e.g. "12 mph".
    pub wind: String,
}

impl CurrentDisplay {
    pub fn new(observation: &CurrentConditions, unit: Unit) -> Self {
        let rain = match observation.rain_1h {
            Some(volume) if volume != 0.0 => format!("{volume}%"),
            _ => "0%".to_string(),
        };

        Self {
            city: observation.city.clone(),
            temperature: format!(
                "{}{}",
                observation.temperature.round() as i64,
                unit.temperature_suffix()
            ),
            description: observation.description.clone(),
            icon: icon::current_icon(&observation.category, observation.cloud_cover),
            rain,
            humidity: format!("{}%", observation.humidity),
            wind: format!("{} {}", observation.wind_speed.round() as i64, unit.wind_label()),
        }
    }
}
