use serde::{Deserialize, Serialize};
use std::convert::TryFrom;

/// Unit system the widget displays in. Also selects the `units` token sent
/// to the provider, so temperatures and wind speeds arrive pre-converted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    #[default]
    Imperial,
    Metric,
}

impl Unit {
    pub fn as_str(&self) -> &'static str {
        match self {
            Unit::Imperial => "imperial",
            Unit::Metric => "metric",
        }
    }

    /// Suffix appended to a rounded temperature, e.g. "72°F".
    pub fn temperature_suffix(&self) -> &'static str {
        match self {
            Unit::Imperial => "°F",
            Unit::Metric => "°C",
        }
    }

    /// Label appended to a rounded wind speed, e.g. "12 mph".
    pub fn wind_label(&self) -> &'static str {
        match self {
            Unit::Imperial => "mph",
            Unit::Metric => "km/h",
        }
    }

    pub const fn all() -> &'static [Unit] {
        &[Unit::Imperial, Unit::Metric]
    }
}

impl std::fmt::Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for Unit {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let lower = value.to_lowercase();

        match lower.as_str() {
            "imperial" => Ok(Unit::Imperial),
            "metric" => Ok(Unit::Metric),
            _ => Err(anyhow::anyhow!(
                "Unknown unit '{value}'. Supported units: imperial, metric."
            )),
        }
    }
}

/// One current-conditions observation, as returned by the provider.
/// Temperatures and wind speeds are already in the requested unit system.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentConditions {
    pub city: String,
    pub temperature: f64,
    /// Free-text description, e.g. "scattered clouds".
    pub description: String,
    /// Coarse condition category, e.g. "Clouds". Drives icon selection.
    pub category: String,
    /// Cloud cover percentage, 0-100.
    pub cloud_cover: u8,
    /// Rain volume over the trailing hour, when the provider reports one.
    pub rain_1h: Option<f64>,
    /// Relative humidity percentage, 0-100.
    pub humidity: u8,
    pub wind_speed: f64,
}

/// One 3-hour forecast slot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastEntry {
    /// Seconds since the Unix epoch.
    pub timestamp: i64,
    pub temperature: f64,
    /// Coarse condition category, e.g. "Rain".
    pub category: String,
}
