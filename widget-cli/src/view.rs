//! Terminal rendering of the widget panels.

use widget_core::{CurrentDisplay, DailySummary, Icon, WidgetView};

/// Writes the widget panels to stdout; notifications go to stderr.
#[derive(Debug, Default)]
pub struct TerminalView;

impl TerminalView {
    pub fn new() -> Self {
        Self
    }
}

impl WidgetView for TerminalView {
    fn show_current(&self, current: &CurrentDisplay) {
        println!("{}", current.city);
        println!(
            "{}  {}  {}",
            glyph(current.icon),
            current.temperature,
            current.description
        );
        println!(
            "Rain: {}   Humidity: {}   Wind: {}",
            current.rain, current.humidity, current.wind
        );
    }

    fn show_forecast(&self, days: &[DailySummary]) {
        println!();
        for day in days {
            println!(
                "{:<4} {}  {:>4} / {:<4}",
                day.day,
                glyph(day.icon),
                format!("{}°", day.min),
                format!("{}°", day.max)
            );
        }
    }

    fn notify(&self, message: &str) {
        eprintln!("{message}");
    }
}

const fn glyph(icon: Icon) -> &'static str {
    match icon {
        Icon::Sun => "☀",
        Icon::SunCloud => "⛅",
        Icon::Cloud => "☁",
        Icon::Rain => "🌧",
        Icon::Snow => "❄",
        Icon::Storm => "⛈",
        Icon::Fog => "🌫",
    }
}
