use anyhow::{Result, anyhow};
use clap::{Parser, Subcommand};
use inquire::{Select, Text};

use widget_core::{
    Config, OpenWeatherProvider, Settings, Unit, WeatherProvider, Widget, WidgetError, WidgetView,
};

use crate::view::TerminalView;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "widget", version, about = "Weather widget")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show current conditions and the 5-day forecast.
    Show {
        /// City name; defaults to the configured city.
        city: Option<String>,

        /// Display unit, "imperial" or "metric".
        #[arg(long)]
        unit: Option<String>,
    },

    /// Change city and unit, then refresh.
    Settings,
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        let config = Config::load()?;

        match self.command {
            Command::Show { city, unit } => show(config, city, unit).await,
            Command::Settings => settings(config).await,
        }
    }
}

async fn show(config: Config, city: Option<String>, unit: Option<String>) -> Result<()> {
    let mut settings = config.settings();
    if let Some(city) = city {
        settings.city = city;
    }
    if let Some(unit) = unit.as_deref() {
        settings.unit = Unit::try_from(unit)?;
    }

    refresh(&config, settings).await
}

/// The settings flow: prompt for a city and unit, persist the choice, then
/// refresh. An empty city input cancels without fetching.
async fn settings(mut config: Config) -> Result<()> {
    let current = config.settings();

    let city = Text::new("City:").prompt()?;
    let city = city.trim().to_string();
    if city.is_empty() {
        return Ok(());
    }

    let cursor = Unit::all()
        .iter()
        .position(|u| *u == current.unit)
        .unwrap_or(0);
    let unit = Select::new("Unit:", Unit::all().to_vec())
        .with_starting_cursor(cursor)
        .prompt()?;

    let settings = Settings { city, unit };
    config.remember_settings(&settings);
    config.save()?;

    refresh(&config, settings).await
}

async fn refresh(config: &Config, settings: Settings) -> Result<()> {
    let provider = OpenWeatherProvider::new(config.api_key().to_string());
    let widget = Widget::with_settings(provider, TerminalView::new(), settings);

    run_refresh(&widget).await
}

async fn run_refresh<P, V>(widget: &Widget<P, V>) -> Result<()>
where
    P: WeatherProvider,
    V: WidgetView,
{
    match widget.refresh().await {
        // A forecast failure is logged by the core and leaves the current
        // panel standing, so the process still exits clean.
        Ok(_) | Err(WidgetError::Forecast(_)) => Ok(()),
        // The notification has already been shown by the view.
        Err(WidgetError::CurrentConditions(_)) => Err(anyhow!("weather refresh failed")),
    }
}
