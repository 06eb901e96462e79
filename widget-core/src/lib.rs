//! Core library for the weather widget.
//!
//! This crate defines:
//! - Configuration handling (city, unit, credential override)
//! - The OpenWeather provider client and its abstraction
//! - The current-conditions mapper and forecast aggregator
//! - Request orchestration (fetch state machine, view seam)
//!
//! It is used by `widget-cli`, but can also be reused by other frontends.

pub mod config;
pub mod display;
pub mod forecast;
pub mod icon;
pub mod model;
pub mod provider;
pub mod session;

pub use config::Config;
pub use display::CurrentDisplay;
pub use forecast::{DailySummary, summarize};
pub use icon::Icon;
pub use model::{CurrentConditions, ForecastEntry, Unit};
pub use provider::{ProviderError, WeatherProvider, openweather::OpenWeatherProvider};
pub use session::{
    CITY_NOT_FOUND_MESSAGE, FetchState, Settings, Widget, WidgetError, WidgetView,
};
