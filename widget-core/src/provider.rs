use crate::model::{CurrentConditions, ForecastEntry, Unit};
use async_trait::async_trait;
use std::fmt::Debug;
use thiserror::Error;

pub mod openweather;

/// Failure of a single provider call. A non-success HTTP status and a
/// malformed body are both failures for that call; nothing is retried.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("request to weather provider failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("weather provider returned status {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("failed to parse weather provider response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Abstraction over the weather data source. The orchestrator only ever
/// talks to this trait; tests substitute fakes.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    /// Fetch current conditions for a city, in the requested unit system.
    async fn current(&self, city: &str, unit: Unit) -> Result<CurrentConditions, ProviderError>;

    /// Fetch the 5-day/3-hour forecast for a city, in the requested unit
    /// system.
    async fn forecast(&self, city: &str, unit: Unit) -> Result<Vec<ForecastEntry>, ProviderError>;
}
