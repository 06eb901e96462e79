use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::model::{CurrentConditions, ForecastEntry, Unit};

use super::{ProviderError, WeatherProvider};

/// Credential the widget ships with. Can be overridden through the
/// configuration file.
pub const DEFAULT_API_KEY: &str = "d8628f02f360c475aebd63424adda329";

const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org/data/2.5";

/// Client for the OpenWeatherMap current-conditions and 5-day/3-hour
/// forecast endpoints.
#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    api_key: String,
    base_url: String,
    http: Client,
}

impl OpenWeatherProvider {
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL.to_string())
    }

    /// Point the client at a different host. Used by the HTTP tests.
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self {
            api_key,
            base_url,
            http: Client::new(),
        }
    }

    async fn fetch(&self, endpoint: &str, city: &str, unit: Unit) -> Result<String, ProviderError> {
        let url = format!("{}/{endpoint}", self.base_url);
        debug!(%url, city, unit = unit.as_str(), "fetching from OpenWeather");

        let res = self
            .http
            .get(&url)
            .query(&[("q", city), ("appid", self.api_key.as_str()), ("units", unit.as_str())])
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            return Err(ProviderError::Status {
                status,
                body: truncate_body(&body),
            });
        }

        Ok(body)
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    async fn current(&self, city: &str, unit: Unit) -> Result<CurrentConditions, ProviderError> {
        let body = self.fetch("weather", city, unit).await?;
        let parsed: OwCurrentResponse = serde_json::from_str(&body)?;

        Ok(conditions_from(parsed))
    }

    async fn forecast(&self, city: &str, unit: Unit) -> Result<Vec<ForecastEntry>, ProviderError> {
        let body = self.fetch("forecast", city, unit).await?;
        let parsed: OwForecastResponse = serde_json::from_str(&body)?;

        Ok(parsed.list.into_iter().map(entry_from).collect())
    }
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
    humidity: u8,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    main: String,
    description: String,
}

#[derive(Debug, Deserialize)]
struct OwClouds {
    all: u8,
}

#[derive(Debug, Deserialize)]
struct OwWind {
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct OwRain {
    #[serde(rename = "1h")]
    one_hour: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    name: String,
    main: OwMain,
    weather: Vec<OwWeather>,
    clouds: OwClouds,
    wind: OwWind,
    rain: Option<OwRain>,
}

#[derive(Debug, Deserialize)]
struct OwForecastSlot {
    dt: i64,
    main: OwMain,
    weather: Vec<OwWeather>,
}

#[derive(Debug, Deserialize)]
struct OwForecastResponse {
    list: Vec<OwForecastSlot>,
}

fn conditions_from(parsed: OwCurrentResponse) -> CurrentConditions {
    let (category, description) = parsed
        .weather
        .into_iter()
        .next()
        .map(|w| (w.main, w.description))
        .unwrap_or_else(|| ("Unknown".to_string(), "Unknown".to_string()));

    CurrentConditions {
        city: parsed.name,
        temperature: parsed.main.temp,
        description,
        category,
        cloud_cover: parsed.clouds.all,
        rain_1h: parsed.rain.and_then(|r| r.one_hour),
        humidity: parsed.main.humidity,
        wind_speed: parsed.wind.speed,
    }
}

fn entry_from(slot: OwForecastSlot) -> ForecastEntry {
    let category = slot
        .weather
        .into_iter()
        .next()
        .map(|w| w.main)
        .unwrap_or_else(|| "Unknown".to_string());

    ForecastEntry {
        timestamp: slot.dt,
        temperature: slot.main.temp,
        category,
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.chars().count() > MAX {
        format!("{}...", body.chars().take(MAX).collect::<String>())
    } else {
        body.to_string()
    }
}
