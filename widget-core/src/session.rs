//! Request orchestration: one refresh drives the current-conditions fetch,
//! renders it, then drives the forecast fetch.
//!
//! There is no retry, no timeout, no cancellation and no single-flight
//! guard. `refresh` borrows `&self` and views accept `&self`, so nothing
//! stops overlapping refreshes; whichever response resolves last writes
//! the view last.

use std::sync::{Mutex, PoisonError};

use thiserror::Error;
use tracing::{debug, warn};

use crate::display::CurrentDisplay;
use crate::forecast::{self, DailySummary};
use crate::model::Unit;
use crate::provider::{ProviderError, WeatherProvider};

/// City shown before the user ever picks one.
pub const DEFAULT_CITY: &str = "New York";

/// The one notification text for a failed current-conditions fetch. Bad
/// city names and transport failures share it.
pub const CITY_NOT_FOUND_MESSAGE: &str = "City not found. Please try again.";

/// Phases a single refresh moves through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchState {
    /// Between triggers.
    Idle,
    FetchingCurrent,
    FetchingForecast,
    Rendered,
    Error,
}

impl FetchState {
    /// A refresh ends in exactly one of the terminal states.
    pub const fn is_terminal(self) -> bool {
        matches!(self, FetchState::Rendered | FetchState::Error)
    }
}

/// The widget's interaction state: which city and unit are current.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub city: String,
    pub unit: Unit,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            city: DEFAULT_CITY.to_string(),
            unit: Unit::default(),
        }
    }
}

/// Rendering surface the orchestrator writes into. The frontend implements
/// this; methods take `&self` because a shared view is written by whichever
/// refresh resolves, in resolution order.
pub trait WidgetView: Send + Sync {
    fn show_current(&self, current: &CurrentDisplay);
    fn show_forecast(&self, days: &[DailySummary]);
    /// Interrupt the user with a message.
    fn notify(&self, message: &str);
}

/// The two ways a refresh fails. A current-conditions failure is surfaced
/// through [`WidgetView::notify`]; a forecast failure is logged only.
#[derive(Debug, Error)]
pub enum WidgetError {
    #[error("current conditions fetch failed")]
    CurrentConditions(#[source] ProviderError),

    #[error("forecast fetch failed")]
    Forecast(#[source] ProviderError),
}

/// Orchestrates fetches against a provider and writes results into a view.
#[derive(Debug)]
pub struct Widget<P, V> {
    provider: P,
    view: V,
    settings: Mutex<Settings>,
}

impl<P: WeatherProvider, V: WidgetView> Widget<P, V> {
    pub fn new(provider: P, view: V) -> Self {
        Self::with_settings(provider, view, Settings::default())
    }

    pub fn with_settings(provider: P, view: V, settings: Settings) -> Self {
        Self {
            provider,
            view,
            settings: Mutex::new(settings),
        }
    }

    /// Current settings snapshot.
    pub fn settings(&self) -> Settings {
        self.lock_settings().clone()
    }

    /// Store the city and unit read from the settings surface. Saving does
    /// not fetch; the caller triggers [`Widget::refresh`] afterwards.
    pub fn save(&self, city: String, unit: Unit) {
        let mut settings = self.lock_settings();
        settings.city = city;
        settings.unit = unit;
    }

    /// Run one trigger through the fetch state machine.
    ///
    /// Current conditions render as soon as they arrive, before the
    /// forecast fetch starts. A current-conditions failure notifies the
    /// view and skips the forecast entirely; a forecast failure is logged
    /// and leaves whatever the forecast section already shows. Both end
    /// the refresh in [`FetchState::Error`], reported as the matching
    /// [`WidgetError`] kind.
    pub async fn refresh(&self) -> Result<FetchState, WidgetError> {
        // Settings are read once per trigger; a save landing mid-flight
        // affects the next refresh, not this one.
        let Settings { city, unit } = self.settings();

        debug!(%city, %unit, state = ?FetchState::FetchingCurrent, "fetching current conditions");
        let observation = match self.provider.current(&city, unit).await {
            Ok(observation) => observation,
            Err(err) => {
                warn!(%city, error = %err, "current conditions fetch failed");
                self.view.notify(CITY_NOT_FOUND_MESSAGE);
                return Err(WidgetError::CurrentConditions(err));
            }
        };

        self.view.show_current(&CurrentDisplay::new(&observation, unit));

        debug!(%city, %unit, state = ?FetchState::FetchingForecast, "fetching forecast");
        match self.provider.forecast(&city, unit).await {
            Ok(entries) => {
                self.view.show_forecast(&forecast::summarize(&entries));
                debug!(%city, state = ?FetchState::Rendered, "refresh complete");
                Ok(FetchState::Rendered)
            }
            Err(err) => {
                // Not surfaced to the user; the current panel stays as
                // rendered above.
                warn!(%city, error = %err, "forecast fetch failed");
                Err(WidgetError::Forecast(err))
            }
        }
    }

    fn lock_settings(&self) -> std::sync::MutexGuard<'_, Settings> {
        self.settings.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
