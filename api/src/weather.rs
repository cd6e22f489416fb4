//! Weather lookups for the automation dashboard.
//!
//! A read-only informational domain: there is nothing to persist locally, so
//! the Local branch fabricates a plausible reading on every call instead of
//! touching the entity store.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use store::KeyValueStore;

use crate::error::ApiError;
use crate::mode::BackendMode;

const MOCK_CONDITIONS: &[&str] = &["Güneşli", "Parçalı Bulutlu", "Bulutlu", "Hafif Yağmurlu"];

/// Current conditions for one location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReport {
    pub location: String,
    pub temperature_c: f64,
    pub humidity: u8,
    pub wind_kph: f64,
    pub condition: String,
}

/// The `weather` domain façade.
pub struct WeatherApi<S: KeyValueStore> {
    mode: BackendMode<S>,
}

impl<S: KeyValueStore> WeatherApi<S> {
    pub fn new(mode: BackendMode<S>) -> Self {
        Self { mode }
    }

    /// Current conditions for a location. Local mode returns freshly
    /// generated mock values with no persistence.
    pub async fn current(&self, location: &str) -> Result<WeatherReport, ApiError> {
        match &self.mode {
            BackendMode::Remote(client) => client.current_weather(location).await,
            BackendMode::Local(_) => Ok(mock_report(location)),
        }
    }
}

fn mock_report(location: &str) -> WeatherReport {
    let mut rng = rand::thread_rng();
    WeatherReport {
        location: location.to_string(),
        temperature_c: rng.gen_range(8.0..32.0),
        humidity: rng.gen_range(30..85),
        wind_kph: rng.gen_range(0.0..25.0),
        condition: MOCK_CONDITIONS
            .choose(&mut rng)
            .copied()
            .unwrap_or("Güneşli")
            .to_string(),
    }
}
