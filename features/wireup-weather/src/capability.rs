use std::sync::Arc;

use crate::errors::WeatherError;

/// Current conditions for one location
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherObservation {
    pub temp: f64,
    pub conditions: String,
}

/// Capability of answering current-weather queries for a location.
///
/// Consumers hold a [SharedWeatherApi] and never learn which variant the
/// registry bound under the name they referenced.
pub trait WeatherApi: Send + Sync {
    fn current_weather(&self, city: &str) -> Result<WeatherObservation, WeatherError>;
}

/// The injectable handle for the capability.
///
/// Factories for every variant supply this exact type, so the registry
/// payload stays variant-agnostic and substitution is a plain clone of the
/// shared handle.
pub type SharedWeatherApi = Arc<dyn WeatherApi>;
