//! Weather provider abstraction.

mod openweather;

pub use openweather::OpenWeatherClient;

use crate::error::Result;
use async_trait::async_trait;

/// Current conditions for a city, as consumed by the response formatter.
///
/// Temperatures are metric and rounded to whole degrees; the reply prompt
/// forbids the model from altering them, and the deterministic fallback
/// reproduces them verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeatherReport {
    /// Provider-normalized city name.
    pub city: String,
    /// Temperature in °C, rounded.
    pub temperature_c: i32,
    /// Feels-like temperature in °C, rounded.
    pub feels_like_c: i32,
    /// Short descriptive condition ("clear sky", "light rain").
    pub condition: String,
}

/// Trait for weather data lookup.
#[async_trait]
pub trait WeatherProvider: Send + Sync {
    /// Fetch current conditions for a city name.
    ///
    /// Any failure (missing key, network error, unknown city) is an `Err`;
    /// a returned report is always well-formed.
    async fn current(&self, city: &str) -> Result<WeatherReport>;
}
