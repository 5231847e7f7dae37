//! OpenWeatherMap provider.
//!
//! Uses the free current-weather endpoint with metric units. City names
//! coming out of free-form queries are often ambiguous, so the lookup tries
//! the bare name first and then a region-qualified variant ("{city},IN" by
//! default), stopping at the first parseable success.

use super::{WeatherProvider, WeatherReport};
use crate::config::WeatherSettings;
use crate::error::{Result, WeatherMindError};
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, instrument, warn};

/// OpenWeatherMap-backed weather provider.
pub struct OpenWeatherClient {
    http: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
    region_hint: String,
}

#[derive(Debug, Deserialize)]
struct OwResponse {
    name: String,
    main: OwMain,
    weather: Vec<OwWeather>,
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
    feels_like: f64,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    description: String,
}

impl OpenWeatherClient {
    /// Create a provider from weather settings.
    pub fn new(settings: &WeatherSettings) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(settings.timeout_seconds))
            .build()?;

        Ok(Self {
            http,
            base_url: settings.base_url.clone(),
            api_key: settings.api_key.clone(),
            region_hint: settings.region_hint.clone(),
        })
    }

    /// Lookup attempts in order: bare city, then region-qualified.
    fn query_variants(&self, city: &str) -> Vec<String> {
        vec![city.to_string(), format!("{},{}", city, self.region_hint)]
    }

    async fn fetch(&self, query: &str, api_key: &str) -> Result<WeatherReport> {
        let response = self
            .http
            .get(&self.base_url)
            .query(&[("q", query), ("appid", api_key), ("units", "metric")])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(WeatherMindError::Lookup(format!(
                "Provider returned status {} for '{}'",
                status, query
            )));
        }

        let parsed: OwResponse = response
            .json()
            .await
            .map_err(|e| WeatherMindError::Lookup(format!("Malformed provider response: {}", e)))?;

        Ok(report_from_response(parsed))
    }
}

fn report_from_response(parsed: OwResponse) -> WeatherReport {
    let condition = parsed
        .weather
        .first()
        .map(|w| w.description.clone())
        .unwrap_or_else(|| "unknown".to_string());

    WeatherReport {
        city: parsed.name,
        temperature_c: parsed.main.temp.round() as i32,
        feels_like_c: parsed.main.feels_like.round() as i32,
        condition,
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherClient {
    #[instrument(skip(self), fields(city = %city))]
    async fn current(&self, city: &str) -> Result<WeatherReport> {
        let api_key = match self.api_key.as_deref() {
            Some(key) if !key.is_empty() => key,
            _ => {
                return Err(WeatherMindError::Config(
                    "WEATHER_API_KEY not set. Set it with: export WEATHER_API_KEY='...'"
                        .to_string(),
                ))
            }
        };

        for query in self.query_variants(city) {
            match self.fetch(&query, api_key).await {
                Ok(report) => {
                    debug!("Resolved '{}' via query '{}'", city, query);
                    return Ok(report);
                }
                Err(e) => {
                    warn!("Lookup attempt '{}' failed: {}", query, e);
                }
            }
        }

        Err(WeatherMindError::Lookup(format!("City not found: {}", city)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::WeatherSettings;

    #[test]
    fn test_query_variants_order() {
        let client = OpenWeatherClient::new(&WeatherSettings::default()).unwrap();
        assert_eq!(client.query_variants("Pune"), vec!["Pune", "Pune,IN"]);
    }

    #[test]
    fn test_response_parsing_rounds_temperatures() {
        let parsed: OwResponse = serde_json::from_str(
            r#"{
                "name": "Tokyo",
                "dt": 1718000000,
                "main": { "temp": 18.46, "feels_like": 16.51, "humidity": 60 },
                "weather": [ { "description": "clear sky" } ]
            }"#,
        )
        .unwrap();

        let report = report_from_response(parsed);
        assert_eq!(
            report,
            WeatherReport {
                city: "Tokyo".to_string(),
                temperature_c: 18,
                feels_like_c: 17,
                condition: "clear sky".to_string(),
            }
        );
    }

    #[test]
    fn test_response_parsing_missing_condition() {
        let parsed: OwResponse = serde_json::from_str(
            r#"{ "name": "Nowhere", "main": { "temp": 0.0, "feels_like": -0.4 }, "weather": [] }"#,
        )
        .unwrap();

        let report = report_from_response(parsed);
        assert_eq!(report.condition, "unknown");
        assert_eq!(report.feels_like_c, 0);
    }

    #[tokio::test]
    async fn test_missing_api_key_is_config_error() {
        let client = OpenWeatherClient::new(&WeatherSettings::default()).unwrap();
        let err = client.current("Pune").await.unwrap_err();
        assert!(matches!(err, WeatherMindError::Config(_)));
    }
}
