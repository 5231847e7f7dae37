//! Error types for WeatherMind.

use thiserror::Error;

/// Library-level error type for WeatherMind operations.
#[derive(Error, Debug)]
pub enum WeatherMindError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Upstream service error: {0}")]
    Upstream(String),

    #[error("Weather lookup failed: {0}")]
    Lookup(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Result type alias for WeatherMind operations.
pub type Result<T> = std::result::Result<T, WeatherMindError>;
