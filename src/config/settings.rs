//! Configuration settings for WeatherMind.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct Settings {
    pub general: GeneralSettings,
    pub completion: CompletionSettings,
    pub weather: WeatherSettings,
    pub server: ServerSettings,
    pub language: LanguageSettings,
    pub prompts: PromptSettings,
}


/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralSettings {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Text-completion service settings (OpenRouter).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CompletionSettings {
    /// Base URL of the OpenAI-compatible completion API.
    pub api_base: String,
    /// API key. Overridden by the OPENROUTER_API_KEY environment variable.
    pub api_key: Option<String>,
    /// Model identifier. Overridden by OPENROUTER_MODEL.
    pub model: Option<String>,
    /// Temperature for reply generation (extraction and classification
    /// always run at zero).
    pub reply_temperature: f32,
    /// Per-request timeout in seconds.
    pub timeout_seconds: u64,
}

impl Default for CompletionSettings {
    fn default() -> Self {
        Self {
            api_base: "https://openrouter.ai/api/v1".to_string(),
            api_key: None,
            model: None,
            reply_temperature: 0.5,
            timeout_seconds: 20,
        }
    }
}

/// Weather provider settings (OpenWeatherMap).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WeatherSettings {
    /// Current-weather endpoint.
    pub base_url: String,
    /// API key. Overridden by the WEATHER_API_KEY environment variable.
    pub api_key: Option<String>,
    /// Country code appended as a second lookup attempt ("{city},{hint}").
    pub region_hint: String,
    /// Per-request timeout in seconds.
    pub timeout_seconds: u64,
}

impl Default for WeatherSettings {
    fn default() -> Self {
        Self {
            base_url: "https://api.openweathermap.org/data/2.5/weather".to_string(),
            api_key: None,
            region_hint: "IN".to_string(),
            timeout_seconds: 10,
        }
    }
}

/// HTTP server settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    /// The single origin allowed by CORS.
    pub allowed_origin: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8000,
            allowed_origin: "http://localhost:3000".to_string(),
        }
    }
}

/// Language data used by the deterministic extraction fallbacks.
///
/// These lists mix English and transliterated-Hindi tokens. They live in
/// configuration so that supporting another language is a config change,
/// not a code change.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LanguageSettings {
    /// Preposition/marker tokens that precede a city name
    /// ("in london", "pune me").
    pub city_markers: Vec<String>,
    /// Filler and weather words never accepted as a city name.
    pub stop_words: Vec<String>,
    /// Keywords used for weather-intent detection.
    pub weather_keywords: Vec<String>,
}

impl Default for LanguageSettings {
    fn default() -> Self {
        Self {
            city_markers: ["in", "of", "me", "mein", "मधे"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            stop_words: [
                "aaj", "kal", "ka", "ki", "ke", "hai", "kya", "mausam", "weather", "kaisa",
                "kaisi", "kaise", "today", "how", "is",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            weather_keywords: [
                "weather",
                "temperature",
                "temp",
                "rain",
                "climate",
                "forecast",
                "hot",
                "cold",
                "humidity",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        }
    }
}

/// Prompt customization settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct PromptSettings {
    /// Directory for custom prompts (overrides defaults).
    pub custom_dir: Option<String>,
    /// Custom variables available in all prompts as {{variable_name}}.
    pub variables: std::collections::HashMap<String, String>,
}


impl Settings {
    /// Load settings from the default configuration file.
    pub fn load() -> crate::error::Result<Self> {
        Self::load_from(None)
    }

    /// Load settings from a specific path, or default location if None.
    ///
    /// Environment variables overlay the file afterwards, so exported
    /// credentials always win over anything on disk.
    pub fn load_from(path: Option<&PathBuf>) -> crate::error::Result<Self> {
        let config_path = match path {
            Some(p) => p.clone(),
            None => Self::default_config_path(),
        };

        let mut settings = if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            toml::from_str(&content)?
        } else {
            Settings::default()
        };

        settings.apply_env();
        Ok(settings)
    }

    /// Overlay credentials from the environment.
    ///
    /// Variable names are kept compatible with the original deployment:
    /// OPENROUTER_API_KEY, OPENROUTER_MODEL, WEATHER_API_KEY.
    pub fn apply_env(&mut self) {
        if let Ok(key) = std::env::var("OPENROUTER_API_KEY") {
            if !key.is_empty() {
                self.completion.api_key = Some(key);
            }
        }
        if let Ok(model) = std::env::var("OPENROUTER_MODEL") {
            if !model.is_empty() {
                self.completion.model = Some(model);
            }
        }
        if let Ok(key) = std::env::var("WEATHER_API_KEY") {
            if !key.is_empty() {
                self.weather.api_key = Some(key);
            }
        }
    }

    /// Get the default configuration file path.
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("weathermind")
            .join("config.toml")
    }
}
