//! The weather agent pipeline.
//!
//! A single request flows through four stages, each one terminal at first
//! failure: city extraction, country classification, weather lookup, and
//! reply formatting. Everything that touches the completion service degrades
//! gracefully - classification fails open toward "treat as city", and the
//! formatter falls back to a deterministic sentence.

mod classify;
mod extraction;
mod format;
mod intent;
mod runner;

pub use classify::CountryClassifier;
pub use extraction::CityExtractor;
pub use format::{ResponseFormatter, WeatherContext};
pub use intent::is_weather_query;
pub use runner::{lookup_failure_reply, WeatherAgent, INVALID_INPUT_REPLY, UNKNOWN_CITY_REPLY};
