//! WeatherMind - Conversational Weather Agent
//!
//! A weather chatbot that answers natural-language questions and replies in
//! the user's own language, script, and tone (English, Hindi, Hinglish, ...).
//!
//! # Overview
//!
//! WeatherMind lets you:
//! - Ask about the weather in free-form, mixed-language text
//! - Get live conditions from OpenWeatherMap for the city it finds
//! - Receive a short reply mirrored to the language of your question
//! - Serve the whole pipeline over a small HTTP API
//!
//! # Architecture
//!
//! The library is organized into several modules:
//!
//! - `config` - Configuration management and prompt templates
//! - `completion` - Text-completion client (OpenRouter)
//! - `weather` - Weather provider abstraction (OpenWeatherMap)
//! - `agent` - City extraction, country classification, response
//!   formatting, and the orchestrating agent
//! - `cli` - Command-line interface and the HTTP server
//!
//! # Example
//!
//! ```rust,no_run
//! use weathermind::agent::WeatherAgent;
//! use weathermind::config::Settings;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let settings = Settings::load()?;
//!     let agent = WeatherAgent::from_settings(settings)?;
//!
//!     let reply = agent.run("what's the weather in Tokyo today").await;
//!     println!("{}", reply);
//!
//!     Ok(())
//! }
//! ```

pub mod agent;
pub mod cli;
pub mod completion;
pub mod config;
pub mod error;
pub mod weather;

pub use error::{Result, WeatherMindError};
