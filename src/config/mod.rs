//! Configuration module for WeatherMind.
//!
//! Handles loading and managing application settings and prompt templates.

mod prompts;
mod settings;

pub use prompts::Prompts;
pub use settings::{
    CompletionSettings, GeneralSettings, LanguageSettings, PromptSettings, ServerSettings,
    Settings, WeatherSettings,
};
