//! Final reply generation.
//!
//! The reply prompt instructs the model to mirror the exact language,
//! script, and tone of the user's question. When the completion call fails
//! the formatter falls back to one deterministic English sentence - no
//! further mirroring is attempted.

use crate::completion::CompletionClient;
use crate::config::Prompts;
use crate::weather::WeatherReport;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, instrument};

/// What the formatter is replying about: a real weather report, or the
/// marker that the extracted name was a country rather than a city.
#[derive(Debug, Clone)]
pub enum WeatherContext {
    Report(WeatherReport),
    CountryName,
}

impl WeatherContext {
    /// Prompt fields in render order: city, temp, feels-like, condition.
    fn prompt_fields(&self) -> (String, String, String, String) {
        match self {
            WeatherContext::Report(report) => (
                report.city.clone(),
                report.temperature_c.to_string(),
                report.feels_like_c.to_string(),
                report.condition.clone(),
            ),
            WeatherContext::CountryName => (
                String::new(),
                "N/A".to_string(),
                "N/A".to_string(),
                "a country name".to_string(),
            ),
        }
    }
}

/// Generates the user-facing reply.
pub struct ResponseFormatter {
    client: Arc<dyn CompletionClient>,
    prompts: Prompts,
    temperature: f32,
}

impl ResponseFormatter {
    /// Create a formatter. `temperature` is non-zero so phrasing stays
    /// natural; numbers are pinned by the prompt, not the temperature.
    pub fn new(client: Arc<dyn CompletionClient>, prompts: Prompts, temperature: f32) -> Self {
        Self {
            client,
            prompts,
            temperature,
        }
    }

    /// Produce the final reply for a query, falling back to the
    /// deterministic sentence on any completion failure.
    #[instrument(skip(self, query))]
    pub async fn format(&self, query: &str, context: &WeatherContext) -> String {
        let (city, temp, feels_like, condition) = context.prompt_fields();

        let mut vars = HashMap::new();
        vars.insert("query".to_string(), query.to_string());
        vars.insert("city".to_string(), city);
        vars.insert("temp".to_string(), temp);
        vars.insert("feels_like".to_string(), feels_like);
        vars.insert("condition".to_string(), condition);

        let prompt = self.prompts.render_with_custom(&self.prompts.reply, &vars);

        match self.client.complete(&prompt, self.temperature).await {
            Ok(reply) => reply,
            Err(e) => {
                debug!("Reply generation unavailable, using template: {}", e);
                fallback_sentence(context)
            }
        }
    }
}

/// The sole deterministic fallback sentence. Temperature and condition are
/// reproduced exactly as received.
pub fn fallback_sentence(context: &WeatherContext) -> String {
    let (city, temp, _, condition) = context.prompt_fields();
    format!(
        "The current temperature in {} is {}°C with {}.",
        city, temp, condition
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::WeatherMindError;
    use async_trait::async_trait;

    struct FixedCompletion(Option<String>);

    #[async_trait]
    impl CompletionClient for FixedCompletion {
        async fn complete(&self, _prompt: &str, _temperature: f32) -> crate::error::Result<String> {
            match &self.0 {
                Some(s) => Ok(s.clone()),
                None => Err(WeatherMindError::Upstream("stubbed failure".to_string())),
            }
        }
    }

    fn tokyo() -> WeatherContext {
        WeatherContext::Report(WeatherReport {
            city: "Tokyo".to_string(),
            temperature_c: 18,
            feels_like_c: 16,
            condition: "clear sky".to_string(),
        })
    }

    #[tokio::test]
    async fn test_generated_reply_passes_through() {
        let formatter =
            ResponseFormatter::new(Arc::new(FixedCompletion(Some("Tokyo me 18°C hai!".to_string()))), Prompts::default(), 0.5);
        let reply = formatter.format("tokyo ka weather", &tokyo()).await;
        assert_eq!(reply, "Tokyo me 18°C hai!");
    }

    #[tokio::test]
    async fn test_fallback_sentence_is_exact() {
        let formatter =
            ResponseFormatter::new(Arc::new(FixedCompletion(None)), Prompts::default(), 0.5);
        let reply = formatter.format("what's the weather in Tokyo", &tokyo()).await;
        assert_eq!(
            reply,
            "The current temperature in Tokyo is 18°C with clear sky."
        );
    }

    #[test]
    fn test_fallback_preserves_numbers_verbatim() {
        let context = WeatherContext::Report(WeatherReport {
            city: "Oslo".to_string(),
            temperature_c: -7,
            feels_like_c: -12,
            condition: "light snow".to_string(),
        });
        assert_eq!(
            fallback_sentence(&context),
            "The current temperature in Oslo is -7°C with light snow."
        );
    }

    #[test]
    fn test_country_marker_fallback() {
        assert_eq!(
            fallback_sentence(&WeatherContext::CountryName),
            "The current temperature in  is N/A°C with a country name."
        );
    }
}
