//! The orchestrating weather agent.
//!
//! Sequences extraction, classification, lookup, and formatting over a
//! single request. Every upstream failure is converted into a fixed
//! user-facing sentence; nothing propagates past `run`.

use super::{CityExtractor, CountryClassifier, ResponseFormatter, WeatherContext};
use crate::completion::{CompletionClient, OpenRouterClient};
use crate::config::{Prompts, Settings};
use crate::error::Result;
use crate::weather::{OpenWeatherClient, WeatherProvider};
use std::sync::Arc;
use tracing::{info, instrument};

/// Reply for empty or unusable input.
pub const INVALID_INPUT_REPLY: &str = "Please ask a valid weather question.";

/// Reply when no city could be extracted.
pub const UNKNOWN_CITY_REPLY: &str = "Sorry, I couldn't understand which city's weather you want.";

/// Reply when the weather provider had nothing usable for a city.
pub fn lookup_failure_reply(city: &str) -> String {
    format!("Sorry, I couldn't fetch live weather for {}.", city)
}

/// End-to-end weather agent.
pub struct WeatherAgent {
    extractor: CityExtractor,
    classifier: CountryClassifier,
    formatter: ResponseFormatter,
    provider: Arc<dyn WeatherProvider>,
}

impl WeatherAgent {
    /// Wire up the real clients from settings.
    pub fn from_settings(settings: Settings) -> Result<Self> {
        let client: Arc<dyn CompletionClient> =
            Arc::new(OpenRouterClient::new(&settings.completion)?);
        let provider: Arc<dyn WeatherProvider> = Arc::new(OpenWeatherClient::new(&settings.weather)?);
        Self::with_components(client, provider, &settings)
    }

    /// Create an agent with custom components (e.g. test doubles).
    pub fn with_components(
        client: Arc<dyn CompletionClient>,
        provider: Arc<dyn WeatherProvider>,
        settings: &Settings,
    ) -> Result<Self> {
        let prompts = Prompts::load(
            settings.prompts.custom_dir.as_deref(),
            Some(&settings.prompts.variables),
        )?;

        Ok(Self {
            extractor: CityExtractor::new(client.clone(), prompts.clone(), &settings.language)?,
            classifier: CountryClassifier::new(client.clone(), prompts.clone()),
            formatter: ResponseFormatter::new(
                client,
                prompts,
                settings.completion.reply_temperature,
            ),
            provider,
        })
    }

    /// Answer a single weather question. Always returns a reply string,
    /// never an error.
    #[instrument(skip(self), fields(query = %query))]
    pub async fn run(&self, query: &str) -> String {
        if query.trim().is_empty() {
            return INVALID_INPUT_REPLY.to_string();
        }

        let Some(city) = self.extractor.extract(query).await else {
            info!("No city extractable from query");
            return UNKNOWN_CITY_REPLY.to_string();
        };

        // A country name still gets a mirrored-language reply acknowledging
        // the ambiguity; the weather provider is never consulted for it.
        if self.classifier.is_country(&city).await {
            info!("'{}' classified as a country", city);
            return self.formatter.format(query, &WeatherContext::CountryName).await;
        }

        match self.provider.current(&city).await {
            Ok(report) => {
                self.formatter
                    .format(query, &WeatherContext::Report(report))
                    .await
            }
            Err(e) => {
                info!("Weather lookup failed for '{}': {}", city, e);
                lookup_failure_reply(&city)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::WeatherMindError;
    use crate::weather::WeatherReport;
    use async_trait::async_trait;
    use std::collections::VecDeque;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Mutex;

    /// Completion stub that pops scripted replies in call order; an empty
    /// script (or a None entry) yields an upstream error.
    struct ScriptedCompletion {
        replies: Mutex<VecDeque<Option<String>>>,
    }

    impl ScriptedCompletion {
        fn new(replies: Vec<Option<&str>>) -> Arc<Self> {
            Arc::new(Self {
                replies: Mutex::new(
                    replies
                        .into_iter()
                        .map(|r| r.map(|s| s.to_string()))
                        .collect(),
                ),
            })
        }

        fn offline() -> Arc<Self> {
            Self::new(Vec::new())
        }
    }

    #[async_trait]
    impl CompletionClient for ScriptedCompletion {
        async fn complete(&self, _prompt: &str, _temperature: f32) -> crate::error::Result<String> {
            match self.replies.lock().unwrap().pop_front() {
                Some(Some(reply)) => Ok(reply),
                _ => Err(WeatherMindError::Upstream("stubbed failure".to_string())),
            }
        }
    }

    /// Weather stub returning one fixed outcome and recording whether it
    /// was called at all.
    struct StubWeather {
        report: Option<WeatherReport>,
        called: AtomicBool,
    }

    impl StubWeather {
        fn healthy(report: WeatherReport) -> Arc<Self> {
            Arc::new(Self {
                report: Some(report),
                called: AtomicBool::new(false),
            })
        }

        fn failing() -> Arc<Self> {
            Arc::new(Self {
                report: None,
                called: AtomicBool::new(false),
            })
        }
    }

    #[async_trait]
    impl WeatherProvider for StubWeather {
        async fn current(&self, city: &str) -> crate::error::Result<WeatherReport> {
            self.called.store(true, Ordering::SeqCst);
            self.report
                .clone()
                .ok_or_else(|| WeatherMindError::Lookup(format!("City not found: {}", city)))
        }
    }

    fn tokyo_report() -> WeatherReport {
        WeatherReport {
            city: "Tokyo".to_string(),
            temperature_c: 18,
            feels_like_c: 16,
            condition: "clear sky".to_string(),
        }
    }

    fn agent(
        completion: Arc<ScriptedCompletion>,
        weather: Arc<StubWeather>,
    ) -> WeatherAgent {
        WeatherAgent::with_components(completion, weather, &Settings::default()).unwrap()
    }

    #[tokio::test]
    async fn test_empty_input_rejected() {
        let agent = agent(ScriptedCompletion::offline(), StubWeather::failing());
        assert_eq!(agent.run("").await, INVALID_INPUT_REPLY);
        assert_eq!(agent.run("   \n").await, INVALID_INPUT_REPLY);
    }

    #[tokio::test]
    async fn test_unextractable_query() {
        let agent = agent(ScriptedCompletion::offline(), StubWeather::failing());
        assert_eq!(agent.run("kal ka mausam kaisa hai").await, UNKNOWN_CITY_REPLY);
    }

    #[tokio::test]
    async fn test_deterministic_path_end_to_end() {
        // Completion fully offline: extraction uses the marker tier,
        // classification fails open, formatting uses the template.
        let weather = StubWeather::healthy(tokyo_report());
        let agent = agent(ScriptedCompletion::offline(), weather.clone());

        let reply = agent.run("what's the weather in Tokyo today").await;
        assert_eq!(
            reply,
            "The current temperature in Tokyo is 18°C with clear sky."
        );
        assert!(weather.called.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn test_generated_reply_mentions_city_and_temperature() {
        // Scripted calls: extraction, classification, formatting.
        let completion = ScriptedCompletion::new(vec![
            Some("Tokyo"),
            Some("NO"),
            Some("It's 18°C in Tokyo right now with clear skies!"),
        ]);
        let agent = agent(completion, StubWeather::healthy(tokyo_report()));

        let reply = agent.run("what's the weather in Tokyo today").await;
        assert!(reply.contains("Tokyo"));
        assert!(reply.contains("18"));
    }

    #[tokio::test]
    async fn test_lookup_failure_uses_extracted_name() {
        let completion = ScriptedCompletion::new(vec![Some("Atlantis"), Some("NO")]);
        let agent = agent(completion, StubWeather::failing());

        assert_eq!(
            agent.run("weather of atlantis").await,
            "Sorry, I couldn't fetch live weather for Atlantis."
        );
    }

    #[tokio::test]
    async fn test_country_name_skips_weather_lookup() {
        // Extraction finds "India", classifier answers YES, formatter
        // generates the acknowledgement.
        let completion = ScriptedCompletion::new(vec![
            Some("India"),
            Some("YES"),
            Some("India ek desh hai, koi city batao!"),
        ]);
        let weather = StubWeather::healthy(tokyo_report());
        let agent = agent(completion, weather.clone());

        let reply = agent.run("India ka weather batao").await;
        assert_eq!(reply, "India ek desh hai, koi city batao!");
        assert!(!weather.called.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn test_country_path_template_fallback() {
        // Formatter call fails after a YES classification.
        let completion = ScriptedCompletion::new(vec![Some("India"), Some("YES")]);
        let agent = agent(completion, StubWeather::failing());

        assert_eq!(
            agent.run("India ka weather batao").await,
            "The current temperature in  is N/A°C with a country name."
        );
    }
}
