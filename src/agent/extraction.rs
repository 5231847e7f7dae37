//! City extraction from free-form queries.
//!
//! Three ordered tiers, first success wins:
//! 1. Inference - ask the completion model to name the city.
//! 2. Marker fallback - a preposition/marker token ("in london", "pune me")
//!    followed by an alphabetic token.
//! 3. Token fallback - the first alphabetic token that is not a stop word.
//!
//! The token tier deliberately takes the *first* surviving token rather
//! than the last: in these query patterns ("delhi ka mausam kaisa hai")
//! the city usually appears early.

use crate::completion::CompletionClient;
use crate::config::{LanguageSettings, Prompts};
use crate::error::{Result, WeatherMindError};
use regex::Regex;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tracing::{debug, instrument};

/// Multi-tier city extractor.
pub struct CityExtractor {
    client: Arc<dyn CompletionClient>,
    prompts: Prompts,
    marker_re: Regex,
    token_re: Regex,
    punct_re: Regex,
    space_re: Regex,
    stop_words: HashSet<String>,
}

impl CityExtractor {
    /// Create an extractor over a completion client and language data.
    pub fn new(
        client: Arc<dyn CompletionClient>,
        prompts: Prompts,
        language: &LanguageSettings,
    ) -> Result<Self> {
        let markers = language
            .city_markers
            .iter()
            .map(|m| regex::escape(m))
            .collect::<Vec<_>>()
            .join("|");

        let marker_re = Regex::new(&format!(r"(?:{})\s+([a-zA-Z]{{3,}})", markers))
            .map_err(|e| WeatherMindError::Config(format!("Bad city marker list: {}", e)))?;
        let token_re = Regex::new(r"\b[a-zA-Z]{3,}\b")
            .map_err(|e| WeatherMindError::Config(e.to_string()))?;
        let punct_re =
            Regex::new(r"[^\w\s]").map_err(|e| WeatherMindError::Config(e.to_string()))?;
        let space_re = Regex::new(r"\s+").map_err(|e| WeatherMindError::Config(e.to_string()))?;

        Ok(Self {
            client,
            prompts,
            marker_re,
            token_re,
            punct_re,
            space_re,
            stop_words: language.stop_words.iter().cloned().collect(),
        })
    }

    /// Extract a best-guess city name from a query. `None` means total
    /// extraction failure.
    #[instrument(skip(self), fields(query = %query))]
    pub async fn extract(&self, query: &str) -> Option<String> {
        if let Some(city) = self.infer(query).await {
            debug!("Inference tier extracted '{}'", city);
            return Some(city);
        }

        let lowered = query.to_lowercase();

        if let Some(city) = self.marker_fallback(&lowered) {
            debug!("Marker tier extracted '{}'", city);
            return Some(city);
        }

        let city = self.token_fallback(&lowered);
        if let Some(ref city) = city {
            debug!("Token tier extracted '{}'", city);
        }
        city
    }

    /// Tier 1: completion-model inference at zero temperature.
    async fn infer(&self, query: &str) -> Option<String> {
        let mut vars = HashMap::new();
        vars.insert("query".to_string(), query.to_string());
        let prompt = self
            .prompts
            .render_with_custom(&self.prompts.extraction, &vars);

        let reply = match self.client.complete(&prompt, 0.0).await {
            Ok(reply) => reply,
            Err(e) => {
                debug!("Inference tier unavailable: {}", e);
                return None;
            }
        };

        let reply = reply.trim();
        if reply.is_empty() || reply.to_uppercase() == "NONE" {
            return None;
        }

        // Strip punctuation, collapse whitespace, and reject short noise.
        let cleaned = self.punct_re.replace_all(reply, "");
        let cleaned = self.space_re.replace_all(cleaned.trim(), " ");
        if cleaned.chars().count() >= 3 {
            Some(title_case(&cleaned))
        } else {
            None
        }
    }

    /// Tier 2: marker token followed by an alphabetic token of >= 3 letters.
    fn marker_fallback(&self, lowered: &str) -> Option<String> {
        self.marker_re
            .captures(lowered)
            .map(|caps| title_case(&caps[1]))
    }

    /// Tier 3: first alphabetic token of >= 3 letters that is not a stop word.
    fn token_fallback(&self, lowered: &str) -> Option<String> {
        self.token_re
            .find_iter(lowered)
            .map(|m| m.as_str())
            .find(|t| !self.stop_words.contains(*t))
            .map(title_case)
    }
}

/// Title-case each whitespace-separated word ("new york" -> "New York").
pub fn title_case(s: &str) -> String {
    s.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
