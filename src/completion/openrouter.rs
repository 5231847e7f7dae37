//! OpenRouter-backed completion client.
//!
//! OpenRouter exposes an OpenAI-compatible chat completions API, so the
//! client is the async-openai client with a custom base URL and a bounded
//! request timeout.

use super::CompletionClient;
use crate::config::CompletionSettings;
use crate::error::{Result, WeatherMindError};
use async_openai::config::OpenAIConfig;
use async_openai::types::{
    ChatCompletionRequestMessage, ChatCompletionRequestUserMessageArgs,
    CreateChatCompletionRequestArgs,
};
use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, instrument};

/// Completion client for the OpenRouter chat completions endpoint.
pub struct OpenRouterClient {
    client: async_openai::Client<OpenAIConfig>,
    api_key: Option<String>,
    model: Option<String>,
}

impl OpenRouterClient {
    /// Create a client from completion settings.
    ///
    /// Missing credentials are not an error here: they surface as a
    /// `Config` error on the first `complete` call, before any HTTP
    /// request, so deterministic fallbacks stay reachable.
    pub fn new(settings: &CompletionSettings) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(settings.timeout_seconds))
            .build()?;

        let config = OpenAIConfig::new()
            .with_api_base(&settings.api_base)
            .with_api_key(settings.api_key.clone().unwrap_or_default());

        let client = async_openai::Client::with_config(config).with_http_client(http_client);

        Ok(Self {
            client,
            api_key: settings.api_key.clone(),
            model: settings.model.clone(),
        })
    }

    /// Fail fast when credentials are missing, before attempting a call.
    fn require_config(&self) -> Result<&str> {
        if self.api_key.as_deref().map_or(true, |k| k.is_empty()) {
            return Err(WeatherMindError::Config(
                "OPENROUTER_API_KEY not set. Set it with: export OPENROUTER_API_KEY='...'"
                    .to_string(),
            ));
        }
        match self.model.as_deref() {
            Some(m) if !m.is_empty() => Ok(m),
            _ => Err(WeatherMindError::Config(
                "OPENROUTER_MODEL not set. Set it with: export OPENROUTER_MODEL='...'".to_string(),
            )),
        }
    }
}

#[async_trait]
impl CompletionClient for OpenRouterClient {
    #[instrument(skip(self, prompt), fields(temperature = temperature))]
    async fn complete(&self, prompt: &str, temperature: f32) -> Result<String> {
        let model = self.require_config()?;

        let messages: Vec<ChatCompletionRequestMessage> =
            vec![ChatCompletionRequestUserMessageArgs::default()
                .content(prompt)
                .build()
                .map_err(|e| WeatherMindError::Upstream(e.to_string()))?
                .into()];

        let request = CreateChatCompletionRequestArgs::default()
            .model(model)
            .messages(messages)
            .temperature(temperature)
            .build()
            .map_err(|e| WeatherMindError::Upstream(e.to_string()))?;

        let response = self
            .client
            .chat()
            .create(request)
            .await
            .map_err(|e| WeatherMindError::Upstream(format!("Completion API error: {}", e)))?;

        let content = response
            .choices
            .first()
            .and_then(|c| c.message.content.as_ref())
            .ok_or_else(|| {
                WeatherMindError::Upstream("Empty response from completion API".to_string())
            })?;

        debug!("Completion returned {} chars", content.len());
        Ok(content.trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CompletionSettings;

    fn settings(api_key: Option<&str>, model: Option<&str>) -> CompletionSettings {
        CompletionSettings {
            api_key: api_key.map(|s| s.to_string()),
            model: model.map(|s| s.to_string()),
            ..CompletionSettings::default()
        }
    }

    #[tokio::test]
    async fn test_missing_api_key_fails_fast() {
        let client = OpenRouterClient::new(&settings(None, Some("some-model"))).unwrap();
        let err = client.complete("hi", 0.0).await.unwrap_err();
        assert!(matches!(err, WeatherMindError::Config(_)));
        assert!(err.to_string().contains("OPENROUTER_API_KEY"));
    }

    #[tokio::test]
    async fn test_missing_model_fails_fast() {
        let client = OpenRouterClient::new(&settings(Some("key"), None)).unwrap();
        let err = client.complete("hi", 0.0).await.unwrap_err();
        assert!(matches!(err, WeatherMindError::Config(_)));
        assert!(err.to_string().contains("OPENROUTER_MODEL"));
    }

    #[tokio::test]
    async fn test_empty_credentials_treated_as_missing() {
        let client = OpenRouterClient::new(&settings(Some(""), Some("m"))).unwrap();
        let err = client.complete("hi", 0.0).await.unwrap_err();
        assert!(matches!(err, WeatherMindError::Config(_)));
    }
}
