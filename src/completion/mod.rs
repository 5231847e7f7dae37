//! Text-completion client abstraction.
//!
//! Everything that talks to a language model goes through [`CompletionClient`],
//! so the extraction, classification, and formatting components can be tested
//! against scripted stand-ins.

mod openrouter;

pub use openrouter::OpenRouterClient;

use crate::error::Result;
use async_trait::async_trait;

/// Trait for prompt completion.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Send a prompt and return the generated text of the first choice,
    /// trimmed. No retries are performed; callers decide fallback behavior.
    async fn complete(&self, prompt: &str, temperature: f32) -> Result<String>;
}
