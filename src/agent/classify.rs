//! Country-vs-city classification.

use crate::completion::CompletionClient;
use crate::config::Prompts;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, instrument};

/// Asks the completion model whether a name denotes a country.
///
/// The check fails open: any completion error, and any answer other than an
/// exact "YES", resolves to "treat as city". A weather lookup that later
/// fails is better than silently refusing one.
pub struct CountryClassifier {
    client: Arc<dyn CompletionClient>,
    prompts: Prompts,
}

impl CountryClassifier {
    /// Create a classifier over a completion client.
    pub fn new(client: Arc<dyn CompletionClient>, prompts: Prompts) -> Self {
        Self { client, prompts }
    }

    /// Return true iff the model answers exactly "YES" (case-insensitive).
    #[instrument(skip(self), fields(name = %name))]
    pub async fn is_country(&self, name: &str) -> bool {
        let mut vars = HashMap::new();
        vars.insert("name".to_string(), name.to_string());
        let prompt = self.prompts.render_with_custom(&self.prompts.country, &vars);

        match self.client.complete(&prompt, 0.0).await {
            Ok(reply) => reply.trim().to_uppercase() == "YES",
            Err(e) => {
                debug!("Classification unavailable, treating '{}' as city: {}", name, e);
                false
            }
        }
    }
}
