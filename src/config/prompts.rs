//! Prompt templates for WeatherMind.
//!
//! Prompts can be customized by placing a TOML file in the custom prompts
//! directory. Templates use {{variable}} placeholders.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Collection of all prompt templates.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Prompts {
    /// Prompt asking the model to pull a city name out of the query.
    pub extraction: String,
    /// Strict yes/no prompt asking whether a name is a country.
    pub country: String,
    /// Prompt generating the final language-mirrored reply.
    pub reply: String,
    /// Custom variables from config, available in all prompts.
    #[serde(skip)]
    pub variables: std::collections::HashMap<String, String>,
}

impl Default for Prompts {
    fn default() -> Self {
        Self {
            extraction: r#"The user is asking about weather.

Extract the CITY NAME mentioned in the input.
- City can be anywhere in the world
- Ignore weather words, time words, and conditions
- Respond ONLY with the city name
- If no city is mentioned, respond with NONE

User input:
"{{query}}""#
                .to_string(),

            country: r#"Is "{{name}}" a COUNTRY (not a city)?

Respond ONLY with YES or NO."#
                .to_string(),

            reply: r#"You are a helpful assistant like ChatGPT.

VERY IMPORTANT:
- Reply in EXACTLY the same language, script, and tone as the user's input
- If user uses Hinglish, reply in Hinglish
- If user uses Hindi, reply in Hindi
- If user uses English, reply in English
- Do NOT switch language
- Be short, natural, and human-like
- Do NOT translate city names
- Do NOT change numbers

User input:
"{{query}}"

Weather data:
City: {{city}}
Temperature: {{temp}}°C
Feels like: {{feels_like}}°C
Condition: {{condition}}"#
                .to_string(),

            variables: std::collections::HashMap::new(),
        }
    }
}

impl Prompts {
    /// Load prompts from the defaults, with optional custom directory and variables.
    pub fn load(
        custom_dir: Option<&str>,
        custom_variables: Option<&std::collections::HashMap<String, String>>,
    ) -> crate::error::Result<Self> {
        let mut prompts = Prompts::default();

        if let Some(vars) = custom_variables {
            prompts.variables = vars.clone();
        }

        if let Some(dir) = custom_dir {
            let custom_path = PathBuf::from(shellexpand::tilde(dir).to_string());

            let prompts_path = custom_path.join("prompts.toml");
            if prompts_path.exists() {
                let content = std::fs::read_to_string(&prompts_path)?;
                let vars = prompts.variables;
                prompts = toml::from_str(&content)?;
                prompts.variables = vars;
            }
        }

        Ok(prompts)
    }

    /// Render a prompt template with the given variables.
    pub fn render(template: &str, vars: &std::collections::HashMap<String, String>) -> String {
        let mut result = template.to_string();
        for (key, value) in vars {
            result = result.replace(&format!("{{{{{}}}}}", key), value);
        }
        result
    }

    /// Render a prompt template with both provided variables and custom config variables.
    /// Provided variables take precedence over custom config variables.
    pub fn render_with_custom(
        &self,
        template: &str,
        vars: &std::collections::HashMap<String, String>,
    ) -> String {
        let mut merged = self.variables.clone();
        for (key, value) in vars {
            merged.insert(key.clone(), value.clone());
        }
        Self::render(template, &merged)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_prompts() {
        let prompts = Prompts::default();
        assert!(prompts.extraction.contains("NONE"));
        assert!(prompts.country.contains("YES or NO"));
        assert!(prompts.reply.contains("Do NOT translate city names"));
    }

    #[test]
    fn test_render_template() {
        let template = "Weather for {{city}}: {{temp}}°C";
        let mut vars = std::collections::HashMap::new();
        vars.insert("city".to_string(), "Pune".to_string());
        vars.insert("temp".to_string(), "31".to_string());

        let result = Prompts::render(template, &vars);
        assert_eq!(result, "Weather for Pune: 31°C");
    }

    #[test]
    fn test_custom_variables_lose_to_provided() {
        let mut prompts = Prompts::default();
        prompts
            .variables
            .insert("name".to_string(), "default".to_string());

        let mut vars = std::collections::HashMap::new();
        vars.insert("name".to_string(), "France".to_string());

        let result = prompts.render_with_custom("Is {{name}} a country?", &vars);
        assert_eq!(result, "Is France a country?");
    }
}
