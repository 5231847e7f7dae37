//! Weather-intent detection.
//!
//! A cheap keyword scan used by the interactive chat to hint when a message
//! does not look weather-related. The agent itself never gates on this.

/// Check whether a message looks like a weather question.
pub fn is_weather_query(message: &str, keywords: &[String]) -> bool {
    let lowered = message.to_lowercase();
    keywords.iter().any(|k| lowered.contains(k.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LanguageSettings;

    #[test]
    fn test_detects_weather_keywords() {
        let keywords = LanguageSettings::default().weather_keywords;
        assert!(is_weather_query("What's the WEATHER like?", &keywords));
        assert!(is_weather_query("will it rain tomorrow", &keywords));
        assert!(is_weather_query("is it hot in chennai", &keywords));
    }

    #[test]
    fn test_ignores_unrelated_messages() {
        let keywords = LanguageSettings::default().weather_keywords;
        assert!(!is_weather_query("book me a flight to pune", &keywords));
        assert!(!is_weather_query("", &keywords));
    }
}
