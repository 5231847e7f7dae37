//! Doctor command - verify configuration and credentials.

use crate::cli::Output;
use crate::config::Settings;
use console::style;

/// Check result for a single item.
#[derive(Debug)]
pub struct CheckResult {
    pub name: String,
    pub status: CheckStatus,
    pub message: String,
    pub hint: Option<String>,
}

#[derive(Debug, PartialEq)]
pub enum CheckStatus {
    Ok,
    Warning,
    Error,
}

impl CheckResult {
    fn ok(name: &str, message: &str) -> Self {
        Self {
            name: name.to_string(),
            status: CheckStatus::Ok,
            message: message.to_string(),
            hint: None,
        }
    }

    fn warning(name: &str, message: &str, hint: &str) -> Self {
        Self {
            name: name.to_string(),
            status: CheckStatus::Warning,
            message: message.to_string(),
            hint: Some(hint.to_string()),
        }
    }

    fn error(name: &str, message: &str, hint: &str) -> Self {
        Self {
            name: name.to_string(),
            status: CheckStatus::Error,
            message: message.to_string(),
            hint: Some(hint.to_string()),
        }
    }

    fn print(&self) {
        let icon = match self.status {
            CheckStatus::Ok => style("✓").green(),
            CheckStatus::Warning => style("!").yellow(),
            CheckStatus::Error => style("✗").red(),
        };

        println!("  {} {} - {}", icon, style(&self.name).bold(), self.message);

        if let Some(hint) = &self.hint {
            println!("    {} {}", style("→").dim(), style(hint).dim());
        }
    }
}

/// Run all diagnostic checks.
pub fn run_doctor(settings: &Settings) -> anyhow::Result<()> {
    Output::header("WeatherMind Doctor");
    println!();
    println!("Checking configuration and credentials...\n");

    let mut checks = Vec::new();

    println!("{}", style("Completion Service").bold());
    let key_check = check_credential(
        "OPENROUTER_API_KEY",
        settings.completion.api_key.as_deref(),
        "Set with: export OPENROUTER_API_KEY='...'",
    );
    key_check.print();
    checks.push(key_check);
    let model_check = check_credential(
        "OPENROUTER_MODEL",
        settings.completion.model.as_deref(),
        "Set with: export OPENROUTER_MODEL='...' (any OpenRouter model id)",
    );
    model_check.print();
    checks.push(model_check);

    println!();

    println!("{}", style("Weather Provider").bold());
    let weather_check = check_weather_key(settings);
    weather_check.print();
    checks.push(weather_check);

    println!();

    println!("{}", style("Configuration").bold());
    let config_check = check_config_file();
    config_check.print();
    checks.push(config_check);

    println!();

    let errors = checks.iter().filter(|c| c.status == CheckStatus::Error).count();
    let warnings = checks.iter().filter(|c| c.status == CheckStatus::Warning).count();

    if errors > 0 {
        Output::error(&format!(
            "{} error(s) found. The agent will fall back to canned replies until fixed.",
            errors
        ));
    } else if warnings > 0 {
        Output::warning(&format!("All checks passed with {} warning(s).", warnings));
    } else {
        Output::success("All checks passed! WeatherMind is ready to use.");
    }

    Ok(())
}

/// Check a completion credential, masking any configured value.
fn check_credential(name: &str, value: Option<&str>, hint: &str) -> CheckResult {
    match value {
        Some(v) if !v.is_empty() => CheckResult::ok(name, &format!("configured ({})", mask(v))),
        Some(_) => CheckResult::error(name, "empty", hint),
        None => CheckResult::error(name, "not set", hint),
    }
}

/// Check the weather provider key. A missing key is a warning rather than
/// an error: lookups return a polite failure reply instead of crashing.
fn check_weather_key(settings: &Settings) -> CheckResult {
    match settings.weather.api_key.as_deref() {
        Some(v) if !v.is_empty() => {
            CheckResult::ok("WEATHER_API_KEY", &format!("configured ({})", mask(v)))
        }
        _ => CheckResult::warning(
            "WEATHER_API_KEY",
            "not set",
            "Set with: export WEATHER_API_KEY='...' (OpenWeatherMap key)",
        ),
    }
}

/// Check if config file exists.
fn check_config_file() -> CheckResult {
    let config_path = Settings::default_config_path();
    if config_path.exists() {
        CheckResult::ok("Config file", &format!("{}", config_path.display()))
    } else {
        CheckResult::warning(
            "Config file",
            "using defaults",
            "Create one at the path above to customize prompts and language data",
        )
    }
}

/// Mask a secret, keeping a short prefix and suffix.
fn mask(value: &str) -> String {
    if value.len() > 10 {
        format!("{}...{}", &value[..4], &value[value.len() - 3..])
    } else {
        "***".to_string()
    }
}
