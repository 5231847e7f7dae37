//! Interactive chat command.

use crate::agent::{is_weather_query, WeatherAgent};
use crate::cli::Output;
use crate::config::Settings;
use anyhow::Result;
use console::style;
use std::io::{self, BufRead, Write};

/// Run the interactive chat loop.
///
/// Each message is answered independently; the agent keeps no conversation
/// state. Messages that don't look weather-related get a gentle hint before
/// being answered anyway.
pub async fn run_chat(settings: Settings) -> Result<()> {
    let keywords = settings.language.weather_keywords.clone();
    let agent = WeatherAgent::from_settings(settings)?;

    println!("\n{}", style("WeatherMind Chat").bold().cyan());
    println!(
        "{}\n",
        style("Ask about the weather in any language. Type 'exit' to quit.").dim()
    );

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("{} ", style("You:").green().bold());
        stdout.flush()?;

        let mut input = String::new();
        if stdin.lock().read_line(&mut input)? == 0 {
            break;
        }

        let input = input.trim();

        if input.is_empty() {
            continue;
        }

        if input.eq_ignore_ascii_case("exit") || input.eq_ignore_ascii_case("quit") {
            Output::info("Goodbye!");
            break;
        }

        if !is_weather_query(input, &keywords) {
            Output::info("That doesn't look like a weather question, but let me try.");
        }

        let reply = agent.run(input).await;
        println!("\n{} {}\n", style("WeatherMind:").cyan().bold(), reply);
    }

    Ok(())
}
