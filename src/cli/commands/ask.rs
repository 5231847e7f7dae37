//! Ask command implementation.

use crate::agent::WeatherAgent;
use crate::cli::Output;
use crate::config::Settings;
use anyhow::Result;

/// Run a single question through the agent and print the reply.
pub async fn run_ask(question: &str, settings: Settings) -> Result<()> {
    let agent = WeatherAgent::from_settings(settings)?;

    let spinner = Output::spinner("Checking the weather...");
    let reply = agent.run(question).await;
    spinner.finish_and_clear();

    println!("{}", reply);
    Ok(())
}
