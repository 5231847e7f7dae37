//! CLI module for WeatherMind.

pub mod commands;
mod output;

pub use output::Output;

use clap::{Parser, Subcommand};

/// WeatherMind - Conversational Weather Agent
///
/// Ask about the weather in free-form, mixed-language text and get a short
/// reply in the same language, script, and tone.
#[derive(Parser, Debug)]
#[command(name = "weathermind")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Ask a single weather question
    Ask {
        /// The question, in any language ("delhi ka mausam kaisa hai")
        question: String,
    },

    /// Interactive chat session
    Chat,

    /// Run the HTTP API server
    Serve {
        /// Host to bind to
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Port to listen on
        #[arg(short, long, default_value = "8000")]
        port: u16,
    },

    /// Check configuration and credentials
    Doctor,
}
