//! Poseboard CLI binary.
//!
//! This binary drives the storyboard pipeline from the terminal:
//! - Run a full story session (pose capture through persisted storyboard)
//! - Browse, inspect, and delete saved stories

use clap::Parser;

mod cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use cli::{Cli, Commands, handle_library_command, run_story};

    // Pick up GEMINI_API_KEY from a local .env if present
    dotenvy::dotenv().ok();

    // Parse command-line arguments
    let cli = Cli::parse();

    // Initialize tracing
    let log_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_target(false)
        .init();

    // Execute the requested command
    match cli.command {
        Commands::Run(options) => {
            run_story(options).await?;
        }

        Commands::Library(library_cmd) => {
            handle_library_command(library_cmd).await?;
        }
    }

    Ok(())
}
