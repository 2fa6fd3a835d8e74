//! Tic-tac-toe - unified CLI
//!
//! Interactive terminal game or headless scripted replay.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use std::io::Write;
use std::path::Path;
use tictactoe::cli::{Cli, Command};
use tictactoe::{FrameFormat, TuiConfig, parse_script, run_replay, run_tui};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play { config } => run_play(&config),
        Command::Replay { script, json } => run_script(&script, json),
    }
}

/// Run the interactive terminal game
fn run_play(config_path: &Path) -> Result<()> {
    let config = TuiConfig::load(config_path)?;
    run_tui(&config)
}

/// Run a scripted replay, logging to stderr
#[instrument(skip(script))]
fn run_script(script: &str, json: bool) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let events = parse_script(script)?;
    info!(events = events.len(), "Replaying script");

    let format = if json {
        FrameFormat::Json
    } else {
        FrameFormat::Text
    };
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run_replay(&events, format, &mut out)?;
    out.flush()?;
    Ok(())
}
