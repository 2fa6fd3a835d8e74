//! Command-line interface for tictactoe.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Two-player tic-tac-toe with a running score
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Two-player tic-tac-toe with a running score")]
#[command(long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively in the terminal
    Play {
        /// Path to the TOML config file (defaults apply if it doesn't exist)
        #[arg(short, long, default_value = "tictactoe.toml")]
        config: PathBuf,
    },

    /// Feed a scripted sequence of clicks and restarts through the game
    Replay {
        /// Cell indices 0-8 and `r` for restart, separated by commas or spaces
        script: String,

        /// Print each frame as a JSON line instead of a text grid
        #[arg(long)]
        json: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_play_defaults_config_path() {
        let cli = Cli::parse_from(["tictactoe", "play"]);
        match cli.command {
            Command::Play { config } => assert_eq!(config, PathBuf::from("tictactoe.toml")),
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_replay_flags() {
        let cli = Cli::parse_from(["tictactoe", "replay", "0,3,1", "--json"]);
        match cli.command {
            Command::Replay { script, json } => {
                assert_eq!(script, "0,3,1");
                assert!(json);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }
}
