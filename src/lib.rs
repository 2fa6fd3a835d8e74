//! Two-player tic-tac-toe with a running score.
//!
//! The game rules live in [`tictactoe_engine`]; this crate provides the
//! front ends that drive it.
//!
//! # Architecture
//!
//! - **tui**: interactive terminal game (ratatui + crossterm)
//! - **replay**: headless runner for scripted clicks and restarts
//! - **config**: TOML settings for the terminal game
//! - **cli**: command-line parsing
//!
//! # Example
//!
//! ```
//! use tictactoe::{FrameFormat, parse_script, run_replay};
//!
//! let events = parse_script("0,3,1,4,2").unwrap();
//! let mut out = Vec::new();
//! let frames = run_replay(&events, FrameFormat::Text, &mut out).unwrap();
//! assert_eq!(frames, 6);
//! assert!(String::from_utf8(out).unwrap().contains("Player X has won!"));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
mod config;
mod replay;
mod tui;

pub use config::{ConfigError, TuiConfig};
pub use replay::{FrameFormat, ReplayError, parse_script, render_text, run_replay};
pub use tui::{App, run_tui};

pub use tictactoe_engine::{
    AdapterEvent, GameEngine, GameStatus, Player, Presenter, RenderInstruction, Score,
};
