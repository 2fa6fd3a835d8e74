//! Headless front end: runs a scripted list of events through a [`Presenter`].

use std::io::Write;

use anyhow::Result;
use derive_more::{Display, Error};
use tictactoe_engine::{AdapterEvent, Presenter, RenderInstruction};
use tracing::{debug, info, instrument};

/// Malformed replay script.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum ReplayError {
    /// A token is neither a cell index nor `r`.
    #[display("Unrecognized token `{}` at position {}", token, position)]
    InvalidToken {
        /// The offending token.
        token: String,
        /// Zero-based token position in the script.
        position: usize,
    },
}

/// How frames are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameFormat {
    /// Board grid, status line and score, separated by blank lines.
    Text,
    /// One JSON object per line.
    Json,
}

/// Parses a script of cell indices and `r` (restart).
///
/// Tokens are separated by commas and/or whitespace. Any integer is a click,
/// signed or not; numbers outside 0-8 (negative or too large for `usize`
/// included) are kept and the engine ignores them like any other invalid
/// click.
#[instrument]
pub fn parse_script(script: &str) -> Result<Vec<AdapterEvent>, ReplayError> {
    script
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|t| !t.is_empty())
        .enumerate()
        .map(|(position, token)| {
            if token.eq_ignore_ascii_case("r") {
                Ok(AdapterEvent::RestartRequested)
            } else {
                parse_cell(token)
                    .map(AdapterEvent::CellClicked)
                    .ok_or_else(|| ReplayError::InvalidToken {
                        token: token.to_string(),
                        position,
                    })
            }
        })
        .collect()
}

/// Cell index for an integer token. Values no `usize` can hold map to
/// `usize::MAX`, which is off the board.
fn parse_cell(token: &str) -> Option<usize> {
    let digits = token.strip_prefix(['+', '-']).unwrap_or(token);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    match token.parse::<usize>() {
        Ok(index) => Some(index),
        Err(_) => {
            debug!(token, "Cell number off the board");
            Some(usize::MAX)
        }
    }
}

/// Formats one frame as text.
pub fn render_text(frame: &RenderInstruction) -> String {
    format!(
        "{}\n{}\nScore {}",
        frame.board().display(true),
        frame.message(),
        frame.score()
    )
}

/// Plays `events` through a fresh presenter, writing the initial frame and
/// every frame an event produces. Returns the number of frames written.
#[instrument(skip(events, out), fields(event_count = events.len()))]
pub fn run_replay<W: Write>(
    events: &[AdapterEvent],
    format: FrameFormat,
    out: &mut W,
) -> Result<usize> {
    let mut presenter = Presenter::default();
    write_frame(&presenter.initial_render(), format, out, true)?;
    let mut written = 1;

    for event in events {
        match presenter.handle(*event) {
            Some(frame) => {
                write_frame(&frame, format, out, false)?;
                written += 1;
            }
            None => debug!(?event, "Event changed nothing"),
        }
    }

    info!(frames = written, score = %presenter.engine().score(), "Replay finished");
    Ok(written)
}

fn write_frame<W: Write>(
    frame: &RenderInstruction,
    format: FrameFormat,
    out: &mut W,
    first: bool,
) -> Result<()> {
    match format {
        FrameFormat::Json => writeln!(out, "{}", serde_json::to_string(frame)?)?,
        FrameFormat::Text => {
            if !first {
                writeln!(out)?;
            }
            writeln!(out, "{}", render_text(frame))?;
        }
    }
    Ok(())
}
