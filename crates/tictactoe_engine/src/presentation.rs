//! Contract between the engine and whatever draws it.
//!
//! A front end turns user input into [`AdapterEvent`]s, hands them to a
//! [`Presenter`], and draws each [`RenderInstruction`] it gets back.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::engine::{GameEngine, GameStatus, MoveOutcome};
use crate::score::Score;
use crate::types::{Board, Player};

/// Input forwarded from a front end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AdapterEvent {
    /// A board cell was activated.
    CellClicked(usize),
    /// The restart control was activated.
    RestartRequested,
}

/// Everything a front end needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct RenderInstruction {
    /// Cell contents.
    board: Board,
    /// Turn prompt, win announcement or draw announcement.
    message: String,
    /// Round status.
    status: GameStatus,
    /// Player to move.
    turn: Player,
    /// Completed line to highlight, if the round was won.
    winning_line: Option<[usize; 3]>,
    /// Running score.
    score: Score,
}

impl RenderInstruction {
    /// Snapshots the engine.
    pub fn from_engine(engine: &GameEngine) -> Self {
        Self {
            board: engine.board().clone(),
            message: engine.status_message(),
            status: engine.status(),
            turn: engine.turn(),
            winning_line: engine.winning_line(),
            score: *engine.score(),
        }
    }
}

/// Owns a [`GameEngine`] and applies front-end events to it.
#[derive(Debug, Clone, Default)]
pub struct Presenter {
    engine: GameEngine,
}

impl Presenter {
    /// Wraps an engine.
    pub fn new(engine: GameEngine) -> Self {
        Self { engine }
    }

    /// The wrapped engine.
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Frame to show before any input arrives.
    pub fn initial_render(&self) -> RenderInstruction {
        RenderInstruction::from_engine(&self.engine)
    }

    /// Applies one event.
    ///
    /// Returns `None` when the event changed nothing, in which case the
    /// front end keeps its current frame.
    #[instrument(skip(self))]
    pub fn handle(&mut self, event: AdapterEvent) -> Option<RenderInstruction> {
        match event {
            AdapterEvent::CellClicked(index) => match self.engine.play_move(index) {
                MoveOutcome::Placed { .. } => {
                    let status = self.engine.validate_result();
                    debug!(?status, "Move settled");
                }
                MoveOutcome::Ignored(_) => return None,
            },
            AdapterEvent::RestartRequested => self.engine.reset(),
        }
        Some(RenderInstruction::from_engine(&self.engine))
    }
}
