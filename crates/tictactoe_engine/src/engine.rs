//! The game engine: board, turn, status and score for one table.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::rules;
use crate::score::Score;
use crate::types::{Board, CELL_COUNT, Player};

/// Current status of the round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Round is ongoing.
    InProgress,
    /// Round ended with a completed line.
    Won(Player),
    /// Board filled with no completed line.
    Draw,
}

impl GameStatus {
    /// True for `Won` and `Draw`.
    pub fn is_over(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

/// Why a move left the engine untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum IgnoredMove {
    /// The round has already been won or drawn.
    #[display("game is already over")]
    GameOver,
    /// The cell holds a mark.
    #[display("cell {} is already occupied", _0)]
    Occupied(usize),
    /// The index is not on the board.
    #[display("cell {} is out of range", _0)]
    OutOfRange(usize),
}

/// Result of [`GameEngine::play_move`].
///
/// Ignored moves are not errors; callers use this only to decide whether
/// anything needs redrawing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum MoveOutcome {
    /// The current player's mark was written into the cell.
    Placed {
        /// Cell index written.
        index: usize,
        /// Player whose mark it is.
        player: Player,
    },
    /// Nothing changed.
    Ignored(IgnoredMove),
}

impl MoveOutcome {
    /// True when the board changed.
    pub fn is_placed(self) -> bool {
        matches!(self, MoveOutcome::Placed { .. })
    }
}

/// Tic-tac-toe engine owned by a single front end.
///
/// A user action is `play_move` followed immediately by `validate_result`;
/// the split lets callers observe the board between the two steps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameEngine {
    board: Board,
    turn: Player,
    status: GameStatus,
    score: Score,
    winning_line: Option<[usize; 3]>,
    history: Vec<usize>,
}

impl GameEngine {
    /// Creates an engine with an empty board, X to move and a zero score.
    #[instrument]
    pub fn new() -> Self {
        Self::with_score(Score::new())
    }

    /// Creates an engine with an empty board that continues an existing tally.
    #[instrument]
    pub fn with_score(score: Score) -> Self {
        Self {
            board: Board::new(),
            turn: Player::X,
            status: GameStatus::InProgress,
            score,
            winning_line: None,
            history: Vec::with_capacity(CELL_COUNT),
        }
    }

    /// Writes the current player's mark at `index`.
    ///
    /// Does nothing when the round is over, the cell is taken or the index
    /// is off the board. Never changes turn or status.
    #[instrument(skip(self), fields(turn = %self.turn))]
    pub fn play_move(&mut self, index: usize) -> MoveOutcome {
        let ignored = if self.status.is_over() {
            Some(IgnoredMove::GameOver)
        } else if index >= CELL_COUNT {
            Some(IgnoredMove::OutOfRange(index))
        } else if !self.board.is_empty(index) {
            Some(IgnoredMove::Occupied(index))
        } else {
            None
        };

        if let Some(reason) = ignored {
            debug!(%reason, "Move ignored");
            return MoveOutcome::Ignored(reason);
        }

        self.board.place(index, self.turn);
        self.history.push(index);
        debug!(index, "Mark placed");
        MoveOutcome::Placed {
            index,
            player: self.turn,
        }
    }

    /// Settles the board after a move: win, draw, or pass the turn.
    ///
    /// Lines are checked before fullness, so a last move that completes a
    /// line is a win. A round that is already over is left as is, which
    /// keeps each win counted once.
    #[instrument(skip(self))]
    pub fn validate_result(&mut self) -> GameStatus {
        if self.status.is_over() {
            return self.status;
        }

        if let Some((winner, line)) = rules::winning_line(&self.board) {
            self.status = GameStatus::Won(winner);
            self.winning_line = Some(line);
            self.score.record_win(winner);
            info!(%winner, ?line, score = %self.score, "Round won");
        } else if rules::is_full(&self.board) {
            self.status = GameStatus::Draw;
            info!("Round drawn");
        } else {
            self.turn = self.turn.opponent();
        }

        self.status
    }

    /// Clears the board for a new round. The score carries over.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.board = Board::new();
        self.turn = Player::X;
        self.status = GameStatus::InProgress;
        self.winning_line = None;
        self.history.clear();
        info!(score = %self.score, "Board reset");
    }

    /// The board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Player to move next.
    pub fn turn(&self) -> Player {
        self.turn
    }

    /// Round status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Running score.
    pub fn score(&self) -> &Score {
        &self.score
    }

    /// Line completed by the winner, once the round is won.
    pub fn winning_line(&self) -> Option<[usize; 3]> {
        self.winning_line
    }

    /// Cells played this round, in order.
    pub fn history(&self) -> &[usize] {
        &self.history
    }

    /// Text a front end shows above the board.
    pub fn status_message(&self) -> String {
        match self.status {
            GameStatus::InProgress => format!("It's {}'s turn", self.turn),
            GameStatus::Won(winner) => format!("Player {} has won!", winner),
            GameStatus::Draw => "Game ended in a draw!".to_string(),
        }
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}
