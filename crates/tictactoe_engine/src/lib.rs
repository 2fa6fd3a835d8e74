//! Pure tic-tac-toe game logic with a running score.
//!
//! [`GameEngine`] holds one table: the board, whose turn it is, whether the
//! round is over, and how many rounds each player has won. It knows nothing
//! about drawing; front ends talk to it through [`Presenter`].
//!
//! ```
//! use tictactoe_engine::{GameEngine, GameStatus, Player};
//!
//! let mut engine = GameEngine::new();
//! for index in [0, 3, 1, 4, 2] {
//!     let _ = engine.play_move(index);
//!     engine.validate_result();
//! }
//! assert_eq!(engine.status(), GameStatus::Won(Player::X));
//! assert_eq!(engine.score().wins(Player::X), 1);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod engine;
mod position;
mod presentation;
mod rules;
mod score;
mod types;

pub use engine::{GameEngine, GameStatus, IgnoredMove, MoveOutcome};
pub use position::Position;
pub use presentation::{AdapterEvent, Presenter, RenderInstruction};
pub use rules::{WINNING_LINES, check_winner, is_full, winning_line};
pub use score::Score;
pub use types::{Board, CELL_COUNT, Player, Square};
