//! Running win tally.

use derive_more::Display;
use serde::{Deserialize, Serialize};

use crate::types::Player;

/// Games won by each player since the engine was created.
///
/// Counters only ever go up; restarting a round leaves them alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, Serialize, Deserialize)]
#[display("X: {} | O: {}", x_wins, o_wins)]
pub struct Score {
    /// Rounds won by X.
    x_wins: u32,
    /// Rounds won by O.
    o_wins: u32,
}

impl Score {
    /// Creates a zeroed score.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wins recorded for `player`.
    pub fn wins(&self, player: Player) -> u32 {
        match player {
            Player::X => self.x_wins,
            Player::O => self.o_wins,
        }
    }

    pub(crate) fn record_win(&mut self, player: Player) {
        let counter = match player {
            Player::X => &mut self.x_wins,
            Player::O => &mut self.o_wins,
        };
        *counter = counter.saturating_add(1);
    }
}
