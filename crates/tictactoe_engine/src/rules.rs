//! Win and draw rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`]; the engine decides what to do with the
//! result.

use tracing::instrument;

use crate::types::{Board, Player, Square};

/// The eight winning lines, in the order they are checked.
pub const WINNING_LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Returns the first completed line and its owner.
///
/// A line is complete when all three cells are occupied by the same player.
#[instrument(skip(board))]
pub fn winning_line(board: &Board) -> Option<(Player, [usize; 3])> {
    WINNING_LINES.iter().find_map(|&line| {
        let [a, b, c] = line;
        let sq = board.get(a)?;
        match sq {
            Square::Occupied(player) if board.get(b) == Some(sq) && board.get(c) == Some(sq) => {
                Some((player, line))
            }
            _ => None,
        }
    })
}

/// Returns the winner, if any line is complete.
pub fn check_winner(board: &Board) -> Option<Player> {
    winning_line(board).map(|(player, _)| player)
}

/// True when no cell is empty.
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}
