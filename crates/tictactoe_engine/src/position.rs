//! Named board cells and their grid coordinates.

/// A cell of the board, named by where it sits.
///
/// Front ends navigate by row and column; the engine works with the
/// row-major index returned by [`Position::index`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
pub enum Position {
    /// Top-left (index 0)
    #[strum(serialize = "Top-left")]
    TopLeft,
    /// Top-center (index 1)
    #[strum(serialize = "Top-center")]
    TopCenter,
    /// Top-right (index 2)
    #[strum(serialize = "Top-right")]
    TopRight,
    /// Middle-left (index 3)
    #[strum(serialize = "Middle-left")]
    MiddleLeft,
    /// Center (index 4)
    #[strum(serialize = "Center")]
    Center,
    /// Middle-right (index 5)
    #[strum(serialize = "Middle-right")]
    MiddleRight,
    /// Bottom-left (index 6)
    #[strum(serialize = "Bottom-left")]
    BottomLeft,
    /// Bottom-center (index 7)
    #[strum(serialize = "Bottom-center")]
    BottomCenter,
    /// Bottom-right (index 8)
    #[strum(serialize = "Bottom-right")]
    BottomRight,
}

impl Position {
    /// All 9 positions in row-major order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Row-major board index (0-8).
    pub fn index(self) -> usize {
        self as usize
    }

    /// Position at a board index, `None` when out of range.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Row, 0 at the top.
    pub fn row(self) -> usize {
        self.index() / 3
    }

    /// Column, 0 at the left.
    pub fn col(self) -> usize {
        self.index() % 3
    }

    /// Position at `(row, col)`, `None` when either is off the board.
    pub fn from_row_col(row: usize, col: usize) -> Option<Self> {
        if row < 3 && col < 3 {
            Self::from_index(row * 3 + col)
        } else {
            None
        }
    }
}
