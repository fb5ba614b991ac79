//! The 3x3 board and terminal-condition evaluation.
//!
//! `Board` is the single source of truth for a game: the server applies
//! validated moves here and re-derives the status after each one. Clients
//! only ever render what the server broadcasts; they never evaluate.

use crate::error::GameError;
use crate::types::{Cell, Mark};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Board side length.
pub const SIZE: usize = 3;

/// The 3x3 grid, row-major.
///
/// Serializes as a bare 3x3 array of cell strings, the exact `board`
/// payload of an UPDATE message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Board {
    cells: [[Cell; SIZE]; SIZE],
}

impl Board {
    /// Creates an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the raw grid, row-major.
    #[must_use]
    pub fn cells(&self) -> &[[Cell; SIZE]; SIZE] {
        &self.cells
    }

    /// Applies a move for `mark` at `(row, col)`.
    ///
    /// Coordinates are taken as signed integers straight off the wire so
    /// that negative and oversized values are rejected here, by the model,
    /// instead of failing earlier in deserialization.
    ///
    /// Does not touch turn or status; the caller re-derives the status via
    /// [`Board::evaluate`] afterwards.
    ///
    /// # Errors
    /// Returns `GameError::OutOfRange` if either coordinate falls outside
    /// `[0, 2]`, or `GameError::CellOccupied` if the target cell already
    /// holds a mark. The board is unchanged on error.
    pub fn apply(&mut self, mark: Mark, row: i32, col: i32) -> Result<(), GameError> {
        let range = 0..SIZE as i32;
        if !range.contains(&row) || !range.contains(&col) {
            return Err(GameError::OutOfRange { row, col });
        }
        let (r, c) = (row as usize, col as usize);
        if self.cells[r][c] != Cell::Empty {
            return Err(GameError::CellOccupied { row, col });
        }
        self.cells[r][c] = mark.cell();
        Ok(())
    }

    /// Evaluates the terminal condition.
    ///
    /// Checks the 3 rows, then the 3 columns, then the 2 diagonals, in that
    /// fixed order; the first complete line wins. Moves are monotonic, so a
    /// valid board can never complete lines for both marks. A full grid
    /// with no complete line is a draw.
    #[must_use]
    pub fn evaluate(&self) -> GameStatus {
        let g = &self.cells;
        for row in g {
            if let Some(mark) = line_winner(row[0], row[1], row[2]) {
                return GameStatus::Win(mark);
            }
        }
        for col in 0..SIZE {
            if let Some(mark) = line_winner(g[0][col], g[1][col], g[2][col]) {
                return GameStatus::Win(mark);
            }
        }
        if let Some(mark) = line_winner(g[0][0], g[1][1], g[2][2]) {
            return GameStatus::Win(mark);
        }
        if let Some(mark) = line_winner(g[0][2], g[1][1], g[2][0]) {
            return GameStatus::Win(mark);
        }
        if self.is_full() {
            GameStatus::Draw
        } else {
            GameStatus::Ongoing
        }
    }

    /// Returns true if every cell is occupied.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells
            .iter()
            .all(|row| row.iter().all(|cell| *cell != Cell::Empty))
    }
}

/// Returns the winning mark if all three cells carry the same one.
fn line_winner(a: Cell, b: Cell, c: Cell) -> Option<Mark> {
    if a == b && b == c { a.mark() } else { None }
}

/// Game outcome as re-derived after every move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// Game in progress.
    Ongoing,
    /// The given mark completed a line.
    Win(Mark),
    /// Full grid, no complete line.
    Draw,
}

impl GameStatus {
    /// Returns true for `Win` and `Draw`.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        !matches!(self, Self::Ongoing)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ongoing => f.write_str("ongoing"),
            Self::Draw => f.write_str("Draw!"),
            Self::Win(mark) => write!(f, "Player {mark} wins!"),
        }
    }
}

// The wire form is the display string ("ongoing", "Draw!",
// "Player X wins!"), so serde goes through Display/parse rather than
// derived variant names.
impl Serialize for GameStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for GameStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            "ongoing" => Ok(Self::Ongoing),
            "Draw!" => Ok(Self::Draw),
            "Player X wins!" => Ok(Self::Win(Mark::X)),
            "Player O wins!" => Ok(Self::Win(Mark::O)),
            other => Err(serde::de::Error::unknown_variant(
                other,
                &["ongoing", "Draw!", "Player X wins!", "Player O wins!"],
            )),
        }
    }
}
