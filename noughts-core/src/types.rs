//! Cell and player mark types.
//!
//! Both types serialize to the single-character strings the wire format
//! uses (`"X"`, `"O"`, `" "`), so a board nests directly into an UPDATE
//! message without a separate conversion layer.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A player's mark. Doubles as the player role: exactly one connection
/// holds each mark for a session's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    /// First player of a pair.
    X,
    /// Second player of a pair.
    O,
}

impl Mark {
    /// Returns the opposing mark.
    #[must_use]
    pub fn other(self) -> Self {
        match self {
            Self::X => Self::O,
            Self::O => Self::X,
        }
    }

    /// Returns the cell value this mark occupies.
    #[must_use]
    pub fn cell(self) -> Cell {
        match self {
            Self::X => Cell::X,
            Self::O => Cell::O,
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::X => f.write_str("X"),
            Self::O => f.write_str("O"),
        }
    }
}

/// One cell of the board.
///
/// A cell is written at most once: it starts `Empty` and never reverts
/// after a mark is placed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cell {
    /// No mark placed yet.
    #[default]
    #[serde(rename = " ")]
    Empty,
    /// Occupied by player X.
    X,
    /// Occupied by player O.
    O,
}

impl Cell {
    /// Returns the mark occupying this cell, if any.
    #[must_use]
    pub fn mark(self) -> Option<Mark> {
        match self {
            Self::Empty => None,
            Self::X => Some(Mark::X),
            Self::O => Some(Mark::O),
        }
    }

    /// Returns the wire/display character for this cell.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Empty => " ",
            Self::X => "X",
            Self::O => "O",
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
