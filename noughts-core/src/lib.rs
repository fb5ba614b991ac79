//! # Noughts Core
//!
//! Pure game model for the noughts service.
//!
//! This crate provides:
//! - Cell and player mark types with their wire representations
//! - The 3x3 board with authoritative move application
//! - Win/draw evaluation over a given board
//! - Error types for rejected moves
//!
//! No I/O happens here; the server owns all networking and drives the
//! board through `Board::apply` and `Board::evaluate`.

pub mod board;
pub mod error;
pub mod types;

pub use board::{Board, GameStatus};
pub use error::{GameError, Result};
pub use types::{Cell, Mark};
