//! # Noughts Client
//!
//! Thin terminal front-end for the noughts game service.
//!
//! This crate provides:
//! - A typed connection to the server (`Client`) with connect timeout
//! - Board rendering and coordinate input parsing for the terminal
//! - Error types for client operations
//!
//! The client renders what the server broadcasts and forwards user input;
//! it never validates moves or computes outcomes. The server is the sole
//! authority, and the "your turn" prompt is advisory only.

pub mod client;
pub mod error;
pub mod ui;

pub use client::{Client, ClientConfig};
pub use error::ClientError;
