//! # Noughts Server
//!
//! Authoritative server for the noughts game service.
//!
//! This crate provides:
//! - Connection acceptor with a handshake step per connection
//! - Matchmaking queue pairing waiting connections two at a time
//! - Game sessions owning a board and two connections each
//! - Error types for server operations
//!
//! The server is the single source of truth: it validates every move and
//! detects every terminal condition. Clients render what it broadcasts and
//! decide nothing.

pub mod connection;
pub mod error;
pub mod matchmaker;
pub mod server;
pub mod session;

pub use connection::PlayerConn;
pub use error::ServerError;
pub use matchmaker::Matchmaker;
pub use server::{Server, ServerConfig};
pub use session::GameSession;
