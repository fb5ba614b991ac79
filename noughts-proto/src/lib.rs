//! # Noughts Proto
//!
//! Wire protocol shared by the noughts server and client.
//!
//! This crate provides:
//! - Message enums for both directions (`ClientMessage`, `ServerMessage`)
//! - Newline-boundary frame codec for TCP streams (`LineCodec`)
//! - Protocol error types
//! - The fixed loopback address both binaries use
//!
//! Messages travel as UTF-8 JSON records, one per `\n`-terminated frame;
//! `framing` reassembles frames from arbitrary TCP chunking and `message`
//! maps frame payloads to typed messages.

pub mod error;
pub mod framing;
pub mod message;

pub use error::ProtocolError;
pub use framing::{LineCodec, MAX_FRAME_SIZE};
pub use message::{ClientMessage, ServerMessage, decode_client, decode_server, encode};

use std::net::SocketAddr;

/// Fixed port shared by server and client.
pub const DEFAULT_PORT: u16 = 5050;

/// Returns the fixed loopback address both binaries use.
#[must_use]
pub fn default_addr() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], DEFAULT_PORT))
}
