//! Error types for server operations.

use noughts_proto::ProtocolError;
use thiserror::Error;

/// Error type for server operations.
///
/// Any variant raised inside a session terminates that session only; the
/// acceptor and every other session keep running.
#[derive(Debug, Error)]
pub enum ServerError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Framing or message decoding failed on a connection.
    #[error("protocol error: {0}")]
    Protocol(ProtocolError),

    /// Peer closed the connection.
    #[error("connection closed by peer")]
    ConnectionClosed,
}

impl From<ProtocolError> for ServerError {
    fn from(err: ProtocolError) -> Self {
        // Transport failures stay in the IO bucket even when they surface
        // through the codec.
        match err {
            ProtocolError::Io(e) => Self::Io(e),
            other => Self::Protocol(other),
        }
    }
}
