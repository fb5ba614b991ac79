//! Error types for client operations.

use noughts_proto::ProtocolError;
use thiserror::Error;

/// Error type for client operations.
#[derive(Debug, Error)]
pub enum ClientError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Framing or message decoding failed.
    #[error("protocol error: {0}")]
    Protocol(ProtocolError),

    /// Connection timeout.
    #[error("connection timeout")]
    ConnectTimeout,
}

impl From<ProtocolError> for ClientError {
    fn from(err: ProtocolError) -> Self {
        // Transport failures stay in the IO bucket even when they surface
        // through the codec.
        match err {
            ProtocolError::Io(e) => Self::Io(e),
            other => Self::Protocol(other),
        }
    }
}
