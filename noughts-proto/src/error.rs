//! Error types for protocol operations.

use thiserror::Error;

/// Error type for framing and message decoding.
///
/// Any of these on a live connection is fatal to the owning session (the
/// peer is not speaking the protocol); none of them is fatal to the
/// process or to other sessions.
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Frame exceeds the maximum size.
    #[error("frame too large: {size} bytes exceeds maximum {max} bytes")]
    FrameTooLarge {
        /// Actual frame size.
        size: usize,
        /// Maximum allowed size.
        max: usize,
    },

    /// Frame cannot be encoded or decoded.
    #[error("invalid frame: {message}")]
    InvalidFrame {
        /// Error message.
        message: String,
    },

    /// Frame payload is not a well-formed message.
    #[error("malformed message: {0}")]
    Malformed(#[from] serde_json::Error),

    /// A well-formed message of the wrong kind for this point in the
    /// conversation.
    #[error("unexpected message: {context}")]
    UnexpectedMessage {
        /// What was expected instead.
        context: String,
    },
}

impl ProtocolError {
    /// Creates a frame too large error.
    pub fn frame_too_large(size: usize, max: usize) -> Self {
        Self::FrameTooLarge { size, max }
    }

    /// Creates an invalid frame error.
    pub fn invalid_frame(message: impl Into<String>) -> Self {
        Self::InvalidFrame {
            message: message.into(),
        }
    }

    /// Creates an unexpected message error.
    pub fn unexpected(context: impl Into<String>) -> Self {
        Self::UnexpectedMessage {
            context: context.into(),
        }
    }
}
