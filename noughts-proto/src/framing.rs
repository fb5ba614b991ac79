//! Newline-boundary message framing for TCP.
//!
//! The wire format is one UTF-8 JSON record per frame, terminated by a
//! single `\n` boundary byte. TCP delivers bytes with no respect for those
//! boundaries (a read may carry less than one message, several messages,
//! or end between a payload and its delimiter), so the decoder buffers
//! raw bytes and yields a frame only once its boundary byte has been
//! observed, keeping any trailing fragment for the next read.
//!
//! A `MAX_FRAME_SIZE` cap bounds buffering on garbage input that never
//! produces a boundary. Frames here are tiny; the default leaves generous
//! headroom.

use crate::error::ProtocolError;
use bytes::{BufMut, BytesMut};
use tokio_util::codec::{Decoder, Encoder};

/// Boundary byte separating frames.
pub const BOUNDARY: u8 = b'\n';

/// Default maximum allowed frame size (8 KB).
pub const MAX_FRAME_SIZE: usize = 8 * 1024;

/// Newline-delimited frame codec.
///
/// Frame format: `[payload bytes][\n]`. The payload itself must not
/// contain the boundary byte; serialized JSON records never do.
pub struct LineCodec {
    max_frame_size: usize,
    /// Offset up to which the buffer has already been scanned for a
    /// boundary, so repeated decode calls stay linear.
    next_index: usize,
}

impl LineCodec {
    /// Creates a new codec with the specified maximum frame size.
    #[must_use]
    pub fn new(max_frame_size: usize) -> Self {
        Self {
            max_frame_size,
            next_index: 0,
        }
    }

    /// Returns the maximum frame size.
    #[must_use]
    pub fn max_frame_size(&self) -> usize {
        self.max_frame_size
    }
}

impl Default for LineCodec {
    fn default() -> Self {
        Self::new(MAX_FRAME_SIZE)
    }
}

impl Decoder for LineCodec {
    type Item = BytesMut;
    type Error = ProtocolError;

    fn decode(&mut self, src: &mut BytesMut) -> Result<Option<Self::Item>, Self::Error> {
        if let Some(offset) = src[self.next_index..].iter().position(|b| *b == BOUNDARY) {
            let boundary_index = self.next_index + offset;
            self.next_index = 0;

            // Take the frame plus its boundary byte, then strip the boundary.
            let mut frame = src.split_to(boundary_index + 1);
            frame.truncate(frame.len() - 1);

            if frame.len() > self.max_frame_size {
                return Err(ProtocolError::frame_too_large(
                    frame.len(),
                    self.max_frame_size,
                ));
            }
            return Ok(Some(frame));
        }

        // No boundary yet: keep buffering unless the fragment is already
        // past any legal frame size.
        if src.len() > self.max_frame_size {
            return Err(ProtocolError::frame_too_large(
                src.len(),
                self.max_frame_size,
            ));
        }
        self.next_index = src.len();
        Ok(None)
    }
}

impl<T: AsRef<[u8]>> Encoder<T> for LineCodec {
    type Error = ProtocolError;

    fn encode(&mut self, item: T, dst: &mut BytesMut) -> Result<(), Self::Error> {
        let data = item.as_ref();
        if data.len() > self.max_frame_size {
            return Err(ProtocolError::frame_too_large(
                data.len(),
                self.max_frame_size,
            ));
        }
        if data.contains(&BOUNDARY) {
            return Err(ProtocolError::invalid_frame(
                "payload contains the boundary byte",
            ));
        }

        dst.reserve(data.len() + 1);
        dst.put_slice(data);
        dst.put_u8(BOUNDARY);
        Ok(())
    }
}
