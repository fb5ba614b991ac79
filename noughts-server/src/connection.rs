//! Typed connection to one player.

use crate::error::ServerError;
use futures::{SinkExt, StreamExt};
use noughts_proto::framing::LineCodec;
use noughts_proto::message::{self, ClientMessage, ServerMessage};
use std::net::SocketAddr;
use tokio::net::TcpStream;
use tokio_util::codec::Framed;

/// A framed TCP connection to one player.
///
/// Ownership moves acceptor → matchmaking queue → session; the owning
/// session closes it exactly once, on terminal status or on an
/// unrecoverable error.
pub struct PlayerConn {
    framed: Framed<TcpStream, LineCodec>,
    peer_addr: SocketAddr,
}

impl PlayerConn {
    /// Wraps an accepted stream with the frame codec.
    #[must_use]
    pub fn new(stream: TcpStream, peer_addr: SocketAddr, max_frame_size: usize) -> Self {
        Self {
            framed: Framed::new(stream, LineCodec::new(max_frame_size)),
            peer_addr,
        }
    }

    /// Returns the peer address.
    #[must_use]
    pub fn peer_addr(&self) -> SocketAddr {
        self.peer_addr
    }

    /// Sends one message to the player.
    ///
    /// # Errors
    /// Returns `ServerError` if serialization or the write fails.
    pub async fn send(&mut self, message: &ServerMessage) -> Result<(), ServerError> {
        let payload = message::encode(message)?;
        self.framed.send(payload).await?;
        Ok(())
    }

    /// Receives the next message from the player.
    ///
    /// # Errors
    /// Returns `ServerError::ConnectionClosed` if the peer hung up, or
    /// `ServerError::Protocol` if the bytes do not frame and parse as a
    /// client message.
    pub async fn recv(&mut self) -> Result<ClientMessage, ServerError> {
        match self.framed.next().await {
            Some(Ok(frame)) => Ok(message::decode_client(&frame)?),
            Some(Err(e)) => Err(e.into()),
            None => Err(ServerError::ConnectionClosed),
        }
    }

    /// Closes the connection.
    pub async fn close(mut self) {
        let _ = SinkExt::<Vec<u8>>::close(&mut self.framed).await;
    }
}
