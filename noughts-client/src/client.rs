//! Typed connection to the game server.

use crate::error::ClientError;
use futures::{SinkExt, StreamExt};
use noughts_proto::framing::{LineCodec, MAX_FRAME_SIZE};
use noughts_proto::message::{self, ClientMessage, ServerMessage};
use std::net::SocketAddr;
use std::time::Duration;
use tokio::net::TcpStream;
use tokio_util::codec::Framed;

/// Configuration for the game client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Server address to connect to. The game's fixed loopback address by
    /// default.
    pub server_addr: SocketAddr,
    /// Connection timeout.
    pub connect_timeout: Duration,
    /// Maximum allowed frame size.
    pub max_frame_size: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            server_addr: noughts_proto::default_addr(),
            connect_timeout: Duration::from_secs(5),
            max_frame_size: MAX_FRAME_SIZE,
        }
    }
}

impl ClientConfig {
    /// Creates a config for the specified server address.
    #[must_use]
    pub fn new(server_addr: SocketAddr) -> Self {
        Self {
            server_addr,
            ..Default::default()
        }
    }

    /// Sets the connection timeout.
    #[must_use]
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Sets the maximum frame size.
    #[must_use]
    pub fn max_frame_size(mut self, size: usize) -> Self {
        self.max_frame_size = size;
        self
    }
}

/// A framed connection to the game server.
pub struct Client {
    framed: Framed<TcpStream, LineCodec>,
    peer_addr: SocketAddr,
}

impl Client {
    /// Connects to the server with the given configuration.
    ///
    /// # Errors
    /// Returns `ClientError::ConnectTimeout` if the connection does not
    /// come up in time, or an IO error if it fails outright.
    pub async fn connect(config: ClientConfig) -> Result<Self, ClientError> {
        let stream = tokio::time::timeout(
            config.connect_timeout,
            TcpStream::connect(config.server_addr),
        )
        .await
        .map_err(|_| ClientError::ConnectTimeout)?
        .map_err(ClientError::Io)?;

        stream.set_nodelay(true)?;
        let peer_addr = stream.peer_addr()?;
        tracing::info!("connected to {peer_addr}");
        let framed = Framed::new(stream, LineCodec::new(config.max_frame_size));

        Ok(Self { framed, peer_addr })
    }

    /// Sends the CONNECT handshake to join matchmaking.
    ///
    /// # Errors
    /// Returns `ClientError` if the send fails.
    pub async fn join(&mut self) -> Result<(), ClientError> {
        self.send(&ClientMessage::Connect).await
    }

    /// Sends a proposed move. The server validates; a rejected move comes
    /// back as an unchanged state broadcast.
    ///
    /// # Errors
    /// Returns `ClientError` if the send fails.
    pub async fn send_move(&mut self, row: i32, col: i32) -> Result<(), ClientError> {
        self.send(&ClientMessage::Move { row, col }).await
    }

    async fn send(&mut self, message: &ClientMessage) -> Result<(), ClientError> {
        let payload = message::encode(message)?;
        self.framed.send(payload).await?;
        Ok(())
    }

    /// Receives the next message from the server.
    ///
    /// # Returns
    /// `Ok(Some(message))` if a message arrived, `Ok(None)` if the server
    /// closed the connection.
    ///
    /// # Errors
    /// Returns `ClientError` if framing or decoding fails.
    pub async fn recv(&mut self) -> Result<Option<ServerMessage>, ClientError> {
        match self.framed.next().await {
            Some(Ok(frame)) => Ok(Some(message::decode_server(&frame)?)),
            Some(Err(e)) => Err(e.into()),
            None => Ok(None),
        }
    }

    /// Returns the peer address.
    #[must_use]
    pub fn peer_addr(&self) -> SocketAddr {
        self.peer_addr
    }

    /// Closes the connection.
    pub async fn close(mut self) -> Result<(), ClientError> {
        SinkExt::<Vec<u8>>::close(&mut self.framed).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use noughts_core::Mark;
    use noughts_proto::message::{decode_client, encode};
    use tokio::net::TcpListener;

    #[test]
    fn test_client_config_default() {
        let config = ClientConfig::default();
        assert_eq!(config.server_addr, noughts_proto::default_addr());
        assert_eq!(config.connect_timeout, Duration::from_secs(5));
        assert_eq!(config.max_frame_size, MAX_FRAME_SIZE);
    }

    #[test]
    fn test_client_config_builder() {
        let addr: SocketAddr = "127.0.0.1:6000".parse().unwrap();
        let config = ClientConfig::new(addr)
            .connect_timeout(Duration::from_secs(10))
            .max_frame_size(1024);

        assert_eq!(config.server_addr, addr);
        assert_eq!(config.connect_timeout, Duration::from_secs(10));
        assert_eq!(config.max_frame_size, 1024);
    }

    #[tokio::test]
    async fn test_join_and_recv_roundtrip() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let server = tokio::spawn(async move {
            let (stream, _) = listener.accept().await.unwrap();
            let mut framed = Framed::new(stream, LineCodec::default());

            // Expect the CONNECT handshake, answer with a WELCOME.
            let frame = framed.next().await.unwrap().unwrap();
            assert_eq!(decode_client(&frame).unwrap(), ClientMessage::Connect);
            let welcome = encode(&ServerMessage::welcome(Mark::X)).unwrap();
            framed.send(welcome).await.unwrap();
        });

        let mut client = Client::connect(ClientConfig::new(addr)).await.unwrap();
        client.join().await.unwrap();

        match client.recv().await.unwrap() {
            Some(ServerMessage::Welcome { payload }) => assert_eq!(payload, "Player X"),
            other => panic!("expected Welcome, got {other:?}"),
        }

        server.await.unwrap();
        // Server task is done; its stream is dropped and the client sees
        // the connection close.
        assert!(client.recv().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_connect_refused() {
        // Bind then drop to get an address nothing listens on.
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let result = Client::connect(ClientConfig::new(addr)).await;
        assert!(result.is_err());
    }
}
