//! TCP acceptor and handshake.
//!
//! The accept loop never performs gameplay I/O itself: each accepted
//! connection gets a short-lived handshake task (read one frame, require
//! CONNECT, enforce a timeout), and each completed pair gets a session
//! task for the lifetime of that game. A slow or silent client can
//! therefore never stall the acceptor or anyone else's game.

use crate::connection::PlayerConn;
use crate::error::ServerError;
use crate::matchmaker::Matchmaker;
use crate::session::GameSession;
use noughts_proto::framing::MAX_FRAME_SIZE;
use noughts_proto::message::ClientMessage;
use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tokio::net::{TcpListener, TcpStream};

/// Configuration for the game server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind to. The game's fixed loopback address by default.
    pub bind_addr: SocketAddr,
    /// Maximum allowed frame size.
    pub max_frame_size: usize,
    /// How long a new connection gets to produce its CONNECT handshake.
    pub handshake_timeout: Duration,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: noughts_proto::default_addr(),
            max_frame_size: MAX_FRAME_SIZE,
            handshake_timeout: Duration::from_secs(5),
        }
    }
}

impl ServerConfig {
    /// Sets the bind address.
    #[must_use]
    pub fn bind_addr(mut self, addr: SocketAddr) -> Self {
        self.bind_addr = addr;
        self
    }

    /// Sets the maximum frame size.
    #[must_use]
    pub fn max_frame_size(mut self, size: usize) -> Self {
        self.max_frame_size = size;
        self
    }

    /// Sets the handshake timeout.
    #[must_use]
    pub fn handshake_timeout(mut self, timeout: Duration) -> Self {
        self.handshake_timeout = timeout;
        self
    }
}

/// The game server: acceptor plus the process-wide matchmaking queue.
pub struct Server {
    listener: TcpListener,
    config: ServerConfig,
    matchmaker: Arc<Matchmaker<PlayerConn>>,
    next_session_id: Arc<AtomicU64>,
}

impl Server {
    /// Binds to the configured address.
    ///
    /// # Errors
    /// Returns IO error if binding fails.
    pub async fn bind(config: ServerConfig) -> Result<Self, ServerError> {
        let listener = TcpListener::bind(config.bind_addr).await?;
        tracing::info!("server listening on {}", listener.local_addr()?);
        Ok(Self {
            listener,
            config,
            matchmaker: Arc::new(Matchmaker::new()),
            next_session_id: Arc::new(AtomicU64::new(1)),
        })
    }

    /// Returns the local address the server is bound to.
    ///
    /// # Errors
    /// Returns IO error if the address cannot be read.
    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    /// Accepts connections indefinitely, spawning a handshake task per
    /// connection and a session task per completed pair.
    ///
    /// # Errors
    /// Individual accept errors are logged and the loop continues; this
    /// only returns if the listener itself is gone.
    pub async fn run(&self) -> Result<(), ServerError> {
        loop {
            match self.listener.accept().await {
                Ok((stream, addr)) => {
                    stream.set_nodelay(true).ok();
                    let config = self.config.clone();
                    let matchmaker = Arc::clone(&self.matchmaker);
                    let next_session_id = Arc::clone(&self.next_session_id);
                    tokio::spawn(async move {
                        handshake(stream, addr, &config, &matchmaker, &next_session_id).await;
                    });
                }
                Err(e) => {
                    tracing::error!("accept error: {e}");
                }
            }
        }
    }
}

/// Reads exactly one handshake frame; a CONNECT enqueues the connection,
/// anything else (wrong message, malformed frame, timeout, hangup) drops
/// it without touching the queue.
async fn handshake(
    stream: TcpStream,
    addr: SocketAddr,
    config: &ServerConfig,
    matchmaker: &Matchmaker<PlayerConn>,
    next_session_id: &AtomicU64,
) {
    let mut conn = PlayerConn::new(stream, addr, config.max_frame_size);

    match tokio::time::timeout(config.handshake_timeout, conn.recv()).await {
        Ok(Ok(ClientMessage::Connect)) => {}
        Ok(Ok(other)) => {
            tracing::warn!(%addr, message = ?other, "handshake rejected: expected CONNECT");
            return;
        }
        Ok(Err(e)) => {
            tracing::warn!(%addr, error = %e, "handshake failed");
            return;
        }
        Err(_) => {
            tracing::warn!(%addr, "handshake timed out");
            return;
        }
    }

    match matchmaker.enqueue(conn) {
        Some((x, o)) => {
            let id = next_session_id.fetch_add(1, Ordering::Relaxed);
            tracing::info!(session = id, "two players queued, spawning session");
            let session = GameSession::new(id, x, o);
            tokio::spawn(async move {
                if let Err(e) = session.run().await {
                    tracing::warn!(session = id, error = %e, "session ended with error");
                }
            });
        }
        None => {
            tracing::info!(%addr, waiting = matchmaker.waiting(), "player queued");
        }
    }
}
