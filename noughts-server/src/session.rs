//! Game session: one board, two players, one task.
//!
//! A session owns both connections of a matched pair for its whole
//! lifetime, so no other task can read or write them and concurrent
//! sessions cannot cross-talk. Turn order is enforced at the protocol
//! level: the loop only ever awaits the connection whose turn it is, so an
//! off-turn MOVE sits unread in the socket until the turn comes around.
//! The client's "your turn" prompt is advisory UI, never authority.
//!
//! Each accepted move is followed by a broadcast of the full state to both
//! players; both sends complete before the next receive, so the pair
//! observes every update in the same relative order.

use crate::connection::PlayerConn;
use crate::error::ServerError;
use noughts_core::{Board, GameStatus, Mark};
use noughts_proto::ProtocolError;
use noughts_proto::message::{ClientMessage, ServerMessage};

/// One in-progress game and its authoritative state.
pub struct GameSession {
    id: u64,
    board: Board,
    turn: Mark,
    x: PlayerConn,
    o: PlayerConn,
}

impl GameSession {
    /// Creates a session for a matched pair. The first-arriving connection
    /// of the pair plays X and moves first.
    #[must_use]
    pub fn new(id: u64, x: PlayerConn, o: PlayerConn) -> Self {
        Self {
            id,
            board: Board::new(),
            turn: Mark::X,
            x,
            o,
        }
    }

    /// Runs the game to a terminal status, then closes both connections.
    ///
    /// # Errors
    /// Returns the protocol or connection error that ended the session
    /// early. Both connections are closed on every exit path, and no error
    /// here ever affects another session.
    pub async fn run(mut self) -> Result<(), ServerError> {
        let outcome = self.play().await;
        let Self { x, o, .. } = self;
        x.close().await;
        o.close().await;
        outcome
    }

    async fn play(&mut self) -> Result<(), ServerError> {
        tracing::info!(
            session = self.id,
            x = %self.x.peer_addr(),
            o = %self.o.peer_addr(),
            "session started"
        );

        self.x.send(&ServerMessage::welcome(Mark::X)).await?;
        self.o.send(&ServerMessage::welcome(Mark::O)).await?;
        self.broadcast(GameStatus::Ongoing).await?;

        loop {
            // Only the active player's connection is polled.
            let message = self.active_conn().recv().await?;
            let ClientMessage::Move { row, col } = message else {
                return Err(ServerError::Protocol(ProtocolError::unexpected(
                    "MOVE from the active player",
                )));
            };

            if let Err(err) = self.board.apply(self.turn, row, col) {
                tracing::debug!(session = self.id, turn = %self.turn, %err, "move rejected");
                // State is untouched; re-send the current view to the
                // offender only, so their front-end re-prompts.
                let update = self.update(GameStatus::Ongoing);
                self.active_conn().send(&update).await?;
                continue;
            }

            let status = self.board.evaluate();
            if !status.is_terminal() {
                self.turn = self.turn.other();
            }
            self.broadcast(status).await?;

            if status.is_terminal() {
                tracing::info!(session = self.id, %status, "session finished");
                return Ok(());
            }
        }
    }

    /// Sends the current state to both players, X first.
    async fn broadcast(&mut self, status: GameStatus) -> Result<(), ServerError> {
        let update = self.update(status);
        self.x.send(&update).await?;
        self.o.send(&update).await?;
        Ok(())
    }

    fn update(&self, status: GameStatus) -> ServerMessage {
        ServerMessage::Update {
            board: self.board.clone(),
            turn: self.turn,
            status,
        }
    }

    fn active_conn(&mut self) -> &mut PlayerConn {
        match self.turn {
            Mark::X => &mut self.x,
            Mark::O => &mut self.o,
        }
    }
}
