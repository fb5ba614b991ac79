//! Protocol messages for client-server communication.
//!
//! Two enums define the full protocol vocabulary:
//! - `ClientMessage`: sent by game clients to the server.
//! - `ServerMessage`: sent by the server to game clients.
//!
//! Each message is a JSON record tagged by a `type` field. Move
//! coordinates travel as signed integers so that out-of-range values reach
//! the board model and are rejected as an invalid move rather than dying
//! in deserialization.

use crate::error::ProtocolError;
use noughts_core::{Board, GameStatus, Mark};
use serde::{Deserialize, Serialize};

/// Messages sent by a client to the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ClientMessage {
    /// Join matchmaking (handshake; must be the first message).
    #[serde(rename = "CONNECT")]
    Connect,
    /// Proposed move at (row, col).
    #[serde(rename = "MOVE")]
    Move {
        /// Target row, expected in `[0, 2]`.
        row: i32,
        /// Target column, expected in `[0, 2]`.
        col: i32,
    },
}

/// Messages sent by the server to a client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ServerMessage {
    /// Role assignment at session start.
    #[serde(rename = "WELCOME")]
    Welcome {
        /// `"Player X"` or `"Player O"`.
        payload: String,
    },
    /// Authoritative state broadcast.
    #[serde(rename = "UPDATE")]
    Update {
        /// Full board state.
        board: Board,
        /// Whose turn it is. On a terminal update this stays at the mover
        /// who ended the game.
        turn: Mark,
        /// Game status after the last move.
        status: GameStatus,
    },
}

impl ServerMessage {
    /// Creates the role-assignment message for `mark`.
    #[must_use]
    pub fn welcome(mark: Mark) -> Self {
        Self::Welcome {
            payload: format!("Player {mark}"),
        }
    }

    /// Extracts the assigned mark from a WELCOME payload.
    #[must_use]
    pub fn welcome_mark(payload: &str) -> Option<Mark> {
        match payload.chars().last() {
            Some('X') => Some(Mark::X),
            Some('O') => Some(Mark::O),
            _ => None,
        }
    }
}

/// Serializes a message into a frame payload.
///
/// # Errors
/// Returns `ProtocolError::Malformed` if serialization fails.
pub fn encode<M: Serialize>(message: &M) -> Result<Vec<u8>, ProtocolError> {
    Ok(serde_json::to_vec(message)?)
}

/// Decodes one frame payload into a client message.
///
/// # Errors
/// Returns `ProtocolError::Malformed` if the payload is not a well-formed
/// client message.
pub fn decode_client(payload: &[u8]) -> Result<ClientMessage, ProtocolError> {
    Ok(serde_json::from_slice(payload)?)
}

/// Decodes one frame payload into a server message.
///
/// # Errors
/// Returns `ProtocolError::Malformed` if the payload is not a well-formed
/// server message.
pub fn decode_server(payload: &[u8]) -> Result<ServerMessage, ProtocolError> {
    Ok(serde_json::from_slice(payload)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use noughts_core::Cell;

    #[test]
    fn test_connect_wire_form() {
        let json = serde_json::to_string(&ClientMessage::Connect).unwrap();
        assert_eq!(json, r#"{"type":"CONNECT"}"#);
        assert_eq!(
            decode_client(json.as_bytes()).unwrap(),
            ClientMessage::Connect
        );
    }

    #[test]
    fn test_move_wire_form() {
        let msg = ClientMessage::Move { row: 1, col: 2 };
        let json = serde_json::to_string(&msg).unwrap();
        assert_eq!(json, r#"{"type":"MOVE","row":1,"col":2}"#);
        assert_eq!(decode_client(json.as_bytes()).unwrap(), msg);
    }

    #[test]
    fn test_move_accepts_out_of_range_coordinates() {
        // Range validation is the board model's job; the wire layer only
        // requires integers.
        let msg = decode_client(br#"{"type":"MOVE","row":-1,"col":9}"#).unwrap();
        assert_eq!(msg, ClientMessage::Move { row: -1, col: 9 });
    }

    #[test]
    fn test_welcome_wire_form() {
        let msg = ServerMessage::welcome(Mark::X);
        let json = serde_json::to_string(&msg).unwrap();
        assert_eq!(json, r#"{"type":"WELCOME","payload":"Player X"}"#);

        match decode_server(json.as_bytes()).unwrap() {
            ServerMessage::Welcome { payload } => {
                assert_eq!(ServerMessage::welcome_mark(&payload), Some(Mark::X));
            }
            other => panic!("expected Welcome, got {other:?}"),
        }
    }

    #[test]
    fn test_update_wire_form() {
        let mut board = Board::new();
        board.apply(Mark::X, 0, 0).unwrap();
        let msg = ServerMessage::Update {
            board: board.clone(),
            turn: Mark::O,
            status: GameStatus::Ongoing,
        };

        let json = serde_json::to_string(&msg).unwrap();
        assert_eq!(
            json,
            r#"{"type":"UPDATE","board":[["X"," "," "],[" "," "," "],[" "," "," "]],"turn":"O","status":"ongoing"}"#
        );

        match decode_server(json.as_bytes()).unwrap() {
            ServerMessage::Update {
                board: b,
                turn,
                status,
            } => {
                assert_eq!(b.cells()[0][0], Cell::X);
                assert_eq!(turn, Mark::O);
                assert_eq!(status, GameStatus::Ongoing);
            }
            other => panic!("expected Update, got {other:?}"),
        }
    }

    #[test]
    fn test_terminal_update_status() {
        let msg = ServerMessage::Update {
            board: Board::new(),
            turn: Mark::X,
            status: GameStatus::Win(Mark::X),
        };
        let json = serde_json::to_string(&msg).unwrap();
        assert!(json.contains(r#""status":"Player X wins!""#));
    }

    #[test]
    fn test_malformed_payload_rejected() {
        assert!(matches!(
            decode_client(b"not json at all"),
            Err(ProtocolError::Malformed(_))
        ));
        // Well-formed JSON of the wrong shape is just as malformed.
        assert!(matches!(
            decode_client(br#"{"type":"DANCE"}"#),
            Err(ProtocolError::Malformed(_))
        ));
        assert!(matches!(
            decode_server(br#"{"type":"MOVE","row":0,"col":0}"#),
            Err(ProtocolError::Malformed(_))
        ));
    }

    #[test]
    fn test_welcome_mark_garbage() {
        assert_eq!(ServerMessage::welcome_mark("Player Q"), None);
        assert_eq!(ServerMessage::welcome_mark(""), None);
    }
}
