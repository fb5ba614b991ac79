//! Noughts terminal client binary.
//!
//! Connects to the fixed loopback address, joins matchmaking, renders
//! every broadcast, and forwards "row col" input on the player's turn.
//! All decisions stay server-side; a rejected move simply comes back as
//! an unchanged board and another prompt.

use noughts_client::ui::{parse_coords, render_board};
use noughts_client::{Client, ClientConfig};
use noughts_proto::message::ServerMessage;
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut client = Client::connect(ClientConfig::default()).await?;
    client.join().await?;
    println!("Connected. Waiting for opponent...");

    let mut stdin = BufReader::new(tokio::io::stdin()).lines();
    let mut my_mark = None;

    loop {
        let Some(message) = client.recv().await? else {
            println!("Server closed the connection.");
            break;
        };

        match message {
            ServerMessage::Welcome { payload } => {
                my_mark = ServerMessage::welcome_mark(&payload);
                println!("Match found! You are {payload}.");
            }
            ServerMessage::Update {
                board,
                turn,
                status,
            } => {
                print!("{}", render_board(&board));

                if status.is_terminal() {
                    println!("Game Over: {status}");
                    break;
                }

                if my_mark == Some(turn) {
                    println!("It's your turn!");
                    loop {
                        print!("Enter row and col (e.g., '1 1'): ");
                        std::io::stdout().flush()?;

                        let Some(line) = stdin.next_line().await? else {
                            return Ok(());
                        };
                        if let Some((row, col)) = parse_coords(&line) {
                            client.send_move(row, col).await?;
                            break;
                        }
                        println!("Please enter two numbers, e.g. '1 1'.");
                    }
                } else {
                    println!("Waiting for opponent...");
                }
            }
        }
    }

    Ok(())
}
