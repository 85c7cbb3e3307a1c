use std::collections::HashMap;

use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::{debug, error, info, warn};

use crate::config::ServerConfig;
use crate::domain::PlayerId;
use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::euchre::EuchreSetup;
use crate::net::connection::ClientConnection;
use crate::protocol::{InboundMessage, OutboundResult, ServerMsg};

/// What socket tasks tell the match task.
#[derive(Debug)]
pub enum MatchEvent {
    Joined {
        player_id: PlayerId,
        outbound: UnboundedSender<ServerMsg>,
    },
    Line {
        player_id: PlayerId,
        line: String,
    },
    Left {
        player_id: PlayerId,
    },
}

/// Bind the configured address and serve one match.
pub async fn run(config: ServerConfig) -> Result<(), AppError> {
    let listener = TcpListener::bind(config.addr()).await?;
    info!(addr = %config.addr(), "Listening");
    serve(listener, config.seed).await
}

/// Accept sockets forever, feeding every one into the same match queue.
pub async fn serve(listener: TcpListener, seed: Option<u64>) -> Result<(), AppError> {
    let (events_tx, events_rx) = mpsc::unbounded_channel();
    tokio::spawn(run_match(events_rx, seed));

    let mut next_id: PlayerId = 1;
    loop {
        let (socket, peer) = listener.accept().await?;
        let player_id = next_id;
        next_id += 1;
        info!(player_id, %peer, "Client connected");
        tokio::spawn(handle_socket(socket, player_id, events_tx.clone()));
    }
}

async fn handle_socket(socket: TcpStream, player_id: PlayerId, events: UnboundedSender<MatchEvent>) {
    let (read_half, mut write_half) = socket.into_split();
    let (out_tx, mut out_rx) = mpsc::unbounded_channel::<ServerMsg>();

    let writer = tokio::spawn(async move {
        while let Some(msg) = out_rx.recv().await {
            let mut line = match serde_json::to_string(&msg) {
                Ok(line) => line,
                Err(err) => {
                    error!(player_id, error = %err, "Failed to encode outbound message");
                    continue;
                }
            };
            line.push('\n');
            if let Err(err) = write_half.write_all(line.as_bytes()).await {
                debug!(player_id, error = %err, "Write failed; closing writer");
                break;
            }
        }
    });

    if events
        .send(MatchEvent::Joined {
            player_id,
            outbound: out_tx,
        })
        .is_err()
    {
        return;
    }

    let mut lines = BufReader::new(read_half).lines();
    loop {
        match lines.next_line().await {
            Ok(Some(line)) if line.trim().is_empty() => continue,
            Ok(Some(line)) => {
                if events.send(MatchEvent::Line { player_id, line }).is_err() {
                    break;
                }
            }
            Ok(None) => break,
            Err(err) => {
                warn!(player_id, error = %err, "Read failed");
                break;
            }
        }
    }

    info!(player_id, "Client disconnected");
    let _ = events.send(MatchEvent::Left { player_id });
    // Ends once the match drops this player's senders.
    let _ = writer.await;
}

/// Single consumer of the match queue; messages are processed one at a time.
pub async fn run_match(mut events: UnboundedReceiver<MatchEvent>, seed: Option<u64>) {
    let mut host = MatchHost::new(seed);
    while let Some(event) = events.recv().await {
        host.handle(event);
    }
}

/// Synchronous match state behind the queue.
pub struct MatchHost {
    setup: EuchreSetup<ClientConnection>,
    replies: HashMap<PlayerId, UnboundedSender<ServerMsg>>,
}

impl MatchHost {
    pub fn new(seed: Option<u64>) -> Self {
        Self {
            setup: EuchreSetup::new(seed),
            replies: HashMap::new(),
        }
    }

    pub fn setup(&self) -> &EuchreSetup<ClientConnection> {
        &self.setup
    }

    pub fn handle(&mut self, event: MatchEvent) {
        match event {
            MatchEvent::Joined {
                player_id,
                outbound,
            } => self.join(player_id, outbound),
            MatchEvent::Line { player_id, line } => self.line(player_id, &line),
            MatchEvent::Left { player_id } => {
                self.replies.remove(&player_id);
                self.setup.disconnect(player_id);
            }
        }
    }

    fn join(&mut self, player_id: PlayerId, outbound: UnboundedSender<ServerMsg>) {
        let connection = ClientConnection::new(player_id, outbound.clone());
        match self.setup.add_player(connection) {
            Ok(seat) => {
                let _ = outbound.send(ServerMsg::Welcome { player_id, seat });
                self.replies.insert(player_id, outbound);
                if self.setup.is_ready() {
                    if let Err(err) = self.setup.start() {
                        error!(error = %err, "Match failed to start");
                    }
                }
            }
            Err(err) => {
                warn!(player_id, error = %err, "Join refused");
                let _ = outbound.send(ServerMsg::rejected(ErrorCode::from(&err), err.to_string()));
            }
        }
    }

    fn line(&mut self, player_id: PlayerId, line: &str) {
        let reply = match self.process(player_id, line) {
            Ok(result) => ServerMsg::Result(result),
            Err(err) => {
                error!(player_id, error = %err, "Message rejected");
                ServerMsg::rejected(err.code(), err.to_string())
            }
        };
        if let Some(tx) = self.replies.get(&player_id) {
            let _ = tx.send(reply);
        }
    }

    fn process(&mut self, player_id: PlayerId, line: &str) -> Result<OutboundResult, AppError> {
        let message: InboundMessage = serde_json::from_str(line)?;
        Ok(self.setup.handle_message(player_id, &message)?)
    }
}
