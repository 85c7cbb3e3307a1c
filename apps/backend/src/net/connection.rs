use tokio::sync::mpsc::UnboundedSender;
use tracing::debug;

use crate::domain::{Card, PlayerId};
use crate::protocol::ServerMsg;
use crate::table::Connection;

/// A socket-backed player. Everything the game says to this player is
/// queued for the socket's writer task.
#[derive(Debug)]
pub struct ClientConnection {
    player_id: PlayerId,
    hand: Vec<Card>,
    outbound: UnboundedSender<ServerMsg>,
}

impl ClientConnection {
    pub fn new(player_id: PlayerId, outbound: UnboundedSender<ServerMsg>) -> Self {
        Self {
            player_id,
            hand: Vec::new(),
            outbound,
        }
    }

    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    fn send(&self, msg: ServerMsg) {
        // Writer is gone once the socket closes; the match keeps going.
        if self.outbound.send(msg).is_err() {
            debug!(player_id = self.player_id, "Dropped message for closed socket");
        }
    }
}

impl Connection for ClientConnection {
    fn player_id(&self) -> PlayerId {
        self.player_id
    }

    fn add_card(&mut self, card: Card) {
        self.hand.push(card);
        self.send(ServerMsg::CardAdded { card });
    }

    fn remove_card(&mut self, card: &Card) -> bool {
        let Some(idx) = self.hand.iter().position(|c| c == card) else {
            return false;
        };
        self.hand.remove(idx);
        self.send(ServerMsg::CardRemoved { card: *card });
        true
    }

    fn send_message(&mut self, text: &str) {
        self.send(ServerMsg::Notice {
            text: text.to_string(),
        });
    }
}
