use crate::domain::{Card, PlayerId};
use crate::table::Connection;

/// In-memory connection that keeps everything it is sent.
///
/// Used by tests and by anything that wants to drive a match without a
/// socket.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordingConnection {
    pub player_id: PlayerId,
    pub hand: Vec<Card>,
    pub messages: Vec<String>,
}

impl RecordingConnection {
    pub fn new(player_id: PlayerId) -> Self {
        Self {
            player_id,
            ..Self::default()
        }
    }

    pub fn last_message(&self) -> Option<&str> {
        self.messages.last().map(String::as_str)
    }

    pub fn saw(&self, needle: &str) -> bool {
        self.messages.iter().any(|m| m.contains(needle))
    }
}

impl Connection for RecordingConnection {
    fn player_id(&self) -> PlayerId {
        self.player_id
    }

    fn add_card(&mut self, card: Card) {
        self.hand.push(card);
    }

    fn remove_card(&mut self, card: &Card) -> bool {
        match self.hand.iter().position(|c| c == card) {
            Some(idx) => {
                self.hand.swap_remove(idx);
                true
            }
            None => false,
        }
    }

    fn send_message(&mut self, text: &str) {
        self.messages.push(text.to_string());
    }
}
