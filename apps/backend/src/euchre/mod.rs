//! Euchre rules on top of the generic engine: the validator and executor
//! enums, the router that wires them to action names, and the setup that
//! owns a match.

pub mod actions;
pub mod executors;
pub mod rules;
pub mod setup;
pub mod validators;

#[cfg(test)]
mod tests_flow;

use tracing::warn;

use crate::domain::{Board, Card, Game, PlayerId};
use crate::table::ConnectionManager;

pub use executors::Effect;
pub use rules::{build_router, EuchreRouter};
pub use setup::EuchreSetup;
pub use validators::Check;

/// Everything one action may read or mutate.
pub struct MatchContext<'a> {
    pub connections: &'a mut dyn ConnectionManager,
    pub board: &'a mut Board,
    pub game: &'a mut Game,
}

impl<'a> MatchContext<'a> {
    pub fn new(
        connections: &'a mut dyn ConnectionManager,
        board: &'a mut Board,
        game: &'a mut Game,
    ) -> Self {
        Self {
            connections,
            board,
            game,
        }
    }

    /// Add `card` to the player's hand and mirror it to their connection.
    pub fn give_card(&mut self, id: PlayerId, card: Card) {
        match self.game.player_mut(id) {
            Some(player) => player.hand.push(card),
            None => {
                warn!(player_id = id, "Dealt card to unknown player");
                return;
            }
        }
        match self.connections.get_connection_mut(id) {
            Some(conn) => conn.add_card(card),
            None => warn!(player_id = id, card = %card, "No connection to mirror card to"),
        }
    }

    /// Remove `card` from the player's hand. Returns false if they did not
    /// hold it.
    pub fn take_card(&mut self, id: PlayerId, card: &Card) -> bool {
        let removed = self
            .game
            .player_mut(id)
            .is_some_and(|p| p.remove_card(card));
        if removed {
            self.mirror_removal(id, card);
        }
        removed
    }

    /// Tell the connection a card left the player's hand.
    pub fn mirror_removal(&mut self, id: PlayerId, card: &Card) {
        if let Some(conn) = self.connections.get_connection_mut(id) {
            if !conn.remove_card(card) {
                warn!(player_id = id, card = %card, "Connection hand out of sync");
            }
        }
    }

    pub fn broadcast(&mut self, text: &str) {
        for conn in self.connections.get_all_connections() {
            conn.send_message(text);
        }
    }

    /// Returns false when the player has no connection.
    pub fn notify(&mut self, id: PlayerId, text: &str) -> bool {
        match self.connections.get_connection_mut(id) {
            Some(conn) => {
                conn.send_message(text);
                true
            }
            None => false,
        }
    }
}
