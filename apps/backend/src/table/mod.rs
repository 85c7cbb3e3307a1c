//! Connection contract the rule set talks to, plus the in-memory table that
//! seats up to four connections.

pub mod recording;

use std::collections::BTreeMap;

use tracing::info;

use crate::domain::rules::PLAYERS;
use crate::domain::{Card, PlayerId, Seat};
use crate::errors::domain::{DomainError, SeatingKind};

pub use recording::RecordingConnection;

/// One seated client as the rule set sees it.
///
/// `add_card`/`remove_card` keep the client's view of its hand in sync with
/// the game; the game itself stays the source of truth.
pub trait Connection {
    fn player_id(&self) -> PlayerId;

    fn add_card(&mut self, card: Card);

    /// Returns false when the connection did not think it held `card`.
    fn remove_card(&mut self, card: &Card) -> bool;

    fn send_message(&mut self, text: &str);
}

pub trait ConnectionManager {
    fn get_connection(&self, id: PlayerId) -> Option<&dyn Connection>;

    fn get_connection_mut(&mut self, id: PlayerId) -> Option<&mut dyn Connection>;

    fn get_all_connections(&mut self) -> Vec<&mut dyn Connection>;

    /// Seated players in seating order.
    fn get_all_players(&self) -> Vec<PlayerId>;
}

/// Up to four connections keyed by player id, remembering join order.
#[derive(Debug)]
pub struct Table<C> {
    connections: BTreeMap<PlayerId, C>,
    seating: Vec<PlayerId>,
}

impl<C> Default for Table<C> {
    fn default() -> Self {
        Self {
            connections: BTreeMap::new(),
            seating: Vec::new(),
        }
    }
}

impl<C: Connection> Table<C> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seat a connection at the next free seat.
    pub fn seat(&mut self, connection: C) -> Result<Seat, DomainError> {
        let id = connection.player_id();
        if self.seating.contains(&id) {
            return Err(DomainError::seating(
                SeatingKind::DuplicatePlayer,
                format!("player {id} is already seated"),
            ));
        }
        if self.is_full() {
            return Err(DomainError::seating(
                SeatingKind::TableFull,
                format!("table already has {PLAYERS} players"),
            ));
        }
        let seat = self.seating.len() as Seat;
        self.seating.push(id);
        self.connections.insert(id, connection);
        info!(player_id = id, seat, "Player seated");
        Ok(seat)
    }

    /// Drop a player's connection. Their seat stays reserved so the match
    /// keeps its seating order.
    pub fn disconnect(&mut self, id: PlayerId) -> Option<C> {
        let removed = self.connections.remove(&id);
        if removed.is_some() {
            info!(player_id = id, "Player disconnected");
        }
        removed
    }

    pub fn is_full(&self) -> bool {
        self.seating.len() >= PLAYERS
    }

    pub fn seating(&self) -> &[PlayerId] {
        &self.seating
    }

    pub fn connection(&self, id: PlayerId) -> Option<&C> {
        self.connections.get(&id)
    }

    pub fn connection_mut(&mut self, id: PlayerId) -> Option<&mut C> {
        self.connections.get_mut(&id)
    }
}

impl<C: Connection> ConnectionManager for Table<C> {
    fn get_connection(&self, id: PlayerId) -> Option<&dyn Connection> {
        self.connections.get(&id).map(|c| c as &dyn Connection)
    }

    fn get_connection_mut(&mut self, id: PlayerId) -> Option<&mut dyn Connection> {
        self.connections
            .get_mut(&id)
            .map(|c| c as &mut dyn Connection)
    }

    fn get_all_connections(&mut self) -> Vec<&mut dyn Connection> {
        self.connections
            .values_mut()
            .map(|c| c as &mut dyn Connection)
            .collect()
    }

    fn get_all_players(&self) -> Vec<PlayerId> {
        self.seating.clone()
    }
}
