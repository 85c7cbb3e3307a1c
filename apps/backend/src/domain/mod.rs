//! Domain layer: card primitives, the game aggregate, and the pure trick and
//! hand scoring logic the rule executors are built on.

pub mod board;
pub mod cards_logic;
pub mod cards_parsing;
pub mod cards_serde;
pub mod cards_types;
pub mod deck;
pub mod rules;
pub mod scoring;
pub mod state;
pub mod tricks;

#[cfg(test)]
mod test_gens;
#[cfg(test)]
mod test_state_helpers;
#[cfg(test)]
mod tests_props_trick_winner;
#[cfg(test)]
mod tests_scoring;
#[cfg(test)]
mod tests_tricks;

// Re-exports for ergonomics
pub use board::{Board, Slot};
pub use cards_logic::{card_value, hand_has_suit, trick_winner};
pub use cards_types::{Card, Rank, Suit};
pub use deck::Deck;
pub use state::{Game, Phase, Player, PlayerId, Reneg, Seat, Team, TeamScores};
