//! Test helpers for card parsing and fixtures

use euchre_backend::domain::cards_parsing::try_parse_cards;
use euchre_backend::domain::Card;

/// Parse hardcoded card tokens ("AS", "TH", "9C"). Panics on a bad token,
/// which is a bug in the test itself.
pub fn cards(tokens: &[&str]) -> Vec<Card> {
    try_parse_cards(tokens).unwrap_or_else(|e| panic!("bad fixture tokens {tokens:?}: {e}"))
}

pub fn card(token: &str) -> Card {
    token
        .parse()
        .unwrap_or_else(|e| panic!("bad fixture token {token}: {e}"))
}
