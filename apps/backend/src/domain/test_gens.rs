// Proptest generators for domain types.
// These generators ensure unique cards within a trick.

use proptest::prelude::*;

use crate::domain::state::PlayerId;
use crate::domain::{Card, Rank, Suit};

/// Generate a random Suit
pub fn suit() -> impl Strategy<Value = Suit> {
    prop_oneof![
        Just(Suit::Clubs),
        Just(Suit::Diamonds),
        Just(Suit::Hearts),
        Just(Suit::Spades),
    ]
}

/// Generate an optional trump suit
pub fn trump() -> impl Strategy<Value = Option<Suit>> {
    prop::option::of(suit())
}

/// Generate a vector of N unique cards from the 24-card deck
pub fn unique_cards(count: usize) -> impl Strategy<Value = Vec<Card>> {
    let mut all = Vec::with_capacity(24);
    for suit in Suit::ALL {
        for rank in Rank::ALL {
            all.push(Card { rank, suit });
        }
    }
    Just(all)
        .prop_shuffle()
        .prop_map(move |cards| cards.into_iter().take(count).collect())
}

/// A full trick: four plays by players 1..=4 with distinct cards.
pub fn complete_trick() -> impl Strategy<Value = Vec<(PlayerId, Card)>> {
    unique_cards(4).prop_map(|cards| {
        cards
            .into_iter()
            .enumerate()
            .map(|(i, c)| (i as PlayerId + 1, c))
            .collect()
    })
}
