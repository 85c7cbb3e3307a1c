//! The 24-card Euchre deck.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::domain::{Card, Rank, Suit};
use crate::errors::domain::DomainError;

pub const DECK_SIZE: usize = 24;

/// Ordered deck; the top card is the last element of `cards`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl Deck {
    /// Full deck in standard order (suit by suit, Nine through Ace).
    pub fn new() -> Self {
        let mut deck = Self {
            cards: Vec::with_capacity(DECK_SIZE),
        };
        deck.collect();
        deck
    }

    /// Reset to all 24 cards, discarding whatever was left.
    pub fn collect(&mut self) -> &mut Self {
        self.cards.clear();
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                self.cards.push(Card { rank, suit });
            }
        }
        self
    }

    /// Uniform random permutation (Fisher-Yates via `SliceRandom`).
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) -> &mut Self {
        self.cards.shuffle(rng);
        self
    }

    /// Remove and return the top card.
    pub fn deal(&mut self) -> Result<Card, DomainError> {
        self.cards.pop().ok_or(DomainError::EmptyDeck)
    }

    /// The card `deal` would return next, without removing it.
    pub fn peek(&self) -> Result<Card, DomainError> {
        self.cards.last().copied().ok_or(DomainError::EmptyDeck)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn contains(&self, card: &Card) -> bool {
        self.cards.contains(card)
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}
