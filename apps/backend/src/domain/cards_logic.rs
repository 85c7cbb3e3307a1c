//! Card game logic: checking suits in hands, valuing cards within a trick

use super::cards_types::{Card, Suit};
use super::state::PlayerId;

/// Bonus for following the led suit.
pub const LED_BONUS: u8 = 10;
/// Bonus for trump; larger than any led-suit card so trump always dominates.
pub const TRUMP_BONUS: u8 = 20;

pub fn hand_has_suit(hand: &[Card], suit: Suit) -> bool {
    hand.iter().any(|c| c.suit == suit)
}

/// Adjusted trick value of `card` given the led suit and trump.
///
/// Base rank order is 9 < 10 < J < Q < K < A (0..=5); the led-suit and trump
/// bonuses stack, so the bands never overlap.
pub fn card_value(card: Card, led: Suit, trump: Option<Suit>) -> u8 {
    let mut value = card.rank.base_value();
    if card.suit == led {
        value += LED_BONUS;
    }
    if Some(card.suit) == trump {
        value += TRUMP_BONUS;
    }
    value
}

/// Winner of a set of plays: the play with the highest adjusted value.
///
/// Returns `None` for an empty trick. Cards in one trick are unique, so the
/// maximum is unique and the result does not depend on the order of `plays`.
pub fn trick_winner(
    plays: &[(PlayerId, Card)],
    led: Suit,
    trump: Option<Suit>,
) -> Option<(PlayerId, Card)> {
    plays
        .iter()
        .copied()
        .max_by_key(|(_, card)| card_value(*card, led, trump))
}
