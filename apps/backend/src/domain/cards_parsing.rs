//! Card parsing from string representations (e.g., "AS", "TH", "10H", "A of Hearts")

use std::str::FromStr;

use super::cards_types::{Card, Rank, Suit};
use crate::errors::domain::{DomainError, ValidationKind};

fn parse_rank(token: &str) -> Option<Rank> {
    match token.to_ascii_uppercase().as_str() {
        "9" | "NINE" => Some(Rank::Nine),
        "T" | "10" | "TEN" => Some(Rank::Ten),
        "J" | "JACK" => Some(Rank::Jack),
        "Q" | "QUEEN" => Some(Rank::Queen),
        "K" | "KING" => Some(Rank::King),
        "A" | "ACE" => Some(Rank::Ace),
        _ => None,
    }
}

impl FromStr for Suit {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "C" | "CLUBS" => Ok(Suit::Clubs),
            "D" | "DIAMONDS" => Ok(Suit::Diamonds),
            "H" | "HEARTS" => Ok(Suit::Hearts),
            "S" | "SPADES" => Ok(Suit::Spades),
            _ => Err(DomainError::validation(
                ValidationKind::ParseSuit,
                format!("Invalid suit: {s}"),
            )),
        }
    }
}

impl FromStr for Card {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || {
            DomainError::validation(
                ValidationKind::ParseCard,
                format!("Invalid card string format: {s}. Expected 'AS' or 'A of Spades'"),
            )
        };
        let s_trim = s.trim();

        // Long form: "RANK of SUIT"
        let words: Vec<&str> = s_trim.split_whitespace().collect();
        if let [rank, of, suit] = words.as_slice() {
            if !of.eq_ignore_ascii_case("of") {
                return Err(err());
            }
            let rank = parse_rank(rank).ok_or_else(err)?;
            let suit = suit.parse::<Suit>().map_err(|_| err())?;
            return Ok(Card { rank, suit });
        }

        // Compact form: rank token followed by a single suit letter
        if !s_trim.is_ascii() || s_trim.len() < 2 || s_trim.len() > 3 {
            return Err(err());
        }
        let (rank_tok, suit_tok) = s_trim.split_at(s_trim.len() - 1);
        let rank = parse_rank(rank_tok).ok_or_else(err)?;
        let suit = suit_tok.parse::<Suit>().map_err(|_| err())?;
        Ok(Card { rank, suit })
    }
}

/// Non-panicking helper to parse card tokens into Card instances.
pub fn try_parse_cards<I, S>(tokens: I) -> Result<Vec<Card>, DomainError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tokens
        .into_iter()
        .map(|s| s.as_ref().parse::<Card>())
        .collect()
}

/// Compact two-character token used on the wire ("9H", "TS", "AD").
pub fn to_token(card: Card) -> String {
    let rank = match card.rank {
        Rank::Nine => '9',
        Rank::Ten => 'T',
        Rank::Jack => 'J',
        Rank::Queen => 'Q',
        Rank::King => 'K',
        Rank::Ace => 'A',
    };
    let suit = match card.suit {
        Suit::Clubs => 'C',
        Suit::Diamonds => 'D',
        Suit::Hearts => 'H',
        Suit::Spades => 'S',
    };
    format!("{rank}{suit}")
}
