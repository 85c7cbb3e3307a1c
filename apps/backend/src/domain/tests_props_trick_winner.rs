use proptest::prelude::*;

use crate::domain::test_gens;
/// Property-based tests for trick winner resolution
use crate::domain::trick_winner;

proptest! {
    /// Property: the winner does not depend on the order the plays are listed in,
    /// as long as the led suit is fixed.
    #[test]
    fn prop_winner_is_order_invariant(
        plays in test_gens::complete_trick(),
        trump in test_gens::trump(),
        rotate in 0usize..4,
    ) {
        let led = plays[0].1.suit;
        let winner = trick_winner(&plays, led, trump);

        let mut rotated = plays.clone();
        rotated.rotate_left(rotate);
        let mut reversed = plays.clone();
        reversed.reverse();

        prop_assert_eq!(winner, trick_winner(&rotated, led, trump));
        prop_assert_eq!(winner, trick_winner(&reversed, led, trump));
    }

    /// Property: if any trump is played, the highest trump wins; otherwise the
    /// highest card of the led suit wins.
    #[test]
    fn prop_winner_follows_band_order(
        plays in test_gens::complete_trick(),
        trump in test_gens::trump(),
    ) {
        let led = plays[0].1.suit;
        let (_, card) = trick_winner(&plays, led, trump).unwrap();

        let trumps: Vec<_> = plays
            .iter()
            .filter(|(_, c)| Some(c.suit) == trump)
            .map(|(_, c)| *c)
            .collect();
        if !trumps.is_empty() {
            prop_assert_eq!(Some(card.suit), trump);
            for t in &trumps {
                prop_assert!(card.rank >= t.rank, "winner {card} below trump {t}");
            }
        } else {
            prop_assert_eq!(card.suit, led);
            for (_, c) in plays.iter().filter(|(_, c)| c.suit == led) {
                prop_assert!(card.rank >= c.rank, "winner {card} below led {c}");
            }
        }
    }
}
