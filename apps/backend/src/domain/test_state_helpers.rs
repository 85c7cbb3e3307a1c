//! Test-only game state helper for domain unit tests.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::domain::rules::PLAYERS;
use crate::domain::state::{Game, Phase, PlayerId};
use crate::domain::{Board, Card, Slot};

/// Seat ids used by the helpers; seat n holds `IDS[n]`.
pub const IDS: [PlayerId; PLAYERS] = [1, 2, 3, 4];

/// Build a game with the given hands already dealt, seat 0 dealing and the
/// board set up with a face-up slot per player.
pub fn make_table(hands: [Vec<Card>; PLAYERS], phase: Phase) -> (Game, Board) {
    let mut game = Game::new(&IDS, ChaCha8Rng::seed_from_u64(42))
        .unwrap_or_else(|e| panic!("valid seating: {e}"));
    let mut board = Board::new();
    for (id, hand) in IDS.into_iter().zip(hands) {
        if let Some(p) = game.player_mut(id) {
            p.hand = hand;
        }
        board.add_slot(id, Slot::new(true));
    }
    game.set_phase(phase);
    game.set_current_player(game.left_of_dealer());
    (game, board)
}
