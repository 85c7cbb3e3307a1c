pub const PLAYERS: usize = 4;
pub const HAND_SIZE: usize = 5;
pub const TRICKS_PER_HAND: u8 = 5;

/// Game points that end the match.
pub const WINNING_SCORE: u8 = 10;
/// Calling team took every trick.
pub const MARCH_POINTS: u8 = 2;
/// Defending team beat the callers.
pub const EUCHRE_POINTS: u8 = 2;
/// Calling team made its bid without a march.
pub const MAKE_POINTS: u8 = 1;

/// Points for a decided hand.
///
/// Two points for a march (`winner_tricks >= 5`) or a euchre (winner did
/// not call trump); one point otherwise.
pub fn hand_points(winner_tricks: u8, winner_called: bool) -> u8 {
    if winner_tricks >= TRICKS_PER_HAND {
        MARCH_POINTS
    } else if !winner_called {
        EUCHRE_POINTS
    } else {
        MAKE_POINTS
    }
}
