use tracing::info;

use crate::domain::rules::{hand_points, TRICKS_PER_HAND, WINNING_SCORE};
use crate::domain::state::{Game, Phase, Team, TeamScores};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandKind {
    /// Winner took all five tricks.
    March,
    /// Defenders beat the calling team.
    Euchre,
    /// Calling team made its point.
    Made,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandOutcome {
    pub winner: Team,
    pub points: u8,
    pub kind: HandKind,
    pub game_over: bool,
}

/// Settle the hand: award game points and move to `EndGame` or `Deal`.
///
/// Returns `None` when no team is ahead on trick points, which cannot
/// happen once five points have been awarded.
pub fn apply_hand_scoring(game: &mut Game) -> Option<HandOutcome> {
    let winner = game.hand_score.leader()?;
    let tricks = game.hand_score[winner];
    let called = game.calling_team == Some(winner);
    let points = hand_points(tricks, called);
    let kind = if tricks >= TRICKS_PER_HAND {
        HandKind::March
    } else if !called {
        HandKind::Euchre
    } else {
        HandKind::Made
    };

    game.add_score(winner, points);
    let game_over = game.score[winner] >= WINNING_SCORE;
    if game_over {
        game.clear_hand_state();
        game.set_phase(Phase::EndGame);
    } else {
        game.hand_score.reset();
        game.set_phase(Phase::Deal);
    }
    info!(winner = %winner, points, ?kind, game_over, "Hand scored");
    Some(HandOutcome {
        winner,
        points,
        kind,
        game_over,
    })
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenegVerdict {
    pub upheld: bool,
    /// Team awarded the hand.
    pub winner: Team,
    /// Recorded reason when upheld.
    pub reason: Option<String>,
}

/// Adjudicate a reneg accusation by `accuser` about trick `trick`.
///
/// Upheld when the opposing team has a reneg recorded on that trick. Either
/// way the hand ends: the side that wins the call is credited with all five
/// trick points and the game moves to `ScoreGame`.
pub fn adjudicate_reneg(game: &mut Game, accuser: Team, trick: u8) -> RenegVerdict {
    let offender = accuser.opponent();
    let reason = game
        .renegs()
        .iter()
        .find(|r| r.team == offender && r.trick == trick)
        .map(|r| r.reason.clone());
    let upheld = reason.is_some();
    let winner = if upheld { accuser } else { offender };

    let mut hand_score = TeamScores::default();
    hand_score[winner] = TRICKS_PER_HAND;
    game.hand_score = hand_score;
    game.leader = None;
    game.led_suit = None;
    game.set_phase(Phase::ScoreGame);
    info!(accuser = %accuser, trick, upheld, "Reneg adjudicated");
    RenegVerdict {
        upheld,
        winner,
        reason,
    }
}
