use crate::domain::rules::TRICKS_PER_HAND;
use crate::domain::tricks::current_trick;
use crate::domain::Phase;
use crate::engine::{Action, ActionValidator};
use crate::euchre::actions;
use crate::euchre::MatchContext;

/// Legality checks used by the Euchre rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Check {
    /// Game is in one of these phases.
    CorrectPhase(&'static [Phase]),
    /// Caller is the current player and still connected.
    PlayersTurn,
    /// Dealer cannot pass the second bidding round.
    CanPass,
    /// Caller owes a discard.
    BlockedOnDiscard,
    /// Caller holds the named card.
    HasCard,
    /// Named suit exists and is not the suit just turned down.
    ValidSuit,
    /// Accusing team is the caller's own team and the trick has been reached.
    ValidTeam,
    /// Every seat has played to the trick in progress.
    TrickComplete,
    /// All trick points for the hand have been awarded.
    HandComplete,
    /// Anything but `EndGame`.
    GameInProgress,
}

impl<'a> ActionValidator<MatchContext<'a>> for Check {
    fn validate(&self, action: &Action, ctx: &MatchContext<'a>) -> bool {
        let game = &*ctx.game;
        match self {
            Check::CorrectPhase(phases) => phases.contains(&game.phase),
            Check::PlayersTurn => actions::player_id(action).is_some_and(|id| {
                id == game.current_player() && ctx.connections.get_connection(id).is_some()
            }),
            Check::CanPass => {
                let is_dealer = actions::player_id(action) == Some(game.current_dealer());
                !(is_dealer && game.phase == Phase::PickSuit)
            }
            Check::BlockedOnDiscard => {
                actions::player_id(action).is_some_and(|id| game.is_blocking(id))
            }
            Check::HasCard => match (actions::player_id(action), actions::card(action)) {
                (Some(id), Some(card)) => game.player(id).is_some_and(|p| p.has_card(&card)),
                _ => false,
            },
            Check::ValidSuit => match actions::suit(action) {
                Some(suit) => game.turned_card.map_or(true, |c| c.suit != suit),
                None => false,
            },
            Check::ValidTeam => {
                let reached = game.trick_number().min(TRICKS_PER_HAND);
                let trick_ok =
                    actions::trick_number(action).is_some_and(|n| (1..=reached).contains(&n));
                let callers_team = actions::player_id(action).and_then(|id| game.team_of(id));
                let team_ok = actions::team(action).is_some_and(|t| Some(t) == callers_team);
                team_ok && trick_ok
            }
            Check::TrickComplete => current_trick(game, &*ctx.board).is_ok(),
            Check::HandComplete => game.hand_score.total() >= TRICKS_PER_HAND,
            Check::GameInProgress => game.phase != Phase::EndGame,
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Check::CorrectPhase(_) => "correct_phase",
            Check::PlayersTurn => "players_turn",
            Check::CanPass => "can_pass",
            Check::BlockedOnDiscard => "blocked_on_discard",
            Check::HasCard => "has_card",
            Check::ValidSuit => "valid_suit",
            Check::ValidTeam => "valid_team",
            Check::TrickComplete => "trick_complete",
            Check::HandComplete => "hand_complete",
            Check::GameInProgress => "game_in_progress",
        }
    }
}
