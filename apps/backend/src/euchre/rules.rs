use crate::domain::Phase;
use crate::engine::{ActionRouter, ActionRule};
use crate::euchre::actions::{
    BROADCAST, CALL_PICKUP, CALL_RENEG, CALL_SUIT, DEAL, DISCARD, END_GAME, PASS, PLAY,
    SCORE_HAND, SCORE_TRICK, START_GAME,
};
use crate::euchre::executors::Effect;
use crate::euchre::validators::Check;

pub type EuchreRouter = ActionRouter<Check, Effect>;
pub type EuchreRule = ActionRule<Check, Effect>;

const BIDDING: &[Phase] = &[Phase::PickupCard, Phase::PickSuit];

fn rule(validators: Vec<Check>, effect: Effect) -> EuchreRule {
    ActionRule::new(validators, effect)
}

/// Every Euchre rule, player-facing ones on the allow-list.
pub fn build_router() -> EuchreRouter {
    let mut router = EuchreRouter::new();

    router.register_player_rule(
        PLAY,
        rule(
            vec![
                Check::CorrectPhase(&[Phase::Play]),
                Check::PlayersTurn,
                Check::HasCard,
            ],
            Effect::PlayCard,
        ),
    );
    router.register_player_rule(
        DISCARD,
        rule(
            vec![
                Check::CorrectPhase(&[Phase::Discard]),
                Check::HasCard,
                Check::BlockedOnDiscard,
            ],
            Effect::DiscardCard,
        ),
    );
    router.register_player_rule(
        CALL_RENEG,
        rule(
            vec![Check::CorrectPhase(&[Phase::Play]), Check::ValidTeam],
            Effect::AdjudicateReneg,
        )
        .with_success_message("Reneg upheld"),
    );
    router.register_player_rule(
        CALL_PICKUP,
        rule(
            vec![Check::CorrectPhase(&[Phase::PickupCard]), Check::PlayersTurn],
            Effect::PickUp,
        ),
    );
    router.register_player_rule(
        PASS,
        rule(
            vec![
                Check::CorrectPhase(BIDDING),
                Check::PlayersTurn,
                Check::CanPass,
            ],
            Effect::Pass,
        ),
    );
    router.register_player_rule(
        CALL_SUIT,
        rule(
            vec![
                Check::CorrectPhase(&[Phase::PickSuit]),
                Check::PlayersTurn,
                Check::ValidSuit,
            ],
            Effect::SetTrumpSuit,
        ),
    );

    router.register_rule(
        START_GAME,
        rule(vec![Check::CorrectPhase(&[Phase::Setup])], Effect::StartGame),
    );
    router.register_rule(
        DEAL,
        rule(vec![Check::CorrectPhase(&[Phase::Deal])], Effect::Deal),
    );
    router.register_rule(
        SCORE_TRICK,
        rule(
            vec![Check::CorrectPhase(&[Phase::ScoreTrick]), Check::TrickComplete],
            Effect::ScoreTrick,
        ),
    );
    router.register_rule(
        SCORE_HAND,
        rule(
            vec![Check::CorrectPhase(&[Phase::ScoreGame]), Check::HandComplete],
            Effect::ScoreHand,
        ),
    );
    router.register_rule(BROADCAST, rule(vec![], Effect::Broadcast(None)));
    router.register_rule(
        END_GAME,
        rule(vec![Check::GameInProgress], Effect::EndGame),
    );

    router
}
