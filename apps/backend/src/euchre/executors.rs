use serde_json::Value;
use tracing::info;

use crate::domain::rules::HAND_SIZE;
use crate::domain::scoring::{adjudicate_reneg, apply_hand_scoring, HandKind};
use crate::domain::tricks::{play_card, score_trick, PlayRejection};
use crate::domain::{Phase, PlayerId, Team};
use crate::engine::{drain_follow_ups, Action, ActionExecutor, ActionResult, FollowUp, Payload};
use crate::errors::domain::DomainError;
use crate::euchre::actions;
use crate::euchre::MatchContext;

type Outcome = Result<ActionResult<Effect>, DomainError>;

/// State changes and notifications the Euchre rules can perform.
///
/// Message-carrying variants fall back to the action's `message` field when
/// built with `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    StartGame,
    Deal,
    PickUp,
    Pass,
    /// Dealer sheds a card after picking up.
    DiscardCard,
    SetTrumpSuit,
    PlayCard,
    AdjudicateReneg,
    AdvanceTurn,
    SetPlayerToDealersLeft,
    AdvanceDealer,
    ClearBoard,
    ScoreTrick,
    ScoreHand,
    EndGame,
    Broadcast(Option<String>),
    NotifyCurrentPlayer(Option<String>),
    NotifyDealer(Option<String>),
}

fn broadcast(text: impl Into<String>) -> Effect {
    Effect::Broadcast(Some(text.into()))
}

impl FollowUp for Effect {
    fn name(&self) -> &'static str {
        match self {
            Effect::StartGame => "start_game",
            Effect::Deal => "deal",
            Effect::PickUp => "pick_up",
            Effect::Pass => "pass",
            Effect::DiscardCard => "discard_card",
            Effect::SetTrumpSuit => "set_trump_suit",
            Effect::PlayCard => "play_card",
            Effect::AdjudicateReneg => "adjudicate_reneg",
            Effect::AdvanceTurn => "advance_turn",
            Effect::SetPlayerToDealersLeft => "set_player_to_dealers_left",
            Effect::AdvanceDealer => "advance_dealer",
            Effect::ClearBoard => "clear_board",
            Effect::ScoreTrick => "score_trick",
            Effect::ScoreHand => "score_hand",
            Effect::EndGame => "end_game",
            Effect::Broadcast(_) => "broadcast",
            Effect::NotifyCurrentPlayer(_) => "notify_current_player",
            Effect::NotifyDealer(_) => "notify_dealer",
        }
    }

    fn payload(&self) -> Payload {
        let mut payload = Payload::new();
        if let Effect::Broadcast(Some(text))
        | Effect::NotifyCurrentPlayer(Some(text))
        | Effect::NotifyDealer(Some(text)) = self
        {
            payload.insert(actions::MESSAGE.into(), Value::String(text.clone()));
        }
        payload
    }
}

impl<'a> ActionExecutor<MatchContext<'a>> for Effect {
    fn execute(&self, action: &Action, ctx: &mut MatchContext<'a>) -> Outcome {
        match self {
            Effect::StartGame => start_game(ctx),
            Effect::Deal => deal(ctx),
            Effect::PickUp => pick_up(action, ctx),
            Effect::Pass => pass(action),
            Effect::DiscardCard => discard_card(action, ctx),
            Effect::SetTrumpSuit => set_trump_suit(action, ctx),
            Effect::PlayCard => play(action, ctx),
            Effect::AdjudicateReneg => reneg(action, ctx),
            Effect::AdvanceTurn => advance_turn(ctx),
            Effect::SetPlayerToDealersLeft => {
                let first = ctx.game.left_of_dealer();
                ctx.game.set_current_player(first);
                ctx.game.leader = None;
                ctx.game.led_suit = None;
                Ok(ActionResult::ok("Turn set to dealer's left")
                    .with_follow_ups([broadcast(format!("Player {first}, it is your lead."))]))
            }
            Effect::AdvanceDealer => {
                let dealer = ctx.game.current_dealer();
                let next = ctx.game.next_player_id(dealer).unwrap_or(dealer);
                ctx.game.set_dealer(next);
                Ok(ActionResult::ok(format!("Player {next} deals")))
            }
            Effect::ClearBoard => {
                ctx.board.clear();
                ctx.game.clear_hand_state();
                Ok(ActionResult::ok("Board cleared"))
            }
            Effect::ScoreTrick => trick(ctx),
            Effect::ScoreHand => hand(ctx),
            Effect::EndGame => {
                ctx.board.clear();
                ctx.game.clear_hand_state();
                ctx.game.set_phase(Phase::EndGame);
                let text = actions::message(action).unwrap_or("The game has ended.");
                Ok(ActionResult::ok("Game ended").with_follow_ups([broadcast(text)]))
            }
            Effect::Broadcast(text) => {
                let Some(text) = text.as_deref().or_else(|| actions::message(action)) else {
                    return Ok(ActionResult::fail("Nothing to broadcast"));
                };
                ctx.broadcast(text);
                Ok(ActionResult::ok("Message broadcast"))
            }
            Effect::NotifyCurrentPlayer(text) => {
                let id = ctx.game.current_player();
                notify(ctx, action, id, text.as_deref(), "It is your turn.")
            }
            Effect::NotifyDealer(text) => {
                let id = ctx.game.current_dealer();
                notify(ctx, action, id, text.as_deref(), "You are the dealer.")
            }
        }
    }
}

fn notify(
    ctx: &mut MatchContext<'_>,
    action: &Action,
    id: PlayerId,
    text: Option<&str>,
    fallback: &str,
) -> Outcome {
    let text = text.or_else(|| actions::message(action)).unwrap_or(fallback);
    if ctx.notify(id, text) {
        Ok(ActionResult::ok("Player notified"))
    } else {
        Ok(ActionResult::fail(format!("Player {id} not found")))
    }
}

fn start_game(ctx: &mut MatchContext<'_>) -> Outcome {
    let dealer = ctx.game.current_dealer();
    ctx.game.set_phase(Phase::Deal);
    Ok(ActionResult::ok("Game started").with_follow_ups([
        broadcast(format!(
            "All four players are seated. Player {dealer} deals first."
        )),
        Effect::Deal,
    ]))
}

/// Gather every card, shuffle, and deal five to each player starting at the
/// dealer's left. The next card is turned up for bidding.
fn deal(ctx: &mut MatchContext<'_>) -> Outcome {
    let ids: Vec<PlayerId> = ctx.game.players().iter().map(|p| p.id).collect();
    for id in ids {
        let hand = ctx
            .game
            .player_mut(id)
            .map(|p| std::mem::take(&mut p.hand))
            .unwrap_or_default();
        for card in &hand {
            ctx.mirror_removal(id, card);
        }
    }
    ctx.board.clear();
    ctx.game.reset_deck();

    let first = ctx.game.left_of_dealer();
    let order = ctx.game.order_from(first);
    for _ in 0..HAND_SIZE {
        for &id in &order {
            let card = ctx.game.deck.deal()?;
            ctx.give_card(id, card);
        }
    }
    let turned = ctx.game.deck.peek()?;
    ctx.game.turned_card = Some(turned);
    ctx.game.leader = None;
    ctx.game.led_suit = None;
    ctx.game.set_current_player(first);
    ctx.game.set_phase(Phase::PickupCard);
    info!(
        dealer = ctx.game.current_dealer(),
        turned = %turned,
        "Hand dealt"
    );

    Ok(ActionResult::ok("Cards dealt").with_follow_ups([
        broadcast(format!(
            "{HAND_SIZE} cards have been dealt to each player. The {turned} is turned up."
        )),
        Effect::NotifyCurrentPlayer(Some(format!(
            "Player {first}, order up the {turned} or pass."
        ))),
    ]))
}

/// The dealer takes the turned card, its suit becomes trump, and the dealer
/// owes a discard.
fn pick_up(action: &Action, ctx: &mut MatchContext<'_>) -> Outcome {
    let Some(caller) = actions::player_id(action) else {
        return Ok(ActionResult::fail("Player not found"));
    };
    let dealer = ctx.game.current_dealer();
    if ctx.connections.get_connection(dealer).is_none() {
        return Ok(ActionResult::fail(format!("Dealer {dealer} not found")));
    }

    let card = ctx.game.deck.deal()?;
    ctx.give_card(dealer, card);
    ctx.game.trump_suit = Some(card.suit);
    ctx.game.calling_team = ctx.game.team_of(caller);
    ctx.game.add_blocking_discard(dealer);
    ctx.game.set_current_player(dealer);
    ctx.game.set_phase(Phase::Discard);

    Ok(ActionResult::ok("Dealer picked up").with_follow_ups([
        broadcast(format!(
            "Player {caller} ordered up the {card}. {} is trump.",
            card.suit
        )),
        Effect::NotifyDealer(Some(format!(
            "You picked up the {card}. Choose a card to discard."
        ))),
    ]))
}

fn pass(action: &Action) -> Outcome {
    let Some(caller) = actions::player_id(action) else {
        return Ok(ActionResult::fail("Player not found"));
    };
    Ok(ActionResult::ok("Passed")
        .with_follow_ups([broadcast(format!("Player {caller} passed.")), Effect::AdvanceTurn]))
}

fn discard_card(action: &Action, ctx: &mut MatchContext<'_>) -> Outcome {
    let (Some(id), Some(card)) = (actions::player_id(action), actions::card(action)) else {
        return Ok(ActionResult::fail("Discard needs a player and a card"));
    };
    if !ctx.take_card(id, &card) {
        return Ok(ActionResult::fail("Card not in hand"));
    }
    ctx.game.remove_blocking_discard(id);
    if ctx.game.is_blocked() {
        return Ok(ActionResult::ok("Discard recorded"));
    }

    ctx.game.set_phase(Phase::Play);
    Ok(ActionResult::ok("Discarded").with_follow_ups([
        broadcast(format!("Player {id} discarded.")),
        Effect::SetPlayerToDealersLeft,
    ]))
}

fn set_trump_suit(action: &Action, ctx: &mut MatchContext<'_>) -> Outcome {
    let (Some(caller), Some(suit)) = (actions::player_id(action), actions::suit(action)) else {
        return Ok(ActionResult::fail("Suit call needs a player and a suit"));
    };
    ctx.game.trump_suit = Some(suit);
    ctx.game.calling_team = ctx.game.team_of(caller);
    ctx.game.set_phase(Phase::Play);
    info!(player_id = caller, suit = %suit, "Trump called");

    Ok(ActionResult::ok("Trump set").with_follow_ups([
        broadcast(format!("Player {caller} called {suit} as trump.")),
        Effect::SetPlayerToDealersLeft,
    ]))
}

fn play(action: &Action, ctx: &mut MatchContext<'_>) -> Outcome {
    let (Some(id), Some(card)) = (actions::player_id(action), actions::card(action)) else {
        return Ok(ActionResult::fail("Play needs a player and a card"));
    };
    match play_card(ctx.game, ctx.board, id, card) {
        Ok(_) => {}
        Err(PlayRejection::CardNotInHand) => return Ok(ActionResult::fail("Card not in hand")),
        Err(PlayRejection::NoSlot) => {
            return Ok(ActionResult::fail(format!("Player {id} has no place on the board")))
        }
    }
    ctx.mirror_removal(id, &card);

    Ok(ActionResult::ok("Card played").with_follow_ups([
        broadcast(format!("Player {id} played the {card}.")),
        Effect::AdvanceTurn,
    ]))
}

/// Pass the turn clockwise and detect a completed circuit.
///
/// While bidding, the circuit closes when the dealer has just acted. During
/// play it closes when the turn comes back to the player who led.
fn advance_turn(ctx: &mut MatchContext<'_>) -> Outcome {
    let acted = ctx.game.current_player();
    let dealer = ctx.game.current_dealer();
    let next = ctx.game.next_player_id(acted).unwrap_or(acted);
    ctx.game.set_current_player(next);

    match ctx.game.phase {
        Phase::PickupCard if acted == dealer => {
            ctx.game.set_phase(Phase::PickSuit);
            let turned = ctx
                .game
                .turned_card
                .map(|c| format!("the {c}"))
                .unwrap_or_else(|| "the card".to_string());
            Ok(ActionResult::ok("Bidding moves to suit calls").with_follow_ups([
                broadcast(format!("Everyone passed on {turned}.")),
                Effect::NotifyCurrentPlayer(Some(format!(
                    "Player {next}, call a suit or pass."
                ))),
            ]))
        }
        Phase::PickSuit if acted == dealer => {
            ctx.game.add_blocking_discard(dealer);
            ctx.game.set_phase(Phase::Discard);
            Ok(ActionResult::ok("Dealer must discard")
                .with_follow_ups([Effect::NotifyDealer(Some("You must discard a card.".into()))]))
        }
        Phase::Play if ctx.game.leader == Some(next) => {
            ctx.game.set_phase(Phase::ScoreTrick);
            Ok(ActionResult::ok("Trick complete")
                .with_follow_ups([broadcast("Trick complete."), Effect::ScoreTrick]))
        }
        _ => Ok(ActionResult::ok(format!("Player {next} is up"))
            .with_follow_ups([Effect::NotifyCurrentPlayer(None)])),
    }
}

fn trick(ctx: &mut MatchContext<'_>) -> Outcome {
    let outcome = match score_trick(ctx.game, &*ctx.board) {
        Ok(outcome) => outcome,
        Err(missing) => {
            return Ok(ActionResult::fail(format!(
                "Player {missing} has not played to this trick"
            )))
        }
    };
    let summary = format!(
        "Team {} wins the trick with the {}.",
        outcome.team, outcome.card
    );
    if outcome.hand_over {
        return Ok(ActionResult::ok("Trick scored")
            .with_follow_ups([broadcast(summary), Effect::ScoreHand]));
    }
    Ok(ActionResult::ok("Trick scored").with_follow_ups([
        broadcast(format!("{summary} Player {} leads next.", outcome.winner)),
        Effect::NotifyCurrentPlayer(Some("It is your lead.".into())),
    ]))
}

fn hand(ctx: &mut MatchContext<'_>) -> Outcome {
    let Some(outcome) = apply_hand_scoring(ctx.game) else {
        return Ok(ActionResult::fail("No team is ahead on trick points"));
    };
    let kind = match outcome.kind {
        HandKind::March => "march",
        HandKind::Euchre => "euchre",
        HandKind::Made => "made",
    };
    let score = ctx.game.score;
    let summary = format!(
        "Team {} wins the hand ({kind}, +{}). Score: {} to {}.",
        outcome.winner,
        outcome.points,
        score[Team::One],
        score[Team::Two]
    );

    if outcome.game_over {
        ctx.board.clear();
        return Ok(ActionResult::ok("Game over").with_follow_ups([
            broadcast(summary),
            broadcast(format!("Team {} wins the game!", outcome.winner)),
        ]));
    }
    Ok(ActionResult::ok("Hand scored").with_follow_ups([
        broadcast(summary),
        Effect::ClearBoard,
        Effect::AdvanceDealer,
        Effect::Deal,
    ]))
}

/// Either verdict ends the hand, so hand scoring always follows and the
/// verdict goes out as a broadcast. A rejected call settles the hand here
/// and then reports failure to the accuser.
fn reneg(action: &Action, ctx: &mut MatchContext<'_>) -> Outcome {
    let (Some(accuser), Some(trick)) = (actions::team(action), actions::trick_number(action))
    else {
        return Ok(ActionResult::fail("Reneg call needs a team and a trick"));
    };
    let verdict = adjudicate_reneg(ctx.game, accuser, trick);
    let offender = accuser.opponent();
    let text = match &verdict.reason {
        Some(reason) => format!(
            "Reneg upheld against Team {offender} on trick {trick}: {reason}. Team {} takes the hand.",
            verdict.winner
        ),
        None => format!(
            "No reneg by Team {offender} on trick {trick}. Team {} takes the hand.",
            verdict.winner
        ),
    };

    let settle = [broadcast(text.clone()), Effect::ScoreHand];
    if verdict.upheld {
        return Ok(ActionResult::ok(text).with_follow_ups(settle));
    }
    let settled = drain_follow_ups(action, ctx, Vec::from(settle), "Hand settled")?;
    if !settled.success {
        return Ok(settled);
    }
    Ok(ActionResult::fail(text))
}
