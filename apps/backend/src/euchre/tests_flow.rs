//! Bidding, discard, and routing behaviour driven through `EuchreSetup`.

use serde_json::{json, Value};

use crate::domain::deck::DECK_SIZE;
use crate::domain::rules::HAND_SIZE;
use crate::domain::{Phase, PlayerId, Suit, Team};
use crate::engine::pipeline::VALIDATION_FAILED;
use crate::errors::domain::{DomainError, SeatingKind};
use crate::euchre::EuchreSetup;
use crate::protocol::InboundMessage;
use crate::table::{ConnectionManager, RecordingConnection};

const SEED: u64 = 7;

fn msg(value: Value) -> InboundMessage {
    match value {
        Value::Object(map) => map,
        other => panic!("expected object, got {other}"),
    }
}

fn started() -> EuchreSetup<RecordingConnection> {
    let mut setup = EuchreSetup::new(Some(SEED));
    for id in 1..=4 {
        setup.add_player(RecordingConnection::new(id)).unwrap();
    }
    let result = setup.start().unwrap();
    assert!(result.success, "{}", result.message);
    setup
}

fn send(setup: &mut EuchreSetup<RecordingConnection>, who: PlayerId, value: Value) -> bool {
    setup.handle_message(who, &msg(value)).unwrap().success
}

fn game_phase(setup: &EuchreSetup<RecordingConnection>) -> Phase {
    setup.game().unwrap().phase
}

fn conn(setup: &EuchreSetup<RecordingConnection>, id: PlayerId) -> &RecordingConnection {
    setup.table().connection(id).unwrap()
}

#[test]
fn start_deals_five_each_and_turns_a_card() {
    let setup = started();
    let game = setup.game().unwrap();

    assert_eq!(game.phase, Phase::PickupCard);
    assert_eq!(game.current_dealer(), 1);
    assert_eq!(game.current_player(), 2);
    assert_eq!(game.deck.len(), DECK_SIZE - 4 * HAND_SIZE);
    assert_eq!(game.turned_card, game.deck.peek().ok());
    for p in game.players() {
        assert_eq!(p.hand.len(), HAND_SIZE);
        let mut mirrored = conn(&setup, p.id).hand.clone();
        let mut held = p.hand.clone();
        mirrored.sort();
        held.sort();
        assert_eq!(mirrored, held, "connection view of player {}", p.id);
    }
    assert!(conn(&setup, 3).saw("deals first"));
    assert!(conn(&setup, 2).saw("order up"));
    assert!(!conn(&setup, 3).saw("order up"));
}

#[test]
fn out_of_turn_pass_is_rejected_without_changes() {
    let mut setup = started();
    let result = setup
        .handle_message(3, &msg(json!({"action_type": "pass"})))
        .unwrap();
    assert!(!result.success);
    assert_eq!(result.message, VALIDATION_FAILED);
    assert_eq!(setup.game().unwrap().current_player(), 2);
}

#[test]
fn four_passes_move_bidding_to_suit_calls() {
    let mut setup = started();
    for who in [2, 3, 4, 1] {
        assert!(send(&mut setup, who, json!({"action_type": "pass"})));
    }
    assert_eq!(game_phase(&setup), Phase::PickSuit);
    assert_eq!(setup.game().unwrap().current_player(), 2);
    assert!(conn(&setup, 2).saw("call a suit or pass"));
}

#[test]
fn dealer_is_stuck_in_the_second_round() {
    let mut setup = started();
    for who in [2, 3, 4, 1, 2, 3, 4] {
        assert!(send(&mut setup, who, json!({"action_type": "pass"})));
    }
    assert_eq!(setup.game().unwrap().current_player(), 1);
    assert!(!send(&mut setup, 1, json!({"action_type": "pass"})));
    assert_eq!(game_phase(&setup), Phase::PickSuit);
}

#[test]
fn turned_down_suit_cannot_be_called() {
    let mut setup = started();
    for who in [2, 3, 4, 1] {
        send(&mut setup, who, json!({"action_type": "pass"}));
    }
    let turned = setup.game().unwrap().turned_card.unwrap().suit;
    let other = Suit::ALL.into_iter().find(|s| *s != turned).unwrap();

    assert!(!send(
        &mut setup,
        2,
        json!({"action_type": "call_suit", "suit": turned.name()})
    ));
    assert!(!send(
        &mut setup,
        2,
        json!({"action_type": "call_suit", "suit": "Stars"})
    ));
    assert!(send(
        &mut setup,
        2,
        json!({"action_type": "call_suit", "suit": other.name()})
    ));

    let game = setup.game().unwrap();
    assert_eq!(game.phase, Phase::Play);
    assert_eq!(game.trump_suit, Some(other));
    assert_eq!(game.calling_team, Some(Team::Two));
    assert_eq!(game.current_player(), 2);
}

#[test]
fn pickup_blocks_on_the_dealer_discard() {
    let mut setup = started();
    let turned = setup.game().unwrap().turned_card.unwrap();

    assert!(send(&mut setup, 2, json!({"action_type": "call_pickup"})));
    {
        let game = setup.game().unwrap();
        assert_eq!(game.phase, Phase::Discard);
        assert_eq!(game.trump_suit, Some(turned.suit));
        assert_eq!(game.calling_team, Some(Team::Two));
        assert!(game.is_blocking(1));
        assert_eq!(game.player(1).unwrap().hand.len(), HAND_SIZE + 1);
        assert!(game.player(1).unwrap().has_card(&turned));
    }
    assert!(conn(&setup, 1).saw("Choose a card to discard"));

    // Nobody else may discard, and play is closed until the dealer does.
    let other_card = setup.game().unwrap().player(2).unwrap().hand[0];
    assert!(!send(
        &mut setup,
        2,
        json!({"action_type": "discard", "card": other_card.to_string()})
    ));
    assert!(!send(
        &mut setup,
        2,
        json!({"action_type": "play", "card": other_card.to_string()})
    ));

    let shed = setup.game().unwrap().player(1).unwrap().hand[0];
    assert!(send(
        &mut setup,
        1,
        json!({"action_type": "discard", "card": shed.to_string()})
    ));
    let game = setup.game().unwrap();
    assert_eq!(game.phase, Phase::Play);
    assert!(!game.is_blocked());
    assert_eq!(game.current_player(), 2);
    assert_eq!(game.player(1).unwrap().hand.len(), HAND_SIZE);
    assert_eq!(conn(&setup, 1).hand.len(), HAND_SIZE);
}

#[test]
fn discard_stays_face_down_even_when_asked_to_show() {
    let mut setup = started();
    assert!(send(&mut setup, 2, json!({"action_type": "call_pickup"})));

    let shed = setup.game().unwrap().player(1).unwrap().hand[0];
    assert!(send(
        &mut setup,
        1,
        json!({"action_type": "discard", "card": shed.to_string(), "show": true})
    ));
    assert_eq!(game_phase(&setup), Phase::Play);
    assert_eq!(setup.board().card_count(), 0);
    assert!(!conn(&setup, 3).saw(&shed.to_string()));
}

#[test]
fn client_cannot_trigger_system_actions() {
    let mut setup = started();
    let err = setup
        .handle_message(2, &msg(json!({"action_type": "deal"})))
        .unwrap_err();
    assert_eq!(err, DomainError::NotPlayerAction("deal".into()));
    assert_eq!(game_phase(&setup), Phase::PickupCard);
}

#[test]
fn unknown_action_is_fatal() {
    let mut setup = started();
    let err = setup
        .handle_message(2, &msg(json!({"action_type": "shuffle"})))
        .unwrap_err();
    assert_eq!(err, DomainError::UnknownAction("shuffle".into()));
}

#[test]
fn actions_before_four_players_are_not_ready() {
    let mut setup: EuchreSetup<RecordingConnection> = EuchreSetup::new(Some(SEED));
    setup.add_player(RecordingConnection::new(1)).unwrap();
    let err = setup
        .handle_message(1, &msg(json!({"action_type": "pass"})))
        .unwrap_err();
    assert!(matches!(err, DomainError::NotReady(_)));
}

#[test]
fn fifth_player_is_turned_away() {
    let mut setup = started();
    let err = setup.add_player(RecordingConnection::new(5)).unwrap_err();
    assert!(matches!(err, DomainError::Seating(SeatingKind::TableFull, _)));
    assert_eq!(setup.table().get_all_players(), vec![1, 2, 3, 4]);
}

#[test]
fn missing_player_stops_the_chain_but_keeps_state() {
    let mut setup = started();
    setup.disconnect(3);
    // Player 2 passes; notifying player 3 fails after the turn already moved.
    let result = setup
        .handle_message(2, &msg(json!({"action_type": "pass"})))
        .unwrap();
    assert!(!result.success);
    assert_eq!(result.message, "Player 3 not found");
    assert_eq!(setup.game().unwrap().current_player(), 3);
}

#[test]
fn same_seed_deals_the_same_hands() {
    let a = started();
    let b = started();
    for id in 1..=4 {
        assert_eq!(
            a.game().unwrap().player(id).unwrap().hand,
            b.game().unwrap().player(id).unwrap().hand
        );
    }
}
