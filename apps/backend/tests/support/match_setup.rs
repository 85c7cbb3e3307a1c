//! Seat a full table of recording connections and arrange hands.

use euchre_backend::domain::{Phase, PlayerId, Suit, Team, TeamScores};
use euchre_backend::{EuchreSetup, InboundMessage, OutboundResult, RecordingConnection};
use serde_json::Value;

use super::card_helpers::cards;

pub type Match = EuchreSetup<RecordingConnection>;

pub const SEED: u64 = 2024;

pub fn msg(value: Value) -> InboundMessage {
    match value {
        Value::Object(map) => map,
        other => panic!("expected a JSON object, got {other}"),
    }
}

/// Players 1..=4 seated in order and the first hand dealt. Player 1 deals,
/// so player 2 acts first.
pub fn started_match() -> Match {
    let mut setup = EuchreSetup::new(Some(SEED));
    for id in 1..=4 {
        setup
            .add_player(RecordingConnection::new(id))
            .unwrap_or_else(|e| panic!("seat {id}: {e}"));
    }
    let result = setup.start().unwrap_or_else(|e| panic!("start: {e}"));
    assert!(result.success, "start failed: {}", result.message);
    setup
}

/// Route a client message that must not be fatal.
pub fn send(setup: &mut Match, who: PlayerId, value: Value) -> OutboundResult {
    setup
        .handle_message(who, &msg(value))
        .unwrap_or_else(|e| panic!("player {who} message was fatal: {e}"))
}

/// Replace the dealt hand with known cards and jump straight to trick play
/// with `trump` named by `calling`. Connections get the same hands so the
/// mirrored views stay in sync.
pub fn rig_hand(setup: &mut Match, hands: [&[&str]; 4], trump: Suit, calling: Team) {
    let game = setup.game_mut().unwrap_or_else(|| panic!("match not created"));
    for (id, tokens) in (1..=4).zip(hands) {
        if let Some(p) = game.player_mut(id) {
            p.hand = cards(tokens);
        }
    }
    game.trump_suit = Some(trump);
    game.calling_team = Some(calling);
    game.hand_score = TeamScores::default();
    game.leader = None;
    game.led_suit = None;
    game.clear_renegs();
    let first = game.left_of_dealer();
    game.set_current_player(first);
    game.set_phase(Phase::Play);

    for (id, tokens) in (1..=4).zip(hands) {
        if let Some(conn) = setup.table_mut().connection_mut(id) {
            conn.hand = cards(tokens);
        }
    }
}
