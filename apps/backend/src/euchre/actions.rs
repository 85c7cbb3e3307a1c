//! Action names, payload keys, and the builder that turns an inbound
//! message into an [`Action`].

use serde_json::Value;

use crate::domain::cards_parsing::to_token;
use crate::domain::{Card, PlayerId, Suit, Team};
use crate::engine::{Action, Payload};
use crate::errors::domain::{DomainError, ValidationKind};

// Client-originable.
pub const PLAY: &str = "play";
pub const DISCARD: &str = "discard";
pub const CALL_RENEG: &str = "call_reneg";
pub const CALL_PICKUP: &str = "call_pickup";
pub const PASS: &str = "pass";
pub const CALL_SUIT: &str = "call_suit";

// System-only.
pub const START_GAME: &str = "start_game";
pub const DEAL: &str = "deal";
pub const SCORE_TRICK: &str = "score_trick";
pub const SCORE_HAND: &str = "score_hand";
pub const BROADCAST: &str = "broadcast";
pub const END_GAME: &str = "end_game";

pub const ACTION_TYPE: &str = "action_type";
pub const PLAYER_ID: &str = "player_id";
pub const CARD: &str = "card";
pub const SUIT: &str = "suit";
pub const TRICK_NUMBER: &str = "trick_number";
pub const TEAM_ID: &str = "team_id";
pub const MESSAGE: &str = "message";

/// Build an action from a decoded inbound message.
///
/// The caller's id always overrides any `player_id` the client sent. A
/// missing `action_type`, or a missing or unreadable field the action needs,
/// is fatal for the message. Suits are passed through as sent so a bad suit
/// is an ordinary rejected call rather than a malformed message.
pub fn build_action(message: &Payload, caller: PlayerId) -> Result<Action, DomainError> {
    let action_type = message
        .get(ACTION_TYPE)
        .and_then(Value::as_str)
        .ok_or_else(|| DomainError::missing_field(ACTION_TYPE))?;

    let mut payload = Payload::new();
    match action_type {
        PLAY | DISCARD => {
            let card = require_str(message, CARD)?.parse::<Card>()?;
            payload.insert(CARD.into(), to_token(card).into());
        }
        CALL_SUIT => {
            let suit = require_str(message, SUIT)?;
            payload.insert(SUIT.into(), suit.into());
        }
        CALL_RENEG => {
            let trick = require_u64(message, TRICK_NUMBER)?;
            let team = require_u64(message, TEAM_ID)?;
            payload.insert(TRICK_NUMBER.into(), trick.into());
            payload.insert(TEAM_ID.into(), team.into());
        }
        CALL_PICKUP | PASS => {}
        _ => {
            // Unlisted names keep their fields; the router decides whether
            // the name exists and whether a client may use it.
            payload.extend(
                message
                    .iter()
                    .filter(|(k, _)| k.as_str() != ACTION_TYPE)
                    .map(|(k, v)| (k.clone(), v.clone())),
            );
        }
    }
    payload.insert(PLAYER_ID.into(), caller.into());
    Ok(Action::new(action_type, payload))
}

fn require_str<'m>(message: &'m Payload, field: &str) -> Result<&'m str, DomainError> {
    message
        .get(field)
        .and_then(Value::as_str)
        .ok_or_else(|| DomainError::missing_field(field))
}

fn require_u64(message: &Payload, field: &str) -> Result<u64, DomainError> {
    match message.get(field) {
        None | Some(Value::Null) => Err(DomainError::missing_field(field)),
        Some(Value::Number(n)) => n.as_u64().ok_or_else(|| not_a_number(field)),
        Some(Value::String(s)) => s.trim().parse().map_err(|_| not_a_number(field)),
        Some(_) => Err(not_a_number(field)),
    }
}

fn not_a_number(field: &str) -> DomainError {
    DomainError::validation(
        ValidationKind::Other("NOT_A_NUMBER".into()),
        format!("'{field}' must be a non-negative integer"),
    )
}

/// Action with a single `message` field, used for system broadcasts.
pub fn broadcast_action(text: impl Into<String>) -> Action {
    let mut payload = Payload::new();
    payload.insert(MESSAGE.into(), Value::String(text.into()));
    Action::new(BROADCAST, payload)
}

// Typed reads of the payload keys above. `None` means absent or unreadable.

pub fn player_id(action: &Action) -> Option<PlayerId> {
    action
        .u64_field(PLAYER_ID)
        .and_then(|id| PlayerId::try_from(id).ok())
}

pub fn card(action: &Action) -> Option<Card> {
    action.str_field(CARD)?.parse().ok()
}

pub fn suit(action: &Action) -> Option<Suit> {
    action.str_field(SUIT)?.parse().ok()
}

pub fn trick_number(action: &Action) -> Option<u8> {
    action
        .u64_field(TRICK_NUMBER)
        .and_then(|n| u8::try_from(n).ok())
}

pub fn team(action: &Action) -> Option<Team> {
    action
        .u64_field(TEAM_ID)
        .and_then(|n| u8::try_from(n).ok())
        .and_then(Team::from_id)
}

pub fn message(action: &Action) -> Option<&str> {
    action.str_field(MESSAGE)
}
