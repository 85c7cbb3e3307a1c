use serde::Serialize;

use crate::domain::{Card, PlayerId, Seat};
use crate::engine::{ActionResult, FollowUp, FollowUpView, Payload};
use crate::errors::ErrorCode;

/// Decoded client line: a JSON object with `action_type` plus fields.
pub type InboundMessage = Payload;

/// Reply to the client that sent an action.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutboundResult {
    pub success: bool,
    pub message: String,
    pub follow_up_actions: Vec<FollowUpView>,
}

impl<E: FollowUp> From<&ActionResult<E>> for OutboundResult {
    fn from(result: &ActionResult<E>) -> Self {
        Self {
            success: result.success,
            message: result.message.clone(),
            follow_up_actions: result.follow_up_views(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerMsg {
    Welcome {
        player_id: PlayerId,
        seat: Seat,
    },

    /// Broadcast or private text from the game.
    Notice {
        text: String,
    },

    CardAdded {
        card: Card,
    },

    CardRemoved {
        card: Card,
    },

    Result(OutboundResult),

    /// The message was not processed.
    Rejected {
        code: ErrorCode,
        message: String,
    },
}

impl ServerMsg {
    pub fn rejected(code: ErrorCode, message: impl Into<String>) -> Self {
        ServerMsg::Rejected {
            code,
            message: message.into(),
        }
    }
}
