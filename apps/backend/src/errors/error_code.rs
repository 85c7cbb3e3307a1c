//! Error codes sent to clients when a message is rejected.
//!
//! All codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings that
//! appear in `rejected` replies. Add new codes here; never pass ad-hoc
//! strings as error codes.

use core::fmt;

use serde::{Serialize, Serializer};

use crate::errors::domain::{DomainError, SeatingKind, ValidationKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Message problems
    /// Line was not a JSON object
    BadRequest,
    /// Required field missing
    MissingField,
    /// Card could not be parsed
    ParseCard,
    /// Other unreadable field
    ValidationError,

    // Routing
    /// No rule with that name
    UnknownAction,
    /// System action sent by a client
    Forbidden,

    // Table
    /// Match has not started
    NotReady,
    /// Four players already seated
    TableFull,
    /// Player id already seated
    SeatTaken,

    // Engine
    /// Deck ran out mid-deal
    EmptyDeck,
    /// Follow-up chain did not settle
    FollowUpLimit,

    Internal,
    ConfigError,
}

impl ErrorCode {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::BadRequest => "BAD_REQUEST",
            Self::MissingField => "MISSING_FIELD",
            Self::ParseCard => "PARSE_CARD",
            Self::ValidationError => "VALIDATION_ERROR",

            Self::UnknownAction => "UNKNOWN_ACTION",
            Self::Forbidden => "FORBIDDEN",

            Self::NotReady => "NOT_READY",
            Self::TableFull => "TABLE_FULL",
            Self::SeatTaken => "SEAT_TAKEN",

            Self::EmptyDeck => "EMPTY_DECK",
            Self::FollowUpLimit => "FOLLOW_UP_LIMIT",

            Self::Internal => "INTERNAL",
            Self::ConfigError => "CONFIG_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for ErrorCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl From<&DomainError> for ErrorCode {
    fn from(err: &DomainError) -> Self {
        match err {
            DomainError::Validation(ValidationKind::MissingField, _) => Self::MissingField,
            DomainError::Validation(ValidationKind::ParseCard, _) => Self::ParseCard,
            DomainError::Validation(ValidationKind::UnknownActionType, _) => Self::UnknownAction,
            DomainError::Validation(_, _) => Self::ValidationError,
            DomainError::UnknownAction(_) => Self::UnknownAction,
            DomainError::NotPlayerAction(_) => Self::Forbidden,
            DomainError::EmptyDeck => Self::EmptyDeck,
            DomainError::FollowUpLimit(_) => Self::FollowUpLimit,
            DomainError::NotReady(_) => Self::NotReady,
            DomainError::Seating(SeatingKind::TableFull, _) => Self::TableFull,
            DomainError::Seating(SeatingKind::DuplicatePlayer, _) => Self::SeatTaken,
            DomainError::Seating(_, _) => Self::Internal,
        }
    }
}
