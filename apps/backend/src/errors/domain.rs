//! Fatal engine error type.
//!
//! Only conditions that abort processing of a single inbound message live
//! here. In-game illegal moves are not errors: they come back as a failed
//! `ActionResult` and the match carries on.

use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

/// What part of an inbound message could not be understood.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationKind {
    MissingField,
    ParseCard,
    ParseSuit,
    UnknownActionType,
    Other(String),
}

/// Seating problems while assembling a table.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SeatingKind {
    TableFull,
    DuplicatePlayer,
    Other(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Message could not be turned into an action.
    Validation(ValidationKind, String),
    /// No rule registered under this action name.
    UnknownAction(String),
    /// A client tried to trigger a system-only action.
    NotPlayerAction(String),
    /// Deal or peek against an exhausted deck.
    EmptyDeck,
    /// Follow-up expansion did not settle within the round cap.
    FollowUpLimit(usize),
    /// The match has not been created yet.
    NotReady(String),
    Seating(SeatingKind, String),
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            DomainError::Validation(kind, d) => write!(f, "validation error {kind:?}: {d}"),
            DomainError::UnknownAction(name) => write!(f, "no rule found for action: {name}"),
            DomainError::NotPlayerAction(name) => {
                write!(f, "action {name} is not allowed to be executed by a player")
            }
            DomainError::EmptyDeck => write!(f, "cannot deal from an empty deck"),
            DomainError::FollowUpLimit(rounds) => {
                write!(f, "follow-up actions did not settle after {rounds} rounds")
            }
            DomainError::NotReady(d) => write!(f, "not ready: {d}"),
            DomainError::Seating(kind, d) => write!(f, "seating {kind:?}: {d}"),
        }
    }
}

impl Error for DomainError {}

impl DomainError {
    pub fn validation(kind: ValidationKind, detail: impl Into<String>) -> Self {
        Self::Validation(kind, detail.into())
    }
    pub fn missing_field(field: &str) -> Self {
        Self::Validation(
            ValidationKind::MissingField,
            format!("message missing required '{field}' field"),
        )
    }
    pub fn seating(kind: SeatingKind, detail: impl Into<String>) -> Self {
        Self::Seating(kind, detail.into())
    }
    pub fn not_ready(detail: impl Into<String>) -> Self {
        Self::NotReady(detail.into())
    }
}
