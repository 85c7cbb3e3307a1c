use serde::Serialize;
use serde_json::{Map, Value};

/// Named action fields.
pub type Payload = Map<String, Value>;

/// An immutable request to the engine: a rule name plus its fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Action {
    name: String,
    payload: Payload,
}

impl Action {
    pub fn new(name: impl Into<String>, payload: Payload) -> Self {
        Self {
            name: name.into(),
            payload,
        }
    }

    /// Action with no fields.
    pub fn bare(name: impl Into<String>) -> Self {
        Self::new(name, Payload::new())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn payload(&self) -> &Payload {
        &self.payload
    }

    pub fn field(&self, key: &str) -> Option<&Value> {
        self.payload.get(key)
    }

    pub fn str_field(&self, key: &str) -> Option<&str> {
        self.field(key).and_then(Value::as_str)
    }

    pub fn u64_field(&self, key: &str) -> Option<u64> {
        self.field(key).and_then(Value::as_u64)
    }
}

/// Work an executor asks the engine to perform before the response is final.
///
/// The engine only needs a name and payload to report pending work back to
/// the caller when a chain stops early.
pub trait FollowUp {
    fn name(&self) -> &'static str;

    fn payload(&self) -> Payload {
        Payload::new()
    }
}

/// Outbound description of a follow-up: `{name, payload}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FollowUpView {
    pub name: String,
    pub payload: Payload,
}

/// Outcome of validation or execution.
///
/// Failure is data, not an error: the caller reports it and the match
/// continues.
#[derive(Debug, Clone, PartialEq)]
pub struct ActionResult<E> {
    pub success: bool,
    pub message: String,
    pub follow_up_actions: Vec<E>,
}

impl<E> ActionResult<E> {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            follow_up_actions: Vec::new(),
        }
    }

    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            follow_up_actions: Vec::new(),
        }
    }

    pub fn with_follow_ups(mut self, follow_ups: impl IntoIterator<Item = E>) -> Self {
        self.follow_up_actions.extend(follow_ups);
        self
    }
}

impl<E: FollowUp> ActionResult<E> {
    pub fn follow_up_views(&self) -> Vec<FollowUpView> {
        self.follow_up_actions
            .iter()
            .map(|f| FollowUpView {
                name: f.name().to_string(),
                payload: f.payload(),
            })
            .collect()
    }
}
