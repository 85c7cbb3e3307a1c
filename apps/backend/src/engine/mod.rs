//! Generic validate → execute → follow-up engine.
//!
//! Nothing in here knows about cards. A rule set plugs in a validator type
//! and an executor type (usually closed enums) and a context type that the
//! executors mutate.

pub mod action;
pub mod pipeline;
pub mod router;

pub use action::{Action, ActionResult, FollowUp, FollowUpView, Payload};
pub use pipeline::{drain_follow_ups, ActionExecutor, ActionRule, ActionValidator};
pub use router::ActionRouter;
