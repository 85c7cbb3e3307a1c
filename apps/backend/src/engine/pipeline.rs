use tracing::debug;

use super::action::{Action, ActionResult};
use crate::errors::domain::DomainError;

/// Rounds of follow-up expansion allowed for one inbound action.
pub const MAX_FOLLOW_UP_ROUNDS: usize = 64;

pub const VALIDATION_FAILED: &str = "Action validation failed";
pub const DEFAULT_SUCCESS: &str = "Action executed successfully";

/// Pure legality check. Must not mutate anything.
pub trait ActionValidator<C: ?Sized> {
    fn validate(&self, action: &Action, ctx: &C) -> bool;

    /// Label used in debug logs when this validator rejects.
    fn label(&self) -> &'static str;
}

/// Applies an action to the context and reports follow-up work.
///
/// An `Err` is fatal for the inbound message; a failed `ActionResult` is an
/// ordinary outcome. Mutations are not rolled back in either case.
pub trait ActionExecutor<C: ?Sized>: Sized {
    fn execute(&self, action: &Action, ctx: &mut C) -> Result<ActionResult<Self>, DomainError>;
}

/// Validators plus the executor they guard.
#[derive(Debug, Clone)]
pub struct ActionRule<V, E> {
    validators: Vec<V>,
    executor: E,
    success_message: Option<String>,
}

impl<V, E> ActionRule<V, E> {
    pub fn new(validators: Vec<V>, executor: E) -> Self {
        Self {
            validators,
            executor,
            success_message: None,
        }
    }

    pub fn with_success_message(mut self, message: impl Into<String>) -> Self {
        self.success_message = Some(message.into());
        self
    }

    pub fn validators(&self) -> &[V] {
        &self.validators
    }

    pub fn executor(&self) -> &E {
        &self.executor
    }

    /// Validate, execute, then drain follow-ups level by level.
    ///
    /// Validators run in registration order and the first rejection stops
    /// the rest. Each level of follow-ups runs in order; the first failure
    /// is returned as is. Errors are executor fatals and chains that keep
    /// producing work past [`MAX_FOLLOW_UP_ROUNDS`].
    pub fn process<C: ?Sized>(
        &self,
        action: &Action,
        ctx: &mut C,
    ) -> Result<ActionResult<E>, DomainError>
    where
        V: ActionValidator<C>,
        E: ActionExecutor<C>,
    {
        for validator in &self.validators {
            if !validator.validate(action, ctx) {
                debug!(
                    action = action.name(),
                    validator = validator.label(),
                    "Validation rejected action"
                );
                return Ok(ActionResult::fail(VALIDATION_FAILED));
            }
        }

        let first = self.executor.execute(action, ctx)?;
        if !first.success {
            return Ok(first);
        }
        drain_follow_ups(
            action,
            ctx,
            first.follow_up_actions,
            self.success_message.as_deref().unwrap_or(DEFAULT_SUCCESS),
        )
    }
}

/// Run `pending` and everything it spawns, level by level.
///
/// Stops at the first failed result and returns it. Executors that need a
/// chain settled before they report can call this directly.
pub fn drain_follow_ups<C: ?Sized, E>(
    action: &Action,
    ctx: &mut C,
    mut pending: Vec<E>,
    success_message: &str,
) -> Result<ActionResult<E>, DomainError>
where
    E: ActionExecutor<C>,
{
    let mut rounds = 0usize;
    while !pending.is_empty() {
        rounds += 1;
        if rounds > MAX_FOLLOW_UP_ROUNDS {
            return Err(DomainError::FollowUpLimit(MAX_FOLLOW_UP_ROUNDS));
        }
        let mut next = Vec::new();
        for executor in pending {
            let result = executor.execute(action, ctx)?;
            if !result.success {
                return Ok(result);
            }
            next.extend(result.follow_up_actions);
        }
        pending = next;
    }

    Ok(ActionResult::ok(success_message))
}
