use std::collections::{BTreeSet, HashMap};

use tracing::warn;

use super::action::{Action, ActionResult};
use super::pipeline::{ActionExecutor, ActionRule, ActionValidator};
use crate::errors::domain::DomainError;

/// Dispatch table from action name to rule, plus the allow-list of names a
/// client may originate.
#[derive(Debug, Clone)]
pub struct ActionRouter<V, E> {
    rules: HashMap<String, ActionRule<V, E>>,
    player_actions: BTreeSet<String>,
}

impl<V, E> Default for ActionRouter<V, E> {
    fn default() -> Self {
        Self {
            rules: HashMap::new(),
            player_actions: BTreeSet::new(),
        }
    }
}

impl<V, E> ActionRouter<V, E> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a system-only rule.
    pub fn register_rule(&mut self, name: impl Into<String>, rule: ActionRule<V, E>) {
        self.rules.insert(name.into(), rule);
    }

    /// Register a rule clients may trigger directly.
    pub fn register_player_rule(&mut self, name: impl Into<String>, rule: ActionRule<V, E>) {
        let name = name.into();
        self.player_actions.insert(name.clone());
        self.rules.insert(name, rule);
    }

    pub fn is_player_action(&self, name: &str) -> bool {
        self.player_actions.contains(name)
    }

    pub fn rule(&self, name: &str) -> Option<&ActionRule<V, E>> {
        self.rules.get(name)
    }

    /// Route `action` to its rule.
    ///
    /// Unknown names, and system names arriving with `player_action` set,
    /// are fatal for this message. Everything past that is reported in the
    /// returned `ActionResult`.
    pub fn route<C: ?Sized>(
        &self,
        action: &Action,
        ctx: &mut C,
        player_action: bool,
    ) -> Result<ActionResult<E>, DomainError>
    where
        V: ActionValidator<C>,
        E: ActionExecutor<C>,
    {
        let Some(rule) = self.rules.get(action.name()) else {
            warn!(action = action.name(), "No rule registered for action");
            return Err(DomainError::UnknownAction(action.name().to_string()));
        };
        if player_action && !self.is_player_action(action.name()) {
            warn!(action = action.name(), "Client attempted a system action");
            return Err(DomainError::NotPlayerAction(action.name().to_string()));
        }
        rule.process(action, ctx)
    }
}
