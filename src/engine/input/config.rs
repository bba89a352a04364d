// Key binding configuration and remapping

use super::action::{default_bindings, Action, KeyCode};
use crate::error::{CleanerError, Result};
use crate::socd::{CleaningPolicy, Direction};
use std::collections::HashMap;

/// Maps physical keys to cleaner actions.
///
/// Several keys may drive the same action; a key drives at most one action.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    /// Mapping from keys to actions
    bindings: HashMap<KeyCode, Action>,

    /// Reverse mapping for quick lookups (action -> all keys)
    action_to_keys: HashMap<Action, Vec<KeyCode>>,
}

impl KeyBindings {
    /// Create an empty set of bindings
    pub fn new() -> Self {
        Self {
            bindings: HashMap::new(),
            action_to_keys: HashMap::new(),
        }
    }

    /// Create bindings from a list of (key, action) pairs
    pub fn from_bindings(bindings: Vec<(KeyCode, Action)>) -> Self {
        let mut config = Self::new();
        for (key, action) in bindings {
            config.bind(key, action);
        }
        config
    }

    /// Bind a key to an action
    pub fn bind(&mut self, key: KeyCode, action: Action) {
        // Remove any existing binding for this key
        self.unbind_key(key);

        self.bindings.insert(key, action);
        self.action_to_keys.entry(action).or_default().push(key);
    }

    /// Unbind a key
    pub fn unbind_key(&mut self, key: KeyCode) {
        if let Some(action) = self.bindings.remove(&key) {
            if let Some(keys) = self.action_to_keys.get_mut(&action) {
                keys.retain(|k| *k != key);
                if keys.is_empty() {
                    self.action_to_keys.remove(&action);
                }
            }
        }
    }

    /// Get all keys bound to an action, in binding order
    pub fn get_keys(&self, action: Action) -> &[KeyCode] {
        self.action_to_keys
            .get(&action)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Keys that move in a direction
    pub fn direction_keys(&self, direction: Direction) -> &[KeyCode] {
        self.get_keys(Action::Move(direction))
    }

    /// Keys that select a policy
    pub fn switch_keys(&self, policy: CleaningPolicy) -> &[KeyCode] {
        self.get_keys(Action::SwitchPolicy(policy))
    }

    /// Every bound key, sorted by key code
    pub fn all_keys(&self) -> Vec<KeyCode> {
        let mut keys: Vec<KeyCode> = self.bindings.keys().copied().collect();
        keys.sort_by_key(|key| key.code());
        keys
    }

    /// Every direction needs at least one key; switch keys are optional
    pub fn validate(&self) -> Result<()> {
        let missing: Vec<&str> = Direction::ALL
            .iter()
            .filter(|d| self.direction_keys(**d).is_empty())
            .map(|d| d.name())
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(CleanerError::InvalidBindings {
                message: format!("no key bound for {}", missing.join(", ")),
            })
        }
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self::from_bindings(default_bindings())
    }
}
