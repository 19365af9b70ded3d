use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::input::KeyAction;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
/// Configurable keyboard bindings mapping actions to key codes.
pub struct KeybindingOptions {
    /// Maps action → key string (e.g. `MoveForward` → `"KeyW"`).
    pub bindings: HashMap<KeyAction, String>,
    /// Reverse lookup cache (key string → action). Rebuilt on load.
    #[serde(skip)]
    key_to_action: HashMap<String, KeyAction>,
}

impl Default for KeybindingOptions {
    fn default() -> Self {
        let bindings = HashMap::from([
            (KeyAction::MoveForward, "KeyW".into()),
            (KeyAction::MoveBackward, "KeyS".into()),
            (KeyAction::MoveLeft, "KeyA".into()),
            (KeyAction::MoveRight, "KeyD".into()),
            (KeyAction::MoveUp, "Space".into()),
            (KeyAction::MoveDown, "ShiftLeft".into()),
            (KeyAction::Quit, "Escape".into()),
        ]);

        let mut opts = Self {
            bindings,
            key_to_action: HashMap::new(),
        };
        opts.rebuild_reverse_map();
        opts
    }
}

impl KeybindingOptions {
    /// Rebuild the reverse lookup map (key string → action).
    pub fn rebuild_reverse_map(&mut self) {
        self.key_to_action.clear();
        for (action, key) in &self.bindings {
            let _ = self.key_to_action.insert(key.clone(), *action);
        }
    }

    /// Bind `action` to `key`, replacing its previous key. Any other
    /// action bound to `key` is unbound.
    pub fn bind(&mut self, action: KeyAction, key: impl Into<String>) {
        let key = key.into();
        self.bindings
            .retain(|bound, bound_key| *bound == action || *bound_key != key);
        let _ = self.bindings.insert(action, key);
        self.rebuild_reverse_map();
    }

    /// Keys bound to more than one action, sorted.
    #[must_use]
    pub fn conflicting_keys(&self) -> Vec<&str> {
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for key in self.bindings.values() {
            *counts.entry(key.as_str()).or_default() += 1;
        }
        let mut conflicts: Vec<&str> = counts
            .into_iter()
            .filter_map(|(key, count)| (count > 1).then_some(key))
            .collect();
        conflicts.sort_unstable();
        conflicts
    }

    /// Look up the action for a key string.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<KeyAction> {
        self.key_to_action.get(key).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn binding_a_taken_key_unbinds_the_previous_action() {
        let mut opts = KeybindingOptions::default();
        opts.bind(KeyAction::MoveUp, "KeyW");
        assert_eq!(opts.lookup("KeyW"), Some(KeyAction::MoveUp));
        assert!(!opts.bindings.contains_key(&KeyAction::MoveForward));
        assert_eq!(opts.lookup("Space"), None);
        assert!(opts.conflicting_keys().is_empty());
    }

    #[test]
    fn rebinding_to_the_same_key_keeps_the_action() {
        let mut opts = KeybindingOptions::default();
        opts.bind(KeyAction::Quit, "Escape");
        assert_eq!(opts.lookup("Escape"), Some(KeyAction::Quit));
        assert_eq!(opts.bindings.len(), 7);
    }

    #[test]
    fn shared_keys_are_reported() {
        let mut opts = KeybindingOptions::default();
        let _ = opts.bindings.insert(KeyAction::MoveUp, "KeyW".into());
        let _ = opts.bindings.insert(KeyAction::Quit, "KeyA".into());
        assert_eq!(opts.conflicting_keys(), vec!["KeyA", "KeyW"]);
    }
}
