//! Keybinding system for winctl.
//!
//! Turns configured shortcut strings into a lookup table that a content
//! view's before-input listener can consult for every key press.
//!
//! Features:
//! - Configurable key combinations (Ctrl+Shift+I, CmdOrCtrl+R, F12, etc.)
//! - Physical key support for layout-independent bindings
//! - Actions resolved at build time, so a misspelled action fails early

mod input;
mod matcher;
pub mod parser;

pub use input::KeyInput;
pub use matcher::KeybindingMatcher;
pub use parser::{KeyCombo, ParseError, parse_key_combo};

use std::fmt::Display;
use std::str::FromStr;
use thiserror::Error;
use winctl_config::KeyBinding;

/// Errors raised while building a registry from config entries.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeybindingError {
    /// The key string could not be parsed into a combination.
    #[error("invalid keybinding '{key}' for action '{action}': {source}")]
    InvalidKey {
        key: String,
        action: String,
        #[source]
        source: ParseError,
    },

    /// The action name is not one the registry's action type accepts.
    #[error("unknown action '{action}' bound to '{key}': {reason}")]
    UnknownAction {
        key: String,
        action: String,
        reason: String,
    },
}

/// Ordered table of key combinations and the actions they trigger.
#[derive(Debug, Clone)]
pub struct KeybindingRegistry<A> {
    bindings: Vec<(KeyCombo, A)>,
    use_physical_keys: bool,
}

impl<A> Default for KeybindingRegistry<A> {
    fn default() -> Self {
        Self {
            bindings: Vec::new(),
            use_physical_keys: false,
        }
    }
}

impl<A> KeybindingRegistry<A> {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Match character bindings by physical key position.
    pub fn with_physical_keys(mut self, enabled: bool) -> Self {
        self.use_physical_keys = enabled;
        self
    }

    /// Add an already-parsed binding.
    pub fn insert(&mut self, combo: KeyCombo, action: A) {
        self.bindings.push((combo, action));
    }

    /// Parse `key` and add a binding for it.
    pub fn bind(&mut self, key: &str, action: A) -> Result<(), ParseError> {
        let combo = parse_key_combo(key)?;
        self.insert(combo, action);
        Ok(())
    }

    /// Look up the action for a key press.
    ///
    /// When several bindings match, the one requiring the most modifiers wins
    /// (so `Ctrl+Shift+I` beats `Ctrl+I`); ties go to the earliest binding.
    pub fn lookup(&self, input: &KeyInput) -> Option<&A> {
        let matcher = KeybindingMatcher::from_input(input);

        let mut best: Option<(&KeyCombo, &A)> = None;
        for (combo, action) in &self.bindings {
            if !matcher.matches_with_physical_preference(combo, self.use_physical_keys) {
                continue;
            }
            let more_specific = best
                .map(|(current, _)| combo.modifiers.count() > current.modifiers.count())
                .unwrap_or(true);
            if more_specific {
                best = Some((combo, action));
            }
        }

        best.map(|(_, action)| action)
    }

    /// Iterate bindings in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (&KeyCombo, &A)> {
        self.bindings.iter().map(|(combo, action)| (combo, action))
    }

    /// Check if the registry has any bindings.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Get the number of registered bindings.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }
}

impl<A> KeybindingRegistry<A>
where
    A: FromStr,
    A::Err: Display,
{
    /// Build a registry from config keybindings.
    ///
    /// Every entry must parse, and every action name must convert into `A`;
    /// the first failure is returned.
    pub fn from_config(keybindings: &[KeyBinding]) -> Result<Self, KeybindingError> {
        let mut registry = Self::new();

        log::info!(
            "Building keybinding registry from {} config keybindings",
            keybindings.len()
        );
        for binding in keybindings {
            let combo =
                parse_key_combo(&binding.key).map_err(|source| KeybindingError::InvalidKey {
                    key: binding.key.clone(),
                    action: binding.action.clone(),
                    source,
                })?;
            let action = binding
                .action
                .parse::<A>()
                .map_err(|e| KeybindingError::UnknownAction {
                    key: binding.key.clone(),
                    action: binding.action.clone(),
                    reason: e.to_string(),
                })?;

            log::info!(
                "Registered keybinding: {} -> {} (parsed as: {})",
                binding.key,
                binding.action,
                combo
            );
            registry.insert(combo, action);
        }

        log::info!(
            "Keybinding registry initialized with {} bindings",
            registry.len()
        );
        Ok(registry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_registry() {
        let registry: KeybindingRegistry<String> = KeybindingRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
        assert!(registry.lookup(&KeyInput::new("F12")).is_none());
    }

    #[test]
    fn test_most_specific_binding_wins() {
        let mut registry = KeybindingRegistry::new();
        registry.bind("Ctrl+I", "italic").unwrap();
        registry.bind("Ctrl+Shift+I", "devtools").unwrap();

        let chord = KeyInput::new("I").with_control(true).with_shift(true);
        assert_eq!(registry.lookup(&chord), Some(&"devtools"));

        let plain = KeyInput::new("i").with_control(true);
        assert_eq!(registry.lookup(&plain), Some(&"italic"));
    }

    #[test]
    fn test_ties_go_to_first_binding() {
        let mut registry = KeybindingRegistry::new();
        registry.bind("F12", "first").unwrap();
        registry.bind("F12", "second").unwrap();
        assert_eq!(registry.lookup(&KeyInput::new("F12")), Some(&"first"));
    }

    #[test]
    fn test_unknown_action_rejected() {
        #[derive(Debug)]
        struct OnlyMaximize;
        impl FromStr for OnlyMaximize {
            type Err = String;
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                if s == "maximize" {
                    Ok(OnlyMaximize)
                } else {
                    Err(format!("no such action '{s}'"))
                }
            }
        }

        let bindings = vec![
            KeyBinding::new("F11", "maximize"),
            KeyBinding::new("F12", "maximise"),
        ];
        let err = KeybindingRegistry::<OnlyMaximize>::from_config(&bindings).unwrap_err();
        assert!(matches!(
            err,
            KeybindingError::UnknownAction { ref action, .. } if action == "maximise"
        ));
    }
}
