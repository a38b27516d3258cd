//! Host-neutral keyboard input.
//!
//! A `KeyInput` is the shape a content view reports before it handles a key:
//! the logical key name, the physical code if known, and the modifier flags.

use winit::event::{KeyEvent, Modifiers as WinitModifiers};
use winit::keyboard::{Key, PhysicalKey};

/// A single key press as seen by a before-input listener.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyInput {
    /// Logical key: the produced character ("i", "I") or a key name ("F12", "Enter")
    pub key: String,
    /// Physical key code ("KeyI", "F12"), when the host reports one
    pub code: Option<String>,
    pub control: bool,
    pub shift: bool,
    pub alt: bool,
    /// Super / Cmd / Windows key
    pub meta: bool,
}

impl KeyInput {
    /// A key press with no modifiers held.
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ..Self::default()
        }
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    pub fn with_control(mut self, held: bool) -> Self {
        self.control = held;
        self
    }

    pub fn with_shift(mut self, held: bool) -> Self {
        self.shift = held;
        self
    }

    pub fn with_alt(mut self, held: bool) -> Self {
        self.alt = held;
        self
    }

    pub fn with_meta(mut self, held: bool) -> Self {
        self.meta = held;
        self
    }

    /// Build from a winit key event and the current modifier state.
    pub fn from_winit(event: &KeyEvent, modifiers: &WinitModifiers) -> Self {
        let key = match &event.logical_key {
            Key::Character(c) => c.to_string(),
            Key::Named(named) => format!("{:?}", named),
            Key::Dead(Some(c)) => c.to_string(),
            Key::Dead(None) | Key::Unidentified(_) => "Unidentified".to_string(),
        };

        let code = match event.physical_key {
            PhysicalKey::Code(code) => Some(format!("{:?}", code)),
            PhysicalKey::Unidentified(_) => None,
        };

        let state = modifiers.state();
        Self {
            key,
            code,
            control: state.control_key(),
            shift: state.shift_key(),
            alt: state.alt_key(),
            meta: state.super_key(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_sets_flags() {
        let input = KeyInput::new("i")
            .with_control(true)
            .with_shift(true)
            .with_code("KeyI");
        assert_eq!(input.key, "i");
        assert_eq!(input.code.as_deref(), Some("KeyI"));
        assert!(input.control && input.shift);
        assert!(!input.alt && !input.meta);
    }
}
