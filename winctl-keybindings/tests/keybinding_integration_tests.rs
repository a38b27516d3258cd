//! Integration tests for winctl-keybindings.
//!
//! These tests exercise the full config → registry → lookup pipeline using
//! the built-in default bindings from winctl-config.

use winctl_config::{Config, KeyBinding};
use winctl_keybindings::{KeyInput, KeybindingError, KeybindingRegistry};

fn default_registry() -> KeybindingRegistry<String> {
    KeybindingRegistry::from_config(&Config::default().keybindings).unwrap()
}

// ---------------------------------------------------------------------------
// Registry construction
// ---------------------------------------------------------------------------

#[test]
fn registry_from_empty_config() {
    let registry = KeybindingRegistry::<String>::from_config(&[]).unwrap();
    assert!(registry.is_empty());
}

#[test]
fn default_config_registers_both_devtools_shortcuts() {
    let registry = default_registry();
    assert_eq!(registry.len(), 2);
    assert!(registry.iter().all(|(_, action)| action == "toggle-devtools"));
}

#[test]
fn invalid_key_is_reported_with_context() {
    let bindings = vec![
        KeyBinding::new("Ctrl+A", "valid_action"),
        KeyBinding::new("Ctrl+Shift", "no_key"),
    ];

    match KeybindingRegistry::<String>::from_config(&bindings) {
        Err(KeybindingError::InvalidKey { key, action, .. }) => {
            assert_eq!(key, "Ctrl+Shift");
            assert_eq!(action, "no_key");
        }
        other => panic!("expected InvalidKey, got {:?}", other),
    }
}

// ---------------------------------------------------------------------------
// Lookup against the default devtools shortcuts
// ---------------------------------------------------------------------------

#[test]
fn ctrl_shift_i_matches_in_either_case() {
    let registry = default_registry();
    for key in ["i", "I"] {
        let input = KeyInput::new(key).with_control(true).with_shift(true);
        assert_eq!(
            registry.lookup(&input).map(String::as_str),
            Some("toggle-devtools")
        );
    }
}

#[test]
fn f12_matches_regardless_of_modifiers() {
    let registry = default_registry();
    let inputs = [
        KeyInput::new("F12"),
        KeyInput::new("F12").with_control(true),
        KeyInput::new("F12").with_shift(true).with_alt(true),
        KeyInput::new("F12").with_meta(true),
    ];
    for input in &inputs {
        assert!(registry.lookup(input).is_some(), "{:?}", input);
    }
}

#[test]
fn unrelated_keys_do_not_match() {
    let registry = default_registry();
    let inputs = [
        KeyInput::new("a"),
        KeyInput::new("i"),
        KeyInput::new("i").with_control(true),
        KeyInput::new("I").with_shift(true),
        KeyInput::new("F11"),
        KeyInput::new("Enter").with_control(true).with_shift(true),
    ];
    for input in &inputs {
        assert!(registry.lookup(input).is_none(), "{:?}", input);
    }
}

#[test]
fn physical_keys_follow_key_position() {
    let registry = default_registry().with_physical_keys(true);
    // A layout that produces 'g' at the QWERTY "I" position
    let input = KeyInput::new("g")
        .with_code("KeyI")
        .with_control(true)
        .with_shift(true);
    assert!(registry.lookup(&input).is_some());

    let logical = default_registry();
    assert!(logical.lookup(&input).is_none());
}
