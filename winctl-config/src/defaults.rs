//! Default value functions for configuration.
//!
//! Used as `#[serde(default = "crate::defaults::...")]` attributes on
//! `Config` fields.

use crate::types::KeyBinding;

pub fn window_title() -> String {
    "winctl".to_string()
}

pub fn window_width() -> u32 {
    1024
}

pub fn window_height() -> u32 {
    768
}

pub fn bool_false() -> bool {
    false
}

/// Built-in shortcuts for opening the developer tools panel.
///
/// Both bindings toggle the panel: the Chromium-style chord and the bare
/// function key. Modifiers held beyond the ones listed do not block a match.
pub fn keybindings() -> Vec<KeyBinding> {
    vec![
        KeyBinding::new("Ctrl+Shift+I", "toggle-devtools"),
        KeyBinding::new("F12", "toggle-devtools"),
    ]
}
