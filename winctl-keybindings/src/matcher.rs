//! Key input matching.
//!
//! Matches `KeyInput`s against parsed KeyCombos.
//! Supports both logical key matching (character-based) and physical key matching
//! (code-based) for layout-independent bindings.
//!
//! A combo matches when every modifier it names is held. Extra held modifiers
//! do not block a match: `F12` fires with any modifiers, and `Ctrl+Shift+I`
//! still fires while Alt is down.
//!
//! Character keys compare case-insensitively. Named keys on the input side
//! must use winit's spelling exactly (`F12`, `Enter`), so `f12` is just text.

use super::input::KeyInput;
use super::parser::{KeyCombo, Modifiers, ParsedKey, parse_named_key, parse_physical_key_code};
use winit::keyboard::{KeyCode, NamedKey};

/// Matcher for comparing key input against keybindings.
#[derive(Debug)]
pub struct KeybindingMatcher {
    /// Held modifiers from the input
    modifiers: Modifiers,
    /// The logical key from the input
    key: Option<MatchKey>,
    /// The physical key code from the input
    physical_key: Option<KeyCode>,
}

/// Normalized key for matching purposes.
#[derive(Debug)]
enum MatchKey {
    Character(char),
    Named(NamedKey),
}

impl KeybindingMatcher {
    /// Create a matcher from a key input.
    pub fn from_input(input: &KeyInput) -> Self {
        let modifiers = Modifiers {
            ctrl: input.control,
            alt: input.alt,
            shift: input.shift,
            super_key: input.meta,
            cmd_or_ctrl: false, // Resolved during matching
        };

        let mut chars = input.key.chars();
        let key = match (chars.next(), chars.next()) {
            // Uppercased for case-insensitive matching
            (Some(ch), None) => Some(MatchKey::Character(ch.to_ascii_uppercase())),
            _ => named_key_exact(&input.key).map(MatchKey::Named),
        };

        let physical_key = input.code.as_deref().and_then(parse_physical_key_code);

        Self {
            modifiers,
            key,
            physical_key,
        }
    }

    /// Check if this input matches the given key combo.
    pub fn matches(&self, combo: &KeyCombo) -> bool {
        self.matches_with_physical_preference(combo, false)
    }

    /// Check if this input matches the given key combo, with option to prefer physical keys.
    ///
    /// When `use_physical_keys` is true, character bindings are matched by key
    /// position first, so they work the same across keyboard layouts.
    pub fn matches_with_physical_preference(
        &self,
        combo: &KeyCombo,
        use_physical_keys: bool,
    ) -> bool {
        // Check key first (quick rejection)
        let key_matches = match (&combo.key, use_physical_keys) {
            (ParsedKey::Physical(combo_code), _) => self.physical_key.as_ref() == Some(combo_code),
            (ParsedKey::Character(combo_char), true) => {
                if let Some(physical) = self.physical_key {
                    physical_key_matches_char(physical, *combo_char)
                } else {
                    self.character_matches(*combo_char)
                }
            }
            (ParsedKey::Character(combo_char), false) => self.character_matches(*combo_char),
            (ParsedKey::Named(combo_named), _) => {
                matches!(&self.key, Some(MatchKey::Named(named)) if named == combo_named)
            }
        };

        key_matches && self.modifiers_match(&combo.modifiers)
    }

    fn character_matches(&self, combo_char: char) -> bool {
        matches!(&self.key, Some(MatchKey::Character(ch)) if ch.eq_ignore_ascii_case(&combo_char))
    }

    /// Check that every required modifier is held, handling CmdOrCtrl specially.
    fn modifiers_match(&self, combo_mods: &Modifiers) -> bool {
        // CmdOrCtrl: on macOS it means Super, elsewhere it means Ctrl
        let (need_ctrl, need_super) = if combo_mods.cmd_or_ctrl {
            #[cfg(target_os = "macos")]
            {
                (combo_mods.ctrl, true)
            }
            #[cfg(not(target_os = "macos"))]
            {
                (true, combo_mods.super_key)
            }
        } else {
            (combo_mods.ctrl, combo_mods.super_key)
        };

        (!need_ctrl || self.modifiers.ctrl)
            && (!combo_mods.alt || self.modifiers.alt)
            && (!combo_mods.shift || self.modifiers.shift)
            && (!need_super || self.modifiers.super_key)
    }
}

/// Resolve an input key name, accepting only the canonical winit spelling.
fn named_key_exact(key: &str) -> Option<NamedKey> {
    parse_named_key(key).filter(|named| format!("{:?}", named) == key)
}

/// Check if a physical key code corresponds to a character on a QWERTY layout.
fn physical_key_matches_char(code: KeyCode, ch: char) -> bool {
    let expected_char = match code {
        KeyCode::KeyA => 'A',
        KeyCode::KeyB => 'B',
        KeyCode::KeyC => 'C',
        KeyCode::KeyD => 'D',
        KeyCode::KeyE => 'E',
        KeyCode::KeyF => 'F',
        KeyCode::KeyG => 'G',
        KeyCode::KeyH => 'H',
        KeyCode::KeyI => 'I',
        KeyCode::KeyJ => 'J',
        KeyCode::KeyK => 'K',
        KeyCode::KeyL => 'L',
        KeyCode::KeyM => 'M',
        KeyCode::KeyN => 'N',
        KeyCode::KeyO => 'O',
        KeyCode::KeyP => 'P',
        KeyCode::KeyQ => 'Q',
        KeyCode::KeyR => 'R',
        KeyCode::KeyS => 'S',
        KeyCode::KeyT => 'T',
        KeyCode::KeyU => 'U',
        KeyCode::KeyV => 'V',
        KeyCode::KeyW => 'W',
        KeyCode::KeyX => 'X',
        KeyCode::KeyY => 'Y',
        KeyCode::KeyZ => 'Z',
        KeyCode::Digit0 => '0',
        KeyCode::Digit1 => '1',
        KeyCode::Digit2 => '2',
        KeyCode::Digit3 => '3',
        KeyCode::Digit4 => '4',
        KeyCode::Digit5 => '5',
        KeyCode::Digit6 => '6',
        KeyCode::Digit7 => '7',
        KeyCode::Digit8 => '8',
        KeyCode::Digit9 => '9',
        _ => return false,
    };
    expected_char.eq_ignore_ascii_case(&ch)
}
