//! Key combination parser.
//!
//! Parses human-readable key strings like "Ctrl+Shift+I" into KeyCombo structs.
//! Also supports physical key codes for layout-independent bindings (e.g., "Ctrl+Shift+[KeyI]").

use std::fmt;
use thiserror::Error;
use winit::keyboard::{KeyCode, NamedKey};

/// Error type for key parsing failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct ParseError(String);

/// Set of modifiers a key combination requires.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Modifiers {
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
    pub super_key: bool,
    /// If true, this represents CmdOrCtrl (Cmd on macOS, Ctrl elsewhere)
    pub cmd_or_ctrl: bool,
}

impl Modifiers {
    /// Number of modifiers the combination requires.
    pub fn count(&self) -> usize {
        [
            self.ctrl || self.cmd_or_ctrl,
            self.alt,
            self.shift,
            self.super_key,
        ]
        .iter()
        .filter(|&&held| held)
        .count()
    }
}

/// A parsed key combination (modifiers + key).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyCombo {
    pub modifiers: Modifiers,
    pub key: ParsedKey,
}

impl fmt::Display for KeyCombo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();

        if self.modifiers.cmd_or_ctrl {
            parts.push("CmdOrCtrl".to_string());
        }
        if self.modifiers.ctrl {
            parts.push("Ctrl".to_string());
        }
        if self.modifiers.alt {
            parts.push("Alt".to_string());
        }
        if self.modifiers.shift {
            parts.push("Shift".to_string());
        }
        if self.modifiers.super_key {
            parts.push("Super".to_string());
        }

        match &self.key {
            ParsedKey::Character(c) => parts.push(c.to_string()),
            ParsedKey::Named(n) => parts.push(format!("{:?}", n)),
            ParsedKey::Physical(k) => parts.push(format!("[{:?}]", k)),
        }

        write!(f, "{}", parts.join("+"))
    }
}

/// The actual key (either a character or a named key).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ParsedKey {
    /// A single character key, stored uppercased (e.g., 'I', '1')
    Character(char),
    /// A named key (e.g., F12, Enter, Escape)
    Named(NamedKey),
    /// A physical key code (e.g., KeyI) matched by key position rather than
    /// the character produced.
    Physical(KeyCode),
}

/// Parse a key combination string into a KeyCombo.
///
/// Supported format: "Modifier+Modifier+Key"
///
/// Modifiers:
/// - `Ctrl`, `Control` - Control key
/// - `Alt`, `Option` - Alt/Option key
/// - `Shift` - Shift key
/// - `Super`, `Cmd`, `Command`, `Meta`, `Win` - Super/Cmd key
/// - `CmdOrCtrl` - Cmd on macOS, Ctrl on other platforms
///
/// Keys:
/// - Single characters: `I`, `B`, `1`, etc.
/// - Named keys: `F1`-`F12`, `Enter`, `Escape`, `Space`, `Tab`, etc.
/// - Physical keys in brackets: `[KeyI]`, `[Digit1]`
pub fn parse_key_combo(s: &str) -> Result<KeyCombo, ParseError> {
    if s.trim().is_empty() {
        return Err(ParseError("Empty key combination".to_string()));
    }

    let parts: Vec<&str> = s.split('+').map(str::trim).collect();
    let mut modifiers = Modifiers::default();
    let mut key_part = None;

    for (i, part) in parts.iter().enumerate() {
        let is_last = i == parts.len() - 1;

        let is_modifier = match part.to_lowercase().as_str() {
            "ctrl" | "control" => {
                modifiers.ctrl = true;
                true
            }
            "alt" | "option" => {
                modifiers.alt = true;
                true
            }
            "shift" => {
                modifiers.shift = true;
                true
            }
            "super" | "cmd" | "command" | "meta" | "win" => {
                modifiers.super_key = true;
                true
            }
            "cmdorctrl" => {
                modifiers.cmd_or_ctrl = true;
                true
            }
            _ => false,
        };

        if !is_modifier {
            if key_part.is_some() {
                return Err(ParseError(format!(
                    "Multiple keys specified: already have key, found '{}'",
                    part
                )));
            }
            key_part = Some(*part);
        } else if is_last {
            return Err(ParseError(
                "Key combination ends with modifier, no key specified".to_string(),
            ));
        }
    }

    let key_str = key_part.ok_or_else(|| ParseError("No key specified".to_string()))?;
    let key = parse_key(key_str)?;

    Ok(KeyCombo { modifiers, key })
}

/// Parse a key string into a ParsedKey.
fn parse_key(s: &str) -> Result<ParsedKey, ParseError> {
    if s.starts_with('[') && s.ends_with(']') && s.len() > 2 {
        let code_str = &s[1..s.len() - 1];
        return parse_physical_key_code(code_str)
            .map(ParsedKey::Physical)
            .ok_or_else(|| ParseError(format!("Unknown physical key code: '{}'", code_str)));
    }

    if let Some(named) = parse_named_key(s) {
        return Ok(ParsedKey::Named(named));
    }

    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(ParsedKey::Character(c.to_ascii_uppercase())),
        _ => Err(ParseError(format!("Unknown key: '{}'", s))),
    }
}

/// Parse a physical key code name ("KeyA", "Digit0", "F12", ...) into a KeyCode.
///
/// Accepts the same spelling hosts report in their `code` field.
pub fn parse_physical_key_code(s: &str) -> Option<KeyCode> {
    let lower = s.to_lowercase();

    if let Some(letter) = lower.strip_prefix("key") {
        return letter_key_code(letter);
    }
    if let Some(digit) = lower.strip_prefix("digit") {
        return digit_key_code(digit);
    }

    match lower.as_str() {
        "f1" => Some(KeyCode::F1),
        "f2" => Some(KeyCode::F2),
        "f3" => Some(KeyCode::F3),
        "f4" => Some(KeyCode::F4),
        "f5" => Some(KeyCode::F5),
        "f6" => Some(KeyCode::F6),
        "f7" => Some(KeyCode::F7),
        "f8" => Some(KeyCode::F8),
        "f9" => Some(KeyCode::F9),
        "f10" => Some(KeyCode::F10),
        "f11" => Some(KeyCode::F11),
        "f12" => Some(KeyCode::F12),
        "minus" => Some(KeyCode::Minus),
        "equal" => Some(KeyCode::Equal),
        "bracketleft" => Some(KeyCode::BracketLeft),
        "bracketright" => Some(KeyCode::BracketRight),
        "backslash" => Some(KeyCode::Backslash),
        "semicolon" => Some(KeyCode::Semicolon),
        "quote" => Some(KeyCode::Quote),
        "backquote" => Some(KeyCode::Backquote),
        "comma" => Some(KeyCode::Comma),
        "period" => Some(KeyCode::Period),
        "slash" => Some(KeyCode::Slash),
        "enter" => Some(KeyCode::Enter),
        "escape" => Some(KeyCode::Escape),
        "space" => Some(KeyCode::Space),
        "tab" => Some(KeyCode::Tab),
        "backspace" => Some(KeyCode::Backspace),
        _ => None,
    }
}

fn letter_key_code(letter: &str) -> Option<KeyCode> {
    Some(match letter {
        "a" => KeyCode::KeyA,
        "b" => KeyCode::KeyB,
        "c" => KeyCode::KeyC,
        "d" => KeyCode::KeyD,
        "e" => KeyCode::KeyE,
        "f" => KeyCode::KeyF,
        "g" => KeyCode::KeyG,
        "h" => KeyCode::KeyH,
        "i" => KeyCode::KeyI,
        "j" => KeyCode::KeyJ,
        "k" => KeyCode::KeyK,
        "l" => KeyCode::KeyL,
        "m" => KeyCode::KeyM,
        "n" => KeyCode::KeyN,
        "o" => KeyCode::KeyO,
        "p" => KeyCode::KeyP,
        "q" => KeyCode::KeyQ,
        "r" => KeyCode::KeyR,
        "s" => KeyCode::KeyS,
        "t" => KeyCode::KeyT,
        "u" => KeyCode::KeyU,
        "v" => KeyCode::KeyV,
        "w" => KeyCode::KeyW,
        "x" => KeyCode::KeyX,
        "y" => KeyCode::KeyY,
        "z" => KeyCode::KeyZ,
        _ => return None,
    })
}

fn digit_key_code(digit: &str) -> Option<KeyCode> {
    Some(match digit {
        "0" => KeyCode::Digit0,
        "1" => KeyCode::Digit1,
        "2" => KeyCode::Digit2,
        "3" => KeyCode::Digit3,
        "4" => KeyCode::Digit4,
        "5" => KeyCode::Digit5,
        "6" => KeyCode::Digit6,
        "7" => KeyCode::Digit7,
        "8" => KeyCode::Digit8,
        "9" => KeyCode::Digit9,
        _ => return None,
    })
}

/// Parse a named key string into a NamedKey (case-insensitive).
pub fn parse_named_key(s: &str) -> Option<NamedKey> {
    match s.to_lowercase().as_str() {
        // Function keys
        "f1" => Some(NamedKey::F1),
        "f2" => Some(NamedKey::F2),
        "f3" => Some(NamedKey::F3),
        "f4" => Some(NamedKey::F4),
        "f5" => Some(NamedKey::F5),
        "f6" => Some(NamedKey::F6),
        "f7" => Some(NamedKey::F7),
        "f8" => Some(NamedKey::F8),
        "f9" => Some(NamedKey::F9),
        "f10" => Some(NamedKey::F10),
        "f11" => Some(NamedKey::F11),
        "f12" => Some(NamedKey::F12),

        // Common named keys
        "enter" | "return" => Some(NamedKey::Enter),
        "escape" | "esc" => Some(NamedKey::Escape),
        "space" => Some(NamedKey::Space),
        "tab" => Some(NamedKey::Tab),
        "backspace" => Some(NamedKey::Backspace),
        "delete" | "del" => Some(NamedKey::Delete),
        "insert" | "ins" => Some(NamedKey::Insert),
        "home" => Some(NamedKey::Home),
        "end" => Some(NamedKey::End),
        "pageup" | "pgup" => Some(NamedKey::PageUp),
        "pagedown" | "pgdn" => Some(NamedKey::PageDown),

        // Arrow keys
        "up" | "arrowup" => Some(NamedKey::ArrowUp),
        "down" | "arrowdown" => Some(NamedKey::ArrowDown),
        "left" | "arrowleft" => Some(NamedKey::ArrowLeft),
        "right" | "arrowright" => Some(NamedKey::ArrowRight),

        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_devtools_chord() {
        let combo = parse_key_combo("Ctrl+Shift+I").unwrap();
        assert!(combo.modifiers.ctrl);
        assert!(combo.modifiers.shift);
        assert!(!combo.modifiers.alt);
        assert_eq!(combo.key, ParsedKey::Character('I'));
        assert_eq!(combo.modifiers.count(), 2);
    }

    #[test]
    fn test_parse_lowercase_character_is_uppercased() {
        let combo = parse_key_combo("ctrl+shift+i").unwrap();
        assert_eq!(combo.key, ParsedKey::Character('I'));
    }

    #[test]
    fn test_parse_function_key() {
        let combo = parse_key_combo("F12").unwrap();
        assert_eq!(combo.modifiers, Modifiers::default());
        assert_eq!(combo.key, ParsedKey::Named(NamedKey::F12));
    }

    #[test]
    fn test_parse_physical_key() {
        let combo = parse_key_combo("Ctrl+Shift+[KeyI]").unwrap();
        assert_eq!(combo.key, ParsedKey::Physical(KeyCode::KeyI));
        assert!(parse_key_combo("Ctrl+[KeyNope]").is_err());
    }

    #[test]
    fn test_parse_errors() {
        assert!(parse_key_combo("").is_err());
        assert!(parse_key_combo("Ctrl+Shift").is_err());
        assert!(parse_key_combo("Ctrl+A+B").is_err());
        assert!(parse_key_combo("NotAKey").is_err());
    }

    #[test]
    fn test_display_round_trips_through_parser() {
        let combo = parse_key_combo("Shift+Ctrl+I").unwrap();
        assert_eq!(combo.to_string(), "Ctrl+Shift+I");
        assert_eq!(parse_key_combo(&combo.to_string()).unwrap(), combo);
    }
}
