//! Key definitions for layout tables

use serde::{Deserialize, Serialize};

/// Tashkeel (diacritical) marks, including the tatweel used for spelling them out.
pub const TASHKEEL_MARKS: [&str; 9] = ["َ", "ً", "ُ", "ٌ", "ِ", "ٍ", "ْ", "ّ", "ـ"];

/// Arabic-Indic digits.
pub const ARABIC_DIGITS: [&str; 10] = ["٠", "١", "٢", "٣", "٤", "٥", "٦", "٧", "٨", "٩"];

/// Non-character action bound to a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpecialKey {
    Backspace,
    Enter,
    Space,
    Clear,
    Ctrl,
    Shift,
    Alt,
    Close,
}

/// A single key in a layout row.
///
/// `normal` doubles as the display label for special keys. `ctrl` carries the
/// Alif variant emitted while Ctrl is active; it is only meaningful on
/// character keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyDef {
    /// Character emitted with no modifiers active.
    pub normal: String,
    /// Character emitted while Shift is active.
    pub shift: String,
    /// Character emitted while Ctrl is active.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ctrl: Option<String>,
    /// Special action performed instead of emitting a character.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub special: Option<SpecialKey>,
}

impl KeyDef {
    /// Creates a plain character key.
    pub fn new(normal: &str, shift: &str) -> Self {
        Self {
            normal: normal.to_string(),
            shift: shift.to_string(),
            ctrl: None,
            special: None,
        }
    }

    /// Creates a character key with a Ctrl substitution (Alif variants).
    pub fn with_ctrl(normal: &str, shift: &str, ctrl: &str) -> Self {
        Self {
            normal: normal.to_string(),
            shift: shift.to_string(),
            ctrl: Some(ctrl.to_string()),
            special: None,
        }
    }

    /// Creates a special key; the label is shown regardless of modifiers.
    pub fn action(label: &str, special: SpecialKey) -> Self {
        Self {
            normal: label.to_string(),
            shift: label.to_string(),
            ctrl: None,
            special: Some(special),
        }
    }

    /// Whether this key performs a special action instead of emitting text.
    pub fn is_special(&self) -> bool {
        self.special.is_some()
    }

    /// Classifies the key for theming and inspection.
    pub fn class(&self) -> KeyClass {
        if let Some(special) = self.special {
            return KeyClass::Special(special);
        }
        if TASHKEEL_MARKS.contains(&self.normal.as_str())
            || TASHKEEL_MARKS.contains(&self.shift.as_str())
        {
            return KeyClass::Tashkeel;
        }
        if ARABIC_DIGITS.contains(&self.normal.as_str()) {
            return KeyClass::Number;
        }
        if self.ctrl.is_some() {
            return KeyClass::AlifVariant;
        }
        KeyClass::Regular
    }
}

/// Classification of a key, used by frontends to pick colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyClass {
    Regular,
    Number,
    Tashkeel,
    AlifVariant,
    Special(SpecialKey),
}
