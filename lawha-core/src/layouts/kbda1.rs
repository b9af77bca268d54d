//! The standard Arabic 101 layout (KBDA1)

use crate::types::{KeyDef, Layout, SpecialKey, TextDirection};

/// Builds the standard Arabic keyboard layout.
///
/// Shifted digit keys follow the Arabic 101 convention where the parentheses
/// are mirrored: Shift+٩ gives `)` and Shift+٠ gives `(`.
pub fn kbda1() -> Layout {
    Layout {
        id: "kbda1".to_string(),
        name: "Arabic (101)".to_string(),
        direction: TextDirection::Rtl,
        rows: vec![
            vec![
                KeyDef::new("ذ", "ّ"),
                KeyDef::new("١", "!"),
                KeyDef::new("٢", "@"),
                KeyDef::new("٣", "#"),
                KeyDef::new("٤", "$"),
                KeyDef::new("٥", "%"),
                KeyDef::new("٦", "^"),
                KeyDef::new("٧", "&"),
                KeyDef::new("٨", "*"),
                KeyDef::new("٩", ")"),
                KeyDef::new("٠", "("),
                KeyDef::new("-", "_"),
                KeyDef::new("=", "+"),
                KeyDef::action("⌫", SpecialKey::Backspace),
            ],
            vec![
                KeyDef::new("ض", "َ"),
                KeyDef::new("ص", "ً"),
                KeyDef::new("ث", "ُ"),
                KeyDef::new("ق", "ٌ"),
                KeyDef::with_ctrl("ف", "لإ", "إ"),
                KeyDef::new("غ", "إ"),
                KeyDef::new("ع", "'"),
                KeyDef::new("ه", "÷"),
                KeyDef::new("خ", "×"),
                KeyDef::new("ح", "؛"),
                KeyDef::new("ج", "<"),
                KeyDef::new("د", ">"),
                KeyDef::new("\\", "|"),
            ],
            vec![
                KeyDef::new("ش", "ِ"),
                KeyDef::new("س", "ٍ"),
                KeyDef::new("ي", "]"),
                KeyDef::new("ب", "["),
                KeyDef::with_ctrl("ل", "لأ", "أ"),
                KeyDef::new("ا", "أ"),
                KeyDef::new("ت", "ـ"),
                KeyDef::new("ن", "،"),
                KeyDef::new("م", "/"),
                KeyDef::new("ك", ":"),
                KeyDef::new("ط", "\""),
                KeyDef::action("↵", SpecialKey::Enter),
            ],
            vec![
                KeyDef::action("Shift", SpecialKey::Shift),
                KeyDef::new("ئ", "~"),
                KeyDef::new("ء", "ْ"),
                KeyDef::new("ؤ", "}"),
                KeyDef::new("ر", "{"),
                KeyDef::with_ctrl("لا", "لآ", "آ"),
                KeyDef::new("ى", "آ"),
                KeyDef::new("ة", "'"),
                KeyDef::new("و", ","),
                KeyDef::new("ز", "."),
                KeyDef::new("ظ", "؟"),
                KeyDef::new("/", "?"),
                KeyDef::action("Shift", SpecialKey::Shift),
            ],
            vec![
                KeyDef::action("Ctrl", SpecialKey::Ctrl),
                KeyDef::action("Alt", SpecialKey::Alt),
                KeyDef::action("مسافة", SpecialKey::Space),
                KeyDef::action("Alt", SpecialKey::Alt),
                KeyDef::action("مسح", SpecialKey::Clear),
            ],
        ],
    }
}
