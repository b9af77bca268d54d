//! Theme presets and the named color table.
//!
//! Colors are plain hex strings consumed by frontends; nothing here computes
//! styles. The default table is the dark preset.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ThemePreset {
    Dark,
    Light,
    HighContrast,
    Colorful,
    Minimal,
    Custom,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ThemeSettings {
    pub preset: ThemePreset,
    pub colors: ThemeColors,
}

impl Default for ThemeSettings {
    fn default() -> Self {
        Self {
            preset: ThemePreset::Dark,
            colors: ThemeColors::default(),
        }
    }
}

/// Every named color a frontend needs to paint the widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ThemeColors {
    pub keyboard_background: String,
    pub keyboard_border: String,

    pub regular_key_background: String,
    pub regular_key_background_hover: String,
    pub regular_key_text: String,

    pub number_key_background: String,
    pub number_key_background_hover: String,
    pub number_key_text: String,

    pub tashkeel_key_background: String,
    pub tashkeel_key_background_hover: String,
    pub tashkeel_key_text: String,

    pub backspace_key_background: String,
    pub backspace_key_background_hover: String,
    pub enter_key_background: String,
    pub enter_key_background_hover: String,
    pub space_key_background: String,
    pub space_key_background_hover: String,
    pub clear_key_background: String,
    pub clear_key_background_hover: String,

    pub ctrl_key_background: String,
    pub ctrl_key_background_hover: String,
    pub ctrl_key_background_active: String,
    pub shift_key_background: String,
    pub shift_key_background_hover: String,
    pub shift_key_background_active: String,
    pub alt_key_background: String,
    pub alt_key_background_hover: String,

    pub alif_variant_key_background: String,
    pub alif_variant_key_background_hover: String,

    pub open_button_background: String,
    pub open_button_background_hover: String,
    pub close_button_background: String,
    pub close_button_background_hover: String,
    pub button_text: String,

    pub input_background: String,
    pub input_border: String,
    pub input_border_focused: String,
    pub input_text: String,
    pub input_placeholder: String,

    pub special_key_text: String,
}

impl Default for ThemeColors {
    fn default() -> Self {
        dark()
    }
}

fn hex(s: &str) -> String {
    s.to_string()
}

fn dark() -> ThemeColors {
    ThemeColors {
        keyboard_background: hex("#334155"),
        keyboard_border: hex("#1e293b"),
        regular_key_background: hex("#475569"),
        regular_key_background_hover: hex("#64748b"),
        regular_key_text: hex("#ffffff"),
        number_key_background: hex("#3b82f6"),
        number_key_background_hover: hex("#2563eb"),
        number_key_text: hex("#ffffff"),
        tashkeel_key_background: hex("#9ca3af"),
        tashkeel_key_background_hover: hex("#6b7280"),
        tashkeel_key_text: hex("#1f2937"),
        backspace_key_background: hex("#eab308"),
        backspace_key_background_hover: hex("#ca8a04"),
        enter_key_background: hex("#22c55e"),
        enter_key_background_hover: hex("#16a34a"),
        space_key_background: hex("#3b82f6"),
        space_key_background_hover: hex("#2563eb"),
        clear_key_background: hex("#f97316"),
        clear_key_background_hover: hex("#ea580c"),
        ctrl_key_background: hex("#a855f7"),
        ctrl_key_background_hover: hex("#9333ea"),
        ctrl_key_background_active: hex("#7c3aed"),
        shift_key_background: hex("#3b82f6"),
        shift_key_background_hover: hex("#2563eb"),
        shift_key_background_active: hex("#1d4ed8"),
        alt_key_background: hex("#6b7280"),
        alt_key_background_hover: hex("#4b5563"),
        alif_variant_key_background: hex("#a855f7"),
        alif_variant_key_background_hover: hex("#9333ea"),
        open_button_background: hex("#2563eb"),
        open_button_background_hover: hex("#1d4ed8"),
        close_button_background: hex("#3b82f6"),
        close_button_background_hover: hex("#2563eb"),
        button_text: hex("#ffffff"),
        input_background: hex("#ffffff"),
        input_border: hex("#e5e7eb"),
        input_border_focused: hex("#3b82f6"),
        input_text: hex("#000000"),
        input_placeholder: hex("#9ca3af"),
        special_key_text: hex("#ffffff"),
    }
}

fn light() -> ThemeColors {
    ThemeColors {
        keyboard_background: hex("#f1f5f9"),
        keyboard_border: hex("#e2e8f0"),
        regular_key_background: hex("#ffffff"),
        regular_key_background_hover: hex("#e2e8f0"),
        regular_key_text: hex("#1e293b"),
        number_key_background: hex("#dbeafe"),
        number_key_background_hover: hex("#bfdbfe"),
        number_key_text: hex("#1e40af"),
        tashkeel_key_background: hex("#f3f4f6"),
        tashkeel_key_background_hover: hex("#e5e7eb"),
        tashkeel_key_text: hex("#1f2937"),
        backspace_key_background: hex("#fef3c7"),
        backspace_key_background_hover: hex("#fde68a"),
        enter_key_background: hex("#d1fae5"),
        enter_key_background_hover: hex("#a7f3d0"),
        space_key_background: hex("#dbeafe"),
        space_key_background_hover: hex("#bfdbfe"),
        clear_key_background: hex("#fed7aa"),
        clear_key_background_hover: hex("#fdba74"),
        ctrl_key_background: hex("#f3e8ff"),
        ctrl_key_background_hover: hex("#e9d5ff"),
        ctrl_key_background_active: hex("#d8b4fe"),
        shift_key_background: hex("#dbeafe"),
        shift_key_background_hover: hex("#bfdbfe"),
        shift_key_background_active: hex("#93c5fd"),
        alt_key_background: hex("#f3f4f6"),
        alt_key_background_hover: hex("#e5e7eb"),
        alif_variant_key_background: hex("#f3e8ff"),
        alif_variant_key_background_hover: hex("#e9d5ff"),
        open_button_background: hex("#3b82f6"),
        open_button_background_hover: hex("#2563eb"),
        close_button_background: hex("#3b82f6"),
        close_button_background_hover: hex("#2563eb"),
        button_text: hex("#ffffff"),
        input_background: hex("#ffffff"),
        input_border: hex("#d1d5db"),
        input_border_focused: hex("#3b82f6"),
        input_text: hex("#000000"),
        input_placeholder: hex("#9ca3af"),
        special_key_text: hex("#1e293b"),
    }
}

fn high_contrast() -> ThemeColors {
    ThemeColors {
        keyboard_background: hex("#000000"),
        keyboard_border: hex("#ffffff"),
        regular_key_background: hex("#ffffff"),
        regular_key_background_hover: hex("#e5e5e5"),
        regular_key_text: hex("#000000"),
        number_key_background: hex("#ffff00"),
        number_key_background_hover: hex("#e5e500"),
        number_key_text: hex("#000000"),
        tashkeel_key_background: hex("#00ffff"),
        tashkeel_key_background_hover: hex("#00e5e5"),
        tashkeel_key_text: hex("#000000"),
        backspace_key_background: hex("#ff0000"),
        backspace_key_background_hover: hex("#cc0000"),
        enter_key_background: hex("#00ff00"),
        enter_key_background_hover: hex("#00cc00"),
        space_key_background: hex("#0000ff"),
        space_key_background_hover: hex("#0000cc"),
        clear_key_background: hex("#ff8800"),
        clear_key_background_hover: hex("#cc6600"),
        ctrl_key_background: hex("#ff00ff"),
        ctrl_key_background_hover: hex("#cc00cc"),
        ctrl_key_background_active: hex("#990099"),
        shift_key_background: hex("#0088ff"),
        shift_key_background_hover: hex("#0066cc"),
        shift_key_background_active: hex("#004499"),
        alt_key_background: hex("#888888"),
        alt_key_background_hover: hex("#666666"),
        alif_variant_key_background: hex("#ff00ff"),
        alif_variant_key_background_hover: hex("#cc00cc"),
        open_button_background: hex("#0000ff"),
        open_button_background_hover: hex("#0000cc"),
        close_button_background: hex("#0000ff"),
        close_button_background_hover: hex("#0000cc"),
        button_text: hex("#ffffff"),
        input_background: hex("#ffffff"),
        input_border: hex("#000000"),
        input_border_focused: hex("#0000ff"),
        input_text: hex("#000000"),
        input_placeholder: hex("#666666"),
        special_key_text: hex("#ffffff"),
    }
}

fn colorful() -> ThemeColors {
    ThemeColors {
        keyboard_background: hex("#1e1b4b"),
        keyboard_border: hex("#312e81"),
        regular_key_background: hex("#6366f1"),
        regular_key_background_hover: hex("#4f46e5"),
        regular_key_text: hex("#ffffff"),
        number_key_background: hex("#06b6d4"),
        number_key_background_hover: hex("#0891b2"),
        number_key_text: hex("#ffffff"),
        tashkeel_key_background: hex("#f59e0b"),
        tashkeel_key_background_hover: hex("#d97706"),
        tashkeel_key_text: hex("#ffffff"),
        backspace_key_background: hex("#ef4444"),
        backspace_key_background_hover: hex("#dc2626"),
        enter_key_background: hex("#10b981"),
        enter_key_background_hover: hex("#059669"),
        space_key_background: hex("#8b5cf6"),
        space_key_background_hover: hex("#7c3aed"),
        clear_key_background: hex("#f97316"),
        clear_key_background_hover: hex("#ea580c"),
        ctrl_key_background: hex("#ec4899"),
        ctrl_key_background_hover: hex("#db2777"),
        ctrl_key_background_active: hex("#be185d"),
        shift_key_background: hex("#14b8a6"),
        shift_key_background_hover: hex("#0d9488"),
        shift_key_background_active: hex("#0f766e"),
        alt_key_background: hex("#64748b"),
        alt_key_background_hover: hex("#475569"),
        alif_variant_key_background: hex("#ec4899"),
        alif_variant_key_background_hover: hex("#db2777"),
        open_button_background: hex("#8b5cf6"),
        open_button_background_hover: hex("#7c3aed"),
        close_button_background: hex("#8b5cf6"),
        close_button_background_hover: hex("#7c3aed"),
        button_text: hex("#ffffff"),
        input_background: hex("#ffffff"),
        input_border: hex("#e5e7eb"),
        input_border_focused: hex("#8b5cf6"),
        input_text: hex("#000000"),
        input_placeholder: hex("#9ca3af"),
        special_key_text: hex("#ffffff"),
    }
}

fn minimal() -> ThemeColors {
    ThemeColors {
        keyboard_background: hex("#fafafa"),
        keyboard_border: hex("#e5e5e5"),
        regular_key_background: hex("#ffffff"),
        regular_key_background_hover: hex("#f5f5f5"),
        regular_key_text: hex("#171717"),
        number_key_background: hex("#fafafa"),
        number_key_background_hover: hex("#f5f5f5"),
        number_key_text: hex("#404040"),
        tashkeel_key_background: hex("#f5f5f5"),
        tashkeel_key_background_hover: hex("#e5e5e5"),
        tashkeel_key_text: hex("#404040"),
        backspace_key_background: hex("#e5e5e5"),
        backspace_key_background_hover: hex("#d4d4d4"),
        enter_key_background: hex("#171717"),
        enter_key_background_hover: hex("#262626"),
        space_key_background: hex("#fafafa"),
        space_key_background_hover: hex("#f5f5f5"),
        clear_key_background: hex("#e5e5e5"),
        clear_key_background_hover: hex("#d4d4d4"),
        ctrl_key_background: hex("#d4d4d4"),
        ctrl_key_background_hover: hex("#a3a3a3"),
        ctrl_key_background_active: hex("#737373"),
        shift_key_background: hex("#d4d4d4"),
        shift_key_background_hover: hex("#a3a3a3"),
        shift_key_background_active: hex("#737373"),
        alt_key_background: hex("#e5e5e5"),
        alt_key_background_hover: hex("#d4d4d4"),
        alif_variant_key_background: hex("#d4d4d4"),
        alif_variant_key_background_hover: hex("#a3a3a3"),
        open_button_background: hex("#171717"),
        open_button_background_hover: hex("#262626"),
        close_button_background: hex("#171717"),
        close_button_background_hover: hex("#262626"),
        button_text: hex("#ffffff"),
        input_background: hex("#ffffff"),
        input_border: hex("#e5e5e5"),
        input_border_focused: hex("#171717"),
        input_text: hex("#000000"),
        input_placeholder: hex("#a3a3a3"),
        special_key_text: hex("#171717"),
    }
}

/// Color table for a preset. `Custom` has no table of its own and maps to
/// the dark colors; callers applying `Custom` should keep the user's colors.
pub fn preset_colors(preset: ThemePreset) -> ThemeColors {
    match preset {
        ThemePreset::Dark | ThemePreset::Custom => dark(),
        ThemePreset::Light => light(),
        ThemePreset::HighContrast => high_contrast(),
        ThemePreset::Colorful => colorful(),
        ThemePreset::Minimal => minimal(),
    }
}
