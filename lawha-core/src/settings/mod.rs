//! User-configurable settings: schema, theme presets, deep merge and
//! persistence.

mod merge;
mod model;
mod store;
mod theme;

pub use merge::merge_values;
pub use model::*;
pub use store::{
    apply_theme_preset, export_settings, import_settings, load_settings, reset_settings,
    save_settings, FileStore, MemoryStore, SettingsStore, StoreError, SETTINGS_KEY,
};
pub use theme::{preset_colors, ThemeColors, ThemePreset, ThemeSettings};
