//! Builtin layout tables and the JSON layout loader

mod error;
mod kbda1;
mod loader;

use std::path::Path;

use crate::settings::{KeyboardLayoutSettings, LayoutKind};
use crate::types::Layout;
use crate::{Error, Result};

pub use error::LayoutError;
pub use kbda1::kbda1;
pub use loader::{load_layout_file, load_layout_str, validate};

/// Resolves a builtin layout by identifier.
pub fn builtin(id: &str) -> Option<Layout> {
    match id.to_ascii_lowercase().as_str() {
        "kbda1" => Some(kbda1()),
        _ => None,
    }
}

/// Resolves a layout spec: a builtin identifier first, then a file path.
pub fn resolve(spec: &str) -> Result<Layout> {
    if let Some(layout) = builtin(spec) {
        return Ok(layout);
    }
    let path = Path::new(spec);
    if path.exists() {
        return Ok(load_layout_file(path)?);
    }
    Err(Error::UnknownLayout(spec.to_string()))
}

/// Picks the layout selected by the keyboard-layout settings.
///
/// Only KBDA1 ships as a builtin table; other builtin kinds fall back to it.
/// A custom kind without an attached table also falls back.
pub fn for_settings(settings: &KeyboardLayoutSettings) -> Layout {
    match settings.layout {
        LayoutKind::Custom => {
            if let Some(layout) = &settings.custom_layout {
                if validate(layout).is_ok() {
                    return layout.clone();
                }
                log::warn!("custom layout failed validation, falling back to KBDA1");
            }
            kbda1()
        }
        LayoutKind::Kbda1 => kbda1(),
        other => {
            log::warn!("layout {other:?} has no builtin table, falling back to KBDA1");
            kbda1()
        }
    }
}
