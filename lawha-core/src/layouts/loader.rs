//! JSON layout loading and validation

use std::fs;
use std::path::Path;

use crate::types::Layout;

use super::error::LayoutError;

/// Loads and validates a layout from a JSON file.
pub fn load_layout_file(path: &Path) -> Result<Layout, LayoutError> {
    let data = fs::read_to_string(path)?;
    load_layout_str(&data)
}

/// Parses and validates a layout from a JSON string.
pub fn load_layout_str(data: &str) -> Result<Layout, LayoutError> {
    let layout: Layout = serde_json::from_str(data)?;
    validate(&layout)?;
    Ok(layout)
}

/// Checks the structural invariants of a layout table.
pub fn validate(layout: &Layout) -> Result<(), LayoutError> {
    if layout.rows.is_empty() {
        return Err(LayoutError::EmptyLayout);
    }
    for (r, row) in layout.rows.iter().enumerate() {
        if row.is_empty() {
            return Err(LayoutError::EmptyRow(r));
        }
        for (c, key) in row.iter().enumerate() {
            if key.normal.is_empty() {
                return Err(LayoutError::EmptyLabel { row: r, col: c });
            }
            if key.special.is_some() && key.ctrl.is_some() {
                return Err(LayoutError::CtrlOnSpecial { row: r, col: c });
            }
        }
    }
    Ok(())
}
