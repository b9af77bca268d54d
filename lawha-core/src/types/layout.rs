//! Layout tables: ordered rows of key definitions

use serde::{Deserialize, Serialize};

use super::key::KeyDef;

/// Direction of the text the layout composes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextDirection {
    #[default]
    Rtl,
    Ltr,
}

/// A complete on-screen keyboard layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Layout {
    /// Stable identifier, e.g. `"kbda1"`.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    #[serde(default)]
    pub direction: TextDirection,
    /// Rows of keys, top to bottom.
    pub rows: Vec<Vec<KeyDef>>,
}

impl Layout {
    /// Looks up a key by row and column.
    pub fn key_at(&self, row: usize, col: usize) -> Option<&KeyDef> {
        self.rows.get(row).and_then(|r| r.get(col))
    }

    /// Total number of keys across all rows.
    pub fn key_count(&self) -> usize {
        self.rows.iter().map(Vec::len).sum()
    }

    /// Finds the position of the first key whose normal label matches.
    pub fn position_of(&self, normal: &str) -> Option<(usize, usize)> {
        for (r, row) in self.rows.iter().enumerate() {
            for (c, key) in row.iter().enumerate() {
                if key.normal == normal {
                    return Some((r, c));
                }
            }
        }
        None
    }

    /// Finds the position of the first key bound to the given special action.
    pub fn position_of_special(&self, special: super::key::SpecialKey) -> Option<(usize, usize)> {
        for (r, row) in self.rows.iter().enumerate() {
            for (c, key) in row.iter().enumerate() {
                if key.special == Some(special) {
                    return Some((r, c));
                }
            }
        }
        None
    }
}
