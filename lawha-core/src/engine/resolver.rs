//! Modifier resolution: which character a key emits under the current
//! Shift/Ctrl state, and what the state becomes afterwards.
//!
//! Ctrl takes precedence over Shift: when both are active and the key
//! defines both substitutions, the Ctrl character wins and only the Ctrl
//! flag is consumed.

use crate::settings::BehaviorSettings;
use crate::types::{KeyDef, SpecialKey};

use super::state::ModifierState;

/// Reset behavior applied after a modifier substitution is used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResetPolicy {
    /// Clear Shift once its substitution has been emitted.
    pub shift_auto_reset: bool,
    /// Clear Ctrl once its substitution has been emitted.
    pub ctrl_auto_reset: bool,
    /// Keep modifiers latched regardless of the auto-reset flags.
    pub sticky_keys: bool,
}

impl Default for ResetPolicy {
    fn default() -> Self {
        Self {
            shift_auto_reset: true,
            ctrl_auto_reset: true,
            sticky_keys: false,
        }
    }
}

impl From<&BehaviorSettings> for ResetPolicy {
    fn from(behavior: &BehaviorSettings) -> Self {
        Self {
            shift_auto_reset: behavior.shift_auto_reset,
            ctrl_auto_reset: behavior.ctrl_auto_reset,
            sticky_keys: behavior.sticky_keys,
        }
    }
}

/// Outcome of resolving one key press.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    /// Text to insert; `None` for special keys.
    pub text: Option<String>,
    /// Modifier state after the press.
    pub next: ModifierState,
}

/// Resolves a key press against the current modifier state.
///
/// Special keys never emit text: the modifier toggles flip their own flag
/// and every other special action leaves the modifiers untouched. For
/// character keys, Ctrl substitution is tried first, then Shift, then the
/// unmodified character; the consumed modifier is cleared when the policy
/// auto-resets.
pub fn resolve(key: &KeyDef, state: ModifierState, policy: ResetPolicy) -> Resolution {
    let mut next = state;

    match key.special {
        Some(SpecialKey::Shift) => {
            next.shift = !state.shift;
            return Resolution { text: None, next };
        }
        Some(SpecialKey::Ctrl) => {
            next.ctrl = !state.ctrl;
            return Resolution { text: None, next };
        }
        Some(_) => {
            return Resolution { text: None, next };
        }
        None => {}
    }

    if state.ctrl {
        if let Some(ctrl_char) = &key.ctrl {
            if policy.ctrl_auto_reset && !policy.sticky_keys {
                next.ctrl = false;
            }
            return Resolution {
                text: Some(ctrl_char.clone()),
                next,
            };
        }
    }

    if state.shift && !key.shift.is_empty() {
        if policy.shift_auto_reset && !policy.sticky_keys {
            next.shift = false;
        }
        return Resolution {
            text: Some(key.shift.clone()),
            next,
        };
    }

    Resolution {
        text: Some(key.normal.clone()),
        next,
    }
}

/// What the key face should show under the current modifiers.
///
/// Same precedence as [`resolve`], without touching state. The shift label
/// only shows when it differs from the normal one, so special keys keep
/// their fixed label.
pub fn display_label<'a>(key: &'a KeyDef, state: ModifierState) -> &'a str {
    if state.ctrl {
        if let Some(ctrl_char) = &key.ctrl {
            return ctrl_char;
        }
    }
    if state.shift && key.shift != key.normal {
        return &key.shift;
    }
    &key.normal
}
