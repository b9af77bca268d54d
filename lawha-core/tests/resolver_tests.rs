mod common;

use lawha_core::engine::{display_label, resolve, ModifierState, ResetPolicy};
use lawha_core::types::{KeyDef, SpecialKey};
use pretty_assertions::assert_eq;

fn plain() -> KeyDef {
    KeyDef::new("ب", "[")
}

fn alif() -> KeyDef {
    KeyDef::with_ctrl("ل", "لأ", "أ")
}

#[test]
fn no_modifiers_emit_normal() {
    let res = resolve(&plain(), ModifierState::default(), ResetPolicy::default());
    assert_eq!(res.text.as_deref(), Some("ب"));
    assert!(res.next.none());
}

#[test]
fn shift_substitutes_and_auto_resets() {
    let state = ModifierState::new(true, false);
    let res = resolve(&plain(), state, ResetPolicy::default());
    assert_eq!(res.text.as_deref(), Some("["));
    assert!(!res.next.shift);
}

#[test]
fn shift_survives_when_auto_reset_is_off() {
    let policy = ResetPolicy {
        shift_auto_reset: false,
        ..ResetPolicy::default()
    };
    let res = resolve(&plain(), ModifierState::new(true, false), policy);
    assert_eq!(res.text.as_deref(), Some("["));
    assert!(res.next.shift);
}

#[test]
fn sticky_keys_override_auto_reset() {
    let policy = ResetPolicy {
        sticky_keys: true,
        ..ResetPolicy::default()
    };
    let res = resolve(&alif(), ModifierState::new(false, true), policy);
    assert_eq!(res.text.as_deref(), Some("أ"));
    assert!(res.next.ctrl);
}

#[test]
fn ctrl_substitutes_and_auto_resets() {
    let res = resolve(
        &alif(),
        ModifierState::new(false, true),
        ResetPolicy::default(),
    );
    assert_eq!(res.text.as_deref(), Some("أ"));
    assert!(!res.next.ctrl);
}

#[test]
fn ctrl_wins_over_shift_and_only_ctrl_is_consumed() {
    let res = resolve(
        &alif(),
        ModifierState::new(true, true),
        ResetPolicy::default(),
    );
    assert_eq!(res.text.as_deref(), Some("أ"));
    assert!(!res.next.ctrl);
    assert!(res.next.shift);
}

#[test]
fn ctrl_without_ctrl_char_falls_through_to_shift() {
    let res = resolve(
        &plain(),
        ModifierState::new(true, true),
        ResetPolicy::default(),
    );
    assert_eq!(res.text.as_deref(), Some("["));
    assert!(!res.next.shift);
    // ctrl was not consumed
    assert!(res.next.ctrl);
}

#[test]
fn ctrl_without_ctrl_char_and_no_shift_emits_normal() {
    let res = resolve(
        &plain(),
        ModifierState::new(false, true),
        ResetPolicy::default(),
    );
    assert_eq!(res.text.as_deref(), Some("ب"));
    assert!(res.next.ctrl);
}

#[test]
fn modifier_specials_toggle_their_own_flag() {
    let shift_key = KeyDef::action("Shift", SpecialKey::Shift);
    let res = resolve(
        &shift_key,
        ModifierState::default(),
        ResetPolicy::default(),
    );
    assert_eq!(res.text, None);
    assert!(res.next.shift);

    let res = resolve(&shift_key, res.next, ResetPolicy::default());
    assert!(!res.next.shift);
}

#[test]
fn other_specials_leave_modifiers_untouched() {
    let backspace = KeyDef::action("⌫", SpecialKey::Backspace);
    let state = ModifierState::new(true, true);
    let res = resolve(&backspace, state, ResetPolicy::default());
    assert_eq!(res.text, None);
    assert_eq!(res.next, state);
}

#[test]
fn display_follows_precedence_without_mutating() {
    let key = alif();
    assert_eq!(display_label(&key, ModifierState::default()), "ل");
    assert_eq!(display_label(&key, ModifierState::new(true, false)), "لأ");
    assert_eq!(display_label(&key, ModifierState::new(false, true)), "أ");
    assert_eq!(display_label(&key, ModifierState::new(true, true)), "أ");
}

#[test]
fn special_keys_keep_their_label_under_shift() {
    let space = KeyDef::action("مسافة", SpecialKey::Space);
    assert_eq!(display_label(&space, ModifierState::new(true, false)), "مسافة");
}
