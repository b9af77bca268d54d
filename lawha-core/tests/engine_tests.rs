mod common;

use common::*;
use lawha_core::engine::{ActionType, EngineEvent};
use lawha_core::settings::{BehaviorSettings, SpaceKeyAction};
use lawha_core::types::SpecialKey;
use lawha_core::Error;
use pretty_assertions::assert_eq;

#[test]
fn typing_builds_the_composing_buffer() {
    let mut engine = kbda1_engine();
    type_labels(&mut engine, &["س", "ل", "ا", "م"]);
    assert_eq!(engine.composing_text(), "سلام");
}

#[test]
fn ctrl_then_key_emits_alif_variant() {
    let mut engine = kbda1_engine();
    press_special(&mut engine, SpecialKey::Ctrl);
    let output = press_label(&mut engine, "ف");
    assert_eq!(output.action, ActionType::Insert("إ".to_string()));
    assert_eq!(engine.composing_text(), "إ");
    // auto-reset consumed the modifier
    assert!(!engine.modifiers().ctrl);
}

#[test]
fn shift_then_key_emits_shift_char() {
    let mut engine = kbda1_engine();
    press_special(&mut engine, SpecialKey::Shift);
    let output = press_label(&mut engine, "ض");
    assert_eq!(output.action, ActionType::Insert("َ".to_string()));
    assert!(!engine.modifiers().shift);
}

#[test]
fn modifier_toggle_raises_event_without_action() {
    let mut engine = kbda1_engine();
    let output = press_special(&mut engine, SpecialKey::Shift);
    assert_eq!(output.action, ActionType::None);
    assert!(output
        .events
        .contains(&EngineEvent::ModifierChanged { shift: true, ctrl: false }));
}

#[test]
fn alt_is_a_no_op() {
    let mut engine = kbda1_engine();
    type_labels(&mut engine, &["ب"]);
    let output = press_special(&mut engine, SpecialKey::Alt);
    assert_eq!(output.action, ActionType::None);
    assert!(output.events.is_empty());
    assert_eq!(engine.composing_text(), "ب");
}

#[test]
fn backspace_removes_exactly_the_last_char() {
    let mut engine = kbda1_engine();
    type_labels(&mut engine, &["س", "ل"]);
    let output = press_special(&mut engine, SpecialKey::Backspace);
    assert_eq!(output.action, ActionType::Delete(1));
    assert_eq!(engine.composing_text(), "س");
}

#[test]
fn backspace_on_empty_buffer_does_nothing() {
    let mut engine = kbda1_engine();
    let output = press_special(&mut engine, SpecialKey::Backspace);
    assert_eq!(output.action, ActionType::None);
}

#[test]
fn enter_completes_the_trimmed_word() {
    let mut engine = kbda1_engine();
    type_labels(&mut engine, &["س", "ل", "ا", "م"]);
    press_special(&mut engine, SpecialKey::Space);
    let output = press_special(&mut engine, SpecialKey::Enter);
    assert_eq!(output.completed_word(), Some("سلام"));
    // clear_on_submit default
    assert_eq!(output.action, ActionType::Clear);
    assert_eq!(engine.composing_text(), "");
}

#[test]
fn enter_on_whitespace_only_buffer_completes_nothing() {
    let mut engine = kbda1_engine();
    press_special(&mut engine, SpecialKey::Space);
    press_special(&mut engine, SpecialKey::Space);
    let output = press_special(&mut engine, SpecialKey::Enter);
    assert_eq!(output.completed_word(), None);
    assert_eq!(output.action, ActionType::None);
    assert_eq!(engine.composing_text(), "  ");
}

#[test]
fn enter_keeps_buffer_when_clear_on_submit_is_off() {
    let behavior = BehaviorSettings {
        clear_on_submit: false,
        ..BehaviorSettings::default()
    };
    let mut engine = engine_with(behavior);
    type_labels(&mut engine, &["ب"]);
    let output = press_special(&mut engine, SpecialKey::Enter);
    assert_eq!(output.completed_word(), Some("ب"));
    assert_eq!(engine.composing_text(), "ب");
}

#[test]
fn hide_on_word_complete_hides_the_widget() {
    let behavior = BehaviorSettings {
        hide_on_word_complete: true,
        ..BehaviorSettings::default()
    };
    let mut engine = engine_with(behavior);
    type_labels(&mut engine, &["ب"]);
    let output = press_special(&mut engine, SpecialKey::Enter);
    assert!(output.events.contains(&EngineEvent::VisibilityChanged(false)));
    assert!(!engine.is_visible());
}

#[test]
fn space_inserts_by_default() {
    let mut engine = kbda1_engine();
    type_labels(&mut engine, &["ب"]);
    let output = press_special(&mut engine, SpecialKey::Space);
    assert_eq!(output.action, ActionType::Insert(" ".to_string()));
    assert_eq!(engine.composing_text(), "ب ");
}

#[test]
fn space_can_complete_the_word() {
    let behavior = BehaviorSettings {
        space_key_action: SpaceKeyAction::CompleteWord,
        ..BehaviorSettings::default()
    };
    let mut engine = engine_with(behavior);
    type_labels(&mut engine, &["ب"]);
    let output = press_special(&mut engine, SpecialKey::Space);
    assert_eq!(output.completed_word(), Some("ب"));
    assert_eq!(engine.composing_text(), "");
}

#[test]
fn space_both_inserts_then_completes() {
    let behavior = BehaviorSettings {
        space_key_action: SpaceKeyAction::Both,
        ..BehaviorSettings::default()
    };
    let mut engine = engine_with(behavior);
    type_labels(&mut engine, &["ب"]);
    let output = press_special(&mut engine, SpecialKey::Space);
    // the inserted space does not survive trimming
    assert_eq!(output.completed_word(), Some("ب"));
    assert_eq!(engine.composing_text(), "");
}

#[test]
fn clear_key_empties_the_buffer() {
    let mut engine = kbda1_engine();
    type_labels(&mut engine, &["س", "ل"]);
    let output = press_special(&mut engine, SpecialKey::Clear);
    assert_eq!(output.action, ActionType::Clear);
    assert_eq!(engine.composing_text(), "");
}

#[test]
fn max_text_length_truncates_input() {
    let behavior = BehaviorSettings {
        max_text_length: 2,
        ..BehaviorSettings::default()
    };
    let mut engine = engine_with(behavior);
    type_labels(&mut engine, &["س", "ل"]);
    let output = press_label(&mut engine, "م");
    assert_eq!(output.action, ActionType::None);
    assert_eq!(engine.composing_text(), "سل");
}

#[test]
fn lam_alef_ligature_counts_two_chars_against_the_limit() {
    let behavior = BehaviorSettings {
        max_text_length: 3,
        ..BehaviorSettings::default()
    };
    let mut engine = engine_with(behavior);
    type_labels(&mut engine, &["س", "ل"]);
    press_special(&mut engine, SpecialKey::Shift);
    // Shift+ل is the two-char ligature لأ; only one char fits
    let output = press_label(&mut engine, "ل");
    assert_eq!(output.action, ActionType::Insert("ل".to_string()));
    assert_eq!(engine.composing_text(), "سلل");
}

#[test]
fn press_out_of_range_is_an_error() {
    let mut engine = kbda1_engine();
    match engine.press(9, 0) {
        Err(Error::InvalidKeyPosition { row, col }) => {
            assert_eq!((row, col), (9, 0));
        }
        other => panic!("expected InvalidKeyPosition, got {other:?}"),
    }
}

#[test]
fn toggle_flips_visibility_both_ways() {
    let mut engine = kbda1_engine();
    assert!(engine.is_visible());
    let output = engine.toggle();
    assert!(output.events.contains(&EngineEvent::VisibilityChanged(false)));
    let output = engine.toggle();
    assert!(output.events.contains(&EngineEvent::VisibilityChanged(true)));
    assert!(engine.is_visible());
}

#[test]
fn click_outside_honors_the_behavior_flag() {
    let mut engine = kbda1_engine();
    engine.click_outside();
    assert!(!engine.is_visible());

    let behavior = BehaviorSettings {
        click_outside_to_close: false,
        ..BehaviorSettings::default()
    };
    let mut engine = engine_with(behavior);
    let output = engine.click_outside();
    assert!(output.events.is_empty());
    assert!(engine.is_visible());
}

#[test]
fn display_labels_track_modifier_state() {
    let mut engine = kbda1_engine();
    let (row, col) = engine.layout().position_of("ل").unwrap();
    assert_eq!(engine.display_label(row, col), Some("ل"));
    press_special(&mut engine, SpecialKey::Ctrl);
    assert_eq!(engine.display_label(row, col), Some("أ"));
}
