mod common;

use std::cell::RefCell;
use std::rc::Rc;

use common::muted_settings;
use lawha_core::types::SpecialKey;
use lawha_core::KeyboardWidget;
use pretty_assertions::assert_eq;

fn press_label(widget: &mut KeyboardWidget, label: &str) {
    let (row, col) = widget.engine().layout().position_of(label).unwrap();
    widget.press(row, col).unwrap();
}

fn press_special(widget: &mut KeyboardWidget, special: SpecialKey) {
    let (row, col) = widget
        .engine()
        .layout()
        .position_of_special(special)
        .unwrap();
    widget.press(row, col).unwrap();
}

#[test]
fn completed_words_reach_the_callback() {
    let words = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&words);
    let mut widget = KeyboardWidget::new(muted_settings())
        .on_word_complete(move |word| sink.borrow_mut().push(word.to_string()));

    press_label(&mut widget, "س");
    press_label(&mut widget, "ل");
    press_special(&mut widget, SpecialKey::Enter);

    assert_eq!(*words.borrow(), vec!["سل".to_string()]);
}

#[test]
fn whitespace_only_buffer_fires_no_callback() {
    let words = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&words);
    let mut widget = KeyboardWidget::new(muted_settings())
        .on_word_complete(move |word| sink.borrow_mut().push(word.to_string()));

    press_special(&mut widget, SpecialKey::Space);
    press_special(&mut widget, SpecialKey::Enter);

    assert!(words.borrow().is_empty());
}

#[test]
fn toggle_fires_the_toggle_callback() {
    let toggles = Rc::new(RefCell::new(0));
    let counter = Rc::clone(&toggles);
    let mut widget =
        KeyboardWidget::new(muted_settings()).on_toggle(move || *counter.borrow_mut() += 1);

    widget.toggle();
    widget.toggle();
    assert_eq!(*toggles.borrow(), 2);
}

#[test]
fn click_outside_counts_as_a_toggle() {
    let toggles = Rc::new(RefCell::new(0));
    let counter = Rc::clone(&toggles);
    let mut widget =
        KeyboardWidget::new(muted_settings()).on_toggle(move || *counter.borrow_mut() += 1);

    widget.click_outside();
    assert_eq!(*toggles.borrow(), 1);
    // already hidden, nothing fires
    widget.click_outside();
    assert_eq!(*toggles.borrow(), 1);
}

#[test]
fn history_records_completed_words_when_enabled() {
    let mut settings = muted_settings();
    settings.data.save_typed_words = true;
    settings.data.max_history_items = 2;
    let mut widget = KeyboardWidget::new(settings);

    for label in ["س", "ل"] {
        press_label(&mut widget, label);
        press_special(&mut widget, SpecialKey::Enter);
    }
    press_label(&mut widget, "م");
    press_special(&mut widget, SpecialKey::Enter);

    let words: Vec<_> = widget.history().words().collect();
    assert_eq!(words, vec!["ل", "م"]);
}

#[test]
fn history_stays_empty_by_default() {
    let mut widget = KeyboardWidget::new(muted_settings());
    press_label(&mut widget, "س");
    press_special(&mut widget, SpecialKey::Enter);
    assert!(widget.history().is_empty());
}
