use lawha_core::engine::TextBuffer;
use pretty_assertions::assert_eq;

#[test]
fn insert_appends_at_the_cursor() {
    let mut buffer = TextBuffer::new();
    buffer.insert("سل");
    buffer.insert("ام");
    assert_eq!(buffer.as_str(), "سلام");
    assert_eq!(buffer.cursor(), 4);
}

#[test]
fn insert_in_the_middle_splices() {
    let mut buffer = TextBuffer::new();
    buffer.insert("سم");
    buffer.move_cursor_to(1);
    buffer.insert("لا");
    assert_eq!(buffer.as_str(), "سلام");
    assert_eq!(buffer.cursor(), 3);
}

#[test]
fn insert_replaces_the_selection() {
    let mut buffer = TextBuffer::new();
    buffer.insert("كتاب");
    buffer.select(1, 3);
    buffer.insert("ـ");
    assert_eq!(buffer.as_str(), "كـب");
    assert_eq!(buffer.cursor(), 2);
    assert_eq!(buffer.selection(), None);
}

#[test]
fn backspace_removes_the_char_before_the_cursor() {
    let mut buffer = TextBuffer::new();
    buffer.insert("سلام");
    buffer.move_cursor_to(2);
    assert_eq!(buffer.backspace(), 1);
    assert_eq!(buffer.as_str(), "سام");
    assert_eq!(buffer.cursor(), 1);
}

#[test]
fn backspace_deletes_the_whole_selection() {
    let mut buffer = TextBuffer::new();
    buffer.insert("سلام");
    buffer.select(1, 3);
    assert_eq!(buffer.backspace(), 2);
    assert_eq!(buffer.as_str(), "سم");
    assert_eq!(buffer.cursor(), 1);
}

#[test]
fn backspace_at_start_is_a_no_op() {
    let mut buffer = TextBuffer::new();
    buffer.insert("س");
    buffer.move_cursor_to(0);
    assert_eq!(buffer.backspace(), 0);
    assert_eq!(buffer.as_str(), "س");
}

#[test]
fn selection_is_normalized() {
    let mut buffer = TextBuffer::new();
    buffer.insert("سلام");
    buffer.select(3, 1);
    assert_eq!(buffer.selection(), Some((1, 3)));
}

#[test]
fn select_clamps_to_length() {
    let mut buffer = TextBuffer::new();
    buffer.insert("سل");
    buffer.select(0, 99);
    assert_eq!(buffer.selection(), Some((0, 2)));
}

#[test]
fn max_len_truncates_inserts() {
    let mut buffer = TextBuffer::with_max_len(3);
    assert_eq!(buffer.insert("سلام"), 3);
    assert_eq!(buffer.as_str(), "سلا");
    assert_eq!(buffer.insert("م"), 0);
}

#[test]
fn replacing_a_selection_respects_max_len() {
    let mut buffer = TextBuffer::with_max_len(4);
    buffer.insert("سلام");
    buffer.select(0, 1);
    assert_eq!(buffer.insert("لآلآ"), 1);
    assert_eq!(buffer.as_str(), "للام");
}

#[test]
fn take_leaves_an_empty_buffer() {
    let mut buffer = TextBuffer::new();
    buffer.insert("سلام");
    assert_eq!(buffer.take(), "سلام");
    assert!(buffer.is_empty());
    assert_eq!(buffer.cursor(), 0);
}

#[test]
fn set_places_the_cursor_at_the_end() {
    let mut buffer = TextBuffer::new();
    buffer.set("مرحبا");
    assert_eq!(buffer.cursor(), 5);
}
