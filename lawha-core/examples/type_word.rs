use lawha_core::engine::{EngineEvent, KeyboardEngine};
use lawha_core::{kbda1, SpecialKey};

fn main() {
    let mut engine = KeyboardEngine::new(kbda1());
    let layout = engine.layout().clone();

    println!("Layout: {} ({} keys)", layout.name, layout.key_count());
    println!("==================");

    // Type سلام, then complete the word with Enter
    for label in ["س", "ل", "ا", "م"] {
        let (row, col) = layout.position_of(label).expect("key exists in KBDA1");
        let output = engine.press(row, col).expect("position is valid");
        println!("pressed {:>2} -> composing \"{}\"", label, output.composing_text);
    }

    let (row, col) = layout
        .position_of_special(SpecialKey::Enter)
        .expect("KBDA1 has an Enter key");
    let output = engine.press(row, col).expect("position is valid");

    for event in &output.events {
        if let EngineEvent::WordCompleted(word) = event {
            println!("completed word: {word}");
        }
    }
}
