use lawha_core::engine::{EngineOutput, KeyboardEngine};
use lawha_core::settings::{BehaviorSettings, Settings, SoundSettings};
use lawha_core::types::{KeyDef, Layout, SpecialKey, TextDirection};

/// Builds a small layout exercising every key flavor.
#[allow(dead_code)]
pub fn test_layout() -> Layout {
    Layout {
        id: "test".to_string(),
        name: "Test".to_string(),
        direction: TextDirection::Rtl,
        rows: vec![
            vec![
                KeyDef::new("ب", "["),
                KeyDef::with_ctrl("ل", "لأ", "أ"),
                KeyDef::new("١", "!"),
            ],
            vec![
                KeyDef::action("Shift", SpecialKey::Shift),
                KeyDef::action("Ctrl", SpecialKey::Ctrl),
                KeyDef::action("مسافة", SpecialKey::Space),
                KeyDef::action("↵", SpecialKey::Enter),
                KeyDef::action("⌫", SpecialKey::Backspace),
                KeyDef::action("مسح", SpecialKey::Clear),
            ],
        ],
    }
}

/// Engine over the KBDA1 table with default behavior, sounds muted so tests
/// only see the events they care about.
#[allow(dead_code)]
pub fn kbda1_engine() -> KeyboardEngine {
    engine_with(BehaviorSettings::default())
}

#[allow(dead_code)]
pub fn engine_with(behavior: BehaviorSettings) -> KeyboardEngine {
    KeyboardEngine::with_behavior(lawha_core::kbda1(), behavior, muted())
}

#[allow(dead_code)]
pub fn muted() -> SoundSettings {
    SoundSettings {
        sound_enabled: false,
        haptic_feedback: false,
        ..SoundSettings::default()
    }
}

#[allow(dead_code)]
pub fn muted_settings() -> Settings {
    Settings {
        sound: muted(),
        ..Settings::default()
    }
}

/// Presses the first key whose normal label matches.
#[allow(dead_code)]
pub fn press_label(engine: &mut KeyboardEngine, label: &str) -> EngineOutput {
    let (row, col) = engine
        .layout()
        .position_of(label)
        .unwrap_or_else(|| panic!("no key labelled {label:?} in layout"));
    engine.press(row, col).unwrap()
}

/// Presses the first key bound to the given special action.
#[allow(dead_code)]
pub fn press_special(engine: &mut KeyboardEngine, special: SpecialKey) -> EngineOutput {
    let (row, col) = engine
        .layout()
        .position_of_special(special)
        .unwrap_or_else(|| panic!("no {special:?} key in layout"));
    engine.press(row, col).unwrap()
}

/// Types a string one character key at a time.
#[allow(dead_code)]
pub fn type_labels(engine: &mut KeyboardEngine, labels: &[&str]) {
    for label in labels {
        press_label(engine, label);
    }
}
