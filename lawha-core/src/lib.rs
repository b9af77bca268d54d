//! Lawha - engine for an on-screen Arabic keyboard.
//!
//! The crate is the platform-neutral half of a virtual keyboard widget:
//! layout tables, the Shift/Ctrl modifier resolver, the composing text
//! buffer, the settings system with deep-merge persistence, and the models
//! frontends render from (floating words, word history, feedback dispatch).

pub mod engine;
pub mod error;
pub mod feedback;
pub mod float;
pub mod history;
pub mod layouts;
pub mod settings;
pub mod types;
pub mod widget;

pub use types::*;

// Re-export commonly used types
pub use engine::{
    ActionType, EngineEvent, EngineOutput, KeyboardEngine, ModifierState, ResetPolicy, TextBuffer,
};
pub use error::{Error, Result};
pub use feedback::{FeedbackEvent, FeedbackKind};
pub use float::{FloatingWord, WordField};
pub use history::WordHistory;
pub use layouts::{kbda1, LayoutError};
pub use settings::{FileStore, MemoryStore, Settings, SettingsStore, StoreError};
pub use widget::KeyboardWidget;
