//! Key processing engine
//!
//! Turns key clicks into buffer mutations and events according to the
//! modifier resolution rules and the user's behavior settings.

mod engine;
mod output;
mod resolver;
mod state;

pub use engine::KeyboardEngine;
pub use output::{ActionType, EngineEvent, EngineOutput};
pub use resolver::{display_label, resolve, ResetPolicy, Resolution};
pub use state::{EngineState, ModifierState, TextBuffer};
