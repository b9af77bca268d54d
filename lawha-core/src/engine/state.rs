//! Engine state: composing buffer and modifier flags

mod buffer;
mod engine_state;

pub use buffer::TextBuffer;
pub use engine_state::{EngineState, ModifierState};
