//! Widget-scoped engine state

use super::buffer::TextBuffer;

/// State of the on-screen modifier keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ModifierState {
    pub shift: bool,
    pub ctrl: bool,
}

impl ModifierState {
    pub fn new(shift: bool, ctrl: bool) -> Self {
        Self { shift, ctrl }
    }

    /// Checks if any modifier is active.
    pub fn any(&self) -> bool {
        self.shift || self.ctrl
    }

    /// Checks if no modifiers are active.
    pub fn none(&self) -> bool {
        !self.any()
    }
}

/// Mutable state scoped to one keyboard widget instance.
#[derive(Debug, Clone)]
pub struct EngineState {
    pub(crate) buffer: TextBuffer,
    pub(crate) modifiers: ModifierState,
    pub(crate) visible: bool,
}

impl EngineState {
    pub fn new() -> Self {
        Self {
            buffer: TextBuffer::new(),
            modifiers: ModifierState::default(),
            visible: true,
        }
    }

    /// Clears the buffer and modifiers; visibility is left alone.
    pub fn reset(&mut self) {
        self.buffer.clear();
        self.modifiers = ModifierState::default();
    }
}

impl Default for EngineState {
    fn default() -> Self {
        Self::new()
    }
}
