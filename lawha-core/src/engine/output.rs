//! Output of one engine step

use crate::feedback::FeedbackEvent;

/// Buffer mutation performed by a key press.
#[derive(Debug, Clone, PartialEq)]
pub enum ActionType {
    /// Nothing changed (modifier toggle, no-op key).
    None,
    /// Text inserted at the cursor.
    Insert(String),
    /// Characters deleted before the cursor (or a deleted selection).
    Delete(usize),
    /// The whole buffer was cleared.
    Clear,
}

/// Notification surfaced to the embedding frontend.
#[derive(Debug, Clone, PartialEq)]
pub enum EngineEvent {
    /// Enter (or a completing Space) finished a word; carries the trimmed text.
    WordCompleted(String),
    /// The widget was shown or hidden.
    VisibilityChanged(bool),
    /// A modifier flag flipped.
    ModifierChanged { shift: bool, ctrl: bool },
    /// Feedback to play for this press.
    Feedback(FeedbackEvent),
}

/// Result of processing a key press.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineOutput {
    /// Composing text after the press.
    pub composing_text: String,
    /// Buffer mutation that occurred.
    pub action: ActionType,
    /// Events raised by the press, in order.
    pub events: Vec<EngineEvent>,
}

impl EngineOutput {
    pub fn new(composing_text: String, action: ActionType) -> Self {
        Self {
            composing_text,
            action,
            events: Vec::new(),
        }
    }

    /// Convenience accessor for the completed word, if any.
    pub fn completed_word(&self) -> Option<&str> {
        self.events.iter().find_map(|event| match event {
            EngineEvent::WordCompleted(word) => Some(word.as_str()),
            _ => None,
        })
    }
}
