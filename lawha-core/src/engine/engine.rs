use crate::feedback::{self, FeedbackKind};
use crate::settings::{BehaviorSettings, Settings, SoundSettings, SpaceKeyAction};
use crate::types::{KeyDef, Layout, SpecialKey};
use crate::{Error, Result};

use super::output::{ActionType, EngineEvent, EngineOutput};
use super::resolver::{self, ResetPolicy};
use super::state::{EngineState, ModifierState, TextBuffer};

/// The keyboard engine: one instance per widget.
///
/// Owns the layout table, the composing buffer, the modifier flags and the
/// visibility of the widget. Frontends feed it key positions (or key
/// definitions) and render from the returned [`EngineOutput`].
pub struct KeyboardEngine {
    layout: Layout,
    state: EngineState,
    behavior: BehaviorSettings,
    sound: SoundSettings,
}

impl KeyboardEngine {
    /// Creates an engine with default behavior over the given layout.
    pub fn new(layout: Layout) -> Self {
        Self::with_behavior(layout, BehaviorSettings::default(), SoundSettings::default())
    }

    /// Creates an engine wired to the user's settings.
    pub fn from_settings(layout: Layout, settings: &Settings) -> Self {
        Self::with_behavior(
            layout,
            settings.behavior.clone(),
            settings.sound.clone(),
        )
    }

    pub fn with_behavior(layout: Layout, behavior: BehaviorSettings, sound: SoundSettings) -> Self {
        let mut state = EngineState::new();
        state.buffer.set_max_len(behavior.max_text_length);
        Self {
            layout,
            state,
            behavior,
            sound,
        }
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn behavior(&self) -> &BehaviorSettings {
        &self.behavior
    }

    pub fn composing_text(&self) -> &str {
        self.state.buffer.as_str()
    }

    pub fn buffer(&self) -> &TextBuffer {
        &self.state.buffer
    }

    /// Mutable buffer access for cursor and selection control.
    pub fn buffer_mut(&mut self) -> &mut TextBuffer {
        &mut self.state.buffer
    }

    pub fn modifiers(&self) -> ModifierState {
        self.state.modifiers
    }

    pub fn is_visible(&self) -> bool {
        self.state.visible
    }

    /// What the key face at `(row, col)` should currently show.
    pub fn display_label(&self, row: usize, col: usize) -> Option<&str> {
        self.layout
            .key_at(row, col)
            .map(|key| resolver::display_label(key, self.state.modifiers))
    }

    /// Clears the buffer and modifier flags.
    pub fn reset(&mut self) {
        self.state.reset();
    }

    /// Processes a click on the key at `(row, col)`.
    pub fn press(&mut self, row: usize, col: usize) -> Result<EngineOutput> {
        let key = self
            .layout
            .key_at(row, col)
            .cloned()
            .ok_or(Error::InvalidKeyPosition { row, col })?;
        Ok(self.press_key(&key))
    }

    /// Processes a click on a key definition.
    pub fn press_key(&mut self, key: &KeyDef) -> EngineOutput {
        let mut events = Vec::new();
        if let Some(fb) = feedback::dispatch(FeedbackKind::KeyClick, &self.sound) {
            events.push(EngineEvent::Feedback(fb));
        }

        let before = self.state.modifiers;
        let resolution = resolver::resolve(key, before, ResetPolicy::from(&self.behavior));

        let action = match key.special {
            Some(SpecialKey::Backspace) => {
                let removed = self.state.buffer.backspace();
                if removed > 0 {
                    ActionType::Delete(removed)
                } else {
                    ActionType::None
                }
            }
            Some(SpecialKey::Enter) => self.complete_word(&mut events),
            Some(SpecialKey::Space) => match self.behavior.space_key_action {
                SpaceKeyAction::InsertSpace => self.insert_text(" "),
                SpaceKeyAction::CompleteWord => self.complete_word(&mut events),
                SpaceKeyAction::Both => {
                    let action = self.insert_text(" ");
                    self.complete_word(&mut events);
                    action
                }
            },
            Some(SpecialKey::Clear) => {
                self.state.buffer.clear();
                ActionType::Clear
            }
            Some(SpecialKey::Close) => {
                self.set_visible(false, &mut events);
                ActionType::None
            }
            // Alt has no function; Shift/Ctrl only touch modifier state
            Some(SpecialKey::Alt) | Some(SpecialKey::Shift) | Some(SpecialKey::Ctrl) => {
                ActionType::None
            }
            None => match &resolution.text {
                Some(text) => self.insert_text(text),
                None => ActionType::None,
            },
        };

        self.state.modifiers = resolution.next;
        if resolution.next != before {
            events.push(EngineEvent::ModifierChanged {
                shift: resolution.next.shift,
                ctrl: resolution.next.ctrl,
            });
        }

        let mut output = EngineOutput::new(self.state.buffer.as_str().to_string(), action);
        output.events = events;
        output
    }

    fn insert_text(&mut self, text: &str) -> ActionType {
        let count = self.state.buffer.insert(text);
        if count == 0 {
            return ActionType::None;
        }
        // max_text_length may have truncated the input
        let inserted: String = text.chars().take(count).collect();
        ActionType::Insert(inserted)
    }

    /// Completes the current word: whitespace-only buffers complete nothing.
    fn complete_word(&mut self, events: &mut Vec<EngineEvent>) -> ActionType {
        let trimmed = self.state.buffer.as_str().trim();
        if trimmed.is_empty() {
            return ActionType::None;
        }
        events.push(EngineEvent::WordCompleted(trimmed.to_string()));

        let action = if self.behavior.clear_on_submit {
            self.state.buffer.clear();
            ActionType::Clear
        } else {
            ActionType::None
        };

        if self.behavior.hide_on_word_complete {
            self.set_visible(false, events);
        }
        action
    }

    /// Toggles widget visibility.
    pub fn toggle(&mut self) -> EngineOutput {
        let mut events = Vec::new();
        let target = !self.state.visible;
        self.set_visible(target, &mut events);
        let mut output =
            EngineOutput::new(self.state.buffer.as_str().to_string(), ActionType::None);
        output.events = events;
        output
    }

    /// A click landed outside the widget; hides it when the behavior
    /// settings ask for that.
    pub fn click_outside(&mut self) -> EngineOutput {
        let mut events = Vec::new();
        if self.behavior.click_outside_to_close {
            self.set_visible(false, &mut events);
        }
        let mut output =
            EngineOutput::new(self.state.buffer.as_str().to_string(), ActionType::None);
        output.events = events;
        output
    }

    fn set_visible(&mut self, visible: bool, events: &mut Vec<EngineEvent>) {
        if self.state.visible == visible {
            return;
        }
        self.state.visible = visible;
        events.push(EngineEvent::VisibilityChanged(visible));
        if let Some(fb) = feedback::dispatch(FeedbackKind::OpenClose, &self.sound) {
            events.push(EngineEvent::Feedback(fb));
        }
    }
}
