//! Widget wrapper: engine, settings, history and activation callbacks.
//!
//! This is the surface a frontend embeds: key presses go in, the registered
//! callbacks fire for completed words and visibility changes, and completed
//! words land in history when the data settings ask for it.

use crate::engine::{EngineEvent, EngineOutput, KeyboardEngine};
use crate::history::WordHistory;
use crate::layouts;
use crate::settings::Settings;
use crate::Result;

type WordCallback = Box<dyn FnMut(&str)>;
type ToggleCallback = Box<dyn FnMut()>;

pub struct KeyboardWidget {
    engine: KeyboardEngine,
    settings: Settings,
    history: WordHistory,
    on_word_complete: Option<WordCallback>,
    on_toggle: Option<ToggleCallback>,
}

impl KeyboardWidget {
    /// Builds a widget from settings; the layout comes from the
    /// keyboard-layout section.
    pub fn new(settings: Settings) -> Self {
        let layout = layouts::for_settings(&settings.keyboard_layout);
        let engine = KeyboardEngine::from_settings(layout, &settings);
        let history = WordHistory::from_data_settings(&settings.data);
        Self {
            engine,
            settings,
            history,
            on_word_complete: None,
            on_toggle: None,
        }
    }

    /// Registers the word-completion callback.
    pub fn on_word_complete(mut self, callback: impl FnMut(&str) + 'static) -> Self {
        self.on_word_complete = Some(Box::new(callback));
        self
    }

    /// Registers the visibility-toggle callback.
    pub fn on_toggle(mut self, callback: impl FnMut() + 'static) -> Self {
        self.on_toggle = Some(Box::new(callback));
        self
    }

    pub fn engine(&self) -> &KeyboardEngine {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut KeyboardEngine {
        &mut self.engine
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn history(&self) -> &WordHistory {
        &self.history
    }

    pub fn history_mut(&mut self) -> &mut WordHistory {
        &mut self.history
    }

    /// Presses the key at `(row, col)` and routes the resulting events.
    pub fn press(&mut self, row: usize, col: usize) -> Result<EngineOutput> {
        let output = self.engine.press(row, col)?;
        self.route(&output);
        Ok(output)
    }

    /// Toggles visibility, firing the toggle callback.
    pub fn toggle(&mut self) -> EngineOutput {
        let output = self.engine.toggle();
        self.route(&output);
        output
    }

    /// Reports a click outside the widget.
    pub fn click_outside(&mut self) -> EngineOutput {
        let output = self.engine.click_outside();
        self.route(&output);
        output
    }

    fn route(&mut self, output: &EngineOutput) {
        for event in &output.events {
            match event {
                EngineEvent::WordCompleted(word) => {
                    self.history.record(word);
                    if let Some(callback) = &mut self.on_word_complete {
                        callback(word);
                    }
                }
                EngineEvent::VisibilityChanged(_) => {
                    if let Some(callback) = &mut self.on_toggle {
                        callback();
                    }
                }
                _ => {}
            }
        }
    }
}
