//! Key scripts for the typing simulator.
//!
//! A script is whitespace-separated key references:
//! - `r1c4` presses the key at row 1, column 4
//! - `<enter>`, `<shift>`, `<bksp>`, ... press the first matching special key
//! - anything else presses the first key with that normal label
//!
//! `ب س <shift> ل <enter>` types two letters, arms Shift, presses Lam and
//! completes the word.

use lawha_core::engine::KeyboardEngine;
use lawha_core::types::{Layout, SpecialKey};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScriptError {
    #[error("unknown special key: <{0}>")]
    UnknownSpecial(String),

    #[error("invalid position spec: {0}")]
    InvalidPosition(String),

    #[error("key not found in layout: {0}")]
    KeyNotFound(String),

    #[error(transparent)]
    Engine(#[from] lawha_core::Error),
}

/// One step of a simulated typing session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyRef {
    Position { row: usize, col: usize },
    Label(String),
    Special(SpecialKey),
}

impl KeyRef {
    fn describe(&self) -> String {
        match self {
            KeyRef::Position { row, col } => format!("r{row}c{col}"),
            KeyRef::Label(label) => label.clone(),
            KeyRef::Special(special) => format!("<{special:?}>").to_lowercase(),
        }
    }
}

/// Parses a whitespace-separated key script.
pub fn parse_script(input: &str) -> Result<Vec<KeyRef>, ScriptError> {
    input.split_whitespace().map(parse_token).collect()
}

fn parse_token(token: &str) -> Result<KeyRef, ScriptError> {
    if let Some(name) = token.strip_prefix('<').and_then(|t| t.strip_suffix('>')) {
        let special = match name.to_ascii_lowercase().as_str() {
            "bksp" | "backspace" => SpecialKey::Backspace,
            "enter" => SpecialKey::Enter,
            "space" => SpecialKey::Space,
            "clear" => SpecialKey::Clear,
            "ctrl" => SpecialKey::Ctrl,
            "shift" => SpecialKey::Shift,
            "alt" => SpecialKey::Alt,
            "close" => SpecialKey::Close,
            _ => return Err(ScriptError::UnknownSpecial(name.to_string())),
        };
        return Ok(KeyRef::Special(special));
    }
    if let Some(position) = parse_position(token) {
        return Ok(position);
    }
    Ok(KeyRef::Label(token.to_string()))
}

/// `rNcM` position specs; anything else is treated as a label.
fn parse_position(token: &str) -> Option<KeyRef> {
    let rest = token.strip_prefix('r')?;
    let (row_digits, col_part) = rest.split_once('c')?;
    if row_digits.is_empty() || col_part.is_empty() {
        return None;
    }
    let row = row_digits.parse().ok()?;
    let col = col_part.parse().ok()?;
    Some(KeyRef::Position { row, col })
}

/// Resolves a key reference to a layout position.
pub fn locate(layout: &Layout, key: &KeyRef) -> Result<(usize, usize), ScriptError> {
    let position = match key {
        KeyRef::Position { row, col } => {
            layout.key_at(*row, *col).map(|_| (*row, *col))
        }
        KeyRef::Label(label) => layout.position_of(label),
        KeyRef::Special(special) => layout.position_of_special(*special),
    };
    position.ok_or_else(|| ScriptError::KeyNotFound(key.describe()))
}

/// Composing text after each step, plus every completed word.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    pub steps: Vec<Step>,
    pub completed: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub key: String,
    pub composing: String,
}

/// Drives the engine through a parsed script.
pub fn run_script(engine: &mut KeyboardEngine, keys: &[KeyRef]) -> Result<Session, ScriptError> {
    let mut session = Session::default();
    for key in keys {
        let (row, col) = locate(engine.layout(), key)?;
        let output = engine.press(row, col)?;
        if let Some(word) = output.completed_word() {
            session.completed.push(word.to_string());
        }
        session.steps.push(Step {
            key: key.describe(),
            composing: output.composing_text,
        });
    }
    Ok(session)
}
