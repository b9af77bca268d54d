//! Floating word-display model.
//!
//! Completed words drift on screen at a random position, size and opacity
//! until dismissed. This module only manages the word queue and placement;
//! drawing and animating are the frontend's job.

use rand::Rng;

/// Upper bound on simultaneously displayed words; the oldest is dropped.
pub const MAX_FLOATING_WORDS: usize = 15;

/// Number of entries in the frontend's float color palette.
pub const FLOAT_COLOR_COUNT: usize = 8;

/// One word drifting on screen.
#[derive(Debug, Clone, PartialEq)]
pub struct FloatingWord {
    pub id: u64,
    pub text: String,
    /// Horizontal position as a percentage of the field width, 10-90.
    pub x: f32,
    /// Vertical position as a percentage of the field height, 10-90.
    pub y: f32,
    /// Font size in rem, 2-6.
    pub size_rem: f32,
    /// Opacity, 0.6-1.0.
    pub opacity: f32,
    /// Index into the frontend's palette.
    pub color_index: usize,
}

/// The set of words currently floating.
#[derive(Debug, Clone, Default)]
pub struct WordField {
    words: Vec<FloatingWord>,
    next_id: u64,
}

impl WordField {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a word with random placement; returns its id.
    pub fn push<R: Rng>(&mut self, text: &str, rng: &mut R) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.words.push(FloatingWord {
            id,
            text: text.to_string(),
            x: rng.gen_range(10.0..90.0),
            y: rng.gen_range(10.0..90.0),
            size_rem: rng.gen_range(2.0..6.0),
            opacity: rng.gen_range(0.6..1.0),
            color_index: rng.gen_range(0..FLOAT_COLOR_COUNT),
        });
        if self.words.len() > MAX_FLOATING_WORDS {
            self.words.remove(0);
        }
        id
    }

    /// Removes a word by id (the user clicked it). Returns whether it was
    /// still present.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.words.len();
        self.words.retain(|word| word.id != id);
        self.words.len() != before
    }

    pub fn words(&self) -> &[FloatingWord] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn clear(&mut self) {
        self.words.clear();
    }
}
