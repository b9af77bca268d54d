//! Feedback dispatch records.
//!
//! The engine computes what a key press should sound and feel like; actually
//! playing audio or driving a vibration motor is the embedder's job, and any
//! playback failure is theirs to swallow and log. Text composition never
//! depends on feedback.

use crate::settings::{HapticIntensity, SoundSettings};

/// What triggered the feedback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackKind {
    KeyClick,
    OpenClose,
}

/// A ready-to-play feedback record.
#[derive(Debug, Clone, PartialEq)]
pub struct FeedbackEvent {
    pub kind: FeedbackKind,
    /// Effective playback volume in `0.0..=1.0`, master volume applied.
    /// `None` when sound is disabled for this kind.
    pub volume: Option<f32>,
    /// Vibration pattern in milliseconds. `None` when haptics do not apply.
    pub haptic: Option<Vec<u64>>,
}

/// Effective volume for a feedback kind, or `None` when muted.
pub fn sound_volume(kind: FeedbackKind, sound: &SoundSettings) -> Option<f32> {
    if !sound.sound_enabled {
        return None;
    }
    let (enabled, volume) = match kind {
        FeedbackKind::KeyClick => (sound.click_sound_enabled, sound.click_sound_volume),
        FeedbackKind::OpenClose => (sound.open_close_sound_enabled, sound.open_close_sound_volume),
    };
    if !enabled {
        return None;
    }
    Some((f32::from(volume) / 100.0) * (f32::from(sound.master_volume) / 100.0))
}

/// Vibration pattern for a feedback kind, or `None` when haptics are off.
pub fn haptic_pattern(kind: FeedbackKind, sound: &SoundSettings) -> Option<Vec<u64>> {
    if !sound.haptic_feedback {
        return None;
    }
    match kind {
        FeedbackKind::KeyClick => {
            let duration = sound.haptic_key_press_duration;
            match sound.haptic_key_press {
                HapticIntensity::None => None,
                HapticIntensity::Light => Some(vec![duration]),
                HapticIntensity::Medium => Some(vec![duration, 50, duration]),
                HapticIntensity::Strong => {
                    Some(vec![duration, 50, duration, 50, duration])
                }
            }
        }
        FeedbackKind::OpenClose => match sound.haptic_open_close {
            HapticIntensity::None => None,
            HapticIntensity::Light => Some(vec![20]),
            // the open/close pattern is fixed regardless of key-press duration
            HapticIntensity::Medium | HapticIntensity::Strong => Some(vec![30, 20, 30]),
        },
    }
}

/// Combines sound and haptics into one record, or `None` when neither applies.
pub fn dispatch(kind: FeedbackKind, sound: &SoundSettings) -> Option<FeedbackEvent> {
    let volume = sound_volume(kind, sound);
    let haptic = haptic_pattern(kind, sound);
    if volume.is_none() && haptic.is_none() {
        return None;
    }
    Some(FeedbackEvent {
        kind,
        volume,
        haptic,
    })
}
