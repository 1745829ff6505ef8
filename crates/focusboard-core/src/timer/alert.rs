//! Alert tones emitted at work/break transitions.
//!
//! The engine only decides *which* tone fires; producing sound is up to the
//! host's [`AudioRenderer`].

use std::sync::Mutex;

use serde::{Deserialize, Serialize};

use super::engine::Mode;

/// A short sine tone.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tone {
    pub frequency_hz: f64,
    pub duration_secs: f64,
    /// 0.0 ..= 1.0
    pub volume: f64,
}

/// Lower tone: work finished, break begins.
pub const WORK_END_TONE: Tone = Tone {
    frequency_hz: 330.0,
    duration_secs: 0.5,
    volume: 0.6,
};

/// Higher tone: break finished, back to work.
pub const BREAK_END_TONE: Tone = Tone {
    frequency_hz: 660.0,
    duration_secs: 0.3,
    volume: 0.6,
};

/// Tone for leaving `from`.
pub fn tone_for_transition(from: Mode) -> Tone {
    match from {
        Mode::Work => WORK_END_TONE,
        Mode::Break => BREAK_END_TONE,
    }
}

/// Host-side sound output. Fire-and-forget.
pub trait AudioRenderer {
    fn play(&self, tone: &Tone);
}

/// Renderer that drops every tone.
#[derive(Debug, Default, Clone, Copy)]
pub struct Silent;

impl AudioRenderer for Silent {
    fn play(&self, _tone: &Tone) {}
}

/// Renderer that remembers what it was asked to play.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    played: Mutex<Vec<Tone>>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn played(&self) -> Vec<Tone> {
        self.played
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }
}

impl AudioRenderer for RecordingRenderer {
    fn play(&self, tone: &Tone) {
        if let Ok(mut guard) = self.played.lock() {
            guard.push(*tone);
        }
    }
}
