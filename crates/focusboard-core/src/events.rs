use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::timer::{Mode, TimerSettings, Tone};

/// Every observable timer change produces an Event.
/// The host prints them, renders their tones, and decides what to persist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    TimerStarted {
        mode: Mode,
        remaining_secs: u64,
        at: DateTime<Utc>,
    },
    TimerPaused {
        mode: Mode,
        remaining_secs: u64,
        at: DateTime<Utc>,
    },
    TimerReset {
        remaining_secs: u64,
        at: DateTime<Utc>,
    },
    /// A phase ran out and the timer flipped into the other mode.
    /// `tone` is present only while sound is enabled.
    AlertFired {
        from: Mode,
        to: Mode,
        tone: Option<Tone>,
        next_duration_secs: u64,
        at: DateTime<Utc>,
    },
    SettingsApplied {
        settings: TimerSettings,
        at: DateTime<Utc>,
    },
    StateSnapshot {
        mode: Mode,
        running: bool,
        remaining_secs: u64,
        total_secs: u64,
        progress: f64,
        sound_enabled: bool,
        settings: TimerSettings,
        at: DateTime<Utc>,
    },
}

impl Event {
    /// The tone the host should render for this event, if any.
    pub fn tone(&self) -> Option<&Tone> {
        match self {
            Event::AlertFired { tone, .. } => tone.as_ref(),
            _ => None,
        }
    }

    pub fn is_alert(&self) -> bool {
        matches!(self, Event::AlertFired { .. })
    }
}
