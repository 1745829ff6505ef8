//! Focus timer engine.
//!
//! A tick-driven work/break state machine. It owns no clock and no thread:
//! the host calls `tick()` once per second, and the engine alone decides
//! whether that tick counts.
//!
//! ## State Transitions
//!
//! ```text
//! Work --(remaining hits 0 while running)--> Break
//! Break --(remaining hits 0 while running)--> Work
//! ```
//!
//! `running` is orthogonal to the mode. Every transition yields an
//! [`Event::AlertFired`] carrying the tone to render.
//!
//! ## Usage
//!
//! ```ignore
//! let mut engine = TimerEngine::new(TimerSettings::default());
//! engine.start();
//! // Once per second:
//! if let Some(event) = engine.tick() { host.handle(event) }
//! ```

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::alert::tone_for_transition;
use super::settings::TimerSettings;
use crate::error::ValidationError;
use crate::events::Event;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Work,
    Break,
}

impl Mode {
    pub fn opposite(self) -> Mode {
        match self {
            Mode::Work => Mode::Break,
            Mode::Break => Mode::Work,
        }
    }

    /// Label shown under the countdown.
    pub fn label(self) -> &'static str {
        match self {
            Mode::Work => "focus",
            Mode::Break => "break",
        }
    }
}

/// Serializable view of the engine for status output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimerSnapshot {
    pub mode: Mode,
    pub running: bool,
    pub remaining_secs: u64,
    pub total_secs: u64,
    pub progress: f64,
    pub sound_enabled: bool,
    pub settings: TimerSettings,
}

/// Core timer engine.
///
/// Not serializable: only [`TimerSettings`] are persisted, and every
/// engine is built through [`TimerEngine::new`].
#[derive(Debug, Clone, PartialEq)]
pub struct TimerEngine {
    settings: TimerSettings,
    mode: Mode,
    remaining_secs: u64,
    running: bool,
    sound_enabled: bool,
}

impl TimerEngine {
    /// Create an idle engine at the start of a work phase.
    ///
    /// Settings are normalized; zero durations are replaced by the defaults,
    /// since construction cannot fail.
    pub fn new(settings: TimerSettings) -> Self {
        let settings = match settings.validate() {
            Ok(()) => settings.normalized(),
            Err(_) => TimerSettings::default(),
        };
        Self {
            settings,
            mode: Mode::Work,
            remaining_secs: settings.work_duration_secs,
            running: false,
            sound_enabled: true,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn remaining_secs(&self) -> u64 {
        self.remaining_secs
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn settings(&self) -> &TimerSettings {
        &self.settings
    }

    pub fn sound_enabled(&self) -> bool {
        self.sound_enabled
    }

    pub fn duration_for(&self, mode: Mode) -> u64 {
        match mode {
            Mode::Work => self.settings.work_duration_secs,
            Mode::Break => self.settings.break_duration_secs,
        }
    }

    pub fn total_secs(&self) -> u64 {
        self.duration_for(self.mode)
    }

    /// 0.0 .. 1.0 progress within the current phase.
    pub fn progress_fraction(&self) -> f64 {
        let total = self.total_secs();
        if total == 0 {
            return 0.0;
        }
        let elapsed = total.saturating_sub(self.remaining_secs);
        (elapsed as f64 / total as f64).clamp(0.0, 1.0)
    }

    pub fn snapshot(&self) -> TimerSnapshot {
        TimerSnapshot {
            mode: self.mode,
            running: self.running,
            remaining_secs: self.remaining_secs,
            total_secs: self.total_secs(),
            progress: self.progress_fraction(),
            sound_enabled: self.sound_enabled,
            settings: self.settings,
        }
    }

    /// Build a full state snapshot event.
    pub fn snapshot_event(&self) -> Event {
        Event::StateSnapshot {
            mode: self.mode,
            running: self.running,
            remaining_secs: self.remaining_secs,
            total_secs: self.total_secs(),
            progress: self.progress_fraction(),
            sound_enabled: self.sound_enabled,
            settings: self.settings,
            at: Utc::now(),
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    pub fn start(&mut self) -> Option<Event> {
        if self.running {
            return None;
        }
        self.running = true;
        Some(Event::TimerStarted {
            mode: self.mode,
            remaining_secs: self.remaining_secs,
            at: Utc::now(),
        })
    }

    pub fn pause(&mut self) -> Option<Event> {
        if !self.running {
            return None;
        }
        self.running = false;
        Some(Event::TimerPaused {
            mode: self.mode,
            remaining_secs: self.remaining_secs,
            at: Utc::now(),
        })
    }

    /// Play/pause in one control.
    pub fn toggle(&mut self) -> Option<Event> {
        if self.running {
            self.pause()
        } else {
            self.start()
        }
    }

    pub fn reset(&mut self) -> Option<Event> {
        self.mode = Mode::Work;
        self.running = false;
        self.remaining_secs = self.settings.work_duration_secs;
        Some(Event::TimerReset {
            remaining_secs: self.remaining_secs,
            at: Utc::now(),
        })
    }

    /// Call once per period. Returns `Some(Event::AlertFired)` when a phase ends.
    pub fn tick(&mut self) -> Option<Event> {
        if !self.running {
            return None;
        }
        // A phase that is already at zero is owed its transition; otherwise
        // count down and transition on the tick that reaches zero.
        if self.remaining_secs > 0 {
            self.remaining_secs -= 1;
        }
        if self.remaining_secs == 0 {
            return Some(self.transition());
        }
        None
    }

    /// Replace the settings and reset. Prior settings are kept on error.
    pub fn apply_settings(&mut self, settings: TimerSettings) -> Result<Event, ValidationError> {
        settings.validate()?;
        self.settings = settings.normalized();
        self.reset();
        debug!(
            work_secs = self.settings.work_duration_secs,
            break_secs = self.settings.break_duration_secs,
            "timer settings applied"
        );
        Ok(Event::SettingsApplied {
            settings: self.settings,
            at: Utc::now(),
        })
    }

    pub fn set_sound_enabled(&mut self, enabled: bool) {
        self.sound_enabled = enabled;
    }

    // ── Internal ─────────────────────────────────────────────────────

    fn transition(&mut self) -> Event {
        let from = self.mode;
        let to = from.opposite();
        self.mode = to;
        self.remaining_secs = self.duration_for(to);
        debug!(?from, ?to, next_secs = self.remaining_secs, "timer phase finished");
        Event::AlertFired {
            from,
            to,
            tone: self.sound_enabled.then(|| tone_for_transition(from)),
            next_duration_secs: self.remaining_secs,
            at: Utc::now(),
        }
    }
}

impl Default for TimerEngine {
    fn default() -> Self {
        Self::new(TimerSettings::default())
    }
}
