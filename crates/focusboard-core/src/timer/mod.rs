mod alert;
mod engine;
mod settings;

pub use alert::{
    tone_for_transition, AudioRenderer, RecordingRenderer, Silent, Tone, BREAK_END_TONE,
    WORK_END_TONE,
};
pub use engine::{Mode, TimerEngine, TimerSnapshot};
pub use settings::{CustomBounds, Preset, TimerSettings};
