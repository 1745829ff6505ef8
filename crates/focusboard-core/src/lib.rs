//! # Focusboard Core Library
//!
//! Core logic for the Focusboard productivity dashboard: a focus timer,
//! a drag-reorderable task list, a daily journal and sticky notes, each
//! persisting its JSON records to a local key-value store. The
//! `focusboard` CLI is a thin host over this crate.
//!
//! ## Architecture
//!
//! - **Timer Engine**: a tick-driven work/break state machine; the host
//!   calls `tick()` once per second
//! - **Reorderable List**: index-based, incremental drag reordering
//! - **Storage**: SQLite key-value records and TOML configuration
//! - **Host glue**: change hooks that persist records, and a scoped ticker
//!
//! ## Key Components
//!
//! - [`TimerEngine`]: Core timer state machine
//! - [`ReorderableList`]: Ordered list with drag sessions
//! - [`Database`]: Key-value record persistence
//! - [`Config`]: Application configuration management

pub mod clock;
pub mod error;
pub mod events;
pub mod host;
pub mod journal;
pub mod list;
pub mod notes;
pub mod storage;
pub mod ticker;
pub mod timer;

pub use error::{ConfigError, CoreError, DatabaseError, ValidationError};
pub use events::Event;
pub use host::Watched;
pub use journal::{DayAnswers, Journal, JournalEntry};
pub use list::{DragSession, ListItem, ReorderableList, Task, TaskList};
pub use notes::{Note, NoteBoard};
pub use storage::{Config, Database, MemoryStore, Store};
pub use ticker::Ticker;
pub use timer::{AudioRenderer, Mode, Preset, TimerEngine, TimerSettings, Tone};
