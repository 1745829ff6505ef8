//! On-change hooks.
//!
//! Engines are plain state machines; they never persist anything
//! themselves. The host wraps an engine in [`Watched`], subscribes hooks
//! (typically "save this record"), and mutates through [`Watched::update`].
//! Hooks run only when the value actually changed, so no-op operations such
//! as hovering over the dragged item do not trigger a save.

use crate::storage::{save_record, Store};

pub type ChangeHook<T> = Box<dyn FnMut(&T)>;

pub struct Watched<T> {
    value: T,
    hooks: Vec<ChangeHook<T>>,
}

impl<T: Clone + PartialEq> Watched<T> {
    pub fn new(value: T) -> Self {
        Self {
            value,
            hooks: Vec::new(),
        }
    }

    pub fn subscribe(&mut self, hook: impl FnMut(&T) + 'static) {
        self.hooks.push(Box::new(hook));
    }

    pub fn get(&self) -> &T {
        &self.value
    }

    /// Run `f` against the value and notify subscribers if it changed.
    pub fn update<R>(&mut self, f: impl FnOnce(&mut T) -> R) -> R {
        let before = self.value.clone();
        let result = f(&mut self.value);
        if self.value != before {
            self.notify();
        }
        result
    }

    /// Notify subscribers unconditionally.
    pub fn notify(&mut self) {
        for hook in &mut self.hooks {
            hook(&self.value);
        }
    }
}

/// Hook that writes the projected record to `store` under `key`.
///
/// The record is only rewritten when the projection differs from the last
/// one written, so a timer hook that projects the settings does not save
/// on every tick. Save failures are logged; the in-memory state stays
/// authoritative.
pub fn persist_hook<T, R, S>(
    store: S,
    key: impl Into<String>,
    project: impl Fn(&T) -> R + 'static,
) -> impl FnMut(&T) + 'static
where
    R: serde::Serialize + PartialEq + 'static,
    S: std::ops::Deref + 'static,
    S::Target: Store + Sized,
{
    let key = key.into();
    let mut last: Option<R> = None;
    move |value: &T| {
        let record = project(value);
        if last.as_ref() == Some(&record) {
            return;
        }
        match save_record(&*store, &key, &record) {
            Ok(()) => last = Some(record),
            Err(e) => tracing::error!(%key, error = %e, "failed to persist record"),
        }
    }
}
