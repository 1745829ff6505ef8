//! Sticky notes. Pinned notes are listed first.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::list::{ListItem, ReorderableList};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub content: String,
    #[serde(rename = "isPinned", default)]
    pub is_pinned: bool,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteBoard {
    notes: ReorderableList<Note>,
}

impl NoteBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, content: &str) -> Option<String> {
        if content.trim().is_empty() {
            return None;
        }
        let id = Uuid::new_v4().to_string();
        let note = Note {
            content: content.to_string(),
            is_pinned: false,
        };
        self.notes.append(ListItem::new(id.clone(), note)).then_some(id)
    }

    pub fn toggle_pin(&mut self, id: &str) -> bool {
        self.notes.update(id, |note| note.is_pinned = !note.is_pinned)
    }

    pub fn remove(&mut self, id: &str) -> Option<ListItem<Note>> {
        self.notes.remove(id)
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Display order: pinned first, insertion order within each group.
    pub fn sorted(&self) -> Vec<&ListItem<Note>> {
        let mut notes: Vec<_> = self.notes.iter().collect();
        notes.sort_by_key(|note| !note.payload.is_pinned);
        notes
    }
}
