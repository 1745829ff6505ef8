//! Ordered list with pointer-driven, index-based reordering.
//!
//! A drag moves the lifted item one step every time the hovered index
//! changes, so every intermediate order is a valid order the host can
//! save. Geometry never reaches this module: the host maps pointer
//! positions to indices.
//!
//! ```text
//! begin_drag(0)  [A B C D]
//! hover(2)
//! resolve()      [B C A D]   source = 2
//! hover(3)
//! resolve()      [B C D A]   source = 3
//! end_drag()
//! ```

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::{debug, warn};

/// One entry of a [`ReorderableList`]. The payload is flattened into the
/// item's JSON next to `id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListItem<P> {
    pub id: String,
    #[serde(flatten)]
    pub payload: P,
}

impl<P> ListItem<P> {
    pub fn new(id: impl Into<String>, payload: P) -> Self {
        Self {
            id: id.into(),
            payload,
        }
    }
}

/// An in-progress drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DragSession {
    pub source_index: usize,
    pub hover_index: Option<usize>,
}

/// Serializes as the bare item array; the drag session is never persisted.
/// Deserializing goes through [`ReorderableList::from_items`], so a stored
/// array with repeated ids loads with the first occurrence only.
///
/// Equality compares the items only, so a change hook sees a drag as a
/// change only once an item actually moves.
#[derive(Debug, Clone)]
pub struct ReorderableList<P> {
    items: Vec<ListItem<P>>,
    drag: Option<DragSession>,
}

impl<P: Serialize> Serialize for ReorderableList<P> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.items.serialize(serializer)
    }
}

impl<'de, P: Deserialize<'de>> Deserialize<'de> for ReorderableList<P> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Vec::<ListItem<P>>::deserialize(deserializer).map(Self::from_items)
    }
}

impl<P: PartialEq> PartialEq for ReorderableList<P> {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl<P> Default for ReorderableList<P> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            drag: None,
        }
    }
}

impl<P> ReorderableList<P> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from stored items. Later duplicates of an id are dropped.
    pub fn from_items(items: Vec<ListItem<P>>) -> Self {
        let mut list = Self::new();
        for item in items {
            let id = item.id.clone();
            if !list.append(item) {
                warn!(%id, "duplicate list id dropped");
            }
        }
        list
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn items(&self) -> &[ListItem<P>] {
        &self.items
    }

    pub fn iter(&self) -> impl Iterator<Item = &ListItem<P>> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&ListItem<P>> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }

    pub fn drag_session(&self) -> Option<DragSession> {
        self.drag
    }

    pub fn ids(&self) -> Vec<&str> {
        self.items.iter().map(|item| item.id.as_str()).collect()
    }

    // ── Editing ──────────────────────────────────────────────────────

    /// Add at the end. Returns false (and changes nothing) if the id is taken.
    pub fn append(&mut self, item: ListItem<P>) -> bool {
        if self.position(&item.id).is_some() {
            return false;
        }
        self.items.push(item);
        true
    }

    /// Delete by id. Absent ids are a no-op.
    ///
    /// Removing the dragged item aborts the drag. Removing any other item
    /// keeps the drag on the same item and clears the hover target.
    pub fn remove(&mut self, id: &str) -> Option<ListItem<P>> {
        let index = self.position(id)?;
        let removed = self.items.remove(index);

        if let Some(session) = self.drag {
            if session.source_index == index {
                debug!(id, "dragged item removed, drag aborted");
                self.drag = None;
            } else {
                let source_index = if index < session.source_index {
                    session.source_index - 1
                } else {
                    session.source_index
                };
                self.drag = Some(DragSession {
                    source_index,
                    hover_index: None,
                });
            }
        }
        Some(removed)
    }

    /// Mutate one payload in place. Returns whether the id was found.
    pub fn update(&mut self, id: &str, f: impl FnOnce(&mut P)) -> bool {
        match self.items.iter_mut().find(|item| item.id == id) {
            Some(item) => {
                f(&mut item.payload);
                true
            }
            None => false,
        }
    }

    // ── Drag ─────────────────────────────────────────────────────────

    /// Lift the item at `index`. Out-of-range indices are ignored; an
    /// active drag is replaced.
    pub fn begin_drag(&mut self, index: usize) {
        if index >= self.items.len() {
            return;
        }
        self.drag = Some(DragSession {
            source_index: index,
            hover_index: None,
        });
    }

    /// Record the index under the pointer.
    pub fn hover(&mut self, index: usize) {
        if index >= self.items.len() {
            return;
        }
        if let Some(session) = self.drag.as_mut() {
            if session.source_index != index {
                session.hover_index = Some(index);
            }
        }
    }

    /// Move the lifted item to the hovered index. Returns whether the order changed.
    ///
    /// The item keeps being dragged from its new position, so a glide is a
    /// sequence of `hover` + `resolve` steps.
    pub fn resolve(&mut self) -> bool {
        let Some(session) = self.drag else {
            return false;
        };
        let Some(target) = session.hover_index else {
            return false;
        };
        if target == session.source_index
            || session.source_index >= self.items.len()
            || target >= self.items.len()
        {
            return false;
        }

        let item = self.items.remove(session.source_index);
        self.items.insert(target, item);
        debug!(from = session.source_index, to = target, "list item moved");
        self.drag = Some(DragSession {
            source_index: target,
            hover_index: None,
        });
        true
    }

    /// Drop the item. Moves made during the drag stay.
    pub fn end_drag(&mut self) {
        self.drag = None;
    }

    /// Single-step drag from `from` to `to`. Returns whether the order changed.
    pub fn move_item(&mut self, from: usize, to: usize) -> bool {
        self.begin_drag(from);
        self.hover(to);
        let moved = self.resolve();
        self.end_drag();
        moved
    }
}
