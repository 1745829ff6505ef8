use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::reorder::{ListItem, ReorderableList};

/// Body of a task entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub text: String,
    #[serde(default)]
    pub completed: bool,
}

/// The focus task list: a reorderable list of [`Task`]s.
///
/// Stored as `[{"id": "...", "text": "...", "completed": false}, ...]`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskList {
    list: ReorderableList<Task>,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new open task. Blank text is rejected.
    pub fn add(&mut self, text: &str) -> Option<String> {
        if text.trim().is_empty() {
            return None;
        }
        let id = Uuid::new_v4().to_string();
        let item = ListItem::new(
            id.clone(),
            Task {
                text: text.to_string(),
                completed: false,
            },
        );
        self.list.append(item).then_some(id)
    }

    /// Flip `completed`. Returns whether the task exists.
    pub fn toggle(&mut self, id: &str) -> bool {
        self.list.update(id, |task| task.completed = !task.completed)
    }

    pub fn remove(&mut self, id: &str) -> Option<ListItem<Task>> {
        self.list.remove(id)
    }

    /// Completed tasks in list order.
    pub fn completed(&self) -> Vec<&ListItem<Task>> {
        self.list.iter().filter(|t| t.payload.completed).collect()
    }

    pub fn pending_count(&self) -> usize {
        self.list.iter().filter(|t| !t.payload.completed).count()
    }

    pub fn list(&self) -> &ReorderableList<Task> {
        &self.list
    }

    /// Drag access for the host's pointer handling.
    pub fn list_mut(&mut self) -> &mut ReorderableList<Task> {
        &mut self.list
    }
}
