mod reorder;
mod task;

pub use reorder::{DragSession, ListItem, ReorderableList};
pub use task::{Task, TaskList};
