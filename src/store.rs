use log::{debug, warn};

use crate::domain::task::{Priority, Task, TaskId};
use crate::repo::Storage;

/// Snapshot key the whole collection is persisted under.
const TASKS_KEY: &str = "tasks";

/// User actions as messages, for callers that prefer dispatch over direct
/// method calls.
#[derive(Debug, Clone)]
pub enum Command {
    AddTask { text: String, priority: Priority },
    DeleteTask { id: TaskId },
    ToggleComplete { id: TaskId },
    EditTask { id: TaskId, text: String },
    ClearCompleted,
}

/// Advisory notifications emitted by mutations; the UI shows them as
/// transient notices. Completion toggles are deliberately silent.
#[derive(Debug, Clone, PartialEq)]
pub enum StoreEvent {
    TaskAdded(Task),
    TaskDeleted(TaskId),
    TaskUpdated(TaskId),
    TasksCleared(usize),
}

/// Single source of truth for the task collection, newest first. Every
/// successful mutation is followed by a full snapshot write.
pub struct TaskStore {
    tasks: Vec<Task>,
    storage: Box<dyn Storage>,
}

impl TaskStore {
    /// Builds a store over `storage`, reading the last snapshot. A missing
    /// or malformed snapshot yields an empty collection, never an error.
    pub fn load(storage: Box<dyn Storage>) -> Self {
        let tasks = read_snapshot(storage.as_ref());
        Self { tasks, storage }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Re-reads the last snapshot, discarding in-memory state. Useful when
    /// another process shares the same database.
    pub fn reload(&mut self) {
        self.tasks = read_snapshot(self.storage.as_ref());
    }

    /// Prepends a new task. Whitespace-only text is rejected without
    /// mutating; the stored text is trimmed.
    pub fn add(&mut self, text: &str, priority: Priority) -> Option<Task> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return None;
        }
        let task = Task::new(trimmed, priority);
        self.tasks.insert(0, task.clone());
        self.persist();
        debug!("added task {}", task.id);
        Some(task)
    }

    pub fn remove(&mut self, id: TaskId) -> bool {
        let Some(pos) = self.tasks.iter().position(|t| t.id == id) else {
            return false;
        };
        self.tasks.remove(pos);
        self.persist();
        debug!("deleted task {id}");
        true
    }

    pub fn toggle_complete(&mut self, id: TaskId) -> bool {
        let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) else {
            return false;
        };
        task.completed = !task.completed;
        self.persist();
        true
    }

    /// Replaces a task's text. Edits that are whitespace-only or identical
    /// to the current text are discarded and the current text stays.
    pub fn edit(&mut self, id: TaskId, new_text: &str) -> bool {
        let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) else {
            return false;
        };
        if new_text.trim().is_empty() || new_text == task.text {
            return false;
        }
        task.text = new_text.to_string();
        self.persist();
        debug!("updated task {id}");
        true
    }

    /// Removes every completed task and returns how many went away.
    /// Removing nothing skips the snapshot write.
    pub fn clear_completed(&mut self) -> usize {
        let before = self.tasks.len();
        self.tasks.retain(|t| !t.completed);
        let removed = before - self.tasks.len();
        if removed > 0 {
            self.persist();
            debug!("cleared {removed} completed tasks");
        }
        removed
    }

    pub fn dispatch(&mut self, command: Command) -> Option<StoreEvent> {
        match command {
            Command::AddTask { text, priority } => {
                self.add(&text, priority).map(StoreEvent::TaskAdded)
            }
            Command::DeleteTask { id } => self.remove(id).then_some(StoreEvent::TaskDeleted(id)),
            Command::ToggleComplete { id } => {
                self.toggle_complete(id);
                None
            }
            Command::EditTask { id, text } => {
                self.edit(id, &text).then_some(StoreEvent::TaskUpdated(id))
            }
            Command::ClearCompleted => {
                let removed = self.clear_completed();
                (removed > 0).then_some(StoreEvent::TasksCleared(removed))
            }
        }
    }

    fn persist(&mut self) {
        let snapshot = match serde_json::to_string(&self.tasks) {
            Ok(snapshot) => snapshot,
            Err(e) => {
                warn!("failed to serialize snapshot: {e}");
                return;
            }
        };
        if let Err(e) = self.storage.set(TASKS_KEY, &snapshot) {
            // In-memory state stays authoritative; the next mutation
            // writes the full snapshot again.
            warn!("failed to persist snapshot: {e}");
        }
    }
}

fn read_snapshot(storage: &dyn Storage) -> Vec<Task> {
    let Some(raw) = storage.get(TASKS_KEY) else {
        return Vec::new();
    };
    match serde_json::from_str(&raw) {
        Ok(tasks) => tasks,
        Err(e) => {
            warn!("discarding malformed snapshot: {e}");
            Vec::new()
        }
    }
}
