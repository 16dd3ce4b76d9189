use crate::domain::task::{Priority, Task, TaskId};
use crate::store::{Command, StoreEvent, TaskStore};
use crate::usecase::counts::{TaskCounts, counts};
use crate::usecase::filter::{Filter, visible_tasks};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Adding,
    Editing,
}

pub struct App {
    store: TaskStore,
    pub visible: Vec<Task>,
    pub counts: TaskCounts,
    pub filter: Filter,
    pub selected: usize,
    pub mode: InputMode,
    pub input: String,
    pub input_priority: Priority,
    pub default_priority: Priority,
    editing_id: Option<TaskId>,
    pub status: Option<String>,
}

impl App {
    pub fn new(store: TaskStore) -> Self {
        let mut app = Self {
            store,
            visible: Vec::new(),
            counts: TaskCounts::default(),
            filter: Filter::All,
            selected: 0,
            mode: InputMode::Normal,
            input: String::new(),
            input_priority: Priority::Medium,
            default_priority: Priority::Medium,
            editing_id: None,
            status: None,
        };
        app.refresh();
        app
    }

    /// Recomputes the visible list and badges from the store.
    pub fn refresh(&mut self) {
        self.visible = visible_tasks(self.store.tasks(), self.filter);
        self.counts = counts(self.store.tasks());
        if self.selected >= self.visible.len() && !self.visible.is_empty() {
            self.selected = self.visible.len() - 1;
        }
    }

    pub fn reload_from_storage(&mut self) {
        self.store.reload();
        self.refresh();
        self.set_status("Reloaded");
    }

    pub fn select_next(&mut self) {
        if !self.visible.is_empty() {
            self.selected = (self.selected + 1).min(self.visible.len() - 1);
        }
    }

    pub fn select_previous(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    fn selected_id(&self) -> Option<TaskId> {
        self.visible.get(self.selected).map(|t| t.id)
    }

    pub fn set_filter(&mut self, filter: Filter) {
        self.filter = filter;
        self.selected = 0;
        self.refresh();
    }

    pub fn cycle_filter(&mut self) {
        self.set_filter(self.filter.next());
    }

    pub fn start_adding(&mut self) {
        self.mode = InputMode::Adding;
        self.input.clear();
        self.input_priority = self.default_priority;
        self.set_status("Type new task; Tab cycles priority, Enter adds");
    }

    pub fn start_editing(&mut self) {
        let Some(task) = self.visible.get(self.selected) else {
            return;
        };
        self.editing_id = Some(task.id);
        self.input = task.text.clone();
        self.mode = InputMode::Editing;
        self.set_status("Edit task; Enter saves, Esc cancels");
    }

    pub fn cancel_input(&mut self) {
        self.mode = InputMode::Normal;
        self.input.clear();
        self.editing_id = None;
        self.set_status("Canceled");
    }

    pub fn cycle_input_priority(&mut self) {
        self.input_priority = self.input_priority.next();
    }

    pub fn submit_input(&mut self) {
        match self.mode {
            InputMode::Adding => {
                if self.input.trim().is_empty() {
                    self.set_status("Cannot add an empty task");
                    return;
                }
                let event = self.store.dispatch(Command::AddTask {
                    text: self.input.clone(),
                    priority: self.input_priority,
                });
                self.input.clear();
                self.mode = InputMode::Normal;
                self.refresh();
                if let Some(StoreEvent::TaskAdded(task)) = &event {
                    self.selected = self
                        .visible
                        .iter()
                        .position(|t| t.id == task.id)
                        .unwrap_or(0);
                }
                self.notify(event);
            }
            InputMode::Editing => {
                let event = self.editing_id.and_then(|id| {
                    self.store.dispatch(Command::EditTask {
                        id,
                        text: self.input.clone(),
                    })
                });
                // A discarded edit keeps the stored text; just leave the mode.
                self.input.clear();
                self.editing_id = None;
                self.mode = InputMode::Normal;
                self.refresh();
                self.notify(event);
            }
            InputMode::Normal => {}
        }
    }

    pub fn toggle_selected(&mut self) {
        if let Some(id) = self.selected_id() {
            self.store.dispatch(Command::ToggleComplete { id });
            self.refresh();
        }
    }

    pub fn delete_selected(&mut self) {
        if let Some(id) = self.selected_id() {
            let event = self.store.dispatch(Command::DeleteTask { id });
            if self.selected > 0 {
                self.selected -= 1;
            }
            self.refresh();
            self.notify(event);
        }
    }

    pub fn clear_completed(&mut self) {
        let event = self.store.dispatch(Command::ClearCompleted);
        self.refresh();
        match event {
            Some(event) => self.notify(Some(event)),
            None => self.set_status("No completed tasks"),
        }
    }

    pub fn set_status(&mut self, msg: &str) {
        self.status = Some(msg.to_string());
    }

    fn notify(&mut self, event: Option<StoreEvent>) {
        self.status = event.as_ref().map(notice);
    }
}

fn notice(event: &StoreEvent) -> String {
    match event {
        StoreEvent::TaskAdded(_) => "Task added".to_string(),
        StoreEvent::TaskDeleted(_) => "Task deleted".to_string(),
        StoreEvent::TaskUpdated(_) => "Task updated".to_string(),
        StoreEvent::TasksCleared(n) => {
            let noun = if *n == 1 { "task" } else { "tasks" };
            format!("Cleared {n} completed {noun}")
        }
    }
}
