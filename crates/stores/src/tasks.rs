//! The task store.
//!
//! Tasks are the only records the user authors rather than fetches. The
//! whole list persists on every mutation; operations addressed at an
//! unknown id leave the list unchanged and report `false`.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use chrono::{DateTime, Utc};

use model::config::TASK_STORE_KEY;
use model::{SortDirection, Task, TaskPatch, TaskSortKey, sort_tasks};

use crate::error::Result;
use crate::persist::{StateStorage, load_snapshot, save_snapshot};

pub struct TaskStore {
    storage: Arc<dyn StateStorage>,
    tasks: Mutex<Vec<Task>>,
}

impl TaskStore {
    /// Restore the persisted task list (dates revived from their RFC 3339
    /// form), or start empty.
    pub fn new(storage: Arc<dyn StateStorage>) -> Self {
        let tasks = load_snapshot(storage.as_ref(), TASK_STORE_KEY).unwrap_or_default();
        Self {
            storage,
            tasks: Mutex::new(tasks),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Task>> {
        self.tasks.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn persist(&self, snapshot: &[Task]) -> Result<()> {
        save_snapshot(self.storage.as_ref(), TASK_STORE_KEY, &snapshot)
    }

    pub fn tasks(&self) -> Vec<Task> {
        self.lock().clone()
    }

    /// The task list sorted for display.
    pub fn sorted(&self, key: TaskSortKey, direction: SortDirection) -> Vec<Task> {
        let mut tasks = self.tasks();
        sort_tasks(&mut tasks, key, direction);
        tasks
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn get(&self, id: &str) -> Option<Task> {
        self.lock().iter().find(|task| task.id == id).cloned()
    }

    pub fn add_task(&self, task: Task) -> Result<()> {
        let snapshot = {
            let mut tasks = self.lock();
            tasks.push(task);
            tasks.clone()
        };
        self.persist(&snapshot)
    }

    /// Remove a task. Returns `false` (and changes nothing) for an unknown
    /// id.
    pub fn remove_task(&self, id: &str) -> Result<bool> {
        let (snapshot, removed) = {
            let mut tasks = self.lock();
            let before = tasks.len();
            tasks.retain(|task| task.id != id);
            (tasks.clone(), tasks.len() != before)
        };
        if removed {
            self.persist(&snapshot)?;
        }
        Ok(removed)
    }

    /// Patch a task's editable fields. Returns `false` (and changes
    /// nothing) for an unknown id.
    pub fn update_task(&self, id: &str, patch: TaskPatch) -> Result<bool> {
        let outcome = {
            let mut tasks = self.lock();
            match tasks.iter_mut().find(|task| task.id == id) {
                Some(task) => {
                    if let Some(name) = patch.name {
                        task.name = name;
                    }
                    if let Some(description) = patch.description {
                        // An empty description clears the field.
                        task.description =
                            (!description.trim().is_empty()).then_some(description);
                    }
                    if let Some(date) = patch.date {
                        task.date = date;
                    }
                    Some(tasks.clone())
                }
                None => None,
            }
        };
        match outcome {
            Some(snapshot) => {
                self.persist(&snapshot)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Set or clear the completion timestamp. Returns `false` for an
    /// unknown id.
    pub fn set_finished(&self, id: &str, when: Option<DateTime<Utc>>) -> Result<bool> {
        let outcome = {
            let mut tasks = self.lock();
            match tasks.iter_mut().find(|task| task.id == id) {
                Some(task) => {
                    task.date_finished = when;
                    Some(tasks.clone())
                }
                None => None,
            }
        };
        match outcome {
            Some(snapshot) => {
                self.persist(&snapshot)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
