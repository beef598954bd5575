//! In-memory task list and the reducer that drives it.
//!
//! Every state change goes through [`apply`], which never touches the list it
//! is given. [`TodoStore`] keeps the current list and mirrors it to its
//! storage after each change.

use crate::error::StoreError;
use crate::storage::{self, KeyValueStore};
use crate::task::Task;
use log::{debug, error, info};

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Add {
        title: String,
        description: String,
    },
    Toggle {
        id: String,
    },
    Update {
        id: String,
        title: String,
        description: String,
        completed: bool,
    },
    Delete {
        id: String,
    },
}

/// Computes the list that results from `action`.
///
/// Returns `Ok(None)` when the action targets an id that is not in the list.
///
/// # Errors
/// - [`StoreError::EmptyTitle`] when adding a task whose title is blank after
///   trimming.
pub fn apply(tasks: &[Task], action: Action) -> Result<Option<Vec<Task>>, StoreError> {
    match action {
        Action::Add { title, description } => {
            if title.trim().is_empty() {
                return Err(StoreError::EmptyTitle);
            }
            let mut next = tasks.to_vec();
            next.push(Task::new(title, description));
            Ok(Some(next))
        }
        Action::Toggle { id } => Ok(map_matching(tasks, &id, |task| {
            task.completed = !task.completed;
        })),
        Action::Update {
            id,
            title,
            description,
            completed,
        } => Ok(map_matching(tasks, &id, move |task| {
            task.title = title;
            task.description = description;
            task.completed = completed;
        })),
        Action::Delete { id } => {
            if !tasks.iter().any(|t| t.id == id) {
                return Ok(None);
            }
            Ok(Some(tasks.iter().filter(|t| t.id != id).cloned().collect()))
        }
    }
}

fn map_matching(tasks: &[Task], id: &str, edit: impl FnOnce(&mut Task)) -> Option<Vec<Task>> {
    let index = tasks.iter().position(|t| t.id == id)?;
    let mut next = tasks.to_vec();
    edit(&mut next[index]);
    Some(next)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Stats {
    pub total: usize,
    pub completed: usize,
    pub active: usize,
}

impl Stats {
    pub fn of(tasks: &[Task]) -> Self {
        let completed = tasks.iter().filter(|t| t.completed).count();
        Self {
            total: tasks.len(),
            completed,
            active: tasks.len() - completed,
        }
    }

    pub fn percent_complete(&self) -> u16 {
        if self.total == 0 {
            return 0;
        }
        (self.completed * 100 / self.total) as u16
    }
}

pub struct TodoStore<S: KeyValueStore> {
    tasks: Vec<Task>,
    dark_mode: bool,
    storage: S,
}

impl<S: KeyValueStore> TodoStore<S> {
    /// Loads the saved snapshot, falling back to an empty list.
    pub fn open(storage: S) -> Self {
        let tasks = storage::load_tasks(&storage);
        let dark_mode = storage::load_dark_mode(&storage);
        info!(
            "event=snapshot_loaded module=store count={} dark_mode={}",
            tasks.len(),
            dark_mode
        );
        Self {
            tasks,
            dark_mode,
            storage,
        }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn stats(&self) -> Stats {
        Stats::of(&self.tasks)
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn dark_mode(&self) -> bool {
        self.dark_mode
    }

    pub fn set_dark_mode(&mut self, enabled: bool) -> Result<(), StoreError> {
        self.dark_mode = enabled;
        storage::save_dark_mode(&mut self.storage, enabled).map_err(|err| {
            error!("event=persist module=store key=darkMode status=error error={err}");
            StoreError::from(err)
        })
    }

    /// Applies `action` and, when the list changed, writes the snapshot.
    ///
    /// Returns whether the list changed. On a storage failure the in-memory
    /// list keeps the change.
    pub fn dispatch(&mut self, action: Action) -> Result<bool, StoreError> {
        let name = action_name(&action);
        let Some(next) = apply(&self.tasks, action)? else {
            debug!("event={name} module=store status=noop");
            return Ok(false);
        };
        self.tasks = next;
        debug!("event={name} module=store status=ok count={}", self.tasks.len());
        self.persist()?;
        Ok(true)
    }

    pub fn add(
        &mut self,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<bool, StoreError> {
        self.dispatch(Action::Add {
            title: title.into(),
            description: description.into(),
        })
    }

    pub fn toggle(&mut self, id: &str) -> Result<bool, StoreError> {
        self.dispatch(Action::Toggle { id: id.to_string() })
    }

    pub fn update(
        &mut self,
        id: &str,
        title: impl Into<String>,
        description: impl Into<String>,
        completed: bool,
    ) -> Result<bool, StoreError> {
        self.dispatch(Action::Update {
            id: id.to_string(),
            title: title.into(),
            description: description.into(),
            completed,
        })
    }

    pub fn delete(&mut self, id: &str) -> Result<bool, StoreError> {
        self.dispatch(Action::Delete { id: id.to_string() })
    }

    fn persist(&mut self) -> Result<(), StoreError> {
        storage::save_tasks(&mut self.storage, &self.tasks).map_err(|err| {
            error!("event=persist module=store key=todos status=error error={err}");
            StoreError::from(err)
        })
    }
}

fn action_name(action: &Action) -> &'static str {
    match action {
        Action::Add { .. } => "task_add",
        Action::Toggle { .. } => "task_toggle",
        Action::Update { .. } => "task_update",
        Action::Delete { .. } => "task_delete",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Task> {
        vec![Task::new("Buy milk", ""), Task::new("Call Bob", "re: meeting")]
    }

    #[test]
    fn apply_leaves_input_untouched() {
        let tasks = sample();
        let before = tasks.clone();
        let next = apply(
            &tasks,
            Action::Toggle {
                id: tasks[0].id.clone(),
            },
        )
        .unwrap()
        .unwrap();
        assert_eq!(tasks, before);
        assert!(next[0].completed);
    }

    #[test]
    fn add_keeps_title_as_entered() {
        let next = apply(
            &[],
            Action::Add {
                title: "  padded ".to_string(),
                description: String::new(),
            },
        )
        .unwrap()
        .unwrap();
        assert_eq!(next[0].title, "  padded ");
    }

    #[test]
    fn blank_titles_are_rejected() {
        for title in ["", "   ", "\t\n"] {
            let result = apply(
                &sample(),
                Action::Add {
                    title: title.to_string(),
                    description: "ignored".to_string(),
                },
            );
            assert!(matches!(result, Err(StoreError::EmptyTitle)));
        }
    }

    #[test]
    fn unknown_ids_are_noops() {
        let tasks = sample();
        let id = "missing".to_string();
        assert!(apply(&tasks, Action::Toggle { id: id.clone() }).unwrap().is_none());
        assert!(apply(&tasks, Action::Delete { id: id.clone() }).unwrap().is_none());
        assert!(apply(
            &tasks,
            Action::Update {
                id,
                title: "x".to_string(),
                description: String::new(),
                completed: true,
            }
        )
        .unwrap()
        .is_none());
    }

    #[test]
    fn stats_count_completed_and_active() {
        let mut tasks = sample();
        tasks.push(Task::new("Water plants", ""));
        tasks[1].completed = true;
        let stats = Stats::of(&tasks);
        assert_eq!(stats.total, 3);
        assert_eq!(stats.completed, 1);
        assert_eq!(stats.active, 2);
        assert_eq!(stats.percent_complete(), 33);
        assert_eq!(Stats::default().percent_complete(), 0);
    }
}
