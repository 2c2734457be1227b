//! Task list manager.
//!
//! # Responsibility
//! - Own the ordered task list, the active filter and the editing cursor.
//! - Apply mutations, persist the full list after each one, and report every
//!   outcome as a `Notification`.
//!
//! # Invariants
//! - `add` never creates two tasks whose trimmed, lowercased text is equal.
//!   `update` does not re-check this.
//! - A rejected `add` neither mutates nor persists.
//! - A failed save is reported but never rolls back the in-memory list.
//! - Filtering and editing state are never persisted.

use crate::config::{ConfigResult, TaskListConfig};
use crate::model::filter::TaskFilter;
use crate::model::task::{Task, TaskId};
use crate::repo::task_list_repo::{PersistenceError, TaskListRepository};
use crate::service::notification::{Notification, NotificationSink};
use log::{debug, error, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type TaskListResult<T> = Result<T, TaskListError>;

/// `add` was rejected because an equivalent task already exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateTaskError {
    /// Text as submitted by the caller.
    pub text: String,
}

impl Display for DuplicateTaskError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "task already exists: `{}`", self.text.trim())
    }
}

impl Error for DuplicateTaskError {}

/// Error returned by manager operations.
#[derive(Debug)]
pub enum TaskListError {
    /// Rejected; state untouched.
    Duplicate(DuplicateTaskError),
    /// Applied in memory, but the save failed. `task_id` names the task
    /// appended by a failed `add`.
    Persistence {
        task_id: Option<TaskId>,
        source: PersistenceError,
    },
}

impl TaskListError {
    /// Id of the task that stays in memory after an unsaved `add`.
    pub fn task_id(&self) -> Option<TaskId> {
        match self {
            Self::Persistence { task_id, .. } => *task_id,
            Self::Duplicate(_) => None,
        }
    }
}

impl Display for TaskListError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Duplicate(err) => write!(f, "{err}"),
            Self::Persistence { source, .. } => write!(f, "{source}"),
        }
    }
}

impl Error for TaskListError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Duplicate(err) => Some(err),
            Self::Persistence { source, .. } => Some(source),
        }
    }
}

impl From<DuplicateTaskError> for TaskListError {
    fn from(value: DuplicateTaskError) -> Self {
        Self::Duplicate(value)
    }
}

impl From<PersistenceError> for TaskListError {
    fn from(value: PersistenceError) -> Self {
        Self::Persistence {
            task_id: None,
            source: value,
        }
    }
}

/// Stateful manager over one persisted task list.
pub struct TaskListManager<R: TaskListRepository> {
    repo: R,
    storage_key: String,
    tasks: Vec<Task>,
    filter: TaskFilter,
    all_completed: bool,
    editing: Option<TaskId>,
    sinks: Vec<Box<dyn NotificationSink>>,
    last_notification: Option<Notification>,
}

impl<R: TaskListRepository> TaskListManager<R> {
    /// Validates `config` and loads the stored list through `repo`.
    pub fn new(repo: R, config: &TaskListConfig) -> ConfigResult<Self> {
        config.validate()?;
        let tasks = repo.load(&config.storage_key);
        info!(
            "event=task_list_open module=service status=ok task_count={}",
            tasks.len()
        );
        Ok(Self {
            repo,
            storage_key: config.storage_key.clone(),
            tasks,
            filter: TaskFilter::default(),
            all_completed: false,
            editing: None,
            sinks: Vec::new(),
            last_notification: None,
        })
    }

    /// Registers an observer for every subsequent notification.
    pub fn subscribe(&mut self, sink: impl NotificationSink + 'static) {
        self.sinks.push(Box::new(sink));
    }

    /// Appends a new open task unless an equivalent one exists.
    ///
    /// # Errors
    /// - `TaskListError::Duplicate` with nothing changed or persisted.
    /// - `TaskListError::Persistence` with the task already appended; its id
    ///   is in `task_id`.
    pub fn add(&mut self, text: impl Into<String>) -> TaskListResult<TaskId> {
        let text = text.into();
        if self.tasks.iter().any(|task| task.has_same_text(&text)) {
            warn!(
                "event=task_add module=service status=rejected reason=duplicate task_count={}",
                self.tasks.len()
            );
            self.emit(Notification::warning(
                "Task already exists",
                "Duplicate tasks are not allowed",
            ));
            return Err(DuplicateTaskError { text }.into());
        }

        let task = Task::new(text);
        let id = task.id;
        self.tasks.push(task);
        debug!("event=task_add module=service status=applied task_id={id}");
        match self.persist(
            Notification::success("Task Added successfully", "Added successfully"),
            "Error adding task",
        ) {
            Ok(()) => Ok(id),
            Err(TaskListError::Persistence { source, .. }) => Err(TaskListError::Persistence {
                task_id: Some(id),
                source,
            }),
            Err(err) => Err(err),
        }
    }

    /// Removes the task with `id`.
    ///
    /// An unknown id changes nothing but is still saved and reported as a
    /// successful delete.
    pub fn delete(&mut self, id: TaskId) -> TaskListResult<()> {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.id != id);
        if self.editing == Some(id) {
            self.editing = None;
        }
        debug!(
            "event=task_delete module=service status=applied task_id={id} removed={}",
            before - self.tasks.len()
        );
        self.persist(
            Notification::success("Task deleted", "Task deleted successfully"),
            "Error deleting task",
        )
    }

    /// Empties the list.
    pub fn delete_all(&mut self) -> TaskListResult<()> {
        self.tasks.clear();
        self.editing = None;
        debug!("event=task_delete_all module=service status=applied");
        self.persist(
            Notification::success("All tasks deleted", "All tasks have been deleted"),
            "Error deleting tasks",
        )
    }

    /// Flips completion of the task with `id`; other tasks are untouched.
    pub fn toggle(&mut self, id: TaskId) -> TaskListResult<()> {
        if let Some(task) = self.find_mut(id) {
            task.toggle();
        }
        debug!("event=task_toggle module=service status=applied task_id={id}");
        self.persist(
            Notification::success("Task updated", "Task completion status changed"),
            "Error toggling task",
        )
    }

    /// Flips completion of every task independently.
    pub fn toggle_all(&mut self) -> TaskListResult<()> {
        self.tasks.iter_mut().for_each(Task::toggle);
        debug!(
            "event=task_toggle_all module=service status=applied task_count={}",
            self.tasks.len()
        );
        self.persist(
            Notification::success(
                "All tasks updated",
                "All task completion statuses have been toggled",
            ),
            "Error toggling tasks",
        )
    }

    /// Drives every task to one shared completion value, alternating between
    /// completed and not completed on successive calls.
    ///
    /// The alternation is tracked by a manager-level flag that starts `false`
    /// and ignores the tasks' individual states.
    pub fn complete_all(&mut self) -> TaskListResult<()> {
        let target = !self.all_completed;
        for task in &mut self.tasks {
            task.completed = target;
        }
        self.all_completed = target;
        debug!("event=task_complete_all module=service status=applied completed={target}");
        let marked_as = if target { "completed" } else { "not completed" };
        self.persist(
            Notification::success(
                "All tasks completed",
                format!("All tasks have been marked as {marked_as}"),
            ),
            "Error completing all tasks",
        )
    }

    /// Replaces the text of the task with `id`. Duplicates are not checked.
    pub fn update(&mut self, id: TaskId, text: impl Into<String>) -> TaskListResult<()> {
        let text = text.into();
        let description = format!("Task updated to: {text}");
        if let Some(task) = self.find_mut(id) {
            task.text = text;
        }
        debug!("event=task_update module=service status=applied task_id={id}");
        self.persist(
            Notification::success("Task updated", description),
            "Error updating task",
        )
    }

    /// Selects the task with `id` for editing, replacing any previous
    /// selection. Returns `false` and leaves the cursor as-is for unknown ids.
    pub fn begin_edit(&mut self, id: TaskId) -> bool {
        if self.get(id).is_none() {
            return false;
        }
        self.editing = Some(id);
        true
    }

    /// Id of the task currently being edited.
    pub fn editing(&self) -> Option<TaskId> {
        self.editing
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    /// Applies `text` to the task being edited and clears the cursor.
    ///
    /// Does nothing when no task is being edited.
    pub fn finish_edit(&mut self, text: impl Into<String>) -> TaskListResult<()> {
        match self.editing.take() {
            Some(id) => self.update(id, text),
            None => Ok(()),
        }
    }

    /// Changes which tasks `filtered_view` returns. Not persisted.
    pub fn set_filter(&mut self, filter: TaskFilter) {
        self.filter = filter;
    }

    pub fn filter(&self) -> TaskFilter {
        self.filter
    }

    /// Tasks matching the active filter, in list order.
    pub fn filtered_view(&self) -> Vec<&Task> {
        self.tasks
            .iter()
            .filter(|task| self.filter.matches(task))
            .collect()
    }

    /// Filter names for rendering controls; empty while the list is empty.
    pub fn filter_names(&self) -> Vec<&'static str> {
        if self.tasks.is_empty() {
            return Vec::new();
        }
        TaskFilter::ALL.iter().map(|filter| filter.name()).collect()
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Value `complete_all` last drove every task to.
    pub fn all_completed(&self) -> bool {
        self.all_completed
    }

    pub fn storage_key(&self) -> &str {
        &self.storage_key
    }

    pub fn last_notification(&self) -> Option<&Notification> {
        self.last_notification.as_ref()
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    fn find_mut(&mut self, id: TaskId) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|task| task.id == id)
    }

    fn persist(&mut self, on_success: Notification, error_title: &str) -> TaskListResult<()> {
        match self.repo.save(&self.storage_key, &self.tasks) {
            Ok(()) => {
                self.emit(on_success);
                Ok(())
            }
            Err(err) => {
                error!(
                    "event=task_list_persist module=service status=error task_count={} error={err}",
                    self.tasks.len()
                );
                self.emit(Notification::error(error_title, err.to_string()));
                Err(err.into())
            }
        }
    }

    fn emit(&mut self, notification: Notification) {
        for sink in &mut self.sinks {
            sink.notify(&notification);
        }
        self.last_notification = Some(notification);
    }
}

#[cfg(test)]
mod tests {
    use super::TaskListManager;
    use crate::config::TaskListConfig;
    use crate::model::task::Task;
    use crate::repo::task_list_repo::{PersistenceResult, TaskListRepository};

    #[derive(Default)]
    struct CountingRepo {
        saves: usize,
    }

    impl TaskListRepository for CountingRepo {
        fn load(&self, _key: &str) -> Vec<Task> {
            Vec::new()
        }

        fn save(&mut self, _key: &str, _tasks: &[Task]) -> PersistenceResult<()> {
            self.saves += 1;
            Ok(())
        }
    }

    #[test]
    fn duplicate_add_does_not_save() {
        let mut manager =
            TaskListManager::new(CountingRepo::default(), &TaskListConfig::default()).unwrap();
        manager.add("Task").unwrap();
        manager.add("task ").unwrap_err();
        assert_eq!(manager.repository().saves, 1);
    }

    #[test]
    fn every_other_mutation_saves_once() {
        let mut manager =
            TaskListManager::new(CountingRepo::default(), &TaskListConfig::default()).unwrap();
        let id = manager.add("Task").unwrap();
        manager.toggle(id).unwrap();
        manager.toggle_all().unwrap();
        manager.complete_all().unwrap();
        manager.update(id, "Renamed").unwrap();
        manager.delete(id).unwrap();
        manager.delete_all().unwrap();
        assert_eq!(manager.repository().saves, 7);
    }

    #[test]
    fn filter_and_cursor_changes_do_not_save() {
        let mut manager =
            TaskListManager::new(CountingRepo::default(), &TaskListConfig::default()).unwrap();
        let id = manager.add("Task").unwrap();
        manager.set_filter(crate::TaskFilter::Completed);
        assert!(manager.begin_edit(id));
        manager.cancel_edit();
        manager.finish_edit("ignored").unwrap();
        assert_eq!(manager.repository().saves, 1);
        assert_eq!(manager.tasks()[0].text, "Task");
    }
}
