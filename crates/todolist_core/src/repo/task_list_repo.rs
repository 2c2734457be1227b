//! Task list persistence adapter.
//!
//! # Responsibility
//! - Serialize the ordered task list as a JSON array under one storage key.
//! - Restore it on startup, treating absent or malformed data as empty.
//!
//! # Invariants
//! - No incremental writes: `save` replaces the full stored value.
//! - `load` never returns an error.

use crate::model::task::Task;
use crate::store::{KeyValueStore, StoreError};
use log::{debug, error, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type PersistenceResult<T> = Result<T, PersistenceError>;

/// Failure writing the task list back to storage.
#[derive(Debug)]
pub enum PersistenceError {
    Serialize(serde_json::Error),
    Store(StoreError),
}

impl Display for PersistenceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Serialize(err) => write!(f, "failed to serialize task list: {err}"),
            Self::Store(err) => write!(f, "failed to write task list: {err}"),
        }
    }
}

impl Error for PersistenceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Serialize(err) => Some(err),
            Self::Store(err) => Some(err),
        }
    }
}

impl From<serde_json::Error> for PersistenceError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialize(value)
    }
}

impl From<StoreError> for PersistenceError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// Persistence contract for the whole task list.
pub trait TaskListRepository {
    /// Returns the stored list, or an empty list when nothing usable is stored.
    fn load(&self, key: &str) -> Vec<Task>;
    /// Replaces the stored list under `key`.
    fn save(&mut self, key: &str, tasks: &[Task]) -> PersistenceResult<()>;
}

/// `TaskListRepository` over any `KeyValueStore`.
#[derive(Debug)]
pub struct KvTaskListRepository<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> KvTaskListRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_inner(self) -> S {
        self.store
    }
}

impl<S: KeyValueStore> TaskListRepository for KvTaskListRepository<S> {
    fn load(&self, key: &str) -> Vec<Task> {
        let raw = match self.store.get(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!("event=task_list_load module=repo status=empty reason=absent");
                return Vec::new();
            }
            Err(err) => {
                warn!(
                    "event=task_list_load module=repo status=empty reason=store_error error={err}"
                );
                return Vec::new();
            }
        };

        match decode_task_list(&raw) {
            Ok(tasks) => {
                debug!(
                    "event=task_list_load module=repo status=ok task_count={}",
                    tasks.len()
                );
                tasks
            }
            Err(err) => {
                warn!(
                    "event=task_list_load module=repo status=empty reason=malformed bytes={} {}",
                    raw.len(),
                    decode_error_fields(&err)
                );
                Vec::new()
            }
        }
    }

    fn save(&mut self, key: &str, tasks: &[Task]) -> PersistenceResult<()> {
        let encoded = encode_task_list(tasks)?;
        if let Err(err) = self.store.set(key, &encoded) {
            error!(
                "event=task_list_save module=repo status=error task_count={} bytes={} error={err}",
                tasks.len(),
                encoded.len()
            );
            return Err(err.into());
        }
        debug!(
            "event=task_list_save module=repo status=ok task_count={} bytes={}",
            tasks.len(),
            encoded.len()
        );
        Ok(())
    }
}

/// Encodes tasks into the persisted JSON array form.
pub fn encode_task_list(tasks: &[Task]) -> Result<String, serde_json::Error> {
    serde_json::to_string(tasks)
}

/// Decodes the persisted JSON array form.
pub fn decode_task_list(raw: &str) -> Result<Vec<Task>, serde_json::Error> {
    serde_json::from_str(raw)
}

/// Log fields for a decode failure. serde_json messages quote the offending
/// value, so only the category and position are kept.
fn decode_error_fields(err: &serde_json::Error) -> String {
    format!(
        "category={:?} line={} column={}",
        err.classify(),
        err.line(),
        err.column()
    )
}

#[cfg(test)]
mod tests {
    use super::{decode_error_fields, decode_task_list};

    #[test]
    fn decode_error_fields_omit_stored_text() {
        let raw = r#"[{"id": "11111111-2222-4333-8444-555555555555", "text": "Call the dentist", "completed": "Call the dentist"}]"#;
        let err = decode_task_list(raw).unwrap_err();
        assert!(err.to_string().contains("Call the dentist"));

        let fields = decode_error_fields(&err);
        assert!(!fields.contains("dentist"), "leaked: {fields}");
        assert!(fields.starts_with("category=Data line=1 column="));
    }
}
