//! Core domain logic for the to-do list.
//! This crate is the single source of truth for task list invariants.

pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod store;

pub use config::{ConfigError, ConfigResult, TaskListConfig, DEFAULT_STORAGE_KEY};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::filter::{TaskFilter, UnknownFilterError};
pub use model::task::{normalize_text, Task, TaskId};
pub use repo::task_list_repo::{
    KvTaskListRepository, PersistenceError, PersistenceResult, TaskListRepository,
};
pub use service::notification::{Notification, NotificationKind, NotificationSink};
pub use service::task_list_service::{
    DuplicateTaskError, TaskListError, TaskListManager, TaskListResult,
};
pub use store::{KeyValueStore, MemoryKvStore, SqliteKvStore, StoreError, StoreResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
