//! Repository layer over key-value storage.
//!
//! # Responsibility
//! - Define the task list persistence contract used by the manager.
//! - Keep the serialization format inside the persistence boundary.
//!
//! # Invariants
//! - Loads never fail outward; unreadable data degrades to an empty list.
//! - Saves rewrite the whole list under one key.

pub mod task_list_repo;
