//! Domain model for the to-do list.
//!
//! # Responsibility
//! - Define the task record persisted by the store adapter.
//! - Define the fixed filter vocabulary used to derive list views.
//!
//! # Invariants
//! - Every task is identified by a stable `TaskId`; equality is by id only.
//! - Filters never mutate tasks; they only select them.

pub mod filter;
pub mod task;
