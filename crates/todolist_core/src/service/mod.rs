//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate task list mutations over the repository contract.
//! - Keep UI layers decoupled from storage details.

pub mod notification;
pub mod task_list_service;
