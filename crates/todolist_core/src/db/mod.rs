//! SQLite bootstrap for the `kv_entries` key-value table.
//!
//! Connections handed out here have the schema migrated, so they can be
//! wrapped in a `SqliteKvStore` directly. Failures surface as `StoreError`.

pub mod migrations;
mod open;

pub use open::{open_db, open_db_in_memory};
