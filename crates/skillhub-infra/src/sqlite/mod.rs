//! SQLite storage layer.
//!
//! Repository implementation backed by SQLite with WAL mode and split
//! read/write connection pools. Used for local runs and as an isolated
//! store in tests.

pub mod pool;
pub mod skill;
