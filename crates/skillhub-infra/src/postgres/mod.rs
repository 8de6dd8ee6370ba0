//! PostgreSQL storage layer.
//!
//! Production repository implementation. Levels live in a `JSONB` column and
//! tags in a native `TEXT[]` column.

pub mod pool;
pub mod skill;
