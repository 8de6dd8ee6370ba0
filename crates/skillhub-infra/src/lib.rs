//! Infrastructure layer for Skillhub.
//!
//! Contains implementations of the repository traits defined in `skillhub-core`:
//! PostgreSQL storage (production), SQLite storage (local runs and tests), the
//! level/tag column codec shared by both, and the config file loader.

pub mod codec;
pub mod config;
mod error;
pub mod postgres;
pub mod sqlite;
pub mod store;
