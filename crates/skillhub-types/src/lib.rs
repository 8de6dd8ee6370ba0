//! Shared domain types for Skillhub.
//!
//! This crate contains the core domain types used across the Skillhub catalog:
//! Skill, Level, the service configuration, and the error taxonomy.
//!
//! Zero infrastructure dependencies -- only serde and thiserror.

pub mod config;
pub mod error;
pub mod skill;
