//! Business logic and repository trait definitions for Skillhub.
//!
//! This crate defines the "ports" (repository traits) that the infrastructure
//! layer implements. It depends only on `skillhub-types` -- never on
//! `skillhub-infra` or any database/IO crate.

pub mod repository;
pub mod service;
