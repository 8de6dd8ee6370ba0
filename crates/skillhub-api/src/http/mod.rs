//! HTTP/REST API layer for Skillhub.
//!
//! Axum-based REST API exposing the skill catalog with a `{"data": ...}` /
//! `{"error": ...}` envelope.

pub mod error;
pub mod handlers;
pub mod response;
pub mod router;
