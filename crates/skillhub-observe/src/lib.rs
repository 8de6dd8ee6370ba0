//! Observability setup for Skillhub: structured logging with optional
//! OpenTelemetry span export.

pub mod tracing_setup;
