//! Envelope response format for successful API responses.
//!
//! Every success is wrapped as:
//! ```json
//! { "data": ... }
//! ```
//! Failures use `{ "error": "..." }` (see [`crate::http::error::AppError`]).

use serde::Serialize;

/// Envelope wrapping the response payload.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Create a success response with data.
    pub fn success(data: T) -> Self {
        Self { data }
    }
}
