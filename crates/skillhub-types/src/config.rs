//! Service configuration types for Skillhub.
//!
//! `ServiceConfig` represents the optional `skillhub.toml` that tunes the
//! store connection. The connection URI itself is not part of this file; it
//! comes from the command line or the `POSTGRES_URI` environment variable.

use serde::{Deserialize, Serialize};

/// Tunables for the store connection. All fields have sensible defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Deadline for a single store round trip, in seconds.
    #[serde(default = "default_query_timeout_secs")]
    pub query_timeout_secs: u64,

    /// Upper bound on pooled store connections.
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

fn default_query_timeout_secs() -> u64 {
    5
}

fn default_max_connections() -> u32 {
    8
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            query_timeout_secs: default_query_timeout_secs(),
            max_connections: default_max_connections(),
        }
    }
}

impl ServiceConfig {
    pub fn query_timeout(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.query_timeout_secs)
    }
}
