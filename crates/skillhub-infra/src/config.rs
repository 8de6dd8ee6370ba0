//! Service configuration loader for Skillhub.
//!
//! Reads an optional `skillhub.toml` and deserializes it into
//! [`ServiceConfig`]. Falls back to sensible defaults when the file is
//! missing or malformed.

use std::path::Path;

use skillhub_types::config::ServiceConfig;

/// Smallest accepted per-call deadline, in seconds.
const MIN_QUERY_TIMEOUT_SECS: u64 = 1;

/// Load service configuration from `path`.
///
/// - If no path is given or the file does not exist, returns [`ServiceConfig::default()`].
/// - If the file exists but fails to parse, logs a warning and returns the default.
/// - Otherwise returns the parsed config with the query timeout floored at one second.
pub async fn load_service_config(path: Option<&Path>) -> ServiceConfig {
    let Some(config_path) = path else {
        return ServiceConfig::default();
    };

    let content = match tokio::fs::read_to_string(config_path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No config found at {}, using defaults", config_path.display());
            return ServiceConfig::default();
        }
        Err(err) => {
            tracing::warn!("Failed to read {}: {err}, using defaults", config_path.display());
            return ServiceConfig::default();
        }
    };

    match toml::from_str::<ServiceConfig>(&content) {
        Ok(mut config) => {
            config.query_timeout_secs = config.query_timeout_secs.max(MIN_QUERY_TIMEOUT_SECS);
            config
        }
        Err(err) => {
            tracing::warn!(
                "Failed to parse {}: {err}, using defaults",
                config_path.display()
            );
            ServiceConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn load_service_config_without_path_returns_default() {
        let config = load_service_config(None).await;
        assert_eq!(config.query_timeout_secs, 5);
    }

    #[tokio::test]
    async fn load_service_config_missing_file_returns_default() {
        let tmp = TempDir::new().unwrap();
        let config = load_service_config(Some(&tmp.path().join("skillhub.toml"))).await;
        assert_eq!(config.query_timeout_secs, 5);
        assert_eq!(config.max_connections, 8);
    }

    #[tokio::test]
    async fn load_service_config_valid_toml_returns_parsed() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("skillhub.toml");
        tokio::fs::write(&config_path, "query_timeout_secs = 12\nmax_connections = 3\n")
            .await
            .unwrap();

        let config = load_service_config(Some(&config_path)).await;
        assert_eq!(config.query_timeout_secs, 12);
        assert_eq!(config.max_connections, 3);
    }

    #[tokio::test]
    async fn load_service_config_invalid_toml_returns_default() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("skillhub.toml");
        tokio::fs::write(&config_path, "this is not { valid toml !!!")
            .await
            .unwrap();

        let config = load_service_config(Some(&config_path)).await;
        assert_eq!(config.query_timeout_secs, 5);
    }

    #[tokio::test]
    async fn load_service_config_floors_zero_timeout() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("skillhub.toml");
        tokio::fs::write(&config_path, "query_timeout_secs = 0\n")
            .await
            .unwrap();

        let config = load_service_config(Some(&config_path)).await;
        assert_eq!(config.query_timeout_secs, 1);
    }
}
