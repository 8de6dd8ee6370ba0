//! Store selection from the connection URI.
//!
//! The catalog runs against PostgreSQL in production; a SQLite file works as
//! an isolated stand-in for local runs. `StoreSkillRepository` picks the
//! backend once at startup and delegates every call to it.

use std::path::PathBuf;

use skillhub_core::repository::skill::SkillRepository;
use skillhub_types::config::ServiceConfig;
use skillhub_types::error::RepositoryError;
use skillhub_types::skill::Skill;

use crate::postgres;
use crate::postgres::skill::PgSkillRepository;
use crate::sqlite::pool::DatabasePool;
use crate::sqlite::skill::SqliteSkillRepository;

/// Repository over whichever store the connection URI names.
pub enum StoreSkillRepository {
    Postgres(PgSkillRepository),
    Sqlite(SqliteSkillRepository),
}

impl StoreSkillRepository {
    /// Connect to the store named by `database_url`.
    ///
    /// `postgres://` and `postgresql://` URLs select PostgreSQL, `sqlite:` URLs
    /// select SQLite. Anything else is rejected.
    pub async fn connect(
        database_url: &str,
        config: &ServiceConfig,
    ) -> Result<Self, RepositoryError> {
        let acquire_timeout = config.query_timeout();

        if database_url.starts_with("postgres://") || database_url.starts_with("postgresql://") {
            let pool = postgres::pool::connect(database_url, config.max_connections, acquire_timeout)
                .await
                .map_err(|e| RepositoryError::Connection(e.to_string()))?;
            tracing::info!("connected to PostgreSQL skill store");
            Ok(Self::Postgres(PgSkillRepository::new(pool)))
        } else if database_url.starts_with("sqlite:") {
            let pool = DatabasePool::new(database_url, config.max_connections, acquire_timeout)
                .await
                .map_err(|e| RepositoryError::Connection(e.to_string()))?;
            tracing::info!("opened SQLite skill store");
            Ok(Self::Sqlite(SqliteSkillRepository::new(pool)))
        } else {
            Err(RepositoryError::Connection(format!(
                "unsupported database URL '{}': expected postgres:// or sqlite:",
                redact(database_url)
            )))
        }
    }

    /// Short backend name for logs and status output.
    pub fn backend(&self) -> &'static str {
        match self {
            Self::Postgres(_) => "postgres",
            Self::Sqlite(_) => "sqlite",
        }
    }
}

impl SkillRepository for StoreSkillRepository {
    async fn find_by_key(&self, key: &str) -> Result<Option<Skill>, RepositoryError> {
        match self {
            Self::Postgres(repo) => repo.find_by_key(key).await,
            Self::Sqlite(repo) => repo.find_by_key(key).await,
        }
    }

    async fn find_all(&self) -> Result<Vec<Skill>, RepositoryError> {
        match self {
            Self::Postgres(repo) => repo.find_all().await,
            Self::Sqlite(repo) => repo.find_all().await,
        }
    }

    async fn insert(&self, skill: &Skill) -> Result<Skill, RepositoryError> {
        match self {
            Self::Postgres(repo) => repo.insert(skill).await,
            Self::Sqlite(repo) => repo.insert(skill).await,
        }
    }
}

/// Strip credentials from a URL before it ends up in an error message.
fn redact(url: &str) -> String {
    match (url.find("://"), url.rfind('@')) {
        (Some(scheme_end), Some(at)) if at > scheme_end => {
            format!("{}://***{}", &url[..scheme_end], &url[at..])
        }
        _ => url.to_string(),
    }
}

/// Resolve the data directory from `SKILLHUB_DATA_DIR`, falling back to `~/.skillhub`.
pub fn resolve_data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("SKILLHUB_DATA_DIR") {
        return PathBuf::from(dir);
    }

    if let Some(home) = dirs::home_dir() {
        return home.join(".skillhub");
    }

    PathBuf::from(".skillhub")
}

/// Database URL used when no connection URI is configured: a SQLite file in
/// the data directory.
pub fn default_database_url() -> String {
    format!(
        "sqlite://{}?mode=rwc",
        resolve_data_dir().join("skillhub.db").display()
    )
}
