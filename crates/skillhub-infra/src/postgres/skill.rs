//! PostgreSQL skill repository implementation.
//!
//! Implements `SkillRepository` from `skillhub-core`. Levels are written as
//! JSONB and read back through a `::text` cast so the same codec decodes both
//! backends; tags are bound natively as `TEXT[]`.

use futures_util::TryStreamExt;
use skillhub_core::repository::skill::SkillRepository;
use skillhub_types::error::RepositoryError;
use skillhub_types::skill::Skill;
use sqlx::Row;
use sqlx::postgres::{PgPool, PgRow};

use crate::codec;
use crate::error::query_error;

const SELECT_COLUMNS: &str =
    "SELECT key, name, description, logo, levels::text AS levels, tags FROM skills";

/// PostgreSQL-backed implementation of `SkillRepository`.
pub struct PgSkillRepository {
    pool: PgPool,
}

impl PgSkillRepository {
    /// Create a new repository backed by the given pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Internal row type for mapping PostgreSQL rows to domain Skill.
struct SkillRow {
    key: String,
    name: String,
    description: String,
    logo: String,
    levels: String,
    tags: Option<Vec<String>>,
}

impl SkillRow {
    fn from_row(row: &PgRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            key: row.try_get("key")?,
            name: row.try_get("name")?,
            description: row.try_get("description")?,
            logo: row.try_get("logo")?,
            levels: row.try_get("levels")?,
            tags: row.try_get("tags")?,
        })
    }

    fn into_skill(self) -> Result<Skill, RepositoryError> {
        let levels = codec::decode_levels(&self.levels)
            .inspect_err(|e| tracing::warn!(key = %self.key, error = %e, "undecodable skill row"))?;

        Ok(Skill {
            key: self.key,
            name: self.name,
            description: self.description,
            logo: self.logo,
            tags: self.tags.unwrap_or_default(),
            levels,
        })
    }
}

fn decode_row(row: &PgRow) -> Result<Skill, RepositoryError> {
    SkillRow::from_row(row)
        .map_err(|e| RepositoryError::Decode(e.to_string()))?
        .into_skill()
}

impl SkillRepository for PgSkillRepository {
    async fn find_by_key(&self, key: &str) -> Result<Option<Skill>, RepositoryError> {
        let row = sqlx::query(&format!("{SELECT_COLUMNS} WHERE key = $1"))
            .bind(key)
            .fetch_optional(&self.pool)
            .await
            .map_err(query_error)?;

        row.as_ref().map(decode_row).transpose()
    }

    async fn find_all(&self) -> Result<Vec<Skill>, RepositoryError> {
        let sql = format!("{SELECT_COLUMNS} ORDER BY key");
        let mut rows = sqlx::query(&sql).fetch(&self.pool);

        let mut skills = Vec::new();
        while let Some(row) = rows.try_next().await.map_err(query_error)? {
            skills.push(decode_row(&row)?);
        }

        Ok(skills)
    }

    async fn insert(&self, skill: &Skill) -> Result<Skill, RepositoryError> {
        let levels_json = codec::encode_levels(&skill.levels)?;

        let result = sqlx::query(
            "INSERT INTO skills (key, name, description, logo, levels, tags)
             VALUES ($1, $2, $3, $4, $5::jsonb, $6)",
        )
        .bind(&skill.key)
        .bind(&skill.name)
        .bind(&skill.description)
        .bind(&skill.logo)
        .bind(&levels_json)
        .bind(&skill.tags)
        .execute(&self.pool)
        .await;

        match result {
            Ok(_) => Ok(skill.clone()),
            Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
                Err(RepositoryError::Conflict(format!(
                    "skill '{}' already exists",
                    skill.key
                )))
            }
            Err(e) => Err(query_error(e)),
        }
    }
}

/// These tests need a reachable PostgreSQL server. Run them with
/// `SKILLHUB_TEST_POSTGRES_URI=postgres://... cargo test -- --ignored`.
#[cfg(test)]
mod tests {
    use super::*;
    use crate::postgres::pool;
    use skillhub_types::skill::Level;
    use std::time::{Duration, SystemTime, UNIX_EPOCH};

    async fn test_pool() -> PgPool {
        let url = std::env::var("SKILLHUB_TEST_POSTGRES_URI")
            .expect("SKILLHUB_TEST_POSTGRES_URI must be set for PostgreSQL tests");
        pool::connect(&url, 2, Duration::from_secs(5)).await.unwrap()
    }

    /// Keys are suffixed so repeated runs against the same database don't collide.
    fn unique_key(prefix: &str) -> String {
        let nanos = SystemTime::now().duration_since(UNIX_EPOCH).unwrap().as_nanos();
        format!("{prefix}-{nanos}")
    }

    fn make_skill(key: &str) -> Skill {
        Skill {
            key: key.to_string(),
            name: "Go".to_string(),
            description: "...".to_string(),
            logo: "logo.png".to_string(),
            tags: vec!["backend".to_string(), "systems".to_string()],
            levels: vec![
                Level {
                    key: "beginner".to_string(),
                    name: "Beginner".to_string(),
                    brief: "...".to_string(),
                    descriptions: vec!["knows syntax".to_string()],
                    level: 1,
                },
                Level {
                    key: "expert".to_string(),
                    name: "Expert".to_string(),
                    brief: "...".to_string(),
                    descriptions: vec!["writes the runtime".to_string(), "mentors".to_string()],
                    level: 3,
                },
            ],
        }
    }

    #[tokio::test]
    #[ignore = "requires a running PostgreSQL instance"]
    async fn test_insert_and_find_by_key() {
        let repo = PgSkillRepository::new(test_pool().await);
        let skill = make_skill(&unique_key("go"));

        repo.insert(&skill).await.unwrap();

        let found = repo.find_by_key(&skill.key).await.unwrap().unwrap();
        assert_eq!(found, skill);
    }

    #[tokio::test]
    #[ignore = "requires a running PostgreSQL instance"]
    async fn test_empty_tags_use_native_array() {
        let pool = test_pool().await;
        let repo = PgSkillRepository::new(pool.clone());
        let mut skill = make_skill(&unique_key("sql"));
        skill.tags.clear();

        repo.insert(&skill).await.unwrap();

        let cardinality: (i32,) =
            sqlx::query_as("SELECT cardinality(tags) FROM skills WHERE key = $1")
                .bind(&skill.key)
                .fetch_one(&pool)
                .await
                .unwrap();
        assert_eq!(cardinality.0, 0);

        let found = repo.find_by_key(&skill.key).await.unwrap().unwrap();
        assert!(found.tags.is_empty());
    }

    #[tokio::test]
    #[ignore = "requires a running PostgreSQL instance"]
    async fn test_key_conflict() {
        let repo = PgSkillRepository::new(test_pool().await);
        let skill = make_skill(&unique_key("rust"));

        repo.insert(&skill).await.unwrap();
        let err = repo.insert(&skill).await.unwrap_err();
        assert!(matches!(err, RepositoryError::Conflict(_)));
    }

    #[tokio::test]
    #[ignore = "requires a running PostgreSQL instance"]
    async fn test_find_all_includes_inserted() {
        let repo = PgSkillRepository::new(test_pool().await);
        let a = make_skill(&unique_key("a"));
        let b = make_skill(&unique_key("b"));
        repo.insert(&a).await.unwrap();
        repo.insert(&b).await.unwrap();

        let all = repo.find_all().await.unwrap();
        assert!(all.contains(&a));
        assert!(all.contains(&b));
    }

    #[tokio::test]
    #[ignore = "requires a running PostgreSQL instance"]
    async fn test_levels_shape_mismatch_is_decode_error() {
        let pool = test_pool().await;
        let key = unique_key("broken");
        sqlx::query(
            "INSERT INTO skills (key, name, levels, tags) VALUES ($1, 'Broken', '{\"a\": 1}'::jsonb, '{}')",
        )
        .bind(&key)
        .execute(&pool)
        .await
        .unwrap();

        let repo = PgSkillRepository::new(pool.clone());
        let result = repo.find_by_key(&key).await;

        // Remove the bad row before asserting so it can't poison other listings.
        sqlx::query("DELETE FROM skills WHERE key = $1")
            .bind(&key)
            .execute(&pool)
            .await
            .unwrap();

        assert!(matches!(result, Err(RepositoryError::Decode(_))));
    }
}
