//! SQLite skill repository implementation.
//!
//! Implements `SkillRepository` from `skillhub-core` using sqlx with split
//! read/write pools. Levels and tags are stored as JSON text.

use futures_util::TryStreamExt;
use skillhub_core::repository::skill::SkillRepository;
use skillhub_types::error::RepositoryError;
use skillhub_types::skill::Skill;
use sqlx::Row;

use super::pool::DatabasePool;
use crate::codec;
use crate::error::query_error;

const SELECT_COLUMNS: &str = "SELECT key, name, description, logo, levels, tags FROM skills";

/// SQLite-backed implementation of `SkillRepository`.
pub struct SqliteSkillRepository {
    pool: DatabasePool,
}

impl SqliteSkillRepository {
    /// Create a new repository backed by the given database pool.
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }
}

/// Internal row type for mapping SQLite rows to domain Skill.
struct SkillRow {
    key: String,
    name: String,
    description: String,
    logo: String,
    levels: String,
    tags: Option<String>,
}

impl SkillRow {
    fn from_row(row: &sqlx::sqlite::SqliteRow) -> Result<Self, sqlx::Error> {
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
        let tags = codec::decode_tags(self.tags.as_deref())?;

        Ok(Skill {
            key: self.key,
            name: self.name,
            description: self.description,
            logo: self.logo,
            tags,
            levels,
        })
    }
}

fn decode_row(row: &sqlx::sqlite::SqliteRow) -> Result<Skill, RepositoryError> {
    SkillRow::from_row(row)
        .map_err(|e| RepositoryError::Decode(e.to_string()))?
        .into_skill()
}

impl SkillRepository for SqliteSkillRepository {
    async fn find_by_key(&self, key: &str) -> Result<Option<Skill>, RepositoryError> {
        let row = sqlx::query(&format!("{SELECT_COLUMNS} WHERE key = ?"))
            .bind(key)
            .fetch_optional(&self.pool.reader)
            .await
            .map_err(query_error)?;

        row.as_ref().map(decode_row).transpose()
    }

    async fn find_all(&self) -> Result<Vec<Skill>, RepositoryError> {
        let sql = format!("{SELECT_COLUMNS} ORDER BY key");
        let mut rows = sqlx::query(&sql).fetch(&self.pool.reader);

        let mut skills = Vec::new();
        while let Some(row) = rows.try_next().await.map_err(query_error)? {
            skills.push(decode_row(&row)?);
        }

        Ok(skills)
    }

    async fn insert(&self, skill: &Skill) -> Result<Skill, RepositoryError> {
        let levels_json = codec::encode_levels(&skill.levels)?;
        let tags_json = codec::encode_tags(&skill.tags)?;

        let result = sqlx::query(
            "INSERT INTO skills (key, name, description, logo, levels, tags)
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(&skill.key)
        .bind(&skill.name)
        .bind(&skill.description)
        .bind(&skill.logo)
        .bind(&levels_json)
        .bind(&tags_json)
        .execute(&self.pool.writer)
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
