//! Skill catalog service.
//!
//! Exposes the three catalog operations (get by key, list, create) over a
//! [`SkillRepository`] and folds every repository outcome into a
//! [`SkillError`] the boundary layers can classify by kind.

use std::future::Future;
use std::time::Duration;

use skillhub_types::error::{RepositoryError, SkillError};
use skillhub_types::skill::{self, Skill};

use crate::repository::skill::SkillRepository;

/// Service over the skill catalog.
///
/// Generic over the repository trait to maintain clean architecture --
/// skillhub-core never depends on skillhub-infra.
pub struct SkillService<R: SkillRepository> {
    repo: R,
    query_timeout: Duration,
}

impl<R: SkillRepository> SkillService<R> {
    /// Create a new SkillService.
    ///
    /// - `repo`: persistence for skill records
    /// - `query_timeout`: deadline applied to every repository call
    pub fn new(repo: R, query_timeout: Duration) -> Self {
        Self { repo, query_timeout }
    }

    /// Get a skill by key.
    pub async fn get_by_key(&self, key: &str) -> Result<Skill, SkillError> {
        skill::validate_key(key).map_err(SkillError::InvalidInput)?;

        self.with_deadline(self.repo.find_by_key(key))
            .await?
            .ok_or_else(|| SkillError::NotFound(key.to_string()))
    }

    /// List every skill in the catalog.
    pub async fn list(&self) -> Result<Vec<Skill>, SkillError> {
        let skills = self.with_deadline(self.repo.find_all()).await?;
        tracing::debug!(count = skills.len(), "listed skills");
        Ok(skills)
    }

    /// Register a new skill. The stored value is echoed back unchanged.
    pub async fn create(&self, skill: Skill) -> Result<Skill, SkillError> {
        skill.validate().map_err(SkillError::InvalidInput)?;

        let created = self.with_deadline(self.repo.insert(&skill)).await?;
        tracing::info!(key = %created.key, levels = created.levels.len(), "created skill");
        Ok(created)
    }

    /// Run a repository call under the configured deadline.
    ///
    /// On expiry the repository future is dropped, which cancels the
    /// in-flight query and returns its connection to the pool.
    async fn with_deadline<T>(
        &self,
        call: impl Future<Output = Result<T, RepositoryError>>,
    ) -> Result<T, SkillError> {
        match tokio::time::timeout(self.query_timeout, call).await {
            Ok(result) => result.map_err(|e| {
                tracing::warn!(error = %e, "skill repository call failed");
                SkillError::from(e)
            }),
            Err(_) => {
                tracing::warn!(timeout = ?self.query_timeout, "skill repository call timed out");
                Err(SkillError::StorageFailure(format!(
                    "store operation timed out after {}ms",
                    self.query_timeout.as_millis()
                )))
            }
        }
    }
}
