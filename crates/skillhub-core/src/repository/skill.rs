//! Skill repository trait definition.

use skillhub_types::error::RepositoryError;
use skillhub_types::skill::Skill;

/// Repository trait for skill persistence.
///
/// Implementations own the storage encoding of `levels` and `tags`; callers
/// only ever see decoded [`Skill`] values. Uses native async fn in traits
/// (Rust 2024 edition, no async_trait macro).
pub trait SkillRepository: Send + Sync {
    /// Look up a single skill by exact key match.
    ///
    /// Returns `Ok(None)` when no row matches. A row whose stored levels or
    /// tags cannot be decoded yields [`RepositoryError::Decode`].
    fn find_by_key(
        &self,
        key: &str,
    ) -> impl std::future::Future<Output = Result<Option<Skill>, RepositoryError>> + Send;

    /// Load every skill, ordered by key.
    ///
    /// All-or-nothing: a single undecodable row fails the whole call.
    fn find_all(
        &self,
    ) -> impl std::future::Future<Output = Result<Vec<Skill>, RepositoryError>> + Send;

    /// Insert a new skill and echo it back.
    ///
    /// A key that already exists yields [`RepositoryError::Conflict`].
    fn insert(
        &self,
        skill: &Skill,
    ) -> impl std::future::Future<Output = Result<Skill, RepositoryError>> + Send;
}
