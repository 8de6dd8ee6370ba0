//! Application state wiring the service to its store.
//!
//! AppState holds the concrete service instance used by both CLI and REST API.
//! The service is generic over the repository trait, but AppState pins it to
//! the store chosen from the connection URI.

use std::sync::Arc;

use skillhub_core::service::skill::SkillService;
use skillhub_infra::store::StoreSkillRepository;
use skillhub_types::config::ServiceConfig;

/// Concrete type alias for the service generic pinned to the infra store.
pub type ConcreteSkillService = SkillService<StoreSkillRepository>;

/// Shared application state.
///
/// Used by both CLI commands and REST API handlers. Cloning is cheap; the
/// service (and the pool inside it) is shared.
#[derive(Clone)]
pub struct AppState {
    pub skill_service: Arc<ConcreteSkillService>,
    pub backend: &'static str,
}

impl AppState {
    /// Initialize the application state: connect to the store, wire the service.
    pub async fn init(database_url: &str, config: &ServiceConfig) -> anyhow::Result<Self> {
        let repo = StoreSkillRepository::connect(database_url, config).await?;
        Ok(Self::from_repository(repo, config))
    }

    /// Wire state around an already connected repository.
    pub fn from_repository(repo: StoreSkillRepository, config: &ServiceConfig) -> Self {
        let backend = repo.backend();
        let skill_service = SkillService::new(repo, config.query_timeout());

        Self {
            skill_service: Arc::new(skill_service),
            backend,
        }
    }
}
