//! Builders for the camp store and the HTTP state wired over it.

use std::sync::Arc;

use camps_backend::domain::ResourceLocator;
use camps_backend::inbound::http::state::HttpState;
use camps_backend::outbound::memory::InMemoryCampRepository;
use camps_backend::outbound::persistence::{
    DbPool, DieselCampRepository, MigrationError, PoolConfig, PoolError, run_pending_migrations,
};
use camps_backend::settings::AppSettings;
use tracing::info;

/// The repository backing every camp and talk use-case.
pub enum CampStore {
    Memory(Arc<InMemoryCampRepository>),
    Postgres(Arc<DieselCampRepository>),
}

/// Failures while preparing the PostgreSQL store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error(transparent)]
    Migration(#[from] MigrationError),
    #[error(transparent)]
    Pool(#[from] PoolError),
}

impl CampStore {
    /// Select the store described by `settings`.
    ///
    /// With a database URL, pending migrations are applied before the pool
    /// is opened. Without one, the in-memory store is used and optionally
    /// seeded with the sample camp.
    pub async fn from_settings(settings: &AppSettings) -> Result<Self, StoreError> {
        match settings.database_url() {
            Some(url) => {
                run_pending_migrations(url).await?;
                let config =
                    PoolConfig::new(url).with_max_size(settings.database_max_connections());
                let pool = DbPool::new(config).await?;
                info!("using PostgreSQL camp store");
                Ok(Self::Postgres(Arc::new(DieselCampRepository::new(pool))))
            }
            None => {
                let seeded = settings.seed_sample_data();
                let repo = if seeded {
                    InMemoryCampRepository::with_sample_data()
                } else {
                    InMemoryCampRepository::new()
                };
                info!(seeded, "using in-memory camp store");
                Ok(Self::Memory(Arc::new(repo)))
            }
        }
    }
}

/// Wire the camp and talk services over the selected store.
pub fn build_http_state(store: &CampStore, locator: ResourceLocator) -> HttpState {
    match store {
        CampStore::Memory(repo) => HttpState::from_repository(Arc::clone(repo), locator),
        CampStore::Postgres(repo) => HttpState::from_repository(Arc::clone(repo), locator),
    }
}
