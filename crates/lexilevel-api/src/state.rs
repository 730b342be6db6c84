//! Application state wiring all services together.
//!
//! AppState holds the concrete service instances used by the REST API.
//! Services are generic over repository/provider traits, but AppState pins
//! them to the concrete infra implementations. Everything here is built
//! once at startup and torn down by [`AppState::shutdown`].

use std::path::Path;
use std::sync::Arc;

use anyhow::Context;

use lexilevel_core::service::assessment::AssessmentService;
use lexilevel_core::service::auth::AuthService;
use lexilevel_infra::config::load_config;
use lexilevel_infra::crypto::token::RandomSessionTokens;
use lexilevel_infra::filesystem::{database_url, resolve_data_dir};
use lexilevel_infra::identity::IdentityToolkitClient;
use lexilevel_infra::sqlite::history::SqliteHistoryRepository;
use lexilevel_infra::sqlite::pool::DatabasePool;
use lexilevel_infra::sqlite::session::SqliteSessionRepository;
use lexilevel_infra::sqlite::user::SqliteUserRepository;
use lexilevel_types::config::AppConfig;

/// Concrete type aliases for the service generics pinned to infra implementations.
pub type ConcreteAuthService = AuthService<
    IdentityToolkitClient,
    SqliteUserRepository,
    SqliteSessionRepository,
    RandomSessionTokens,
>;

pub type ConcreteAssessmentService = AssessmentService<SqliteHistoryRepository>;

/// Shared application state holding all services.
#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<ConcreteAuthService>,
    pub assessment_service: Arc<ConcreteAssessmentService>,
    pub db_pool: DatabasePool,
}

impl AppState {
    /// Initialize the application state: data dir, config, DB, identity client.
    pub async fn init() -> anyhow::Result<Self> {
        let data_dir = resolve_data_dir();
        let config = load_config(&data_dir).await;
        let db_pool = open_database(&data_dir).await?;
        let identity = IdentityToolkitClient::from_config(&config.identity)?;

        let sessions = SqliteSessionRepository::new(db_pool.clone());
        let purged = sessions
            .purge_expired()
            .await
            .context("failed to purge expired sessions")?;
        if purged > 0 {
            tracing::info!(purged, "removed expired sessions");
        }

        Ok(Self::build(db_pool, &config, identity))
    }

    /// Wire services over an open pool and identity client.
    pub fn build(db_pool: DatabasePool, config: &AppConfig, identity: IdentityToolkitClient) -> Self {
        let auth_service = AuthService::new(
            identity,
            SqliteUserRepository::new(db_pool.clone()),
            SqliteSessionRepository::new(db_pool.clone()),
            RandomSessionTokens::new(),
            config.session.ttl(),
        );
        let assessment_service =
            AssessmentService::new(SqliteHistoryRepository::new(db_pool.clone()));

        Self {
            auth_service: Arc::new(auth_service),
            assessment_service: Arc::new(assessment_service),
            db_pool,
        }
    }

    /// Close database connections.
    pub async fn shutdown(self) {
        self.db_pool.close().await;
        tracing::debug!("application state shut down");
    }
}

/// Ensure the data directory exists and open (and migrate) the database in it.
pub async fn open_database(data_dir: &Path) -> anyhow::Result<DatabasePool> {
    tokio::fs::create_dir_all(data_dir)
        .await
        .with_context(|| format!("failed to create data directory {}", data_dir.display()))?;

    let pool = DatabasePool::new(&database_url(data_dir))
        .await
        .context("failed to open database")?;
    Ok(pool)
}
