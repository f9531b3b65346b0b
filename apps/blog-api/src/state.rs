//! Application state - shared across all handlers.

use std::sync::Arc;

use blog_core::RepoError;
use blog_core::ports::PostRepository;
use blog_infra::{DatabaseConfig, InMemoryPostRepository};

#[cfg(feature = "postgres")]
use blog_infra::{DatabaseConnections, PostgresPostRepository};

/// Server context handed to every handler through `web::Data`.
///
/// Holds no per-request state; every post goes through `posts`.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn PostRepository>,
    #[cfg(feature = "postgres")]
    db: Option<DatabaseConnections>,
}

impl AppState {
    /// Wrap an existing post store.
    pub fn new(posts: Arc<dyn PostRepository>) -> Self {
        Self {
            posts,
            #[cfg(feature = "postgres")]
            db: None,
        }
    }

    /// Fresh, empty in-memory store.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryPostRepository::new()))
    }

    /// Build the state for `db_config`, or the in-memory store when it is absent.
    ///
    /// A configured but unreachable database is an error, not a fallback.
    pub async fn connect(db_config: Option<&DatabaseConfig>) -> Result<Self, RepoError> {
        let Some(config) = db_config else {
            tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
            return Ok(Self::in_memory());
        };

        Self::open_database(config).await
    }

    #[cfg(feature = "postgres")]
    async fn open_database(config: &DatabaseConfig) -> Result<Self, RepoError> {
        let connections = DatabaseConnections::init(config).await?;
        let repo = Arc::new(PostgresPostRepository::new(connections.main.clone()));
        tracing::info!("Application state initialized");

        Ok(Self {
            posts: repo,
            db: Some(connections),
        })
    }

    #[cfg(not(feature = "postgres"))]
    async fn open_database(_config: &DatabaseConfig) -> Result<Self, RepoError> {
        tracing::info!("Running without postgres feature - using in-memory repository");
        Ok(Self::in_memory())
    }

    /// Release the database pool, if any.
    pub async fn close(self) -> Result<(), RepoError> {
        #[cfg(feature = "postgres")]
        if let Some(db) = self.db {
            db.close().await?;
            tracing::info!("Database connection closed");
        }
        Ok(())
    }
}
