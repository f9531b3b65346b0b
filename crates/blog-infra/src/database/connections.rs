#[cfg(feature = "postgres")]
use std::time::Duration;

#[cfg(feature = "postgres")]
use blog_core::RepoError;
#[cfg(feature = "postgres")]
use sea_orm::{ConnectOptions, Database, DbConn};

/// Configuration for the post database.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
}

/// Connection pool shared by every request.
///
/// One pool per process; handlers reach it through the repository built on top of it.
#[cfg(feature = "postgres")]
#[derive(Clone)]
pub struct DatabaseConnections {
    pub main: DbConn,
}

#[cfg(feature = "postgres")]
impl DatabaseConnections {
    /// Open the pool described by `config`.
    pub async fn init(config: &DatabaseConfig) -> Result<Self, RepoError> {
        tracing::info!("Initializing database connection...");

        let opts = ConnectOptions::new(&config.url)
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .connect_timeout(Duration::from_secs(10))
            .idle_timeout(Duration::from_secs(300))
            .sqlx_logging(true)
            .to_owned();

        let main = Database::connect(opts)
            .await
            .map_err(|e| RepoError::Connection(e.to_string()))?;
        tracing::info!("Database connected (pool: {})", config.max_connections);

        Ok(Self { main })
    }

    /// Close the pool. Further queries through cloned handles will fail.
    pub async fn close(self) -> Result<(), RepoError> {
        self.main
            .close()
            .await
            .map_err(|e| RepoError::Connection(e.to_string()))
    }
}
