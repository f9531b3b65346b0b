//! Server lifecycle - start on a configured address, stop on demand.

use std::net::SocketAddr;

use actix_web::dev::ServerHandle;
use actix_web::{App, HttpServer, web};
use thiserror::Error;
use tracing_actix_web::TracingLogger;

use blog_core::RepoError;

use crate::config::AppConfig;
use crate::handlers;
use crate::state::AppState;

/// Failures while starting or running the server.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("post store unavailable: {0}")]
    Store(#[from] RepoError),

    #[error("server I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A server bound to a socket and accepting requests.
///
/// Owns the [`AppState`] it serves; stopping the server also releases the store.
pub struct RunningServer {
    addr: SocketAddr,
    handle: ServerHandle,
    task: actix_rt::task::JoinHandle<std::io::Result<()>>,
    state: AppState,
}

impl RunningServer {
    /// Connect the store described by `config` and start serving.
    pub async fn start(config: &AppConfig) -> Result<Self, ServerError> {
        let state = AppState::connect(config.database.as_ref()).await?;
        Self::start_with_state(config, state)
    }

    /// Start serving an already-built state. Port 0 picks a free port.
    pub fn start_with_state(config: &AppConfig, state: AppState) -> Result<Self, ServerError> {
        let app_state = state.clone();
        let server = HttpServer::new(move || {
            App::new()
                .wrap(TracingLogger::default())
                .app_data(web::Data::new(app_state.clone()))
                .configure(handlers::configure_routes)
        })
        .bind((config.host.as_str(), config.port))?;

        let addr = server
            .addrs()
            .first()
            .copied()
            .ok_or_else(|| std::io::Error::other("server bound to no address"))?;

        let server = server.run();
        let handle = server.handle();
        let task = actix_rt::spawn(server);
        tracing::info!(%addr, "Blog API listening");

        Ok(Self {
            addr,
            handle,
            task,
            state,
        })
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Base URL for clients, e.g. `http://127.0.0.1:8080`.
    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Stop accepting connections, drain in-flight requests, close the store.
    pub async fn stop(self) -> Result<(), ServerError> {
        self.handle.stop(true).await;
        self.finish().await
    }

    /// Run until the server shuts down on its own (e.g. on SIGINT).
    pub async fn wait(self) -> Result<(), ServerError> {
        self.finish().await
    }

    async fn finish(self) -> Result<(), ServerError> {
        settle(self.task.await, self.state).await
    }
}

/// Close the store, then report how the server task ended.
///
/// The store is closed even when the task failed.
async fn settle(
    joined: Result<std::io::Result<()>, actix_rt::task::JoinError>,
    state: AppState,
) -> Result<(), ServerError> {
    let closed = state.close().await;

    joined.map_err(|e| std::io::Error::other(e.to_string()))??;
    closed?;
    tracing::info!("Blog API stopped");
    Ok(())
}
