//! # Blog API
//!
//! Actix-web resource handlers for `/posts`, the server context they share,
//! and the server lifecycle used by the binary and the integration tests.

pub mod config;
pub mod handlers;
pub mod middleware;
pub mod server;
pub mod state;
pub mod telemetry;

pub use config::AppConfig;
pub use server::{RunningServer, ServerError};
pub use state::AppState;
