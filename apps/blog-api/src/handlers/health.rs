//! Health check endpoint.

use actix_web::{HttpResponse, web};
use serde::Serialize;

use blog_core::ports::BaseRepository;

use crate::middleware::error::AppResult;
use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub posts: u64,
    pub timestamp: String,
}

/// Health check endpoint - returns server status. Fails with 500 when the store
/// cannot answer.
///
/// GET /health
pub async fn health_check(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let response = HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        posts: state.posts.count().await?,
        timestamp: chrono::Utc::now().to_rfc3339(),
    };

    Ok(HttpResponse::Ok().json(response))
}
