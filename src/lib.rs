// Library entry point - the blog API as a reusable library

pub mod config;
pub mod database;
pub mod dto;
pub mod errors;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod openapi;
pub mod repositories;
pub mod routes;
pub mod schema;

#[cfg(test)]
mod tests;

// Re-export commonly used types for convenience
pub use config::{ Config, ConfigError, DatabaseConfig, ServerConfig };
pub use errors::{ HttpError, ErrorMessage };
pub use models::{ Post, Comment };
pub use repositories::{ PostRepository, PgPostRepository, InMemoryPostRepository };

use std::sync::Arc;
use axum::Router;
use tracing::info;

/// Shared per-process state. Handlers hold no state of their own; each
/// request borrows what it needs from the repository and gives it back.
#[derive(Clone)]
pub struct AppState {
    pub repository: Arc<dyn PostRepository>,
    pub server: ServerConfig,
}

impl AppState {
    pub fn new(repository: Arc<dyn PostRepository>, server: ServerConfig) -> Self {
        Self { repository, server }
    }
}

/// Create the complete application router
pub fn create_app(state: Arc<AppState>) -> Router {
    routes::create_router(state)
}

/// Initialize the application with all dependencies.
///
/// Order matters: the schema is migrated before the router exists, so no
/// request is ever served against an outdated schema. Any error returned
/// here is meant to abort startup.
pub async fn initialize_app(config: &Config) -> Result<Router, ConfigError> {
    let pool = config.database.pool.clone();

    let applied = tokio::task
        ::spawn_blocking(move || database::run_migrations(&pool)).await
        .map_err(|e| ConfigError::Migration(format!("migration task failed: {}", e)))??;
    info!(applied = applied.len(), "Database migrations complete");

    let repository = Arc::new(PgPostRepository::new(config.database.pool.clone()));
    let state = Arc::new(AppState::new(repository, config.server.clone()));

    Ok(create_app(state))
}
