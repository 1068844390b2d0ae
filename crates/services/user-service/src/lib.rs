//! User Service Library
//!
//! Read-only HTTP lookups over stored users: by email, by name, and by
//! inclusive age range. Layers are wired explicitly in [`build_app`]:
//! repository, then service, then HTTP routes.

pub mod api;
pub mod config;
pub mod infra;
pub mod repository;
pub mod service;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tracing::info;

use common::{AppError, AppResult};

use crate::api::{create_router, AppState};
use crate::config::UserServiceConfig;
use crate::infra::Database;
use crate::repository::UserStore;
use crate::service::UserManager;

/// Build the HTTP application over an already connected database.
pub fn build_app(db: Database) -> Router {
    let user_repo = Arc::new(UserStore::new(db.get_connection()));
    let user_service = Arc::new(UserManager::new(user_repo));
    let state = AppState::new(user_service, db);

    create_router(state)
}

/// Run the HTTP server, with optional overrides for the configured host and port.
pub async fn run_server(host: Option<String>, port: Option<u16>) -> AppResult<()> {
    let mut config = UserServiceConfig::from_env();
    if let Some(host) = host {
        config.host = host;
    }
    if let Some(port) = port {
        config.port = port;
    }
    run_server_with_config(config).await
}

/// Run migrations (for CLI commands).
pub async fn run_migrations(action: MigrateAction) -> AppResult<()> {
    let config = UserServiceConfig::from_env();
    let db = Database::connect_without_migrations(&config.database).await?;

    match action {
        MigrateAction::Up => {
            db.run_migrations().await?;
            info!("Migrations applied successfully");
        }
        MigrateAction::Down => {
            db.rollback_migration().await?;
            info!("Rolled back last migration");
        }
        MigrateAction::Status => {
            let status = db.migration_status().await?;
            for (name, applied) in status {
                let marker = if applied { "[x]" } else { "[ ]" };
                println!("{} {}", marker, name);
            }
        }
        MigrateAction::Fresh => {
            db.fresh_migrations().await?;
            info!("Database reset and migrations applied");
        }
    }

    Ok(())
}

/// Migration action type.
#[derive(Debug, Clone, Copy)]
pub enum MigrateAction {
    Up,
    Down,
    Status,
    Fresh,
}

/// Run the HTTP server with the given configuration.
async fn run_server_with_config(config: UserServiceConfig) -> AppResult<()> {
    // Initialize database
    let db = Database::connect(&config.database).await?;

    let app = build_app(db);

    let addr: SocketAddr = config
        .server_addr()
        .parse()
        .map_err(|e| AppError::internal(format!("Invalid address {}: {}", config.server_addr(), e)))?;

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind to {}: {}", addr, e)))?;
    info!("User service listening on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::internal(format!("Server error: {}", e)))?;

    Ok(())
}
