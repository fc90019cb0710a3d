//! Market Records - minimal marketplace record-keeping service.
//!
//! This binary serves independent CRUD endpoints for goods, users, and
//! orders on port 8000, each backed by a single-statement SQLite operation.
//!
//! # Architecture
//!
//! - Axum web framework with JSON request/response bodies
//! - SQLite via a sqlx connection pool, created at startup and shared
//!   through [`AppState`](market_records_server::state::AppState)
//! - Embedded migrations run on boot (the service owns its schema)
//!
//! There is no authentication, pagination, or cross-table logic; every
//! endpoint is a single-table insert, select, update, or delete.

#![cfg_attr(not(test), forbid(unsafe_code))]

use market_records_server::config::ServiceConfig;
use market_records_server::state::AppState;
use market_records_server::{app, db};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Load configuration from environment
    let config = ServiceConfig::from_env().expect("Failed to load configuration");

    // Initialize tracing with EnvFilter
    // Defaults to info level for our crate if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "market_records_server=info,tower_http=debug".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Initialize database connection pool
    let pool = db::create_pool(&config.database_url)
        .await
        .expect("Failed to create database pool");
    tracing::info!("Database pool created");

    // Create the tables if this is a fresh store
    db::MIGRATOR
        .run(&pool)
        .await
        .expect("Failed to run migrations");
    tracing::info!("Migrations applied");

    // Build application state and router
    let state = AppState::new(config.clone(), pool);
    let router = app(state);

    // Start server
    let addr = config.socket_addr();
    tracing::info!("record service listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
