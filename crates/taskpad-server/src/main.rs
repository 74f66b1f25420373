// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Taskpad Server - todos and notes over HTTP
//!
//! Startup sequence: logging, .env, configuration, database pool, schema,
//! router, serve until ctrl-c.

use tracing::{info, warn};

use taskpad_server::config::Config;
use taskpad_server::handlers::AppState;
use taskpad_server::routes;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "taskpad_server=info,tower_http=info".into()),
        )
        .init();

    // Load .env file if present
    if let Err(e) = dotenvy::dotenv() {
        warn!("No .env file loaded: {}", e);
    }

    // Load configuration
    let config = Config::from_env()?;

    info!(
        http_addr = %config.http_addr,
        api_prefix = %config.api_prefix,
        "Starting Taskpad Server"
    );

    // Connect to database
    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .connect(&config.database_url)
        .await?;

    info!("Connected to database");

    // Create tables if they don't exist
    sqlx::raw_sql(taskpad_server::SCHEMA_SQL)
        .execute(&pool)
        .await?;

    info!("Database schema verified");

    let state = AppState::new(pool);
    let app = routes::router(state, &config.api_prefix, &config.cors_origins);

    let listener = tokio::net::TcpListener::bind(config.http_addr).await?;
    info!(addr = %config.http_addr, "Taskpad Server ready");

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            info!("Shutdown signal received");
        })
        .await?;

    info!("Taskpad Server shut down");

    Ok(())
}
