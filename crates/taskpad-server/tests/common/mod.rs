// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Common test infrastructure for taskpad-server E2E tests.
//!
//! Provides TestContext for setting up database, server, and SDK client.

#![allow(dead_code)]

use std::net::SocketAddr;

use sqlx::PgPool;

use taskpad_sdk::{SdkConfig, TaskpadClient};
use taskpad_server::handlers::AppState;
use taskpad_server::routes;

/// Test context that manages database, server, and client for E2E tests.
pub struct TestContext {
    pub pool: PgPool,
    pub client: TaskpadClient,
    pub addr: SocketAddr,
}

impl TestContext {
    /// Create a new test context.
    ///
    /// This sets up:
    /// 1. Database connection from TEST_DATABASE_URL
    /// 2. The schema (idempotent DDL)
    /// 3. The HTTP server on an available port
    /// 4. An SDK client pointed at it
    ///
    /// Returns None when TEST_DATABASE_URL is not set so tests can skip.
    pub async fn new() -> Option<Self> {
        let database_url = std::env::var("TEST_DATABASE_URL").ok()?;

        let pool = PgPool::connect(&database_url).await.ok()?;

        sqlx::raw_sql(taskpad_server::SCHEMA_SQL)
            .execute(&pool)
            .await
            .ok()?;

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.ok()?;
        let addr = listener.local_addr().ok()?;

        let state = AppState::new(pool.clone());
        let app = routes::router(state, "/api", &[]);

        tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, app).await {
                eprintln!("Test server error: {}", e);
            }
        });

        let client = TaskpadClient::new(SdkConfig::new(format!("http://{addr}"))).ok()?;

        Some(Self { pool, client, addr })
    }

    /// Wipe both tables and restart id assignment, so id assertions are
    /// deterministic.
    pub async fn reset(&self) {
        sqlx::raw_sql("TRUNCATE todos, notes RESTART IDENTITY CASCADE")
            .execute(&self.pool)
            .await
            .expect("failed to reset test database");
    }
}
