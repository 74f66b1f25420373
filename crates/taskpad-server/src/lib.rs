// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Taskpad Server - HTTP API for todos and notes
//!
//! A small REST service over PostgreSQL. All state lives in the database;
//! request handlers hold no cross-request mutable state, so each request is
//! an independent unit of work whose only suspension points are pooled
//! database calls.
//!
//! # HTTP API
//!
//! Routes are mounted under a configurable prefix (default `/api`), except
//! `/health` which stays at the root.
//!
//! ## Todos
//!
//! | Route | Description |
//! |-------|-------------|
//! | `GET /todos[?completed=bool]` | List todos, newest first, optionally filtered |
//! | `GET /todos/{id}` | Fetch one todo |
//! | `POST /todos` | Create a todo from `{title, description?}` |
//! | `PATCH /todos/{id}` | Partial update of title/description/completed |
//! | `DELETE /todos/{id}` | Delete a todo and, by cascade, its notes |
//!
//! ## Notes
//!
//! | Route | Description |
//! |-------|-------------|
//! | `GET /todos/{todo_id}/notes` | List a todo's notes, oldest first |
//! | `POST /todos/{todo_id}/notes` | Create a note from `{content}` |
//! | `PATCH /todos/{todo_id}/notes/{note_id}` | Replace a note's content |
//! | `DELETE /todos/{todo_id}/notes/{note_id}` | Delete a note |
//!
//! ## Service
//!
//! | Route | Description |
//! |-------|-------------|
//! | `GET /stats` | Aggregate counts (total, completed, pending, total_notes) |
//! | `GET /health` | Liveness signal with a database connectivity probe |
//!
//! # Status codes
//!
//! | Code | Meaning |
//! |------|---------|
//! | 200/201/204 | Success |
//! | 404 | Referenced todo or note does not exist |
//! | 422 | Request shape/type validation failed |
//! | 500 | Unexpected failure (database unavailable, ...) |
//!
//! # Configuration
//!
//! Configuration is loaded from environment variables:
//!
//! | Variable | Required | Default | Description |
//! |----------|----------|---------|-------------|
//! | `TASKPAD_DATABASE_URL` | Yes* | - | PostgreSQL connection string |
//! | `DATABASE_URL` | Yes* | - | Fallback if above not set |
//! | `TASKPAD_HTTP_PORT` | No | `8080` | HTTP listen port |
//! | `TASKPAD_API_PREFIX` | No | `/api` | Mount prefix for the API routes |
//! | `TASKPAD_CORS_ORIGINS` | No | localhost dev origins | Comma-separated browser origins |
//! | `TASKPAD_DB_MAX_CONNECTIONS` | No | `10` | Connection pool size |
//!
//! # Modules
//!
//! - [`config`]: Server configuration from environment variables
//! - [`db`]: Parameterized queries over the todos and notes tables
//! - [`error`]: Error taxonomy and its HTTP status mapping
//! - [`handlers`]: Route handlers and shared application state
//! - [`routes`]: Router assembly with CORS and request tracing

#![deny(missing_docs)]

/// Server configuration loaded from environment variables.
pub mod config;

/// PostgreSQL operations for todos, notes, and stats.
pub mod db;

/// Error types and their HTTP status mapping.
pub mod error;

/// Route handlers and shared application state.
pub mod handlers;

/// Router assembly with CORS and request tracing layers.
pub mod routes;

pub use config::Config;
pub use error::Error;

/// Idempotent DDL for the todos and notes tables.
///
/// Applied with `sqlx::raw_sql` at startup; safe to run repeatedly.
pub const SCHEMA_SQL: &str = include_str!("../migrations/schema.sql");
