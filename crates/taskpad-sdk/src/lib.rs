// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Taskpad SDK - typed client for the taskpad HTTP API
//!
//! Wraps `reqwest` with one ergonomic method per route and maps non-2xx
//! responses onto a small error taxonomy, so callers never touch status
//! codes or raw JSON.
//!
//! # Example
//!
//! ```ignore
//! use taskpad_sdk::{SdkConfig, TaskpadClient};
//! use taskpad_api::CreateTodo;
//!
//! let client = TaskpadClient::new(SdkConfig::localhost())?;
//!
//! let todo = client
//!     .create_todo(&CreateTodo { title: "Learn X".into(), description: None })
//!     .await?;
//! let todos = client.list_todos(None).await?;
//! ```
//!
//! # Operations
//!
//! | Method | Route |
//! |--------|-------|
//! | `health` | `GET /health` |
//! | `stats` | `GET /stats` |
//! | `list_todos` | `GET /todos[?completed=bool]` |
//! | `get_todo` | `GET /todos/{id}` |
//! | `create_todo` | `POST /todos` |
//! | `update_todo` | `PATCH /todos/{id}` |
//! | `delete_todo` | `DELETE /todos/{id}` |
//! | `list_notes` | `GET /todos/{todo_id}/notes` |
//! | `create_note` | `POST /todos/{todo_id}/notes` |
//! | `update_note` | `PATCH /todos/{todo_id}/notes/{note_id}` |
//! | `delete_note` | `DELETE /todos/{todo_id}/notes/{note_id}` |

#![deny(missing_docs)]

/// Client for the taskpad HTTP API.
pub mod client;

/// SDK configuration (base URL, prefix, timeouts).
pub mod config;

/// Error types for SDK operations.
pub mod error;

pub use client::TaskpadClient;
pub use config::SdkConfig;
pub use error::{Result, SdkError};

// Re-export the wire types so SDK users need a single dependency.
pub use taskpad_api::{
    CreateNote, CreateTodo, ErrorResponse, HealthStatus, Note, Todo, TodoStats, UpdateNote,
    UpdateTodo,
};
