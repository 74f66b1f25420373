// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! JSON types shared between taskpad-server and its clients.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A task record.
///
/// Ids are server-assigned and monotonically increasing. `updated_at` is
/// refreshed on every partial update and is never earlier than `created_at`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Todo {
    /// Server-assigned identifier.
    pub id: i64,
    /// Short title (required, non-empty).
    pub title: String,
    /// Optional free-text description.
    pub description: Option<String>,
    /// Completion flag.
    pub completed: bool,
    /// When the todo was created.
    pub created_at: DateTime<Utc>,
    /// When the todo was last modified.
    pub updated_at: DateTime<Utc>,
}

/// A free-text annotation owned by exactly one todo.
///
/// A note's lifetime is bounded by its owning todo: deleting the todo
/// deletes all of its notes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    /// Server-assigned identifier.
    pub id: i64,
    /// Identifier of the owning todo.
    pub todo_id: i64,
    /// Note text (required, non-empty).
    pub content: String,
    /// When the note was created.
    pub created_at: DateTime<Utc>,
}

/// Body for `POST /todos`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateTodo {
    /// Title of the new todo (required, non-empty).
    pub title: String,
    /// Optional description.
    pub description: Option<String>,
}

/// Body for `PATCH /todos/{id}`.
///
/// Every field is optional; only supplied fields are changed. An absent
/// field leaves the current value untouched, so a patch cannot clear the
/// description back to null.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateTodo {
    /// New title, if supplied (must be non-empty).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// New description, if supplied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// New completion flag, if supplied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}

impl UpdateTodo {
    /// Patch that only flips the completion flag.
    pub fn completed(completed: bool) -> Self {
        Self {
            completed: Some(completed),
            ..Self::default()
        }
    }

    /// True when no field is supplied.
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.completed.is_none()
    }
}

/// Body for `POST /todos/{todo_id}/notes`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateNote {
    /// Note text (required, non-empty).
    pub content: String,
}

/// Body for `PATCH /todos/{todo_id}/notes/{note_id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateNote {
    /// Replacement note text (required, non-empty).
    pub content: String,
}

/// Aggregate counts from `GET /stats`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoStats {
    /// Total number of todos.
    pub total: i64,
    /// Todos with the completion flag set.
    pub completed: i64,
    /// Todos with the completion flag unset.
    pub pending: i64,
    /// Total number of notes across all todos.
    pub total_notes: i64,
}

/// Liveness payload from `GET /health`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthStatus {
    /// `"healthy"` when the database answers, `"unhealthy"` otherwise.
    pub status: String,
    /// Server version.
    pub version: String,
    /// Server-side time of the check.
    pub timestamp: DateTime<Utc>,
}

impl HealthStatus {
    /// True when the server reported itself healthy.
    pub fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }
}

/// JSON body of every non-2xx response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable error message.
    pub error: String,
}
