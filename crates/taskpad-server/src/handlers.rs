// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! HTTP route handlers.
//!
//! Each handler validates the request shape, runs the corresponding [`crate::db`]
//! operation, and maps the outcome to a status code and JSON body. All state
//! lives in the database; [`AppState`] only carries the pool and static
//! server metadata.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use chrono::Utc;
use serde::Deserialize;
use sqlx::PgPool;
use tracing::debug;

use taskpad_api::{
    CreateNote, CreateTodo, HealthStatus, Note, Todo, TodoStats, UpdateNote, UpdateTodo,
};

use crate::db;
use crate::error::{Error, Result};

/// Shared state for route handlers.
#[derive(Clone)]
pub struct AppState {
    /// PostgreSQL connection pool.
    pub pool: PgPool,
    /// Server version string.
    pub version: String,
}

impl AppState {
    /// Create handler state around a connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// Reject an empty or whitespace-only value for a required text field.
fn require_non_empty(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(Error::Validation(format!("{field} must not be empty")));
    }
    Ok(())
}

// ============================================================================
// Todos
// ============================================================================

/// Query parameters for the todo listing.
#[derive(Debug, Deserialize)]
pub struct ListTodosQuery {
    /// Restrict to one completion state; absent means all todos.
    pub completed: Option<bool>,
}

/// `GET /todos[?completed=bool]`
pub async fn list_todos(
    State(state): State<AppState>,
    Query(query): Query<ListTodosQuery>,
) -> Result<Json<Vec<Todo>>> {
    let rows = db::list_todos(&state.pool, query.completed).await?;

    Ok(Json(rows.into_iter().map(Todo::from).collect()))
}

/// `GET /todos/{id}`
pub async fn get_todo(State(state): State<AppState>, Path(id): Path<i64>) -> Result<Json<Todo>> {
    let row = db::get_todo(&state.pool, id)
        .await?
        .ok_or(Error::TodoNotFound(id))?;

    Ok(Json(row.into()))
}

/// `POST /todos`
pub async fn create_todo(
    State(state): State<AppState>,
    Json(body): Json<CreateTodo>,
) -> Result<(StatusCode, Json<Todo>)> {
    require_non_empty("title", &body.title)?;

    let row = db::insert_todo(&state.pool, &body.title, body.description.as_deref()).await?;
    debug!(id = row.id, "created todo");

    Ok((StatusCode::CREATED, Json(row.into())))
}

/// `PATCH /todos/{id}`
pub async fn update_todo(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(body): Json<UpdateTodo>,
) -> Result<Json<Todo>> {
    if let Some(title) = &body.title {
        require_non_empty("title", title)?;
    }

    let row = db::update_todo(
        &state.pool,
        id,
        body.title.as_deref(),
        body.description.as_deref(),
        body.completed,
    )
    .await?
    .ok_or(Error::TodoNotFound(id))?;

    Ok(Json(row.into()))
}

/// `DELETE /todos/{id}`
pub async fn delete_todo(State(state): State<AppState>, Path(id): Path<i64>) -> Result<StatusCode> {
    if !db::delete_todo(&state.pool, id).await? {
        return Err(Error::TodoNotFound(id));
    }
    debug!(id, "deleted todo");

    Ok(StatusCode::NO_CONTENT)
}

// ============================================================================
// Notes
// ============================================================================

/// `GET /todos/{todo_id}/notes`
pub async fn list_notes(
    State(state): State<AppState>,
    Path(todo_id): Path<i64>,
) -> Result<Json<Vec<Note>>> {
    if !db::todo_exists(&state.pool, todo_id).await? {
        return Err(Error::TodoNotFound(todo_id));
    }

    let rows = db::list_notes(&state.pool, todo_id).await?;

    Ok(Json(rows.into_iter().map(Note::from).collect()))
}

/// `POST /todos/{todo_id}/notes`
pub async fn create_note(
    State(state): State<AppState>,
    Path(todo_id): Path<i64>,
    Json(body): Json<CreateNote>,
) -> Result<(StatusCode, Json<Note>)> {
    require_non_empty("content", &body.content)?;

    if !db::todo_exists(&state.pool, todo_id).await? {
        return Err(Error::TodoNotFound(todo_id));
    }

    let row = db::insert_note(&state.pool, todo_id, &body.content)
        .await
        .map_err(|e| Error::from_note_insert(e, todo_id))?;
    debug!(id = row.id, todo_id, "created note");

    Ok((StatusCode::CREATED, Json(row.into())))
}

/// `PATCH /todos/{todo_id}/notes/{note_id}`
pub async fn update_note(
    State(state): State<AppState>,
    Path((todo_id, note_id)): Path<(i64, i64)>,
    Json(body): Json<UpdateNote>,
) -> Result<Json<Note>> {
    require_non_empty("content", &body.content)?;

    let row = db::update_note(&state.pool, todo_id, note_id, &body.content)
        .await?
        .ok_or(Error::NoteNotFound(note_id))?;

    Ok(Json(row.into()))
}

/// `DELETE /todos/{todo_id}/notes/{note_id}`
pub async fn delete_note(
    State(state): State<AppState>,
    Path((todo_id, note_id)): Path<(i64, i64)>,
) -> Result<StatusCode> {
    if !db::delete_note(&state.pool, todo_id, note_id).await? {
        return Err(Error::NoteNotFound(note_id));
    }

    Ok(StatusCode::NO_CONTENT)
}

// ============================================================================
// Stats & Health
// ============================================================================

/// `GET /stats`
pub async fn stats(State(state): State<AppState>) -> Result<Json<TodoStats>> {
    let row = db::todo_stats(&state.pool).await?;

    Ok(Json(row.into()))
}

/// `GET /health`
///
/// Always answers 200; the payload reports whether the database responded.
pub async fn health(State(state): State<AppState>) -> Json<HealthStatus> {
    let db_healthy = db::health_check(&state.pool).await.unwrap_or(false);
    let status = if db_healthy { "healthy" } else { "unhealthy" };

    Json(HealthStatus {
        status: status.to_string(),
        version: state.version.clone(),
        timestamp: Utc::now(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_non_empty_rejects_blank() {
        assert!(require_non_empty("title", "").is_err());
        assert!(require_non_empty("title", "   ").is_err());
        assert!(require_non_empty("title", "Learn X").is_ok());
    }

    #[test]
    fn test_require_non_empty_message_names_field() {
        let err = require_non_empty("content", "").unwrap_err();

        assert_eq!(err.to_string(), "Invalid request: content must not be empty");
    }
}
