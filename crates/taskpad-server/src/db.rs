// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Database operations for taskpad-server.
//!
//! Two tables: `todos` and `notes`, with `notes.todo_id` cascading on todo
//! deletion. Every operation is a single parameterized statement over a
//! pooled connection; row-level consistency comes from the database, and the
//! cascade delete is the only multi-row guarantee (engine-level, not
//! application-level).

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use taskpad_api::{Note, Todo, TodoStats};

/// Todo record from the database.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct TodoRow {
    /// Server-assigned identifier (BIGSERIAL, monotonic).
    pub id: i64,
    /// Short title.
    pub title: String,
    /// Optional free-text description.
    pub description: Option<String>,
    /// Completion flag.
    pub completed: bool,
    /// When the todo was created.
    pub created_at: DateTime<Utc>,
    /// When the todo was last modified. Never earlier than `created_at`.
    pub updated_at: DateTime<Utc>,
}

/// Note record from the database.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct NoteRow {
    /// Server-assigned identifier.
    pub id: i64,
    /// Identifier of the owning todo.
    pub todo_id: i64,
    /// Note text.
    pub content: String,
    /// When the note was created.
    pub created_at: DateTime<Utc>,
}

/// Aggregate counts over todos and notes.
#[derive(Debug, Clone, Copy, sqlx::FromRow)]
pub struct StatsRow {
    /// Total number of todos.
    pub total: i64,
    /// Todos with the completion flag set.
    pub completed: i64,
    /// Todos with the completion flag unset.
    pub pending: i64,
    /// Total number of notes across all todos.
    pub total_notes: i64,
}

impl From<TodoRow> for Todo {
    fn from(row: TodoRow) -> Self {
        Todo {
            id: row.id,
            title: row.title,
            description: row.description,
            completed: row.completed,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

impl From<NoteRow> for Note {
    fn from(row: NoteRow) -> Self {
        Note {
            id: row.id,
            todo_id: row.todo_id,
            content: row.content,
            created_at: row.created_at,
        }
    }
}

impl From<StatsRow> for TodoStats {
    fn from(row: StatsRow) -> Self {
        TodoStats {
            total: row.total,
            completed: row.completed,
            pending: row.pending,
            total_notes: row.total_notes,
        }
    }
}

/// List todos, optionally filtered by completion flag, newest first.
///
/// The `id` tiebreak keeps the order total when timestamps collide.
pub async fn list_todos(
    pool: &PgPool,
    completed: Option<bool>,
) -> Result<Vec<TodoRow>, sqlx::Error> {
    sqlx::query_as::<_, TodoRow>(
        r#"
        SELECT id, title, description, completed, created_at, updated_at
        FROM todos
        WHERE ($1::BOOLEAN IS NULL OR completed = $1)
        ORDER BY created_at DESC, id DESC
        "#,
    )
    .bind(completed)
    .fetch_all(pool)
    .await
}

/// Get a todo by id.
pub async fn get_todo(pool: &PgPool, id: i64) -> Result<Option<TodoRow>, sqlx::Error> {
    sqlx::query_as::<_, TodoRow>(
        r#"
        SELECT id, title, description, completed, created_at, updated_at
        FROM todos
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// Check whether a todo exists.
pub async fn todo_exists(pool: &PgPool, id: i64) -> Result<bool, sqlx::Error> {
    sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM todos WHERE id = $1)")
        .bind(id)
        .fetch_one(pool)
        .await
}

/// Insert a todo and return the created row.
pub async fn insert_todo(
    pool: &PgPool,
    title: &str,
    description: Option<&str>,
) -> Result<TodoRow, sqlx::Error> {
    sqlx::query_as::<_, TodoRow>(
        r#"
        INSERT INTO todos (title, description)
        VALUES ($1, $2)
        RETURNING id, title, description, completed, created_at, updated_at
        "#,
    )
    .bind(title)
    .bind(description)
    .fetch_one(pool)
    .await
}

/// Partially update a todo; unsupplied fields keep their value.
///
/// `updated_at` is refreshed on every call, including an empty patch.
/// Returns `None` when the id is absent.
pub async fn update_todo(
    pool: &PgPool,
    id: i64,
    title: Option<&str>,
    description: Option<&str>,
    completed: Option<bool>,
) -> Result<Option<TodoRow>, sqlx::Error> {
    sqlx::query_as::<_, TodoRow>(
        r#"
        UPDATE todos
        SET title = COALESCE($2, title),
            description = COALESCE($3, description),
            completed = COALESCE($4, completed),
            updated_at = NOW()
        WHERE id = $1
        RETURNING id, title, description, completed, created_at, updated_at
        "#,
    )
    .bind(id)
    .bind(title)
    .bind(description)
    .bind(completed)
    .fetch_optional(pool)
    .await
}

/// Delete a todo by id. Notes cascade at the engine level.
///
/// Returns false when the id is absent.
pub async fn delete_todo(pool: &PgPool, id: i64) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM todos WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

/// List a todo's notes, oldest first.
pub async fn list_notes(pool: &PgPool, todo_id: i64) -> Result<Vec<NoteRow>, sqlx::Error> {
    sqlx::query_as::<_, NoteRow>(
        r#"
        SELECT id, todo_id, content, created_at
        FROM notes
        WHERE todo_id = $1
        ORDER BY created_at ASC, id ASC
        "#,
    )
    .bind(todo_id)
    .fetch_all(pool)
    .await
}

/// Insert a note under a todo and return the created row.
///
/// Fails with a foreign-key violation when the todo does not exist.
pub async fn insert_note(
    pool: &PgPool,
    todo_id: i64,
    content: &str,
) -> Result<NoteRow, sqlx::Error> {
    sqlx::query_as::<_, NoteRow>(
        r#"
        INSERT INTO notes (todo_id, content)
        VALUES ($1, $2)
        RETURNING id, todo_id, content, created_at
        "#,
    )
    .bind(todo_id)
    .bind(content)
    .fetch_one(pool)
    .await
}

/// Replace a note's content, scoped to its owning todo.
///
/// Returns `None` when the note does not exist or belongs to another todo.
pub async fn update_note(
    pool: &PgPool,
    todo_id: i64,
    note_id: i64,
    content: &str,
) -> Result<Option<NoteRow>, sqlx::Error> {
    sqlx::query_as::<_, NoteRow>(
        r#"
        UPDATE notes
        SET content = $3
        WHERE id = $2 AND todo_id = $1
        RETURNING id, todo_id, content, created_at
        "#,
    )
    .bind(todo_id)
    .bind(note_id)
    .bind(content)
    .fetch_optional(pool)
    .await
}

/// Delete a note by id, scoped to its owning todo.
///
/// Returns false when the note does not exist or belongs to another todo.
pub async fn delete_note(pool: &PgPool, todo_id: i64, note_id: i64) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM notes WHERE id = $2 AND todo_id = $1")
        .bind(todo_id)
        .bind(note_id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

/// Compute aggregate counts in one statement.
pub async fn todo_stats(pool: &PgPool) -> Result<StatsRow, sqlx::Error> {
    sqlx::query_as::<_, StatsRow>(
        r#"
        SELECT COUNT(*) AS total,
               COUNT(*) FILTER (WHERE completed) AS completed,
               COUNT(*) FILTER (WHERE NOT completed) AS pending,
               (SELECT COUNT(*) FROM notes) AS total_notes
        FROM todos
        "#,
    )
    .fetch_one(pool)
    .await
}

/// Health check for database connectivity.
pub async fn health_check(pool: &PgPool) -> Result<bool, sqlx::Error> {
    sqlx::query_scalar::<_, i32>("SELECT 1")
        .fetch_one(pool)
        .await
        .map(|_| true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_row() -> TodoRow {
        TodoRow {
            id: 1,
            title: "Learn X".to_string(),
            description: None,
            completed: false,
            created_at: Utc.with_ymd_and_hms(2025, 6, 1, 10, 0, 0).unwrap(),
            updated_at: Utc.with_ymd_and_hms(2025, 6, 1, 10, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_todo_row_into_api_type() {
        let todo: Todo = sample_row().into();

        assert_eq!(todo.id, 1);
        assert_eq!(todo.title, "Learn X");
        assert!(!todo.completed);
        assert_eq!(todo.created_at, todo.updated_at);
    }

    #[test]
    fn test_note_row_into_api_type() {
        let note: Note = NoteRow {
            id: 3,
            todo_id: 1,
            content: "remember the edge case".to_string(),
            created_at: Utc.with_ymd_and_hms(2025, 6, 1, 11, 0, 0).unwrap(),
        }
        .into();

        assert_eq!(note.id, 3);
        assert_eq!(note.todo_id, 1);
        assert_eq!(note.content, "remember the edge case");
    }

    #[test]
    fn test_stats_row_into_api_type() {
        let stats: TodoStats = StatsRow {
            total: 3,
            completed: 2,
            pending: 1,
            total_notes: 5,
        }
        .into();

        assert_eq!(stats.total, stats.completed + stats.pending);
        assert_eq!(stats.total_notes, 5);
    }
}
