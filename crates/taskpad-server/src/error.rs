// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Error types for taskpad-server.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::error;

use taskpad_api::ErrorResponse;

/// Server errors.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// Configuration loading failed.
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// Database operation failed.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Referenced todo does not exist.
    #[error("Todo not found: {0}")]
    TodoNotFound(i64),

    /// Referenced note does not exist (or belongs to another todo).
    #[error("Note not found: {0}")]
    NoteNotFound(i64),

    /// Request shape validation failed.
    #[error("Invalid request: {0}")]
    Validation(String),
}

/// Result type using the server Error.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Map a note-insert failure: a foreign-key violation means the owning
    /// todo vanished between the existence check and the insert.
    pub fn from_note_insert(err: sqlx::Error, todo_id: i64) -> Self {
        if let sqlx::Error::Database(db) = &err {
            if db.is_foreign_key_violation() {
                return Error::TodoNotFound(todo_id);
            }
        }
        Error::Database(err)
    }

    /// HTTP status for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            Error::TodoNotFound(_) | Error::NoteNotFound(_) => StatusCode::NOT_FOUND,
            Error::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Error::Config(_) | Error::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status();

        // Internal failures get a generic message; the detail goes to the log.
        let message = if status == StatusCode::INTERNAL_SERVER_ERROR {
            error!(error = %self, "request failed");
            "internal server error".to_string()
        } else {
            self.to_string()
        };

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_maps_to_404() {
        assert_eq!(Error::TodoNotFound(42).status(), StatusCode::NOT_FOUND);
        assert_eq!(Error::NoteNotFound(7).status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_validation_maps_to_422() {
        let err = Error::Validation("title must not be empty".to_string());

        assert_eq!(err.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn test_database_maps_to_500() {
        let err = Error::Database(sqlx::Error::PoolTimedOut);

        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_not_found_message_names_the_id() {
        assert_eq!(Error::TodoNotFound(42).to_string(), "Todo not found: 42");
        assert_eq!(Error::NoteNotFound(7).to_string(), "Note not found: 7");
    }

    #[test]
    fn test_plain_sqlx_error_stays_database() {
        let err = Error::from_note_insert(sqlx::Error::PoolTimedOut, 1);

        assert!(matches!(err, Error::Database(_)));
    }
}
