// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! TaskpadClient for interacting with taskpad-server.

use std::time::Duration;

use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};
use url::Url;

use taskpad_api::{
    CreateNote, CreateTodo, ErrorResponse, HealthStatus, Note, Todo, TodoStats, UpdateNote,
    UpdateTodo,
};

use crate::config::SdkConfig;
use crate::error::{Result, SdkError};

/// High-level client for the taskpad HTTP API.
///
/// One method per route; non-2xx responses are decoded into [`SdkError`]
/// so callers work with typed outcomes only.
pub struct TaskpadClient {
    http: reqwest::Client,
    api_root: String,
    health_url: String,
}

impl TaskpadClient {
    /// Create a new client with the given configuration.
    pub fn new(config: SdkConfig) -> Result<Self> {
        // Validate early so a bad base URL fails at construction, not per call.
        let base = Url::parse(&config.base_url).map_err(SdkError::from)?;

        let http = reqwest::Client::builder()
            .connect_timeout(Duration::from_millis(config.connect_timeout_ms))
            .timeout(Duration::from_millis(config.request_timeout_ms))
            .build()
            .map_err(|e| SdkError::Config(e.to_string()))?;

        let health_url = format!("{}/health", config.base_url.trim_end_matches('/'));

        debug!(base = %base, "created taskpad client");

        Ok(Self {
            http,
            api_root: config.api_root(),
            health_url,
        })
    }

    /// Create a client from environment variables.
    pub fn from_env() -> Result<Self> {
        Self::new(SdkConfig::from_env())
    }

    /// Create a client for localhost development.
    pub fn localhost() -> Result<Self> {
        Self::new(SdkConfig::localhost())
    }

    // =========================================================================
    // Internal helpers
    // =========================================================================

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.api_root, path)
    }

    /// Decode a response body, or map a non-2xx status to an error.
    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
        let status = response.status();
        if status.is_success() {
            return Ok(response.json().await?);
        }
        Err(Self::error_for(status, response).await)
    }

    /// Check a response for success, discarding any body (204 routes).
    async fn expect_no_content(response: Response) -> Result<()> {
        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        Err(Self::error_for(status, response).await)
    }

    async fn error_for(status: StatusCode, response: Response) -> SdkError {
        let message = response
            .json::<ErrorResponse>()
            .await
            .map(|body| body.error)
            .unwrap_or_else(|_| status.to_string());

        match status {
            StatusCode::NOT_FOUND => SdkError::NotFound(message),
            StatusCode::UNPROCESSABLE_ENTITY => SdkError::Validation(message),
            _ => SdkError::Server {
                status: status.as_u16(),
                message,
            },
        }
    }

    // =========================================================================
    // Health & Stats
    // =========================================================================

    /// Check server health.
    #[instrument(skip(self))]
    pub async fn health(&self) -> Result<HealthStatus> {
        let response = self.http.get(self.health_url.as_str()).send().await?;

        Self::decode(response).await
    }

    /// Fetch aggregate counts.
    #[instrument(skip(self))]
    pub async fn stats(&self) -> Result<TodoStats> {
        let response = self.http.get(self.url("stats")).send().await?;

        Self::decode(response).await
    }

    // =========================================================================
    // Todos
    // =========================================================================

    /// List todos, newest first, optionally filtered by completion flag.
    #[instrument(skip(self))]
    pub async fn list_todos(&self, completed: Option<bool>) -> Result<Vec<Todo>> {
        let mut request = self.http.get(self.url("todos"));
        if let Some(completed) = completed {
            request = request.query(&[("completed", completed)]);
        }

        Self::decode(request.send().await?).await
    }

    /// Fetch one todo by id.
    #[instrument(skip(self))]
    pub async fn get_todo(&self, id: i64) -> Result<Todo> {
        let response = self.http.get(self.url(&format!("todos/{id}"))).send().await?;

        Self::decode(response).await
    }

    /// Create a todo.
    #[instrument(skip(self, body), fields(title = %body.title))]
    pub async fn create_todo(&self, body: &CreateTodo) -> Result<Todo> {
        let response = self.http.post(self.url("todos")).json(body).send().await?;

        Self::decode(response).await
    }

    /// Partially update a todo; only supplied fields change.
    #[instrument(skip(self, patch))]
    pub async fn update_todo(&self, id: i64, patch: &UpdateTodo) -> Result<Todo> {
        let response = self
            .http
            .patch(self.url(&format!("todos/{id}")))
            .json(patch)
            .send()
            .await?;

        Self::decode(response).await
    }

    /// Delete a todo; its notes are removed by cascade.
    #[instrument(skip(self))]
    pub async fn delete_todo(&self, id: i64) -> Result<()> {
        let response = self
            .http
            .delete(self.url(&format!("todos/{id}")))
            .send()
            .await?;

        Self::expect_no_content(response).await
    }

    // =========================================================================
    // Notes
    // =========================================================================

    /// List a todo's notes, oldest first.
    #[instrument(skip(self))]
    pub async fn list_notes(&self, todo_id: i64) -> Result<Vec<Note>> {
        let response = self
            .http
            .get(self.url(&format!("todos/{todo_id}/notes")))
            .send()
            .await?;

        Self::decode(response).await
    }

    /// Create a note under a todo.
    #[instrument(skip(self, body))]
    pub async fn create_note(&self, todo_id: i64, body: &CreateNote) -> Result<Note> {
        let response = self
            .http
            .post(self.url(&format!("todos/{todo_id}/notes")))
            .json(body)
            .send()
            .await?;

        Self::decode(response).await
    }

    /// Replace a note's content.
    #[instrument(skip(self, body))]
    pub async fn update_note(&self, todo_id: i64, note_id: i64, body: &UpdateNote) -> Result<Note> {
        let response = self
            .http
            .patch(self.url(&format!("todos/{todo_id}/notes/{note_id}")))
            .json(body)
            .send()
            .await?;

        Self::decode(response).await
    }

    /// Delete a note.
    #[instrument(skip(self))]
    pub async fn delete_note(&self, todo_id: i64, note_id: i64) -> Result<()> {
        let response = self
            .http
            .delete(self.url(&format!("todos/{todo_id}/notes/{note_id}")))
            .send()
            .await?;

        Self::expect_no_content(response).await
    }
}
