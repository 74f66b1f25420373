// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Async controller driving the SDK and applying state events.

use tracing::debug;

use taskpad_api::{CreateNote, CreateTodo, UpdateNote, UpdateTodo};
use taskpad_sdk::TaskpadClient;

use crate::state::{AppState, Event, Filter};

/// Drives the taskpad API from user intents and folds the outcomes into
/// [`AppState`].
///
/// Every mutation re-fetches the affected collection from the server
/// (invalidate-then-reload) instead of patching locally; deleting a todo is
/// the one exception and updates the list directly. Any failure lands in
/// the state's single error slot.
pub struct Controller {
    client: TaskpadClient,
    state: AppState,
}

impl Controller {
    /// Create a controller over an SDK client with fresh state.
    pub fn new(client: TaskpadClient) -> Self {
        Self {
            client,
            state: AppState::new(),
        }
    }

    /// Read-only view of the current state, for rendering.
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Re-fetch the todo list with the active filter applied server-side.
    pub async fn refresh_todos(&mut self) {
        let seq = self.state.next_seq();
        self.state.apply(Event::TodosFetchStarted { seq });

        match self.client.list_todos(self.state.filter().completed()).await {
            Ok(todos) => self.state.apply(Event::TodosLoaded { seq, todos }),
            Err(e) => self.state.apply(Event::RequestFailed {
                message: e.to_string(),
            }),
        }
    }

    /// Switch the list filter and re-fetch with it.
    pub async fn set_filter(&mut self, filter: Filter) {
        self.state.apply(Event::FilterChanged { filter });
        self.refresh_todos().await;
    }

    /// Select a todo; fetch its notes on first selection, reuse the cache
    /// afterwards.
    pub async fn select_todo(&mut self, id: i64) {
        self.state.apply(Event::TodoSelected { id });

        if !self.state.has_notes(id) {
            self.reload_notes(id).await;
        } else {
            debug!(todo_id = id, "notes already cached");
        }
    }

    /// Create a todo, then reload the list.
    pub async fn create_todo(&mut self, title: String, description: Option<String>) {
        match self
            .client
            .create_todo(&CreateTodo { title, description })
            .await
        {
            Ok(_) => self.refresh_todos().await,
            Err(e) => self.state.apply(Event::RequestFailed {
                message: e.to_string(),
            }),
        }
    }

    /// Flip a todo's completion flag, then reload the list.
    ///
    /// No-op when the todo is not in the current list (nothing rendered to
    /// toggle).
    pub async fn toggle_todo(&mut self, id: i64) {
        let Some(completed) = self.state.todo(id).map(|t| t.completed) else {
            debug!(todo_id = id, "toggle ignored, todo not in list");
            return;
        };

        match self
            .client
            .update_todo(id, &UpdateTodo::completed(!completed))
            .await
        {
            Ok(_) => self.refresh_todos().await,
            Err(e) => self.state.apply(Event::RequestFailed {
                message: e.to_string(),
            }),
        }
    }

    /// Delete a todo and drop it from the local list without a re-fetch.
    pub async fn delete_todo(&mut self, id: i64) {
        match self.client.delete_todo(id).await {
            Ok(()) => self.state.apply(Event::TodoRemoved { id }),
            Err(e) => self.state.apply(Event::RequestFailed {
                message: e.to_string(),
            }),
        }
    }

    /// Add a note to a todo, then reload that todo's notes.
    pub async fn add_note(&mut self, todo_id: i64, content: String) {
        match self.client.create_note(todo_id, &CreateNote { content }).await {
            Ok(_) => self.reload_notes(todo_id).await,
            Err(e) => self.state.apply(Event::RequestFailed {
                message: e.to_string(),
            }),
        }
    }

    /// Replace a note's content, then reload that todo's notes.
    pub async fn edit_note(&mut self, todo_id: i64, note_id: i64, content: String) {
        match self
            .client
            .update_note(todo_id, note_id, &UpdateNote { content })
            .await
        {
            Ok(_) => self.reload_notes(todo_id).await,
            Err(e) => self.state.apply(Event::RequestFailed {
                message: e.to_string(),
            }),
        }
    }

    /// Delete a note, then reload that todo's notes.
    pub async fn remove_note(&mut self, todo_id: i64, note_id: i64) {
        match self.client.delete_note(todo_id, note_id).await {
            Ok(()) => self.reload_notes(todo_id).await,
            Err(e) => self.state.apply(Event::RequestFailed {
                message: e.to_string(),
            }),
        }
    }

    /// Clear the error banner.
    pub fn dismiss_error(&mut self) {
        self.state.apply(Event::ErrorDismissed);
    }

    async fn reload_notes(&mut self, todo_id: i64) {
        let seq = self.state.next_seq();
        self.state.apply(Event::NotesFetchStarted { todo_id, seq });

        match self.client.list_notes(todo_id).await {
            Ok(notes) => self.state.apply(Event::NotesLoaded {
                todo_id,
                seq,
                notes,
            }),
            Err(e) => self.state.apply(Event::RequestFailed {
                message: e.to_string(),
            }),
        }
    }
}
