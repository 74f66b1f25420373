// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Application state and its pure event transitions.

use std::collections::HashMap;

use taskpad_api::{Note, Todo};

/// Which todos the list view shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Filter {
    /// All todos.
    #[default]
    All,
    /// Only todos with the completion flag unset.
    Active,
    /// Only todos with the completion flag set.
    Completed,
}

impl Filter {
    /// Server-side `completed` query value for this filter.
    pub fn completed(&self) -> Option<bool> {
        match self {
            Filter::All => None,
            Filter::Active => Some(false),
            Filter::Completed => Some(true),
        }
    }
}

/// A state transition.
///
/// Fetches are bracketed by a start event carrying a sequence number and a
/// loaded event carrying the same number back; the sequence is what lets
/// [`AppState::apply`] drop completions that arrive out of order.
#[derive(Debug, Clone)]
pub enum Event {
    /// A todo-list fetch was dispatched.
    TodosFetchStarted {
        /// Sequence allocated at dispatch.
        seq: u64,
    },
    /// A todo-list fetch completed.
    TodosLoaded {
        /// Sequence the fetch was dispatched with.
        seq: u64,
        /// Fresh server copy of the list.
        todos: Vec<Todo>,
    },
    /// A notes fetch was dispatched for one todo.
    NotesFetchStarted {
        /// Owning todo.
        todo_id: i64,
        /// Sequence allocated at dispatch.
        seq: u64,
    },
    /// A notes fetch completed for one todo.
    NotesLoaded {
        /// Owning todo.
        todo_id: i64,
        /// Sequence the fetch was dispatched with.
        seq: u64,
        /// Fresh server copy of the todo's notes.
        notes: Vec<Note>,
    },
    /// A todo was deleted server-side; drop it locally without a re-fetch.
    TodoRemoved {
        /// Deleted todo.
        id: i64,
    },
    /// A request failed; the message fills the single error slot.
    RequestFailed {
        /// Message to surface.
        message: String,
    },
    /// The user dismissed the error banner.
    ErrorDismissed,
    /// The user picked a different list filter.
    FilterChanged {
        /// New filter.
        filter: Filter,
    },
    /// The user selected a todo.
    TodoSelected {
        /// Selected todo.
        id: i64,
    },
}

/// In-memory view of the server plus UI session state.
#[derive(Debug, Default)]
pub struct AppState {
    todos: Vec<Todo>,
    notes: HashMap<i64, Vec<Note>>,
    selected: Option<i64>,
    filter: Filter,
    loading: bool,
    error: Option<String>,
    // Monotonic fetch sequencing; `next_seq` feeds both collections.
    next_seq: u64,
    todos_dispatch: u64,
    notes_dispatch: HashMap<i64, u64>,
}

impl AppState {
    /// Fresh state: empty lists, no selection, `All` filter, idle.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current todo list, in server order (newest first).
    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    /// Cached notes for a todo, if that todo has been selected before.
    pub fn notes(&self, todo_id: i64) -> Option<&[Note]> {
        self.notes.get(&todo_id).map(Vec::as_slice)
    }

    /// Whether a todo's notes are already cached.
    pub fn has_notes(&self, todo_id: i64) -> bool {
        self.notes.contains_key(&todo_id)
    }

    /// Currently selected todo, if any.
    pub fn selected(&self) -> Option<i64> {
        self.selected
    }

    /// Active list filter.
    pub fn filter(&self) -> Filter {
        self.filter
    }

    /// Whether a fetch is in flight.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Surfaced error message, until dismissed or overwritten.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Look up a todo in the current list.
    pub fn todo(&self, id: i64) -> Option<&Todo> {
        self.todos.iter().find(|t| t.id == id)
    }

    /// Allocate the sequence number for the next fetch dispatch.
    pub fn next_seq(&mut self) -> u64 {
        self.next_seq += 1;
        self.next_seq
    }

    /// Apply one transition.
    pub fn apply(&mut self, event: Event) {
        match event {
            Event::TodosFetchStarted { seq } => {
                self.loading = true;
                self.todos_dispatch = self.todos_dispatch.max(seq);
            }
            Event::TodosLoaded { seq, todos } => {
                // A completion older than the newest dispatch lost the race;
                // applying it would roll the list back.
                if seq < self.todos_dispatch {
                    return;
                }
                self.todos = todos;
                self.loading = false;
            }
            Event::NotesFetchStarted { todo_id, seq } => {
                self.loading = true;
                let dispatch = self.notes_dispatch.entry(todo_id).or_default();
                *dispatch = (*dispatch).max(seq);
            }
            Event::NotesLoaded {
                todo_id,
                seq,
                notes,
            } => {
                if seq < self.notes_dispatch.get(&todo_id).copied().unwrap_or(0) {
                    return;
                }
                self.notes.insert(todo_id, notes);
                self.loading = false;
            }
            Event::TodoRemoved { id } => {
                self.todos.retain(|t| t.id != id);
                self.notes.remove(&id);
                self.notes_dispatch.remove(&id);
                if self.selected == Some(id) {
                    self.selected = None;
                }
            }
            Event::RequestFailed { message } => {
                self.loading = false;
                self.error = Some(message);
            }
            Event::ErrorDismissed => {
                self.error = None;
            }
            Event::FilterChanged { filter } => {
                self.filter = filter;
            }
            Event::TodoSelected { id } => {
                self.selected = Some(id);
            }
        }
    }
}
