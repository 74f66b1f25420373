// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Taskpad UI - client state controller
//!
//! Holds the in-memory view of the server (todo list, per-todo notes,
//! selection, filter, loading flag, one error slot) independently of any
//! particular UI framework. Rendering layers read [`state::AppState`] and
//! feed user intents into [`controller::Controller`].
//!
//! # Design
//!
//! State changes go through pure transition functions: every network
//! outcome becomes a [`state::Event`] applied to the state struct, so the
//! whole lifecycle (idle → loading → success/error → idle) is testable
//! without a UI or a server.
//!
//! Mutations follow an invalidate-then-reload policy: after a successful
//! create/toggle/edit the affected collection is re-fetched from the server
//! rather than patched optimistically. The one exception is todo deletion,
//! which drops the row from the local list directly.
//!
//! Out-of-order responses are guarded by a monotonic sequence per
//! collection: a fetch completion older than the latest dispatched fetch
//! for that collection is discarded instead of overwriting newer data.

#![deny(missing_docs)]

/// Application state and its pure event transitions.
pub mod state;

/// Async controller driving the SDK and applying state events.
pub mod controller;

pub use controller::Controller;
pub use state::{AppState, Event, Filter};
