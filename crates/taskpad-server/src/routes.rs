// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Router assembly.

use axum::Router;
use axum::http::{HeaderValue, Method, header};
use axum::routing::{get, patch};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::handlers::{self, AppState};

/// Build the application router.
///
/// API routes mount under `api_prefix`; `/health` stays at the root so
/// liveness probes work regardless of the prefix.
pub fn router(state: AppState, api_prefix: &str, cors_origins: &[String]) -> Router {
    let api = Router::new()
        .route(
            "/todos",
            get(handlers::list_todos).post(handlers::create_todo),
        )
        .route(
            "/todos/{id}",
            get(handlers::get_todo)
                .patch(handlers::update_todo)
                .delete(handlers::delete_todo),
        )
        .route(
            "/todos/{todo_id}/notes",
            get(handlers::list_notes).post(handlers::create_note),
        )
        .route(
            "/todos/{todo_id}/notes/{note_id}",
            patch(handlers::update_note).delete(handlers::delete_note),
        )
        .route("/stats", get(handlers::stats));

    // Nesting at "/" is rejected by axum; an empty prefix merges instead.
    let app = if api_prefix == "/" {
        Router::new().merge(api)
    } else {
        Router::new().nest(api_prefix, api)
    };

    app.route("/health", get(handlers::health))
        .layer(cors_layer(cors_origins))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// CORS layer for the configured browser origins.
///
/// Credentialed requests forbid the wildcard origin, so each origin is
/// listed explicitly; entries that are not valid header values are dropped.
fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(%origin, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::PATCH, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE])
        .allow_credentials(true)
}
