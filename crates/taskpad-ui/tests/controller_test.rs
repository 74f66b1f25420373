// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Controller tests against a mocked server.

use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use taskpad_sdk::{SdkConfig, TaskpadClient};
use taskpad_ui::{Controller, Filter};

fn controller_for(server: &MockServer) -> Controller {
    Controller::new(TaskpadClient::new(SdkConfig::new(server.uri())).unwrap())
}

fn todo_json(id: i64, title: &str, completed: bool) -> serde_json::Value {
    json!({
        "id": id,
        "title": title,
        "description": null,
        "completed": completed,
        "created_at": "2025-06-01T10:00:00Z",
        "updated_at": "2025-06-01T10:00:00Z"
    })
}

fn note_json(id: i64, todo_id: i64, content: &str) -> serde_json::Value {
    json!({
        "id": id,
        "todo_id": todo_id,
        "content": content,
        "created_at": "2025-06-01T11:00:00Z"
    })
}

#[tokio::test]
async fn test_create_todo_reloads_the_list() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/todos"))
        .respond_with(ResponseTemplate::new(201).set_body_json(todo_json(1, "Learn X", false)))
        .expect(1)
        .mount(&server)
        .await;
    // The fresh list comes from the follow-up fetch, not the POST response.
    Mock::given(method("GET"))
        .and(path("/api/todos"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([todo_json(1, "Learn X", false)])))
        .expect(1)
        .mount(&server)
        .await;

    let mut controller = controller_for(&server);
    controller.create_todo("Learn X".to_string(), None).await;

    assert_eq!(controller.state().todos().len(), 1);
    assert!(controller.state().error().is_none());
}

#[tokio::test]
async fn test_toggle_patches_the_inverse_flag_and_reloads() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/todos"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([todo_json(1, "a", false)])))
        .expect(2)
        .mount(&server)
        .await;
    Mock::given(method("PATCH"))
        .and(path("/api/todos/1"))
        .and(body_json(json!({"completed": true})))
        .respond_with(ResponseTemplate::new(200).set_body_json(todo_json(1, "a", true)))
        .expect(1)
        .mount(&server)
        .await;

    let mut controller = controller_for(&server);
    controller.refresh_todos().await;
    controller.toggle_todo(1).await;

    assert!(controller.state().error().is_none());
}

#[tokio::test]
async fn test_toggle_of_unknown_todo_is_a_noop() {
    let server = MockServer::start().await;

    let mut controller = controller_for(&server);
    controller.toggle_todo(99).await;

    // No request went out (no mocks mounted, so any call would 404 into the
    // error slot) and the state stayed clean.
    assert!(controller.state().error().is_none());
}

#[tokio::test]
async fn test_delete_todo_updates_locally_without_refetch() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/todos"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([todo_json(1, "a", false), todo_json(2, "b", false)])),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/api/todos/1"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let mut controller = controller_for(&server);
    controller.refresh_todos().await;
    controller.delete_todo(1).await;

    // One GET only: deletion must not trigger a list re-fetch.
    assert_eq!(controller.state().todos().len(), 1);
    assert_eq!(controller.state().todos()[0].id, 2);
}

#[tokio::test]
async fn test_selection_fetches_notes_once_and_caches() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/todos/1/notes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([note_json(11, 1, "n")])))
        .expect(1)
        .mount(&server)
        .await;

    let mut controller = controller_for(&server);
    controller.select_todo(1).await;
    controller.select_todo(1).await;

    // expect(1) on the mock verifies the second selection hit the cache.
    assert_eq!(controller.state().selected(), Some(1));
    assert_eq!(controller.state().notes(1).unwrap().len(), 1);
}

#[tokio::test]
async fn test_note_mutation_invalidates_the_cache() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/todos/1/notes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([note_json(11, 1, "n")])))
        .expect(2)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/todos/1/notes"))
        .and(body_json(json!({"content": "another"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(note_json(12, 1, "another")))
        .expect(1)
        .mount(&server)
        .await;

    let mut controller = controller_for(&server);
    controller.select_todo(1).await;
    controller.add_note(1, "another".to_string()).await;

    assert!(controller.state().error().is_none());
}

#[tokio::test]
async fn test_filter_change_refetches_server_side() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/todos"))
        .and(query_param("completed", "false"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([todo_json(1, "a", false)])))
        .expect(1)
        .mount(&server)
        .await;

    let mut controller = controller_for(&server);
    controller.set_filter(Filter::Active).await;

    assert_eq!(controller.state().filter(), Filter::Active);
    assert_eq!(controller.state().todos().len(), 1);
}

#[tokio::test]
async fn test_failed_request_fills_the_error_slot() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/todos"))
        .respond_with(
            ResponseTemplate::new(500).set_body_json(json!({"error": "internal server error"})),
        )
        .mount(&server)
        .await;

    let mut controller = controller_for(&server);
    controller.refresh_todos().await;

    assert_eq!(
        controller.state().error(),
        Some("server error [500]: internal server error")
    );
    assert!(!controller.state().is_loading());

    controller.dismiss_error();
    assert!(controller.state().error().is_none());
}

#[tokio::test]
async fn test_delete_failure_keeps_the_row() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/todos"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([todo_json(1, "a", false)])))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/api/todos/1"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"error": "Todo not found: 1"})))
        .expect(1)
        .mount(&server)
        .await;

    let mut controller = controller_for(&server);
    controller.refresh_todos().await;
    controller.delete_todo(1).await;

    assert_eq!(controller.state().todos().len(), 1);
    assert_eq!(controller.state().error(), Some("not found: Todo not found: 1"));
}
