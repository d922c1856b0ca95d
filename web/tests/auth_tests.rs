/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

mod common;

use axum::Json;
use axum::extract::State;
use strata_core::types::*;
use password_auth::generate_hash;
use sea_orm::{DatabaseBackend, MockDatabase};
use web::endpoints::auth::*;
use web::error::WebError;

#[test]
fn test_make_login_request_serialization() {
    let request = MakeLoginRequest {
        loginname: "testuser".to_string(),
        password: "password123".to_string(),
    };

    let json = serde_json::to_string(&request).unwrap();
    assert!(json.contains("testuser"));
    assert!(json.contains("password123"));
}

#[test]
fn test_make_user_request_serialization() {
    let request = MakeUserRequest {
        username: "testuser".to_string(),
        name: "Test User".to_string(),
        email: "test@example.com".to_string(),
        password: "password123".to_string(),
    };

    let json = serde_json::to_string(&request).unwrap();
    assert!(json.contains("testuser"));
    assert!(json.contains("Test User"));
    assert!(json.contains("test@example.com"));
}

#[tokio::test]
async fn test_register_rejects_when_disabled() {
    let mut cli = common::create_mock_cli();
    cli.disable_registration = true;

    let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
    let state = std::sync::Arc::new(ServerState { db, cli });

    let result = post_register(
        State(state),
        Json(MakeUserRequest {
            username: "newuser".to_string(),
            name: "New User".to_string(),
            email: "new@example.com".to_string(),
            password: "password123".to_string(),
        }),
    )
    .await;

    assert!(matches!(result, Err(WebError::BadRequest(_))));
}

#[tokio::test]
async fn test_register_rejects_invalid_email() {
    let state = common::create_empty_state();

    let result = post_register(
        State(state),
        Json(MakeUserRequest {
            username: "newuser".to_string(),
            name: "New User".to_string(),
            email: "not-an-email".to_string(),
            password: "password123".to_string(),
        }),
    )
    .await;

    assert!(matches!(result, Err(WebError::BadRequest(_))));
}

#[tokio::test]
async fn test_register_rejects_taken_username() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![common::mock_user()]])
        .into_connection();
    let state = common::create_state(db);

    let result = post_register(
        State(state),
        Json(MakeUserRequest {
            username: "releng".to_string(),
            name: "Someone Else".to_string(),
            email: "other@example.com".to_string(),
            password: "password123".to_string(),
        }),
    )
    .await;

    assert!(matches!(result, Err(WebError::Conflict(_))));
}

#[tokio::test]
async fn test_register_creates_user() {
    let created = MUser {
        id: 2,
        username: "newuser".to_string(),
        email: "new@example.com".to_string(),
        name: "New User".to_string(),
        password_hash: generate_hash("password123"),
        created_at: *strata_core::consts::NULL_TIME,
    };

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<MUser>::new()])
        .append_query_results([vec![created]])
        .into_connection();
    let state = common::create_state(db);

    let response = post_register(
        State(state),
        Json(MakeUserRequest {
            username: "newuser".to_string(),
            name: "New User".to_string(),
            email: "new@example.com".to_string(),
            password: "password123".to_string(),
        }),
    )
    .await
    .unwrap();

    assert!(!response.0.error);
    assert_eq!(response.0.message, 2);
}

#[tokio::test]
async fn test_login_unknown_user_is_unauthorized() {
    let state = common::create_empty_state();

    let result = post_login(
        State(state),
        Json(MakeLoginRequest {
            loginname: "nobody".to_string(),
            password: "password123".to_string(),
        }),
    )
    .await;

    assert!(matches!(result, Err(WebError::Unauthorized(_))));
}

#[tokio::test]
async fn test_login_wrong_password_is_unauthorized() {
    let mut user = common::mock_user();
    user.password_hash = generate_hash("correct-password");

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![user]])
        .into_connection();
    let state = common::create_state(db);

    let result = post_login(
        State(state),
        Json(MakeLoginRequest {
            loginname: "releng".to_string(),
            password: "wrong-password".to_string(),
        }),
    )
    .await;

    assert!(matches!(result, Err(WebError::Unauthorized(_))));
}
