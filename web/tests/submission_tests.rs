/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

mod common;

use axum::Extension;
use axum::extract::{Form, Query, State};
use axum::http::StatusCode;
use chrono::Utc;
use strata_core::types::*;
use entity::role::RoleScope;
use http_body_util::BodyExt;
use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};
use std::sync::Arc;
use web::endpoints::submissions::*;
use web::error::WebError;

fn granting_role_results() -> (Vec<MUserRole>, Vec<MRole>) {
    let links = vec![MUserRole {
        id: 1,
        user: 1,
        role: 4,
    }];
    let roles = vec![MRole {
        id: 4,
        name: "release engineer".to_string(),
        scope: RoleScope::Domain,
        scope_id: 1,
        permission: 1 << strata_core::permission::Permission::AddSubmissionGroup as i64,
    }];

    (links, roles)
}

fn mock_product() -> MProduct {
    MProduct {
        id: 1,
        name: "Tizen".to_string(),
        short: "tizen".to_string(),
        description: "".to_string(),
    }
}

// The mock transaction log is inspected through its debug rendering; quotes
// inside the recorded SQL show up backslash-escaped there.
fn into_log_text(state: Arc<ServerState>) -> String {
    let log = Arc::into_inner(state)
        .expect("state still shared")
        .db
        .into_transaction_log();
    format!("{:?}", log)
}

#[tokio::test]
async fn test_summary_defaults_to_my_submissions() {
    let mine = common::mock_submission(3, "owned-by-me", "NEW");
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![mine.clone()]])
        .append_query_results([Vec::<MUserRole>::new()])
        .append_query_results([Vec::<MUserRole>::new()])
        .append_query_results([Vec::<MUserRole>::new()])
        .into_connection();
    let state = common::create_state(db);

    let response = summary(
        State(Arc::clone(&state)),
        Extension(common::mock_user()),
        Query(SummaryQuery { kw: None }),
    )
    .await
    .unwrap();

    assert_eq!(response.0.message.title, "My submissions");
    assert_eq!(response.0.message.results, vec![mine]);

    let log = into_log_text(state);
    assert!(log.contains(r#"\"submission\".\"owner\" = $1"#));
    assert!(log.contains(r#"ORDER BY \"submission\".\"created_at\" ASC"#));
}

#[tokio::test]
async fn test_summary_all_lists_everything() {
    let submissions = vec![
        common::mock_submission(1, "first", "NEW"),
        common::mock_submission(2, "second", "ACCEPTED"),
    ];
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([submissions.clone()])
        .into_connection();
    let state = common::create_state(db);

    let response = summary(
        State(Arc::clone(&state)),
        Extension(common::mock_user()),
        Query(SummaryQuery {
            kw: Some("all".to_string()),
        }),
    )
    .await
    .unwrap();

    assert_eq!(response.0.message.title, "All submissions");
    assert_eq!(response.0.message.results, submissions);

    let log = into_log_text(state);
    assert!(log.contains(r#"ORDER BY \"submission\".\"created_at\" ASC"#));
    assert!(!log.contains("WHERE"));
}

#[tokio::test]
async fn test_summary_search_returns_matches() {
    let matched = common::mock_submission(7, "connectivity-fix", "SUBMITTED");
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![matched.clone()]])
        .into_connection();
    let state = common::create_state(db);

    let response = summary(
        State(Arc::clone(&state)),
        Extension(common::mock_user()),
        Query(SummaryQuery {
            kw: Some("connectivity".to_string()),
        }),
    )
    .await
    .unwrap();

    assert!(!response.0.error);
    assert_eq!(response.0.message.title, "Search for \"connectivity\"");
    assert_eq!(response.0.message.results, vec![matched]);
    assert!(response.0.message.domains.is_empty());

    let log = into_log_text(state);
    assert!(log.contains(r#"\"submission\".\"name\" LIKE"#));
    assert!(log.contains(r#"\"submission\".\"commit\" LIKE"#));
    assert!(log.contains(r#"\"submission\".\"status\" ="#));
    assert!(log.contains(r#"\"git_tree\".\"gitpath\" LIKE"#));
    assert!(log.contains("%connectivity%"));
}

#[tokio::test]
async fn test_summary_search_matches_owner_by_email_prefix() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<MSubmission>::new()])
        .into_connection();
    let state = common::create_state(db);

    summary(
        State(Arc::clone(&state)),
        Extension(common::mock_user()),
        Query(SummaryQuery {
            kw: Some("releng@example".to_string()),
        }),
    )
    .await
    .unwrap();

    let log = into_log_text(state);
    assert!(log.contains(r#"\"user\".\"email\" LIKE"#));
    assert!(log.contains("releng@example%"));
    assert!(!log.contains(r#"\"user\".\"username\""#));
}

#[tokio::test]
async fn test_summary_search_escapes_like_wildcards() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<MSubmission>::new()])
        .into_connection();
    let state = common::create_state(db);

    summary(
        State(Arc::clone(&state)),
        Extension(common::mock_user()),
        Query(SummaryQuery {
            kw: Some("50%_done".to_string()),
        }),
    )
    .await
    .unwrap();

    let log = into_log_text(state);
    // The hand-built email and gitpath patterns must not treat the term's
    // wildcards as wildcards.
    assert!(log.contains(r"50\\%\\_done%"));
}

#[tokio::test]
async fn test_create_group_requires_permission() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<MUserRole>::new()])
        .into_connection();
    let state = common::create_state(db);

    let result = create_group(
        State(state),
        Extension(common::mock_user()),
        Query(CreateGroupQuery { product: None }),
    )
    .await;

    assert!(matches!(result, Err(WebError::Forbidden(_))));
}

#[tokio::test]
async fn test_create_group_default_branch_keeps_submissions_unfiltered() {
    let (links, roles) = granting_role_results();
    let open = common::mock_submission(5, "open", "OPENED");
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([links])
        .append_query_results([roles])
        .append_query_results([vec![mock_product()]])
        .append_query_results([Vec::<MProduct>::new()])
        .append_query_results([vec![open.clone()]])
        .into_connection();
    let state = common::create_state(db);

    let response = create_group(
        State(Arc::clone(&state)),
        Extension(common::mock_user()),
        Query(CreateGroupQuery { product: None }),
    )
    .await
    .unwrap();

    assert_eq!(response.0.message.selected_product.short, "tizen");
    assert_eq!(response.0.message.submissions, vec![open]);
    assert!(response.0.message.unselected_products.is_empty());

    let log = into_log_text(state);
    assert!(log.contains(r#"LOWER(\"product\".\"short\")"#));
    assert!(log.contains(r#"\"submission\".\"status\" NOT IN"#));
    assert!(log.contains("ACCEPTED"));
    assert!(log.contains("REJECTED"));
    // The default branch never narrows the submission set to the product.
    assert!(!log.contains(r#"\"submission\".\"product\""#));
}

#[tokio::test]
async fn test_create_group_explicit_product_filters_submissions() {
    let (links, roles) = granting_role_results();
    let open = common::mock_submission(5, "open", "OPENED");
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([links])
        .append_query_results([roles])
        .append_query_results([vec![mock_product()]])
        .append_query_results([Vec::<MProduct>::new()])
        .append_query_results([vec![open.clone()]])
        .into_connection();
    let state = common::create_state(db);

    let response = create_group(
        State(Arc::clone(&state)),
        Extension(common::mock_user()),
        Query(CreateGroupQuery {
            product: Some("Tizen".to_string()),
        }),
    )
    .await
    .unwrap();

    assert_eq!(response.0.message.selected_product.name, "Tizen");
    assert_eq!(response.0.message.submissions, vec![open]);

    let log = into_log_text(state);
    assert!(log.contains(r#"LOWER(\"product\".\"name\")"#));
    assert!(log.contains(r#"\"submission\".\"product\" ="#));
    assert!(log.contains(r#"\"submission\".\"status\" NOT IN"#));
}

#[tokio::test]
async fn test_create_group_ajax_rejects_empty_selection() {
    let (links, roles) = granting_role_results();
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([links])
        .append_query_results([roles])
        .into_connection();
    let state = common::create_state(db);

    let response = create_group_ajax(
        State(state),
        Extension(common::mock_user()),
        Form(CreateGroupForm {
            submissions: "".to_string(),
        }),
    )
    .await
    .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let payload: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(payload["error"], "Select submissions to group");
}

#[tokio::test]
async fn test_create_group_ajax_creates_group_with_links() {
    let (links, roles) = granting_role_results();
    let selected = vec![
        common::mock_submission(3, "first", "OPENED"),
        common::mock_submission(5, "second", "SUBMITTED"),
    ];
    let now = Utc::now().naive_utc();
    let group = MSubmissionGroup {
        id: 11,
        name: format!(
            "submit/tizen/{}",
            Utc::now().format(strata_core::consts::GROUP_NAME_TIME_FORMAT)
        ),
        author: 1,
        product: Some(1),
        status: "NEW".to_string(),
        created_at: now,
        updated_at: now,
    };

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([links])
        .append_query_results([roles])
        .append_query_results([selected])
        .append_query_results([vec![mock_product()]])
        .append_query_results([vec![group]])
        .append_exec_results([MockExecResult {
            last_insert_id: 2,
            rows_affected: 2,
        }])
        .into_connection();
    let state = common::create_state(db);

    let response = create_group_ajax(
        State(state),
        Extension(common::mock_user()),
        Form(CreateGroupForm {
            submissions: "3,5,abc,".to_string(),
        }),
    )
    .await
    .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let payload: SubmissionGroupResponse = serde_json::from_slice(&body).unwrap();
    assert_eq!(payload.id, 11);
    assert!(payload.name.starts_with("submit/tizen/"));
    assert_eq!(payload.status, "NEW");
    assert_eq!(payload.submissions, vec![3, 5]);
}

#[tokio::test]
async fn test_index_counts_open_work() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![count_row(4)]])
        .append_query_results([vec![count_row(2)]])
        .into_connection();
    let state = common::create_state(db);

    let response = index(State(state), Extension(common::mock_user()))
        .await
        .unwrap();

    assert_eq!(response.0.message.open_submissions, 4);
    assert_eq!(response.0.message.submission_groups, 2);
}

fn count_row(n: i64) -> std::collections::BTreeMap<&'static str, sea_orm::Value> {
    let mut row = std::collections::BTreeMap::new();
    row.insert("num_items", sea_orm::Value::BigInt(Some(n)));
    row
}
