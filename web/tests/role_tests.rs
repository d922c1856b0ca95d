/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

mod common;

use axum::extract::State;
use axum::{Extension, Json};
use strata_core::permission::Permission;
use strata_core::types::*;
use entity::role::RoleScope;
use sea_orm::{DatabaseBackend, MockDatabase};
use web::endpoints::roles::*;
use web::error::WebError;

fn manager_role_results() -> (Vec<MUserRole>, Vec<MRole>) {
    let links = vec![MUserRole {
        id: 1,
        user: 1,
        role: 9,
    }];
    let roles = vec![MRole {
        id: 9,
        name: "admin".to_string(),
        scope: RoleScope::Domain,
        scope_id: 1,
        permission: 1 << Permission::ManageRole as i64,
    }];

    (links, roles)
}

fn integrator_role(permission: i64) -> MRole {
    MRole {
        id: 4,
        name: "integrator".to_string(),
        scope: RoleScope::GitTree,
        scope_id: 9,
        permission,
    }
}

#[tokio::test]
async fn test_assign_role_requires_manage_permission() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<MUserRole>::new()])
        .into_connection();
    let state = common::create_state(db);

    let result = post_assign_role(
        State(state),
        Extension(common::mock_user()),
        Json(AssignRoleRequest {
            user: "newbie".to_string(),
            role: "integrator".to_string(),
        }),
    )
    .await;

    assert!(matches!(result, Err(WebError::Forbidden(_))));
}

#[tokio::test]
async fn test_assign_role_creates_link() {
    let (links, roles) = manager_role_results();
    let target = MUser {
        id: 2,
        username: "newbie".to_string(),
        email: "newbie@example.com".to_string(),
        name: "New Engineer".to_string(),
        password_hash: "argon2".to_string(),
        created_at: *strata_core::consts::NULL_TIME,
    };
    let created_link = MUserRole {
        id: 7,
        user: 2,
        role: 4,
    };

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([links])
        .append_query_results([roles])
        .append_query_results([vec![target]])
        .append_query_results([vec![integrator_role(0)]])
        .append_query_results([Vec::<MUserRole>::new()])
        .append_query_results([vec![created_link]])
        .into_connection();
    let state = common::create_state(db);

    let response = post_assign_role(
        State(state),
        Extension(common::mock_user()),
        Json(AssignRoleRequest {
            user: "newbie".to_string(),
            role: "integrator".to_string(),
        }),
    )
    .await
    .unwrap();

    assert!(!response.0.error);
    assert_eq!(response.0.message, "Role assigned");
}

#[tokio::test]
async fn test_assign_role_rejects_duplicate() {
    let (links, roles) = manager_role_results();
    let target = MUser {
        id: 2,
        username: "newbie".to_string(),
        email: "newbie@example.com".to_string(),
        name: "New Engineer".to_string(),
        password_hash: "argon2".to_string(),
        created_at: *strata_core::consts::NULL_TIME,
    };
    let existing_link = MUserRole {
        id: 7,
        user: 2,
        role: 4,
    };

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([links])
        .append_query_results([roles])
        .append_query_results([vec![target]])
        .append_query_results([vec![integrator_role(0)]])
        .append_query_results([vec![existing_link]])
        .into_connection();
    let state = common::create_state(db);

    let result = post_assign_role(
        State(state),
        Extension(common::mock_user()),
        Json(AssignRoleRequest {
            user: "newbie".to_string(),
            role: "integrator".to_string(),
        }),
    )
    .await;

    assert!(matches!(result, Err(WebError::Conflict(_))));
}

#[tokio::test]
async fn test_set_permission_grants_bit() {
    let (links, roles) = manager_role_results();
    let updated = integrator_role(1 << Permission::AddSubmissionGroup as i64);

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([links])
        .append_query_results([roles])
        .append_query_results([vec![integrator_role(0)]])
        .append_query_results([vec![updated]])
        .into_connection();
    let state = common::create_state(db);

    let response = post_set_permission(
        State(state),
        Extension(common::mock_user()),
        Json(SetPermissionRequest {
            role: "integrator".to_string(),
            permission: "add_submission_group".to_string(),
            value: true,
        }),
    )
    .await
    .unwrap();

    assert!(!response.0.error);
    assert_eq!(response.0.message, "Permission updated");
}

#[tokio::test]
async fn test_set_permission_rejects_unknown_name() {
    let (links, roles) = manager_role_results();

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([links])
        .append_query_results([roles])
        .into_connection();
    let state = common::create_state(db);

    let result = post_set_permission(
        State(state),
        Extension(common::mock_user()),
        Json(SetPermissionRequest {
            role: "integrator".to_string(),
            permission: "launch_rockets".to_string(),
            value: true,
        }),
    )
    .await;

    assert!(matches!(result, Err(WebError::BadRequest(_))));
}
