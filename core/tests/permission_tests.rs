/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use entity::role::RoleScope;
use sea_orm::{DatabaseBackend, MockDatabase};
use std::sync::Arc;
use strata_core::permission::*;
use strata_core::types::*;

fn mock_cli() -> Cli {
    Cli {
        log_level: "info".to_string(),
        ip: "127.0.0.1".to_string(),
        port: 3000,
        serve_url: "http://127.0.0.1:8000".to_string(),
        database_url: Some("mock://test".to_string()),
        database_url_file: None,
        jwt_secret_file: "test_jwt".to_string(),
        disable_registration: false,
    }
}

fn mock_user() -> MUser {
    MUser {
        id: 1,
        username: "releng".to_string(),
        email: "releng@example.com".to_string(),
        name: "Release Engineer".to_string(),
        password_hash: "argon2".to_string(),
        created_at: *strata_core::consts::NULL_TIME,
    }
}

#[tokio::test]
async fn test_has_permission_without_roles() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<MUserRole>::new()])
        .into_connection();
    let state = Arc::new(ServerState {
        db,
        cli: mock_cli(),
    });

    let allowed = has_permission(state, &mock_user(), Permission::AddSubmissionGroup)
        .await
        .unwrap();
    assert!(!allowed);
}

#[tokio::test]
async fn test_has_permission_with_granting_role() {
    let link = MUserRole {
        id: 1,
        user: 1,
        role: 4,
    };
    let role = MRole {
        id: 4,
        name: "integrator".to_string(),
        scope: RoleScope::GitTree,
        scope_id: 9,
        permission: 1 << Permission::AddSubmissionGroup as i64,
    };

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![link]])
        .append_query_results([vec![role]])
        .into_connection();
    let state = Arc::new(ServerState {
        db,
        cli: mock_cli(),
    });

    let allowed = has_permission(state, &mock_user(), Permission::AddSubmissionGroup)
        .await
        .unwrap();
    assert!(allowed);
}

#[tokio::test]
async fn test_set_permission_persists_new_bit() {
    let role = MRole {
        id: 4,
        name: "integrator".to_string(),
        scope: RoleScope::GitTree,
        scope_id: 9,
        permission: 0,
    };
    let updated = MRole {
        permission: 1 << Permission::AddSubmissionGroup as i64,
        ..role.clone()
    };

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![updated]])
        .into_connection();
    let state = Arc::new(ServerState {
        db,
        cli: mock_cli(),
    });

    set_permission(state, role, Permission::AddSubmissionGroup, true)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_set_permission_skips_noop_write() {
    let role = MRole {
        id: 4,
        name: "integrator".to_string(),
        scope: RoleScope::GitTree,
        scope_id: 9,
        permission: 1 << Permission::AddSubmissionGroup as i64,
    };

    // No results are queued; any write would fail the mock.
    let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
    let state = Arc::new(ServerState {
        db,
        cli: mock_cli(),
    });

    set_permission(state, role, Permission::AddSubmissionGroup, true)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_get_git_tree_roles_filters_scope() {
    let links = vec![
        MUserRole {
            id: 1,
            user: 1,
            role: 4,
        },
        MUserRole {
            id: 2,
            user: 1,
            role: 5,
        },
    ];
    let roles = vec![
        MRole {
            id: 4,
            name: "integrator".to_string(),
            scope: RoleScope::GitTree,
            scope_id: 9,
            permission: 0,
        },
        MRole {
            id: 5,
            name: "architect".to_string(),
            scope: RoleScope::Domain,
            scope_id: 2,
            permission: 0,
        },
    ];
    let trees = vec![MGitTree {
        id: 9,
        gitpath: "platform/core/connectivity".to_string(),
        subdomain: 3,
    }];

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([links])
        .append_query_results([roles])
        .append_query_results([trees.clone()])
        .into_connection();
    let state = Arc::new(ServerState {
        db,
        cli: mock_cli(),
    });

    let result = get_git_tree_roles(state, &mock_user()).await.unwrap();
    assert_eq!(result, trees);
}
