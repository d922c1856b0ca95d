/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use strata_core::types::*;
use sea_orm::{DatabaseBackend, DatabaseConnection, MockDatabase};
use std::sync::Arc;

pub fn create_mock_cli() -> Cli {
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

pub fn create_state(db: DatabaseConnection) -> Arc<ServerState> {
    Arc::new(ServerState {
        db,
        cli: create_mock_cli(),
    })
}

pub fn create_empty_state() -> Arc<ServerState> {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<MUser>::new()])
        .into_connection();

    create_state(db)
}

pub fn mock_user() -> MUser {
    MUser {
        id: 1,
        username: "releng".to_string(),
        email: "releng@example.com".to_string(),
        name: "Release Engineer".to_string(),
        password_hash: "argon2".to_string(),
        created_at: *strata_core::consts::NULL_TIME,
    }
}

pub fn mock_submission(id: i32, name: &str, status: &str) -> MSubmission {
    MSubmission {
        id,
        name: name.to_string(),
        commit: "0123456789abcdef0123456789abcdef01234567".to_string(),
        comment: "".to_string(),
        status: status.to_string(),
        owner: 1,
        product: None,
        created_at: *strata_core::consts::NULL_TIME,
        updated_at: *strata_core::consts::NULL_TIME,
    }
}
