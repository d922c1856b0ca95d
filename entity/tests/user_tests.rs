/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Tests for user entity

use chrono::NaiveDate;
use entity::*;
use sea_orm::{DatabaseBackend, MockDatabase, entity::prelude::*};

#[tokio::test]
async fn test_user_entity_basic() -> Result<(), DbErr> {
    let naive_date = NaiveDate::from_ymd_opt(2024, 1, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![user::Model {
            id: 1,
            username: "testuser".to_owned(),
            name: "Test User".to_owned(),
            email: "test@example.com".to_owned(),
            password_hash: "hashed_password".to_owned(),
            created_at: naive_date,
        }]])
        .into_connection();

    let result = user::Entity::find_by_id(1).one(&db).await?;

    assert!(result.is_some());
    let user = result.unwrap();
    assert_eq!(user.username, "testuser");
    assert_eq!(user.email, "test@example.com");

    Ok(())
}
