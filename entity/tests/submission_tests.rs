/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Tests for submission and submission group entities

use chrono::NaiveDate;
use entity::*;
use sea_orm::{ColumnTrait, DatabaseBackend, MockDatabase, QueryFilter, entity::prelude::*};

fn naive_date() -> chrono::NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 1, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
}

#[tokio::test]
async fn test_submission_entity_basic() -> Result<(), DbErr> {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![submission::Model {
            id: 3,
            name: "submit/connectivity/20240101.000000".to_owned(),
            commit: "0123456789abcdef0123456789abcdef01234567".to_owned(),
            comment: "bug fix".to_owned(),
            status: "SUBMITTED".to_owned(),
            owner: 1,
            product: None,
            created_at: naive_date(),
            updated_at: naive_date(),
        }]])
        .into_connection();

    let result = submission::Entity::find()
        .filter(submission::Column::Status.eq("SUBMITTED"))
        .one(&db)
        .await?;

    assert!(result.is_some());
    let submission = result.unwrap();
    assert_eq!(submission.owner, 1);
    assert!(submission.product.is_none());

    Ok(())
}

#[tokio::test]
async fn test_submission_group_links() -> Result<(), DbErr> {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![
            submission_group_submission::Model {
                id: 1,
                submission_group: 11,
                submission: 3,
            },
            submission_group_submission::Model {
                id: 2,
                submission_group: 11,
                submission: 5,
            },
        ]])
        .into_connection();

    let links = submission_group_submission::Entity::find()
        .filter(submission_group_submission::Column::SubmissionGroup.eq(11))
        .all(&db)
        .await?;

    assert_eq!(links.len(), 2);
    assert_eq!(
        links.iter().map(|l| l.submission).collect::<Vec<_>>(),
        vec![3, 5]
    );

    Ok(())
}
