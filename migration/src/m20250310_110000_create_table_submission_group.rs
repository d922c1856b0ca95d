/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SubmissionGroup::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SubmissionGroup::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(SubmissionGroup::Name)
                            .string_len(80)
                            .not_null(),
                    )
                    .col(ColumnDef::new(SubmissionGroup::Author).integer().not_null())
                    .col(ColumnDef::new(SubmissionGroup::Product).integer())
                    .col(
                        ColumnDef::new(SubmissionGroup::Status)
                            .string_len(16)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(SubmissionGroup::CreatedAt)
                            .date_time()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(SubmissionGroup::UpdatedAt)
                            .date_time()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-submission_group-author")
                            .from(SubmissionGroup::Table, SubmissionGroup::Author)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-submission_group-product")
                            .from(SubmissionGroup::Table, SubmissionGroup::Product)
                            .to(Product::Table, Product::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-submission_group-name")
                    .table(SubmissionGroup::Table)
                    .col(SubmissionGroup::Name)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(SubmissionGroupSubmission::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SubmissionGroupSubmission::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(SubmissionGroupSubmission::SubmissionGroup)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(SubmissionGroupSubmission::Submission)
                            .integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-submission_group_submission-submission_group")
                            .from(
                                SubmissionGroupSubmission::Table,
                                SubmissionGroupSubmission::SubmissionGroup,
                            )
                            .to(SubmissionGroup::Table, SubmissionGroup::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-submission_group_submission-submission")
                            .from(
                                SubmissionGroupSubmission::Table,
                                SubmissionGroupSubmission::Submission,
                            )
                            .to(Submission::Table, Submission::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-submission_group_submission-pair")
                    .table(SubmissionGroupSubmission::Table)
                    .col(SubmissionGroupSubmission::SubmissionGroup)
                    .col(SubmissionGroupSubmission::Submission)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(
                Table::drop()
                    .table(SubmissionGroupSubmission::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_table(Table::drop().table(SubmissionGroup::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum SubmissionGroup {
    Table,
    Id,
    Name,
    Author,
    Product,
    Status,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
pub enum SubmissionGroupSubmission {
    Table,
    Id,
    SubmissionGroup,
    Submission,
}

#[derive(DeriveIden)]
enum User {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Product {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Submission {
    Table,
    Id,
}
