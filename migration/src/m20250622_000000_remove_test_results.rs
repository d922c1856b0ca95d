/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Retires the test-result and log tracking tables. Build logs moved to the
//! external log store, so the `log` table and the log references on
//! package/image builds go away, together with `test_result` and the first
//! generation of `submission_group`. Rows in the dropped tables are lost;
//! this is a one-way cleanup. Groups come back in the following migration.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Link tables and referencing columns first, referenced tables last.
        manager
            .drop_table(Table::drop().table(SubmissionTestResult::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(TestResult::Table).to_owned())
            .await?;

        manager
            .alter_table(
                Table::alter()
                    .table(PackageBuild::Table)
                    .drop_column(PackageBuild::Log)
                    .to_owned(),
            )
            .await?;

        manager
            .alter_table(
                Table::alter()
                    .table(ImageBuild::Table)
                    .drop_column(ImageBuild::Log)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(
                Table::drop()
                    .table(SubmissionGroupSubmission::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(SubmissionGroup::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Log::Table).to_owned())
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Log::Table)
                    .col(
                        ColumnDef::new(Log::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Log::Url).string().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(SubmissionGroup::Table)
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
            .await?;

        manager
            .alter_table(
                Table::alter()
                    .table(ImageBuild::Table)
                    .add_column(ColumnDef::new(ImageBuild::Log).integer().unique_key())
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name("fk-image_build-log")
                    .from(ImageBuild::Table, ImageBuild::Log)
                    .to(Log::Table, Log::Id)
                    .on_delete(ForeignKeyAction::SetNull)
                    .to_owned(),
            )
            .await?;

        manager
            .alter_table(
                Table::alter()
                    .table(PackageBuild::Table)
                    .add_column(ColumnDef::new(PackageBuild::Log).integer().unique_key())
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name("fk-package_build-log")
                    .from(PackageBuild::Table, PackageBuild::Log)
                    .to(Log::Table, Log::Id)
                    .on_delete(ForeignKeyAction::SetNull)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(TestResult::Table)
                    .col(
                        ColumnDef::new(TestResult::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(TestResult::Name).text().not_null())
                    .col(
                        ColumnDef::new(TestResult::Status)
                            .string_len(16)
                            .not_null(),
                    )
                    .col(ColumnDef::new(TestResult::Log).integer().unique_key())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-test_result-log")
                            .from(TestResult::Table, TestResult::Log)
                            .to(Log::Table, Log::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(SubmissionTestResult::Table)
                    .col(
                        ColumnDef::new(SubmissionTestResult::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(SubmissionTestResult::Submission)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(SubmissionTestResult::TestResult)
                            .integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-submission_test_result-submission")
                            .from(
                                SubmissionTestResult::Table,
                                SubmissionTestResult::Submission,
                            )
                            .to(Submission::Table, Submission::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-submission_test_result-test_result")
                            .from(
                                SubmissionTestResult::Table,
                                SubmissionTestResult::TestResult,
                            )
                            .to(TestResult::Table, TestResult::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-submission_test_result-pair")
                    .table(SubmissionTestResult::Table)
                    .col(SubmissionTestResult::Submission)
                    .col(SubmissionTestResult::TestResult)
                    .unique()
                    .to_owned(),
            )
            .await
    }
}

#[derive(DeriveIden)]
enum Log {
    Table,
    Id,
    Url,
}

#[derive(DeriveIden)]
enum TestResult {
    Table,
    Id,
    Name,
    Status,
    Log,
}

#[derive(DeriveIden)]
enum SubmissionTestResult {
    Table,
    Id,
    Submission,
    TestResult,
}

#[derive(DeriveIden)]
enum SubmissionGroup {
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
enum SubmissionGroupSubmission {
    Table,
    Id,
    SubmissionGroup,
    Submission,
}

#[derive(DeriveIden)]
enum PackageBuild {
    Table,
    Log,
}

#[derive(DeriveIden)]
enum ImageBuild {
    Table,
    Log,
}

#[derive(DeriveIden)]
enum Submission {
    Table,
    Id,
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
