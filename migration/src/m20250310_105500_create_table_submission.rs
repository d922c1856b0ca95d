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
                    .table(Submission::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Submission::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Submission::Name).string_len(80).not_null())
                    .col(ColumnDef::new(Submission::Commit).string_len(40).not_null())
                    .col(ColumnDef::new(Submission::Comment).text().not_null())
                    .col(ColumnDef::new(Submission::Status).string_len(16).not_null())
                    .col(ColumnDef::new(Submission::Owner).integer().not_null())
                    .col(ColumnDef::new(Submission::Product).integer())
                    .col(ColumnDef::new(Submission::CreatedAt).date_time().not_null())
                    .col(ColumnDef::new(Submission::UpdatedAt).date_time().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-submission-owner")
                            .from(Submission::Table, Submission::Owner)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-submission-product")
                            .from(Submission::Table, Submission::Product)
                            .to(Product::Table, Product::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-submission-name")
                    .table(Submission::Table)
                    .col(Submission::Name)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-submission-status")
                    .table(Submission::Table)
                    .col(Submission::Status)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(SubmissionGitTree::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SubmissionGitTree::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(SubmissionGitTree::Submission)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(SubmissionGitTree::GitTree)
                            .integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-submission_git_tree-submission")
                            .from(SubmissionGitTree::Table, SubmissionGitTree::Submission)
                            .to(Submission::Table, Submission::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-submission_git_tree-git_tree")
                            .from(SubmissionGitTree::Table, SubmissionGitTree::GitTree)
                            .to(GitTree::Table, GitTree::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-submission_git_tree-pair")
                    .table(SubmissionGitTree::Table)
                    .col(SubmissionGitTree::Submission)
                    .col(SubmissionGitTree::GitTree)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(SubmissionPackageBuild::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SubmissionPackageBuild::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(SubmissionPackageBuild::Submission)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(SubmissionPackageBuild::PackageBuild)
                            .integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-submission_package_build-submission")
                            .from(
                                SubmissionPackageBuild::Table,
                                SubmissionPackageBuild::Submission,
                            )
                            .to(Submission::Table, Submission::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-submission_package_build-package_build")
                            .from(
                                SubmissionPackageBuild::Table,
                                SubmissionPackageBuild::PackageBuild,
                            )
                            .to(PackageBuild::Table, PackageBuild::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-submission_package_build-pair")
                    .table(SubmissionPackageBuild::Table)
                    .col(SubmissionPackageBuild::Submission)
                    .col(SubmissionPackageBuild::PackageBuild)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(SubmissionImageBuild::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SubmissionImageBuild::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(SubmissionImageBuild::Submission)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(SubmissionImageBuild::ImageBuild)
                            .integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-submission_image_build-submission")
                            .from(
                                SubmissionImageBuild::Table,
                                SubmissionImageBuild::Submission,
                            )
                            .to(Submission::Table, Submission::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-submission_image_build-image_build")
                            .from(
                                SubmissionImageBuild::Table,
                                SubmissionImageBuild::ImageBuild,
                            )
                            .to(ImageBuild::Table, ImageBuild::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-submission_image_build-pair")
                    .table(SubmissionImageBuild::Table)
                    .col(SubmissionImageBuild::Submission)
                    .col(SubmissionImageBuild::ImageBuild)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(SubmissionSubmitter::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SubmissionSubmitter::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(SubmissionSubmitter::Submission)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(SubmissionSubmitter::User)
                            .integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-submission_submitter-submission")
                            .from(SubmissionSubmitter::Table, SubmissionSubmitter::Submission)
                            .to(Submission::Table, Submission::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-submission_submitter-user")
                            .from(SubmissionSubmitter::Table, SubmissionSubmitter::User)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-submission_submitter-pair")
                    .table(SubmissionSubmitter::Table)
                    .col(SubmissionSubmitter::Submission)
                    .col(SubmissionSubmitter::User)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(SubmissionTestResult::Table)
                    .if_not_exists()
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

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SubmissionTestResult::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(SubmissionSubmitter::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(SubmissionImageBuild::Table).to_owned())
            .await?;
        manager
            .drop_table(
                Table::drop()
                    .table(SubmissionPackageBuild::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_table(Table::drop().table(SubmissionGitTree::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Submission::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Submission {
    Table,
    Id,
    Name,
    Commit,
    Comment,
    Status,
    Owner,
    Product,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum SubmissionGitTree {
    Table,
    Id,
    Submission,
    GitTree,
}

#[derive(DeriveIden)]
enum SubmissionPackageBuild {
    Table,
    Id,
    Submission,
    PackageBuild,
}

#[derive(DeriveIden)]
enum SubmissionImageBuild {
    Table,
    Id,
    Submission,
    ImageBuild,
}

#[derive(DeriveIden)]
enum SubmissionSubmitter {
    Table,
    Id,
    Submission,
    User,
}

#[derive(DeriveIden)]
enum SubmissionTestResult {
    Table,
    Id,
    Submission,
    TestResult,
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
enum GitTree {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum PackageBuild {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum ImageBuild {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum TestResult {
    Table,
    Id,
}
