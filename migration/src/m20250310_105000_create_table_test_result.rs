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
                    .table(TestResult::Table)
                    .if_not_exists()
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
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TestResult::Table).to_owned())
            .await
    }
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
enum Log {
    Table,
    Id,
}
