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
                    .table(PackageBuild::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PackageBuild::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(PackageBuild::Package).integer().not_null())
                    .col(ColumnDef::new(PackageBuild::Arch).string().not_null())
                    .col(ColumnDef::new(PackageBuild::Target).string().not_null())
                    .col(
                        ColumnDef::new(PackageBuild::Status)
                            .string_len(8)
                            .not_null(),
                    )
                    .col(ColumnDef::new(PackageBuild::Log).integer().unique_key())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-package_build-package")
                            .from(PackageBuild::Table, PackageBuild::Package)
                            .to(Package::Table, Package::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-package_build-log")
                            .from(PackageBuild::Table, PackageBuild::Log)
                            .to(Log::Table, Log::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PackageBuild::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum PackageBuild {
    Table,
    Id,
    Package,
    Arch,
    Target,
    Status,
    Log,
}

#[derive(DeriveIden)]
enum Package {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Log {
    Table,
    Id,
}
