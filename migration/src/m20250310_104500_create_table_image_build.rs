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
                    .table(ImageBuild::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ImageBuild::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ImageBuild::Image).integer().not_null())
                    .col(ColumnDef::new(ImageBuild::Name).text().not_null())
                    .col(ColumnDef::new(ImageBuild::Status).string_len(8).not_null())
                    .col(ColumnDef::new(ImageBuild::Log).integer().unique_key())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-image_build-image")
                            .from(ImageBuild::Table, ImageBuild::Image)
                            .to(Image::Table, Image::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-image_build-log")
                            .from(ImageBuild::Table, ImageBuild::Log)
                            .to(Log::Table, Log::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ImageBuild::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum ImageBuild {
    Table,
    Id,
    Image,
    Name,
    Status,
    Log,
}

#[derive(DeriveIden)]
enum Image {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Log {
    Table,
    Id,
}
