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
                    .table(Image::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Image::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Image::Name).string().not_null())
                    .col(ColumnDef::new(Image::Target).string().not_null())
                    .col(ColumnDef::new(Image::Arch).string().not_null())
                    .col(ColumnDef::new(Image::Product).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-image-product")
                            .from(Image::Table, Image::Product)
                            .to(Product::Table, Product::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-image-name-target-product")
                    .table(Image::Table)
                    .col(Image::Name)
                    .col(Image::Target)
                    .col(Image::Product)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Image::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Image {
    Table,
    Id,
    Name,
    Target,
    Arch,
    Product,
}

#[derive(DeriveIden)]
enum Product {
    Table,
    Id,
}
