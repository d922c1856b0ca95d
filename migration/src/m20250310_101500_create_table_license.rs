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
                    .table(License::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(License::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(License::Fullname).string().not_null())
                    .col(
                        ColumnDef::new(License::Shortname)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(License::Text).text().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-license-fullname")
                    .table(License::Table)
                    .col(License::Fullname)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(GitTreeLicense::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(GitTreeLicense::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(GitTreeLicense::GitTree).integer().not_null())
                    .col(ColumnDef::new(GitTreeLicense::License).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-git_tree_license-git_tree")
                            .from(GitTreeLicense::Table, GitTreeLicense::GitTree)
                            .to(GitTree::Table, GitTree::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-git_tree_license-license")
                            .from(GitTreeLicense::Table, GitTreeLicense::License)
                            .to(License::Table, License::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-git_tree_license-pair")
                    .table(GitTreeLicense::Table)
                    .col(GitTreeLicense::GitTree)
                    .col(GitTreeLicense::License)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(GitTreeLicense::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(License::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum License {
    Table,
    Id,
    Fullname,
    Shortname,
    Text,
}

#[derive(DeriveIden)]
enum GitTreeLicense {
    Table,
    Id,
    GitTree,
    License,
}

#[derive(DeriveIden)]
enum GitTree {
    Table,
    Id,
}
