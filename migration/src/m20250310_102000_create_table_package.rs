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
                    .table(Package::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Package::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Package::Name)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(GitTreePackage::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(GitTreePackage::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(GitTreePackage::GitTree).integer().not_null())
                    .col(ColumnDef::new(GitTreePackage::Package).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-git_tree_package-git_tree")
                            .from(GitTreePackage::Table, GitTreePackage::GitTree)
                            .to(GitTree::Table, GitTree::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-git_tree_package-package")
                            .from(GitTreePackage::Table, GitTreePackage::Package)
                            .to(Package::Table, Package::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-git_tree_package-pair")
                    .table(GitTreePackage::Table)
                    .col(GitTreePackage::GitTree)
                    .col(GitTreePackage::Package)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(GitTreePackage::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Package::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Package {
    Table,
    Id,
    Name,
}

#[derive(DeriveIden)]
enum GitTreePackage {
    Table,
    Id,
    GitTree,
    Package,
}

#[derive(DeriveIden)]
enum GitTree {
    Table,
    Id,
}
