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
                    .table(GitTree::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(GitTree::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(GitTree::Gitpath)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(GitTree::Subdomain).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-git_tree-subdomain")
                            .from(GitTree::Table, GitTree::Subdomain)
                            .to(Subdomain::Table, Subdomain::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(GitTree::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum GitTree {
    Table,
    Id,
    Gitpath,
    Subdomain,
}

#[derive(DeriveIden)]
enum Subdomain {
    Table,
    Id,
}
