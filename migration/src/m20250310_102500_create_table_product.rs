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
                    .table(Product::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Product::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Product::Name)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(Product::Short)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Product::Description).text().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ProductGitTree::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ProductGitTree::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ProductGitTree::Product).integer().not_null())
                    .col(ColumnDef::new(ProductGitTree::GitTree).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-product_git_tree-product")
                            .from(ProductGitTree::Table, ProductGitTree::Product)
                            .to(Product::Table, Product::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-product_git_tree-git_tree")
                            .from(ProductGitTree::Table, ProductGitTree::GitTree)
                            .to(GitTree::Table, GitTree::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-product_git_tree-pair")
                    .table(ProductGitTree::Table)
                    .col(ProductGitTree::Product)
                    .col(ProductGitTree::GitTree)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ProductGitTree::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Product::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Product {
    Table,
    Id,
    Name,
    Short,
    Description,
}

#[derive(DeriveIden)]
enum ProductGitTree {
    Table,
    Id,
    Product,
    GitTree,
}

#[derive(DeriveIden)]
enum GitTree {
    Table,
    Id,
}
