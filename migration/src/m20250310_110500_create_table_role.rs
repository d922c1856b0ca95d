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
                    .table(Role::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Role::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Role::Name).string_len(15).not_null())
                    .col(ColumnDef::new(Role::Scope).integer().not_null())
                    .col(ColumnDef::new(Role::ScopeId).integer().not_null())
                    .col(ColumnDef::new(Role::Permission).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-role-name")
                    .table(Role::Table)
                    .col(Role::Name)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-role-name-scope")
                    .table(Role::Table)
                    .col(Role::Name)
                    .col(Role::Scope)
                    .col(Role::ScopeId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(UserRole::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(UserRole::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(UserRole::User).integer().not_null())
                    .col(ColumnDef::new(UserRole::Role).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-user_role-user")
                            .from(UserRole::Table, UserRole::User)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-user_role-role")
                            .from(UserRole::Table, UserRole::Role)
                            .to(Role::Table, Role::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-user_role-pair")
                    .table(UserRole::Table)
                    .col(UserRole::User)
                    .col(UserRole::Role)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserRole::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Role::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Role {
    Table,
    Id,
    Name,
    Scope,
    ScopeId,
    Permission,
}

#[derive(DeriveIden)]
enum UserRole {
    Table,
    Id,
    User,
    Role,
}

#[derive(DeriveIden)]
enum User {
    Table,
    Id,
}
