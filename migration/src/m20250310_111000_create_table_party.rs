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
                    .table(Party::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Party::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Party::Name)
                            .string_len(15)
                            .not_null()
                            .unique_key(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(PartyUser::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PartyUser::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(PartyUser::Party).integer().not_null())
                    .col(ColumnDef::new(PartyUser::User).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-party_user-party")
                            .from(PartyUser::Table, PartyUser::Party)
                            .to(Party::Table, Party::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-party_user-user")
                            .from(PartyUser::Table, PartyUser::User)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-party_user-pair")
                    .table(PartyUser::Table)
                    .col(PartyUser::Party)
                    .col(PartyUser::User)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PartyUser::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Party::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Party {
    Table,
    Id,
    Name,
}

#[derive(DeriveIden)]
enum PartyUser {
    Table,
    Id,
    Party,
    User,
}

#[derive(DeriveIden)]
enum User {
    Table,
    Id,
}
