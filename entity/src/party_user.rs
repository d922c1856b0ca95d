/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Deserialize, Serialize)]
#[sea_orm(table_name = "party_user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub party: i32,
    pub user: i32,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Party,
    User,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Self::Party => Entity::belongs_to(super::party::Entity)
                .from(Column::Party)
                .to(super::party::Column::Id)
                .into(),
            Self::User => Entity::belongs_to(super::user::Entity)
                .from(Column::User)
                .to(super::user::Column::Id)
                .into(),
        }
    }
}

impl ActiveModelBehavior for ActiveModel {}
