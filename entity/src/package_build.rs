/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Deserialize, Serialize)]
#[sea_orm(table_name = "package_build")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub package: i32,
    pub arch: String,
    pub target: String,
    pub status: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::package::Entity",
        from = "Column::Package",
        to = "super::package::Column::Id"
    )]
    Package,
}

impl ActiveModelBehavior for ActiveModel {}
