/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Deserialize, Serialize)]
#[sea_orm(table_name = "image_build")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub image: i32,
    #[sea_orm(column_type = "Text")]
    pub name: String,
    pub status: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::image::Entity",
        from = "Column::Image",
        to = "super::image::Column::Id"
    )]
    Image,
}

impl ActiveModelBehavior for ActiveModel {}
