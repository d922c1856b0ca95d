/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Deserialize, Serialize)]
#[sea_orm(table_name = "submission_image_build")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub submission: i32,
    pub image_build: i32,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Submission,
    ImageBuild,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Self::Submission => Entity::belongs_to(super::submission::Entity)
                .from(Column::Submission)
                .to(super::submission::Column::Id)
                .into(),
            Self::ImageBuild => Entity::belongs_to(super::image_build::Entity)
                .from(Column::ImageBuild)
                .to(super::image_build::Column::Id)
                .into(),
        }
    }
}

impl ActiveModelBehavior for ActiveModel {}
