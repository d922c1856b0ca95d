/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Deserialize, Serialize)]
#[sea_orm(table_name = "git_tree_license")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub git_tree: i32,
    pub license: i32,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    GitTree,
    License,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Self::GitTree => Entity::belongs_to(super::git_tree::Entity)
                .from(Column::GitTree)
                .to(super::git_tree::Column::Id)
                .into(),
            Self::License => Entity::belongs_to(super::license::Entity)
                .from(Column::License)
                .to(super::license::Column::Id)
                .into(),
        }
    }
}

impl ActiveModelBehavior for ActiveModel {}
