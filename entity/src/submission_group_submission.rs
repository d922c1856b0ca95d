/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Deserialize, Serialize)]
#[sea_orm(table_name = "submission_group_submission")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub submission_group: i32,
    pub submission: i32,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    SubmissionGroup,
    Submission,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Self::SubmissionGroup => Entity::belongs_to(super::submission_group::Entity)
                .from(Column::SubmissionGroup)
                .to(super::submission_group::Column::Id)
                .into(),
            Self::Submission => Entity::belongs_to(super::submission::Entity)
                .from(Column::Submission)
                .to(super::submission::Column::Id)
                .into(),
        }
    }
}

impl ActiveModelBehavior for ActiveModel {}
