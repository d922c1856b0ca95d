/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use axum::extract::State;
use axum::{Extension, Json};
use strata_core::database::get_user_by_username;
use strata_core::permission::{Permission, has_permission, set_permission};
use strata_core::types::*;
use sea_orm::ActiveValue::Set;
use sea_orm::{ActiveModelTrait, ColumnTrait, Condition, EntityTrait, QueryFilter};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::error::{WebError, WebResult};

#[derive(Serialize, Deserialize, Debug)]
pub struct AssignRoleRequest {
    pub user: String,
    pub role: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct SetPermissionRequest {
    pub role: String,
    pub permission: String,
    pub value: bool,
}

pub async fn post_assign_role(
    state: State<Arc<ServerState>>,
    Extension(user): Extension<MUser>,
    Json(body): Json<AssignRoleRequest>,
) -> WebResult<Json<BaseResponse<String>>> {
    if !has_permission(Arc::clone(&state), &user, Permission::ManageRole).await? {
        return Err(WebError::missing_permission("manage roles"));
    }

    let target_user = get_user_by_username(Arc::clone(&state), &body.user)
        .await?
        .ok_or_else(|| WebError::not_found("User"))?;

    let role = ERole::find()
        .filter(CRole::Name.eq(body.role.clone()))
        .one(&state.db)
        .await?
        .ok_or_else(|| WebError::not_found("Role"))?;

    let existing = EUserRole::find()
        .filter(
            Condition::all()
                .add(CUserRole::User.eq(target_user.id))
                .add(CUserRole::Role.eq(role.id)),
        )
        .one(&state.db)
        .await?;

    if existing.is_some() {
        return Err(WebError::already_exists("Role assignment"));
    }

    let link = AUserRole {
        user: Set(target_user.id),
        role: Set(role.id),
        ..Default::default()
    };

    link.insert(&state.db).await?;

    let res = BaseResponse {
        error: false,
        message: "Role assigned".to_string(),
    };

    Ok(Json(res))
}

pub async fn post_set_permission(
    state: State<Arc<ServerState>>,
    Extension(user): Extension<MUser>,
    Json(body): Json<SetPermissionRequest>,
) -> WebResult<Json<BaseResponse<String>>> {
    if !has_permission(Arc::clone(&state), &user, Permission::ManageRole).await? {
        return Err(WebError::missing_permission("manage roles"));
    }

    let permission = Permission::from_name(&body.permission)
        .ok_or_else(|| WebError::BadRequest("Unknown permission".to_string()))?;

    let role = ERole::find()
        .filter(CRole::Name.eq(body.role.clone()))
        .one(&state.db)
        .await?
        .ok_or_else(|| WebError::not_found("Role"))?;

    set_permission(Arc::clone(&state), role, permission, body.value).await?;

    let res = BaseResponse {
        error: false,
        message: "Permission updated".to_string(),
    };

    Ok(Json(res))
}
