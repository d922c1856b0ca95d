/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use anyhow::{Context, Result};
use entity::role::RoleScope;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, EntityTrait, IntoActiveModel, QueryFilter,
};
use std::sync::Arc;

use super::types::*;

/// Closed set of capabilities a role can grant, stored as bit positions in
/// `role.permission`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Permission {
    ViewSubmission = 0,
    AddSubmissionGroup = 1,
    ManageRole = 2,
}

impl Permission {
    pub fn from_name(name: &str) -> Option<Permission> {
        match name {
            "view_submission" => Some(Permission::ViewSubmission),
            "add_submission_group" => Some(Permission::AddSubmissionGroup),
            "manage_role" => Some(Permission::ManageRole),
            _ => None,
        }
    }
}

fn get_permission_bit(permissions: i64, permission: Permission) -> bool {
    permissions & (1 << permission as i64) != 0
}

fn set_permission_bit(permissions: i64, permission: Permission, value: bool) -> i64 {
    if value {
        permissions | (1 << permission as i64)
    } else {
        permissions & !(1 << permission as i64)
    }
}

pub async fn set_permission(
    state: Arc<ServerState>,
    role: MRole,
    permission: Permission,
    value: bool,
) -> Result<()> {
    if get_permission_bit(role.permission, permission) == value {
        return Ok(());
    }

    let mut arole = role.clone().into_active_model();
    arole.permission = Set(set_permission_bit(role.permission, permission, value));
    arole
        .save(&state.db)
        .await
        .context("Failed to save role permission")?;
    Ok(())
}

pub async fn get_user_roles(state: Arc<ServerState>, user: &MUser) -> Result<Vec<MRole>> {
    let links = EUserRole::find()
        .filter(CUserRole::User.eq(user.id))
        .all(&state.db)
        .await
        .context("Failed to query user roles")?;

    let role_ids: Vec<i32> = links.iter().map(|l| l.role).collect();

    if role_ids.is_empty() {
        return Ok(vec![]);
    }

    ERole::find()
        .filter(CRole::Id.is_in(role_ids))
        .all(&state.db)
        .await
        .context("Failed to query roles")
}

/// True if any role held by the user grants the permission, regardless of
/// the role's scope.
pub async fn has_permission(
    state: Arc<ServerState>,
    user: &MUser,
    permission: Permission,
) -> Result<bool> {
    let roles = get_user_roles(state, user).await?;
    Ok(roles
        .iter()
        .any(|role| get_permission_bit(role.permission, permission)))
}

fn scope_ids(roles: &[MRole], scope: RoleScope) -> Vec<i32> {
    roles
        .iter()
        .filter(|role| role.scope == scope)
        .map(|role| role.scope_id)
        .collect()
}

pub async fn get_domain_roles(state: Arc<ServerState>, user: &MUser) -> Result<Vec<MDomain>> {
    let roles = get_user_roles(Arc::clone(&state), user).await?;
    let ids = scope_ids(&roles, RoleScope::Domain);

    if ids.is_empty() {
        return Ok(vec![]);
    }

    EDomain::find()
        .filter(CDomain::Id.is_in(ids))
        .all(&state.db)
        .await
        .context("Failed to query role domains")
}

pub async fn get_subdomain_roles(state: Arc<ServerState>, user: &MUser) -> Result<Vec<MSubdomain>> {
    let roles = get_user_roles(Arc::clone(&state), user).await?;
    let ids = scope_ids(&roles, RoleScope::SubDomain);

    if ids.is_empty() {
        return Ok(vec![]);
    }

    ESubdomain::find()
        .filter(CSubdomain::Id.is_in(ids))
        .all(&state.db)
        .await
        .context("Failed to query role subdomains")
}

pub async fn get_git_tree_roles(state: Arc<ServerState>, user: &MUser) -> Result<Vec<MGitTree>> {
    let roles = get_user_roles(Arc::clone(&state), user).await?;
    let ids = scope_ids(&roles, RoleScope::GitTree);

    if ids.is_empty() {
        return Ok(vec![]);
    }

    EGitTree::find()
        .filter(CGitTree::Id.is_in(ids))
        .all(&state.db)
        .await
        .context("Failed to query role git trees")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_permission_bit_round_trip() {
        let mut permissions = 0i64;

        assert!(!get_permission_bit(permissions, Permission::AddSubmissionGroup));

        permissions = set_permission_bit(permissions, Permission::AddSubmissionGroup, true);
        assert!(get_permission_bit(permissions, Permission::AddSubmissionGroup));
        assert!(!get_permission_bit(permissions, Permission::ViewSubmission));
        assert!(!get_permission_bit(permissions, Permission::ManageRole));

        permissions = set_permission_bit(permissions, Permission::AddSubmissionGroup, false);
        assert_eq!(permissions, 0);
    }

    #[test]
    fn test_permission_from_name() {
        assert_eq!(
            Permission::from_name("manage_role"),
            Some(Permission::ManageRole)
        );
        assert_eq!(
            Permission::from_name("add_submission_group"),
            Some(Permission::AddSubmissionGroup)
        );
        assert_eq!(Permission::from_name("does_not_exist"), None);
    }

    #[test]
    fn test_permission_bits_are_distinct() {
        let all = [
            Permission::ViewSubmission,
            Permission::AddSubmissionGroup,
            Permission::ManageRole,
        ];

        for permission in all {
            let permissions = set_permission_bit(0, permission, true);
            for other in all {
                assert_eq!(
                    get_permission_bit(permissions, other),
                    permission == other
                );
            }
        }
    }
}
