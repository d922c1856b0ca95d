/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use axum::extract::{Form, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{Extension, Json};
use chrono::Utc;
use strata_core::consts::*;
use strata_core::database::{get_product_by_name, get_product_by_short};
use strata_core::input::{escape_like, parse_id_list};
use strata_core::permission::{
    Permission, get_domain_roles, get_git_tree_roles, get_subdomain_roles, has_permission,
};
use strata_core::types::*;
use sea_orm::ActiveValue::Set;
use sea_orm::sea_query::{Expr, Query as SeaQuery};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;

use crate::error::{WebError, WebResult};

#[derive(Serialize, Deserialize, Debug)]
pub struct SubmissionOverviewResponse {
    pub open_submissions: u64,
    pub submission_groups: u64,
}

#[derive(Serialize, Deserialize, Debug, Default)]
pub struct SummaryQuery {
    pub kw: Option<String>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct SubmissionSummaryResponse {
    pub title: String,
    pub results: Vec<MSubmission>,
    pub domains: ListResponse,
    pub subdomains: ListResponse,
    pub gittrees: ListResponse,
}

#[derive(Serialize, Deserialize, Debug, Default)]
pub struct CreateGroupQuery {
    pub product: Option<String>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct CreateGroupPageResponse {
    pub submissions: Vec<MSubmission>,
    pub selected_product: MProduct,
    pub unselected_products: Vec<MProduct>,
}

#[derive(Serialize, Deserialize, Debug, Default)]
pub struct CreateGroupForm {
    #[serde(default)]
    pub submissions: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct SubmissionGroupResponse {
    pub id: i32,
    pub name: String,
    pub author: i32,
    pub product: Option<i32>,
    pub status: String,
    pub submissions: Vec<i32>,
    pub created_at: chrono::NaiveDateTime,
    pub updated_at: chrono::NaiveDateTime,
}

pub async fn index(
    state: State<Arc<ServerState>>,
    Extension(_user): Extension<MUser>,
) -> WebResult<Json<BaseResponse<SubmissionOverviewResponse>>> {
    let open_submissions = ESubmission::find()
        .filter(CSubmission::Status.is_not_in(TERMINAL_STATUSES))
        .count(&state.db)
        .await?;

    let submission_groups = ESubmissionGroup::find().count(&state.db).await?;

    let res = BaseResponse {
        error: false,
        message: SubmissionOverviewResponse {
            open_submissions,
            submission_groups,
        },
    };

    Ok(Json(res))
}

pub async fn summary(
    state: State<Arc<ServerState>>,
    Extension(user): Extension<MUser>,
    Query(query): Query<SummaryQuery>,
) -> WebResult<Json<BaseResponse<SubmissionSummaryResponse>>> {
    let kw = query.kw.unwrap_or_else(|| "my".to_string());

    let mut domains = vec![];
    let mut subdomains = vec![];
    let mut gittrees = vec![];

    let (title, results) = if kw == "my" {
        let results = ESubmission::find()
            .filter(CSubmission::Owner.eq(user.id))
            .order_by_asc(CSubmission::CreatedAt)
            .all(&state.db)
            .await?;

        domains = get_domain_roles(Arc::clone(&state), &user)
            .await?
            .into_iter()
            .map(|d| ListItem {
                id: d.id,
                name: d.name,
            })
            .collect();
        subdomains = get_subdomain_roles(Arc::clone(&state), &user)
            .await?
            .into_iter()
            .map(|s| ListItem {
                id: s.id,
                name: s.name,
            })
            .collect();
        gittrees = get_git_tree_roles(Arc::clone(&state), &user)
            .await?
            .into_iter()
            .map(|t| ListItem {
                id: t.id,
                name: t.gitpath,
            })
            .collect();

        ("My submissions".to_string(), results)
    } else if kw == "all" {
        // TODO: order by updated_at so recently touched submissions come last
        // instead of recently created ones.
        let results = ESubmission::find()
            .order_by_asc(CSubmission::CreatedAt)
            .all(&state.db)
            .await?;

        ("All submissions".to_string(), results)
    } else {
        // Owners are matched by email prefix, not username.
        let owner_matches = SeaQuery::select()
            .column((entity::user::Entity, CUser::Id))
            .from(entity::user::Entity)
            .and_where(
                Expr::col((entity::user::Entity, CUser::Email))
                    .like(format!("{}%", escape_like(&kw))),
            )
            .to_owned();

        let gittree_matches = SeaQuery::select()
            .column((
                entity::submission_git_tree::Entity,
                CSubmissionGitTree::Submission,
            ))
            .from(entity::submission_git_tree::Entity)
            .inner_join(
                entity::git_tree::Entity,
                Expr::col((entity::git_tree::Entity, CGitTree::Id)).equals((
                    entity::submission_git_tree::Entity,
                    CSubmissionGitTree::GitTree,
                )),
            )
            .and_where(
                Expr::col((entity::git_tree::Entity, CGitTree::Gitpath))
                    .like(format!("%{}%", escape_like(&kw))),
            )
            .to_owned();

        let results = ESubmission::find()
            .filter(
                Condition::any()
                    .add(CSubmission::Name.contains(kw.as_str()))
                    .add(CSubmission::Commit.starts_with(kw.as_str()))
                    .add(CSubmission::Owner.in_subquery(owner_matches))
                    .add(CSubmission::Status.eq(kw.clone()))
                    .add(CSubmission::Id.in_subquery(gittree_matches)),
            )
            .all(&state.db)
            .await?;

        (format!("Search for \"{}\"", kw), results)
    };

    let res = BaseResponse {
        error: false,
        message: SubmissionSummaryResponse {
            title,
            results,
            domains,
            subdomains,
            gittrees,
        },
    };

    Ok(Json(res))
}

pub async fn create_group(
    state: State<Arc<ServerState>>,
    Extension(user): Extension<MUser>,
    Query(query): Query<CreateGroupQuery>,
) -> WebResult<Json<BaseResponse<CreateGroupPageResponse>>> {
    if !has_permission(Arc::clone(&state), &user, Permission::AddSubmissionGroup).await? {
        return Err(WebError::missing_permission("create submission groups"));
    }

    let mut submissions = ESubmission::find();

    let selected_product = match query.product.filter(|p| !p.is_empty()) {
        Some(name) => {
            let product = get_product_by_name(Arc::clone(&state), &name)
                .await?
                .ok_or_else(|| WebError::not_found("Product"))?;

            submissions = submissions.filter(CSubmission::Product.eq(product.id));
            product
        }
        // The default product is only shown for context; the submission set
        // stays unfiltered in this branch.
        None => get_product_by_short(Arc::clone(&state), DEFAULT_PRODUCT_SHORT)
            .await?
            .ok_or_else(|| WebError::not_found("Product"))?,
    };

    let unselected_products = EProduct::find()
        .filter(CProduct::Id.ne(selected_product.id))
        .all(&state.db)
        .await?;

    let submissions = submissions
        .filter(CSubmission::Status.is_not_in(TERMINAL_STATUSES))
        .all(&state.db)
        .await?;

    let res = BaseResponse {
        error: false,
        message: CreateGroupPageResponse {
            submissions,
            selected_product,
            unselected_products,
        },
    };

    Ok(Json(res))
}

/// Creates a submission group from the form's comma separated submission ids.
/// Two overlapping calls both succeed and produce distinct groups; nothing
/// prevents a submission from ending up in more than one group.
pub async fn create_group_ajax(
    state: State<Arc<ServerState>>,
    Extension(user): Extension<MUser>,
    Form(body): Form<CreateGroupForm>,
) -> WebResult<Response> {
    if !has_permission(Arc::clone(&state), &user, Permission::AddSubmissionGroup).await? {
        return Err(WebError::missing_permission("create submission groups"));
    }

    let submission_ids = parse_id_list(&body.submissions);

    let submissions = if submission_ids.is_empty() {
        vec![]
    } else {
        ESubmission::find()
            .filter(CSubmission::Id.is_in(submission_ids))
            .all(&state.db)
            .await?
    };

    if submissions.is_empty() {
        return Ok((
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "Select submissions to group" })),
        )
            .into_response());
    }

    let product = get_product_by_short(Arc::clone(&state), DEFAULT_PRODUCT_SHORT)
        .await?
        .ok_or_else(|| WebError::not_found("Product"))?;

    let now = Utc::now();
    let name = format!(
        "submit/{}/{}",
        product.short,
        now.format(GROUP_NAME_TIME_FORMAT)
    );

    let group = ASubmissionGroup {
        name: Set(name),
        author: Set(user.id),
        product: Set(Some(product.id)),
        status: Set(STATUS_NEW.to_string()),
        created_at: Set(now.naive_utc()),
        updated_at: Set(now.naive_utc()),
        ..Default::default()
    };

    let group = group.insert(&state.db).await?;

    let links: Vec<ASubmissionGroupSubmission> = submissions
        .iter()
        .map(|submission| ASubmissionGroupSubmission {
            submission_group: Set(group.id),
            submission: Set(submission.id),
            ..Default::default()
        })
        .collect();

    ESubmissionGroupSubmission::insert_many(links)
        .exec(&state.db)
        .await?;

    let res = SubmissionGroupResponse {
        id: group.id,
        name: group.name,
        author: group.author,
        product: group.product,
        status: group.status,
        submissions: submissions.iter().map(|s| s.id).collect(),
        created_at: group.created_at,
        updated_at: group.updated_at,
    };

    Ok(Json(res).into_response())
}
