/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

pub mod auth;
pub mod endpoints;
pub mod error;

use axum::routing::{get, post};
use axum::{Router, middleware};
use tower_http::trace::TraceLayer;

use strata_core::types::ServerState;
use std::sync::Arc;

pub async fn serve_web(state: Arc<ServerState>) -> std::io::Result<()> {
    let server_url = format!("{}:{}", state.cli.ip, state.cli.port);
    let app = Router::new()
        .route("/api/submission", get(endpoints::submissions::index))
        .route(
            "/api/submission/summary",
            get(endpoints::submissions::summary),
        )
        .route(
            "/api/submission/group",
            get(endpoints::submissions::create_group),
        )
        .route(
            "/api/submission/group/new",
            get(endpoints::submissions::create_group_ajax)
                .post(endpoints::submissions::create_group_ajax),
        )
        .route("/api/role/assign", post(endpoints::roles::post_assign_role))
        .route(
            "/api/role/permission",
            post(endpoints::roles::post_set_permission),
        )
        .route_layer(middleware::from_fn_with_state(
            Arc::clone(&state),
            auth::authorize,
        ))
        .route("/api/user/login", post(endpoints::auth::post_login))
        .route("/api/user/register", post(endpoints::auth::post_register))
        .route("/api/health", get(endpoints::get_health))
        .fallback(endpoints::handle_404)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(&server_url).await?;
    axum::serve(listener, app).await
}
