/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use strata_core::init_state;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
pub async fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("STRATA_LOG_LEVEL").unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let state = match init_state().await {
        Ok(state) => state,
        Err(e) => {
            tracing::error!("Failed to initialize server: {:#}", e);
            std::process::exit(1);
        }
    };

    web::serve_web(Arc::clone(&state)).await?;

    Ok(())
}
