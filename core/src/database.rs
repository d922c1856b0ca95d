/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use anyhow::{Context, Result};
use migration::Migrator;
use sea_orm::sea_query::{Expr, Func};
use sea_orm::{
    ColumnTrait, ConnectOptions, Database, DatabaseConnection, EntityTrait, QueryFilter,
};
use sea_orm_migration::prelude::*;
use std::sync::Arc;
use std::time::Duration;
use tracing::log::LevelFilter;

use super::types::*;

pub async fn connect_db(cli: &Cli) -> Result<DatabaseConnection> {
    let db_url = if let Some(file) = &cli.database_url_file {
        std::fs::read_to_string(file)
            .context("Failed to read database url from file")?
            .trim()
            .to_string()
    } else if let Some(url) = &cli.database_url {
        url.clone()
    } else {
        anyhow::bail!("No database url provided")
    };

    let mut opt = ConnectOptions::new(db_url);

    // SQL statement logging is noisy; keep it behind debug level.
    if cli.log_level == "debug" {
        opt.sqlx_logging(true)
            .sqlx_logging_level(LevelFilter::Debug);
    } else {
        opt.sqlx_logging(false);
    }

    opt.max_connections(100)
        .min_connections(5)
        .connect_timeout(Duration::from_secs(8))
        .acquire_timeout(Duration::from_secs(8))
        .idle_timeout(Duration::from_secs(8))
        .max_lifetime(Duration::from_secs(8));

    let db = Database::connect(opt)
        .await
        .context("Failed to connect to database")?;
    Migrator::up(&db, None)
        .await
        .context("Failed to run database migrations")?;
    Ok(db)
}

pub async fn get_user_by_username(
    state: Arc<ServerState>,
    username: &str,
) -> Result<Option<MUser>> {
    EUser::find()
        .filter(CUser::Username.eq(username))
        .one(&state.db)
        .await
        .context("Failed to query user by username")
}

/// Case-insensitive product lookup by full name.
pub async fn get_product_by_name(state: Arc<ServerState>, name: &str) -> Result<Option<MProduct>> {
    EProduct::find()
        .filter(
            Expr::expr(Func::lower(Expr::col((entity::product::Entity, CProduct::Name))))
                .eq(name.to_lowercase()),
        )
        .one(&state.db)
        .await
        .context("Failed to query product by name")
}

/// Case-insensitive product lookup by short name.
pub async fn get_product_by_short(
    state: Arc<ServerState>,
    short: &str,
) -> Result<Option<MProduct>> {
    EProduct::find()
        .filter(
            Expr::expr(Func::lower(Expr::col((entity::product::Entity, CProduct::Short))))
                .eq(short.to_lowercase()),
        )
        .one(&state.db)
        .await
        .context("Failed to query product by short name")
}
