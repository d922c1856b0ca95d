/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

pub use sea_orm_migration::prelude::*;

mod m20250310_100000_create_table_user;
mod m20250310_100500_create_table_domain;
mod m20250310_101000_create_table_git_tree;
mod m20250310_101500_create_table_license;
mod m20250310_102000_create_table_package;
mod m20250310_102500_create_table_product;
mod m20250310_103000_create_table_image;
mod m20250310_103500_create_table_log;
mod m20250310_104000_create_table_package_build;
mod m20250310_104500_create_table_image_build;
mod m20250310_105000_create_table_test_result;
mod m20250310_105500_create_table_submission;
mod m20250310_110000_create_table_submission_group;
mod m20250310_110500_create_table_role;
mod m20250310_111000_create_table_party;
mod m20250622_000000_remove_test_results;
mod m20250623_000000_recreate_submission_group;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250310_100000_create_table_user::Migration),
            Box::new(m20250310_100500_create_table_domain::Migration),
            Box::new(m20250310_101000_create_table_git_tree::Migration),
            Box::new(m20250310_101500_create_table_license::Migration),
            Box::new(m20250310_102000_create_table_package::Migration),
            Box::new(m20250310_102500_create_table_product::Migration),
            Box::new(m20250310_103000_create_table_image::Migration),
            Box::new(m20250310_103500_create_table_log::Migration),
            Box::new(m20250310_104000_create_table_package_build::Migration),
            Box::new(m20250310_104500_create_table_image_build::Migration),
            Box::new(m20250310_105000_create_table_test_result::Migration),
            Box::new(m20250310_105500_create_table_submission::Migration),
            Box::new(m20250310_110000_create_table_submission_group::Migration),
            Box::new(m20250310_110500_create_table_role::Migration),
            Box::new(m20250310_111000_create_table_party::Migration),
            Box::new(m20250622_000000_remove_test_results::Migration),
            Box::new(m20250623_000000_recreate_submission_group::Migration),
        ]
    }
}
