/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use super::input::port_in_range;
use clap::Parser;
use entity::*;
use sea_orm::DatabaseConnection;
use serde::{Deserialize, Serialize};

#[derive(Parser, Debug)]
#[command(name = "Strata", display_name = "Strata", bin_name = "strata-server", author = "Wavelens", version, about, long_about = None)]
pub struct Cli {
    #[arg(long, env = "STRATA_LOG_LEVEL", default_value = "info")]
    pub log_level: String,
    #[arg(long, env = "STRATA_IP", default_value = "127.0.0.1")]
    pub ip: String,
    #[arg(long, env = "STRATA_PORT", value_parser = port_in_range, default_value_t = 3000)]
    pub port: u16,
    #[arg(
        long,
        env = "STRATA_SERVE_URL",
        default_value = "http://127.0.0.1:8000"
    )]
    pub serve_url: String,
    #[arg(long, env = "STRATA_DATABASE_URL")]
    pub database_url: Option<String>,
    #[arg(long, env = "STRATA_DATABASE_URL_FILE")]
    pub database_url_file: Option<String>,
    #[arg(long, env = "STRATA_JWT_SECRET_FILE")]
    pub jwt_secret_file: String,
    #[arg(long, env = "STRATA_DISABLE_REGISTRATION", default_value = "false")]
    pub disable_registration: bool,
}

#[derive(Debug)]
pub struct ServerState {
    pub db: DatabaseConnection,
    pub cli: Cli,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct BaseResponse<T> {
    pub error: bool,
    pub message: T,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListItem {
    pub id: i32,
    pub name: String,
}

pub type ListResponse = Vec<ListItem>;

pub type EDomain = domain::Entity;
pub type EGitTree = git_tree::Entity;
pub type EGitTreeLicense = git_tree_license::Entity;
pub type EGitTreePackage = git_tree_package::Entity;
pub type EImage = image::Entity;
pub type EImageBuild = image_build::Entity;
pub type ELicense = license::Entity;
pub type EPackage = package::Entity;
pub type EPackageBuild = package_build::Entity;
pub type EParty = party::Entity;
pub type EPartyUser = party_user::Entity;
pub type EProduct = product::Entity;
pub type EProductGitTree = product_git_tree::Entity;
pub type ERole = role::Entity;
pub type ESubdomain = subdomain::Entity;
pub type ESubmission = submission::Entity;
pub type ESubmissionGitTree = submission_git_tree::Entity;
pub type ESubmissionGroup = submission_group::Entity;
pub type ESubmissionGroupSubmission = submission_group_submission::Entity;
pub type ESubmissionImageBuild = submission_image_build::Entity;
pub type ESubmissionPackageBuild = submission_package_build::Entity;
pub type ESubmissionSubmitter = submission_submitter::Entity;
pub type EUser = user::Entity;
pub type EUserProfile = user_profile::Entity;
pub type EUserRole = user_role::Entity;

pub type MDomain = domain::Model;
pub type MGitTree = git_tree::Model;
pub type MGitTreeLicense = git_tree_license::Model;
pub type MGitTreePackage = git_tree_package::Model;
pub type MImage = image::Model;
pub type MImageBuild = image_build::Model;
pub type MLicense = license::Model;
pub type MPackage = package::Model;
pub type MPackageBuild = package_build::Model;
pub type MParty = party::Model;
pub type MPartyUser = party_user::Model;
pub type MProduct = product::Model;
pub type MProductGitTree = product_git_tree::Model;
pub type MRole = role::Model;
pub type MSubdomain = subdomain::Model;
pub type MSubmission = submission::Model;
pub type MSubmissionGitTree = submission_git_tree::Model;
pub type MSubmissionGroup = submission_group::Model;
pub type MSubmissionGroupSubmission = submission_group_submission::Model;
pub type MSubmissionImageBuild = submission_image_build::Model;
pub type MSubmissionPackageBuild = submission_package_build::Model;
pub type MSubmissionSubmitter = submission_submitter::Model;
pub type MUser = user::Model;
pub type MUserProfile = user_profile::Model;
pub type MUserRole = user_role::Model;

pub type ADomain = domain::ActiveModel;
pub type AGitTree = git_tree::ActiveModel;
pub type AGitTreeLicense = git_tree_license::ActiveModel;
pub type AGitTreePackage = git_tree_package::ActiveModel;
pub type AImage = image::ActiveModel;
pub type AImageBuild = image_build::ActiveModel;
pub type ALicense = license::ActiveModel;
pub type APackage = package::ActiveModel;
pub type APackageBuild = package_build::ActiveModel;
pub type AParty = party::ActiveModel;
pub type APartyUser = party_user::ActiveModel;
pub type AProduct = product::ActiveModel;
pub type AProductGitTree = product_git_tree::ActiveModel;
pub type ARole = role::ActiveModel;
pub type ASubdomain = subdomain::ActiveModel;
pub type ASubmission = submission::ActiveModel;
pub type ASubmissionGitTree = submission_git_tree::ActiveModel;
pub type ASubmissionGroup = submission_group::ActiveModel;
pub type ASubmissionGroupSubmission = submission_group_submission::ActiveModel;
pub type ASubmissionImageBuild = submission_image_build::ActiveModel;
pub type ASubmissionPackageBuild = submission_package_build::ActiveModel;
pub type ASubmissionSubmitter = submission_submitter::ActiveModel;
pub type AUser = user::ActiveModel;
pub type AUserProfile = user_profile::ActiveModel;
pub type AUserRole = user_role::ActiveModel;

pub type CDomain = domain::Column;
pub type CGitTree = git_tree::Column;
pub type CGitTreeLicense = git_tree_license::Column;
pub type CGitTreePackage = git_tree_package::Column;
pub type CImage = image::Column;
pub type CImageBuild = image_build::Column;
pub type CLicense = license::Column;
pub type CPackage = package::Column;
pub type CPackageBuild = package_build::Column;
pub type CParty = party::Column;
pub type CPartyUser = party_user::Column;
pub type CProduct = product::Column;
pub type CProductGitTree = product_git_tree::Column;
pub type CRole = role::Column;
pub type CSubdomain = subdomain::Column;
pub type CSubmission = submission::Column;
pub type CSubmissionGitTree = submission_git_tree::Column;
pub type CSubmissionGroup = submission_group::Column;
pub type CSubmissionGroupSubmission = submission_group_submission::Column;
pub type CSubmissionImageBuild = submission_image_build::Column;
pub type CSubmissionPackageBuild = submission_package_build::Column;
pub type CSubmissionSubmitter = submission_submitter::Column;
pub type CUser = user::Column;
pub type CUserProfile = user_profile::Column;
pub type CUserRole = user_role::Column;
