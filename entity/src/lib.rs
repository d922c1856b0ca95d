/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

pub mod tests;

pub mod domain;
pub mod git_tree;
pub mod git_tree_license;
pub mod git_tree_package;
pub mod image;
pub mod image_build;
pub mod license;
pub mod package;
pub mod package_build;
pub mod party;
pub mod party_user;
pub mod product;
pub mod product_git_tree;
pub mod role;
pub mod subdomain;
pub mod submission;
pub mod submission_git_tree;
pub mod submission_group;
pub mod submission_group_submission;
pub mod submission_image_build;
pub mod submission_package_build;
pub mod submission_submitter;
pub mod user;
pub mod user_profile;
pub mod user_role;
