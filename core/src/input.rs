/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use anyhow::{Context, Result};

use super::consts::*;

pub fn port_in_range(s: &str) -> Result<u16, String> {
    let port: usize = s
        .parse()
        .map_err(|_| format!("`{s}` is not a port number"))?;

    if PORT_RANGE.contains(&port) {
        Ok(port as u16)
    } else {
        Err(format!(
            "port not in range {}-{}",
            PORT_RANGE.start(),
            PORT_RANGE.end()
        ))
    }
}

/// Parses a comma separated list of record ids. Tokens that are empty or not
/// a number are dropped without an error, matching how the grouping form
/// submits its selection.
pub fn parse_id_list(s: &str) -> Vec<i32> {
    s.split(',')
        .filter_map(|token| token.trim().parse::<i32>().ok())
        .collect()
}

/// Escapes LIKE metacharacters so a search term containing `%` or `_` only
/// matches itself. Postgres treats backslash as the default escape character.
pub fn escape_like(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

/// Usernames double as path and index segments, so only ascii alphanumerics
/// are allowed.
pub fn valid_username(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_alphanumeric())
}

pub fn valid_commit_hash(s: &str) -> bool {
    s.len() == 40 && s.chars().all(|c| c.is_ascii_hexdigit())
}

pub fn load_secret(path: &str) -> Result<String> {
    let secret = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read secret from {}", path))?;
    Ok(secret.trim().to_string())
}
