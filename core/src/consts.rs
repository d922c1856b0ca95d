/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use chrono::{DateTime, NaiveDateTime};
use std::ops::RangeInclusive;
use std::sync::LazyLock;

pub const PORT_RANGE: RangeInclusive<usize> = 1..=65535;

pub static NULL_TIME: LazyLock<NaiveDateTime> =
    LazyLock::new(|| DateTime::from_timestamp(0, 0).unwrap().naive_utc());

pub const STATUS_NEW: &str = "NEW";
pub const STATUS_SUBMITTED: &str = "SUBMITTED";
pub const STATUS_OPENED: &str = "OPENED";
pub const STATUS_ACCEPTED: &str = "ACCEPTED";
pub const STATUS_REJECTED: &str = "REJECTED";

/// Statuses a submission cannot leave; such submissions are never eligible
/// for grouping.
pub const TERMINAL_STATUSES: [&str; 2] = [STATUS_ACCEPTED, STATUS_REJECTED];

/// Short name of the product new groups are filed under when no product
/// context is given.
pub const DEFAULT_PRODUCT_SHORT: &str = "tizen";

/// Timestamp part of generated group names: `submit/<short>/<timestamp>`.
pub const GROUP_NAME_TIME_FORMAT: &str = "%Y%m%d.%H%M%S";
