//
// Copyright (c) 2025-2026 Jeff Garzik
//
// This file is part of the posixutils-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

use chrono::NaiveDateTime;

/// Layout of timestamps on input lines and in rendered output
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";
pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const TIME_FORMAT: &str = "%H:%M";

/// One listing entry, ready for rendering.
///
/// Built once per input unit by the extractors and only borrowed after
/// that.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// Symbolic mode, e.g. `drwxr-xr-x`
    pub mode: String,
    /// User name or numeric uid; for input lines, the owner token as given
    pub owner: String,
    /// Group name or numeric gid; input lines carry no group
    pub group: Option<String>,
    pub size: u64,
    /// Modification time, minute resolution, UTC for archives
    pub timestamp: Option<NaiveDateTime>,
    /// Archive member path, or the trailing tokens of an input line
    pub name: String,
    /// Target of a symlink or hardlink member
    pub link: Option<String>,
}

impl Record {
    pub fn timestamp_string(&self) -> Option<String> {
        self.timestamp
            .map(|ts| ts.format(TIMESTAMP_FORMAT).to_string())
    }

    pub fn date_string(&self) -> Option<String> {
        self.timestamp.map(|ts| ts.format(DATE_FORMAT).to_string())
    }

    pub fn time_string(&self) -> Option<String> {
        self.timestamp.map(|ts| ts.format(TIME_FORMAT).to_string())
    }
}
