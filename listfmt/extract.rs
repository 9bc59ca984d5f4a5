//
// Copyright (c) 2025-2026 Jeff Garzik
//
// This file is part of the posixutils-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

//! Record extraction: archive headers and `ls -l` style text lines

use crate::archive::ArchiveEntry;
use crate::error::ExtractError;
use crate::record::{Record, TIMESTAMP_FORMAT};
use chrono::{DateTime, NaiveDateTime};
use plib::group::resolve_group;
use plib::modestr::format_mode;
use plib::user::resolve_user;

/// mode, owner, size, date, time and at least one remainder token
pub const MIN_FIELDS: usize = 6;

/// Parse one whitespace-delimited listing line.
///
/// Mode and owner are taken verbatim; the trailing tokens are rejoined
/// with single spaces.
pub fn parse_line(line: &str) -> Result<Record, ExtractError> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() < MIN_FIELDS {
        return Err(ExtractError::TooFewFields(fields.len()));
    }

    let size = fields[2]
        .parse::<u64>()
        .map_err(|_| ExtractError::InvalidSize(fields[2].to_string()))?;

    let stamp = format!("{} {}", fields[3], fields[4]);
    let timestamp = NaiveDateTime::parse_from_str(&stamp, TIMESTAMP_FORMAT)
        .map_err(|_| ExtractError::InvalidTimestamp(stamp.clone()))?;

    Ok(Record {
        mode: fields[0].to_string(),
        owner: fields[1].to_string(),
        group: None,
        size,
        timestamp: Some(timestamp),
        name: fields[MIN_FIELDS - 1..].join(" "),
        link: None,
    })
}

/// Convert an mtime in seconds since the epoch to UTC wall-clock time,
/// truncated to the minute
fn mtime_to_datetime(mtime: i64) -> Option<NaiveDateTime> {
    let secs = mtime.checked_sub(mtime.rem_euclid(60))?;
    DateTime::from_timestamp(secs, 0).map(|dt| dt.naive_utc())
}

/// Build the record for one archive member.  Owner and group always come
/// from the numeric ids; the timestamp is filled in only when asked for.
pub fn archive_record(entry: &ArchiveEntry, show_timestamp: bool) -> Record {
    let timestamp = if show_timestamp {
        mtime_to_datetime(entry.mtime)
    } else {
        None
    };

    Record {
        mode: format_mode(entry.mode, entry.is_dir()),
        owner: resolve_user(entry.uid),
        group: Some(resolve_group(entry.gid)),
        size: entry.size,
        timestamp,
        name: entry.path.to_string_lossy().into_owned(),
        link: entry
            .link_target
            .as_ref()
            .map(|target| target.to_string_lossy().into_owned()),
    }
}
