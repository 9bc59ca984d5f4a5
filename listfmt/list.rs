//
// Copyright (c) 2025-2026 Jeff Garzik
//
// This file is part of the posixutils-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

//! List mode: one templated line per archive member

use crate::archive::ArchiveReader;
use crate::config::FieldVisibility;
use crate::error::ListResult;
use crate::extract::archive_record;
use crate::output::Sinks;
use crate::template::CompiledTemplate;
use crate::ustar::TarReader;
use log::debug;
use std::io::{Read, Write};

/// Options for list mode
#[derive(Debug, Clone, Copy, Default)]
pub struct ListOptions {
    /// Print modification times; off unless asked for
    pub show_timestamp: bool,
}

/// List the members of a tar archive
pub fn list_archive<R: Read, W: Write, E: Write>(
    reader: R,
    sinks: &mut Sinks<W, E>,
    template: &CompiledTemplate,
    options: &ListOptions,
) -> ListResult<()> {
    let mut archive = TarReader::new(reader);
    list_entries(&mut archive, sinks, template, options)
}

/// List entries from any archive reader.  A decode error ends the listing
/// the same way the end-of-archive marker does.
fn list_entries<A: ArchiveReader, W: Write, E: Write>(
    archive: &mut A,
    sinks: &mut Sinks<W, E>,
    template: &CompiledTemplate,
    options: &ListOptions,
) -> ListResult<()> {
    let show = FieldVisibility::default();

    loop {
        let entry = match archive.read_entry() {
            Ok(Some(entry)) => entry,
            Ok(None) => break,
            Err(e) => {
                debug!("archive listing stopped: {}", e);
                break;
            }
        };

        let record = archive_record(&entry, options.show_timestamp);
        debug!(
            "{}: type={:?} mode={:o} uid={} gid={} size={} mtime={} link={}",
            record.name,
            entry.entry_type,
            entry.mode,
            entry.uid,
            entry.gid,
            entry.size,
            entry.mtime,
            record.link.as_deref().unwrap_or("-")
        );

        match template.render(&record, &show) {
            Ok(text) => sinks.out.write_all(text.as_bytes())?,
            Err(e) => sinks.complain(&e, &record.name)?,
        }

        if let Err(e) = archive.skip_data() {
            debug!("archive listing stopped: {}", e);
            break;
        }
    }

    Ok(())
}
