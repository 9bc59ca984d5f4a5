//
// Copyright (c) 2025-2026 Jeff Garzik
//
// This file is part of the posixutils-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

//! Reformat mode: `ls -l` style lines in, templated lines out

use crate::config::{FieldVisibility, FormatConfig};
use crate::error::ListResult;
use crate::extract::parse_line;
use crate::output::Sinks;
use crate::template::CompiledTemplate;
use log::debug;
use std::io::{self, BufRead, BufWriter, Write};

/// Reformat every line of `input` until an empty line or end of stream.
///
/// Lines that do not parse or do not render are reported and skipped.
/// Bytes that are not UTF-8 are replaced, not rejected.  Only read and
/// write failures end the run early.
pub fn reformat_lines<R: BufRead, W: Write, E: Write>(
    mut input: R,
    sinks: &mut Sinks<W, E>,
    template: &CompiledTemplate,
    show: &FieldVisibility,
) -> ListResult<()> {
    let mut buf = Vec::new();
    loop {
        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            break;
        }

        let raw = buf.strip_suffix(b"\n").unwrap_or(&buf);
        let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
        if raw.is_empty() {
            break;
        }
        let line = String::from_utf8_lossy(raw);

        let record = match parse_line(&line) {
            Ok(record) => record,
            Err(e) => {
                sinks.complain(&e, &line)?;
                continue;
            }
        };

        debug!(
            "mode={} owner={} size={} date={} time={} remainder={}",
            record.mode,
            record.owner,
            record.size,
            record.date_string().unwrap_or_default(),
            record.time_string().unwrap_or_default(),
            record.name
        );

        match template.render(&record, show) {
            Ok(text) => sinks.out.write_all(text.as_bytes())?,
            Err(e) => sinks.complain(&e, &line)?,
        }
    }

    Ok(())
}

/// Whole run of a line reformatter: compile the configured template, then
/// filter standard input to standard output
pub fn run(tool: &str, config: &FormatConfig) -> ListResult<()> {
    let template = CompiledTemplate::compile(&config.template.load()?)?;
    debug!("template: {:?}", config.template);

    let stdin = io::stdin();
    let mut out = BufWriter::new(io::stdout().lock());
    let mut err = io::stderr().lock();

    let mut sinks = Sinks {
        out: &mut out,
        err: &mut err,
        tool,
    };
    reformat_lines(stdin.lock(), &mut sinks, &template, &config.visibility)?;

    out.flush()?;
    Ok(())
}
