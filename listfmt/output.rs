//
// Copyright (c) 2025-2026 Jeff Garzik
//
// This file is part of the posixutils-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

use crate::error::ListResult;
use std::fmt::Display;
use std::io::Write;

/// Where a run writes rendered records and its per-record complaints
pub struct Sinks<'a, W: Write, E: Write> {
    pub out: &'a mut W,
    pub err: &'a mut E,
    /// Prefix of every complaint, normally the program name
    pub tool: &'a str,
}

impl<W: Write, E: Write> Sinks<'_, W, E> {
    /// Report a record-level failure together with the input that caused it
    pub fn complain(&mut self, msg: &dyn Display, input: &str) -> ListResult<()> {
        writeln!(self.err, "{}: {}: {}", self.tool, msg, input)?;
        Ok(())
    }
}
