//
// Copyright (c) 2025-2026 Jeff Garzik
//
// This file is part of the posixutils-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

use std::io;
use std::path::PathBuf;
use thiserror::Error;

use crate::extract::MIN_FIELDS;

/// Fatal errors: anything that stops a run before or while it reads input.
#[derive(Error, Debug)]
pub enum ListError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A file named on the command line could not be read
    #[error("{}: {}", .path.display(), .source)]
    Open { path: PathBuf, source: io::Error },

    #[error("template error: {0}")]
    Template(#[from] handlebars::TemplateError),
}

/// Result type for whole-run operations
pub type ListResult<T> = Result<T, ListError>;

/// Why a single input line could not be turned into a record.
///
/// These never end a run; the caller reports them and moves on.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ExtractError {
    #[error("malformed line: expected at least {} fields, found {}", MIN_FIELDS, .0)]
    TooFewFields(usize),

    #[error("malformed size '{0}'")]
    InvalidSize(String),

    #[error("malformed timestamp '{0}'")]
    InvalidTimestamp(String),
}

/// Archive decoding errors
#[derive(Error, Debug)]
pub enum ArchiveError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("invalid header: {0}")]
    InvalidHeader(String),
}

/// Result type for archive decoding
pub type ArchiveResult<T> = Result<T, ArchiveError>;
