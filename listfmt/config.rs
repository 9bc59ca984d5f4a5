//
// Copyright (c) 2025-2026 Jeff Garzik
//
// This file is part of the posixutils-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

//! Run configuration: which fields to show and where the template comes
//! from.  Built once from the command line and passed down by reference.

use crate::error::{ListError, ListResult};
use gettextrs::gettext;
use serde::Serialize;
use std::fs;
use std::path::PathBuf;

/// Built-in template for archive listings:
/// `<mode> <owner>/<group>  <size:8>[ <timestamp>] <name>`
pub const ARCHIVE_TEMPLATE: &str =
    "{{mode}} {{owner}}/{{group}}  {{rjust size 8}}{{#if timestamp}} {{timestamp}}{{/if}} {{name}}";

/// Built-in template for reformatted `ls -l` lines
pub const LINE_TEMPLATE: &str = include_str!("templates/default.hbs");

/// Templates shipped with `lsfmt`, selectable by name
pub const BUNDLED_TEMPLATES: &[(&str, &str)] = &[
    ("default", LINE_TEMPLATE),
    ("long", include_str!("templates/long.hbs")),
    ("table", include_str!("templates/table.hbs")),
];

/// Look up a bundled template by name
pub fn bundled_template(name: &str) -> Option<&'static str> {
    BUNDLED_TEMPLATES
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, source)| *source)
}

/// Names of all bundled templates, in listing order
pub fn bundled_names() -> impl Iterator<Item = &'static str> {
    BUNDLED_TEMPLATES.iter().map(|(name, _)| *name)
}

/// Per-field display switches.  Every field is shown unless a `--no-*`
/// flag turned it off.  Serialised into templates as `show`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldVisibility {
    pub mode: bool,
    pub owner: bool,
    pub size: bool,
    pub time: bool,
    pub date: bool,
    pub remain: bool,
}

impl Default for FieldVisibility {
    fn default() -> Self {
        FieldVisibility {
            mode: true,
            owner: true,
            size: true,
            time: true,
            date: true,
            remain: true,
        }
    }
}

/// The `--no-*` switches shared by the line reformatters
#[derive(clap::Args, Debug, Clone, Default)]
pub struct FieldFlags {
    #[arg(long, help = gettext("Do not print the mode field"))]
    pub no_mode: bool,

    #[arg(long, help = gettext("Do not print the owner field"))]
    pub no_owner: bool,

    #[arg(long, help = gettext("Do not print the size field"))]
    pub no_size: bool,

    #[arg(long, help = gettext("Do not print the time field"))]
    pub no_time: bool,

    #[arg(long, help = gettext("Do not print the date field"))]
    pub no_date: bool,

    #[arg(long, help = gettext("Do not print the remainder of the line"))]
    pub no_remain: bool,
}

impl FieldFlags {
    pub fn visibility(&self) -> FieldVisibility {
        FieldVisibility {
            mode: !self.no_mode,
            owner: !self.no_owner,
            size: !self.no_size,
            time: !self.no_time,
            date: !self.no_date,
            remain: !self.no_remain,
        }
    }
}

/// Where the template text comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateSource {
    /// Compiled-in default of the tool
    Builtin(&'static str),
    /// Bundled template, by name
    Bundled(&'static str),
    /// Template file on disk
    File(PathBuf),
}

impl TemplateSource {
    /// Resolve a `--template` argument: a bundled name when `allow_bundled`
    /// and the name exists, a file path otherwise.  Without an argument the
    /// tool's built-in template is used.
    pub fn select(arg: Option<&str>, builtin: &'static str, allow_bundled: bool) -> Self {
        match arg {
            None => TemplateSource::Builtin(builtin),
            Some(name) if allow_bundled => match bundled_names().find(|n| *n == name) {
                Some(n) => TemplateSource::Bundled(n),
                None => TemplateSource::File(PathBuf::from(name)),
            },
            Some(path) => TemplateSource::File(PathBuf::from(path)),
        }
    }

    /// Template text
    pub fn load(&self) -> ListResult<String> {
        match self {
            TemplateSource::Builtin(source) => Ok(source.to_string()),
            TemplateSource::Bundled(name) => Ok(bundled_template(name)
                .unwrap_or_default()
                .to_string()),
            TemplateSource::File(path) => {
                fs::read_to_string(path).map_err(|source| ListError::Open {
                    path: path.clone(),
                    source,
                })
            }
        }
    }
}

/// Everything a reformatting run needs, fixed at startup
#[derive(Debug, Clone)]
pub struct FormatConfig {
    pub visibility: FieldVisibility,
    pub template: TemplateSource,
    pub debug: bool,
}
