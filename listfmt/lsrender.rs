//
// Copyright (c) 2025-2026 Jeff Garzik
//
// This file is part of the posixutils-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

//! lsrender - render `ls -l` lines with a template file

use std::process::ExitCode;

use clap::Parser;
use gettextrs::{LocaleCategory, bind_textdomain_codeset, gettext, setlocale, textdomain};
use listfmt::config::{FieldFlags, FormatConfig, LINE_TEMPLATE, TemplateSource};
use plib::PROJECT_NAME;

const TOOL: &str = "lsrender";

/// lsrender - render `ls -l` lines with a template file
#[derive(Parser)]
#[command(version, about = gettext("lsrender - render ls -l lines with a template file"))]
struct Args {
    #[command(flatten)]
    fields: FieldFlags,

    #[arg(long, value_name = "FILE", help = gettext("Template file to use instead of the built-in layout"))]
    template: Option<String>,

    #[arg(long, help = gettext("Trace the fields of each line on standard error"))]
    debug: bool,
}

fn main() -> ExitCode {
    setlocale(LocaleCategory::LcAll, "");
    textdomain(PROJECT_NAME).ok();
    bind_textdomain_codeset(PROJECT_NAME, "UTF-8").ok();

    let args = Args::parse();
    let config = FormatConfig {
        visibility: args.fields.visibility(),
        template: TemplateSource::select(args.template.as_deref(), LINE_TEMPLATE, false),
        debug: args.debug,
    };
    listfmt::init_logging(config.debug);

    match listfmt::reformat::run(TOOL, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}: {}", TOOL, e);
            ExitCode::FAILURE
        }
    }
}
