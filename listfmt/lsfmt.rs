//
// Copyright (c) 2025-2026 Jeff Garzik
//
// This file is part of the posixutils-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

//! lsfmt - reformat `ls -l` output through a template

use std::process::ExitCode;

use clap::Parser;
use gettextrs::{LocaleCategory, bind_textdomain_codeset, gettext, setlocale, textdomain};
use listfmt::config::{FieldFlags, FormatConfig, LINE_TEMPLATE, TemplateSource, bundled_names};
use plib::PROJECT_NAME;

const TOOL: &str = "lsfmt";

/// lsfmt - reformat `ls -l` output through a template
#[derive(Parser)]
#[command(version, about = gettext("lsfmt - reformat ls -l output through a template"))]
struct Args {
    #[command(flatten)]
    fields: FieldFlags,

    #[arg(long, value_name = "NAME|FILE", help = gettext("Bundled template name or path to a template file"))]
    template: Option<String>,

    #[arg(long, help = gettext("List the bundled templates and exit"))]
    list_templates: bool,

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
        template: TemplateSource::select(args.template.as_deref(), LINE_TEMPLATE, true),
        debug: args.debug,
    };
    listfmt::init_logging(config.debug);

    if args.list_templates {
        for name in bundled_names() {
            println!("{}", name);
        }
        return ExitCode::SUCCESS;
    }

    match listfmt::reformat::run(TOOL, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}: {}", TOOL, e);
            ExitCode::FAILURE
        }
    }
}
