//
// Copyright (c) 2025-2026 Jeff Garzik
//
// This file is part of the posixutils-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

//! tarls - list the contents of a tar archive

use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use gettextrs::{LocaleCategory, bind_textdomain_codeset, gettext, setlocale, textdomain};
use listfmt::compression::open_archive;
use listfmt::config::{ARCHIVE_TEMPLATE, TemplateSource};
use listfmt::error::{ListError, ListResult};
use listfmt::list::{ListOptions, list_archive};
use listfmt::output::Sinks;
use listfmt::template::CompiledTemplate;
use plib::PROJECT_NAME;

const TOOL: &str = "tarls";

/// tarls - list the contents of a tar archive
#[derive(Parser)]
#[command(version, about = gettext("tarls - list the contents of a tar archive"))]
struct Args {
    #[arg(long, value_name = "FILE", help = gettext("Path to the tar file (- for standard input)"))]
    path: Option<String>,

    // the help text reads inverted: the flag turns the timestamp on
    #[arg(long, help = gettext("Exclude timestamp from the output"))]
    timestamp: bool,

    #[arg(long, value_name = "FILE", help = gettext("Template file to use instead of the built-in layout"))]
    template: Option<String>,

    #[arg(long, help = gettext("Trace each archive member on standard error"))]
    debug: bool,
}

fn list_tar(args: &Args, path: &Path) -> ListResult<()> {
    let source = TemplateSource::select(args.template.as_deref(), ARCHIVE_TEMPLATE, false);
    let template = CompiledTemplate::compile(&source.load()?)?;

    let reader = open_archive(path).map_err(|source| ListError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let mut out = BufWriter::new(io::stdout().lock());
    let mut err = io::stderr().lock();
    let mut sinks = Sinks {
        out: &mut out,
        err: &mut err,
        tool: TOOL,
    };
    let options = ListOptions {
        show_timestamp: args.timestamp,
    };
    list_archive(reader, &mut sinks, &template, &options)?;

    out.flush()?;
    Ok(())
}

fn main() -> ExitCode {
    setlocale(LocaleCategory::LcAll, "");
    textdomain(PROJECT_NAME).ok();
    bind_textdomain_codeset(PROJECT_NAME, "UTF-8").ok();

    let args = Args::parse();
    listfmt::init_logging(args.debug);

    let path = match args.path.as_deref() {
        Some(p) if !p.is_empty() => Path::new(p),
        _ => {
            println!("{}", gettext("Please provide a valid path to the tar file."));
            return ExitCode::SUCCESS;
        }
    };

    match list_tar(&args, path) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}: {}", TOOL, e);
            ExitCode::FAILURE
        }
    }
}
