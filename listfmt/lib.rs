//
// Copyright (c) 2025-2026 Jeff Garzik
//
// This file is part of the posixutils-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

//! Shared code of the listing filters `tarls`, `lsfmt` and `lsrender`

pub mod archive;
pub mod compression;
pub mod config;
pub mod error;
pub mod extract;
pub mod list;
pub mod output;
pub mod record;
pub mod reformat;
pub mod template;
pub mod ustar;

/// Set up `env_logger`: `RUST_LOG` decides unless `debug` forces debug
/// level.  Log lines carry no timestamps.
pub fn init_logging(debug: bool) {
    let mut builder = env_logger::Builder::from_default_env();
    if debug {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.format_timestamp(None).init();
}
