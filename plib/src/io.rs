//
// Copyright (c) 2024 Jeff Garzik
//
// This file is part of the posixutils-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

use std::fs;
use std::io::{self, Read};
use std::path::Path;

/// Open `pathname` for reading, or standard input when it is `-`.
pub fn input_stream(pathname: &Path) -> io::Result<Box<dyn Read>> {
    let file: Box<dyn Read> = if pathname.as_os_str() == "-" {
        Box::new(io::stdin().lock())
    } else {
        Box::new(fs::File::open(pathname)?)
    };

    Ok(file)
}
