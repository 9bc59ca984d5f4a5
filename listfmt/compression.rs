//
// Copyright (c) 2025-2026 Jeff Garzik
//
// This file is part of the posixutils-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

//! Transparent gzip decompression of archive input

use libflate::gzip;
use log::debug;
use std::io::{self, BufRead, BufReader, Read};
use std::path::Path;

/// Gzip magic bytes (first two bytes of a gzip file)
pub const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// Check if data starts with gzip magic bytes
pub fn is_gzip(data: &[u8]) -> bool {
    data.starts_with(&GZIP_MAGIC)
}

/// Wrap `reader` in a gzip decoder when its first bytes carry the gzip magic
pub fn decompress_if_gzip<R: Read + 'static>(reader: R) -> io::Result<Box<dyn Read>> {
    let mut reader = BufReader::with_capacity(plib::BUFSZ, reader);

    // fill_buf peeks without consuming; one read is enough for two bytes
    // on files and pipes alike
    if is_gzip(reader.fill_buf()?) {
        debug!("gzip compressed archive");
        Ok(Box::new(gzip::Decoder::new(reader)?))
    } else {
        Ok(Box::new(reader))
    }
}

/// Open an archive file (or standard input for `-`), decompressing gzip
/// input on the fly
pub fn open_archive(path: &Path) -> io::Result<Box<dyn Read>> {
    let file = plib::io::input_stream(path)?;
    decompress_if_gzip(file)
}
