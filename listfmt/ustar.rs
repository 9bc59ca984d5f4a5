//
// Copyright (c) 2025-2026 Jeff Garzik
//
// This file is part of the posixutils-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

//! tar archive reader (ustar, with pax and GNU long name extensions)
//!
//! Header format (512 bytes):
//! - name:     100 bytes (offset 0)
//! - mode:       8 bytes (offset 100)
//! - uid:        8 bytes (offset 108)
//! - gid:        8 bytes (offset 116)
//! - size:      12 bytes (offset 124)
//! - mtime:     12 bytes (offset 136)
//! - chksum:     8 bytes (offset 148)
//! - typeflag:   1 byte  (offset 156)
//! - linkname: 100 bytes (offset 157)
//! - magic:      6 bytes (offset 257) "ustar\0"
//! - version:    2 bytes (offset 263) "00"
//! - uname:     32 bytes (offset 265)
//! - gname:     32 bytes (offset 297)
//! - devmajor:   8 bytes (offset 329)
//! - devminor:   8 bytes (offset 337)
//! - prefix:   155 bytes (offset 345)
//!
//! Only header metadata is decoded; member data is skipped.

use crate::archive::{ArchiveEntry, ArchiveReader, EntryType};
use crate::error::{ArchiveError, ArchiveResult};
use std::io::{self, Read};
use std::path::PathBuf;

const BLOCK_SIZE: usize = 512;
const NAME_LEN: usize = 100;
const PREFIX_LEN: usize = 155;
const LINKNAME_LEN: usize = 100;

// Header field offsets
const NAME_OFF: usize = 0;
const MODE_OFF: usize = 100;
const UID_OFF: usize = 108;
const GID_OFF: usize = 116;
const SIZE_OFF: usize = 124;
const MTIME_OFF: usize = 136;
const CHKSUM_OFF: usize = 148;
const TYPEFLAG_OFF: usize = 156;
const LINKNAME_OFF: usize = 157;
const MAGIC_OFF: usize = 257;
const PREFIX_OFF: usize = 345;

// Type flags
const REGTYPE: u8 = b'0';
const AREGTYPE: u8 = b'\0';
const LNKTYPE: u8 = b'1';
const SYMTYPE: u8 = b'2';
const CHRTYPE: u8 = b'3';
const BLKTYPE: u8 = b'4';
const DIRTYPE: u8 = b'5';
const FIFOTYPE: u8 = b'6';
const PAX_XHDR: u8 = b'x';
const PAX_GHDR: u8 = b'g';
const GNU_LONGNAME: u8 = b'L';
const GNU_LONGLINK: u8 = b'K';

/// Upper bound for extension payloads (pax records, GNU long names)
const MAX_EXTENSION_SIZE: u64 = 1024 * 1024;

/// Values carried by pax extended headers
#[derive(Debug, Clone, Default)]
struct PaxOverrides {
    path: Option<String>,
    linkpath: Option<String>,
    size: Option<u64>,
    uid: Option<u32>,
    gid: Option<u32>,
    mtime: Option<i64>,
}

impl PaxOverrides {
    /// Parse `"<len> <keyword>=<value>\n"` records
    fn parse(data: &[u8]) -> ArchiveResult<Self> {
        let mut overrides = PaxOverrides::default();
        let mut pos = 0;

        while pos < data.len() {
            // trailing NUL padding
            if data[pos] == 0 {
                break;
            }

            let space_pos = data[pos..]
                .iter()
                .position(|&b| b == b' ')
                .ok_or_else(|| invalid("pax record without length"))?;
            let record_len: usize = std::str::from_utf8(&data[pos..pos + space_pos])
                .ok()
                .and_then(|s| s.parse().ok())
                .ok_or_else(|| invalid("invalid pax record length"))?;

            if record_len <= space_pos + 1 || pos + record_len > data.len() {
                return Err(invalid("pax record extends past end"));
            }

            // keyword=value, without the trailing newline
            let record_start = pos + space_pos + 1;
            let record_end = pos + record_len - 1;
            let record = String::from_utf8_lossy(&data[record_start..record_end]);

            if let Some((keyword, value)) = record.split_once('=') {
                overrides.set_keyword(keyword, value)?;
            }

            pos += record_len;
        }

        Ok(overrides)
    }

    fn set_keyword(&mut self, keyword: &str, value: &str) -> ArchiveResult<()> {
        match keyword {
            "path" => self.path = Some(value.to_string()),
            "linkpath" => self.linkpath = Some(value.to_string()),
            "size" => self.size = Some(parse_decimal(keyword, value)?),
            "uid" => self.uid = Some(parse_decimal(keyword, value)?),
            "gid" => self.gid = Some(parse_decimal(keyword, value)?),
            "mtime" => self.mtime = Some(parse_pax_time(value)?),
            _ => {}
        }
        Ok(())
    }

    fn merge(&mut self, other: &PaxOverrides) {
        if other.path.is_some() {
            self.path.clone_from(&other.path);
        }
        if other.linkpath.is_some() {
            self.linkpath.clone_from(&other.linkpath);
        }
        self.size = other.size.or(self.size);
        self.uid = other.uid.or(self.uid);
        self.gid = other.gid.or(self.gid);
        self.mtime = other.mtime.or(self.mtime);
    }

    fn apply_to(&self, entry: &mut ArchiveEntry) {
        if let Some(ref path) = self.path {
            entry.path = PathBuf::from(path);
        }
        if let Some(ref linkpath) = self.linkpath {
            entry.link_target = Some(PathBuf::from(linkpath));
        }
        if let Some(size) = self.size {
            entry.size = size;
        }
        if let Some(uid) = self.uid {
            entry.uid = uid;
        }
        if let Some(gid) = self.gid {
            entry.gid = gid;
        }
        if let Some(mtime) = self.mtime {
            entry.mtime = mtime;
        }
    }
}

/// tar archive reader
pub struct TarReader<R: Read> {
    reader: R,
    /// Bytes of data and padding left before the next header
    pending: u64,
    /// Global pax header, applies to every following entry
    global: PaxOverrides,
}

impl<R: Read> TarReader<R> {
    pub fn new(reader: R) -> Self {
        TarReader {
            reader,
            pending: 0,
            global: PaxOverrides::default(),
        }
    }

    /// Read one header block.  A zero block or a clean end of file ends the
    /// archive.
    fn read_header_block(&mut self) -> ArchiveResult<Option<[u8; BLOCK_SIZE]>> {
        let mut header = [0u8; BLOCK_SIZE];
        if let Err(e) = self.reader.read_exact(&mut header) {
            if e.kind() == io::ErrorKind::UnexpectedEof {
                return Ok(None);
            }
            return Err(e.into());
        }

        if is_zero_block(&header) {
            return Ok(None);
        }

        if !verify_checksum(&header) {
            return Err(invalid("checksum mismatch"));
        }

        Ok(Some(header))
    }

    /// Read the payload of an extension header, consuming its padding
    fn read_extension(&mut self, header: &[u8; BLOCK_SIZE]) -> ArchiveResult<Vec<u8>> {
        let size = parse_numeric(&header[SIZE_OFF..SIZE_OFF + 12])?;
        if size > MAX_EXTENSION_SIZE {
            return Err(invalid(&format!("extension header too large: {}", size)));
        }

        let mut data = vec![0u8; size as usize];
        self.reader.read_exact(&mut data)?;
        skip_bytes(&mut self.reader, round_up_block(size)? - size)?;

        Ok(data)
    }
}

impl<R: Read> ArchiveReader for TarReader<R> {
    fn read_entry(&mut self) -> ArchiveResult<Option<ArchiveEntry>> {
        self.skip_data()?;

        let mut local = PaxOverrides::default();
        let mut long_name: Option<String> = None;
        let mut long_link: Option<String> = None;

        loop {
            let header = match self.read_header_block()? {
                Some(h) => h,
                None => return Ok(None),
            };

            match header[TYPEFLAG_OFF] {
                PAX_GHDR => {
                    let data = self.read_extension(&header)?;
                    let global = PaxOverrides::parse(&data)?;
                    self.global.merge(&global);
                }
                PAX_XHDR => {
                    let data = self.read_extension(&header)?;
                    local = PaxOverrides::parse(&data)?;
                }
                GNU_LONGNAME => {
                    let data = self.read_extension(&header)?;
                    long_name = Some(parse_string(&data));
                }
                GNU_LONGLINK => {
                    let data = self.read_extension(&header)?;
                    long_link = Some(parse_string(&data));
                }
                _ => {
                    let mut entry = parse_header(&header)?;

                    if let Some(name) = long_name {
                        entry.path = PathBuf::from(name);
                    }
                    if let Some(link) = long_link {
                        entry.link_target = Some(PathBuf::from(link));
                    }

                    // per-file values override global ones
                    self.global.apply_to(&mut entry);
                    local.apply_to(&mut entry);

                    self.pending = if has_data(entry.entry_type) {
                        round_up_block(entry.size)?
                    } else {
                        0
                    };

                    return Ok(Some(entry));
                }
            }
        }
    }

    fn skip_data(&mut self) -> ArchiveResult<()> {
        if self.pending > 0 {
            skip_bytes(&mut self.reader, self.pending)?;
            self.pending = 0;
        }
        Ok(())
    }
}

// ============================================================================
// Header parsing functions
// ============================================================================

fn invalid(msg: &str) -> ArchiveError {
    ArchiveError::InvalidHeader(msg.to_string())
}

/// Check if a block is all zeros
fn is_zero_block(block: &[u8]) -> bool {
    block.iter().all(|&b| b == 0)
}

/// Parse a header block into an ArchiveEntry
fn parse_header(header: &[u8; BLOCK_SIZE]) -> ArchiveResult<ArchiveEntry> {
    let name = parse_string(&header[NAME_OFF..NAME_OFF + NAME_LEN]);

    // the prefix field only exists in POSIX ustar headers, GNU reuses it
    let path = if &header[MAGIC_OFF..MAGIC_OFF + 6] == b"ustar\0" {
        let prefix = parse_string(&header[PREFIX_OFF..PREFIX_OFF + PREFIX_LEN]);
        build_path(&prefix, &name)
    } else {
        PathBuf::from(name)
    };

    let mode = parse_numeric(&header[MODE_OFF..MODE_OFF + 8])? as u32;
    let uid = parse_numeric(&header[UID_OFF..UID_OFF + 8])? as u32;
    let gid = parse_numeric(&header[GID_OFF..GID_OFF + 8])? as u32;
    let size = parse_numeric(&header[SIZE_OFF..SIZE_OFF + 12])?;
    let mtime = i64::try_from(parse_numeric(&header[MTIME_OFF..MTIME_OFF + 12])?)
        .map_err(|_| invalid("mtime out of range"))?;

    let linkname = parse_string(&header[LINKNAME_OFF..LINKNAME_OFF + LINKNAME_LEN]);
    let link_target = if !linkname.is_empty() {
        Some(PathBuf::from(linkname))
    } else {
        None
    };

    let mut entry_type = parse_typeflag(header[TYPEFLAG_OFF]);
    // pre-POSIX archives mark directories with a trailing slash only
    if entry_type == EntryType::Regular && path.to_string_lossy().ends_with('/') {
        entry_type = EntryType::Directory;
    }

    Ok(ArchiveEntry {
        path,
        mode,
        uid,
        gid,
        size,
        mtime,
        entry_type,
        link_target,
    })
}

/// Parse a NUL-terminated or space-padded string
fn parse_string(bytes: &[u8]) -> String {
    let end = bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len());
    String::from_utf8_lossy(&bytes[..end])
        .trim_end()
        .to_string()
}

/// Parse a numeric field: octal text, or GNU base-256 when the high bit of
/// the first byte is set.
fn parse_numeric(bytes: &[u8]) -> ArchiveResult<u64> {
    if let Some((&first, rest)) = bytes.split_first() {
        if first & 0x80 != 0 {
            if first & 0x40 != 0 {
                return Err(invalid("negative base-256 value"));
            }
            let mut value = u64::from(first & 0x3f);
            for &b in rest {
                value = value
                    .checked_mul(256)
                    .and_then(|v| v.checked_add(u64::from(b)))
                    .ok_or_else(|| invalid("base-256 value overflows"))?;
            }
            return Ok(value);
        }
    }

    let s = parse_string(bytes);
    let s = s.trim_start();
    if s.is_empty() {
        return Ok(0);
    }
    if s.starts_with('+') || s.starts_with('-') {
        return Err(invalid(&format!("invalid octal: {}", s)));
    }
    u64::from_str_radix(s, 8).map_err(|_| invalid(&format!("invalid octal: {}", s)))
}

/// Parse a pax time value, `[-]seconds[.fraction]`, rounding down to whole
/// seconds
fn parse_pax_time(value: &str) -> ArchiveResult<i64> {
    let (secs, frac) = value.split_once('.').unwrap_or((value, ""));
    let secs: i64 = parse_decimal("mtime", secs)?;
    if !frac.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid(&format!("invalid mtime: {}", value)));
    }
    if value.starts_with('-') && frac.bytes().any(|b| b != b'0') {
        return secs
            .checked_sub(1)
            .ok_or_else(|| invalid(&format!("invalid mtime: {}", value)));
    }
    Ok(secs)
}

fn parse_decimal<T: std::str::FromStr>(keyword: &str, value: &str) -> ArchiveResult<T> {
    value
        .parse()
        .map_err(|_| invalid(&format!("invalid {}: {}", keyword, value)))
}

/// Parse typeflag to EntryType
fn parse_typeflag(flag: u8) -> EntryType {
    match flag {
        REGTYPE | AREGTYPE => EntryType::Regular,
        LNKTYPE => EntryType::Hardlink,
        SYMTYPE => EntryType::Symlink,
        CHRTYPE => EntryType::CharDevice,
        BLKTYPE => EntryType::BlockDevice,
        DIRTYPE => EntryType::Directory,
        FIFOTYPE => EntryType::Fifo,
        _ => EntryType::Regular, // Treat unknown as regular
    }
}

/// Whether the size field counts data blocks following the header
fn has_data(entry_type: EntryType) -> bool {
    !matches!(
        entry_type,
        EntryType::Hardlink
            | EntryType::Symlink
            | EntryType::CharDevice
            | EntryType::BlockDevice
            | EntryType::Directory
            | EntryType::Fifo
    )
}

/// Build full path from prefix and name
fn build_path(prefix: &str, name: &str) -> PathBuf {
    if prefix.is_empty() {
        PathBuf::from(name)
    } else {
        PathBuf::from(format!("{}/{}", prefix, name))
    }
}

/// Verify header checksum
fn verify_checksum(header: &[u8; BLOCK_SIZE]) -> bool {
    let stored = match parse_numeric(&header[CHKSUM_OFF..CHKSUM_OFF + 8]) {
        Ok(v) => v as u32,
        Err(_) => return false,
    };

    stored == calculate_checksum(header)
}

/// Calculate header checksum, counting the checksum field as spaces
fn calculate_checksum(header: &[u8; BLOCK_SIZE]) -> u32 {
    let mut sum: u32 = 0;
    for (i, &byte) in header.iter().enumerate() {
        if (CHKSUM_OFF..CHKSUM_OFF + 8).contains(&i) {
            sum += b' ' as u32;
        } else {
            sum += byte as u32;
        }
    }
    sum
}

// ============================================================================
// Utility functions
// ============================================================================

/// Round up to next block boundary
fn round_up_block(size: u64) -> ArchiveResult<u64> {
    size.div_ceil(BLOCK_SIZE as u64)
        .checked_mul(BLOCK_SIZE as u64)
        .ok_or_else(|| invalid("size overflows"))
}

/// Skip bytes in a reader
fn skip_bytes<R: Read>(reader: &mut R, count: u64) -> ArchiveResult<()> {
    let mut remaining = count;
    let mut buf = [0u8; 4096];
    while remaining > 0 {
        let to_read = std::cmp::min(remaining, buf.len() as u64) as usize;
        reader.read_exact(&mut buf[..to_read])?;
        remaining -= to_read as u64;
    }
    Ok(())
}
