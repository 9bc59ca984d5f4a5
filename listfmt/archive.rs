//
// Copyright (c) 2025-2026 Jeff Garzik
//
// This file is part of the posixutils-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

use crate::error::ArchiveResult;
use std::path::PathBuf;

/// Type of archive entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EntryType {
    #[default]
    Regular,
    Directory,
    Symlink,
    Hardlink,
    BlockDevice,
    CharDevice,
    Fifo,
}

/// Header metadata of one archive member
#[derive(Debug, Clone, Default)]
pub struct ArchiveEntry {
    /// Path of the member within the archive
    pub path: PathBuf,
    /// Permission bits (and file type bits, if the archiver stored them)
    pub mode: u32,
    pub uid: u32,
    pub gid: u32,
    /// Data size in bytes
    pub size: u64,
    /// Modification time (seconds since epoch, negative before 1970)
    pub mtime: i64,
    pub entry_type: EntryType,
    /// Link target for symlinks and hardlinks
    pub link_target: Option<PathBuf>,
}

impl ArchiveEntry {
    pub fn is_dir(&self) -> bool {
        self.entry_type == EntryType::Directory
    }
}

/// Trait for reading archives
pub trait ArchiveReader {
    /// Read the next entry header.
    /// Returns None when the archive is exhausted
    fn read_entry(&mut self) -> ArchiveResult<Option<ArchiveEntry>>;

    /// Skip the data of the current entry
    fn skip_data(&mut self) -> ArchiveResult<()>;
}
