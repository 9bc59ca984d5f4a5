//
// Copyright (c) 2025-2026 Jeff Garzik
//
// This file is part of the posixutils-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

//! Symbolic rendering of file mode bits, as in the first column of `ls -l`.

/// File type mask and directory type, as stored in `st_mode` and tar headers.
pub const S_IFMT: u32 = 0o170000;
pub const S_IFDIR: u32 = 0o040000;

/// Permission bits in output order, paired with the character shown when set.
const PERM_BITS: [(u32, char); 9] = [
    (0o400, 'r'),
    (0o200, 'w'),
    (0o100, 'x'),
    (0o040, 'r'),
    (0o020, 'w'),
    (0o010, 'x'),
    (0o004, 'r'),
    (0o002, 'w'),
    (0o001, 'x'),
];

/// Format a mode as a 10 character string such as `drwxr-xr-x`.
///
/// The first character is `d` when `is_dir` is set or the mode carries the
/// directory file type, `-` otherwise.  setuid, setgid, sticky and other
/// file types are not represented.
pub fn format_mode(mode: u32, is_dir: bool) -> String {
    let mut s = String::with_capacity(10);

    s.push(if is_dir || mode & S_IFMT == S_IFDIR {
        'd'
    } else {
        '-'
    });

    for (bit, ch) in PERM_BITS {
        s.push(if mode & bit != 0 { ch } else { '-' });
    }

    s
}
