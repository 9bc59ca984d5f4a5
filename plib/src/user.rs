//
// Copyright (c) 2024 Jeff Garzik
//
// This file is part of the posixutils-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

use std::ffi::CStr;
use std::mem::MaybeUninit;
use std::ptr;

const INITIAL_BUFSZ: usize = 1024;
const MAX_BUFSZ: usize = 1024 * 1024;

/// User account information from the system password database.
pub struct User {
    pub name: String,
    pub uid: libc::uid_t,
    pub gid: libc::gid_t,
}

/// Look up a user by UID.
///
/// Uses the reentrant `getpwuid_r`, growing the scratch buffer while the
/// C library reports `ERANGE`.
pub fn get_by_uid(uid: u32) -> Option<User> {
    let mut bufsz = INITIAL_BUFSZ;

    loop {
        let mut buf: Vec<libc::c_char> = vec![0; bufsz];
        let mut pwd = MaybeUninit::<libc::passwd>::uninit();
        let mut result: *mut libc::passwd = ptr::null_mut();

        let rc = unsafe {
            libc::getpwuid_r(
                uid,
                pwd.as_mut_ptr(),
                buf.as_mut_ptr(),
                buf.len(),
                &mut result,
            )
        };

        if rc == libc::ERANGE && bufsz < MAX_BUFSZ {
            bufsz *= 2;
            continue;
        }
        if rc != 0 || result.is_null() {
            return None;
        }

        // result points at pwd, whose strings live in buf
        let passwd = unsafe { pwd.assume_init_ref() };
        if passwd.pw_name.is_null() {
            return None;
        }
        let name = unsafe { CStr::from_ptr(passwd.pw_name) }
            .to_string_lossy()
            .to_string();

        return Some(User {
            name,
            uid: passwd.pw_uid,
            gid: passwd.pw_gid,
        });
    }
}

/// Display name for a UID: the account name, or the decimal UID when the
/// password database has no entry for it.
pub fn resolve_user(uid: u32) -> String {
    match get_by_uid(uid) {
        Some(user) => user.name,
        None => uid.to_string(),
    }
}
