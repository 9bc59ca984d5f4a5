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

pub struct Group {
    pub name: String,
    pub gid: libc::gid_t,
}

/// Look up a group by GID with the reentrant `getgrgid_r`.
pub fn get_by_gid(gid: u32) -> Option<Group> {
    let mut bufsz = INITIAL_BUFSZ;

    loop {
        let mut buf: Vec<libc::c_char> = vec![0; bufsz];
        let mut grp = MaybeUninit::<libc::group>::uninit();
        let mut result: *mut libc::group = ptr::null_mut();

        let rc = unsafe {
            libc::getgrgid_r(
                gid,
                grp.as_mut_ptr(),
                buf.as_mut_ptr(),
                buf.len(),
                &mut result,
            )
        };

        // large groups can overflow the member list buffer
        if rc == libc::ERANGE && bufsz < MAX_BUFSZ {
            bufsz *= 2;
            continue;
        }
        if rc != 0 || result.is_null() {
            return None;
        }

        let group = unsafe { grp.assume_init_ref() };
        if group.gr_name.is_null() {
            return None;
        }
        let name = unsafe { CStr::from_ptr(group.gr_name) }
            .to_string_lossy()
            .to_string();

        return Some(Group {
            name,
            gid: group.gr_gid,
        });
    }
}

/// Display name for a GID, falling back to the decimal GID.
pub fn resolve_group(gid: u32) -> String {
    match get_by_gid(gid) {
        Some(group) => group.name,
        None => gid.to_string(),
    }
}
