//
// Copyright (c) 2025-2026 Jeff Garzik
//
// This file is part of the posixutils-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

use std::fs;
use std::io::{self, Write};

use libflate::gzip;
use plib::testing::{run_test, run_test_base, run_test_with_checker, TestPlan};
use tempfile::TempDir;

const TARLS: &str = env!("CARGO_BIN_EXE_tarls");

// 2024-01-15 09:30:00 UTC
const MTIME: u64 = 1_705_311_000;

// no passwd or group entry is expected for this id
const NOBODY_ID: u64 = 2_000_000;

fn tarls_test(args: &[&str], expected_out: &str, expected_err: &str, expected_exit_code: i32) {
    run_test(TestPlan {
        cmd: String::from(TARLS),
        args: args.iter().map(|s| String::from(*s)).collect(),
        stdin_data: String::new(),
        expected_out: String::from(expected_out),
        expected_err: String::from(expected_err),
        expected_exit_code,
    });
}

fn base_header(entry_type: tar::EntryType, mode: u32, size: u64) -> tar::Header {
    let mut header = tar::Header::new_ustar();
    header.set_entry_type(entry_type);
    header.set_mode(mode);
    header.set_uid(NOBODY_ID);
    header.set_gid(NOBODY_ID);
    header.set_mtime(MTIME);
    header.set_size(size);
    header
}

/// `dir/` (0755) and `dir/hello.txt` (0644, 6 bytes)
fn sample_archive() -> Vec<u8> {
    let mut builder = tar::Builder::new(Vec::new());

    // set_path would drop the trailing slash
    let mut header = base_header(tar::EntryType::Directory, 0o755, 0);
    header.as_old_mut().name[..4].copy_from_slice(b"dir/");
    header.set_cksum();
    builder.append(&header, io::empty()).unwrap();

    let data = b"hello\n";
    let mut header = base_header(tar::EntryType::Regular, 0o644, data.len() as u64);
    header.set_path("dir/hello.txt").unwrap();
    header.set_cksum();
    builder.append(&header, &data[..]).unwrap();

    builder.into_inner().unwrap()
}

fn gzipped(data: &[u8]) -> Vec<u8> {
    let mut encoder = gzip::Encoder::new(Vec::new()).unwrap();
    encoder.write_all(data).unwrap();
    encoder.finish().into_result().unwrap()
}

const SAMPLE_LISTING_WITH_TIME: &str = "\
drwxr-xr-x 2000000/2000000         0 2024-01-15 09:30 dir/
-rw-r--r-- 2000000/2000000         6 2024-01-15 09:30 dir/hello.txt
";

const SAMPLE_LISTING: &str = "\
drwxr-xr-x 2000000/2000000         0 dir/
-rw-r--r-- 2000000/2000000         6 dir/hello.txt
";

#[test]
fn test_tarls_directory_entry() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("sample.tar");
    fs::write(&path, sample_archive()).unwrap();

    tarls_test(
        &["--path", path.to_str().unwrap(), "--timestamp"],
        SAMPLE_LISTING_WITH_TIME,
        "",
        0,
    );
}

#[test]
fn test_tarls_timestamp_off_by_default() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("sample.tar");
    fs::write(&path, sample_archive()).unwrap();

    tarls_test(
        &["--path", path.to_str().unwrap()],
        SAMPLE_LISTING,
        "",
        0,
    );
}

#[test]
fn test_tarls_gzip_archive() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("sample.tar.gz");
    fs::write(&path, gzipped(&sample_archive())).unwrap();

    tarls_test(
        &["--path", path.to_str().unwrap(), "--timestamp"],
        SAMPLE_LISTING_WITH_TIME,
        "",
        0,
    );
}

#[test]
fn test_tarls_stdin() {
    let args = vec![
        String::from("--path"),
        String::from("-"),
        String::from("--timestamp"),
    ];
    let output = run_test_base(TARLS, &args, &gzipped(&sample_archive()));

    assert_eq!(String::from_utf8_lossy(&output.stdout), SAMPLE_LISTING_WITH_TIME);
    assert!(output.stderr.is_empty());
    assert!(output.status.success());
}

#[test]
fn test_tarls_truncated_archive_stops_quietly() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("short.tar");
    let mut data = sample_archive();
    // keep the first header, cut into the second one
    data.truncate(512 + 100);
    fs::write(&path, data).unwrap();

    tarls_test(
        &["--path", path.to_str().unwrap()],
        "drwxr-xr-x 2000000/2000000         0 dir/\n",
        "",
        0,
    );
}

#[test]
fn test_tarls_missing_path() {
    tarls_test(&[], "Please provide a valid path to the tar file.\n", "", 0);
    tarls_test(
        &["--path", ""],
        "Please provide a valid path to the tar file.\n",
        "",
        0,
    );
}

#[test]
fn test_tarls_unreadable_archive() {
    run_test_with_checker(
        TestPlan {
            cmd: String::from(TARLS),
            args: vec![
                String::from("--path"),
                String::from("/nonexistent/archive.tar"),
            ],
            stdin_data: String::new(),
            expected_out: String::new(),
            expected_err: String::new(),
            expected_exit_code: 1,
        },
        |plan, output| {
            assert!(output.stdout.is_empty());
            let stderr = String::from_utf8_lossy(&output.stderr);
            assert!(stderr.starts_with("tarls: /nonexistent/archive.tar: "));
            assert_eq!(output.status.code(), Some(plan.expected_exit_code));
        },
    );
}

#[test]
fn test_tarls_custom_template() {
    let dir = TempDir::new().unwrap();
    let archive = dir.path().join("sample.tar");
    fs::write(&archive, sample_archive()).unwrap();
    let template = dir.path().join("names.hbs");
    fs::write(&template, "{{name}} ({{size}} bytes)").unwrap();

    tarls_test(
        &[
            "--path",
            archive.to_str().unwrap(),
            "--template",
            template.to_str().unwrap(),
        ],
        "dir/ (0 bytes)\ndir/hello.txt (6 bytes)\n",
        "",
        0,
    );
}

#[test]
fn test_tarls_bad_template_is_fatal() {
    let dir = TempDir::new().unwrap();
    let archive = dir.path().join("sample.tar");
    fs::write(&archive, sample_archive()).unwrap();
    let template = dir.path().join("broken.hbs");
    fs::write(&template, "{{#if name}}never closed").unwrap();

    run_test_with_checker(
        TestPlan {
            cmd: String::from(TARLS),
            args: vec![
                String::from("--path"),
                archive.to_str().unwrap().to_string(),
                String::from("--template"),
                template.to_str().unwrap().to_string(),
            ],
            stdin_data: String::new(),
            expected_out: String::new(),
            expected_err: String::new(),
            expected_exit_code: 1,
        },
        |plan, output| {
            assert!(output.stdout.is_empty());
            let stderr = String::from_utf8_lossy(&output.stderr);
            assert!(stderr.starts_with("tarls: template error: "));
            assert_eq!(output.status.code(), Some(plan.expected_exit_code));
        },
    );
}
