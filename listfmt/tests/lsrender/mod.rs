//
// Copyright (c) 2025-2026 Jeff Garzik
//
// This file is part of the posixutils-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

use std::fs;

use plib::testing::{run_test, run_test_with_checker, TestPlan};
use tempfile::TempDir;

const LSRENDER: &str = env!("CARGO_BIN_EXE_lsrender");

fn lsrender_test(args: &[&str], stdin_data: &str, expected_out: &str, expected_err: &str) {
    run_test(TestPlan {
        cmd: String::from(LSRENDER),
        args: args.iter().map(|s| String::from(*s)).collect(),
        stdin_data: String::from(stdin_data),
        expected_out: String::from(expected_out),
        expected_err: String::from(expected_err),
        expected_exit_code: 0,
    });
}

#[test]
fn test_lsrender_default() {
    lsrender_test(
        &[],
        "-rw-r--r-- alice 1024 2024-01-15 09:30 report.txt\n",
        "-rw-r--r-- alice     1024 2024-01-15 09:30 report.txt\n",
        "",
    );
}

#[test]
fn test_lsrender_no_owner_no_mode() {
    lsrender_test(
        &["--no-owner", "--no-mode"],
        "-rw-r--r-- alice 7 2024-01-15 09:30 a b  c\n",
        "       7 2024-01-15 09:30 a b c\n",
        "",
    );
}

#[test]
fn test_lsrender_repeat_helper() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bar.hbs");
    fs::write(&path, "{{ljust remainder 6}}|{{repeat \"#\" 3}}|").unwrap();

    lsrender_test(
        &["--template", path.to_str().unwrap()],
        "-rw-r--r-- alice 1024 2024-01-15 09:30 a.txt\n",
        "a.txt |###|\n",
        "",
    );
}

#[test]
fn test_lsrender_render_error_continues() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("strict.hbs");
    fs::write(&path, "{{remainder}} {{colour}}").unwrap();

    run_test_with_checker(
        TestPlan {
            cmd: String::from(LSRENDER),
            args: vec![String::from("--template"), path.to_str().unwrap().to_string()],
            stdin_data: String::from(
                "-rw-r--r-- a 1 2024-01-15 09:30 one\n-rw-r--r-- a 1 2024-01-15 09:30 two\n",
            ),
            expected_out: String::new(),
            expected_err: String::new(),
            expected_exit_code: 0,
        },
        |plan, output| {
            assert!(output.stdout.is_empty());
            let stderr = String::from_utf8_lossy(&output.stderr);
            let lines: Vec<&str> = stderr.lines().collect();
            assert_eq!(lines.len(), 2);
            assert!(lines[0].starts_with("lsrender: "));
            assert!(lines[0].ends_with(": -rw-r--r-- a 1 2024-01-15 09:30 one"));
            assert!(lines[1].ends_with(": -rw-r--r-- a 1 2024-01-15 09:30 two"));
            assert_eq!(output.status.code(), Some(plan.expected_exit_code));
        },
    );
}

#[test]
fn test_lsrender_takes_no_bundled_names() {
    run_test_with_checker(
        TestPlan {
            cmd: String::from(LSRENDER),
            args: vec![String::from("--template"), String::from("long")],
            stdin_data: String::new(),
            expected_out: String::new(),
            expected_err: String::new(),
            expected_exit_code: 1,
        },
        |plan, output| {
            assert!(output.stdout.is_empty());
            let stderr = String::from_utf8_lossy(&output.stderr);
            assert!(stderr.starts_with("lsrender: long: "));
            assert_eq!(output.status.code(), Some(plan.expected_exit_code));
        },
    );
}

#[test]
fn test_lsrender_debug_trace() {
    run_test_with_checker(
        TestPlan {
            cmd: String::from(LSRENDER),
            args: vec![String::from("--debug")],
            stdin_data: String::from("-rw-r--r-- alice 7 2024-01-15 09:30 a.txt\n"),
            expected_out: String::from("-rw-r--r-- alice        7 2024-01-15 09:30 a.txt\n"),
            expected_err: String::new(),
            expected_exit_code: 0,
        },
        |plan, output| {
            assert_eq!(String::from_utf8_lossy(&output.stdout), plan.expected_out);
            let stderr = String::from_utf8_lossy(&output.stderr);
            assert!(stderr.contains("template: "));
            assert!(stderr.contains("size=7"));
            assert!(output.status.success());
        },
    );
}

#[test]
fn test_lsrender_no_remain_has_no_trailing_blank() {
    lsrender_test(
        &["--no-remain"],
        "-rw-r--r-- alice 7 2024-01-15 09:30 a.txt\n",
        "-rw-r--r-- alice        7 2024-01-15 09:30\n",
        "",
    );
}
