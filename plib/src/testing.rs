//
// Copyright (c) 2024 Hemi Labs, Inc.
//
// This file is part of the posixutils-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};

pub struct TestPlan {
    pub cmd: String,
    pub args: Vec<String>,
    pub stdin_data: String,
    pub expected_out: String,
    pub expected_err: String,
    pub expected_exit_code: i32,
}

/// Locate the binary under test.
///
/// An absolute path (such as `env!("CARGO_BIN_EXE_<name>")`) is used as
/// is; a bare command name is looked up in the workspace target directory,
/// one level above the package directory the tests run in.
fn binary_path(cmd: &str) -> PathBuf {
    let path = PathBuf::from(cmd);
    if path.is_absolute() {
        return path;
    }

    let profile = if cfg!(debug_assertions) {
        "debug"
    } else {
        "release"
    };
    let target_dir = match std::env::var_os("CARGO_TARGET_DIR") {
        Some(dir) => PathBuf::from(dir),
        None => std::env::current_dir()
            .unwrap()
            .parent()
            .unwrap()
            .join("target"),
    };

    target_dir.join(profile).join(cmd)
}

/// Run `cmd` with `args`, feeding `stdin_data` on standard input.
pub fn run_test_base(cmd: &str, args: &[String], stdin_data: &[u8]) -> Output {
    let mut child = Command::new(binary_path(cmd))
        .args(args)
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap_or_else(|e| panic!("failed to spawn command {cmd}: {e}"));

    if let Some(mut stdin) = child.stdin.take() {
        // the tool may stop reading early (empty line), so a broken pipe is fine
        if let Err(e) = stdin.write_all(stdin_data) {
            assert_eq!(e.kind(), std::io::ErrorKind::BrokenPipe, "stdin: {e}");
        }
    }

    child.wait_with_output().expect("failed to wait for child")
}

pub fn run_test(plan: TestPlan) {
    let output = run_test_base(&plan.cmd, &plan.args, plan.stdin_data.as_bytes());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout, plan.expected_out);

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(stderr, plan.expected_err);

    assert_eq!(output.status.code(), Some(plan.expected_exit_code));
    if plan.expected_exit_code == 0 {
        assert!(output.status.success());
    }
}

/// Run the plan and hand the raw output to `checker` instead of comparing
/// it against the expected fields.
pub fn run_test_with_checker<F: FnMut(&TestPlan, &Output)>(plan: TestPlan, mut checker: F) {
    let output = run_test_base(&plan.cmd, &plan.args, plan.stdin_data.as_bytes());
    checker(&plan, &output);
}
