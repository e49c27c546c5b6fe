//! Shared testing utilities for chaps CLI tests.

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::process::Command as StdCommand;

use assert_cmd::Command;
use tempfile::TempDir;

/// Testing harness: a temporary git repository with a recording fake
/// `pants` script at its root.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    log_file: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a fresh repository with the fake pants installed.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let log_file = root.path().join("pants.log");

        let output = StdCommand::new("git")
            .arg("init")
            .current_dir(root.path())
            .output()
            .expect("Failed to init git repo");
        assert!(output.status.success());

        // The fake logs every invocation and answers the list goal with a
        // canned listing. CHAPS_TEST_EXIT overrides its exit code.
        let script = format!(
            r#"#!/bin/sh
echo "$@" >> "{log}"

case "$1" in
    list)
        printf 'demo/hello:app\ndemo/hello:lib:extra\nno-colon-line\n'
        ;;
esac

exit ${{CHAPS_TEST_EXIT:-0}}
"#,
            log = log_file.to_string_lossy()
        );

        let script_path = root.path().join("pants");
        fs::write(&script_path, script).expect("Failed to write pants script");

        let mut perms =
            fs::metadata(&script_path).expect("Failed to get metadata").permissions();
        perms.set_mode(0o755);
        fs::set_permissions(&script_path, perms).expect("Failed to set permissions");

        Self { root, log_file }
    }

    /// Repository root of the harness.
    pub fn repo_root(&self) -> &Path {
        self.root.path()
    }

    /// Create a nested directory under the repository root.
    pub fn subdir(&self, rel: &str) -> PathBuf {
        let dir = self.root.path().join(rel);
        fs::create_dir_all(&dir).expect("Failed to create subdirectory");
        dir
    }

    /// Build a command invoking the compiled `chaps` binary at the root.
    pub fn cli(&self) -> Command {
        self.cli_in(self.repo_root())
    }

    /// Build a command invoking `chaps` from a directory inside the repo.
    pub fn cli_in<P: AsRef<Path>>(&self, dir: P) -> Command {
        let mut cmd = Command::cargo_bin("chaps").expect("Failed to locate chaps binary");
        cmd.current_dir(dir.as_ref());
        cmd
    }

    /// Everything the fake pants has been invoked with, one line each.
    pub fn pants_log(&self) -> String {
        fs::read_to_string(&self.log_file).unwrap_or_default()
    }
}
