//! Shared helpers for CLI specs

#![allow(dead_code)]

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Booking page with a visible appointment button
pub const OPEN_PAGE: &str = r#"<!doctype html>
<html><body>
  <h1>Pré-inscription</h1>
  <p>Prendre un rendez-vous disponible</p>
  <button class="btn">Prendre rendez-vous</button>
</body></html>"#;

/// Booking page with nothing to click
pub const CLOSED_PAGE: &str = r#"<!doctype html>
<html><body>
  <h1>Pré-inscription</h1>
  <p>Aucun créneau disponible. Service fermé.</p>
</body></html>"#;

/// Scratch directory the CLI runs in
pub struct Project {
    dir: TempDir,
}

impl Project {
    pub fn empty() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn join(&self, rel: &str) -> PathBuf {
        self.dir.path().join(rel)
    }

    /// Write a file relative to the project root
    pub fn file(&self, rel: &str, content: &str) -> PathBuf {
        let path = self.join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(&path, content).unwrap();
        path
    }

    pub fn read(&self, rel: &str) -> String {
        std::fs::read_to_string(self.join(rel)).unwrap()
    }

    /// `file://` URL for a page written into the project
    pub fn page(&self, rel: &str, html: &str) -> String {
        format!("file://{}", self.file(rel, html).display())
    }

    /// `slotwatch.toml` monitoring `url`, with no settle delay and no
    /// desktop popups
    pub fn config(&self, url: &str, extra: &str) -> PathBuf {
        self.file(
            "slotwatch.toml",
            &format!(
                r#"target_url = "{url}"
log_path = "results.txt"

{extra}

[source]
settle_seconds = 0

[notify]
desktop = false
"#
            ),
        )
    }

    pub fn slotwatch(&self) -> CliBuilder {
        CliBuilder::new(Some(self.path()))
    }
}

/// Command with no project directory
pub fn cli() -> CliBuilder {
    CliBuilder::new(None)
}

pub struct CliBuilder {
    cmd: Command,
}

impl CliBuilder {
    fn new(dir: Option<&Path>) -> Self {
        let mut cmd = Command::cargo_bin("slotwatch").unwrap();
        for var in [
            "SLOTWATCH_CONFIG",
            "SLOTWATCH_URL",
            "SLOTWATCH_INTERVAL",
            "SLOTWATCH_TIMES",
            "SLOTWATCH_ALLOW",
            "SLOTWATCH_EXCLUDE",
            "SLOTWATCH_LOG",
            "RUST_LOG",
        ] {
            cmd.env_remove(var);
        }
        if let Some(dir) = dir {
            cmd.current_dir(dir);
        }
        cmd.timeout(std::time::Duration::from_secs(30));
        Self { cmd }
    }

    pub fn args(mut self, args: &[&str]) -> Self {
        self.cmd.args(args);
        self
    }

    pub fn env(mut self, key: &str, value: &str) -> Self {
        self.cmd.env(key, value);
        self
    }

    /// The underlying command, for custom assertions
    pub fn command(self) -> Command {
        self.cmd
    }

    pub fn passes(mut self) -> RunAssert {
        RunAssert::new(self.cmd.assert().success())
    }

    pub fn fails(mut self) -> RunAssert {
        RunAssert::new(self.cmd.assert().failure())
    }
}

pub struct RunAssert {
    stdout: String,
    stderr: String,
}

impl RunAssert {
    fn new(assert: assert_cmd::assert::Assert) -> Self {
        let output = assert.get_output();
        Self {
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }

    pub fn stdout(&self) -> &str {
        &self.stdout
    }

    pub fn stdout_has(self, needle: &str) -> Self {
        assert!(
            self.stdout.contains(needle),
            "stdout should contain {:?}\nstdout:\n{}\nstderr:\n{}",
            needle,
            self.stdout,
            self.stderr
        );
        self
    }

    pub fn stdout_lacks(self, needle: &str) -> Self {
        assert!(
            !self.stdout.contains(needle),
            "stdout should not contain {:?}\nstdout:\n{}",
            needle,
            self.stdout
        );
        self
    }

    pub fn stdout_eq(self, expected: &str) -> Self {
        similar_asserts::assert_eq!(self.stdout.as_str(), expected);
        self
    }

    pub fn stderr_has(self, needle: &str) -> Self {
        assert!(
            self.stderr.contains(needle),
            "stderr should contain {:?}\nstderr:\n{}",
            needle,
            self.stderr
        );
        self
    }
}
