//! Common test helpers for integration tests

#![allow(dead_code)]

use serde_json::Value;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

/// A scratch project directory with its own (empty) global config home.
pub struct Project {
    pub dir: TempDir,
    pub config_home: TempDir,
}

impl Project {
    /// A fresh directory that has not been initialized.
    pub fn empty() -> Self {
        Self {
            dir: TempDir::new().expect("create project dir"),
            config_home: TempDir::new().expect("create config home"),
        }
    }

    /// A fresh directory after `airaware init`.
    pub fn initialized() -> Self {
        let project = Self::empty();
        let out = project.run(&["init"]);
        assert!(out.status.success(), "init failed: {}", stdout(&out));
        project
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Run the airaware binary inside the project.
    pub fn run(&self, args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_airaware"))
            .args(args)
            .current_dir(self.dir.path())
            .env("XDG_CONFIG_HOME", self.config_home.path())
            .env_remove("AIRAWARE_API_KEY")
            .output()
            .expect("failed to run airaware")
    }

    /// Run with `--json` and parse the single result document.
    pub fn run_json(&self, args: &[&str]) -> Value {
        let mut full = vec!["--json"];
        full.extend_from_slice(args);
        let out = self.run(&full);
        assert!(
            out.status.success(),
            "airaware {:?} failed: {}",
            args,
            stdout(&out)
        );
        serde_json::from_str(stdout(&out).trim()).expect("stdout is one JSON document")
    }

    /// Register a station and return its ID.
    pub fn add_station(&self, name: &str) -> String {
        let station = self.run_json(&["station", "add", "--name", name, "--lat", "37.8", "--lon", "-122.4"]);
        station["id"].as_str().expect("station id").to_string()
    }
}

pub fn stdout(out: &Output) -> String {
    String::from_utf8_lossy(&out.stdout).to_string()
}

pub fn stderr(out: &Output) -> String {
    String::from_utf8_lossy(&out.stderr).to_string()
}
