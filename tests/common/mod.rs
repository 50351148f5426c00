//! Common test utilities for ghreport integration tests

use std::path::PathBuf;

use assert_cmd::Command;
use tempfile::TempDir;

/// A scratch directory the binary runs in, with its own store and config dirs
#[allow(dead_code)]
pub struct TestWorkspace {
    /// Temporary directory
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to workspace root
    pub path: PathBuf,
}

impl TestWorkspace {
    /// Create a new test workspace
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Directory the disk store writes to
    pub fn store_dir(&self) -> PathBuf {
        self.path.join("reports")
    }

    /// `ghreport` command isolated to this workspace
    ///
    /// Runs in the workspace, stores reports under it, ignores any user
    /// config and points the API at a closed local port.
    #[allow(deprecated)]
    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("ghreport").expect("ghreport binary");
        cmd.current_dir(&self.path)
            .env("GHREPORT_STORE_DIR", self.store_dir())
            .env("XDG_CONFIG_HOME", self.path.join("xdg"))
            .env("GHREPORT_API_URL", "http://127.0.0.1:9")
            .env("GHREPORT_TIMEOUT_SECS", "2")
            .env_remove("GHREPORT_CONFIG")
            .env_remove("GHREPORT_SESSION")
            .env_remove("RUST_LOG");
        cmd
    }

    /// Write a file in workspace
    #[allow(dead_code)]
    pub fn write_file(&self, path: &str, content: &str) -> PathBuf {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
        file_path
    }

    /// Check if a file exists in workspace
    #[allow(dead_code)]
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }

    /// Read a file from workspace as bytes
    #[allow(dead_code)]
    pub fn read_bytes(&self, path: &str) -> Vec<u8> {
        std::fs::read(self.path.join(path)).expect("Failed to read file")
    }

    /// Number of stored report files
    #[allow(dead_code)]
    pub fn stored_reports(&self) -> usize {
        std::fs::read_dir(self.store_dir())
            .map(|entries| entries.flatten().count())
            .unwrap_or(0)
    }
}

impl Default for TestWorkspace {
    fn default() -> Self {
        Self::new()
    }
}

/// Path to a JSON fixture under `tests/common/fixtures`
#[allow(dead_code)]
pub fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("common")
        .join("fixtures")
        .join(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_workspace_creation() {
        let workspace = TestWorkspace::new();
        assert!(workspace.path.exists());
        assert_eq!(workspace.stored_reports(), 0);
    }

    #[test]
    fn test_fixtures_exist() {
        assert!(fixture("octocat_profile.json").is_file());
        assert!(fixture("octocat_repos.json").is_file());
    }
}
