//! File-backed report store

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::{ReportStore, StoredSession};
use crate::error::{self, Result};
use crate::report::ReportModel;

/// On-disk envelope; the session key is kept in the file because the file
/// name only carries its hash
#[derive(Debug, Serialize, Deserialize)]
struct StoredReport {
    session: String,
    report: ReportModel,
}

/// Report store keeping one JSON file per session under a directory
#[derive(Debug, Clone)]
pub struct DiskReportStore {
    root: PathBuf,
}

impl DiskReportStore {
    /// Create a store rooted at `root`; the directory is created lazily
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Path of the file holding `session`
    pub fn session_path(&self, session: &str) -> PathBuf {
        let key = blake3::hash(session.as_bytes()).to_hex();
        self.root.join(format!("{key}.json"))
    }

    fn read_stored(&self, path: &Path, session: &str) -> Result<StoredReport> {
        let content = fs::read_to_string(path)
            .map_err(|e| error::store_read_failed(path.display().to_string(), e.to_string()))?;
        serde_json::from_str(&content).map_err(|e| error::store_corrupt(session, e.to_string()))
    }

    fn stored_files(&self) -> Result<Vec<PathBuf>> {
        if !self.root.is_dir() {
            return Ok(Vec::new());
        }

        let entries = fs::read_dir(&self.root)
            .map_err(|e| error::store_read_failed(self.root.display().to_string(), e.to_string()))?;

        Ok(entries
            .flatten()
            .map(|entry| entry.path())
            .filter(|path| path.is_file() && path.extension().is_some_and(|ext| ext == "json"))
            .collect())
    }
}

impl ReportStore for DiskReportStore {
    fn put(&self, session: &str, report: &ReportModel) -> Result<()> {
        let path = self.session_path(session);
        let write_failed = |e: &dyn std::fmt::Display| {
            error::store_write_failed(path.display().to_string(), e.to_string())
        };

        fs::create_dir_all(&self.root).map_err(|e| write_failed(&e))?;

        let stored = StoredReport {
            session: session.to_string(),
            report: report.clone(),
        };
        let json = serde_json::to_vec_pretty(&stored).map_err(|e| write_failed(&e))?;

        // Write next to the target so persist() is a rename on the same filesystem
        let mut temp = tempfile::NamedTempFile::new_in(&self.root).map_err(|e| write_failed(&e))?;
        temp.write_all(&json).map_err(|e| write_failed(&e))?;
        temp.persist(&path).map_err(|e| write_failed(&e.error))?;

        debug!(session, path = %path.display(), "stored report");
        Ok(())
    }

    fn get(&self, session: &str) -> Result<Option<ReportModel>> {
        let path = self.session_path(session);
        if !path.is_file() {
            debug!(session, "no stored report");
            return Ok(None);
        }

        let stored = self.read_stored(&path, session)?;
        Ok(Some(stored.report))
    }

    fn list(&self) -> Result<Vec<StoredSession>> {
        let mut sessions = Vec::new();

        for path in self.stored_files()? {
            let name = path.display().to_string();
            match self.read_stored(&path, &name) {
                Ok(stored) => sessions.push(StoredSession {
                    login: stored.report.profile().login.clone(),
                    total_repos: stored.report.total_repos(),
                    session: stored.session,
                }),
                Err(e) => warn!(path = %name, error = %e, "skipping unreadable stored report"),
            }
        }

        sessions.sort_by(|a, b| a.session.cmp(&b.session));
        Ok(sessions)
    }

    fn remove(&self, session: &str) -> Result<bool> {
        let path = self.session_path(session);
        if !path.is_file() {
            return Ok(false);
        }

        fs::remove_file(&path)
            .map_err(|e| error::store_write_failed(path.display().to_string(), e.to_string()))?;
        Ok(true)
    }

    fn clear(&self) -> Result<usize> {
        let mut removed = 0;
        for path in self.stored_files()? {
            fs::remove_file(&path)
                .map_err(|e| error::store_write_failed(path.display().to_string(), e.to_string()))?;
            removed += 1;
        }
        Ok(removed)
    }
}
