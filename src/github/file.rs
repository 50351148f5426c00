//! Fetcher reading raw API responses from disk

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::{debug, warn};

use super::{Fetcher, profile_record, project_list};
use crate::error::{self, Result};
use crate::report::{RawProfileRecord, RawProjectRecord};

/// Fetcher serving a saved profile response and optional project list
///
/// A missing file means "not found"; a file that exists but is not JSON is
/// an error, since that is a broken input rather than an absent user.
#[derive(Debug, Clone)]
pub struct FileFetcher {
    profile: PathBuf,
    projects: Option<PathBuf>,
}

impl FileFetcher {
    pub fn new(profile: impl Into<PathBuf>, projects: Option<PathBuf>) -> Self {
        Self {
            profile: profile.into(),
            projects,
        }
    }

    fn read_json(path: &Path) -> Result<Option<Value>> {
        if !path.exists() {
            debug!(path = %path.display(), "input file missing");
            return Ok(None);
        }

        let content = fs::read_to_string(path)
            .map_err(|e| error::file_read_failed(path.display().to_string(), e.to_string()))?;
        let value = serde_json::from_str(&content)
            .map_err(|e| error::fetch_failed(path.display().to_string(), e.to_string()))?;
        Ok(Some(value))
    }
}

impl Fetcher for FileFetcher {
    fn fetch_profile(&self, username: &str) -> Result<Option<RawProfileRecord>> {
        debug!(username, path = %self.profile.display(), "reading profile file");
        let Some(body) = Self::read_json(&self.profile)? else {
            return Ok(None);
        };

        let profile = profile_record(body);
        if profile.is_none() {
            warn!(path = %self.profile.display(), "profile is not a JSON object");
        }
        Ok(profile)
    }

    fn fetch_projects(&self, username: &str) -> Result<Option<Vec<RawProjectRecord>>> {
        let Some(path) = &self.projects else {
            return Ok(None);
        };

        debug!(username, path = %path.display(), "reading project list file");
        let Some(body) = Self::read_json(path)? else {
            return Ok(None);
        };

        let list = project_list(body);
        if list.is_none() {
            warn!(path = %path.display(), "project list is not a JSON array");
        }
        Ok(list)
    }
}
