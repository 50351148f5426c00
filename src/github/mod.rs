//! Raw data sources for the report pipeline
//!
//! A [`Fetcher`] turns a username into the raw profile record and raw
//! project list the report builder consumes. Absence is data, not failure:
//! an unknown user or an unreachable API yields `None` and the builder
//! decides what that means.
//!
//! - [`HttpFetcher`]: the GitHub REST API (`/users/{name}` and `/users/{name}/repos`)
//! - [`FileFetcher`]: JSON files on disk, for offline use and tests

pub mod file;
pub mod http;

pub use file::FileFetcher;
pub use http::HttpFetcher;

use crate::error::Result;
use crate::report::{RawProfileRecord, RawProjectRecord};

/// Source of raw profile and project records
pub trait Fetcher {
    /// Fetch the profile for `username`, `None` when it cannot be found
    fn fetch_profile(&self, username: &str) -> Result<Option<RawProfileRecord>>;

    /// Fetch the project list for `username`, `None` when unavailable
    fn fetch_projects(&self, username: &str) -> Result<Option<Vec<RawProjectRecord>>>;
}

/// Interpret a decoded body as a profile; only a non-empty object counts
fn profile_record(body: serde_json::Value) -> Option<RawProfileRecord> {
    match body {
        serde_json::Value::Object(fields) if !fields.is_empty() => {
            Some(RawProfileRecord::from(serde_json::Value::Object(fields)))
        }
        _ => None,
    }
}

/// Interpret a decoded body as a project list; anything but an array is `None`
fn project_list(body: serde_json::Value) -> Option<Vec<RawProjectRecord>> {
    match body {
        serde_json::Value::Array(items) => {
            Some(items.into_iter().map(RawProjectRecord::from).collect())
        }
        _ => None,
    }
}
