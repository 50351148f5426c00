//! Test fixtures shared by unit tests.
//!
//! Builds reports from small raw JSON inputs so tests in `render`, `store`,
//! `operations` and `ui` exercise the same pipeline the CLI uses.
//!
//! # Usage
//!
//! ```ignore
//! use crate::test_fixtures::{sample_report, create_temp_dir};
//!
//! #[test]
//! fn my_test() {
//!     let report = sample_report();
//!     let temp = create_temp_dir();
//! }
//! ```

#![allow(clippy::expect_used)]

use serde_json::{Value, json};
use tempfile::TempDir;

use crate::report::{RawProfileRecord, RawProjectRecord, ReportModel, build};

/// Create a temp directory in the system temp location.
pub fn create_temp_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp directory")
}

/// Wrap JSON values as raw project records
pub fn raw_projects(values: Vec<Value>) -> Vec<RawProjectRecord> {
    values.into_iter().map(RawProjectRecord::from).collect()
}

/// Raw profile for the `octocat` account
pub fn raw_profile() -> RawProfileRecord {
    RawProfileRecord::from(json!({
        "login": "octocat",
        "name": "The Octocat",
        "followers": 120,
        "following": 9,
        "html_url": "https://github.com/octocat",
        "bio": null
    }))
}

/// Report with three projects, two languages, mixed licenses
pub fn sample_report() -> ReportModel {
    let projects = raw_projects(vec![
        json!({
            "name": "hello-world",
            "html_url": "https://github.com/octocat/hello-world",
            "description": "My first repository",
            "language": "Go",
            "stargazers_count": 5,
            "forks_count": 2,
            "watchers_count": 5,
            "open_issues_count": 1,
            "license": {"name": "MIT License"},
            "updated_at": "2024-03-01T10:00:00Z"
        }),
        json!({
            "name": "dotfiles",
            "language": null,
            "stargazers_count": 2
        }),
        json!({
            "name": "linguist",
            "description": "Language savant",
            "language": "Rust",
            "stargazers_count": 0,
            "forks_count": 1,
            "license": {"name": null},
            "updated_at": "2024-04-01T10:00:00Z"
        }),
    ]);

    build("octocat", Some(raw_profile()), Some(projects)).expect("sample report should build")
}

/// Report for a profile that has no repositories at all
pub fn empty_report() -> ReportModel {
    build("octocat", Some(raw_profile()), None).expect("empty report should build")
}
