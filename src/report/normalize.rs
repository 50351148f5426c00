//! Project normalization
//!
//! Maps a [`RawProjectRecord`] into the fixed-shape [`ProjectSummary`] used by
//! the on-screen report and the PDF export. Partial data never leaves this
//! module: every absent field is replaced by its documented default.

use serde::{Deserialize, Serialize};

use super::raw::RawProjectRecord;

/// Placeholder for projects without a description
pub const NO_DESCRIPTION: &str = "No description available";

/// Placeholder for projects without a license
pub const NO_LICENSE: &str = "No license";

/// Placeholder for projects without an update timestamp
pub const NO_TIMESTAMP: &str = "N/A";

/// Fully-defaulted view of a single repository
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectSummary {
    pub name: String,
    pub url: String,
    pub description: String,
    /// Primary language, `None` when GitHub reports no language
    pub language: Option<String>,
    pub stars: u64,
    pub forks: u64,
    pub watchers: u64,
    pub open_issues: u64,
    pub license: String,
    /// Last update timestamp, passed through unparsed
    pub updated_at: String,
}

/// Normalize one raw project record
pub fn normalize(raw: &RawProjectRecord) -> ProjectSummary {
    ProjectSummary {
        name: raw.text("name").unwrap_or_default().to_string(),
        url: raw.text("html_url").unwrap_or_default().to_string(),
        description: raw.text("description").unwrap_or(NO_DESCRIPTION).to_string(),
        language: raw.text("language").map(str::to_string),
        stars: raw.count("stargazers_count"),
        forks: raw.count("forks_count"),
        watchers: raw.count("watchers_count"),
        open_issues: raw.count("open_issues_count"),
        license: raw.license_name().unwrap_or(NO_LICENSE).to_string(),
        updated_at: raw.text("updated_at").unwrap_or(NO_TIMESTAMP).to_string(),
    }
}
