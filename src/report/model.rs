//! Report model
//!
//! A [`ReportModel`] is created once per successful analysis and never
//! mutated afterwards. It is the unit persisted in the session store between
//! `analyze` and `export`, so it round-trips through JSON.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::aggregate::{AggregateStats, LanguageDistribution, aggregate};
use super::normalize::{ProjectSummary, normalize};
use super::raw::{RawProfileRecord, RawProjectRecord};
use crate::error::{self, Result};

/// Profile fields carried into the report
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileSummary {
    /// Display name, `None` when the user has not set one
    pub name: Option<String>,
    pub login: String,
    pub followers: u64,
    pub following: u64,
    pub html_url: Option<String>,
    pub bio: Option<String>,
}

impl ProfileSummary {
    fn from_raw(raw: &RawProfileRecord) -> Self {
        Self {
            name: raw.text("name").map(str::to_string),
            login: raw.text("login").unwrap_or_default().to_string(),
            followers: raw.count("followers"),
            following: raw.count("following"),
            html_url: raw.text("html_url").map(str::to_string),
            bio: raw.text("bio").map(str::to_string),
        }
    }

    /// Display name, or `N/A` when unset
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("N/A")
    }
}

/// Fully-resolved analysis of one GitHub profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportModel {
    profile: ProfileSummary,
    stats: AggregateStats,
    projects: Vec<ProjectSummary>,
    languages: LanguageDistribution,
}

impl ReportModel {
    pub fn profile(&self) -> &ProfileSummary {
        &self.profile
    }

    pub fn stats(&self) -> AggregateStats {
        self.stats
    }

    pub fn total_repos(&self) -> usize {
        self.stats.total_repos
    }

    pub fn total_stars(&self) -> u64 {
        self.stats.total_stars
    }

    pub fn total_forks(&self) -> u64 {
        self.stats.total_forks
    }

    /// Normalized projects in original fetch order
    pub fn projects(&self) -> &[ProjectSummary] {
        &self.projects
    }

    pub fn languages(&self) -> &LanguageDistribution {
        &self.languages
    }
}

/// Build a report from fetched records
///
/// A missing or empty profile is the only hard failure; a missing project
/// list is treated as an empty one.
pub fn build(
    username: &str,
    profile: Option<RawProfileRecord>,
    raw_projects: Option<Vec<RawProjectRecord>>,
) -> Result<ReportModel> {
    let profile = profile
        .filter(|profile| !profile.is_empty())
        .ok_or_else(|| error::user_not_found(username))?;

    let raw_projects = raw_projects.unwrap_or_default();
    let (stats, languages) = aggregate(&raw_projects);
    let projects: Vec<ProjectSummary> = raw_projects.iter().map(normalize).collect();

    debug!(
        username,
        repos = stats.total_repos,
        stars = stats.total_stars,
        languages = languages.len(),
        "built report"
    );

    Ok(ReportModel {
        profile: ProfileSummary::from_raw(&profile),
        stats,
        projects,
        languages,
    })
}
