//! Aggregation over raw project records

use serde::{Deserialize, Serialize};

use super::raw::RawProjectRecord;

/// Totals over a project list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregateStats {
    pub total_repos: usize,
    pub total_stars: u64,
    pub total_forks: u64,
}

/// Number of projects using a language as their primary language
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageCount {
    pub language: String,
    pub count: u64,
}

/// Language frequencies in first-seen order
///
/// Serialized as a list so the order survives a round trip through the
/// report store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LanguageDistribution {
    entries: Vec<LanguageCount>,
}

impl LanguageDistribution {
    /// Create an empty distribution
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one more project for `language`
    pub fn record(&mut self, language: &str) {
        match self.entries.iter_mut().find(|e| e.language == language) {
            Some(entry) => entry.count += 1,
            None => self.entries.push(LanguageCount {
                language: language.to_string(),
                count: 1,
            }),
        }
    }

    /// Count for a language, 0 when it never occurred
    pub fn get(&self, language: &str) -> u64 {
        self.entries
            .iter()
            .find(|e| e.language == language)
            .map_or(0, |e| e.count)
    }

    pub fn iter(&self) -> impl Iterator<Item = &LanguageCount> {
        self.entries.iter()
    }

    /// Language names in first-seen order
    pub fn languages(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.language.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts
    pub fn total(&self) -> u64 {
        self.entries.iter().map(|e| e.count).sum()
    }

    /// Share of each language in percent, in distribution order
    #[allow(clippy::cast_precision_loss)]
    pub fn percentages(&self) -> Vec<(&str, f64)> {
        let total = self.total();
        self.entries
            .iter()
            .map(|e| {
                let share = if total == 0 {
                    0.0
                } else {
                    e.count as f64 * 100.0 / total as f64
                };
                (e.language.as_str(), share)
            })
            .collect()
    }
}

impl<'a> IntoIterator for &'a LanguageDistribution {
    type Item = &'a LanguageCount;
    type IntoIter = std::slice::Iter<'a, LanguageCount>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Compute totals and the language distribution over the raw sequence
pub fn aggregate(raw_projects: &[RawProjectRecord]) -> (AggregateStats, LanguageDistribution) {
    let mut stats = AggregateStats {
        total_repos: raw_projects.len(),
        ..AggregateStats::default()
    };
    let mut languages = LanguageDistribution::new();

    for project in raw_projects {
        stats.total_stars = stats
            .total_stars
            .saturating_add(project.count("stargazers_count"));
        stats.total_forks = stats.total_forks.saturating_add(project.count("forks_count"));

        if let Some(language) = project.text("language") {
            languages.record(language);
        }
    }

    (stats, languages)
}
