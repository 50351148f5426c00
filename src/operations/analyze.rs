//! Analyze operation

use tracing::info;

use crate::error::{self, Result};
use crate::github::Fetcher;
use crate::report::{ReportModel, build};
use crate::store::ReportStore;
use crate::ui::ProgressReporter;

/// Fetch a profile, build its report and store it under a session
pub struct AnalyzeOperation<'a> {
    fetcher: &'a dyn Fetcher,
    store: &'a dyn ReportStore,
}

impl<'a> AnalyzeOperation<'a> {
    pub fn new(fetcher: &'a dyn Fetcher, store: &'a dyn ReportStore) -> Self {
        Self { fetcher, store }
    }

    /// Run the analysis for `username` and store the result under `session`
    ///
    /// Nothing is stored when the analysis fails, so a previous report for
    /// the session stays exportable.
    pub fn execute(
        &self,
        session: &str,
        username: &str,
        progress: &mut dyn ProgressReporter,
    ) -> Result<ReportModel> {
        let username = username.trim();
        if username.is_empty() {
            return Err(error::missing_username());
        }

        let report = match self.fetch_and_build(username, progress) {
            Ok(report) => report,
            Err(e) => {
                progress.abandon();
                return Err(e);
            }
        };

        progress.step("Saving report");
        self.store.put(session, &report)?;
        progress.finish();

        info!(
            session,
            username,
            repos = report.total_repos(),
            "analysis stored"
        );
        Ok(report)
    }

    fn fetch_and_build(
        &self,
        username: &str,
        progress: &mut dyn ProgressReporter,
    ) -> Result<ReportModel> {
        progress.step(&format!("Fetching profile for {username}"));
        let profile = self.fetcher.fetch_profile(username)?;

        progress.step(&format!("Fetching repositories for {username}"));
        let projects = self.fetcher.fetch_projects(username)?;

        build(username, profile, projects)
    }
}
