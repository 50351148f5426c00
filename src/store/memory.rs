//! In-process report store

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use super::{ReportStore, StoredSession};
use crate::error::Result;
use crate::report::ReportModel;

/// Report store backed by a locked map; reports live as long as the store
#[allow(dead_code)]
#[derive(Debug, Default)]
pub struct MemoryReportStore {
    reports: Mutex<HashMap<String, ReportModel>>,
}

#[allow(dead_code)]
impl MemoryReportStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, ReportModel>> {
        // A panic while holding the lock cannot leave a half-written report
        self.reports.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl ReportStore for MemoryReportStore {
    fn put(&self, session: &str, report: &ReportModel) -> Result<()> {
        self.lock().insert(session.to_string(), report.clone());
        Ok(())
    }

    fn get(&self, session: &str) -> Result<Option<ReportModel>> {
        Ok(self.lock().get(session).cloned())
    }

    fn list(&self) -> Result<Vec<StoredSession>> {
        let mut sessions: Vec<StoredSession> = self
            .lock()
            .iter()
            .map(|(session, report)| StoredSession {
                session: session.clone(),
                login: report.profile().login.clone(),
                total_repos: report.total_repos(),
            })
            .collect();
        sessions.sort_by(|a, b| a.session.cmp(&b.session));
        Ok(sessions)
    }

    fn remove(&self, session: &str) -> Result<bool> {
        Ok(self.lock().remove(session).is_some())
    }

    fn clear(&self) -> Result<usize> {
        let mut reports = self.lock();
        let removed = reports.len();
        reports.clear();
        Ok(removed)
    }
}
