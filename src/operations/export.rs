//! Export operation

use tracing::debug;

use crate::error::{self, Result};
use crate::render::{self, CONTENT_TYPE};
use crate::store::ReportStore;

/// Render the report stored under a session
pub struct ExportOperation<'a> {
    store: &'a dyn ReportStore,
}

impl<'a> ExportOperation<'a> {
    pub fn new(store: &'a dyn ReportStore) -> Self {
        Self { store }
    }

    /// Render the stored report for `session` as PDF bytes
    pub fn execute(&self, session: &str) -> Result<Vec<u8>> {
        let report = self
            .store
            .get(session)?
            .ok_or_else(|| error::missing_report(session))?;

        let bytes = render::render(&report)?;
        debug!(session, content_type = CONTENT_TYPE, bytes = bytes.len(), "exported report");
        Ok(bytes)
    }
}
