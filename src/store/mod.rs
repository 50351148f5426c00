//! Session report store
//!
//! Holds the [`ReportModel`] computed by `analyze` until `export` asks for it.
//! Reports are keyed by an opaque session key; a missing key is not an error
//! at this layer, callers decide what absence means.
//!
//! ## Disk layout
//!
//! ```text
//! ~/.cache/ghreport/
//! └── reports/
//!     └── <blake3(session)>.json
//! ```

pub mod disk;
pub mod memory;

pub use disk::DiskReportStore;
#[allow(unused_imports)]
pub use memory::MemoryReportStore;

use crate::error::Result;
use crate::report::ReportModel;

/// Session key used when none is given
pub const DEFAULT_SESSION: &str = "default";

/// Summary of one stored report, for listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredSession {
    pub session: String,
    pub login: String,
    pub total_repos: usize,
}

/// Key-value store for reports, keyed by session
pub trait ReportStore {
    /// Store `report` under `session`, replacing any previous report
    fn put(&self, session: &str, report: &ReportModel) -> Result<()>;

    /// Fetch the report stored under `session`, `None` when absent
    fn get(&self, session: &str) -> Result<Option<ReportModel>>;

    /// List stored sessions, sorted by session key
    fn list(&self) -> Result<Vec<StoredSession>>;

    /// Remove one session, returns whether it existed
    fn remove(&self, session: &str) -> Result<bool>;

    /// Remove every session, returns how many were removed
    fn clear(&self) -> Result<usize>;
}
