//! High-level workflows behind the commands
//!
//! - [`AnalyzeOperation`]: fetch, build and store a report for a username
//! - [`ExportOperation`]: load a stored report and render it as a PDF
//!
//! Operations see their collaborators through the [`Fetcher`] and
//! [`ReportStore`] traits, so the same workflow runs against the GitHub API
//! or local files, and against the disk or an in-memory store.
//!
//! [`Fetcher`]: crate::github::Fetcher
//! [`ReportStore`]: crate::store::ReportStore

pub mod analyze;
pub mod export;

pub use analyze::AnalyzeOperation;
pub use export::ExportOperation;
