//! Report pipeline
//!
//! Turns the raw profile and project records returned by the fetchers into an
//! immutable [`ReportModel`]:
//!
//! ```text
//! raw projects ──► normalize ──► ProjectSummary list ─┐
//!        │                                            ├──► ReportModel
//!        └──────► aggregate ──► stats + languages ────┘
//! ```
//!
//! Everything here is pure: no I/O, no shared state, safe to run
//! concurrently for different usernames.

pub mod aggregate;
pub mod model;
pub mod normalize;
pub mod raw;


#[allow(unused_imports)]
pub use aggregate::{AggregateStats, LanguageCount, LanguageDistribution, aggregate};
pub use model::{ProfileSummary, ReportModel, build};
#[allow(unused_imports)]
pub use normalize::{NO_DESCRIPTION, NO_LICENSE, ProjectSummary, normalize};
pub use raw::{RawProfileRecord, RawProjectRecord};
