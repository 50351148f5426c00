//! Report export
//!
//! ```text
//! ReportModel ──► layout ──► [Block] ──► pdf ──► bytes
//!                   │
//!                   └──► chart (RGB bitmap)
//! ```

pub mod chart;
pub mod layout;
pub mod pdf;

use tracing::info;

use crate::error::Result;
use crate::report::ReportModel;

/// MIME type of the rendered document
pub const CONTENT_TYPE: &str = "application/pdf";

/// Suggested file name for the rendered document
pub const DEFAULT_FILENAME: &str = "github_report.pdf";

/// Render `report` as a PDF document
pub fn render(report: &ReportModel) -> Result<Vec<u8>> {
    let blocks = layout::layout(report)?;
    let bytes = pdf::write(layout::TITLE, &blocks)?;
    info!(
        login = %report.profile().login,
        bytes = bytes.len(),
        "rendered report"
    );
    Ok(bytes)
}
