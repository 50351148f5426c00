//! Rendering errors

use super::GhReportError;

/// Creates a PDF render failed error
pub fn render_failed(message: impl Into<String>) -> GhReportError {
    GhReportError::RenderFailed {
        message: message.into(),
    }
}

/// Creates a chart drawing failed error
pub fn chart_failed(message: impl Into<String>) -> GhReportError {
    GhReportError::ChartFailed {
        message: message.into(),
    }
}
