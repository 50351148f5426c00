//! Fetch errors

use super::GhReportError;

/// Creates an HTTP client construction error
pub fn client_failed(reason: impl Into<String>) -> GhReportError {
    GhReportError::HttpClientFailed {
        reason: reason.into(),
    }
}

/// Creates a fetch failed error
pub fn failed(source_name: impl Into<String>, reason: impl Into<String>) -> GhReportError {
    GhReportError::FetchFailed {
        source_name: source_name.into(),
        reason: reason.into(),
    }
}
