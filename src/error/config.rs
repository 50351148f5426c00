//! Configuration errors

use super::GhReportError;

/// Creates a config read failed error
pub fn read_failed(path: impl Into<String>, reason: impl Into<String>) -> GhReportError {
    GhReportError::ConfigReadFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a config parse failed error
pub fn parse_failed(path: impl Into<String>, reason: impl Into<String>) -> GhReportError {
    GhReportError::ConfigParseFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates an invalid config error
pub fn invalid(message: impl Into<String>) -> GhReportError {
    GhReportError::ConfigInvalid {
        message: message.into(),
    }
}
