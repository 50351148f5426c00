//! File system errors

use super::GhReportError;

/// Creates a file read failed error
pub fn read_failed(path: impl Into<String>, reason: impl Into<String>) -> GhReportError {
    GhReportError::FileReadFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a file write failed error
pub fn write_failed(path: impl Into<String>, reason: impl Into<String>) -> GhReportError {
    GhReportError::FileWriteFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates an IO error
pub fn io_error(message: impl Into<String>) -> GhReportError {
    GhReportError::IoError {
        message: message.into(),
    }
}
