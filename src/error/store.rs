//! Report store errors

use super::GhReportError;

/// Creates a store read failed error
pub fn read_failed(path: impl Into<String>, reason: impl Into<String>) -> GhReportError {
    GhReportError::StoreReadFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a store write failed error
pub fn write_failed(path: impl Into<String>, reason: impl Into<String>) -> GhReportError {
    GhReportError::StoreWriteFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a corrupt stored report error
pub fn corrupt(session: impl Into<String>, reason: impl Into<String>) -> GhReportError {
    GhReportError::StoreCorrupt {
        session: session.into(),
        reason: reason.into(),
    }
}
