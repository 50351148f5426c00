//! Input errors

use super::GhReportError;

/// Creates a missing username error
pub fn missing_username() -> GhReportError {
    GhReportError::MissingUsername
}

/// Creates a user not found error
pub fn user_not_found(username: impl Into<String>) -> GhReportError {
    GhReportError::UserNotFound {
        username: username.into(),
    }
}

/// Creates a missing report error for an export without a stored report
pub fn missing_report(session: impl Into<String>) -> GhReportError {
    GhReportError::MissingReport {
        session: session.into(),
    }
}
