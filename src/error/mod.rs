//! Error types and handling for ghreport
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`input`]: Missing or unknown user input
//! - [`store`]: Session report store errors
//! - [`fetch`]: GitHub fetch errors
//! - [`render`]: PDF and chart rendering errors
//! - [`config`]: Configuration errors
//! - [`fs`]: File system errors

pub mod config;
pub mod fetch;
pub mod fs;
pub mod input;
pub mod render;
pub mod store;


#[allow(unused_imports)]
pub use config::{invalid as config_invalid, parse_failed as config_parse_failed};
#[allow(unused_imports)]
pub use fetch::{client_failed as http_client_failed, failed as fetch_failed};
#[allow(unused_imports)]
pub use fs::{io_error, read_failed as file_read_failed, write_failed as file_write_failed};
#[allow(unused_imports)]
pub use input::{missing_report, missing_username, user_not_found};
#[allow(unused_imports)]
pub use render::{chart_failed, render_failed};
#[allow(unused_imports)]
pub use store::{
    corrupt as store_corrupt, read_failed as store_read_failed,
    write_failed as store_write_failed,
};

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for ghreport operations
#[derive(Error, Diagnostic, Debug)]
pub enum GhReportError {
    // Input errors
    #[error("Please enter a GitHub username")]
    #[diagnostic(
        code(ghreport::input::missing_username),
        help("Pass the username as an argument, e.g. 'ghreport analyze octocat'")
    )]
    MissingUsername,

    #[error("User not found: {username}")]
    #[diagnostic(
        code(ghreport::input::user_not_found),
        help("Check that the username is spelled correctly and the profile is public")
    )]
    UserNotFound { username: String },

    #[error("No data available to export. Please analyze a profile first.")]
    #[diagnostic(
        code(ghreport::store::missing_report),
        help("Run 'ghreport analyze <username>' with the same session first")
    )]
    MissingReport { session: String },

    #[error("Unknown shell: {shell}")]
    #[diagnostic(
        code(ghreport::input::unknown_shell),
        help("Supported shells: bash, elvish, fish, powershell, zsh")
    )]
    UnknownShell { shell: String },

    // Store errors
    #[error("Failed to read stored report: {path}")]
    #[diagnostic(code(ghreport::store::read_failed))]
    StoreReadFailed { path: String, reason: String },

    #[error("Failed to store report: {path}: {reason}")]
    #[diagnostic(code(ghreport::store::write_failed))]
    StoreWriteFailed { path: String, reason: String },

    #[error("Stored report for session '{session}' is corrupt: {reason}")]
    #[diagnostic(
        code(ghreport::store::corrupt),
        help("Run 'ghreport sessions --remove <session>' and analyze the profile again")
    )]
    StoreCorrupt { session: String, reason: String },

    // Fetch errors
    #[error("Failed to create HTTP client: {reason}")]
    #[diagnostic(code(ghreport::fetch::client_failed))]
    HttpClientFailed { reason: String },

    #[error("Failed to fetch {source_name}: {reason}")]
    #[diagnostic(code(ghreport::fetch::failed))]
    FetchFailed { source_name: String, reason: String },

    // Render errors
    #[error("Failed to render PDF report: {message}")]
    #[diagnostic(code(ghreport::render::pdf_failed))]
    RenderFailed { message: String },

    #[error("Failed to draw language chart: {message}")]
    #[diagnostic(code(ghreport::render::chart_failed))]
    ChartFailed { message: String },

    // Configuration errors
    #[error("Failed to read configuration file: {path}")]
    #[diagnostic(code(ghreport::config::read_failed))]
    ConfigReadFailed { path: String, reason: String },

    #[error("Failed to parse configuration file: {path}")]
    #[diagnostic(code(ghreport::config::parse_failed))]
    ConfigParseFailed { path: String, reason: String },

    #[error("Invalid configuration: {message}")]
    #[diagnostic(code(ghreport::config::invalid))]
    ConfigInvalid { message: String },

    // File system errors
    #[error("Failed to read file: {path}")]
    #[diagnostic(code(ghreport::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file: {path}: {reason}")]
    #[diagnostic(code(ghreport::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(ghreport::fs::io_error))]
    IoError { message: String },
}

impl From<std::io::Error> for GhReportError {
    fn from(err: std::io::Error) -> Self {
        GhReportError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for GhReportError {
    fn from(err: serde_yaml::Error) -> Self {
        GhReportError::ConfigParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

impl From<printpdf::Error> for GhReportError {
    fn from(err: printpdf::Error) -> Self {
        GhReportError::RenderFailed {
            message: err.to_string(),
        }
    }
}

impl From<inquire::InquireError> for GhReportError {
    fn from(err: inquire::InquireError) -> Self {
        GhReportError::IoError {
            message: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, GhReportError>;
