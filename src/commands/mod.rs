//! Command implementations for ghreport CLI

pub mod analyze;
pub mod completions;
pub mod export;
pub mod sessions;
pub mod version;

use std::path::Path;

use crate::config::Settings;
use crate::error::Result;
use crate::store::DiskReportStore;

/// Load settings for a command that touches the store or the network
pub fn load_settings(config: Option<&Path>) -> Result<Settings> {
    Settings::load(config)
}

/// Open the on-disk report store configured in `settings`
pub fn open_store(settings: &Settings) -> DiskReportStore {
    DiskReportStore::new(&settings.store_dir)
}
