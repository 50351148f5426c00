//! Export command implementation

use std::fs;
use std::path::Path;

use console::Style;

use super::open_store;
use crate::cli::ExportArgs;
use crate::config::Settings;
use crate::error::{self, Result};
use crate::operations::ExportOperation;

/// Run export command
pub fn run(settings: Settings, session: &str, args: ExportArgs) -> Result<()> {
    let output = args.output.unwrap_or_else(|| settings.output.clone());
    let store = open_store(&settings);

    let bytes = ExportOperation::new(&store).execute(session)?;
    write_output(&output, &bytes)?;

    println!(
        "{} {}",
        Style::new().green().bold().apply_to("Report saved to"),
        output.display()
    );
    Ok(())
}

fn write_output(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .map_err(|e| error::file_write_failed(parent.display().to_string(), e.to_string()))?;
    }
    fs::write(path, bytes)
        .map_err(|e| error::file_write_failed(path.display().to_string(), e.to_string()))
}
