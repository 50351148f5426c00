//! Analyze command implementation

use std::io::IsTerminal;

use console::Style;
use inquire::{InquireError, Text};
use tracing::debug;

use super::open_store;
use crate::cli::AnalyzeArgs;
use crate::config::Settings;
use crate::error::{self, Result};
use crate::github::{FileFetcher, Fetcher, HttpFetcher};
use crate::operations::AnalyzeOperation;
use crate::ui::{self, display};

/// Run analyze command
pub fn run(settings: Settings, session: &str, args: AnalyzeArgs) -> Result<()> {
    let settings = settings.with_api_url(args.api_url.clone())?;
    let username = resolve_username(args.username.as_deref())?;

    let fetcher: Box<dyn Fetcher> = match args.profile_file {
        Some(profile) => Box::new(FileFetcher::new(profile, args.repos_file)),
        None => Box::new(HttpFetcher::new(&settings)?),
    };
    let store = open_store(&settings);
    let mut progress = ui::progress_reporter(!args.json);

    let report = AnalyzeOperation::new(fetcher.as_ref(), &store).execute(
        session,
        &username,
        progress.as_mut(),
    )?;

    if args.json {
        let json = serde_json::to_string_pretty(&report)
            .map_err(|e| error::io_error(e.to_string()))?;
        println!("{json}");
    } else {
        display::display_report(&report)?;
        println!();
        println!(
            "{} Run {} to save it as PDF.",
            Style::new().green().bold().apply_to("Report ready."),
            Style::new().cyan().apply_to(export_hint(session))
        );
    }

    Ok(())
}

/// Use the given username, or prompt for one when attached to a terminal
fn resolve_username(given: Option<&str>) -> Result<String> {
    if let Some(name) = given.map(str::trim).filter(|name| !name.is_empty()) {
        return Ok(name.to_string());
    }

    if !std::io::stdin().is_terminal() {
        return Err(error::missing_username());
    }

    debug!("prompting for username");
    match Text::new("GitHub username:").prompt() {
        Ok(name) if !name.trim().is_empty() => Ok(name.trim().to_string()),
        Ok(_) | Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => {
            Err(error::missing_username())
        }
        Err(e) => Err(e.into()),
    }
}

fn export_hint(session: &str) -> String {
    if session == crate::store::DEFAULT_SESSION {
        "'ghreport export'".to_string()
    } else {
        format!("'ghreport --session {session} export'")
    }
}
