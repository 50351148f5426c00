//! Sessions command implementation

use console::Style;

use super::open_store;
use crate::cli::SessionsArgs;
use crate::config::Settings;
use crate::error::Result;
use crate::store::ReportStore;
use crate::ui::display;

/// Run sessions command
pub fn run(settings: Settings, args: SessionsArgs) -> Result<()> {
    let store = open_store(&settings);

    if args.clear {
        let removed = store.clear()?;
        println!(
            "{} {} stored report(s)",
            Style::new().green().bold().apply_to("Removed"),
            removed
        );
        return Ok(());
    }

    if let Some(session) = args.remove {
        if store.remove(&session)? {
            println!(
                "{} {}",
                Style::new().green().bold().apply_to("Removed session"),
                session
            );
        } else {
            println!("No stored report for session '{session}'");
        }
        return Ok(());
    }

    display::display_sessions(&store.list()?)?;
    Ok(())
}
