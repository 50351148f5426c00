//! Shell completions command

use clap::CommandFactory;
use clap_complete::Shell;

use crate::cli::CompletionsArgs;
use crate::error::{GhReportError, Result};

/// Generate shell completions
pub fn run(args: CompletionsArgs) -> Result<()> {
    let shell = parse_shell(&args.shell)?;
    let mut cmd = <crate::cli::Cli as CommandFactory>::command();
    clap_complete::generate(shell, &mut cmd, "ghreport", &mut std::io::stdout().lock());

    Ok(())
}

fn parse_shell(name: &str) -> Result<Shell> {
    match name.to_lowercase().as_str() {
        "bash" => Ok(Shell::Bash),
        "elvish" => Ok(Shell::Elvish),
        "fish" => Ok(Shell::Fish),
        "powershell" | "pwsh" => Ok(Shell::PowerShell),
        "zsh" => Ok(Shell::Zsh),
        _ => Err(GhReportError::UnknownShell {
            shell: name.to_string(),
        }),
    }
}
