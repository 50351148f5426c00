//! CLI definitions using clap derive API

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::store::DEFAULT_SESSION;

/// ghreport - GitHub profile analysis reports
///
/// Fetch a GitHub profile and its repositories, summarize them, and export
/// the summary as a PDF report.
#[derive(Parser, Debug)]
#[command(
    name = "ghreport",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Analyze GitHub profiles and export PDF reports",
    long_about = "ghreport fetches a GitHub user's profile and public repositories, \
                  aggregates stars, forks and languages, and exports the result as a \
                  PDF report with a language distribution chart.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n    \
                  ghreport analyze octocat\n    \
                  ghreport export --output octocat.pdf\n    \
                  ghreport --session work analyze torvalds\n    \
                  ghreport sessions --list"
)]
pub struct Cli {
    /// Session key the analyzed report is stored under
    #[arg(
        long,
        short = 's',
        global = true,
        env = "GHREPORT_SESSION",
        default_value = DEFAULT_SESSION
    )]
    pub session: String,

    /// Config file (defaults to $GHREPORT_CONFIG or the user config dir)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch and analyze a GitHub profile
    Analyze(AnalyzeArgs),

    /// Export the analyzed report as PDF
    Export(ExportArgs),

    /// List or remove stored reports
    Sessions(SessionsArgs),

    /// Show version information
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the analyze command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                   Analyze a profile:\n    ghreport analyze octocat\n\n\
                   Prompt for the username:\n    ghreport analyze\n\n\
                   Analyze saved API responses:\n    ghreport analyze octocat --profile-file user.json --repos-file repos.json\n\n\
                   Use a GitHub Enterprise API:\n    ghreport analyze octocat --api-url https://ghe.example.com/api/v3\n\n\
                   Print the report as JSON:\n    ghreport analyze octocat --json")]
pub struct AnalyzeArgs {
    /// GitHub username. Prompted for when omitted in a terminal
    pub username: Option<String>,

    /// Read the profile from a JSON file instead of the API
    #[arg(long, value_name = "PATH")]
    pub profile_file: Option<PathBuf>,

    /// Read the repository list from a JSON file (requires --profile-file)
    #[arg(long, value_name = "PATH", requires = "profile_file")]
    pub repos_file: Option<PathBuf>,

    /// GitHub API base URL
    #[arg(long, value_name = "URL", env = "GHREPORT_API_URL")]
    pub api_url: Option<String>,

    /// Print the report as JSON instead of the styled summary
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the export command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Export to github_report.pdf:\n    ghreport export\n\n\
                  Export to a specific file:\n    ghreport export --output octocat.pdf\n\n\
                  Export another session:\n    ghreport --session work export")]
pub struct ExportArgs {
    /// Output file (defaults to the configured output, github_report.pdf)
    #[arg(long, short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,
}

/// Arguments for the sessions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  List stored reports:\n    ghreport sessions --list\n\n\
                  Remove one stored report:\n    ghreport sessions --remove work\n\n\
                  Remove all stored reports:\n    ghreport sessions --clear")]
pub struct SessionsArgs {
    #[arg(long, short = 'l', help = "List stored reports")]
    pub list: bool,

    #[arg(long, short = 'c', help = "Remove all stored reports")]
    pub clear: bool,

    #[arg(long, short = 'r', value_name = "KEY", help = "Remove one stored report")]
    pub remove: Option<String>,
}

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    ghreport completions --shell bash > ~/.bash_completion.d/ghreport\n\n\
                  Generate zsh completions:\n    ghreport completions --shell zsh > ~/.zfunc/_ghreport\n\n\
                  Generate fish completions:\n    ghreport completions --shell fish > ~/.config/fish/completions/ghreport.fish\n\n\
                  Generate PowerShell completions:\n    ghreport completions --shell powershell")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    #[arg(long)]
    pub shell: String,
}
