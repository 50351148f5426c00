//! On-screen report
//!
//! Mirrors the sections of the exported document with console styling:
//! bold labels, yellow headings, dimmed placeholders.

use std::io::{self, Write};

use console::Style;

use crate::report::{NO_DESCRIPTION, NO_LICENSE, ProjectSummary, ReportModel};
use crate::store::StoredSession;

macro_rules! write_opt_field {
    ($out:expr, $label:expr, $value:expr) => {
        if let Some(ref v) = $value {
            writeln!($out, "  {} {}", Style::new().bold().apply_to($label), v)?;
        }
    };
}

/// Print `report` to stdout
pub fn display_report(report: &ReportModel) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_report(&mut out, report)
}

/// Write the styled report to `out`
pub fn write_report(out: &mut impl Write, report: &ReportModel) -> io::Result<()> {
    let heading = Style::new().bold().yellow();
    let label = Style::new().bold();
    let profile = report.profile();

    writeln!(out, "{}", heading.apply_to("GitHub Analysis Report"))?;
    writeln!(out)?;
    writeln!(out, "  {} {}", label.apply_to("Name:"), profile.display_name())?;
    writeln!(out, "  {} {}", label.apply_to("Username:"), profile.login)?;
    write_opt_field!(out, "Profile:", profile.html_url);
    write_opt_field!(out, "Bio:", profile.bio);
    writeln!(
        out,
        "  {} {} | {} {}",
        label.apply_to("Followers:"),
        profile.followers,
        label.apply_to("Following:"),
        profile.following
    )?;
    writeln!(
        out,
        "  {} {}",
        label.apply_to("Total Repositories:"),
        report.total_repos()
    )?;
    writeln!(out)?;

    writeln!(out, "{}", heading.apply_to("Repository Stats"))?;
    writeln!(out, "  {} {}", label.apply_to("Stars:"), report.total_stars())?;
    writeln!(out, "  {} {}", label.apply_to("Forks:"), report.total_forks())?;
    writeln!(out)?;

    writeln!(out, "{}", heading.apply_to("Languages Used"))?;
    if report.languages().is_empty() {
        writeln!(out, "  {}", Style::new().dim().apply_to("None"))?;
    }
    for (language, share) in report.languages().percentages() {
        writeln!(
            out,
            "  {:<20} {:>5} {}",
            Style::new().cyan().apply_to(language),
            report.languages().get(language),
            Style::new().dim().apply_to(format!("({share:.1}%)"))
        )?;
    }
    writeln!(out)?;

    writeln!(out, "{}", heading.apply_to("Repositories"))?;
    if report.projects().is_empty() {
        writeln!(out, "  {}", Style::new().dim().apply_to("None"))?;
    }
    for project in report.projects() {
        write_project(out, project)?;
    }

    Ok(())
}

fn write_project(out: &mut impl Write, project: &ProjectSummary) -> io::Result<()> {
    let dim = Style::new().dim();

    writeln!(out, "  {}", Style::new().bold().apply_to(&project.name))?;
    if project.description == NO_DESCRIPTION {
        writeln!(out, "    {}", dim.apply_to(&project.description))?;
    } else {
        writeln!(out, "    {}", project.description)?;
    }

    let license = if project.license == NO_LICENSE {
        dim.apply_to(project.license.as_str()).to_string()
    } else {
        project.license.clone()
    };
    writeln!(
        out,
        "    {} | {} stars | {} forks | {} watchers | {} open issues | {} | updated {}",
        project.language.as_deref().unwrap_or("N/A"),
        project.stars,
        project.forks,
        project.watchers,
        project.open_issues,
        license,
        project.updated_at
    )?;
    if !project.url.is_empty() {
        writeln!(out, "    {}", dim.apply_to(&project.url))?;
    }
    Ok(())
}

/// Print stored sessions to stdout
pub fn display_sessions(sessions: &[StoredSession]) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_sessions(&mut out, sessions)
}

pub fn write_sessions(out: &mut impl Write, sessions: &[StoredSession]) -> io::Result<()> {
    if sessions.is_empty() {
        writeln!(out, "No stored reports.")?;
        return Ok(());
    }

    writeln!(out, "Stored reports ({}):", sessions.len())?;
    for session in sessions {
        writeln!(
            out,
            "  {} {} {}",
            Style::new().bold().yellow().apply_to(&session.session),
            session.login,
            Style::new()
                .dim()
                .apply_to(format!("({} repositories)", session.total_repos))
        )?;
    }
    Ok(())
}
