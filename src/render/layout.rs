//! Document layout
//!
//! Flattens a [`ReportModel`] into the ordered blocks of the exported
//! document. The PDF writer only knows how to place blocks; every piece of
//! report wording lives here.

use super::chart::{ChartImage, draw_pie};
use crate::error::Result;
use crate::report::{ProjectSummary, ReportModel};

pub const TITLE: &str = "GitHub Analysis Report";
pub const STATS_HEADING: &str = "Repository Stats";
pub const LANGUAGES_HEADING: &str = "Languages Used";
pub const PROJECTS_HEADING: &str = "Repositories (Detailed)";
pub const CHART_HEADING: &str = "Languages Distribution";

/// Fallback for optional values in the document
const NOT_AVAILABLE: &str = "N/A";

/// One unit of document content
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    Title(String),
    Heading(String),
    SubHeading(String),
    Paragraph(String),
    Table {
        header: Vec<String>,
        rows: Vec<Vec<String>>,
    },
    Chart {
        image: ChartImage,
        /// One entry per slice, in slice order
        legend: Vec<String>,
    },
    Spacer,
}

/// Lay out the report sections in document order
pub fn layout(report: &ReportModel) -> Result<Vec<Block>> {
    let mut blocks = vec![Block::Title(TITLE.to_string()), Block::Spacer];

    profile_section(report, &mut blocks);
    stats_section(report, &mut blocks);
    languages_section(report, &mut blocks);
    projects_section(report, &mut blocks);
    chart_section(report, &mut blocks)?;

    Ok(blocks)
}

fn profile_section(report: &ReportModel, blocks: &mut Vec<Block>) {
    let profile = report.profile();
    blocks.extend([
        Block::Paragraph(format!("Name: {}", profile.display_name())),
        Block::Paragraph(format!("Username: {}", profile.login)),
        Block::Paragraph(format!(
            "Followers: {} | Following: {}",
            profile.followers, profile.following
        )),
        Block::Paragraph(format!("Total Repositories: {}", report.total_repos())),
        Block::Spacer,
    ]);
}

fn stats_section(report: &ReportModel, blocks: &mut Vec<Block>) {
    blocks.extend([
        Block::Heading(STATS_HEADING.to_string()),
        Block::Paragraph(format!("Stars: {}", report.total_stars())),
        Block::Paragraph(format!("Forks: {}", report.total_forks())),
        Block::Spacer,
    ]);
}

fn languages_section(report: &ReportModel, blocks: &mut Vec<Block>) {
    let rows = report
        .languages()
        .iter()
        .map(|entry| vec![entry.language.clone(), entry.count.to_string()])
        .collect();

    blocks.extend([
        Block::Heading(LANGUAGES_HEADING.to_string()),
        Block::Table {
            header: vec!["Language".to_string(), "Count".to_string()],
            rows,
        },
        Block::Spacer,
    ]);
}

fn projects_section(report: &ReportModel, blocks: &mut Vec<Block>) {
    blocks.push(Block::Heading(PROJECTS_HEADING.to_string()));
    for project in report.projects() {
        blocks.extend([
            Block::SubHeading(project.name.clone()),
            Block::Paragraph(format!("Description: {}", project.description)),
            Block::Paragraph(project_details(project)),
            Block::Spacer,
        ]);
    }
}

/// The combined one-line detail row for a project
pub fn project_details(project: &ProjectSummary) -> String {
    format!(
        "Language: {} | Stars: {} | Forks: {} | Watchers: {} | Open Issues: {} | License: {} | Last Updated: {}",
        project.language.as_deref().unwrap_or(NOT_AVAILABLE),
        project.stars,
        project.forks,
        project.watchers,
        project.open_issues,
        project.license,
        project.updated_at,
    )
}

fn chart_section(report: &ReportModel, blocks: &mut Vec<Block>) -> Result<()> {
    let languages = report.languages();
    if languages.is_empty() {
        return Ok(());
    }

    let labels = languages.languages();
    let counts: Vec<u64> = languages.iter().map(|entry| entry.count).collect();
    let image = draw_pie(&labels, &counts)?;

    let legend = languages
        .percentages()
        .into_iter()
        .zip(&counts)
        .map(|((language, share), count)| format!("{language}: {count} ({share:.1}%)"))
        .collect();

    blocks.push(Block::Heading(CHART_HEADING.to_string()));
    blocks.push(Block::Chart { image, legend });
    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use super::*;
    use crate::test_fixtures::{empty_report, sample_report};

    fn headings(blocks: &[Block]) -> Vec<&str> {
        blocks
            .iter()
            .filter_map(|b| match b {
                Block::Title(t) | Block::Heading(t) => Some(t.as_str()),
                _ => None,
            })
            .collect()
    }

    fn paragraphs(blocks: &[Block]) -> Vec<&str> {
        blocks
            .iter()
            .filter_map(|b| match b {
                Block::Paragraph(p) => Some(p.as_str()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_section_order() {
        let blocks = layout(&sample_report()).expect("layout");

        assert_eq!(
            headings(&blocks),
            vec![
                TITLE,
                STATS_HEADING,
                LANGUAGES_HEADING,
                PROJECTS_HEADING,
                CHART_HEADING
            ]
        );
        assert!(matches!(blocks.last(), Some(Block::Chart { .. })));
    }

    #[test]
    fn test_profile_and_stats_lines() {
        let blocks = layout(&sample_report()).expect("layout");
        let lines = paragraphs(&blocks);

        assert_eq!(
            &lines[..6],
            &[
                "Name: The Octocat",
                "Username: octocat",
                "Followers: 120 | Following: 9",
                "Total Repositories: 3",
                "Stars: 7",
                "Forks: 3",
            ]
        );
    }

    #[test]
    fn test_language_table_rows_in_distribution_order() {
        let blocks = layout(&sample_report()).expect("layout");
        let table = blocks
            .iter()
            .find_map(|b| match b {
                Block::Table { header, rows } => Some((header, rows)),
                _ => None,
            })
            .expect("table");

        assert_eq!(table.0, &vec!["Language".to_string(), "Count".to_string()]);
        assert_eq!(
            table.1,
            &vec![
                vec!["Go".to_string(), "1".to_string()],
                vec!["Rust".to_string(), "1".to_string()],
            ]
        );
    }

    #[test]
    fn test_project_blocks() {
        let blocks = layout(&sample_report()).expect("layout");
        let names: Vec<&str> = blocks
            .iter()
            .filter_map(|b| match b {
                Block::SubHeading(s) => Some(s.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(names, vec!["hello-world", "dotfiles", "linguist"]);

        let lines = paragraphs(&blocks);
        assert!(lines.contains(&"Description: My first repository"));
        assert!(lines.contains(&"Description: No description available"));
        assert!(lines.contains(
            &"Language: Go | Stars: 5 | Forks: 2 | Watchers: 5 | Open Issues: 1 | License: MIT License | Last Updated: 2024-03-01T10:00:00Z"
        ));
        assert!(lines.contains(
            &"Language: N/A | Stars: 2 | Forks: 0 | Watchers: 0 | Open Issues: 0 | License: No license | Last Updated: N/A"
        ));
    }

    #[test]
    fn test_chart_legend() {
        let blocks = layout(&sample_report()).expect("layout");
        let Some(Block::Chart { legend, image }) = blocks.last() else {
            panic!("expected chart block last");
        };

        assert_eq!(legend, &vec!["Go: 1 (50.0%)", "Rust: 1 (50.0%)"]);
        assert!(image.width > 0);
    }

    #[test]
    fn test_empty_distribution_omits_chart_keeps_table() {
        let blocks = layout(&empty_report()).expect("layout");

        assert_eq!(
            headings(&blocks),
            vec![TITLE, STATS_HEADING, LANGUAGES_HEADING, PROJECTS_HEADING]
        );
        assert!(!blocks.iter().any(|b| matches!(b, Block::Chart { .. })));
        assert!(
            blocks
                .iter()
                .any(|b| matches!(b, Block::Table { rows, .. } if rows.is_empty()))
        );
        assert!(paragraphs(&blocks).contains(&"Total Repositories: 0"));
    }
}
