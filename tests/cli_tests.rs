//! CLI integration tests using the real ghreport binary

mod common;

use common::{TestWorkspace, fixture};
use predicates::prelude::*;

fn analyze_fixture(workspace: &TestWorkspace, session: Option<&str>) {
    let mut cmd = workspace.cmd();
    if let Some(session) = session {
        cmd.args(["--session", session]);
    }
    cmd.arg("analyze")
        .arg("octocat")
        .arg("--profile-file")
        .arg(fixture("octocat_profile.json"))
        .arg("--repos-file")
        .arg(fixture("octocat_repos.json"))
        .assert()
        .success();
}

#[test]
fn test_help_output() {
    TestWorkspace::new()
        .cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("GitHub"))
        .stdout(predicate::str::contains("analyze"))
        .stdout(predicate::str::contains("export"))
        .stdout(predicate::str::contains("sessions"));
}

#[test]
fn test_version_output() {
    TestWorkspace::new()
        .cmd()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains("ghreport"))
        .stdout(predicate::str::contains("Build info"));
}

#[test]
fn test_analyze_from_files_shows_report() {
    let workspace = TestWorkspace::new();

    workspace
        .cmd()
        .arg("analyze")
        .arg("octocat")
        .arg("--profile-file")
        .arg(fixture("octocat_profile.json"))
        .arg("--repos-file")
        .arg(fixture("octocat_repos.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("GitHub Analysis Report"))
        .stdout(predicate::str::contains("The Octocat"))
        .stdout(predicate::str::contains("Total Repositories:"))
        .stdout(predicate::str::contains("Hello-World"))
        .stdout(predicate::str::contains("No license"));

    assert_eq!(workspace.stored_reports(), 1);
}

#[test]
fn test_analyze_json_output() {
    let workspace = TestWorkspace::new();

    let output = workspace
        .cmd()
        .arg("analyze")
        .arg("octocat")
        .arg("--json")
        .arg("--profile-file")
        .arg(fixture("octocat_profile.json"))
        .arg("--repos-file")
        .arg(fixture("octocat_repos.json"))
        .output()
        .expect("run ghreport");

    assert!(output.status.success());
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json");
    assert_eq!(report["stats"]["total_repos"], 4);
    assert_eq!(report["stats"]["total_stars"], 7);
    assert_eq!(report["stats"]["total_forks"], 3);
    assert_eq!(report["profile"]["login"], "octocat");
    assert_eq!(report["languages"][0]["language"], "Go");
    assert_eq!(report["languages"][0]["count"], 2);
    assert_eq!(report["languages"][1]["language"], "Rust");
    assert_eq!(report["projects"][1]["license"], "No license");
}

#[test]
fn test_analyze_then_export_writes_pdf() {
    let workspace = TestWorkspace::new();
    analyze_fixture(&workspace, None);

    workspace
        .cmd()
        .arg("export")
        .assert()
        .success()
        .stdout(predicate::str::contains("Report saved to"))
        .stdout(predicate::str::contains("github_report.pdf"));

    let bytes = workspace.read_bytes("github_report.pdf");
    assert!(bytes.starts_with(b"%PDF"));
}

#[test]
fn test_export_to_custom_path() {
    let workspace = TestWorkspace::new();
    analyze_fixture(&workspace, None);

    workspace
        .cmd()
        .args(["export", "--output", "out/octocat.pdf"])
        .assert()
        .success();

    assert!(workspace.file_exists("out/octocat.pdf"));
    assert!(!workspace.file_exists("github_report.pdf"));
}

#[test]
fn test_export_without_analysis_fails() {
    let workspace = TestWorkspace::new();

    workspace
        .cmd()
        .arg("export")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains(
            "No data available to export. Please analyze a profile first.",
        ));

    assert!(!workspace.file_exists("github_report.pdf"));
}

#[test]
fn test_sessions_are_isolated() {
    let workspace = TestWorkspace::new();
    analyze_fixture(&workspace, Some("work"));

    workspace
        .cmd()
        .arg("export")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No data available to export"));

    workspace
        .cmd()
        .args(["--session", "work", "export"])
        .assert()
        .success();
}

#[test]
fn test_session_from_environment() {
    let workspace = TestWorkspace::new();
    analyze_fixture(&workspace, Some("env-session"));

    workspace
        .cmd()
        .env("GHREPORT_SESSION", "env-session")
        .arg("export")
        .assert()
        .success();
}

#[test]
fn test_missing_profile_file_is_user_not_found() {
    let workspace = TestWorkspace::new();

    workspace
        .cmd()
        .args(["analyze", "ghost", "--profile-file", "missing.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("User not found: ghost"));

    assert_eq!(workspace.stored_reports(), 0);
}

#[test]
fn test_empty_profile_body_is_user_not_found() {
    let workspace = TestWorkspace::new();

    for body in ["{}", "null", "[]"] {
        let profile = workspace.write_file("profile.json", body);

        workspace
            .cmd()
            .arg("analyze")
            .arg("ghost")
            .arg("--profile-file")
            .arg(profile)
            .assert()
            .failure()
            .stderr(predicate::str::contains("User not found: ghost"));
    }
    assert_eq!(workspace.stored_reports(), 0);
}

#[test]
fn test_malformed_profile_file_fails() {
    let workspace = TestWorkspace::new();
    let profile = workspace.write_file("profile.json", "{ not json");

    workspace
        .cmd()
        .arg("analyze")
        .arg("octocat")
        .arg("--profile-file")
        .arg(profile)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn test_profile_without_repos_file_is_empty_report() {
    let workspace = TestWorkspace::new();

    workspace
        .cmd()
        .arg("analyze")
        .arg("octocat")
        .arg("--profile-file")
        .arg(fixture("octocat_profile.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Total Repositories: 0"));

    workspace.cmd().arg("export").assert().success();
    assert!(workspace.file_exists("github_report.pdf"));
}

#[test]
fn test_unreachable_api_is_user_not_found() {
    let workspace = TestWorkspace::new();

    workspace
        .cmd()
        .args(["analyze", "octocat"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("User not found: octocat"));
}

#[test]
fn test_missing_username_without_terminal() {
    let workspace = TestWorkspace::new();

    workspace
        .cmd()
        .arg("analyze")
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Please enter a GitHub username"));
}

#[test]
fn test_blank_username_is_missing() {
    let workspace = TestWorkspace::new();

    workspace
        .cmd()
        .args(["analyze", "   "])
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Please enter a GitHub username"));
}

#[test]
fn test_sessions_list_remove_clear() {
    let workspace = TestWorkspace::new();
    analyze_fixture(&workspace, None);
    analyze_fixture(&workspace, Some("work"));

    workspace
        .cmd()
        .args(["sessions", "--list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Stored reports (2):"))
        .stdout(predicate::str::contains("work"))
        .stdout(predicate::str::contains("octocat"));

    workspace
        .cmd()
        .args(["sessions", "--remove", "work"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed session"));
    assert_eq!(workspace.stored_reports(), 1);

    workspace
        .cmd()
        .args(["sessions", "--clear"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed"));
    assert_eq!(workspace.stored_reports(), 0);

    workspace
        .cmd()
        .arg("sessions")
        .assert()
        .success()
        .stdout(predicate::str::contains("No stored reports."));
}

#[test]
fn test_reanalyze_replaces_report() {
    let workspace = TestWorkspace::new();
    analyze_fixture(&workspace, None);

    workspace
        .cmd()
        .arg("analyze")
        .arg("octocat")
        .arg("--profile-file")
        .arg(fixture("octocat_profile.json"))
        .assert()
        .success();

    assert_eq!(workspace.stored_reports(), 1);
    workspace
        .cmd()
        .args(["sessions", "--list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(0 repositories)"));
}

#[test]
fn test_completions_bash() {
    TestWorkspace::new()
        .cmd()
        .args(["completions", "--shell", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ghreport"));
}

#[test]
fn test_completions_unknown_shell() {
    TestWorkspace::new()
        .cmd()
        .args(["completions", "--shell", "tcsh"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown shell: tcsh"));
}
