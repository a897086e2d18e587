//! End-to-end tests for the csv-remove-users binary
//!
//! Runs the built binary against temporary CSV and store files.

mod common;

use std::path::Path;
use std::process::{Command, Output, Stdio};

use common::{Workspace, sample_directory};
use csv_remove_users::SiteDirectory;

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_csv-remove-users"))
        .args(args)
        .env_remove("CSV_REMOVE_USERS_STORE")
        .env_remove("CSV_REMOVE_USERS_SITE")
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1")
        .stdin(Stdio::null())
        .output()
        .expect("Failed to run csv-remove-users")
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

fn load(path: &Path) -> SiteDirectory {
    serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap()
}

#[test]
fn test_dry_run_is_default_and_leaves_store_alone() {
    let ws = Workspace::new();
    let store = ws.write_store();
    let csv = ws.write("users.csv", "ID,user_login\n2,alice\n1,admin\n9,ghost\n");

    let output = run(&[
        "--store",
        store.to_str().unwrap(),
        &format!("--csv={}", csv.display()),
        "--reassign=1",
    ]);

    let log = stderr(&output);
    assert!(output.status.success(), "stderr: {log}");
    assert!(log.contains("Reassigning posts belonging to removed users to admin"));
    assert!(log.contains("(dry run) Removed user (alice)"));
    assert!(log.contains("Skipping user admin with ID 1"));
    assert!(log.contains("User ghost does not exist"));
    assert!(log.contains("All done."));
    assert_eq!(load(&store), sample_directory());
}

#[test]
fn test_live_run_with_yes_removes_and_reassigns() {
    let ws = Workspace::new();
    let store = ws.write_store();
    let csv = ws.write("users.csv", "ID,user_login\n2,alice\n3,bob\n");
    let report = ws.path("report.jsonl");

    let output = run(&[
        "--store",
        store.to_str().unwrap(),
        &format!("--csv={}", csv.display()),
        "--reassign=5",
        "--dry-run=false",
        "--yes",
        "--report",
        report.to_str().unwrap(),
    ]);

    let log = stderr(&output);
    assert!(output.status.success(), "stderr: {log}");
    assert!(log.contains("Removed user (alice)"));
    assert!(log.contains("Removed user (bob)"));

    let directory = load(&store);
    assert_eq!(directory.sites[0].members, vec![1, 5]);
    assert!(directory.posts.iter().all(|p| p.author == 5));

    let lines: Vec<serde_json::Value> = std::fs::read_to_string(&report)
        .unwrap()
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0]["user_login"], "alice");
    assert_eq!(lines[1]["status"], "removed");
    assert_eq!(lines[2]["summary"]["removed"], 2);
    assert_eq!(lines[2]["summary"]["dry_run"], false);
}

#[test]
fn test_unwritable_report_fails_the_run() {
    let ws = Workspace::new();
    let store = ws.write_store();
    let csv = ws.write("users.csv", "ID,user_login\n2,alice\n");

    let output = run(&[
        "--store",
        store.to_str().unwrap(),
        &format!("--csv={}", csv.display()),
        "--reassign=1",
        "--dry-run=false",
        "--yes",
        "--report",
        ws.path("").to_str().unwrap(),
    ]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("I/O error"));
    assert_eq!(load(&store), sample_directory());
}

#[test]
fn test_live_run_without_terminal_refuses() {
    let ws = Workspace::new();
    let store = ws.write_store();
    let csv = ws.write("users.csv", "ID,user_login\n2,alice\n");

    let output = run(&[
        "--store",
        store.to_str().unwrap(),
        &format!("--csv={}", csv.display()),
        "--reassign=1",
        "--dry-run=false",
    ]);

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("non-interactive"));
    assert_eq!(load(&store), sample_directory());
}

#[test]
fn test_missing_arguments_fail_with_config_errors() {
    let ws = Workspace::new();
    let store = ws.write_store();
    let csv = ws.write("users.csv", "ID,user_login\n2,alice\n");
    let store_arg = store.to_str().unwrap();

    let output = run(&["--store", store_arg, "--reassign=1"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("missing or unreadable csv"));

    let missing = ws.path("missing.csv");
    let output = run(&[
        "--store",
        store_arg,
        &format!("--csv={}", missing.display()),
        "--reassign=1",
    ]);
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("missing or unreadable csv"));

    let output = run(&["--store", store_arg, &format!("--csv={}", csv.display())]);
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("missing reassign argument"));

    let output = run(&[
        "--store",
        store_arg,
        &format!("--csv={}", csv.display()),
        "--reassign=77",
    ]);
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("invalid reassignment user"));
}

#[test]
fn test_unreadable_store_is_fatal() {
    let ws = Workspace::new();
    let csv = ws.write("users.csv", "ID,user_login\n2,alice\n");
    let bad = ws.write("store.json", "not json");

    let output = run(&[
        "--store",
        bad.to_str().unwrap(),
        &format!("--csv={}", csv.display()),
        "--reassign=1",
    ]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("malformed store"));
}
