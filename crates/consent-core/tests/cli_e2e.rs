//! End-to-end tests for the consent-status binary.
//!
//! Each test runs the binary in a fresh temporary working directory holding
//! `data/dual-license-responses.json`, then inspects stdout, stderr, the exit
//! code, and the generated `status.md`.

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const INPUT: &str = "data/dual-license-responses.json";
const OUTPUT: &str = "status.md";

const SAMPLE: &str = r#"{
  "claimedEmails": {
    "responses": [
      { "unassociatedCommitterEmail": "x@y.com" },
      { "unassociatedCommitterEmail": "z@y.com", "comment": "handled" },
      { "unassociatedCommitterEmail": "ci@y.com", "consentNeeded": false, "notes": "CI account" }
    ]
  },
  "gitHubUserContributors": {
    "responses": [
      { "gitHubLogin": "a", "consent": true },
      { "gitHubLogin": "b", "consent": false },
      { "gitHubLogin": "c", "consentNeeded": false, "notes": "bot" },
      { "gitHubLogin": "d" },
      { "gitHubLogin": "e", "consent": true, "notes": "signed CLA" },
      { "gitHubLogin": "f", "consentNeeded": true }
    ]
  }
}"#;

const EXPECTED_STATUS: &str = "\
# Current Status

The contents of this file are generated by [the `consent-status` tool](crates/consent-core/src/main.rs)
from the [`dual-license-responses.json`](data/dual-license-responses.json) file.

## Unassociated Emails

| Unassociated Email... | Number |
| --- | --- |
| Has Been Claimed By a GitHub User | 1 |
| Remains Unclaimed | 2 |

## Consent to Dual-License

| Contributor Has | Number |
| --- | --- |
| Consented | 2 |
| Denied Consent | 1 |
| No Response | 2 |

### Users Who Have Consented
a, e

### Usernames We Do Not Need Consent From (check \"notes\" in [`dual-license-responses.json`](data/dual-license-responses.json))
c

### Users Who Have Denied Consent
b

### Users Who Have Not Responded Yet
d, f
";

/// Get a Command for the consent-status binary running in `dir`.
fn consent_status(dir: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("consent-status");
    cmd.current_dir(dir)
        .env_remove("RUST_LOG")
        .env_remove("CONSENT_LOG")
        .env_remove("CONSENT_LOG_FORMAT")
        .arg("--no-color");
    cmd
}

fn workspace_with(json: &str) -> TempDir {
    let dir = TempDir::new().expect("create temp dir");
    let input = dir.path().join(INPUT);
    fs::create_dir_all(input.parent().unwrap()).expect("create data dir");
    fs::write(input, json).expect("write input");
    dir
}

fn status_path(dir: &TempDir) -> PathBuf {
    dir.path().join(OUTPUT)
}

// ============================================================================
// Successful runs
// ============================================================================

mod report {
    use super::*;

    #[test]
    fn writes_status_markdown() {
        let dir = workspace_with(SAMPLE);
        consent_status(dir.path()).assert().success();

        let written = fs::read_to_string(status_path(&dir)).unwrap();
        assert_eq!(written, EXPECTED_STATUS);
    }

    #[test]
    fn prints_buckets_and_tables() {
        let dir = workspace_with(SAMPLE);
        consent_status(dir.path())
            .assert()
            .success()
            .stdout(predicate::str::contains("Consenting users:\na, e\n"))
            .stdout(predicate::str::contains(
                "Usernames we do not need consent from:\nc\n",
            ))
            .stdout(predicate::str::contains("NON consenting users:\nb\n"))
            .stdout(predicate::str::contains(
                "Users who have not responded:\nd, f\n",
            ))
            .stdout(predicate::str::contains("Consent Responses"))
            .stdout(predicate::str::contains("│ denying consent │ 1      │"))
            .stdout(predicate::str::contains("Unassociated emails"))
            .stdout(predicate::str::contains("│ email remains unclaimed               │ 2      │"))
            .stdout(predicate::str::ends_with("Updating status.md file...\n"));
    }

    #[test]
    fn no_color_output_has_no_escapes() {
        let dir = workspace_with(SAMPLE);
        consent_status(dir.path())
            .assert()
            .success()
            .stdout(predicate::str::contains("\u{1b}[").not());
    }

    #[test]
    fn rerun_is_byte_identical() {
        let dir = workspace_with(SAMPLE);
        consent_status(dir.path()).assert().success();
        let first = fs::read(status_path(&dir)).unwrap();

        consent_status(dir.path()).assert().success();
        assert_eq!(fs::read(status_path(&dir)).unwrap(), first);
    }

    #[test]
    fn overwrites_existing_report() {
        let dir = workspace_with(SAMPLE);
        fs::write(status_path(&dir), "# Old Status\n".repeat(100)).unwrap();

        consent_status(dir.path()).assert().success();
        assert_eq!(
            fs::read_to_string(status_path(&dir)).unwrap(),
            EXPECTED_STATUS
        );
    }

    #[test]
    fn null_comment_and_notes_count_as_present() {
        let dir = workspace_with(
            r#"{
              "claimedEmails": { "responses": [
                { "unassociatedCommitterEmail": "a@y.com", "comment": null },
                { "unassociatedCommitterEmail": "b@y.com", "consentNeeded": false, "notes": null }
              ] },
              "gitHubUserContributors": { "responses": [
                { "gitHubLogin": "bot", "consentNeeded": false, "notes": null }
              ] }
            }"#,
        );
        consent_status(dir.path()).assert().success();

        let written = fs::read_to_string(status_path(&dir)).unwrap();
        assert!(written.contains("| Has Been Claimed By a GitHub User | 1 |"));
        assert!(written.contains("| Remains Unclaimed | 1 |"));
        assert!(written.contains("[`dual-license-responses.json`](data/dual-license-responses.json))\nbot\n"));
    }

    #[test]
    fn empty_document_reports_zeroes() {
        let dir = workspace_with(
            r#"{ "claimedEmails": { "responses": [] }, "gitHubUserContributors": { "responses": [] } }"#,
        );
        consent_status(dir.path()).assert().success();

        let written = fs::read_to_string(status_path(&dir)).unwrap();
        assert!(written.contains("| Remains Unclaimed | 0 |"));
        assert!(written.contains("| No Response | 0 |"));
        assert!(written.contains("### Users Who Have Consented\n\n"));
    }
}

// ============================================================================
// Validation failures
// ============================================================================

mod validation {
    use super::*;

    #[test]
    fn email_without_note_halts() {
        let json = SAMPLE.replace(r#", "notes": "CI account""#, "");
        let dir = workspace_with(&json);

        consent_status(dir.path())
            .assert()
            .code(11)
            .stdout(predicate::str::is_empty())
            .stderr(predicate::str::contains(
                "All entries where a response is not needed should have a 'notes' property providing an explanation, but ci@y.com has no 'notes'. Aborting...",
            ));
        assert!(!status_path(&dir).exists());
    }

    #[test]
    fn contributor_without_note_halts() {
        let json = SAMPLE.replace(r#", "notes": "bot""#, "");
        let dir = workspace_with(&json);

        consent_status(dir.path())
            .assert()
            .code(11)
            .stdout(predicate::str::contains("Consent Responses").not())
            .stderr(predicate::str::contains(
                "but c has no 'notes'. Aborting...",
            ));
        assert!(!status_path(&dir).exists());
    }

    #[test]
    fn failed_run_keeps_previous_report() {
        let json = SAMPLE.replace(r#", "notes": "bot""#, "");
        let dir = workspace_with(&json);
        fs::write(status_path(&dir), "previous").unwrap();

        consent_status(dir.path()).assert().code(11);
        assert_eq!(fs::read_to_string(status_path(&dir)).unwrap(), "previous");
    }
}

// ============================================================================
// Input errors
// ============================================================================

mod input_errors {
    use super::*;

    #[test]
    fn missing_input_file() {
        let dir = TempDir::new().unwrap();
        consent_status(dir.path())
            .assert()
            .code(12)
            .stderr(predicate::str::contains(INPUT));
        assert!(!status_path(&dir).exists());
    }

    #[test]
    fn malformed_json() {
        let dir = workspace_with("{ \"claimedEmails\": ");
        consent_status(dir.path())
            .assert()
            .code(12)
            .stderr(predicate::str::contains("invalid JSON"));
        assert!(!status_path(&dir).exists());
    }

    #[test]
    fn wrong_field_type() {
        let dir = workspace_with(
            r#"{ "claimedEmails": { "responses": [] }, "gitHubUserContributors": { "responses": [ { "gitHubLogin": "a", "consent": "yes" } ] } }"#,
        );
        consent_status(dir.path()).assert().code(12);
    }
}

// ============================================================================
// CLI options
// ============================================================================

mod cli_options {
    use super::*;

    #[test]
    fn unknown_flag_fails() {
        let dir = workspace_with(SAMPLE);
        consent_status(dir.path())
            .arg("--input")
            .assert()
            .failure()
            .stderr(predicate::str::contains("error"));
        assert!(!status_path(&dir).exists());
    }

    #[test]
    fn version_flag() {
        let dir = TempDir::new().unwrap();
        consent_status(dir.path())
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains("consent-status"));
    }

    #[test]
    fn invalid_log_format_fails() {
        let dir = workspace_with(SAMPLE);
        consent_status(dir.path())
            .args(["--log-format", "xml"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("unknown log format"));
    }

    #[test]
    fn jsonl_logs_on_stderr() {
        let dir = workspace_with(SAMPLE);
        let output = consent_status(dir.path())
            .args(["--log-format", "jsonl"])
            .output()
            .expect("run consent-status");
        assert!(output.status.success());

        let stderr = String::from_utf8(output.stderr).unwrap();
        let events: Vec<Value> = stderr
            .lines()
            .filter(|l| !l.trim().is_empty())
            .map(|l| serde_json::from_str(l).expect("stderr line is JSON"))
            .collect();

        let names: Vec<&str> = events
            .iter()
            .filter_map(|e| e.get("event").and_then(Value::as_str))
            .collect();
        assert!(names.contains(&"run.started"));
        assert!(names.contains(&"report.written"));
        assert!(names.contains(&"run.finished"));

        let run_ids: Vec<&str> = events
            .iter()
            .filter_map(|e| e.get("run_id").and_then(Value::as_str))
            .collect();
        assert!(!run_ids.is_empty());
        assert!(run_ids.iter().all(|id| *id == run_ids[0]));
    }

    #[test]
    fn quiet_suppresses_info_logs() {
        let dir = workspace_with(SAMPLE);
        consent_status(dir.path())
            .arg("--quiet")
            .assert()
            .success()
            .stderr(predicate::str::is_empty());
    }
}
