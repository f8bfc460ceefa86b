//! CLI binary smoke tests using assert_cmd.
//!
//! These tests run the compiled `numvec` binary against small fixture files
//! to check argument parsing, TSV output and error reporting end-to-end.

use std::io::Write;
use std::net::TcpListener;

use assert_cmd::Command;
use predicates::prelude::*;

fn cmd() -> Command {
    Command::cargo_bin("numvec").unwrap()
}

fn fixture(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

// ---------------------------------------------------------------------------
// Top-level
// ---------------------------------------------------------------------------

#[test]
fn no_args_shows_help() {
    cmd()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn help_lists_subcommands() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("describe"))
        .stdout(predicate::str::contains("cumtrapz"))
        .stdout(predicate::str::contains("remote"));
}

#[test]
fn version_flag() {
    cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("numvec"));
}

// ---------------------------------------------------------------------------
// describe
// ---------------------------------------------------------------------------

#[test]
fn describe_unpacked_columns() {
    let file = fixture("1 2\n3 4\n");
    cmd()
        .args(["describe", "--unpack"])
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "column\tlen\tsum\tmean\tmin\tmin_index\tmax\tmax_index\tnorm\n",
        ))
        .stdout(predicate::str::contains("0\t2\t4\t2\t1\t0\t3\t1\t"))
        .stdout(predicate::str::contains("1\t2\t6\t3\t2\t0\t4\t1\t"));
}

#[test]
fn describe_flat_skips_header_line() {
    let file = fixture("x y\n1 2\n3 4\n");
    cmd()
        .args(["describe", "--skip", "1"])
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("0\t4\t10\t2.5\t1\t0\t4\t3\t"));
}

#[test]
fn describe_takes_skip_lines_from_config() {
    let config = fixture(r#"{"loader": {"skip_lines": 1}}"#);
    let file = fixture("x y\n1 2\n3 4\n");
    cmd()
        .arg("describe")
        .arg(file.path())
        .arg("--config")
        .arg(config.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("0\t4\t10\t2.5\t1\t0\t4\t3\t"));
}

#[test]
fn skip_flag_overrides_config() {
    let config = fixture(r#"{"loader": {"skip_lines": 2}}"#);
    let file = fixture("1 1\n2 1\n3 1\n");
    cmd()
        .arg("cumtrapz")
        .arg(file.path())
        .args(["--skip", "0", "--config"])
        .arg(config.path())
        .assert()
        .success()
        .stdout("2\t1\n3\t2\n");
}

#[test]
fn describe_json_output() {
    let file = fixture("5\n-1\n");
    cmd()
        .args(["describe", "--json"])
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("\"min_index\": 1"));
}

#[test]
fn describe_missing_file_errors() {
    cmd()
        .args(["describe", "/nonexistent/data.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read text file"));
}

#[test]
fn describe_bad_number_errors() {
    let file = fixture("1\nabc\n");
    cmd()
        .arg("describe")
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("line 2"));
}

// ---------------------------------------------------------------------------
// Kernel subcommands
// ---------------------------------------------------------------------------

#[test]
fn interp_clamps_and_interpolates() {
    let file = fixture("0\n1.5\n4\n");
    cmd()
        .arg("interp")
        .arg(file.path())
        .args(["--xp", "1,2,3", "--fp", "3,2,0"])
        .assert()
        .success()
        .stdout("0\t3\n1.5\t2.5\n4\t0\n");
}

#[test]
fn interp_requires_control_points() {
    let file = fixture("1\n");
    cmd().arg("interp").arg(file.path()).assert().failure();
}

#[test]
fn interp_mismatched_control_points_errors() {
    let file = fixture("1\n");
    cmd()
        .arg("interp")
        .arg(file.path())
        .args(["--xp", "1,2,3", "--fp", "3,2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("same length"));
}

#[test]
fn cumtrapz_unit_height() {
    let file = fixture("1 1\n2 1\n3 1\n4 1\n");
    cmd()
        .arg("cumtrapz")
        .arg(file.path())
        .assert()
        .success()
        .stdout("2\t1\n3\t2\n4\t3\n");
}

#[test]
fn cumtrapz_unsorted_errors() {
    let file = fixture("1 1\n3 1\n2 1\n");
    cmd()
        .arg("cumtrapz")
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("strictly increasing"));
}

#[test]
fn cumtrapz_needs_two_columns() {
    let file = fixture("1\n2\n");
    cmd()
        .arg("cumtrapz")
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("2 non-empty column(s)"));
}

#[test]
fn unwrap_smooth_signal_is_unchanged() {
    let file = fixture("0\n0.5\n1\n");
    cmd()
        .arg("unwrap")
        .arg(file.path())
        .assert()
        .success()
        .stdout("0\n0.5\n1\n");
}

#[test]
fn polyfit_prints_slope_and_intercept() {
    let file = fixture("1 2\n2 4\n3 6\n");
    let output = cmd().arg("polyfit").arg(file.path()).output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let mut lines = stdout.lines();
    assert_eq!(lines.next(), Some("slope\tintercept"));
    let values: Vec<f64> = lines
        .next()
        .unwrap()
        .split('\t')
        .map(|v| v.parse().unwrap())
        .collect();
    assert!((values[0] - 2.0).abs() < 1e-9);
    assert!(values[1].abs() < 1e-9);
}

#[test]
fn polyfit_json_output() {
    let file = fixture("1 2\n2 4\n3 6\n");
    let output = cmd()
        .args(["polyfit", "--json"])
        .arg(file.path())
        .output()
        .unwrap();
    assert!(output.status.success());
    let fit: numvec::FitResult = serde_json::from_slice(&output.stdout).unwrap();
    assert!((fit.slope - 2.0).abs() < 1e-9);
    assert!(fit.intercept.abs() < 1e-9);
}

// ---------------------------------------------------------------------------
// remote
// ---------------------------------------------------------------------------

#[test]
fn remote_rejects_invalid_payload() {
    cmd()
        .args(["remote", "interpolate", "--payload", "{not json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Payload is not valid JSON"));
}

#[test]
fn remote_unreachable_service_errors() {
    let port = TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port();
    let config = fixture(&format!(
        concat!(
            r#"{{"remote": {{"base_url": "http://127.0.0.1:{}", "#,
            r#""max_retries": 0, "timeout_secs": 2, "no_proxy": true}}}}"#
        ),
        port
    ));
    cmd()
        .args(["remote", "find_root", "--payload", r#"{"expression": "x - 1", "x0": 0}"#])
        .arg("--config")
        .arg(config.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("after 1 attempt(s)"));
}
