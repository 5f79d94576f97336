//! CLI integration tests for gsflow.
//!
//! These tests build small model workspaces on disk and run the binary
//! against them.

use std::fs;
use std::path::Path;
use std::process::Command;

use assert_cmd::prelude::*;
use predicates::prelude::*;
use tempfile::TempDir;

/// Get the gsflow binary command, isolated from the user's global config.
fn gsflow(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("gsflow").unwrap();
    cmd.env("HOME", home).env_remove("GSFLOW_WORKSPACE");
    cmd
}

/// Create a model workspace with a name file and some package files.
fn sagehen() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let ws = tmp.path().join("modflow");
    fs::create_dir_all(ws.join("input")).unwrap();
    fs::write(ws.join("input").join("sagehen.dis"), "").unwrap();
    fs::write(ws.join("input").join("Sagehen.BAS"), "").unwrap();
    fs::write(ws.join("input").join("sagehen.wel"), "").unwrap();
    fs::write(
        ws.join("sagehen.nam"),
        "# Name file for sagehen; xll:214860.0; yll:4365805.0; rotation:0.0\n\
         LIST          7  output/sagehen.lst\n\
         DIS           0  input\\sagehen.dis\n\
         BAS6         13  'input/sagehen.bas'\n\
         WEL          20  input/sagehen.wel\n\
         DATA(BINARY) 51  output/heads.bin  REPLACE\n",
    )
    .unwrap();
    tmp
}

// ============================================================================
// gsflow units
// ============================================================================

#[test]
fn test_units_table() {
    let tmp = sagehen();

    gsflow(tmp.path())
        .args(["units", "modflow/sagehen.nam"])
        .current_dir(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("UNIT"))
        .stdout(predicate::str::contains("DATA(BINARY)"))
        .stdout(predicate::str::contains("11"))
        .stdout(predicate::str::contains("missing"));
}

#[test]
fn test_units_json() {
    let tmp = sagehen();

    let output = gsflow(tmp.path())
        .args(["--quiet", "units", "modflow/sagehen.nam", "--json"])
        .current_dir(tmp.path())
        .output()
        .unwrap();
    assert!(output.status.success());

    let units: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let units = units.as_array().unwrap();
    assert_eq!(units.len(), 5);

    let keys: Vec<_> = units.iter().map(|u| u["key"].clone()).collect();
    assert_eq!(
        keys,
        vec![
            serde_json::json!(7),
            serde_json::json!(11),
            serde_json::json!(13),
            serde_json::json!(20),
            serde_json::json!(51),
        ]
    );

    // Case mismatch on disk is resolved silently.
    assert_eq!(units[2]["open"], true);
    assert_eq!(units[4]["mode"], "binary");
    assert_eq!(units[4]["open"], false);
}

#[test]
fn test_units_reports_unopenable_files() {
    let tmp = sagehen();

    gsflow(tmp.path())
        .args(["units", "modflow/sagehen.nam"])
        .current_dir(tmp.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("could not set filehandle"));
}

#[test]
fn test_units_quiet_suppresses_open_warnings() {
    let tmp = sagehen();

    gsflow(tmp.path())
        .args(["--quiet", "units", "modflow/sagehen.nam"])
        .current_dir(tmp.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("could not set filehandle").not());
}

#[test]
fn test_units_with_control_file() {
    let tmp = sagehen();
    let control = tmp.path().join("gsflow").join("sagehen.control");
    fs::create_dir_all(control.parent().unwrap()).unwrap();
    fs::write(&control, "####\n").unwrap();
    fs::write(
        tmp.path().join("modflow").join("gs.nam"),
        "DIS 11 ../modflow/input/sagehen.dis\n",
    )
    .unwrap();

    gsflow(tmp.path())
        .args(["units", "modflow/gs.nam", "--control-file"])
        .arg(&control)
        .current_dir(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("open"));
}

#[test]
fn test_units_fails_on_short_line() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join("bad.nam"),
        "LIST 7 a.lst\nDIS 11 a.dis\n\n# note\nBAS6 13 a.bas\nOC 14 a.oc\nBAD_LINE 5\n",
    )
    .unwrap();

    gsflow(tmp.path())
        .args(["units", "bad.nam"])
        .current_dir(tmp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("line 7"))
        .stderr(predicate::str::contains("BAD_LINE 5"));
}

#[test]
fn test_units_fails_on_missing_name_file() {
    let tmp = TempDir::new().unwrap();

    gsflow(tmp.path())
        .args(["units", "absent.nam"])
        .current_dir(tmp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("could not find absent.nam"));
}

#[test]
fn test_project_config_reserved_unit() {
    let tmp = TempDir::new().unwrap();
    fs::create_dir_all(tmp.path().join(".gsflow")).unwrap();
    fs::write(
        tmp.path().join(".gsflow").join("config.toml"),
        "[packages.swr]\nreserved_unit = 95\n",
    )
    .unwrap();
    fs::write(tmp.path().join("m.nam"), "SWR 0 model.swr\n").unwrap();

    gsflow(tmp.path())
        .args(["find", "m.nam", "swr"])
        .current_dir(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("SWR 95"));
}

// ============================================================================
// gsflow find
// ============================================================================

#[test]
fn test_find_first_match() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join("m.nam"),
        "WEL 11 wel_file.wel\nWEL 12 wel_file2.wel\n",
    )
    .unwrap();

    gsflow(tmp.path())
        .args(["--quiet", "find", "m.nam", "wel"])
        .current_dir(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::diff("WEL 11\n"));
}

#[test]
fn test_find_missing_type_fails() {
    let tmp = sagehen();

    gsflow(tmp.path())
        .args(["--quiet", "find", "modflow/sagehen.nam", "dis", "sfr"])
        .current_dir(tmp.path())
        .assert()
        .failure()
        .stdout(predicate::str::contains("DIS 11"))
        .stderr(predicate::str::contains("sfr"));
}

// ============================================================================
// gsflow header / packages
// ============================================================================

#[test]
fn test_header_attributes() {
    let tmp = sagehen();

    gsflow(tmp.path())
        .args(["header", "modflow/sagehen.nam"])
        .current_dir(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("xll = 214860.0"))
        .stdout(predicate::str::contains("rotation = 0.0"));
}

#[test]
fn test_packages_lists_defaults() {
    let tmp = TempDir::new().unwrap();

    gsflow(tmp.path())
        .args(["packages"])
        .current_dir(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("DIS"))
        .stdout(predicate::str::contains("Discretization"));
}

#[test]
fn test_completions() {
    let tmp = TempDir::new().unwrap();

    gsflow(tmp.path())
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("gsflow"));
}
