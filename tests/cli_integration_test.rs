use predicates::prelude::*;

use std::fs;
use tempfile::TempDir;

/// Test that the binary runs and shows help
#[test]
fn test_help_command() {
    assert_cmd::cargo_bin_cmd!("xprotect-extract")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("tabular rows"));
}

/// Test that the binary shows version
#[test]
fn test_version_command() {
    assert_cmd::cargo_bin_cmd!("xprotect-extract")
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("xprotect-extract"));
}

/// A missing plist is "feature unavailable", not a failure: the run succeeds
/// with an empty row set.
#[test]
fn test_missing_plist_succeeds_with_no_rows() {
    assert_cmd::cargo_bin_cmd!("xprotect-extract")
        .args(["--plist", "/nonexistent/XProtect.plist", "-f", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[]"));
}

/// JSON output against the bundled fixture
#[test]
fn test_json_output_from_fixture() {
    assert_cmd::cargo_bin_cmd!("xprotect-extract")
        .args(["--plist", "tests/fixtures/XProtect.plist", "-f", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("OSX.FlashFake.A"))
        .stdout(predicate::str::contains("com.adobe.flash.download"));
}

/// Terminal output renders the column header and row values
#[test]
fn test_terminal_output_columns() {
    let temp_dir = TempDir::new().unwrap();
    let plist_path = temp_dir.path().join("XProtect.plist");

    fs::write(
        &plist_path,
        "<plist version=\"1.0\"><array><dict>\
         <key>Description</key><string>Test.Row</string>\
         <key>MatchType</key><string>MatchAny</string>\
         <key>Matches</key><array><dict>\
         <key>MatchFile</key><dict>\
         <key>NSURLNameKey</key><string>evil.zip</string>\
         </dict></dict></array>\
         </dict></array></plist>",
    )
    .unwrap();

    assert_cmd::cargo_bin_cmd!("xprotect-extract")
        .args(["--plist", plist_path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("launch_type"))
        .stdout(predicate::str::contains("Test.Row"))
        .stdout(predicate::str::contains("evil.zip"));
}

/// An invalid depth cap is rejected up front
#[test]
fn test_zero_max_depth_rejected() {
    assert_cmd::cargo_bin_cmd!("xprotect-extract")
        .args(["--max-depth", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("max-depth"));
}
