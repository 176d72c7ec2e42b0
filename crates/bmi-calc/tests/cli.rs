//! End-to-end CLI integration tests
//!
//! These tests invoke the compiled binary as a subprocess to verify
//! that the CLI behaves correctly from a user's perspective.

use assert_cmd::Command;
use predicates::prelude::*;

/// Returns a Command configured to run our binary.
///
/// Note: `cargo_bin` is marked deprecated for edge cases involving custom
/// cargo build directories, but works correctly for standard project layouts.
#[allow(deprecated)]
fn cmd() -> Command {
    Command::cargo_bin(env!("CARGO_PKG_NAME")).unwrap()
}

/// Run `calc` with the given raw fields and return stdout.
fn calc(height: &str, weight: &str) -> String {
    let output = cmd()
        .args(["calc", "--height", height, "--weight", weight])
        .output()
        .expect("failed to run command");
    assert!(
        output.status.success(),
        "command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout).unwrap()
}

// =============================================================================
// Help & Version
// =============================================================================

#[test]
fn help_flag_shows_usage() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("Commands:"))
        .stdout(predicate::str::contains("calc"));
}

#[test]
fn version_flag_shows_version() {
    cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn version_only_prints_bare_version() {
    cmd()
        .arg("--version-only")
        .assert()
        .success()
        .stdout(predicate::str::diff(format!(
            "{}\n",
            env!("CARGO_PKG_VERSION")
        )));
}

#[test]
fn no_arguments_shows_help() {
    cmd()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage:"));
}

// =============================================================================
// Calc: end-to-end scenarios
// =============================================================================

#[test]
fn calc_normal_weight() {
    assert_eq!(calc("170", "65"), "BMI: 22.49\nNormal\n");
}

#[test]
fn calc_mild_thinness() {
    assert_eq!(calc("150", "40"), "BMI: 17.78\nMild Thinness\n");
}

#[test]
fn calc_empty_height_shows_nothing() {
    assert_eq!(calc("", "70"), "");
}

#[test]
fn calc_negative_height_shows_nothing() {
    assert_eq!(calc("-10", "60"), "");
}

#[test]
fn calc_non_numeric_height_shows_nothing() {
    assert_eq!(calc("abc", "60"), "");
}

#[test]
fn calc_boundary_forty_is_obese_class_three() {
    assert_eq!(calc("100", "40"), "BMI: 40.00\nObese Class III\n");
}

#[test]
fn calc_missing_flags_treated_as_empty() {
    cmd()
        .args(["calc", "--weight", "70"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn calc_precision_flag() {
    cmd()
        .args(["calc", "--height", "170", "--weight", "65", "--precision", "0"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("BMI: 22\n"));
}

#[test]
fn calc_json_has_result_fields() {
    let output = cmd()
        .args(["--json", "calc", "--height", "150", "--weight", "40"])
        .assert()
        .success();
    let stdout = String::from_utf8_lossy(&output.get_output().stdout);
    let json: serde_json::Value =
        serde_json::from_str(&stdout).expect("calc --json should output valid JSON");

    assert_eq!(json["height"], "150");
    assert_eq!(json["height_cm"], 150.0);
    assert_eq!(json["category"], "Mild Thinness");
    assert_eq!(json["display"], "17.78");
    let bmi = json["bmi"].as_f64().unwrap();
    assert!((bmi - 40.0 / 2.25).abs() < 1e-9);
}

#[test]
fn calc_json_absent_result_is_null() {
    let output = cmd()
        .args(["calc", "--height", "abc", "--weight", "60", "--json"])
        .assert()
        .success();
    let stdout = String::from_utf8_lossy(&output.get_output().stdout);
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();

    assert!(json["height_cm"].is_null());
    assert_eq!(json["weight_kg"], 60.0);
    assert!(json["bmi"].is_null());
    assert!(json["category"].is_null());
}

// =============================================================================
// Form session
// =============================================================================

#[test]
fn form_recomputes_on_each_edit() {
    cmd()
        .arg("form")
        .write_stdin("height 170\nweight 65\nweight 90\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("BMI: 22.49\nNormal\n"))
        .stdout(predicate::str::contains("BMI: 31.14\nObese Class I\n"));
}

#[test]
fn form_clear_resets_fields() {
    cmd()
        .arg("form")
        .write_stdin("h 100\nw 40\nclear\n")
        .assert()
        .success()
        .stdout(predicate::str::ends_with(
            "height: (empty)  weight: (empty)\n",
        ));
}

#[test]
fn form_json_emits_one_line_per_edit() {
    let output = cmd()
        .args(["form", "--json"])
        .write_stdin("height 170\nweight 65\nquit\nweight 1\n")
        .assert()
        .success();
    let stdout = String::from_utf8_lossy(&output.get_output().stdout);
    let lines: Vec<serde_json::Value> = stdout
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[1]["category"], "Normal");
}

#[test]
fn form_unknown_command_reports_on_stderr() {
    cmd()
        .arg("form")
        .write_stdin("jump\n")
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("unknown command: jump"));
}

// =============================================================================
// Bands & Info
// =============================================================================

#[test]
fn bands_lists_all_categories() {
    let assert = cmd().arg("bands").assert().success();
    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).to_string();
    for label in [
        "Severe Thinness",
        "Moderate Thinness",
        "Mild Thinness",
        "Normal",
        "Overweight",
        "Obese Class I",
        "Obese Class II",
        "Obese Class III",
    ] {
        assert!(stdout.contains(label), "missing {label}");
    }
    assert_eq!(stdout.lines().count(), 8);
}

#[test]
fn bands_json_is_ordered_table() {
    let output = cmd().args(["bands", "--json"]).assert().success();
    let stdout = String::from_utf8_lossy(&output.get_output().stdout);
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let bands = json.as_array().unwrap();
    assert_eq!(bands.len(), 8);
    assert!(bands[0]["lower"].is_null());
    assert_eq!(bands[3]["category"], "Normal");
    assert_eq!(bands[3]["lower"], 18.5);
    assert_eq!(bands[7]["lower"], 40.0);
}

#[test]
fn info_shows_package_name_and_version() {
    cmd()
        .arg("info")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_NAME")))
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn info_json_outputs_valid_json() {
    let output = cmd().arg("info").arg("--json").assert().success();
    let stdout = String::from_utf8_lossy(&output.get_output().stdout);
    let json: serde_json::Value =
        serde_json::from_str(&stdout).expect("info --json should output valid JSON");

    assert_eq!(json["name"], env!("CARGO_PKG_NAME"));
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
}

// =============================================================================
// Global Flags
// =============================================================================

#[test]
fn quiet_flag_accepted() {
    cmd().args(["-q", "info"]).assert().success();
}

#[test]
fn multiple_verbose_flags_accepted() {
    cmd().args(["-vv", "bands"]).assert().success();
}

#[test]
fn color_never_emits_plain_text() {
    cmd()
        .args(["--color", "never", "calc", "--height", "170", "--weight", "65"])
        .assert()
        .success()
        .stdout(predicate::str::diff("BMI: 22.49\nNormal\n"));
}

#[test]
fn color_always_accepted() {
    cmd()
        .args(["--color", "always", "calc", "--height", "170", "--weight", "65"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Normal"));
}
