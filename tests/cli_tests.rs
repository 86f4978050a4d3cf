use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{fill_entry, rxf, temp_path, write_script};

#[test]
fn test_presets_lists_catalog() {
    rxf()
        .arg("presets")
        .assert()
        .success()
        .stdout(contains("2 Days"))
        .stdout(contains("1 Week"))
        .stdout(contains("6 Months"))
        .stdout(contains("Custom: 1–999"));
}

#[test]
fn test_presets_json() {
    let output = rxf().args(["presets", "--json"]).output().expect("run presets");
    assert!(output.status.success());
    let rows: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json");
    assert_eq!(rows.as_array().map(|a| a.len()), Some(7));
    assert_eq!(rows[2]["label"], "1 Week");
    assert_eq!(rows[2]["unit"], "weeks");
}

#[test]
fn test_format_singular_and_plural() {
    rxf()
        .args(["format", "1", "weeks"])
        .assert()
        .success()
        .stdout(contains("1 Week").and(contains("Weeks").not()));

    rxf()
        .args(["format", "3", "month"])
        .assert()
        .success()
        .stdout(contains("3 Months"));
}

#[test]
fn test_format_out_of_range_fails() {
    rxf()
        .args(["format", "1000", "days"])
        .assert()
        .failure()
        .stderr(contains("Value must be less than 1000"));

    rxf()
        .args(["format", "0", "days"])
        .assert()
        .failure()
        .stderr(contains("Value must be at least 1"));

    rxf()
        .args(["format", "5", "years"])
        .assert()
        .failure()
        .stderr(contains("Invalid duration unit"));
}

#[test]
fn test_options_lists_catalogs() {
    rxf()
        .arg("options")
        .assert()
        .success()
        .stdout(contains("Capsule"))
        .stdout(contains("mcg"))
        .stdout(contains("Anytime of the day"))
        .stdout(contains("Every 12 hours"));
}

#[test]
fn test_form_without_input_fails_validation() {
    rxf()
        .arg("form")
        .write_stdin("")
        .assert()
        .failure()
        .stdout(contains("Medicine name is required"))
        .stderr(contains("Validation failed: 6 field(s)"));
}

#[test]
fn test_form_complete_script_succeeds() {
    let script = write_script("form_complete", &fill_entry(1, "Amoxicillin"));
    rxf()
        .args(["form", "--script", &script])
        .assert()
        .success()
        .stdout(contains("Amoxicillin"))
        .stdout(contains("1 Week"))
        .stdout(contains("1 medication(s) ready to submit"));
}

#[test]
fn test_form_custom_duration_via_stdin() {
    let mut script = fill_entry(1, "Omeprazole");
    script.push_str("duration 1 open\nduration 1 custom\nduration 1 input 45\nduration 1 unit days\nduration 1 apply\n");
    rxf()
        .arg("form")
        .write_stdin(script)
        .assert()
        .success()
        .stdout(contains("45 Days"));
}

#[test]
fn test_form_out_of_range_keeps_preset() {
    let mut script = fill_entry(1, "Omeprazole");
    script.push_str("duration 1 open\nduration 1 custom\nduration 1 input 5000\nduration 1 apply\nshow\n");
    rxf()
        .arg("form")
        .write_stdin(script)
        .assert()
        .success()
        .stdout(contains("Value must be less than 1000"))
        .stdout(contains("1 Week"));
}

#[test]
fn test_form_second_entry_reports_its_errors() {
    let mut script = fill_entry(1, "Amoxicillin");
    script.push_str("add\nset 2 name Cetirizine\n");
    rxf()
        .arg("form")
        .write_stdin(script)
        .assert()
        .failure()
        .stdout(contains("Medication #2"))
        .stdout(contains("Dose is required"))
        .stderr(contains("Validation failed: 5 field(s)"));
}

#[test]
fn test_form_script_error_reports_line() {
    rxf()
        .arg("form")
        .write_stdin("add\nfrobnicate\n")
        .assert()
        .failure()
        .stderr(contains("line 2"));
}

#[test]
fn test_form_export_json() {
    let out = temp_path("form_export", "json");
    let script = write_script("form_export", &fill_entry(1, "Amoxicillin"));
    rxf()
        .args(["form", "--script", &script, "--export", &out, "--format", "json"])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("export written");
    let json: serde_json::Value = serde_json::from_str(&content).expect("json");
    assert_eq!(json["entries"][0]["medicineName"], "Amoxicillin");
    assert_eq!(json["entries"][0]["duration"]["value"], 1);
    assert_eq!(json["entries"][0]["duration"]["unit"], "weeks");
    assert_eq!(json["errors"].as_array().map(|a| a.len()), Some(0));
}

#[test]
fn test_form_export_csv_includes_errors_and_refuses_overwrite() {
    let out = temp_path("form_export", "csv");
    rxf()
        .args(["form", "--export", &out, "--format", "csv"])
        .write_stdin("set 1 name Aspirin\n")
        .assert()
        .failure();

    let content = fs::read_to_string(&out).expect("export written");
    assert!(content.starts_with("id,medicine_type,medicine_name"));
    assert!(content.contains("Aspirin"));
    assert!(content.contains("Dose is required; Unit is required"));

    rxf()
        .args(["form", "--export", &out, "--format", "csv"])
        .write_stdin("")
        .assert()
        .failure()
        .stderr(contains("already exists"));
}

#[test]
fn test_narrow_width_collapses_other_entries() {
    rxf()
        .args(["--width", "40", "form"])
        .write_stdin("set 1 name Alpha\nadd\nset name Beta\nshow\n")
        .assert()
        .failure()
        .stdout(contains("#1 Alpha"))
        .stdout(contains("Medication #2"));
}

#[test]
fn test_prescribe_renders_dashboard_and_logs() {
    rxf()
        .arg("prescribe")
        .write_stdin("set name Metformin\nset timing before-lunch\nduration open\nduration preset 2\nsubmit\n")
        .assert()
        .success()
        .stdout(contains("Pratik Shroff"))
        .stdout(contains("Prescribed: Dec 28, 2025"))
        .stdout(contains("\"medicationName\":\"Metformin\""))
        .stdout(contains("5 Days"))
        .stdout(contains("1 medication(s) logged"));
}

#[test]
fn test_init_and_check_config() {
    let conf = temp_path("init_check", "conf");
    cargo_cmd()
        .args(["--config", &conf, "init"])
        .assert()
        .success();
    assert!(fs::metadata(&conf).is_ok());

    cargo_cmd()
        .args(["--config", &conf, "config", "--check"])
        .assert()
        .success()
        .stdout(contains("Configuration is complete"));

    fs::write(&conf, "narrow_breakpoint: 120\n").expect("rewrite config");
    cargo_cmd()
        .args(["--config", &conf, "config", "--check", "--print"])
        .assert()
        .success()
        .stdout(contains("Missing fields"))
        .stdout(contains("narrow_breakpoint: 120"))
        .stdout(contains("default_custom_unit: weeks"));
}

#[test]
fn test_invalid_config_is_reported() {
    let conf = temp_path("bad_value", "conf");
    fs::write(&conf, "default_custom_value: 0\n").expect("write config");
    cargo_cmd()
        .args(["--config", &conf, "presets"])
        .assert()
        .failure()
        .stderr(contains("Configuration error"));
}

#[test]
fn test_config_seed_changes_custom_default() {
    let conf = temp_path("seed", "conf");
    fs::write(&conf, "default_custom_value: 10\ndefault_custom_unit: days\n").expect("write config");
    cargo_cmd()
        .args(["--config", &conf, "form"])
        .write_stdin(format!(
            "{}duration 1 open\nduration 1 custom\nduration 1 apply\n",
            fill_entry(1, "Zinc")
        ))
        .assert()
        .success()
        .stdout(contains("10 Days"));
}

/// Binary without the default `--config` override.
fn cargo_cmd() -> assert_cmd::Command {
    let mut cmd = assert_cmd::cargo_bin_cmd!("rxform");
    cmd.env_remove("RXFORM_LOG");
    cmd
}
