use assert_cmd::Command;
use predicates::prelude::*;

fn recase() -> Command {
    Command::cargo_bin("recase").unwrap()
}

#[test]
fn converts_positional_values() {
    recase()
        .args(["--to", "kebab", "SCREEN_NAME"])
        .assert()
        .success()
        .stdout("screen-name\n");
}

#[test]
fn converts_multiple_values_in_order() {
    recase()
        .args(["--to", "dot", "XMLHttpRequest", "SCREEN_NAME"])
        .assert()
        .success()
        .stdout("xml.http.request\nscreen.name\n");
}

#[test]
fn reads_stdin_when_no_values_given() {
    recase()
        .args(["--to", "camel"])
        .write_stdin("_leading_underscore\nuserID\n")
        .assert()
        .success()
        .stdout("leadingUnderscore\nuserId\n");
}

#[test]
fn fails_without_any_input() {
    recase()
        .args(["--to", "camel"])
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No input provided"));
}

#[test]
fn json_output_reports_conversions() {
    recase()
        .args(["--to", "kebab", "-o", "json", "ID42"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"output\": \"id42\""))
        .stdout(predicate::str::contains("\"style\": \"kebab\""))
        .stdout(predicate::str::contains("\"failed\": 0"));
}

#[test]
fn json_input_accepts_strings() {
    recase()
        .args(["--json-input", "--to", "camel", "\"user_id\""])
        .assert()
        .success()
        .stdout("userId\n");
}

#[test]
fn json_input_rejects_non_strings() {
    recase()
        .args(["--json-input", "--to", "camel", "42"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Input must be a string"));
}

#[test]
fn no_fail_suppresses_error_exit_code() {
    recase()
        .args(["--json-input", "--no-fail", "--to", "camel", "null"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Input must be a string"));
}

#[test]
fn local_config_sets_default_style() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join(".recase.toml"), "style = \"kebab\"\n").unwrap();

    recase()
        .current_dir(dir.path())
        .arg("SCREEN_NAME")
        .assert()
        .success()
        .stdout("screen-name\n");
}

#[test]
fn cli_style_overrides_local_config() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join(".recase.toml"), "style = \"kebab\"\n").unwrap();

    recase()
        .current_dir(dir.path())
        .args(["--to", "dot", "SCREEN_NAME"])
        .assert()
        .success()
        .stdout("screen.name\n");
}
