use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn help_lists_all_commands() {
    Command::cargo_bin("lan")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("create"))
        .stdout(predicate::str::contains("dev"))
        .stdout(predicate::str::contains("build"));
}

#[test]
fn dev_without_a_project_config_fails() {
    let dir = tempfile::tempdir().unwrap();
    Command::cargo_bin("lan")
        .unwrap()
        .arg("dev")
        .current_dir(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("lan create"));
}

#[test]
fn build_rejects_a_malformed_config() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("lan.config.json"), "{not json").unwrap();
    Command::cargo_bin("lan")
        .unwrap()
        .arg("build")
        .current_dir(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}

#[test]
fn build_rejects_inconsistent_build_tools() {
    let dir = tempfile::tempdir().unwrap();
    let config = r#"{
        "type": "spa",
        "frame": "react",
        "buildTools": ["rollup"],
        "useTs": true,
        "packageTool": "npm"
    }"#;
    std::fs::write(dir.path().join("lan.config.json"), config).unwrap();
    Command::cargo_bin("lan")
        .unwrap()
        .arg("build")
        .current_dir(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("not valid"));
}
