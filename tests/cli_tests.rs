//! Integration tests for CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const MANIFEST: &str = r#"from: debian:buster
sharedPackages:
  - name: gosu
    version: "1.12"
versions:
  - dir: foo
    repo: example/foo
    tags: ["latest"]
    packages:
      - name: gosu
      - name: node
        version: "14.0"
        major: "14"
"#;

const DOCKERFILE: &str = "FOO\n##<autogenerated>##\nOLD\n##</autogenerated>##\nBAR";
const EXPECTED: &str = "FOO\n##<autogenerated>##\nFROM debian:buster\n\nENV GOSU_VERSION 1.12\n\nENV NODE_VERSION 14.0\nENV NODE_MAJOR 14\n##</autogenerated>##\nBAR";

fn cmd_in(dir: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("dockerfile-versions"));
    cmd.current_dir(dir);
    cmd
}

fn setup(manifest: &str, dockerfile: &str) -> TempDir {
    let tmp = TempDir::new().expect("tmp");
    fs::write(tmp.path().join("versions.yaml"), manifest).expect("write manifest");
    fs::create_dir(tmp.path().join("foo")).expect("mkdir foo");
    fs::write(tmp.path().join("foo/Dockerfile"), dockerfile).expect("write dockerfile");
    tmp
}

fn read_dockerfile(tmp: &TempDir) -> String {
    fs::read_to_string(tmp.path().join("foo/Dockerfile")).expect("read dockerfile")
}

#[test]
fn test_cli_version() {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("dockerfile-versions"));
    cmd.arg("--version");
    cmd.assert().success().stdout(predicate::str::contains("dockerfile-versions"));
}

#[test]
fn test_cli_help() {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("dockerfile-versions"));
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("versions.yaml"))
        .stdout(predicate::str::contains("--file"))
        .stdout(predicate::str::contains("--check"));
}

#[test]
fn test_updates_dockerfile_with_default_manifest() {
    let tmp = setup(MANIFEST, DOCKERFILE);
    cmd_in(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Parsed versions.yaml:"))
        .stdout(predicate::str::contains("debian:buster"))
        .stdout(predicate::str::contains("updated"));
    similar_asserts::assert_eq!(read_dockerfile(&tmp), EXPECTED);
}

#[test]
fn test_second_run_leaves_file_unchanged() {
    let tmp = setup(MANIFEST, DOCKERFILE);
    cmd_in(tmp.path()).assert().success();
    cmd_in(tmp.path()).assert().success().stdout(predicate::str::contains("unchanged"));
    assert_eq!(read_dockerfile(&tmp), EXPECTED);
}

#[test]
fn test_explicit_manifest_path() {
    let tmp = setup("from: x\n", DOCKERFILE);
    fs::write(tmp.path().join("other.yaml"), MANIFEST).expect("write other manifest");
    cmd_in(tmp.path()).args(["-f", "other.yaml"]).assert().success();
    assert_eq!(read_dockerfile(&tmp), EXPECTED);
}

#[test]
fn test_check_fails_on_stale_dockerfile_without_writing() {
    let tmp = setup(MANIFEST, DOCKERFILE);
    cmd_in(tmp.path())
        .arg("--check")
        .assert()
        .failure()
        .stdout(predicate::str::contains("stale"))
        .stderr(predicate::str::contains("out of date"));
    assert_eq!(read_dockerfile(&tmp), DOCKERFILE);
}

#[test]
fn test_check_passes_on_fresh_dockerfile() {
    let tmp = setup(MANIFEST, EXPECTED);
    cmd_in(tmp.path()).arg("--check").assert().success();
}

#[test]
fn test_missing_marker_fails_and_preserves_file() {
    let broken = "FOO\nOLD\n##</autogenerated>##\nBAR";
    let tmp = setup(MANIFEST, broken);
    cmd_in(tmp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to find <autogenerated> token"));
    assert_eq!(read_dockerfile(&tmp), broken);
}

#[test]
fn test_ambiguous_shared_package_fails() {
    let manifest = MANIFEST.replace(
        "sharedPackages:\n",
        "sharedPackages:\n  - name: gosu\n    version: \"1.11\"\n",
    );
    let tmp = setup(&manifest, DOCKERFILE);
    cmd_in(tmp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("multiple sharedPackages with the name: gosu"));
    assert_eq!(read_dockerfile(&tmp), DOCKERFILE);
}

#[test]
fn test_missing_manifest_fails() {
    let tmp = TempDir::new().expect("tmp");
    cmd_in(tmp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to access versions.yaml"));
}

#[test]
fn test_malformed_manifest_fails() {
    let tmp = setup("from: [\n", DOCKERFILE);
    cmd_in(tmp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to parse manifest versions.yaml"));
}

#[test]
fn test_empty_package_name_fails_and_preserves_file() {
    let manifest =
        MANIFEST.replace("      - name: gosu\n", "      - name: ''\n        version: \"1\"\n");
    let tmp = setup(&manifest, DOCKERFILE);
    cmd_in(tmp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("package name must not be empty"));
    assert_eq!(read_dockerfile(&tmp), DOCKERFILE);
}

#[test]
fn test_reversed_markers_fail_and_preserve_file() {
    let reversed = "FOO\n##</autogenerated>##\nOLD\n##<autogenerated>##\nBAR";
    let tmp = setup(MANIFEST, reversed);
    cmd_in(tmp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("end marker on line 2 precedes begin marker on line 4"));
    assert_eq!(read_dockerfile(&tmp), reversed);
}

#[test]
fn test_marker_token_in_manifest_value_fails() {
    let manifest = MANIFEST.replace("from: debian:buster", "from: 'img # </autogenerated> x'");
    let tmp = setup(&manifest, DOCKERFILE);
    cmd_in(tmp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("from contains an autogenerated marker token"));
    assert_eq!(read_dockerfile(&tmp), DOCKERFILE);
}
