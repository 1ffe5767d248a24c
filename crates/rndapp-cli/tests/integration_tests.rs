//! Integration tests for the rndapp binary.
//!
//! Nothing here spawns the scaffolding tools: generation is only exercised
//! through `--dry-run`.

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn rndapp() -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("rndapp");
    cmd.env("NO_COLOR", "1").env_remove("RUST_LOG");
    cmd
}

#[test]
fn help_flag() {
    rndapp()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("React Native dapp generator"))
        .stdout(predicate::str::contains("new"));
}

#[test]
fn version_flag() {
    rndapp()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn new_command_help_lists_flags() {
    rndapp()
        .args(["new", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--tooling"))
        .stdout(predicate::str::contains("--bundle-id"))
        .stdout(predicate::str::contains("--package-name"))
        .stdout(predicate::str::contains("--dry-run"));
}

#[test]
fn dry_run_lists_commands_in_order() {
    let temp = TempDir::new().unwrap();

    let assert = rndapp()
        .current_dir(temp.path())
        .args(["new", "demo", "--tooling", "truffle", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("npx create-react-native-app demo -t with-typescript"))
        .stdout(predicate::str::contains("expo eject"))
        .stdout(predicate::str::contains("npx truffle init"))
        .stdout(predicate::str::contains("npm i"))
        .stdout(predicate::str::contains("npx truffle compile"));

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let scaffold = stdout.find("create-react-native-app").unwrap();
    let eject = stdout.find("expo eject").unwrap();
    let install = stdout.find("npm i").unwrap();
    assert!(scaffold < eject && eject < install);

    assert!(!temp.path().join("demo").exists());
}

#[test]
fn dry_run_says_package_manager_is_decided_later() {
    let temp = TempDir::new().unwrap();

    rndapp()
        .current_dir(temp.path())
        .args(["new", "demo", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Package manager: npm"))
        .stdout(predicate::str::contains("chosen after scaffolding"))
        .stdout(predicate::str::contains("yarn.lock"));
}

#[test]
fn dry_run_without_tooling_skips_chain_steps() {
    let temp = TempDir::new().unwrap();

    rndapp()
        .current_dir(temp.path())
        .args(["new", "plain", "-t", "none", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("install-dependencies"))
        .stdout(predicate::str::contains("init-chain-tooling").not())
        .stdout(predicate::str::contains("materialize-example").not());
}

#[test]
fn dry_run_json_is_parseable() {
    let temp = TempDir::new().unwrap();

    let assert = rndapp()
        .current_dir(temp.path())
        .args(["--output-format", "json", "new", "demo", "-t", "hardhat", "--dry-run"])
        .assert()
        .success();

    let value: serde_json::Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();
    let steps = value["steps"].as_array().unwrap();
    assert_eq!(steps[0]["step"], "create-base-project");
    assert!(
        steps
            .iter()
            .any(|s| s["command"]["program"] == "npx" && s["command"]["args"][0] == "hardhat")
    );
}

#[test]
fn existing_directory_is_refused() {
    let temp = TempDir::new().unwrap();
    fs::create_dir(temp.path().join("taken")).unwrap();

    rndapp()
        .current_dir(temp.path())
        .args(["new", "taken", "--yes"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn completions_bash() {
    rndapp()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("rndapp"));
}

#[test]
fn init_writes_config_then_config_get_reads_it() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("nested").join("rndapp.toml");
    let path_arg = path.to_str().unwrap();

    rndapp()
        .args(["--config", path_arg, "init"])
        .assert()
        .success();
    assert!(path.exists());

    fs::write(
        &path,
        "[defaults]\ntooling = \"hardhat\"\nbundle_prefix = \"io.acme\"\n",
    )
    .unwrap();

    rndapp()
        .args(["--config", path_arg, "config", "get", "defaults.tooling"])
        .assert()
        .success()
        .stdout(predicate::str::diff("hardhat\n"));
}

#[test]
fn config_defaults_drive_dry_run() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("rndapp.toml");
    fs::write(&path, "[defaults]\ntooling = \"hardhat\"\n").unwrap();

    rndapp()
        .current_dir(temp.path())
        .args(["--config", path.to_str().unwrap(), "new", "demo", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("npx hardhat compile"));
}

#[test]
fn environment_overrides_config() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("rndapp.toml");
    fs::write(&path, "[generator]\nrpc_url = \"http://10.0.2.2:8545\"\n").unwrap();

    rndapp()
        .env("RNDAPP__GENERATOR__RPC_URL", "http://192.168.1.10:8545")
        .args(["--config", path.to_str().unwrap(), "config", "get", "generator.rpc_url"])
        .assert()
        .success()
        .stdout(predicate::str::diff("http://192.168.1.10:8545\n"));
}

#[test]
fn config_path_honours_flag() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("rndapp.toml");
    fs::write(&path, "").unwrap();

    rndapp()
        .args(["--config", path.to_str().unwrap(), "config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("rndapp.toml"));
}
