use assert_cmd::Command;
use predicates::str::contains;

const BIN: &str = "manifest-transform";

const MANIFEST: &str = r#"
name: demo
releases:
- name: routing
  version: "0.1"
instance_groups:
- name: router
  instances: 2
  lifecycle: service
  jobs:
  - name: gorouter
    release: routing
  networks:
  - name: default
    static_ips:
    - 10.0.0.10
- name: smoke-tests
  lifecycle: errand
  networks:
  - name: default
tags:
  owner: platform
"#;

fn cmd() -> Command {
    Command::cargo_bin(BIN).expect("binary should build")
}

#[test]
fn change_az_rewrites_the_az_list() {
    let assert = cmd()
        .args(["change-az", "-instance-group", "router", "-az", "az1,az2"])
        .write_stdin(MANIFEST)
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let manifest: serde_yaml::Value = serde_yaml::from_str(&stdout).unwrap();
    let azs = &manifest["instance_groups"][0]["azs"];
    assert_eq!(azs[0].as_str(), Some("az1"));
    assert_eq!(azs[1].as_str(), Some("az2"));
}

#[test]
fn change_az_on_a_missing_group_fails_with_a_lookup_error() {
    cmd()
        .args(["change-az", "-instance-group", "uaa", "-az", "az1"])
        .write_stdin(MANIFEST)
        .assert()
        .failure()
        .stderr(contains("couldn't find instance group uaa"));
}

#[test]
fn change_network_moves_every_service_group() {
    let assert = cmd()
        .args(["change-network", "-lifecycle", "service", "-network", "dmz"])
        .write_stdin(MANIFEST)
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let manifest: serde_yaml::Value = serde_yaml::from_str(&stdout).unwrap();
    assert_eq!(
        manifest["instance_groups"][0]["networks"][0]["name"].as_str(),
        Some("dmz")
    );
    assert_eq!(
        manifest["instance_groups"][1]["networks"][0]["name"].as_str(),
        Some("default")
    );
}

#[test]
fn change_network_rejects_both_selectors() {
    cmd()
        .args([
            "change-network",
            "-instance-group",
            "router",
            "-lifecycle",
            "service",
            "-network",
            "dmz",
        ])
        .write_stdin(MANIFEST)
        .assert()
        .failure()
        .stderr(contains("either -lifecycle or -instance-group"));
}

#[test]
fn clone_adds_an_independent_copy() {
    let assert = cmd()
        .args(["clone", "-instance-group", "router", "-clone", "router-copy"])
        .write_stdin(MANIFEST)
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let manifest: serde_yaml::Value = serde_yaml::from_str(&stdout).unwrap();
    let groups = manifest["instance_groups"].as_sequence().unwrap();
    assert_eq!(groups.len(), 3);
    assert_eq!(groups[2]["name"].as_str(), Some("router-copy"));
    assert_eq!(groups[2]["jobs"][0]["name"].as_str(), Some("gorouter"));
}

#[test]
fn scale_rejects_a_negative_count() {
    cmd()
        .args(["scale", "-instance-group", "router", "-instances", "-2"])
        .write_stdin(MANIFEST)
        .assert()
        .failure()
        .stderr(contains("-instances"));
}

#[test]
fn scale_accepts_zero() {
    let assert = cmd()
        .args(["scale", "-instance-group", "router", "-instances", "0"])
        .write_stdin(MANIFEST)
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let manifest: serde_yaml::Value = serde_yaml::from_str(&stdout).unwrap();
    assert_eq!(manifest["instance_groups"][0]["instances"].as_u64(), Some(0));
}

#[test]
fn add_tags_upserts_into_the_tag_map() {
    let assert = cmd()
        .args(["add-tags", "owner=networking", "env=staging"])
        .write_stdin(MANIFEST)
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let manifest: serde_yaml::Value = serde_yaml::from_str(&stdout).unwrap();
    assert_eq!(manifest["tags"]["owner"].as_str(), Some("networking"));
    assert_eq!(manifest["tags"]["env"].as_str(), Some("staging"));
}

#[test]
fn add_vm_extension_appends_in_order() {
    let assert = cmd()
        .args([
            "add-vm-extension",
            "-instance-group",
            "router",
            "-name",
            "public-lbs1,public-lbs2",
        ])
        .write_stdin(MANIFEST)
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let manifest: serde_yaml::Value = serde_yaml::from_str(&stdout).unwrap();
    let extensions = &manifest["instance_groups"][0]["vm_extensions"];
    assert_eq!(extensions[0].as_str(), Some("public-lbs1"));
    assert_eq!(extensions[1].as_str(), Some("public-lbs2"));
}

#[test]
fn unknown_transforms_list_the_known_ones() {
    cmd()
        .arg("explode")
        .write_stdin(MANIFEST)
        .assert()
        .failure()
        .stderr(contains("unknown transform"))
        .stderr(contains("Transforms:"))
        .stderr(contains("change-network"))
        .stderr(contains("scale"));
}

#[test]
fn no_arguments_prints_usage() {
    cmd()
        .assert()
        .failure()
        .stderr(contains("Usage:"))
        .stderr(contains("Transforms:"));
}

#[test]
fn unmodeled_keys_survive_the_round_trip() {
    let assert = cmd()
        .args(["add-tags", "env=staging"])
        .write_stdin(MANIFEST)
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert!(stdout.contains("releases:"));
    assert!(stdout.contains("name: routing"));
}
