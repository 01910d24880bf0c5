//! Snapshot tests using insta.
//!
//! Output of path-independent runs is pinned inline so the rendering
//! format (key order, indentation) is visible in review.

use assert_cmd::cargo::cargo_bin_cmd;

use crate::integration::fixtures::{environment_hierarchy, Hierarchy};

fn run(h: &Hierarchy, args: &[&str]) -> String {
    let output = cargo_bin_cmd!("hcm")
        .env("XDG_CONFIG_HOME", h.outside())
        .env_remove("HCM_LOG")
        .args(args)
        .output()
        .expect("Failed to run hcm");
    assert!(output.status.success());
    String::from_utf8(output.stdout).expect("stdout is UTF-8")
}

#[test]
fn test_snapshot_json_merge() {
    let h = environment_hierarchy();
    let base = h.path().to_str().unwrap().to_string();
    let target = h.dir("env/prod/region/eu");

    let stdout = run(&h, &[&base, target.to_str().unwrap()]);

    insta::assert_snapshot!(stdout, @r#"
    {
      "database": {
        "host": "eu.prod.db.example.com",
        "region": "eu-west-1"
      },
      "name": "eu_production_config",
      "settings": {
        "retries": 3,
        "ssl": true,
        "timeout": 90
      }
    }
    "#);
}

#[test]
fn test_snapshot_yaml_merge() {
    let h = environment_hierarchy();
    let base = h.path().to_str().unwrap().to_string();
    let target = h.dir("env/prod/region/eu");

    let stdout = run(&h, &[&base, target.to_str().unwrap(), "--output", "yaml"]);

    insta::assert_snapshot!(stdout, @r"
    database:
      host: eu.prod.db.example.com
      region: eu-west-1
    name: eu_production_config
    settings:
      retries: 3
      ssl: true
      timeout: 90
    ");
}

#[test]
fn test_snapshot_sequence_replacement() {
    let h = Hierarchy::new();
    h.config("", "ports: [80, 443]\nservice: {name: web}\n");
    h.config("edge", "ports: [8443]\nservice: {replicas: 2}\n");
    let base = h.path().to_str().unwrap().to_string();
    let target = h.dir("edge");

    let stdout = run(&h, &[&base, target.to_str().unwrap()]);

    insta::assert_snapshot!(stdout, @r#"
    {
      "ports": [
        8443
      ],
      "service": {
        "name": "web",
        "replicas": 2
      }
    }
    "#);
}

#[test]
fn test_snapshot_empty_hierarchy() {
    let h = Hierarchy::new();
    let base = h.path().to_str().unwrap().to_string();

    let stdout = run(&h, &[&base]);

    insta::assert_snapshot!(stdout, @"{}");
}
