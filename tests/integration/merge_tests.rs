//! Integration tests for resolving and merging hierarchies.

use hcm::{
    merge_hierarchical_configs, merge_hierarchical_configs_with, merge_hierarchy, parse_document,
    resolve_chain, Chain, ConfigDocument, MergeErrorKind, MergeOptions, PathError,
    SourcePatterns,
};
use serde_json::json;

use crate::integration::fixtures::{environment_hierarchy, Hierarchy};

fn to_json(doc: &ConfigDocument) -> serde_json::Value {
    serde_json::to_value(doc).expect("Failed to convert document")
}

fn doc(yaml: &str) -> ConfigDocument {
    parse_document(yaml.as_bytes()).expect("Failed to parse YAML")
}

// ==================== Full Merge ====================

#[test]
fn test_environment_merge() {
    let h = environment_hierarchy();
    let target = h.dir("env/prod/region/eu");

    let result = merge_hierarchical_configs(h.path(), &target).unwrap();

    assert!(result.errors.is_empty());
    assert_eq!(
        to_json(&result.document),
        json!({
            "name": "eu_production_config",
            "settings": {"timeout": 90, "retries": 3, "ssl": true},
            "database": {"host": "eu.prod.db.example.com", "region": "eu-west-1"}
        })
    );
}

#[test]
fn test_intermediate_target_stops_at_target() {
    let h = environment_hierarchy();
    let target = h.dir("env/prod");

    let result = merge_hierarchical_configs(h.path(), &target).unwrap();

    assert_eq!(
        to_json(&result.document),
        json!({
            "name": "production_config",
            "settings": {"timeout": 60, "retries": 3, "ssl": true},
            "database": {"host": "prod.db.example.com"}
        })
    );
}

#[test]
fn test_base_as_target() {
    let h = environment_hierarchy();

    let result = merge_hierarchical_configs(h.path(), h.path()).unwrap();

    assert_eq!(
        to_json(&result.document),
        json!({"name": "base_config", "settings": {"timeout": 30, "retries": 3}})
    );
}

#[test]
fn test_sibling_branches_do_not_contribute() {
    let h = Hierarchy::new();
    h.config("", "base: config\n");
    h.config("a", "a: config\n");
    h.config("a/a/b", "target: config\n");
    h.config("a/c/b", "excluded: config\n");

    let result = merge_hierarchical_configs(h.path(), &h.dir("a/a/b")).unwrap();

    assert_eq!(
        result.document,
        doc("base: config\na: config\ntarget: config")
    );
    assert!(result.document.get("excluded").is_none());
}

// ==================== Merge Properties ====================

#[test]
fn test_deeper_level_overrides_scalar() {
    let h = Hierarchy::new();
    h.config("", "k: a\n");
    h.config("deep", "k: b\n");

    let result = merge_hierarchical_configs(h.path(), &h.dir("deep")).unwrap();

    assert_eq!(result.document.get("k").and_then(|d| d.as_str()), Some("b"));
}

#[test]
fn test_recursive_merge_of_nested_mappings() {
    let h = Hierarchy::new();
    h.config("", "x: {p: 1, q: 2}\n");
    h.config("deep", "x: {q: 3, r: 4}\n");

    let result = merge_hierarchical_configs(h.path(), &h.dir("deep")).unwrap();

    assert_eq!(to_json(&result.document), json!({"x": {"p": 1, "q": 3, "r": 4}}));
}

#[test]
fn test_sequences_replace_wholesale() {
    let h = Hierarchy::new();
    h.config("", "list: [1, 2, 3]\n");
    h.config("deep", "list: [9]\n");

    let result = merge_hierarchical_configs(h.path(), &h.dir("deep")).unwrap();

    assert_eq!(to_json(&result.document), json!({"list": [9]}));
}

#[test]
fn test_absent_middle_level_records_nothing() {
    let h = Hierarchy::new();
    h.config("", "a: 1\nb: 1\n");
    h.dir("mid");
    h.config("mid/leaf", "b: 2\n");

    let result = merge_hierarchical_configs(h.path(), &h.dir("mid/leaf")).unwrap();

    assert!(result.errors.is_empty());
    assert_eq!(to_json(&result.document), json!({"a": 1, "b": 2}));
}

#[test]
fn test_malformed_middle_level_partial_success() {
    let h = Hierarchy::new();
    h.config("", "a: 1\n");
    let bad = h.config("mid", "invalid: yaml: content: [\n");
    h.config("mid/leaf", "b: 2\n");

    let result = merge_hierarchical_configs(h.path(), &h.dir("mid/leaf")).unwrap();

    assert_eq!(to_json(&result.document), json!({"a": 1, "b": 2}));
    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.errors[0].location, bad);
    assert_eq!(result.errors[0].kind, MergeErrorKind::Parse);
    assert!(result.errors[0].to_string().contains("failed to parse"));
}

#[test]
fn test_errors_are_ordered_root_to_leaf() {
    let h = Hierarchy::new();
    let first = h.config("", "[\n");
    let second = h.config("a", "{\n");
    let third = h.config("a/b", "x: [\n");

    let result = merge_hierarchical_configs(h.path(), &h.dir("a/b")).unwrap();

    let locations: Vec<_> = result.errors.iter().map(|e| e.location.clone()).collect();
    assert_eq!(locations, vec![first, second, third]);
    assert_eq!(result.document, ConfigDocument::empty());
}

#[test]
fn test_identity_when_no_level_has_config() {
    let h = Hierarchy::new();

    let result = merge_hierarchical_configs(h.path(), &h.dir("a/b/c")).unwrap();

    assert_eq!(result.document, ConfigDocument::empty());
    assert!(result.errors.is_empty());

    let empty = merge_hierarchy(&Chain::default(), &MergeOptions::default());
    assert_eq!(empty.document, ConfigDocument::empty());
    assert!(empty.errors.is_empty());
}

#[test]
fn test_merge_twice_is_identical() {
    let h = environment_hierarchy();
    h.config("env", "broken: [\n");
    let target = h.dir("env/prod/region/eu");

    let first = merge_hierarchical_configs(h.path(), &target).unwrap();
    let second = merge_hierarchical_configs(h.path(), &target).unwrap();

    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first.document).unwrap(),
        serde_json::to_string(&second.document).unwrap()
    );
}

// ==================== Chain Errors ====================

#[test]
fn test_target_outside_base() {
    let h = Hierarchy::new();

    let err = merge_hierarchical_configs(h.path(), &h.outside()).unwrap_err();

    assert!(matches!(err, PathError::NotADescendant { .. }));
    assert!(err.to_string().contains("is not within base directory"));
}

#[test]
fn test_missing_target() {
    let h = Hierarchy::new();

    let err = merge_hierarchical_configs(h.path(), &h.path().join("nope")).unwrap_err();

    assert!(matches!(err, PathError::NotFound { .. }));
}

#[test]
fn test_chain_single_element_for_base() {
    let h = Hierarchy::new();

    let chain = resolve_chain(h.path(), h.path()).unwrap();

    assert_eq!(chain.levels(), &[h.path().to_path_buf()]);
}

// ==================== Multiple Sources Per Level ====================

#[test]
fn test_collision_between_files_of_one_level() {
    let h = Hierarchy::new();
    h.file("level1", "config1.yaml", "key: value1\n");
    h.file("level1", "config2.yaml", "key: value2\n");
    h.file("level1/level2", "config.yaml", "key: value3\n");

    let options = MergeOptions {
        patterns: SourcePatterns::new(["*.yaml"]).unwrap(),
        ..MergeOptions::default()
    };
    let result =
        merge_hierarchical_configs_with(h.path(), &h.dir("level1/level2"), &options).unwrap();

    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.errors[0].kind, MergeErrorKind::Collision);
    assert!(result.errors[0].message.contains("key collision"));
    assert_eq!(result.document.get("key").and_then(|d| d.as_str()), Some("value3"));
}

#[test]
fn test_default_pattern_ignores_other_yaml_files() {
    let h = Hierarchy::new();
    h.config("", "picked: true\n");
    h.file("", "notes.yaml", "ignored: true\n");
    h.file("", "config.yml", "also_ignored: true\n");

    let result = merge_hierarchical_configs(h.path(), h.path()).unwrap();

    assert_eq!(to_json(&result.document), json!({"picked": true}));
}

#[test]
fn test_yml_and_yaml_patterns() {
    let h = Hierarchy::new();
    h.file("", "config.yml", "a: 1\n");
    h.file("team", "config.yaml", "b: 2\n");

    let options = MergeOptions {
        patterns: SourcePatterns::new(["config.yaml", "config.yml"]).unwrap(),
        ..MergeOptions::default()
    };
    let result = merge_hierarchical_configs_with(h.path(), &h.dir("team"), &options).unwrap();

    assert!(result.errors.is_empty());
    assert_eq!(to_json(&result.document), json!({"a": 1, "b": 2}));
}
