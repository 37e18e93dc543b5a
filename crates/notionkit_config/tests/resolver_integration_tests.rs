//! Integration tests for target resolution against config files on disk.

use std::fs;

use notionkit_config::{ConfigError, TargetResolver, CONFIG_FILE_NAME};
use tempfile::tempdir;

fn write_config(dir: &std::path::Path, content: &str) {
    fs::write(dir.join(CONFIG_FILE_NAME), content).unwrap();
}

#[test]
fn test_resolve_friendly_name() {
    let dir = tempdir().unwrap();
    write_config(dir.path(), r#"{"targets": {"project-db": {"id": "xyz"}}}"#);

    let resolver = TargetResolver::in_root(dir.path());
    assert_eq!(resolver.resolve("project-db").unwrap(), "xyz");
}

#[test]
fn test_resolve_raw_id_ignores_table() {
    let dir = tempdir().unwrap();
    let raw = "a1b2c3d4-e5f6-7890-abcd-ef1234567890";
    write_config(
        dir.path(),
        &format!(r#"{{"targets": {{"{raw}": {{"id": "other"}}}}}}"#),
    );

    let resolver = TargetResolver::in_root(dir.path());
    assert_eq!(resolver.resolve(raw).unwrap(), raw);
}

#[test]
fn test_resolve_unknown_with_empty_targets() {
    let dir = tempdir().unwrap();
    write_config(dir.path(), r#"{"targets": {}}"#);

    let resolver = TargetResolver::in_root(dir.path());
    match resolver.resolve("missing-target") {
        Err(ConfigError::UnknownTarget { name, available }) => {
            assert_eq!(name, "missing-target");
            assert!(available.is_empty());
        }
        other => panic!("expected UnknownTarget, got {:?}", other),
    }
}

#[test]
fn test_resolve_without_config_file() {
    let dir = tempdir().unwrap();

    let resolver = TargetResolver::in_root(dir.path());
    let err = resolver.resolve("project-db").unwrap_err();
    assert!(matches!(err, ConfigError::ConfigNotFound(_)));
    assert!(err.to_string().contains(CONFIG_FILE_NAME));
}

#[test]
fn test_resolve_rereads_config() {
    let dir = tempdir().unwrap();
    write_config(dir.path(), r#"{"targets": {"inbox": {"id": "first"}}}"#);
    let resolver = TargetResolver::in_root(dir.path());
    assert_eq!(resolver.resolve("inbox").unwrap(), "first");

    write_config(dir.path(), r#"{"targets": {"inbox": {"id": "second"}}}"#);
    assert_eq!(resolver.resolve("inbox").unwrap(), "second");
}

#[test]
fn test_malformed_config() {
    let dir = tempdir().unwrap();
    write_config(dir.path(), "{ not json");

    let resolver = TargetResolver::in_root(dir.path());
    assert!(matches!(
        resolver.resolve("inbox"),
        Err(ConfigError::Json(_))
    ));
}

#[test]
fn test_list_targets_in_document_order() {
    let dir = tempdir().unwrap();
    write_config(
        dir.path(),
        r#"{"targets": {
            "zeta": {"id": "z", "type": "page"},
            "alpha": {"id": "a", "type": "database"}
        }}"#,
    );

    let resolver = TargetResolver::in_root(dir.path());
    let targets = resolver.list().unwrap();
    let names: Vec<&str> = targets.keys().map(String::as_str).collect();
    assert_eq!(names, vec!["zeta", "alpha"]);
    assert_eq!(targets["alpha"].kind(), Some("database"));
}
