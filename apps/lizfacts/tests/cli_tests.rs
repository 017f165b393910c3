//! Integration tests for the lizfacts fact executable.
//!
//! Uses tempfile for state-file fixtures.

// Allow unwrap and panic in tests - these are standard for test code
#![allow(clippy::unwrap_used, clippy::panic)]

use lizfacts::cli::{build_registry, cmd_collect, render_json, render_text};
use lizfacts_core::{FACT_NAME, FactResult, Personality};
use std::collections::BTreeMap;
use std::path::PathBuf;
use tempfile::TempDir;

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Create a temporary directory for tests.
fn create_temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp dir")
}

/// Write a state file with the given content.
fn write_state_file(dir: &TempDir, content: &[u8]) -> PathBuf {
    let path = dir.path().join("mfsmaster_personality");
    std::fs::write(&path, content).unwrap();
    path
}

/// One published personality fact, as the registry would return it.
fn one_fact(personality: Personality) -> BTreeMap<String, Personality> {
    let mut facts = BTreeMap::new();
    facts.insert(FACT_NAME.to_string(), personality);
    facts
}

// =============================================================================
// REGISTRY WIRING TESTS
// =============================================================================

#[test]
fn test_registry_contains_the_personality_fact() {
    let registry = build_registry(None);
    assert!(!registry.is_empty());
    assert_eq!(registry.len(), 1);
}

#[test]
fn test_registry_collects_from_override_path() {
    let temp = create_temp_dir();
    let path = write_state_file(&temp, b"MASTER\n");

    let registry = build_registry(Some(&path));
    assert_eq!(
        registry.collect_named(FACT_NAME),
        FactResult::Value(Personality::Master)
    );
}

#[test]
fn test_registry_unknown_name_is_absent() {
    let registry = build_registry(None);
    assert_eq!(registry.collect_named("no_such_fact"), FactResult::Absent);
}

// =============================================================================
// RENDERING TESTS
// =============================================================================

#[test]
fn test_render_text_single_fact() {
    let facts = one_fact(Personality::Master);
    assert_eq!(render_text(&facts), "lizardfs_personality=MASTER\n");
}

#[test]
fn test_render_text_empty_prints_nothing() {
    // Printing nothing publishes nothing: the host sees no fact at all.
    assert_eq!(render_text(&BTreeMap::new()), "");
}

#[test]
fn test_render_json_is_an_object_with_the_token() {
    let facts = one_fact(Personality::Shadow);
    let rendered = render_json(&facts).unwrap();

    let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();
    assert_eq!(value[FACT_NAME], "SHADOW");
}

#[test]
fn test_render_json_empty_is_an_empty_object() {
    let rendered = render_json(&BTreeMap::new()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();
    assert_eq!(value, serde_json::json!({}));
}

#[test]
fn test_published_token_parses_back_into_the_domain() {
    let facts = one_fact(Personality::Shadow);
    let rendered = render_json(&facts).unwrap();

    let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();
    let token = value[FACT_NAME].as_str().unwrap();
    assert_eq!(Personality::from_token(token), Some(Personality::Shadow));

    // And the serde mapping itself round-trips.
    let parsed: Personality = serde_json::from_str("\"MASTER\"").unwrap();
    assert_eq!(parsed, Personality::Master);
}

// =============================================================================
// COLLECT COMMAND TESTS
// =============================================================================

#[test]
fn test_collect_with_valid_state_file() {
    let temp = create_temp_dir();
    let path = write_state_file(&temp, b"MASTER\n");

    let result = cmd_collect(Some(&path), false);
    assert!(result.is_ok());
}

#[test]
fn test_collect_succeeds_when_state_file_missing() {
    // A missing state file is a quiet run, never a failing one.
    let temp = create_temp_dir();
    let path = temp.path().join("does-not-exist");

    let result = cmd_collect(Some(&path), false);
    assert!(result.is_ok());
}

#[test]
fn test_collect_succeeds_with_empty_state_file() {
    let temp = create_temp_dir();
    let path = write_state_file(&temp, b"");

    let result = cmd_collect(Some(&path), false);
    assert!(result.is_ok());
}

#[test]
fn test_collect_succeeds_with_unrecognized_content() {
    let temp = create_temp_dir();
    let path = write_state_file(&temp, b"definitely not a role\n");

    let result = cmd_collect(Some(&path), false);
    assert!(result.is_ok());
}

#[test]
fn test_collect_json_mode() {
    let temp = create_temp_dir();
    let path = write_state_file(&temp, b"SHADOW\n");

    let result = cmd_collect(Some(&path), true);
    assert!(result.is_ok());
}

// =============================================================================
// FACT SEMANTICS TESTS
// =============================================================================

#[test]
fn test_every_member_of_the_set_publishes() {
    let temp = create_temp_dir();
    for personality in Personality::ALL {
        let content = format!("{personality}\n");
        let path = write_state_file(&temp, content.as_bytes());

        let facts = build_registry(Some(&path)).collect_all();
        assert_eq!(facts, one_fact(personality));
    }
}

#[test]
fn test_unrecognized_token_publishes_nothing() {
    let temp = create_temp_dir();
    let path = write_state_file(&temp, b"FOO\n");

    let facts = build_registry(Some(&path)).collect_all();
    assert!(facts.is_empty());
}

#[test]
fn test_case_and_whitespace_are_significant() {
    let temp = create_temp_dir();
    for content in [b"master\n".as_slice(), b"MASTER \n".as_slice()] {
        let path = write_state_file(&temp, content);
        let facts = build_registry(Some(&path)).collect_all();
        assert!(facts.is_empty());
    }
}

#[test]
fn test_multiline_state_file_uses_first_line() {
    let temp = create_temp_dir();
    let path = write_state_file(&temp, b"MASTER\nSHADOW\n");

    let facts = build_registry(Some(&path)).collect_all();
    assert_eq!(facts, one_fact(Personality::Master));
}

#[test]
fn test_empty_state_file_publishes_nothing() {
    let temp = create_temp_dir();
    let path = write_state_file(&temp, b"");

    let facts = build_registry(Some(&path)).collect_all();
    assert!(facts.is_empty());
}

#[test]
fn test_role_change_is_visible_on_the_next_cycle() {
    let temp = create_temp_dir();
    let path = write_state_file(&temp, b"MASTER\n");
    let registry = build_registry(Some(&path));

    assert_eq!(
        registry.collect_named(FACT_NAME),
        FactResult::Value(Personality::Master)
    );

    std::fs::write(&path, b"SHADOW\n").unwrap();
    assert_eq!(
        registry.collect_named(FACT_NAME),
        FactResult::Value(Personality::Shadow)
    );

    std::fs::remove_file(&path).unwrap();
    assert_eq!(registry.collect_named(FACT_NAME), FactResult::Absent);
}
