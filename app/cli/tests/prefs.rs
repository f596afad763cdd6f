//! Tests for the TOML-backed settings store.

use lantern::{API_KEY, MAX_TOKEN, MODEL, Store};
use lantern_cli::prefs::TomlStore;

#[test]
fn update_then_get_roundtrips() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = TomlStore::open(dir.path().join("cli.toml"));

    store.update(API_KEY, "sk-test");
    store.update(MODEL, "gpt-4");

    assert_eq!(store.get(API_KEY).as_deref(), Some("sk-test"));
    assert_eq!(store.get(MODEL).as_deref(), Some("gpt-4"));
    assert_eq!(store.get(MAX_TOKEN), None);
}

#[test]
fn get_from_missing_file_is_absent() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = TomlStore::open(dir.path().join("nope").join("cli.toml"));

    assert_eq!(store.get(API_KEY), None);
}

#[test]
fn update_creates_parent_directories() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = TomlStore::open(dir.path().join("deep").join("cli.toml"));

    store.update(MODEL, "gpt-4");
    assert_eq!(store.get(MODEL).as_deref(), Some("gpt-4"));
}

#[test]
fn update_preserves_other_keys() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = TomlStore::open(dir.path().join("cli.toml"));

    store.update(API_KEY, "sk-test");
    store.update(MODEL, "gpt-4");
    store.update(MODEL, "gpt-4o");

    assert_eq!(store.get(API_KEY).as_deref(), Some("sk-test"));
    assert_eq!(store.get(MODEL).as_deref(), Some("gpt-4o"));
}

#[test]
fn writes_from_one_handle_are_seen_by_another() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("cli.toml");
    let writer = TomlStore::open(&path);
    let reader = TomlStore::open(&path);

    writer.update(MODEL, "gpt-4");
    assert_eq!(reader.get(MODEL).as_deref(), Some("gpt-4"));
}

#[test]
fn hand_edited_scalars_read_back_as_text() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("cli.toml");
    std::fs::write(&path, "maxToken = 2000\n").expect("write");

    let store = TomlStore::open(&path);
    assert_eq!(store.get(MAX_TOKEN).as_deref(), Some("2000"));
}

#[test]
fn malformed_file_degrades_to_empty() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("cli.toml");
    std::fs::write(&path, "not [valid toml").expect("write");

    let store = TomlStore::open(&path);
    assert_eq!(store.get(MODEL), None);

    // A write replaces the malformed state entirely.
    store.update(MODEL, "gpt-4");
    assert_eq!(store.get(MODEL).as_deref(), Some("gpt-4"));
}
