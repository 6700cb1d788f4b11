use std::fs;

use gitfolio::services::local_store::{LocalStore, LocalStoreTrait};

fn temp_store_path() -> (tempfile::TempDir, String) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("store.json").to_string_lossy().to_string();
    (dir, path)
}

#[test]
fn test_identity_roundtrip() {
    let (_dir, path) = temp_store_path();
    let store = LocalStore::open(Some(path.clone()));
    assert_eq!(store.get("identity"), None);

    store.set("identity", "octocat").unwrap();
    assert_eq!(store.get("identity"), Some("octocat".to_string()));

    // A fresh store sees the persisted value.
    let reopened = LocalStore::open(Some(path));
    assert_eq!(reopened.get("identity"), Some("octocat".to_string()));
}

#[test]
fn test_explicit_reset_clears_identity() {
    let (_dir, path) = temp_store_path();
    let store = LocalStore::open(Some(path.clone()));
    store.set("identity", "octocat").unwrap();
    store.remove("identity").unwrap();

    let reopened = LocalStore::open(Some(path));
    assert_eq!(reopened.get("identity"), None);
}

#[test]
fn test_set_writes_through_immediately() {
    let (_dir, path) = temp_store_path();
    let store = LocalStore::open(Some(path.clone()));
    store.set("bookmarks", "[7]").unwrap();

    // The file reflects the write before anything else happens.
    let on_disk = fs::read_to_string(&path).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&on_disk).unwrap();
    assert_eq!(parsed["bookmarks"], "[7]");
}

#[test]
fn test_malformed_store_file_recovers_to_empty() {
    let (_dir, path) = temp_store_path();
    fs::write(&path, "{ definitely not json").unwrap();

    let store = LocalStore::open(Some(path.clone()));
    assert_eq!(store.get("identity"), None);

    // The store stays usable and the next write repairs the file.
    store.set("identity", "octocat").unwrap();
    let reopened = LocalStore::open(Some(path));
    assert_eq!(reopened.get("identity"), Some("octocat".to_string()));
}

#[test]
fn test_missing_parent_directory_is_created_on_write() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir
        .path()
        .join("nested")
        .join("deeper")
        .join("store.json")
        .to_string_lossy()
        .to_string();

    let store = LocalStore::open(Some(path.clone()));
    store.set("identity", "octocat").unwrap();

    let reopened = LocalStore::open(Some(path));
    assert_eq!(reopened.get("identity"), Some("octocat".to_string()));
}

#[test]
fn test_keys_are_independent() {
    let (_dir, path) = temp_store_path();
    let store = LocalStore::open(Some(path));
    store.set("identity", "octocat").unwrap();
    store.set("bookmarks", "[1,2]").unwrap();

    store.remove("identity").unwrap();
    assert_eq!(store.get("identity"), None);
    assert_eq!(store.get("bookmarks"), Some("[1,2]".to_string()));
}
