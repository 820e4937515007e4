//! Tests for the JSON file repository.

use contact_book::error::StorageError;
use contact_book::models::{AddressBook, Record};
use contact_book::repositories::{BookRepository, JsonFileRepository};
use std::fs;
use tempfile::TempDir;

fn sample_book() -> AddressBook {
    let mut alice = Record::new("Alice").unwrap();
    alice.add_phone("1111111111").unwrap();
    alice.add_phone("2222222222").unwrap();
    alice.add_phone("1111111111").unwrap();
    alice.set_birthday("29.02.2000").unwrap();

    let bob = Record::new("Bob").unwrap();

    let mut carol = Record::new("Carol").unwrap();
    carol.set_birthday("01.12.1975").unwrap();

    vec![alice, bob, carol].into_iter().collect()
}

#[test]
fn test_load_missing_file_returns_empty_book() {
    let dir = TempDir::new().unwrap();
    let repo = JsonFileRepository::new(dir.path().join("absent.json"));

    let book = repo.load().unwrap();
    assert!(book.is_empty());
    assert_eq!(book.to_string(), "[]");
}

#[test]
fn test_round_trip_preserves_rendering() {
    let dir = TempDir::new().unwrap();
    let repo = JsonFileRepository::new(dir.path().join("book.json"));
    let book = sample_book();

    repo.save(&book).unwrap();
    let loaded = repo.load().unwrap();

    assert_eq!(loaded.to_string(), book.to_string());
    assert_eq!(loaded, book);
}

#[test]
fn test_round_trip_empty_book() {
    let dir = TempDir::new().unwrap();
    let repo = JsonFileRepository::new(dir.path().join("book.json"));

    repo.save(&AddressBook::new()).unwrap();
    let loaded = repo.load().unwrap();

    assert!(loaded.is_empty());
}

#[test]
fn test_save_overwrites_existing_file() {
    let dir = TempDir::new().unwrap();
    let repo = JsonFileRepository::new(dir.path().join("book.json"));

    repo.save(&sample_book()).unwrap();

    let mut smaller = AddressBook::new();
    smaller.add_record(Record::new("Dave").unwrap());
    repo.save(&smaller).unwrap();

    let loaded = repo.load().unwrap();
    assert_eq!(loaded.len(), 1);
    assert!(loaded.find("Dave").is_some());
    assert!(loaded.find("Alice").is_none());
}

#[test]
fn test_save_creates_parent_directories() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("deeper").join("book.json");
    let repo = JsonFileRepository::new(&path);

    repo.save(&sample_book()).unwrap();

    assert!(path.exists());
    assert_eq!(repo.path(), path.as_path());
}

#[test]
fn test_load_corrupt_json_fails() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("book.json");
    fs::write(&path, "{ not json").unwrap();

    let result = JsonFileRepository::new(&path).load();
    assert!(matches!(result, Err(StorageError::Json(_))));
}

#[test]
fn test_load_invalid_birthday_fails() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("book.json");
    fs::write(
        &path,
        r#"{"version":1,"contacts":[{"name":"Alice","phones":[],"birthday":"31.02.2020"}]}"#,
    )
    .unwrap();

    let result = JsonFileRepository::new(&path).load();
    assert!(matches!(result, Err(StorageError::Json(_))));
}

#[test]
fn test_load_duplicate_contact_fails() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("book.json");
    fs::write(
        &path,
        r#"{"version":1,"contacts":[
            {"name":"Alice","phones":["1111111111"]},
            {"name":"Alice","phones":["2222222222"]}
        ]}"#,
    )
    .unwrap();

    let result = JsonFileRepository::new(&path).load();
    assert!(matches!(
        result,
        Err(StorageError::DuplicateContact(name)) if name == "Alice"
    ));
}

#[test]
fn test_load_unknown_version_fails() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("book.json");
    fs::write(&path, r#"{"version":7,"contacts":[]}"#).unwrap();

    let result = JsonFileRepository::new(&path).load();
    assert!(matches!(
        result,
        Err(StorageError::UnsupportedVersion { found: 7, .. })
    ));
}

#[test]
fn test_load_directory_path_fails_with_io_error() {
    let dir = TempDir::new().unwrap();

    let result = JsonFileRepository::new(dir.path()).load();
    assert!(matches!(result, Err(StorageError::Io(_))));
}
