//! File-backed persistence across store instances.

use namecloak::config::{Config, StoreConfig};
use namecloak::core::Transformation;
use namecloak::store::{FileStore, HistoryStore, KeyValueStore, SharedHistoryStore, SlotFormat};
use std::fs;
use std::thread;

fn numbered(n: usize) -> Transformation {
    Transformation::new(format!("Person {n}"), format!("Ρεŕѕοη {n}"))
}

#[test]
fn reopening_restores_history_and_favorites() {
    let dir = tempfile::tempdir().unwrap();

    let (history, favorites) = {
        let mut store = HistoryStore::open(FileStore::new(dir.path()));
        for n in 0..3 {
            store.add_to_history(numbered(n));
        }
        let middle = store.history()[1].clone();
        store.toggle_favorite(&middle);
        (store.history().to_vec(), store.favorites().to_vec())
    };

    let reopened = HistoryStore::open(FileStore::new(dir.path()));
    assert_eq!(reopened.history(), history.as_slice());
    assert_eq!(reopened.favorites(), favorites.as_slice());
}

#[test]
fn slot_files_hold_json_arrays() {
    let dir = tempfile::tempdir().unwrap();
    let backend = FileStore::new(dir.path());
    let mut store = HistoryStore::open(backend.clone());
    let t = numbered(1);
    store.add_to_history(t.clone());

    let raw = fs::read_to_string(backend.slot_path("history").unwrap()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let record = &value.as_array().unwrap()[0];
    assert_eq!(record["id"], t.id.to_string());
    assert_eq!(record["original"], "Person 1");
    assert!(record["date"].is_string());
}

#[test]
fn corrupt_file_is_treated_as_empty_and_then_replaced() {
    let dir = tempfile::tempdir().unwrap();
    let backend = FileStore::new(dir.path());
    fs::write(backend.slot_path("history").unwrap(), b"\xff\xfe garbage").unwrap();

    let mut store = HistoryStore::open(backend.clone());
    assert!(store.history().is_empty());

    store.add_to_history(numbered(1));
    let reopened = HistoryStore::open(backend);
    assert_eq!(reopened.history().len(), 1);
}

#[test]
fn remove_all_deletes_slot_files() {
    let dir = tempfile::tempdir().unwrap();
    let backend = FileStore::new(dir.path());
    let mut store = HistoryStore::open(backend.clone());
    let t = numbered(1);
    store.add_to_history(t.clone());
    store.toggle_favorite(&t);
    assert!(backend.slot_path("history").unwrap().exists());

    store.remove_all_history();
    assert!(!backend.slot_path("history").unwrap().exists());
    assert!(!backend.slot_path("favorites").unwrap().exists());

    let reopened = HistoryStore::open(backend);
    assert!(reopened.history().is_empty());
    assert!(reopened.favorites().is_empty());
}

#[test]
fn unwritable_directory_keeps_session_state() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("not-a-dir");
    fs::write(&blocker, b"file in the way").unwrap();

    // Every write fails because the store directory is a regular file.
    let mut store = HistoryStore::open(FileStore::new(&blocker));
    let t = numbered(1);
    assert!(store.add_to_history(t.clone()));
    assert!(store.toggle_favorite(&t));
    assert_eq!(store.history(), &[t.clone()]);
    assert!(store.is_favorite(&t));
}

#[test]
fn configured_binary_store_roundtrips() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::from_toml_str(
        r#"
        [store]
        history_capacity = 3
        history_key = "recent"
        format = "binary"
        "#,
    )
    .unwrap();

    let mut store = HistoryStore::with_config(FileStore::new(dir.path()), config.store.clone());
    for n in 0..5 {
        store.add_to_history(numbered(n));
    }
    assert_eq!(store.history().len(), 3);
    assert_eq!(store.history()[0].original, "Person 4");

    let backend = FileStore::new(dir.path());
    assert!(backend.read("recent").unwrap().is_some());
    assert!(backend.read("history").unwrap().is_none());

    let reopened = HistoryStore::with_config(backend, config.store);
    assert_eq!(reopened.history(), store.history());
}

#[test]
fn format_mismatch_loads_empty() {
    let dir = tempfile::tempdir().unwrap();
    let mut json_store = HistoryStore::open(FileStore::new(dir.path()));
    json_store.add_to_history(numbered(1));

    let binary = StoreConfig {
        format: SlotFormat::Binary,
        ..StoreConfig::default()
    };
    let reopened = HistoryStore::with_config(FileStore::new(dir.path()), binary);
    assert!(reopened.history().is_empty());
}

#[test]
fn shared_store_persists_every_concurrent_update() {
    let dir = tempfile::tempdir().unwrap();
    let shared = SharedHistoryStore::new(HistoryStore::open(FileStore::new(dir.path())));

    let handles: Vec<_> = (0..4)
        .map(|worker| {
            let shared = shared.clone();
            thread::spawn(move || {
                for n in 0..5 {
                    let t = numbered(worker * 10 + n);
                    shared.add_to_history(t.clone());
                    if n % 2 == 0 {
                        shared.toggle_favorite(&t);
                    }
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let reopened = HistoryStore::open(FileStore::new(dir.path()));
    assert_eq!(reopened.history().len(), 20);
    assert_eq!(reopened.favorites().len(), 12);
    assert_eq!(reopened.history(), shared.history().as_slice());
}
