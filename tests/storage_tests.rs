mod common;

use circleforge::config::SessionParams;
use circleforge::input::InputSource;
use circleforge::scorer::Scorer;
use circleforge::session::Session;
use circleforge::storage::{BestScoreStore, JsonFileStore};
use common::{closed_circle, stroke_events, surface};
use serde_json::Value;
use std::fs;
use tempfile::TempDir;

fn store_in(dir: &TempDir) -> JsonFileStore {
    JsonFileStore::new(dir.path().join("best.json"))
}

#[test]
fn test_missing_file_is_unset() {
    let dir = tempfile::tempdir().unwrap();
    assert_eq!(store_in(&dir).load().unwrap(), None);
}

#[test]
fn test_save_then_load_full_precision() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = store_in(&dir);
    store.save(87.125).unwrap();

    let reopened = store_in(&dir);
    assert_eq!(reopened.load().unwrap(), Some(87.125));

    let raw: Value = serde_json::from_str(&fs::read_to_string(store.path()).unwrap()).unwrap();
    assert_eq!(raw["bestScore"].as_f64(), Some(87.125));
}

#[test]
fn test_other_keys_survive_a_save() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("best.json");
    fs::write(&path, r##"{ "strokeColor": "#00ff88", "bestScore": 10.0 }"##).unwrap();

    let mut store = JsonFileStore::new(&path);
    store.save(20.5).unwrap();

    let raw: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(raw["strokeColor"], "#00ff88");
    assert_eq!(raw["bestScore"].as_f64(), Some(20.5));
}

#[test]
fn test_legacy_string_value() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("best.json");
    fs::write(&path, r#"{ "bestScore": "42.17" }"#).unwrap();
    assert_eq!(JsonFileStore::new(&path).load().unwrap(), Some(42.17));
}

#[test]
fn test_custom_key() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("best.json");
    let mut store = JsonFileStore::with_key(&path, "circleBest");
    store.save(55.0).unwrap();

    assert_eq!(JsonFileStore::new(&path).load().unwrap(), None);
    assert_eq!(
        JsonFileStore::with_key(&path, "circleBest").load().unwrap(),
        Some(55.0)
    );
}

#[test]
fn test_creates_parent_directories() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("deeper").join("best.json");
    let mut store = JsonFileStore::new(&path);
    store.save(1.0).unwrap();
    assert!(path.exists());
}

#[test]
fn test_corrupt_file_errors_on_load_but_is_replaced_on_save() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("best.json");
    fs::write(&path, "not json at all").unwrap();

    let mut store = JsonFileStore::new(&path);
    assert!(store.load().is_err());

    store.save(12.5).unwrap();
    assert_eq!(store.load().unwrap(), Some(12.5));
}

#[test]
fn test_non_numeric_value_errors() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("best.json");
    fs::write(&path, r#"{ "bestScore": "lots" }"#).unwrap();
    assert!(JsonFileStore::new(&path).load().is_err());

    fs::write(&path, r#"[1, 2, 3]"#).unwrap();
    assert!(JsonFileStore::new(&path).load().is_err());
}

#[test]
fn test_non_finite_score_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = store_in(&dir);
    assert!(store.save(f64::NAN).is_err());
    assert!(!store.path().exists());
}

#[test]
fn test_session_persists_through_file() {
    let dir = tempfile::tempdir().unwrap();
    let points = closed_circle(surface(), 200.0, 120);

    let mut first = Session::new(
        Scorer::default(),
        SessionParams::default(),
        surface(),
        store_in(&dir),
    );
    first.run(stroke_events(&points, InputSource::Pointer));
    let best = first.best().value();
    assert!(best > 99.0);

    // A later session starts from the persisted value
    let second = Session::new(
        Scorer::default(),
        SessionParams::default(),
        surface(),
        store_in(&dir),
    );
    assert!((second.best().value() - best).abs() < 1e-9);
}

#[test]
fn test_session_with_corrupt_file_starts_from_zero() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("best.json"), "{{{").unwrap();

    let session = Session::new(
        Scorer::default(),
        SessionParams::default(),
        surface(),
        store_in(&dir),
    );
    assert_eq!(session.best().value(), 0.0);
}
