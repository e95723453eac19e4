//! Integration tests for keyed persistence: round trips, defaults, corrupt records.

use bracket_draw_web::{add_teams, draw, Store, Tournament};
use std::fs;
use std::path::PathBuf;

fn temp_store(test: &str) -> (Store, PathBuf) {
    let dir = std::env::temp_dir().join(format!(
        "bracket_draw_web_{}_{test}",
        std::process::id()
    ));
    let _ = fs::remove_dir_all(&dir);
    (Store::new(dir.clone()), dir)
}

#[test]
fn save_then_load_round_trips() {
    let (store, dir) = temp_store("round_trip");
    let mut t = Tournament::new(Some("Cup".to_string()));
    add_teams(&mut t, "A; B; C").unwrap();
    draw(&mut t).unwrap();
    store.save("chat-1", &t).unwrap();

    let loaded = store.load("chat-1").unwrap();
    assert_eq!(loaded.name, "Cup");
    assert_eq!(loaded.teams, t.teams);
    assert_eq!(loaded.bracket, t.bracket);
    assert_eq!(loaded.created_at, t.created_at);

    let _ = fs::remove_dir_all(dir);
}

#[test]
fn missing_key_loads_as_empty_default() {
    let (store, dir) = temp_store("missing_key");
    let t = store.load("nobody-here").unwrap();
    assert!(t.teams.is_empty());
    assert!(t.bracket.is_none());
    assert!(t.name.starts_with("Tournament "));
    let _ = fs::remove_dir_all(dir);
}

#[test]
fn corrupt_record_degrades_to_empty_default() {
    let (store, dir) = temp_store("corrupt");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("broken.json"), "{ not json at all").unwrap();
    let t = store.load("broken").unwrap();
    assert!(t.teams.is_empty());
    assert!(t.bracket.is_none());
    let _ = fs::remove_dir_all(dir);
}

#[test]
fn partial_record_fills_in_defaults() {
    let (store, dir) = temp_store("partial");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("old.json"), r#"{"teams": ["A", "B"]}"#).unwrap();
    let t = store.load("old").unwrap();
    assert_eq!(t.teams, vec!["A", "B"]);
    assert!(t.bracket.is_none());
    assert!(t.name.starts_with("Tournament "));
    let _ = fs::remove_dir_all(dir);
}

#[test]
fn keys_are_sanitized_to_safe_filenames() {
    let (store, dir) = temp_store("sanitize");
    let t = Tournament::new(Some("Keyed".to_string()));
    store.save("../../etc/passwd", &t).unwrap();
    // the record stays inside the data directory under a flattened name
    assert!(dir.join("______etc_passwd.json").exists());
    assert_eq!(store.load("../../etc/passwd").unwrap().name, "Keyed");
    let _ = fs::remove_dir_all(dir);
}

#[test]
fn with_key_lock_runs_the_closure_and_returns_its_result() {
    let (store, dir) = temp_store("key_lock");
    let result: Result<usize, bracket_draw_web::StoreError> = store.with_key_lock("k", || {
        let mut t = store.load("k")?;
        t.teams.push("A".to_string());
        store.save("k", &t)?;
        Ok(t.teams.len())
    });
    assert_eq!(result.unwrap(), 1);
    assert_eq!(store.load("k").unwrap().teams, vec!["A"]);
    let _ = fs::remove_dir_all(dir);
}
