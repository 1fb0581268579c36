use chrono::{Duration, TimeZone, Utc};
use tempfile::tempdir;

use fastr::fast::Fast;
use fastr::session::{FileSessionStore, SessionStore};

// Relaunch simulation: build a fresh Fast over the same state file and
// foreground it, as main does at startup.

#[test]
fn relaunch_while_counting_reproduces_elapsed() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("session.json");
    let t0 = Utc.with_ymd_and_hms(2024, 3, 1, 8, 0, 0).unwrap();

    let mut fast = Fast::new(FileSessionStore::with_path(&path));
    fast.toggle(t0);
    drop(fast); // "app killed"

    let mut relaunched = Fast::new(FileSessionStore::with_path(&path));
    relaunched.on_foreground(t0 + Duration::seconds(1234));

    // Same elapsed as continuous operation would have shown
    assert!(relaunched.is_counting());
    assert_eq!(relaunched.elapsed_secs(), 1234);
    assert_eq!(relaunched.percentage_completed(), 34);
}

#[test]
fn relaunch_while_paused_shows_frozen_elapsed() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("session.json");
    let t0 = Utc.with_ymd_and_hms(2024, 3, 1, 8, 0, 0).unwrap();

    let mut fast = Fast::new(FileSessionStore::with_path(&path));
    fast.toggle(t0);
    fast.toggle(t0 + Duration::seconds(600));
    drop(fast);

    let mut relaunched = Fast::new(FileSessionStore::with_path(&path));
    // Days later the paused session still reads 10 minutes
    relaunched.on_foreground(t0 + Duration::days(3));
    assert!(!relaunched.is_counting());
    assert_eq!(relaunched.elapsed_secs(), 600);

    // And resuming continues from there
    let t1 = t0 + Duration::days(3) + Duration::seconds(1);
    relaunched.toggle(t1);
    assert!(relaunched.is_counting());
    assert_eq!(relaunched.elapsed_secs(), 600);
}

#[test]
fn relaunch_after_reset_starts_from_scratch() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("session.json");
    let t0 = Utc.with_ymd_and_hms(2024, 3, 1, 8, 0, 0).unwrap();

    let mut fast = Fast::new(FileSessionStore::with_path(&path));
    fast.toggle(t0);
    fast.reset();
    drop(fast);

    let mut relaunched = Fast::new(FileSessionStore::with_path(&path));
    relaunched.on_foreground(t0 + Duration::seconds(50));
    assert!(!relaunched.is_counting());
    assert_eq!(relaunched.elapsed_secs(), 0);
    assert_eq!(relaunched.percentage_completed(), 0);
}

#[test]
fn state_file_uses_conceptual_key_names() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("session.json");
    let t0 = Utc.with_ymd_and_hms(2024, 3, 1, 8, 0, 0).unwrap();

    let mut fast = Fast::new(FileSessionStore::with_path(&path));
    fast.toggle(t0);
    fast.toggle(t0 + Duration::seconds(60));

    let raw = std::fs::read_to_string(&path).unwrap();
    assert!(raw.contains("startTime"));
    assert!(raw.contains("stopTime"));
    assert!(raw.contains("counting"));
}

#[test]
fn unwritable_store_degrades_to_in_memory_session() {
    // Point the store at a path whose parent cannot be created
    let dir = tempdir().unwrap();
    let blocker = dir.path().join("blocker");
    std::fs::write(&blocker, b"file, not a dir").unwrap();
    let path = blocker.join("session.json");

    let store = FileSessionStore::with_path(&path);
    assert!(store.save(&Default::default()).is_err());

    let t0 = Utc.with_ymd_and_hms(2024, 3, 1, 8, 0, 0).unwrap();
    let mut fast = Fast::new(store);

    // The timer still works for this run even though nothing persists
    fast.toggle(t0);
    fast.tick(t0 + Duration::seconds(120));
    assert!(fast.is_counting());
    assert_eq!(fast.elapsed_secs(), 120);
}
