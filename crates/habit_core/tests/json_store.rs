use habit_core::{JsonFileStore, LoadOutcome, StoreError, Tracker, TrackerStore};
use std::fs;
use tempfile::tempdir;

fn sample_tracker() -> Tracker {
    let mut tracker = Tracker::new();
    tracker.add_category("Health");
    tracker.add_category("Mind");
    tracker.add_habit("Health", "Exercise");
    tracker.add_habit("Health", "Stretch");
    tracker.add_habit("Mind", "Read");

    let exercise = tracker.find_habit_by_name_mut("Exercise").unwrap();
    exercise.increment();
    exercise.increment();
    exercise.add_schedule("18:00");
    exercise.add_schedule("06:30");
    tracker.find_habit_by_name_mut("Read").unwrap().add_schedule("21:00");
    tracker
}

#[test]
fn load_missing_file_reports_no_prior_state() {
    let dir = tempdir().unwrap();
    let store = JsonFileStore::new(dir.path().join("habit_data.json"));

    assert_eq!(store.load().unwrap(), LoadOutcome::NoPriorState);

    let mut tracker = Tracker::new();
    assert!(!tracker.load_from(&store).unwrap());
    assert!(tracker.is_empty());
}

#[test]
fn save_then_load_reconstructs_identical_tree() {
    let dir = tempdir().unwrap();
    let store = JsonFileStore::new(dir.path().join("habit_data.json"));
    let original = sample_tracker();
    original.save_to(&store).unwrap();

    let mut loaded = Tracker::new();
    assert!(loaded.load_from(&store).unwrap());

    assert_eq!(loaded.category_names(), original.category_names());
    for (left, right) in loaded.categories().zip(original.categories()) {
        let left_habits: Vec<_> = left.habits().collect();
        let right_habits: Vec<_> = right.habits().collect();
        assert_eq!(left_habits, right_habits);
    }
    assert_eq!(
        loaded.find_habit_by_name("Exercise").unwrap().schedules(),
        ["06:30", "18:00"]
    );
}

#[test]
fn load_replaces_existing_categories() {
    let dir = tempdir().unwrap();
    let store = JsonFileStore::new(dir.path().join("habit_data.json"));
    sample_tracker().save_to(&store).unwrap();

    let mut tracker = Tracker::new();
    tracker.add_category("Stale");
    tracker.load_from(&store).unwrap();

    assert!(tracker.category("Stale").is_none());
    assert_eq!(tracker.category_names(), ["Health", "Mind"]);
}

#[test]
fn save_overwrites_previous_document() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("habit_data.json");
    let store = JsonFileStore::new(&path);
    sample_tracker().save_to(&store).unwrap();

    let mut smaller = Tracker::new();
    smaller.add_category("Only");
    smaller.save_to(&store).unwrap();

    let value: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    let keys: Vec<&String> = value.as_object().unwrap().keys().collect();
    assert_eq!(keys, ["Only"]);
    assert_eq!(value["Only"]["habits"], serde_json::json!({}));
}

#[test]
fn save_creates_missing_parent_directories() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("state").join("habit_data.json");
    let store = JsonFileStore::new(&path);

    Tracker::new().save_to(&store).unwrap();
    assert!(path.exists());
}

#[test]
fn load_malformed_file_fails_fast() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("habit_data.json");
    fs::write(&path, "{ not json").unwrap();
    let store = JsonFileStore::new(&path);

    let mut tracker = Tracker::new();
    tracker.add_category("Keep");
    let err = tracker.load_from(&store).unwrap_err();

    assert!(matches!(err, StoreError::Malformed(_)));
    assert!(tracker.category("Keep").is_some());
}

#[test]
fn load_keeps_persisted_schedules_verbatim() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("habit_data.json");
    fs::write(
        &path,
        r#"{"Health": {"habits": {"Run": {"count": 7, "schedules": ["19:00", "06:00"]}}}}"#,
    )
    .unwrap();

    let mut tracker = Tracker::new();
    tracker.load_from(&JsonFileStore::new(&path)).unwrap();

    let run = tracker.find_habit_by_name("Run").unwrap();
    assert_eq!(run.count(), 7);
    assert_eq!(run.schedules(), ["19:00", "06:00"]);
}

#[test]
fn load_directory_path_is_io_error() {
    let dir = tempdir().unwrap();
    let store = JsonFileStore::new(dir.path());

    let err = store.load().unwrap_err();
    assert!(matches!(err, StoreError::Io { .. }));
}
