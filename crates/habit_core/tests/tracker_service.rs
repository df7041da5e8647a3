use habit_core::{
    HabitTrackerService, JsonFileStore, ScheduleTimeError, ServiceError, StartupState, StoreError,
};
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn open(path: &Path) -> (HabitTrackerService<JsonFileStore>, StartupState) {
    HabitTrackerService::open(JsonFileStore::new(path)).unwrap()
}

fn saved_document(path: &Path) -> serde_json::Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

#[test]
fn first_run_then_restored_on_reopen() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("habit_data.json");

    let (mut service, state) = open(&path);
    assert_eq!(state, StartupState::FirstRun);
    assert!(service.tracker().is_empty());
    service.add_category("Health").unwrap();

    let (service, state) = open(&path);
    assert_eq!(state, StartupState::Restored);
    assert_eq!(service.tracker().category_names(), ["Health"]);
}

#[test]
fn every_mutation_is_flushed() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("habit_data.json");
    let (mut service, _) = open(&path);

    service.add_category("Health").unwrap();
    service.add_habit("Health", "Exercise").unwrap();
    assert_eq!(service.complete_habit("Health", "Exercise").unwrap(), 1);
    assert_eq!(service.add_schedule("Exercise", "7:15").unwrap(), "07:15");

    let doc = saved_document(&path);
    assert_eq!(doc["Health"]["habits"]["Exercise"]["count"], 1);
    assert_eq!(
        doc["Health"]["habits"]["Exercise"]["schedules"],
        serde_json::json!(["07:15"])
    );

    service.remove_habit("Health", "Exercise").unwrap();
    assert_eq!(saved_document(&path)["Health"]["habits"], serde_json::json!({}));

    service.remove_category("Health").unwrap();
    assert_eq!(saved_document(&path), serde_json::json!({}));
}

#[test]
fn names_are_trimmed_before_use() {
    let dir = tempdir().unwrap();
    let (mut service, _) = open(&dir.path().join("habit_data.json"));

    service.add_category("  Health ").unwrap();
    service.add_habit("Health", " Walk ").unwrap();
    assert!(service.tracker().find_habit_by_name("Walk").is_some());
    assert!(matches!(
        service.add_category("Health"),
        Err(ServiceError::CategoryExists(name)) if name == "Health"
    ));
}

#[test]
fn rejections_map_to_typed_errors_and_do_not_save() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("habit_data.json");
    let (mut service, _) = open(&path);

    assert!(matches!(
        service.add_category("   "),
        Err(ServiceError::InvalidCategoryName)
    ));
    assert!(!path.exists());

    assert!(matches!(
        service.add_habit("Missing", "Run"),
        Err(ServiceError::CategoryNotFound(_))
    ));
    assert!(matches!(
        service.remove_category("Missing"),
        Err(ServiceError::CategoryNotFound(_))
    ));

    service.add_category("Health").unwrap();
    service.add_habit("Health", "Run").unwrap();
    assert!(matches!(
        service.add_habit("Health", "Run"),
        Err(ServiceError::HabitExists { .. })
    ));
    assert!(matches!(
        service.remove_habit("Health", "Swim"),
        Err(ServiceError::HabitNotFound(_))
    ));
    assert!(matches!(
        service.complete_habit("Health", "Swim"),
        Err(ServiceError::HabitNotFound(_))
    ));
    assert!(matches!(
        service.add_schedule("Swim", "06:00"),
        Err(ServiceError::HabitNotFound(_))
    ));
}

#[test]
fn invalid_time_never_reaches_the_habit() {
    let dir = tempdir().unwrap();
    let (mut service, _) = open(&dir.path().join("habit_data.json"));
    service.add_category("Health").unwrap();
    service.add_habit("Health", "Read").unwrap();

    let err = service.add_schedule("Read", "25:00").unwrap_err();
    assert!(matches!(
        err,
        ServiceError::InvalidTime(ScheduleTimeError::OutOfRange(_))
    ));
    let err = service.add_schedule("Ghost", "nope").unwrap_err();
    assert!(matches!(
        err,
        ServiceError::InvalidTime(ScheduleTimeError::InvalidFormat(_))
    ));
    assert!(service
        .tracker()
        .find_habit_by_name("Read")
        .unwrap()
        .schedules()
        .is_empty());
}

#[test]
fn add_schedule_targets_first_matching_category() {
    let dir = tempdir().unwrap();
    let (mut service, _) = open(&dir.path().join("habit_data.json"));
    service.add_category("Morning").unwrap();
    service.add_category("Evening").unwrap();
    service.add_habit("Morning", "Stretch").unwrap();
    service.add_habit("Evening", "Stretch").unwrap();

    service.add_schedule("Stretch", "06:00").unwrap();

    let view = service.view();
    assert_eq!(view.schedule.len(), 1);
    assert_eq!(view.categories[0].habits[0].schedules, ["06:00"]);
    assert!(view.categories[1].habits[0].schedules.is_empty());
}

#[test]
fn open_rejects_malformed_state_without_overwriting_it() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("habit_data.json");
    fs::write(&path, "[1, 2, 3]").unwrap();

    let result = HabitTrackerService::open(JsonFileStore::new(&path));
    assert!(matches!(
        result,
        Err(ServiceError::Store(StoreError::Malformed(_)))
    ));
    assert_eq!(fs::read_to_string(&path).unwrap(), "[1, 2, 3]");
}

#[test]
fn view_reflects_latest_state() {
    let dir = tempdir().unwrap();
    let (mut service, _) = open(&dir.path().join("habit_data.json"));
    service.add_category("Health").unwrap();
    service.add_habit("Health", "Exercise").unwrap();
    service.complete_habit("Health", "Exercise").unwrap();

    let rendered = service.view().to_string();
    assert_eq!(rendered, "Health\n  Exercise - Count: 1\n");
}
