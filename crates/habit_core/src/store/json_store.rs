//! JSON file backend for the tracker tree.
//!
//! Layout:
//!
//! ```text
//! { "<category>": { "habits": { "<habit>": { "count": 0, "schedules": ["HH:MM"] } } } }
//! ```
//!
//! Object key order carries category and habit insertion order. Saving
//! overwrites the destination in place; a crash mid-write can leave a
//! truncated file behind.

use crate::model::category::Category;
use crate::model::habit::Habit;
use crate::model::tracker::Tracker;
use crate::store::{LoadOutcome, StoreError, StoreResult, TrackerStore};
use indexmap::IndexMap;
use log::{error, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// File name used when no explicit destination is configured.
pub const DEFAULT_DATA_FILE_NAME: &str = "habit_data.json";

type TrackerRecord = IndexMap<String, CategoryRecord>;

#[derive(Debug, Serialize, Deserialize)]
struct CategoryRecord {
    habits: IndexMap<String, HabitRecord>,
}

#[derive(Debug, Serialize, Deserialize)]
struct HabitRecord {
    count: u64,
    schedules: Vec<String>,
}

/// Encodes the full tree as a JSON document.
pub fn to_json(tracker: &Tracker) -> StoreResult<String> {
    let record: TrackerRecord = tracker
        .categories()
        .map(|category| {
            let habits = category
                .habits()
                .map(|habit| {
                    (
                        habit.name().to_string(),
                        HabitRecord {
                            count: habit.count(),
                            schedules: habit.schedules().to_vec(),
                        },
                    )
                })
                .collect();
            (category.name().to_string(), CategoryRecord { habits })
        })
        .collect();

    serde_json::to_string_pretty(&record).map_err(StoreError::Encode)
}

/// Decodes a JSON document into a fresh tree.
///
/// Counts and schedules are kept verbatim.
///
/// # Errors
/// - `Malformed` when the text is not JSON or does not match the layout.
/// - `InvalidData` when a category name is empty.
pub fn from_json(raw: &str) -> StoreResult<Tracker> {
    let record: TrackerRecord = serde_json::from_str(raw).map_err(StoreError::Malformed)?;

    let mut categories = Vec::with_capacity(record.len());
    for (category_name, category_record) in record {
        if category_name.is_empty() {
            return Err(StoreError::InvalidData(
                "category name must not be empty".to_string(),
            ));
        }
        let mut category = Category::new(category_name);
        for (habit_name, habit_record) in category_record.habits {
            category.add_habit(Habit::restore(
                habit_name,
                habit_record.count,
                habit_record.schedules,
            ));
        }
        categories.push(category);
    }

    let mut tracker = Tracker::new();
    tracker.replace_categories(categories);
    Ok(tracker)
}

/// Tracker store backed by one JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl TrackerStore for JsonFileStore {
    fn load(&self) -> StoreResult<LoadOutcome> {
        let started_at = Instant::now();
        info!("event=tracker_load module=store status=start");

        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                info!(
                    "event=tracker_load module=store status=ok outcome=no_prior_state duration_ms={}",
                    started_at.elapsed().as_millis()
                );
                return Ok(LoadOutcome::NoPriorState);
            }
            Err(err) => {
                error!(
                    "event=tracker_load module=store status=error duration_ms={} error_code=read_failed error={}",
                    started_at.elapsed().as_millis(),
                    err
                );
                return Err(self.io_error(err));
            }
        };

        match from_json(&raw) {
            Ok(tracker) => {
                info!(
                    "event=tracker_load module=store status=ok outcome=loaded duration_ms={} categories={}",
                    started_at.elapsed().as_millis(),
                    tracker.len()
                );
                Ok(LoadOutcome::Loaded(tracker))
            }
            Err(err) => {
                error!(
                    "event=tracker_load module=store status=error duration_ms={} error_code=decode_failed error={}",
                    started_at.elapsed().as_millis(),
                    err
                );
                Err(err)
            }
        }
    }

    fn save(&self, tracker: &Tracker) -> StoreResult<()> {
        let started_at = Instant::now();
        let document = to_json(tracker)?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|err| self.io_error(err))?;
            }
        }

        if let Err(err) = fs::write(&self.path, document.as_bytes()) {
            error!(
                "event=tracker_save module=store status=error duration_ms={} error_code=write_failed error={}",
                started_at.elapsed().as_millis(),
                err
            );
            return Err(self.io_error(err));
        }

        info!(
            "event=tracker_save module=store status=ok duration_ms={} categories={} bytes={}",
            started_at.elapsed().as_millis(),
            tracker.len(),
            document.len()
        );
        Ok(())
    }
}
