//! Core domain logic for the habit tracker.
//! This crate is the single source of truth for tracker invariants.

pub mod logging;
pub mod model;
pub mod service;
pub mod store;
pub mod view;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::category::Category;
pub use model::habit::Habit;
pub use model::schedule::{normalize_schedule_time, ScheduleTimeError};
pub use model::tracker::Tracker;
pub use service::tracker_service::{
    HabitTrackerService, ServiceError, ServiceResult, StartupState,
};
pub use store::json_store::{JsonFileStore, DEFAULT_DATA_FILE_NAME};
pub use store::{LoadOutcome, StoreError, StoreResult, TrackerStore};
pub use view::{render, CategoryView, HabitRow, ScheduleEntry, TrackerView};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
