//! Tracker use-case service.
//!
//! # Responsibility
//! - Load the tracker once at startup and report first-run state.
//! - Validate user input (trimmed names, schedule times) above the model.
//! - Save the whole tree after every successful mutation.
//!
//! # Invariants
//! - Rejected operations never mutate the tree and never save.
//! - Schedule times are validated before the model is touched.
//! - Callers only get read-only access to the tree.

use crate::model::schedule::{normalize_schedule_time, ScheduleTimeError};
use crate::model::tracker::Tracker;
use crate::store::{StoreError, TrackerStore};
use crate::view::{render, TrackerView};
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Errors from tracker use-case operations.
#[derive(Debug)]
pub enum ServiceError {
    /// Category name is blank after trim.
    InvalidCategoryName,
    /// Category name is already taken.
    CategoryExists(String),
    /// Target category does not exist.
    CategoryNotFound(String),
    /// Habit name is already taken inside the category.
    HabitExists { category: String, habit: String },
    /// Target habit does not exist.
    HabitNotFound(String),
    /// Schedule time failed validation.
    InvalidTime(ScheduleTimeError),
    /// Persistence failure.
    Store(StoreError),
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidCategoryName => write!(f, "category name must not be blank"),
            Self::CategoryExists(name) => write!(f, "category already exists: {name}"),
            Self::CategoryNotFound(name) => write!(f, "category not found: {name}"),
            Self::HabitExists { category, habit } => {
                write!(f, "habit already exists in {category}: {habit}")
            }
            Self::HabitNotFound(name) => write!(f, "habit not found: {name}"),
            Self::InvalidTime(err) => write!(f, "{err}"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            // Transparent wrappers: `Display` already prints the inner error.
            Self::InvalidTime(err) => err.source(),
            Self::Store(err) => err.source(),
            _ => None,
        }
    }
}

impl From<StoreError> for ServiceError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

impl From<ScheduleTimeError> for ServiceError {
    fn from(value: ScheduleTimeError) -> Self {
        Self::InvalidTime(value)
    }
}

/// How the tracker was populated at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartupState {
    /// Prior state was loaded from storage.
    Restored,
    /// Nothing was stored yet; the tracker starts empty.
    FirstRun,
}

/// Tracker facade that flushes to storage after each mutation.
pub struct HabitTrackerService<S: TrackerStore> {
    store: S,
    tracker: Tracker,
}

impl<S: TrackerStore> HabitTrackerService<S> {
    /// Loads persisted state from `store`.
    ///
    /// # Errors
    /// - Returns `Store` when the file exists but cannot be read or decoded.
    pub fn open(store: S) -> ServiceResult<(Self, StartupState)> {
        let mut tracker = Tracker::new();
        let state = if tracker.load_from(&store)? {
            StartupState::Restored
        } else {
            StartupState::FirstRun
        };
        info!(
            "event=tracker_open module=service status=ok state={:?} categories={}",
            state,
            tracker.len()
        );
        Ok((Self { store, tracker }, state))
    }

    /// Read-only view of the current tree.
    pub fn tracker(&self) -> &Tracker {
        &self.tracker
    }

    /// Renders a snapshot of the current tree.
    pub fn view(&self) -> TrackerView {
        render(&self.tracker)
    }

    pub fn add_category(&mut self, name: &str) -> ServiceResult<()> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ServiceError::InvalidCategoryName);
        }
        if !self.tracker.add_category(name) {
            return Err(ServiceError::CategoryExists(name.to_string()));
        }
        self.flush("add_category")
    }

    /// Removes a category together with all of its habits.
    pub fn remove_category(&mut self, name: &str) -> ServiceResult<()> {
        let name = name.trim();
        if !self.tracker.remove_category(name) {
            return Err(ServiceError::CategoryNotFound(name.to_string()));
        }
        self.flush("remove_category")
    }

    pub fn add_habit(&mut self, category: &str, habit: &str) -> ServiceResult<()> {
        let (category, habit) = (category.trim(), habit.trim());
        self.ensure_category(category)?;
        if !self.tracker.add_habit(category, habit) {
            return Err(ServiceError::HabitExists {
                category: category.to_string(),
                habit: habit.to_string(),
            });
        }
        self.flush("add_habit")
    }

    pub fn remove_habit(&mut self, category: &str, habit: &str) -> ServiceResult<()> {
        let (category, habit) = (category.trim(), habit.trim());
        self.ensure_category(category)?;
        if !self.tracker.remove_habit(category, habit) {
            return Err(ServiceError::HabitNotFound(habit.to_string()));
        }
        self.flush("remove_habit")
    }

    /// Records one completion and returns the new count.
    pub fn complete_habit(&mut self, category: &str, habit: &str) -> ServiceResult<u64> {
        let (category, habit) = (category.trim(), habit.trim());
        let target = self
            .tracker
            .category_mut(category)
            .ok_or_else(|| ServiceError::CategoryNotFound(category.to_string()))?
            .habit_mut(habit)
            .ok_or_else(|| ServiceError::HabitNotFound(habit.to_string()))?;
        target.increment();
        let count = target.count();
        self.flush("complete_habit")?;
        Ok(count)
    }

    /// Attaches a time-of-day schedule to the first habit named `habit`.
    ///
    /// Returns the normalized `HH:MM` value that was stored. Adding a time
    /// that is already present succeeds without changing the list.
    pub fn add_schedule(&mut self, habit: &str, time: &str) -> ServiceResult<String> {
        let habit = habit.trim();
        let time = normalize_schedule_time(time)?;
        self.tracker
            .find_habit_by_name_mut(habit)
            .ok_or_else(|| ServiceError::HabitNotFound(habit.to_string()))?
            .add_schedule(time.as_str());
        self.flush("add_schedule")?;
        Ok(time)
    }

    fn ensure_category(&self, name: &str) -> ServiceResult<()> {
        if self.tracker.category(name).is_none() {
            return Err(ServiceError::CategoryNotFound(name.to_string()));
        }
        Ok(())
    }

    fn flush(&self, operation: &str) -> ServiceResult<()> {
        if let Err(err) = self.tracker.save_to(&self.store) {
            warn!(
                "event=tracker_flush module=service status=error op={} error={}",
                operation, err
            );
            return Err(err.into());
        }
        Ok(())
    }
}
