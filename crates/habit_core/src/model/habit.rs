//! Habit domain model.
//!
//! # Responsibility
//! - Hold one habit's completion counter and its time-of-day schedules.
//!
//! # Invariants
//! - `count` only grows through `increment`.
//! - `schedules` added through `add_schedule` stay de-duplicated and sorted.
//! - No format validation happens here; callers normalize times first
//!   (see `model::schedule`).

/// One tracked recurring activity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Habit {
    name: String,
    count: u64,
    schedules: Vec<String>,
}

impl Habit {
    /// Creates a zero-state habit with no schedules.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            count: 0,
            schedules: Vec::new(),
        }
    }

    /// Rebuilds a habit from persisted values without touching them.
    ///
    /// Used by load paths only; `schedules` is kept verbatim.
    pub fn restore(name: impl Into<String>, count: u64, schedules: Vec<String>) -> Self {
        Self {
            name: name.into(),
            count,
            schedules,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn schedules(&self) -> &[String] {
        &self.schedules
    }

    /// Records one completion. Saturates at `u64::MAX`.
    pub fn increment(&mut self) {
        self.count = self.count.saturating_add(1);
    }

    /// Adds a time-of-day schedule.
    ///
    /// No-op when `time` is already present. The list is re-sorted after
    /// every insertion, so zero-padded `HH:MM` values stay chronological.
    pub fn add_schedule(&mut self, time: impl Into<String>) {
        let time = time.into();
        if self.schedules.contains(&time) {
            return;
        }
        self.schedules.push(time);
        self.schedules.sort();
    }
}
