//! Category domain model.
//!
//! # Responsibility
//! - Own an insertion-ordered set of uniquely named habits.
//!
//! # Invariants
//! - No two habits in one category share a name.
//! - Removing a habit keeps the relative order of the remaining ones.

use crate::model::habit::Habit;
use indexmap::IndexMap;

/// Named grouping of habits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    name: String,
    habits: IndexMap<String, Habit>,
}

impl Category {
    /// Creates an empty category.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            habits: IndexMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Inserts `habit` under its own name.
    ///
    /// Returns `false` without mutation when the name is already taken.
    pub fn add_habit(&mut self, habit: Habit) -> bool {
        if self.habits.contains_key(habit.name()) {
            return false;
        }
        self.habits.insert(habit.name().to_string(), habit);
        true
    }

    /// Removes the habit named `name`; returns whether anything was removed.
    pub fn remove_habit(&mut self, name: &str) -> bool {
        self.habits.shift_remove(name).is_some()
    }

    pub fn habit(&self, name: &str) -> Option<&Habit> {
        self.habits.get(name)
    }

    pub fn habit_mut(&mut self, name: &str) -> Option<&mut Habit> {
        self.habits.get_mut(name)
    }

    /// Iterates habits in insertion order.
    pub fn habits(&self) -> impl Iterator<Item = &Habit> {
        self.habits.values()
    }

    pub fn len(&self) -> usize {
        self.habits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.habits.is_empty()
    }
}
