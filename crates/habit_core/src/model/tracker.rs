//! Tracker aggregate root.
//!
//! # Responsibility
//! - Own every category (and, through them, every habit) exclusively.
//! - Expose boolean-result CRUD operations for the presentation layer.
//! - Bridge to persistence through `TrackerStore`.
//!
//! # Invariants
//! - Category names are unique and never empty.
//! - Removing a category drops all of its habits.
//! - A successful load replaces the whole category mapping.

use crate::model::category::Category;
use crate::model::habit::Habit;
use crate::store::{LoadOutcome, StoreResult, TrackerStore};
use indexmap::IndexMap;

/// Root collection of categories.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tracker {
    categories: IndexMap<String, Category>,
}

impl Tracker {
    /// Creates an empty tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty category.
    ///
    /// Returns `false` for an empty name or a name that already exists.
    pub fn add_category(&mut self, name: &str) -> bool {
        if name.is_empty() || self.categories.contains_key(name) {
            return false;
        }
        self.categories.insert(name.to_string(), Category::new(name));
        true
    }

    /// Removes a category and every habit it owns.
    pub fn remove_category(&mut self, name: &str) -> bool {
        self.categories.shift_remove(name).is_some()
    }

    /// Creates a zero-state habit under an existing category.
    ///
    /// Fails when the category is missing or already holds `habit_name`.
    pub fn add_habit(&mut self, category_name: &str, habit_name: &str) -> bool {
        match self.categories.get_mut(category_name) {
            Some(category) => category.add_habit(Habit::new(habit_name)),
            None => false,
        }
    }

    /// Removes a habit from an existing category.
    pub fn remove_habit(&mut self, category_name: &str, habit_name: &str) -> bool {
        match self.categories.get_mut(category_name) {
            Some(category) => category.remove_habit(habit_name),
            None => false,
        }
    }

    /// Returns the first habit named `habit_name`, scanning categories in
    /// insertion order.
    ///
    /// Habit names are only unique per category, so when several categories
    /// hold the same name the earliest category wins.
    pub fn find_habit_by_name(&self, habit_name: &str) -> Option<&Habit> {
        self.categories
            .values()
            .find_map(|category| category.habit(habit_name))
    }

    /// Mutable variant of [`Tracker::find_habit_by_name`].
    pub fn find_habit_by_name_mut(&mut self, habit_name: &str) -> Option<&mut Habit> {
        self.categories
            .values_mut()
            .find_map(|category| category.habit_mut(habit_name))
    }

    pub fn category(&self, name: &str) -> Option<&Category> {
        self.categories.get(name)
    }

    pub fn category_mut(&mut self, name: &str) -> Option<&mut Category> {
        self.categories.get_mut(name)
    }

    /// Iterates categories in insertion order.
    pub fn categories(&self) -> impl Iterator<Item = &Category> {
        self.categories.values()
    }

    pub fn category_names(&self) -> Vec<&str> {
        self.categories.keys().map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Replaces the entire category mapping.
    ///
    /// Categories with an empty name are dropped. Later entries win on
    /// duplicate names, keeping the first position.
    pub(crate) fn replace_categories(&mut self, categories: impl IntoIterator<Item = Category>) {
        self.categories = categories
            .into_iter()
            .filter(|category| !category.name().is_empty())
            .map(|category| (category.name().to_string(), category))
            .collect();
    }

    /// Writes the full tree through `store`.
    pub fn save_to<S: TrackerStore + ?Sized>(&self, store: &S) -> StoreResult<()> {
        store.save(self)
    }

    /// Replaces this tracker's state with the persisted one.
    ///
    /// Returns `Ok(false)` when there is no prior state; the tracker is left
    /// untouched in that case.
    pub fn load_from<S: TrackerStore + ?Sized>(&mut self, store: &S) -> StoreResult<bool> {
        match store.load()? {
            LoadOutcome::Loaded(loaded) => {
                self.categories = loaded.categories;
                Ok(true)
            }
            LoadOutcome::NoPriorState => Ok(false),
        }
    }
}
