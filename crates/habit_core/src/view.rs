//! Immutable render snapshot of the tracker tree.
//!
//! Front ends rebuild their display from a fresh `TrackerView` after every
//! mutation instead of patching widgets in place.

use crate::model::tracker::Tracker;
use std::fmt::{Display, Formatter};

/// One habit line as shown in the category list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HabitRow {
    pub name: String,
    pub count: u64,
    pub schedules: Vec<String>,
}

impl HabitRow {
    /// `"<name> - Count: <n>"`, followed by `" | Schedules: a, b"` when any.
    pub fn summary(&self) -> String {
        let mut line = format!("{} - Count: {}", self.name, self.count);
        if !self.schedules.is_empty() {
            line.push_str(" | Schedules: ");
            line.push_str(&self.schedules.join(", "));
        }
        line
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryView {
    pub name: String,
    pub habits: Vec<HabitRow>,
}

/// One entry of the flattened schedule list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleEntry {
    pub habit: String,
    pub time: String,
}

impl Display for ScheduleEntry {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - Time: {}", self.habit, self.time)
    }
}

/// Owned snapshot of the whole tree, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrackerView {
    pub categories: Vec<CategoryView>,
    /// Category order, then habit order, then schedule order.
    pub schedule: Vec<ScheduleEntry>,
}

impl TrackerView {
    /// Category names for a selector, in display order.
    pub fn category_options(&self) -> Vec<&str> {
        self.categories
            .iter()
            .map(|category| category.name.as_str())
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

impl Display for TrackerView {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.categories.is_empty() {
            return writeln!(f, "No categories yet.");
        }
        for category in &self.categories {
            writeln!(f, "{}", category.name)?;
            for habit in &category.habits {
                writeln!(f, "  {}", habit.summary())?;
            }
        }
        Ok(())
    }
}

/// Builds a snapshot of `tracker`.
pub fn render(tracker: &Tracker) -> TrackerView {
    let mut view = TrackerView::default();
    for category in tracker.categories() {
        let mut habits = Vec::with_capacity(category.len());
        for habit in category.habits() {
            view.schedule.extend(habit.schedules().iter().map(|time| ScheduleEntry {
                habit: habit.name().to_string(),
                time: time.clone(),
            }));
            habits.push(HabitRow {
                name: habit.name().to_string(),
                count: habit.count(),
                schedules: habit.schedules().to_vec(),
            });
        }
        view.categories.push(CategoryView {
            name: category.name().to_string(),
            habits,
        });
    }
    view
}
