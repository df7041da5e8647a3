//! Habit tracking domain model.
//!
//! # Responsibility
//! - Define the three-level ownership tree: tracker -> categories -> habits.
//! - Enforce name uniqueness at every level of the tree.
//!
//! # Invariants
//! - Category names are unique and non-empty within one tracker.
//! - Habit names are unique within one category.
//! - Iteration order is insertion order at every level.

pub mod category;
pub mod habit;
pub mod schedule;
pub mod tracker;
