//! Command execution against the tracker service.
//!
//! Each command performs at most one mutation; the service saves after it.
//! Output goes to the supplied writer so commands stay testable.

use anyhow::Result;
use clap::Subcommand;
use habit_core::{HabitTrackerService, ServiceError, TrackerStore};
use std::io::Write;

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Show categories and habits (default)
    Show,
    /// List every scheduled time
    Schedules,
    /// Category management
    Category {
        #[command(subcommand)]
        action: CategoryAction,
    },
    /// Habit management
    Habit {
        #[command(subcommand)]
        action: HabitAction,
    },
    /// Schedule management
    Schedule {
        #[command(subcommand)]
        action: ScheduleAction,
    },
}

#[derive(Debug, Clone, Subcommand)]
pub enum CategoryAction {
    /// Create an empty category
    Add { name: String },
    /// Delete a category and all of its habits
    Remove {
        name: String,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Debug, Clone, Subcommand)]
pub enum HabitAction {
    /// Create a habit in a category
    Add { category: String, name: String },
    /// Delete a habit from a category
    Remove { category: String, name: String },
    /// Record one completion
    Done { category: String, name: String },
}

#[derive(Debug, Clone, Subcommand)]
pub enum ScheduleAction {
    /// Attach an HH:MM time to the first habit with this name
    Add { habit: String, time: String },
}

/// Runs `command`, asking `confirm` before destructive actions.
pub fn run<S, W, C>(
    command: Command,
    service: &mut HabitTrackerService<S>,
    out: &mut W,
    mut confirm: C,
) -> Result<()>
where
    S: TrackerStore,
    W: Write,
    C: FnMut(&str) -> std::io::Result<bool>,
{
    match command {
        Command::Show => write!(out, "{}", service.view())?,
        Command::Schedules => {
            let view = service.view();
            if view.schedule.is_empty() {
                writeln!(out, "No schedules yet.")?;
            }
            for entry in &view.schedule {
                writeln!(out, "{entry}")?;
            }
        }
        Command::Category { action } => match action {
            CategoryAction::Add { name } => {
                service.add_category(&name)?;
                writeln!(out, "Category added: {}", name.trim())?;
            }
            CategoryAction::Remove { name, yes } => {
                if service.tracker().category(name.trim()).is_none() {
                    return Err(ServiceError::CategoryNotFound(name.trim().to_string()).into());
                }
                let prompt = format!(
                    "Delete the category '{}' and all its habits? [y/N] ",
                    name.trim()
                );
                if !yes && !confirm(&prompt)? {
                    writeln!(out, "Cancelled.")?;
                    return Ok(());
                }
                service.remove_category(&name)?;
                writeln!(out, "Category removed: {}", name.trim())?;
            }
        },
        Command::Habit { action } => match action {
            HabitAction::Add { category, name } => {
                service.add_habit(&category, &name)?;
                writeln!(out, "Habit added: {} ({})", name.trim(), category.trim())?;
            }
            HabitAction::Remove { category, name } => {
                service.remove_habit(&category, &name)?;
                writeln!(out, "Habit removed: {} ({})", name.trim(), category.trim())?;
            }
            HabitAction::Done { category, name } => {
                let count = service.complete_habit(&category, &name)?;
                writeln!(out, "{} - Count: {count}", name.trim())?;
            }
        },
        Command::Schedule { action } => match action {
            ScheduleAction::Add { habit, time } => {
                let stored = service.add_schedule(&habit, &time)?;
                writeln!(out, "{} - Time: {stored}", habit.trim())?;
            }
        },
    }
    Ok(())
}
