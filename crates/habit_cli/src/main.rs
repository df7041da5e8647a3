//! Habit tracker command-line front end.
//!
//! Loads the tracker once, runs a single command, and relies on the core
//! service to save after the mutation.

use anyhow::{Context, Result};
use clap::Parser;
use habit_core::{init_logging, HabitTrackerService, JsonFileStore, StartupState};
use log::info;
use std::io::{self, BufRead, Write};

mod commands;
mod config;

use commands::Command;
use config::{CliConfig, GlobalArgs};

#[derive(Parser)]
#[command(name = "habit-tracker", version, about = "Track habits, counts, and daily schedules")]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Option<Command>,
}

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let cwd = std::env::current_dir().context("failed to read working directory")?;
    let config = CliConfig::resolve(&cli.global, &cwd);
    start_logging(&config);

    let store = JsonFileStore::new(&config.data_file);
    let (mut service, state) = HabitTrackerService::open(store)
        .with_context(|| format!("failed to load `{}`", config.data_file.display()))?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if state == StartupState::FirstRun {
        writeln!(out, "Welcome to Habit Tracker!")?;
    }

    let command = cli.command.unwrap_or(Command::Show);
    info!(
        "event=cli_command module=cli status=start first_run={}",
        state == StartupState::FirstRun
    );
    commands::run(command, &mut service, &mut out, confirm)
}

// Logging problems must not block tracking.
fn start_logging(config: &CliConfig) {
    let Some(log_dir) = config.log_dir.as_deref() else {
        return;
    };
    let Some(log_dir) = log_dir.to_str() else {
        eprintln!("warning: log directory is not valid UTF-8; logging disabled");
        return;
    };
    if let Err(err) = init_logging(&config.log_level, log_dir) {
        eprintln!("warning: {err}; logging disabled");
    }
}

fn confirm(prompt: &str) -> io::Result<bool> {
    let mut stderr = io::stderr();
    write!(stderr, "{prompt}")?;
    stderr.flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes"))
}
