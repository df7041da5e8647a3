//! Runtime configuration for the CLI.
//!
//! Every option can come from a flag or an environment variable; flags win.

use clap::Args;
use directories::ProjectDirs;
use habit_core::{default_log_level, DEFAULT_DATA_FILE_NAME};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Args)]
pub struct GlobalArgs {
    /// Tracker state file
    #[arg(long, global = true, env = "HABIT_TRACKER_DATA", default_value = DEFAULT_DATA_FILE_NAME)]
    pub data_file: PathBuf,

    /// Directory for rolling log files
    #[arg(long, global = true, env = "HABIT_TRACKER_LOG_DIR")]
    pub log_dir: Option<PathBuf>,

    /// Log level (trace|debug|info|warn|error)
    #[arg(long, global = true, env = "HABIT_TRACKER_LOG_LEVEL")]
    pub log_level: Option<String>,
}

/// Fully resolved settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    pub data_file: PathBuf,
    /// `None` when no directory was given and no platform default exists.
    pub log_dir: Option<PathBuf>,
    pub log_level: String,
}

impl CliConfig {
    pub fn resolve(args: &GlobalArgs, cwd: &Path) -> Self {
        let log_dir = args
            .log_dir
            .clone()
            .or_else(default_log_dir)
            .map(|dir| absolutize(dir, cwd));
        Self {
            data_file: args.data_file.clone(),
            log_dir,
            log_level: args
                .log_level
                .clone()
                .unwrap_or_else(|| default_log_level().to_string()),
        }
    }
}

fn default_log_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "habit-tracker").map(|dirs| dirs.data_local_dir().join("logs"))
}

// init_logging only accepts absolute directories.
fn absolutize(path: PathBuf, cwd: &Path) -> PathBuf {
    if path.is_absolute() {
        path
    } else {
        cwd.join(path)
    }
}
