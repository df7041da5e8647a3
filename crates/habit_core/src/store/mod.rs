//! Persistence codec for the tracker tree.
//!
//! # Responsibility
//! - Define the storage contract used by `Tracker::save_to`/`load_from`.
//! - Keep file format details behind the `TrackerStore` boundary.
//!
//! # Invariants
//! - Save always writes the full tree; there are no partial writes.
//! - A missing destination is "no prior state", never an error.
//! - Malformed persisted state is rejected instead of masked.

use crate::model::tracker::Tracker;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

pub mod json_store;

pub type StoreResult<T> = Result<T, StoreError>;

/// Errors from tracker persistence.
#[derive(Debug)]
pub enum StoreError {
    /// Destination could not be read or written.
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Persisted document is not valid JSON or does not match the layout.
    Malformed(serde_json::Error),
    /// Tracker could not be encoded.
    Encode(serde_json::Error),
    /// Document parsed but violates a tracker invariant.
    InvalidData(String),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "tracker file `{}` is not accessible: {source}", path.display())
            }
            Self::Malformed(err) => write!(f, "tracker file is malformed: {err}"),
            Self::Encode(err) => write!(f, "failed to encode tracker: {err}"),
            Self::InvalidData(message) => write!(f, "invalid tracker data: {message}"),
        }
    }
}

// `Display` already embeds the inner error, so no source is exposed.
impl Error for StoreError {}

/// Result of reading persisted state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// A tree was reconstructed from storage.
    Loaded(Tracker),
    /// Nothing has been saved yet (first run).
    NoPriorState,
}

/// Storage backend for the whole tracker tree.
pub trait TrackerStore {
    fn load(&self) -> StoreResult<LoadOutcome>;
    fn save(&self, tracker: &Tracker) -> StoreResult<()>;
}
