//! Driver error types.

use std::path::PathBuf;

use domain::{ReplayError, ShoppingCartError};
use thiserror::Error;

/// Errors that can stop a replay run.
#[derive(Debug, Error)]
pub enum CliError {
    /// More than one positional argument was given.
    #[error("Unexpected argument {}: at most one events file may be given", .0.display())]
    UnexpectedArgument(PathBuf),

    /// The events file could not be read.
    #[error("Failed to read events from {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The events file is not a JSON array of shopping cart events.
    #[error("Failed to parse events from {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The event sequence could not be replayed.
    #[error(transparent)]
    Replay(#[from] ReplayError<ShoppingCartError>),

    /// The resulting cart could not be rendered.
    #[error("Failed to render cart: {0}")]
    Render(#[source] serde_json::Error),
}
