//! Domain error types.

use thiserror::Error;

/// An event in a replayed sequence could not be applied.
///
/// Wraps the aggregate's own error with the zero-based position of the
/// offending event so callers can point at the broken part of a history.
#[derive(Debug, Error)]
#[error("Failed to apply event #{position} ({event_type}): {source}")]
pub struct ReplayError<E>
where
    E: std::error::Error + 'static,
{
    /// Position of the rejected event in the input sequence.
    pub position: usize,

    /// Type name of the rejected event.
    pub event_type: &'static str,

    /// The underlying aggregate error.
    #[source]
    pub source: E,
}

impl<E> ReplayError<E>
where
    E: std::error::Error + 'static,
{
    /// Creates a new replay error.
    pub fn new(position: usize, event_type: &'static str, source: E) -> Self {
        Self {
            position,
            event_type,
            source,
        }
    }

    /// Returns the underlying aggregate error.
    pub fn into_source(self) -> E {
        self.source
    }
}
