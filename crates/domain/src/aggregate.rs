//! Core aggregate and domain event traits.

use common::AggregateId;
use serde::{Serialize, de::DeserializeOwned};

use crate::error::ReplayError;

/// Trait for domain events.
///
/// Domain events represent facts that have happened in the domain.
/// They are immutable and should be named in past tense.
pub trait DomainEvent: Serialize + DeserializeOwned + Send + Sync + Clone {
    /// Returns the event type name.
    fn event_type(&self) -> &'static str;

    /// Returns the identity of the aggregate this event belongs to.
    fn aggregate_id(&self) -> AggregateId;
}

/// Trait for aggregates whose state is derived from their event history.
///
/// State is never stored directly. It is reconstructed by folding the
/// aggregate's events, in order, starting from "no aggregate yet":
///
/// ```text
/// None ──e1──► Some(s1) ──e2──► Some(s2) ── … ──en──► Some(sn)
/// ```
///
/// Every step produces a new value; earlier snapshots are left untouched so
/// callers may keep them as history.
pub trait Aggregate: Clone + Send + Sync + Sized {
    /// The type of events this aggregate consumes.
    type Event: DomainEvent;

    /// The type of errors applying an event can produce.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Returns the aggregate type name.
    fn aggregate_type() -> &'static str;

    /// Returns the aggregate's unique identifier.
    fn id(&self) -> AggregateId;

    /// Applies one event to the previous snapshot, returning the next one.
    ///
    /// `previous` is `None` until the creating event has been applied.
    /// This must be pure and deterministic: the same snapshot and event
    /// always yield the same result.
    fn apply(previous: Option<&Self>, event: &Self::Event) -> Result<Self, Self::Error>;

    /// Rebuilds the aggregate by applying `events` in the order given.
    ///
    /// Returns `Ok(None)` for an empty sequence. The first event that cannot
    /// be applied aborts the replay with its position in the sequence.
    #[tracing::instrument(level = "debug", skip_all, fields(aggregate_type = Self::aggregate_type()))]
    fn replay<'a, I>(events: I) -> Result<Option<Self>, ReplayError<Self::Error>>
    where
        I: IntoIterator<Item = &'a Self::Event>,
        Self::Event: 'a,
    {
        let mut current: Option<Self> = None;
        let mut applied = 0usize;
        for (position, event) in events.into_iter().enumerate() {
            current = Some(apply_at::<Self>(current.as_ref(), position, event)?);
            applied += 1;
        }

        tracing::debug!(applied, "replay finished");
        Ok(current)
    }

    /// Rebuilds the aggregate and returns every intermediate snapshot.
    ///
    /// The snapshot at index `i` is the state after applying event `i`.
    fn replay_history<'a, I>(events: I) -> Result<Vec<Self>, ReplayError<Self::Error>>
    where
        I: IntoIterator<Item = &'a Self::Event>,
        Self::Event: 'a,
    {
        let mut history: Vec<Self> = Vec::new();
        for (position, event) in events.into_iter().enumerate() {
            let next = apply_at::<Self>(history.last(), position, event)?;
            history.push(next);
        }
        Ok(history)
    }
}

fn apply_at<A: Aggregate>(
    previous: Option<&A>,
    position: usize,
    event: &A::Event,
) -> Result<A, ReplayError<A::Error>> {
    A::apply(previous, event).map_err(|source| {
        metrics::counter!(
            "aggregate_replays_rejected_total",
            "aggregate_type" => A::aggregate_type()
        )
        .increment(1);
        tracing::warn!(
            position,
            event_type = event.event_type(),
            aggregate_id = %event.aggregate_id(),
            error = %source,
            "replay rejected event"
        );
        ReplayError::new(position, event.event_type(), source)
    })
}
