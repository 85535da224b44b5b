//! Event types and sinks for observing generation runs.
//!
//! This module defines [`GenerationEvent`] and a set of sinks to emit, collect,
//! or forward events while executing [`crate::rings::generator::generate_with_events`]
//! or [`crate::scatter::runner::ScatterRunner::run_with_events`].
use glam::Vec2;

use crate::rings::config::RingConfig;

/// Describes events emitted while generating ring intersection points.
#[non_exhaustive]
#[derive(Debug, Clone)]
pub enum GenerationEvent {
    /// Emitted once the configuration has been validated.
    Started {
        /// The configuration used.
        config: RingConfig,
        /// Number of ring pairs that will be evaluated.
        pair_count: usize,
    },

    /// Emitted when an intersection point lies inside the area and is kept.
    PointAccepted {
        /// Ring index in family A.
        ring_a: usize,
        /// Ring index in family B.
        ring_b: usize,
        /// The accepted point.
        point: Vec2,
    },

    /// Emitted when an intersection point falls outside the area.
    PointRejected {
        /// Ring index in family A.
        ring_a: usize,
        /// Ring index in family B.
        ring_b: usize,
        /// The rejected point.
        point: Vec2,
    },

    /// Emitted after all ring pairs were evaluated.
    Finished {
        /// Counters for the whole run.
        summary: GenerationSummary,
    },
}

/// Counters collected during a generation run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenerationSummary {
    /// Ring pairs evaluated.
    pub pairs_evaluated: usize,
    /// Ring pairs whose circles cross at two points.
    pub pairs_intersecting: usize,
    /// Points kept.
    pub points_accepted: usize,
    /// Points solved but outside the area.
    pub points_rejected: usize,
}

/// A generic event sink that accepts [`GenerationEvent`]s.
pub trait EventSink {
    fn send(&mut self, event: GenerationEvent);
}

/// A no-op event sink.
impl EventSink for () {
    #[inline]
    fn send(&mut self, _event: GenerationEvent) {}
}

/// An event sink that forwards to a user-provided closure.
pub struct FnSink<F>
where
    F: FnMut(GenerationEvent),
{
    f: F,
}

impl<F> FnSink<F>
where
    F: FnMut(GenerationEvent),
{
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F> EventSink for FnSink<F>
where
    F: FnMut(GenerationEvent),
{
    #[inline]
    fn send(&mut self, event: GenerationEvent) {
        (self.f)(event);
    }
}

/// An event sink that collects all events in a `Vec`.
#[derive(Default)]
pub struct VecSink {
    events: Vec<GenerationEvent>,
}

impl VecSink {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn into_inner(self) -> Vec<GenerationEvent> {
        self.events
    }

    pub fn as_slice(&self) -> &[GenerationEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl EventSink for VecSink {
    #[inline]
    fn send(&mut self, event: GenerationEvent) {
        self.events.push(event);
    }
}
