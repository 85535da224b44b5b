#![forbid(unsafe_code)]
//! ring_scatter: deterministic ring-intersection point scattering.
//!
//! Modules:
//! - rings: configuration, geometry helpers and the point generator
//! - scatter: placement into world space, runner, events, debug drawing
//!
//! Generation is a pure function of a [`rings::RingConfig`]; randomness only enters
//! during placement.
pub mod error;
pub mod rings;
pub mod scatter;

/// Convenient re-exports for common types. Import with `use ring_scatter::prelude::*;`.
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::rings::config::{IntersectionMode, RingConfig};
    pub use crate::rings::generator::{generate, generate_with_events, RingPointGenerator};
    pub use crate::rings::geometry::{
        circles_intersect, intersection_point, ring_radius, secondary_intersection_point,
        AreaBounds, RingGeometry,
    };
    pub use crate::scatter::debug_draw::{debug_draw_commands, DebugDrawStyle, DrawCommand};
    pub use crate::scatter::events::{
        EventSink, FnSink, GenerationEvent, GenerationSummary, VecSink,
    };
    pub use crate::scatter::placement::{place_points, GroundPlane, Placement, PlacementConfig};
    pub use crate::scatter::runner::{ScatterResult, ScatterRunner};
}
