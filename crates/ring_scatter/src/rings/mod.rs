//! Ring-intersection point generation in a square 2D area.
//!
//! [`config`] holds the parameters, [`geometry`] the pure helpers (ring radii,
//! circle intersection, containment) and [`generator`] the iteration over ring pairs.
pub mod config;
pub mod generator;
pub mod geometry;

pub use config::{IntersectionMode, RingConfig};
pub use generator::{generate, generate_with_events, RingPointGenerator};
pub use geometry::{AreaBounds, RingGeometry};
