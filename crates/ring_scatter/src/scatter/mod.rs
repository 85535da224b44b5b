//! Everything downstream of point generation: placement, runner, events and debug drawing.
pub mod debug_draw;
pub mod events;
pub mod placement;
pub mod runner;
