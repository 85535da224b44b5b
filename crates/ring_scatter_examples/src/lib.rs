#![forbid(unsafe_code)]

mod rendering;

pub use rendering::{init_tracing, render_draw_commands_to_png, RenderConfig};
