use rand::rngs::StdRng;
use rand::SeedableRng;
use ring_scatter::prelude::*;
use ring_scatter_examples::{init_tracing, render_draw_commands_to_png, RenderConfig};

fn main() -> anyhow::Result<()> {
    init_tracing();

    // A 20x20 patch of grass, rings every 0.5 units, every other ring staggered.
    let rings = RingConfig::new(10.0)
        .with_num_rings(80)
        .with_ring_radius_increment(0.5)
        .with_stagger(2, 0.25)
        .with_circle_center_offset(1.0);

    let runner = ScatterRunner::try_new(rings, PlacementConfig::default())?;
    let mut rng = StdRng::seed_from_u64(12345);
    let result = runner.run(&mut rng);

    if let Some(first) = result.placements.first() {
        tracing::info!(
            "First instance at {} with yaw {:.1} degrees.",
            first.position,
            first.yaw_degrees
        );
    }

    let style = DebugDrawStyle::default().with_point_radius(0.08);
    let commands = debug_draw_commands(&runner.bounds(), &result.points, &style);
    let rc = RenderConfig::new((800, 800), runner.bounds())
        .with_margin(1.0)
        .with_background([28, 28, 28]);

    render_draw_commands_to_png(&commands, &rc, "rings-basic.png")
}
