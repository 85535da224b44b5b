use ring_scatter::prelude::*;
use ring_scatter_examples::{init_tracing, render_draw_commands_to_png, RenderConfig};

fn main() -> anyhow::Result<()> {
    init_tracing();

    // Centers shifted right of the left edge: the primary point alone leaves gaps.
    let base = RingConfig::new(10.0)
        .with_num_rings(60)
        .with_ring_radius_increment(0.6)
        .with_stagger(3, 0.3)
        .with_circle_center_offset(-6.0);

    let primary = generate(&base)?;
    let both = generate(&base.clone().with_intersection_mode(IntersectionMode::Both))?;
    tracing::info!(
        "Primary only: {} points, both intersections: {} points.",
        primary.len(),
        both.len()
    );

    let bounds = RingGeometry::from_config(&base).bounds;
    let rc = RenderConfig::new((800, 800), bounds)
        .with_margin(1.0)
        .with_background([20, 20, 30]);

    let primary_style = DebugDrawStyle::default().with_point_radius(0.08);
    render_draw_commands_to_png(
        &debug_draw_commands(&bounds, &primary, &primary_style),
        &rc,
        "rings-primary.png",
    )?;

    let both_style = primary_style.with_colors([255, 255, 255, 255], [230, 170, 60, 255]);
    render_draw_commands_to_png(
        &debug_draw_commands(&bounds, &both, &both_style),
        &rc,
        "rings-both.png",
    )
}
