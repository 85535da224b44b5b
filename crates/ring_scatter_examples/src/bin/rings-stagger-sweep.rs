use ring_scatter::prelude::*;
use ring_scatter_examples::{init_tracing, render_draw_commands_to_png, RenderConfig};

fn main() -> anyhow::Result<()> {
    init_tracing();

    // Same rings, different stagger periods; counts come from the Finished event.
    for modulo in [1usize, 2, 3, 5] {
        let config = RingConfig::new(8.0)
            .with_num_rings(64)
            .with_ring_radius_increment(0.4)
            .with_stagger(modulo, 0.2)
            .with_circle_center_offset(0.5);

        let mut summary = None;
        let mut sink = FnSink::new(|event| {
            if let GenerationEvent::Finished { summary: s } = event {
                summary = Some(s);
            }
        });
        let points = generate_with_events(&config, &mut sink)?;

        if let Some(s) = summary {
            tracing::info!(
                "modulo {}: {} of {} intersecting pairs inside the area.",
                modulo,
                s.points_accepted,
                s.pairs_intersecting
            );
        }

        let bounds = RingGeometry::from_config(&config).bounds;
        let style = DebugDrawStyle::default().with_point_radius(0.06);
        let rc = RenderConfig::new((600, 600), bounds).with_margin(0.5);
        render_draw_commands_to_png(
            &debug_draw_commands(&bounds, &points, &style),
            &rc,
            format!("rings-stagger-{modulo}.png"),
        )?;
    }

    Ok(())
}
