//! Ring-intersection point generation.
//!
//! Two families of concentric circles are laid out left of the area, one centered
//! at its bottom edge and one at its top edge. For every pair of ring indices the
//! crossing point of the two circles is solved and kept if it lies in the area.
//! Output order follows `(ring_a, ring_b)` ascending with `ring_a` outer; duplicate
//! points from distinct pairs are kept.
use glam::Vec2;
use tracing::{debug, info, warn};

use crate::error::Result;
use crate::rings::config::{IntersectionMode, RingConfig};
use crate::rings::geometry::{
    circles_intersect, intersection_point, secondary_intersection_point, RingGeometry,
};
use crate::scatter::events::{EventSink, GenerationEvent, GenerationSummary};

/// Generates the ordered intersection points for `config`.
pub fn generate(config: &RingConfig) -> Result<Vec<Vec2>> {
    generate_with_events(config, &mut ())
}

/// Like [`generate`], reporting progress to `sink`.
pub fn generate_with_events(config: &RingConfig, sink: &mut dyn EventSink) -> Result<Vec<Vec2>> {
    config.validate()?;
    Ok(generate_validated(config, sink))
}

/// A validated configuration, ready to generate points repeatedly.
#[derive(Debug, Clone)]
pub struct RingPointGenerator {
    config: RingConfig,
}

impl RingPointGenerator {
    pub fn try_new(config: RingConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &RingConfig {
        &self.config
    }

    pub fn geometry(&self) -> RingGeometry {
        RingGeometry::from_config(&self.config)
    }

    pub fn generate(&self) -> Vec<Vec2> {
        generate_validated(&self.config, &mut ())
    }

    pub fn generate_with_events(&self, sink: &mut dyn EventSink) -> Vec<Vec2> {
        generate_validated(&self.config, sink)
    }
}

fn generate_validated(config: &RingConfig, sink: &mut dyn EventSink) -> Vec<Vec2> {
    let geometry = RingGeometry::from_config(config);
    let pair_count = config.num_rings.saturating_mul(config.num_rings);

    debug!(
        "Generating ring points | half_length: {} | rings: {} | increment: {} | stagger: {}/{} | mode: {:?}.",
        config.area_half_length,
        config.num_rings,
        config.ring_radius_increment,
        config.stagger_ring_modulo,
        config.stagger_ring_offset,
        config.intersection_mode,
    );
    if config.num_rings == 0 {
        warn!("Ring config has no rings; nothing to generate.");
    }

    sink.send(GenerationEvent::Started {
        config: config.clone(),
        pair_count,
    });

    let mut summary = GenerationSummary::default();
    let mut points = Vec::new();

    for ring_a in 0..config.num_rings {
        for ring_b in 0..config.num_rings {
            summary.pairs_evaluated += 1;

            let radius_a = config.ring_radius_unchecked(ring_a, ring_b);
            let radius_b = config.ring_radius_unchecked(ring_b, ring_a);
            if !circles_intersect(geometry.center_distance, radius_a, radius_b) {
                continue;
            }
            summary.pairs_intersecting += 1;

            for point in pair_points(&geometry, radius_a, radius_b, config.intersection_mode) {
                if geometry.bounds.contains(point) {
                    summary.points_accepted += 1;
                    sink.send(GenerationEvent::PointAccepted {
                        ring_a,
                        ring_b,
                        point,
                    });
                    points.push(point);
                } else {
                    summary.points_rejected += 1;
                    sink.send(GenerationEvent::PointRejected {
                        ring_a,
                        ring_b,
                        point,
                    });
                }
            }
        }
    }

    info!(
        "Ring points generated | pairs: {} | intersecting: {} | accepted: {} | rejected: {}.",
        summary.pairs_evaluated,
        summary.pairs_intersecting,
        summary.points_accepted,
        summary.points_rejected,
    );

    sink.send(GenerationEvent::Finished { summary });

    points
}

/// Solved points of one intersecting ring pair, primary first.
///
/// In [`IntersectionMode::Both`] the mirrored point is skipped when it coincides
/// with the primary one (half chord clamped to zero).
fn pair_points(
    geometry: &RingGeometry,
    radius_a: f32,
    radius_b: f32,
    mode: IntersectionMode,
) -> impl Iterator<Item = Vec2> {
    let primary = intersection_point(
        geometry.center_a,
        geometry.center_delta,
        geometry.center_distance,
        radius_a,
        radius_b,
    );
    let secondary = match mode {
        IntersectionMode::Primary => None,
        IntersectionMode::Both => Some(secondary_intersection_point(
            geometry.center_a,
            geometry.center_delta,
            geometry.center_distance,
            radius_a,
            radius_b,
        ))
        .filter(|p| *p != primary),
    };
    std::iter::once(primary).chain(secondary)
}
