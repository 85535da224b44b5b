//! High-level runner: generate ring points, then place them in world space.
use glam::Vec2;
use rand::Rng;
use tracing::info;

use crate::error::Result;
use crate::rings::config::RingConfig;
use crate::rings::generator::RingPointGenerator;
use crate::rings::geometry::AreaBounds;
use crate::scatter::events::EventSink;
use crate::scatter::placement::{place_points, Placement, PlacementConfig};

/// Result of a scatter run.
#[non_exhaustive]
#[derive(Debug, Clone, Default)]
pub struct ScatterResult {
    /// Generated points in area coordinates, in generation order.
    pub points: Vec<Vec2>,
    /// One placement per point, same order.
    pub placements: Vec<Placement>,
}

/// Runs generation and placement as two explicit steps.
#[derive(Debug, Clone)]
pub struct ScatterRunner {
    generator: RingPointGenerator,
    /// Placement settings applied after generation.
    pub placement: PlacementConfig,
}

impl ScatterRunner {
    pub fn try_new(rings: RingConfig, placement: PlacementConfig) -> Result<Self> {
        Ok(Self {
            generator: RingPointGenerator::try_new(rings)?,
            placement,
        })
    }

    pub fn rings(&self) -> &RingConfig {
        self.generator.config()
    }

    pub fn bounds(&self) -> AreaBounds {
        self.generator.geometry().bounds
    }

    /// Generates points only; no randomness involved.
    pub fn points(&self) -> Vec<Vec2> {
        self.generator.generate()
    }

    pub fn run(&self, rng: &mut impl Rng) -> ScatterResult {
        self.run_with_events(rng, &mut ())
    }

    pub fn run_with_events(&self, rng: &mut impl Rng, sink: &mut dyn EventSink) -> ScatterResult {
        let points = self.generator.generate_with_events(sink);
        let placements = place_points(&points, &self.placement, rng);
        info!(
            "Placed {} instances around {}.",
            placements.len(),
            self.placement.origin
        );
        ScatterResult { points, placements }
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::scatter::events::{GenerationEvent, VecSink};

    fn rings() -> RingConfig {
        RingConfig::new(5.0)
            .with_num_rings(12)
            .with_ring_radius_increment(1.0)
            .with_stagger(2, 0.5)
    }

    #[test]
    fn try_new_rejects_invalid_rings() {
        assert!(ScatterRunner::try_new(rings().with_stagger(0, 0.5), PlacementConfig::default())
            .is_err());
    }

    #[test]
    fn placements_follow_points() {
        let origin = Vec3::new(100.0, 2.0, -50.0);
        let runner = ScatterRunner::try_new(rings(), PlacementConfig::new(origin))
            .expect("valid config");
        let mut rng = StdRng::seed_from_u64(42);
        let result = runner.run(&mut rng);

        assert!(!result.points.is_empty());
        assert_eq!(result.points, runner.points());
        assert_eq!(result.points.len(), result.placements.len());
        for (p, placement) in result.points.iter().zip(&result.placements) {
            assert_eq!(placement.position, Vec3::new(p.x, 0.0, p.y) + origin);
        }
    }

    #[test]
    fn run_with_events_forwards_generation_events() {
        let runner =
            ScatterRunner::try_new(rings(), PlacementConfig::default()).expect("valid config");
        let mut sink = VecSink::new();
        let result = runner.run_with_events(&mut StdRng::seed_from_u64(1), &mut sink);

        let accepted = sink
            .as_slice()
            .iter()
            .filter(|e| matches!(e, GenerationEvent::PointAccepted { .. }))
            .count();
        assert_eq!(accepted, result.points.len());
        assert_eq!(runner.bounds(), AreaBounds::centered_square(5.0));
    }
}
