//! Geometric helpers: ring radii, circle-circle intersection and area containment.
use glam::Vec2;

use crate::rings::config::RingConfig;

/// Radius of ring `ring_index` in one family.
///
/// The stagger offset is applied when the *other* family's ring index is a
/// multiple of `stagger_ring_modulo`, so `(0, 0)` is always staggered.
///
/// # Panics
///
/// Panics if `stagger_ring_modulo` is zero. [`RingConfig::validate`] rejects such
/// configurations and [`RingConfig::ring_radius`] returns an error instead.
#[inline]
pub fn ring_radius(
    ring_index: usize,
    other_ring_index: usize,
    ring_radius_increment: f32,
    stagger_ring_modulo: usize,
    stagger_ring_offset: f32,
) -> f32 {
    debug_assert!(stagger_ring_modulo != 0, "stagger_ring_modulo must be != 0");
    let stagger = if other_ring_index % stagger_ring_modulo == 0 {
        stagger_ring_offset
    } else {
        0.0
    };
    ring_index as f32 * ring_radius_increment + stagger
}

/// Whether two circles cross at exactly two points.
///
/// Tangent circles and circles contained in one another do not intersect.
#[inline]
pub fn circles_intersect(center_distance: f32, radius_a: f32, radius_b: f32) -> bool {
    radius_a + radius_b > center_distance && center_distance > (radius_a - radius_b).abs()
}

/// Returns `(a, h)`: the distance from center A along the center line to the chord,
/// and the half chord length. `h` is clamped to zero instead of going NaN.
#[inline]
fn chord_offsets(center_distance: f32, radius_a: f32, radius_b: f32) -> (f32, f32) {
    debug_assert!(center_distance > 0.0, "center_distance must be > 0");
    let a = (radius_a * radius_a - radius_b * radius_b + center_distance * center_distance)
        / (2.0 * center_distance);
    let h = (radius_a * radius_a - a * a).max(0.0).sqrt();
    (a, h)
}

/// `(dx, dy) -> (dy, -dx)`, a clockwise quarter turn.
#[inline]
fn perpendicular(v: Vec2) -> Vec2 {
    Vec2::new(v.y, -v.x)
}

/// Intersection point on the clockwise side of the line from center A to center B.
///
/// `center_delta` points from center A to center B and `center_distance` is its length.
pub fn intersection_point(
    center_a: Vec2,
    center_delta: Vec2,
    center_distance: f32,
    radius_a: f32,
    radius_b: f32,
) -> Vec2 {
    let (a, h) = chord_offsets(center_distance, radius_a, radius_b);
    center_a + (center_delta * a + perpendicular(center_delta) * h) / center_distance
}

/// The other intersection point, mirrored across the center line.
pub fn secondary_intersection_point(
    center_a: Vec2,
    center_delta: Vec2,
    center_distance: f32,
    radius_a: f32,
    radius_b: f32,
) -> Vec2 {
    let (a, h) = chord_offsets(center_distance, radius_a, radius_b);
    center_a + (center_delta * a - perpendicular(center_delta) * h) / center_distance
}

/// Axis-aligned rectangle with half-open containment on the upper edges.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AreaBounds {
    pub min: Vec2,
    pub max: Vec2,
}

impl AreaBounds {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Square of side `2 * half_length` centered at the origin.
    pub fn centered_square(half_length: f32) -> Self {
        Self::new(Vec2::splat(-half_length), Vec2::splat(half_length))
    }

    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    /// `min <= p < max` on both axes: the left and bottom edges are inside,
    /// the right and top edges are outside.
    #[inline]
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.min.x && p.x < self.max.x && p.y >= self.min.y && p.y < self.max.y
    }
}

/// Derived geometry of both ring families for one configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RingGeometry {
    pub center_a: Vec2,
    pub center_delta: Vec2,
    pub center_distance: f32,
    pub bounds: AreaBounds,
}

impl RingGeometry {
    pub fn from_config(config: &RingConfig) -> Self {
        let half = config.area_half_length;
        let center_a = Vec2::new(-half - config.circle_center_offset, -half);
        let center_delta = Vec2::new(0.0, half * 2.0);
        Self {
            center_a,
            center_delta,
            center_distance: center_delta.length(),
            bounds: AreaBounds::centered_square(half),
        }
    }

    pub fn center_b(&self) -> Vec2 {
        self.center_a + self.center_delta
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-4;

    #[test]
    fn ring_radius_stagger_follows_other_index() {
        // ring 2 of this family, other family at ring 3 / 4 with modulo 2
        assert_eq!(ring_radius(2, 3, 1.5, 2, 0.75), 3.0);
        assert_eq!(ring_radius(2, 4, 1.5, 2, 0.75), 3.75);
        // swapping which index drives the stagger changes the result
        assert_ne!(ring_radius(3, 2, 1.5, 2, 0.75), ring_radius(3, 3, 1.5, 2, 0.75));
    }

    #[test]
    fn innermost_pair_is_always_staggered() {
        for modulo in 1..6 {
            assert_eq!(ring_radius(0, 0, 4.0, modulo, 2.5), 2.5);
        }
    }

    #[test]
    fn circles_intersect_is_symmetric() {
        let radii = [0.0, 1.0, 2.5, 5.0, 10.0, 15.0, 30.0];
        for d in [0.0, 1.0, 5.0, 20.0] {
            for &ra in &radii {
                for &rb in &radii {
                    assert_eq!(circles_intersect(d, ra, rb), circles_intersect(d, rb, ra));
                }
            }
        }
    }

    #[test]
    fn tangent_circles_do_not_intersect() {
        // external tangency
        assert!(!circles_intersect(20.0, 8.0, 12.0));
        // internal tangency
        assert!(!circles_intersect(4.0, 10.0, 6.0));
        assert!(circles_intersect(19.5, 8.0, 12.0));
    }

    #[test]
    fn separated_or_contained_circles_do_not_intersect() {
        assert!(!circles_intersect(20.0, 5.0, 5.0));
        assert!(!circles_intersect(2.0, 10.0, 3.0));
    }

    #[test]
    fn coincident_centers_never_reach_solver() {
        for r in [0.5, 1.0, 10.0] {
            assert!(!circles_intersect(0.0, r, r));
        }
    }

    #[test]
    fn intersection_points_lie_on_both_circles() {
        let center_a = Vec2::new(-13.0, -10.0);
        let delta = Vec2::new(0.0, 20.0);
        let (ra, rb) = (17.0, 11.0);
        assert!(circles_intersect(20.0, ra, rb));

        for p in [
            intersection_point(center_a, delta, 20.0, ra, rb),
            secondary_intersection_point(center_a, delta, 20.0, ra, rb),
        ] {
            assert!((p.distance(center_a) - ra).abs() < EPS);
            assert!((p.distance(center_a + delta) - rb).abs() < EPS);
        }
    }

    #[test]
    fn primary_point_is_clockwise_of_center_line() {
        // Center line points up, so the clockwise side is +x.
        let center_a = Vec2::new(-10.0, -10.0);
        let delta = Vec2::new(0.0, 20.0);
        let primary = intersection_point(center_a, delta, 20.0, 15.0, 15.0);
        let secondary = secondary_intersection_point(center_a, delta, 20.0, 15.0, 15.0);
        assert!(primary.x > center_a.x);
        assert!(secondary.x < center_a.x);
        assert_eq!(primary.y, secondary.y);
    }

    #[test]
    fn solver_clamps_slightly_negative_height() {
        // Nearly externally tangent: ra^2 - a^2 rounds below zero in f32.
        let center_a = Vec2::new(-10.0, -10.0);
        let delta = Vec2::new(0.0, 20.0);
        let (d, ra, rb) = (20.0, 14.818_002, 5.182);
        assert!(circles_intersect(d, ra, rb));

        let (a, h) = chord_offsets(d, ra, rb);
        assert!(ra * ra - a * a < 0.0);
        assert_eq!(h, 0.0);

        for p in [
            intersection_point(center_a, delta, d, ra, rb),
            secondary_intersection_point(center_a, delta, d, ra, rb),
        ] {
            assert!(p.is_finite(), "{p:?}");
            assert_eq!(p.x, center_a.x);
        }
    }

    #[test]
    fn bounds_are_half_open() {
        let bounds = AreaBounds::centered_square(10.0);
        assert!(bounds.contains(Vec2::new(-10.0, -10.0)));
        assert!(bounds.contains(Vec2::new(0.0, 9.999)));
        assert!(!bounds.contains(Vec2::new(10.0, 0.0)));
        assert!(!bounds.contains(Vec2::new(0.0, 10.0)));
        assert!(!bounds.contains(Vec2::new(-10.001, 0.0)));
        assert_eq!(bounds.size(), Vec2::splat(20.0));
    }

    #[test]
    fn bottom_edge_point_kept_top_edge_point_dropped() {
        let geometry = RingGeometry::from_config(&RingConfig::new(10.0));
        let bounds = geometry.bounds;

        // a = 0 puts the point level with center A, i.e. on the bottom edge.
        let bottom = intersection_point(geometry.center_a, geometry.center_delta, 20.0, 15.0, 25.0);
        assert_eq!(bottom, Vec2::new(5.0, -10.0));
        assert!(bounds.contains(bottom));

        // a = d puts the point level with center B, i.e. on the top edge.
        let top = intersection_point(geometry.center_a, geometry.center_delta, 20.0, 25.0, 15.0);
        assert_eq!(top, Vec2::new(5.0, 10.0));
        assert!(!bounds.contains(top));
    }

    #[test]
    fn geometry_centers_are_vertically_separated() {
        let config = RingConfig::new(8.0).with_circle_center_offset(3.0);
        let geometry = RingGeometry::from_config(&config);
        assert_eq!(geometry.center_a, Vec2::new(-11.0, -8.0));
        assert_eq!(geometry.center_b(), Vec2::new(-11.0, 8.0));
        assert_eq!(geometry.center_distance, 16.0);
        assert_eq!(geometry.bounds, AreaBounds::centered_square(8.0));
    }
}
