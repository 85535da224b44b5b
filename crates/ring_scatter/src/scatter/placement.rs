//! Turning generated 2D points into world-space placements.
//!
//! Generation is pure; this step is where randomness (yaw) and the embedding of
//! the 2D area into 3D world space happen.
use glam::{Quat, Vec2, Vec3};
use rand::Rng;

/// Embedding of the 2D generation plane into world space.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GroundPlane {
    /// `(x, y) -> (x, 0, y)`, a Y-up ground.
    #[default]
    XZ,
    /// `(x, y) -> (x, y, 0)`, a Z-up ground.
    XY,
}

impl GroundPlane {
    #[inline]
    pub fn embed(self, point: Vec2) -> Vec3 {
        match self {
            GroundPlane::XZ => Vec3::new(point.x, 0.0, point.y),
            GroundPlane::XY => Vec3::new(point.x, point.y, 0.0),
        }
    }

    /// Up axis of the ground, used as the yaw axis.
    #[inline]
    pub fn normal(self) -> Vec3 {
        match self {
            GroundPlane::XZ => Vec3::Y,
            GroundPlane::XY => Vec3::Z,
        }
    }
}

/// How points are turned into placements.
#[non_exhaustive]
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlacementConfig {
    /// World position of the area center.
    pub origin: Vec3,
    /// Plane the 2D points are embedded into.
    pub plane: GroundPlane,
    /// Draw a uniform yaw in `[0, 360)` degrees per placement.
    pub randomize_yaw: bool,
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self {
            origin: Vec3::ZERO,
            plane: GroundPlane::XZ,
            randomize_yaw: true,
        }
    }
}

impl PlacementConfig {
    pub fn new(origin: Vec3) -> Self {
        Self {
            origin,
            ..Default::default()
        }
    }

    pub fn with_plane(mut self, plane: GroundPlane) -> Self {
        self.plane = plane;
        self
    }

    pub fn with_randomize_yaw(mut self, randomize_yaw: bool) -> Self {
        self.randomize_yaw = randomize_yaw;
        self
    }
}

/// A world-space instance position with its yaw.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub position: Vec3,
    /// Rotation about the ground normal, in degrees.
    pub yaw_degrees: f32,
    plane: GroundPlane,
}

impl Placement {
    pub fn new(position: Vec3, yaw_degrees: f32, plane: GroundPlane) -> Self {
        Self {
            position,
            yaw_degrees,
            plane,
        }
    }

    pub fn plane(&self) -> GroundPlane {
        self.plane
    }

    pub fn rotation(&self) -> Quat {
        Quat::from_axis_angle(self.plane.normal(), self.yaw_degrees.to_radians())
    }
}

/// Builds one placement per point, in the same order.
pub fn place_points<R: Rng>(
    points: &[Vec2],
    config: &PlacementConfig,
    rng: &mut R,
) -> Vec<Placement> {
    points
        .iter()
        .map(|&point| {
            let yaw_degrees = if config.randomize_yaw {
                rand01(rng) * 360.0
            } else {
                0.0
            };
            Placement::new(
                config.plane.embed(point) + config.origin,
                yaw_degrees,
                config.plane,
            )
        })
        .collect()
}

/// Random float in `[0, 1)`.
#[inline]
pub(crate) fn rand01<R: Rng + ?Sized>(rng: &mut R) -> f32 {
    // 24 bits keep the result strictly below 1.0 in f32.
    (rng.next_u32() >> 8) as f32 / (1u32 << 24) as f32
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    fn points() -> Vec<Vec2> {
        vec![Vec2::new(1.0, 2.0), Vec2::new(-3.0, 4.5), Vec2::new(1.0, 2.0)]
    }

    #[test]
    fn xz_plane_maps_y_to_depth() {
        let config = PlacementConfig::new(Vec3::new(10.0, 5.0, -2.0)).with_randomize_yaw(false);
        let mut rng = StdRng::seed_from_u64(1);
        let placements = place_points(&points(), &config, &mut rng);

        assert_eq!(placements.len(), 3);
        assert_eq!(placements[0].position, Vec3::new(11.0, 5.0, 0.0));
        assert_eq!(placements[1].position, Vec3::new(7.0, 5.0, 2.5));
        assert!(placements.iter().all(|p| p.yaw_degrees == 0.0));
        assert_eq!(placements[0].rotation(), Quat::IDENTITY);
    }

    #[test]
    fn xy_plane_keeps_y() {
        let config = PlacementConfig::default()
            .with_plane(GroundPlane::XY)
            .with_randomize_yaw(false);
        let mut rng = StdRng::seed_from_u64(1);
        let placements = place_points(&points(), &config, &mut rng);
        assert_eq!(placements[1].position, Vec3::new(-3.0, 4.5, 0.0));
        assert_eq!(placements[1].plane(), GroundPlane::XY);
    }

    #[test]
    fn random_yaw_is_in_range_and_seeded() {
        let config = PlacementConfig::default();
        let pts: Vec<Vec2> = (0..64).map(|i| Vec2::splat(i as f32)).collect();

        let a = place_points(&pts, &config, &mut StdRng::seed_from_u64(7));
        let b = place_points(&pts, &config, &mut StdRng::seed_from_u64(7));
        assert_eq!(a, b);
        assert!(a.iter().all(|p| (0.0..360.0).contains(&p.yaw_degrees)));
        assert!(a.iter().any(|p| p.yaw_degrees != a[0].yaw_degrees));
    }

    #[test]
    fn rotation_turns_about_ground_normal() {
        let placement = Placement::new(Vec3::ZERO, 90.0, GroundPlane::XZ);
        let forward = placement.rotation() * Vec3::X;
        assert!((forward - Vec3::NEG_Z).length() < 1e-5);
    }

    #[test]
    fn rand01_stays_below_one() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..1000 {
            let v = rand01(&mut rng);
            assert!((0.0..1.0).contains(&v));
        }
    }
}
