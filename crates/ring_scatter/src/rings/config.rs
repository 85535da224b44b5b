//! Configuration for ring-intersection point generation.
use crate::error::{Error, Result};
use crate::rings::geometry;

/// Which of the two circle-circle intersection points are kept.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum IntersectionMode {
    /// Only the point on the clockwise side of the center line (A towards B).
    #[default]
    Primary,
    /// Both points; the mirrored one is appended right after the primary one.
    Both,
}

/// Parameters of the two interleaved ring families.
///
/// The region is the square `[-area_half_length, area_half_length)` on both axes.
/// Family A is centered at `(-area_half_length - circle_center_offset, -area_half_length)`
/// and family B sits `2 * area_half_length` straight above it.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RingConfig {
    /// Half the side length of the square region centered at the origin.
    pub area_half_length: f32,
    /// Number of rings evaluated per circle family.
    pub num_rings: usize,
    /// Radius growth per ring index.
    pub ring_radius_increment: f32,
    /// A ring is staggered when the other family's ring index is a multiple of this.
    pub stagger_ring_modulo: usize,
    /// Radius offset applied to staggered rings.
    pub stagger_ring_offset: f32,
    /// Horizontal shift of family A's center to the left of the region.
    pub circle_center_offset: f32,
    /// Intersection points kept per intersecting ring pair.
    pub intersection_mode: IntersectionMode,
}

impl Default for RingConfig {
    fn default() -> Self {
        Self {
            area_half_length: 0.0,
            num_rings: 0,
            ring_radius_increment: 1.0,
            stagger_ring_modulo: 2,
            stagger_ring_offset: 0.0,
            circle_center_offset: 0.0,
            intersection_mode: IntersectionMode::Primary,
        }
    }
}

impl RingConfig {
    /// Creates a new [`RingConfig`] for a region with the given half length.
    pub fn new(area_half_length: f32) -> Self {
        Self {
            area_half_length,
            ..Default::default()
        }
    }

    /// Sets the number of rings per family.
    pub fn with_num_rings(mut self, num_rings: usize) -> Self {
        self.num_rings = num_rings;
        self
    }

    /// Sets the radius increment per ring.
    pub fn with_ring_radius_increment(mut self, ring_radius_increment: f32) -> Self {
        self.ring_radius_increment = ring_radius_increment;
        self
    }

    /// Sets both the stagger modulo and the stagger radius offset.
    pub fn with_stagger(mut self, modulo: usize, offset: f32) -> Self {
        self.stagger_ring_modulo = modulo;
        self.stagger_ring_offset = offset;
        self
    }

    /// Sets the horizontal offset of family A's center.
    pub fn with_circle_center_offset(mut self, circle_center_offset: f32) -> Self {
        self.circle_center_offset = circle_center_offset;
        self
    }

    /// Sets which intersection points are kept.
    pub fn with_intersection_mode(mut self, mode: IntersectionMode) -> Self {
        self.intersection_mode = mode;
        self
    }

    /// Validates the configuration, returning an error if invalid.
    pub fn validate(&self) -> Result<()> {
        if !self.area_half_length.is_finite() || self.area_half_length <= 0.0 {
            return Err(Error::InvalidConfig(format!(
                "area_half_length must be finite and > 0 (got {})",
                self.area_half_length
            )));
        }
        if !self.ring_radius_increment.is_finite() || self.ring_radius_increment < 0.0 {
            return Err(Error::InvalidConfig(format!(
                "ring_radius_increment must be finite and >= 0 (got {})",
                self.ring_radius_increment
            )));
        }
        if self.stagger_ring_modulo == 0 {
            return Err(Error::InvalidConfig(
                "stagger_ring_modulo must be != 0".into(),
            ));
        }
        if !self.stagger_ring_offset.is_finite() {
            return Err(Error::InvalidConfig(
                "stagger_ring_offset must be finite".into(),
            ));
        }
        if !self.circle_center_offset.is_finite() {
            return Err(Error::InvalidConfig(
                "circle_center_offset must be finite".into(),
            ));
        }

        Ok(())
    }

    /// Radius of ring `ring_index`, staggered by the other family's `other_ring_index`.
    ///
    /// Fails with [`Error::InvalidConfig`] when `stagger_ring_modulo` is zero.
    pub fn ring_radius(&self, ring_index: usize, other_ring_index: usize) -> Result<f32> {
        if self.stagger_ring_modulo == 0 {
            return Err(Error::InvalidConfig(
                "stagger_ring_modulo must be != 0".into(),
            ));
        }
        Ok(self.ring_radius_unchecked(ring_index, other_ring_index))
    }

    /// Same as [`RingConfig::ring_radius`] for a configuration that passed
    /// [`RingConfig::validate`].
    #[inline]
    pub(crate) fn ring_radius_unchecked(&self, ring_index: usize, other_ring_index: usize) -> f32 {
        geometry::ring_radius(
            ring_index,
            other_ring_index,
            self.ring_radius_increment,
            self.stagger_ring_modulo,
            self.stagger_ring_offset,
        )
    }

    /// Upper bound on the number of points a generation run can produce.
    pub fn max_points(&self) -> usize {
        let pairs = self.num_rings.saturating_mul(self.num_rings);
        match self.intersection_mode {
            IntersectionMode::Primary => pairs,
            IntersectionMode::Both => pairs.saturating_mul(2),
        }
    }
}
