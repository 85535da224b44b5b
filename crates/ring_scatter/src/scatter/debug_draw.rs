//! Debug drawing commands for visualizing a generation result.
//!
//! Rendering backends (scene gizmos, PNG previews) consume [`DrawCommand`]s; nothing
//! here touches the generation itself.
use glam::Vec2;

use crate::rings::geometry::AreaBounds;

/// RGBA color, 8 bits per channel.
pub type Rgba = [u8; 4];

/// Colors and sizes used for debug drawing.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DebugDrawStyle {
    pub enabled: bool,
    pub rect_color: Rgba,
    pub point_color: Rgba,
    /// Marker radius in area units.
    pub point_radius: f32,
}

impl Default for DebugDrawStyle {
    fn default() -> Self {
        Self {
            enabled: true,
            rect_color: [255, 255, 255, 255],
            point_color: [80, 200, 80, 255],
            point_radius: 0.1,
        }
    }
}

impl DebugDrawStyle {
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn with_colors(mut self, rect_color: Rgba, point_color: Rgba) -> Self {
        self.rect_color = rect_color;
        self.point_color = point_color;
        self
    }

    pub fn with_point_radius(mut self, point_radius: f32) -> Self {
        self.point_radius = point_radius;
        self
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DrawCommand {
    /// Outline of an axis-aligned rectangle.
    Rect { min: Vec2, max: Vec2, color: Rgba },
    /// Filled point marker.
    Point {
        position: Vec2,
        radius: f32,
        color: Rgba,
    },
}

/// Area outline first, then one marker per point in generation order.
pub fn debug_draw_commands(
    bounds: &AreaBounds,
    points: &[Vec2],
    style: &DebugDrawStyle,
) -> Vec<DrawCommand> {
    if !style.enabled {
        return Vec::new();
    }

    let mut commands = Vec::with_capacity(points.len() + 1);
    commands.push(DrawCommand::Rect {
        min: bounds.min,
        max: bounds.max,
        color: style.rect_color,
    });
    commands.extend(points.iter().map(|&position| DrawCommand::Point {
        position,
        radius: style.point_radius,
        color: style.point_color,
    }));
    commands
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_style_draws_nothing() {
        let style = DebugDrawStyle::default().with_enabled(false);
        let commands =
            debug_draw_commands(&AreaBounds::centered_square(1.0), &[Vec2::ZERO], &style);
        assert!(commands.is_empty());
    }

    #[test]
    fn rect_comes_before_points() {
        let style = DebugDrawStyle::default()
            .with_colors([1, 2, 3, 4], [5, 6, 7, 8])
            .with_point_radius(0.5);
        let points = [Vec2::new(0.25, 0.5), Vec2::new(-0.5, 0.0)];
        let commands = debug_draw_commands(&AreaBounds::centered_square(1.0), &points, &style);

        assert_eq!(commands.len(), 3);
        assert_eq!(
            commands[0],
            DrawCommand::Rect {
                min: Vec2::splat(-1.0),
                max: Vec2::splat(1.0),
                color: [1, 2, 3, 4],
            }
        );
        assert_eq!(
            commands[2],
            DrawCommand::Point {
                position: Vec2::new(-0.5, 0.0),
                radius: 0.5,
                color: [5, 6, 7, 8],
            }
        );
    }
}
