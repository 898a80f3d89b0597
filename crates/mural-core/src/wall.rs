//! Wall segment data

use glam::Vec2;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::collision::OrientedRect;

/// A straight wall on the ground plane, defined by its two endpoints
///
/// Thickness and height are session-wide configuration constants copied
/// onto each segment at creation. Segments are immutable once created.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WallSegment {
    /// Unique identifier
    pub id: Uuid,
    /// Start point in drafting coordinates
    pub start: Vec2,
    /// End point in drafting coordinates
    pub end: Vec2,
    /// Footprint thickness on the ground plane
    pub thickness: f32,
    /// Extruded height above the ground plane
    pub height: f32,
}

impl WallSegment {
    /// Create a new wall segment with a fresh id
    pub fn new(start: Vec2, end: Vec2, thickness: f32, height: f32) -> Self {
        Self {
            id: Uuid::new_v4(),
            start,
            end,
            thickness,
            height,
        }
    }

    /// Length of the segment on the ground plane
    pub fn length(&self) -> f32 {
        self.start.distance(self.end)
    }

    /// Planar direction angle from start to end, in radians
    pub fn direction_angle(&self) -> f32 {
        let delta = self.end - self.start;
        delta.y.atan2(delta.x)
    }

    /// Midpoint of the segment
    pub fn midpoint(&self) -> Vec2 {
        (self.start + self.end) * 0.5
    }

    /// Ground-plane footprint used for overlap testing
    pub fn footprint(&self) -> OrientedRect {
        OrientedRect::from_segment(self.start, self.end, self.thickness)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f32::consts::FRAC_PI_4;

    #[test]
    fn test_length_and_midpoint() {
        let wall = WallSegment::new(Vec2::new(1.0, 1.0), Vec2::new(4.0, 5.0), 0.3, 2.75);

        assert_relative_eq!(wall.length(), 5.0, epsilon = 1e-6);
        assert_eq!(wall.midpoint(), Vec2::new(2.5, 3.0));
    }

    #[test]
    fn test_direction_angle() {
        let wall = WallSegment::new(Vec2::ZERO, Vec2::new(2.0, 2.0), 0.3, 2.75);
        assert_relative_eq!(wall.direction_angle(), FRAC_PI_4, epsilon = 1e-6);
    }

    #[test]
    fn test_ids_are_unique() {
        let a = WallSegment::new(Vec2::ZERO, Vec2::X, 0.3, 2.75);
        let b = WallSegment::new(Vec2::ZERO, Vec2::X, 0.3, 2.75);
        assert_ne!(a.id, b.id);
    }
}
