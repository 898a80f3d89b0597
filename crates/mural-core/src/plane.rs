//! The horizontal drafting plane
//!
//! Maps between world-space pick rays and 2D drafting coordinates on the
//! ground. The plane-local `Vec2` uses x for world x and y for world z.

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

/// The horizontal plane walls are drafted on
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct GroundPlane {
    /// Height of the plane along the world Y axis
    pub elevation: f32,
}

impl Default for GroundPlane {
    fn default() -> Self {
        Self { elevation: 0.0 }
    }
}

impl GroundPlane {
    /// Create a ground plane at the given elevation
    pub fn at_elevation(elevation: f32) -> Self {
        Self { elevation }
    }

    /// Normal vector of the plane
    pub fn normal(&self) -> Vec3 {
        Vec3::Y
    }

    /// A point on the plane (directly below the world origin)
    pub fn origin(&self) -> Vec3 {
        Vec3::new(0.0, self.elevation, 0.0)
    }

    /// Convert a 2D drafting point to 3D world coordinates
    pub fn to_world(&self, point: Vec2) -> Vec3 {
        Vec3::new(point.x, self.elevation, point.y)
    }

    /// Convert a 3D world point to 2D drafting coordinates, discarding
    /// its height above the plane
    pub fn to_local(&self, point: Vec3) -> Vec2 {
        Vec2::new(point.x, point.z)
    }

    /// Intersect a pick ray with the plane.
    ///
    /// Returns `None` if the ray is parallel to the plane or the
    /// intersection lies behind the ray origin.
    pub fn intersect_ray(&self, ray_origin: Vec3, ray_dir: Vec3) -> Option<Vec2> {
        let normal = self.normal();
        let denom = ray_dir.dot(normal);
        if denom.abs() < 1e-6 {
            return None; // Ray is parallel to the plane
        }

        let t = (self.origin() - ray_origin).dot(normal) / denom;
        if t < 0.0 {
            return None; // Intersection is behind the ray origin
        }

        Some(self.to_local(ray_origin + ray_dir * t))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_world_local_round_trip() {
        let plane = GroundPlane::default();
        let point = Vec2::new(1.5, -2.25);
        let world = plane.to_world(point);

        assert_eq!(world, Vec3::new(1.5, 0.0, -2.25));
        assert_eq!(plane.to_local(world), point);
    }

    #[test]
    fn test_intersect_ray_from_above() {
        let plane = GroundPlane::default();
        let hit = plane.intersect_ray(Vec3::new(3.0, 10.0, -4.0), -Vec3::Y);

        let hit = hit.expect("ray straight down must hit the plane");
        assert_relative_eq!(hit.x, 3.0, epsilon = 1e-6);
        assert_relative_eq!(hit.y, -4.0, epsilon = 1e-6);
    }

    #[test]
    fn test_intersect_ray_oblique() {
        let plane = GroundPlane::at_elevation(1.0);
        let dir = Vec3::new(1.0, -1.0, 0.0).normalize();
        let hit = plane.intersect_ray(Vec3::new(0.0, 3.0, 0.0), dir);

        let hit = hit.expect("oblique ray must hit the plane");
        assert_relative_eq!(hit.x, 2.0, epsilon = 1e-5);
        assert_relative_eq!(hit.y, 0.0, epsilon = 1e-5);
    }

    #[test]
    fn test_intersect_ray_parallel() {
        let plane = GroundPlane::default();
        assert!(plane.intersect_ray(Vec3::new(0.0, 5.0, 0.0), Vec3::X).is_none());
    }

    #[test]
    fn test_intersect_ray_behind_origin() {
        let plane = GroundPlane::default();
        // Looking up from above the plane; the hit would be behind the ray.
        assert!(plane.intersect_ray(Vec3::new(0.0, 5.0, 0.0), Vec3::Y).is_none());
    }
}
