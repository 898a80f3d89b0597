//! Wall footprint overlap detection
//!
//! Oriented-rectangle collision on the ground plane via the Separating
//! Axis Theorem, with an exemption for walls that share an endpoint
//! (a deliberate joint, not an overlap).

use glam::Vec2;

use crate::wall::WallSegment;

/// Ground-plane footprint of a wall as four corner points
///
/// Derived from a segment on demand and never stored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrientedRect {
    corners: [Vec2; 4],
}

impl OrientedRect {
    /// Footprint rectangle of a segment: segment length by `thickness`,
    /// centered on the midpoint, aligned with the segment direction
    pub fn from_segment(start: Vec2, end: Vec2, thickness: f32) -> Self {
        let mid = (start + end) * 0.5;
        let dir = (end - start).try_normalize().unwrap_or(Vec2::X);
        let along = dir * (start.distance(end) * 0.5);
        let across = dir.perp() * (thickness * 0.5);

        Self {
            corners: [
                mid - along - across,
                mid + along - across,
                mid + along + across,
                mid - along + across,
            ],
        }
    }

    /// Corner points in winding order
    pub fn corners(&self) -> &[Vec2; 4] {
        &self.corners
    }

    /// Project all corners onto an axis, returning the (min, max) interval
    fn project(&self, axis: Vec2) -> (f32, f32) {
        let mut lo = f32::INFINITY;
        let mut hi = f32::NEG_INFINITY;
        for corner in &self.corners {
            let dot = corner.dot(axis);
            lo = lo.min(dot);
            hi = hi.max(dot);
        }
        (lo, hi)
    }

    /// True if the interiors of two rectangles overlap.
    ///
    /// Touching along an edge or corner is NOT counted as overlap. Only
    /// two edge normals per rectangle are tested; opposite edges are
    /// parallel and give the same axis.
    pub fn overlaps(&self, other: &OrientedRect) -> bool {
        for rect in [self, other] {
            for i in 0..2 {
                let edge = rect.corners[i + 1] - rect.corners[i];
                let axis = edge.perp();
                let (min_a, max_a) = self.project(axis);
                let (min_b, max_b) = other.project(axis);
                if max_a <= min_b || max_b <= min_a {
                    return false;
                }
            }
        }
        true
    }
}

/// True if any endpoint of `a` lies within `tolerance` of any endpoint of `b`
pub fn endpoints_coincide(a: &WallSegment, b: &WallSegment, tolerance: f32) -> bool {
    [a.start, a.end]
        .iter()
        .any(|&pa| [b.start, b.end].iter().any(|&pb| pa.distance(pb) <= tolerance))
}

/// Find the first committed wall whose footprint overlaps the candidate's.
///
/// Pairs that share an endpoint within `tolerance` are skipped entirely.
pub fn find_conflict<'a>(
    candidate: &WallSegment,
    existing: &'a [WallSegment],
    tolerance: f32,
) -> Option<&'a WallSegment> {
    let footprint = candidate.footprint();
    existing.iter().find(|wall| {
        !endpoints_coincide(candidate, wall, tolerance) && footprint.overlaps(&wall.footprint())
    })
}

/// Whether the candidate may be placed alongside the existing walls
pub fn can_place(candidate: &WallSegment, existing: &[WallSegment], tolerance: f32) -> bool {
    find_conflict(candidate, existing, tolerance).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const THICKNESS: f32 = 0.3;
    const HEIGHT: f32 = 2.75;
    const TOLERANCE: f32 = 0.001;

    fn wall(sx: f32, sz: f32, ex: f32, ez: f32) -> WallSegment {
        WallSegment::new(Vec2::new(sx, sz), Vec2::new(ex, ez), THICKNESS, HEIGHT)
    }

    #[test]
    fn test_footprint_corners_axis_aligned() {
        let rect = OrientedRect::from_segment(Vec2::ZERO, Vec2::new(4.0, 0.0), 0.3);
        let corners = rect.corners();

        for corner in corners {
            assert_relative_eq!(corner.y.abs(), 0.15, epsilon = 1e-6);
            assert!(corner.x >= -1e-6 && corner.x <= 4.0 + 1e-6);
        }
    }

    #[test]
    fn test_footprint_corners_rotated() {
        // A 45-degree segment's footprint corners straddle the diagonal.
        let rect = OrientedRect::from_segment(Vec2::ZERO, Vec2::new(2.0, 2.0), 0.3);
        let center: Vec2 = rect.corners().iter().sum::<Vec2>() * 0.25;

        assert_relative_eq!(center.x, 1.0, epsilon = 1e-5);
        assert_relative_eq!(center.y, 1.0, epsilon = 1e-5);
    }

    #[test]
    fn test_crossing_segments_overlap() {
        let a = wall(0.0, 0.0, 5.0, 0.0);
        let b = wall(2.0, -3.0, 2.0, 3.0);

        assert!(a.footprint().overlaps(&b.footprint()));
        assert!(!can_place(&b, std::slice::from_ref(&a), TOLERANCE));
    }

    #[test]
    fn test_parallel_separated_segments_do_not_overlap() {
        let a = wall(0.0, 0.0, 5.0, 0.0);
        let b = wall(0.0, 2.0, 5.0, 2.0);

        assert!(!a.footprint().overlaps(&b.footprint()));
        assert!(can_place(&b, std::slice::from_ref(&a), TOLERANCE));
    }

    #[test]
    fn test_overlap_is_symmetric() {
        let a = wall(0.0, 0.0, 5.0, 0.0);
        let b = wall(2.0, -3.0, 2.0, 3.0);
        let c = wall(0.0, 2.0, 5.0, 2.0);

        assert_eq!(
            a.footprint().overlaps(&b.footprint()),
            b.footprint().overlaps(&a.footprint())
        );
        assert_eq!(
            a.footprint().overlaps(&c.footprint()),
            c.footprint().overlaps(&a.footprint())
        );
    }

    #[test]
    fn test_touching_edges_are_not_overlap() {
        // Collinear continuation placed exactly end-to-start, but offset in z
        // so no endpoints coincide: rectangles touch along one edge only.
        let a = wall(0.0, 0.0, 5.0, 0.0);
        let b = wall(0.0, 0.3, 5.0, 0.3);

        assert!(!a.footprint().overlaps(&b.footprint()));
    }

    #[test]
    fn test_shared_endpoint_is_exempt() {
        // An L-joint: the corner regions of the two footprints intersect,
        // but the shared endpoint makes the pair a wall joint.
        let a = wall(0.0, 0.0, 5.0, 0.0);
        let b = wall(5.0, 0.0, 5.0, 4.0);

        assert!(endpoints_coincide(&a, &b, TOLERANCE));
        assert!(can_place(&b, std::slice::from_ref(&a), TOLERANCE));
    }

    #[test]
    fn test_shared_endpoint_within_tolerance() {
        let a = wall(0.0, 0.0, 5.0, 0.0);
        let b = wall(5.0005, 0.0, 5.0, 4.0);

        assert!(endpoints_coincide(&a, &b, TOLERANCE));
    }

    #[test]
    fn test_exemption_checks_both_orientations() {
        let a = wall(0.0, 0.0, 5.0, 0.0);
        let b = wall(5.0, 4.0, 5.0, 0.0); // shared point is b's END

        assert!(endpoints_coincide(&a, &b, TOLERANCE));
        assert!(endpoints_coincide(&b, &a, TOLERANCE));
    }

    #[test]
    fn test_find_conflict_reports_blocking_wall() {
        let a = wall(0.0, 0.0, 5.0, 0.0);
        let clear = wall(0.0, 2.0, 5.0, 2.0);
        let existing = vec![clear.clone(), a.clone()];

        let crossing = wall(2.0, -3.0, 2.0, 1.0);
        let conflict = find_conflict(&crossing, &existing, TOLERANCE);
        assert_eq!(conflict.map(|w| w.id), Some(a.id));

        let distant = wall(0.0, 10.0, 5.0, 10.0);
        assert!(find_conflict(&distant, &existing, TOLERANCE).is_none());
    }

    #[test]
    fn test_can_place_against_empty_registry() {
        let candidate = wall(0.0, 0.0, 5.0, 0.0);
        assert!(can_place(&candidate, &[], TOLERANCE));
    }
}
