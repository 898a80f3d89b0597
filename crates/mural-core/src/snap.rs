//! Drafting snap operations
//!
//! Pure quantization helpers: grid snapping for raw picked points and
//! length-preserving angle snapping for segment endpoints. Both are
//! idempotent; the draw session applies grid snap first and derives the
//! angle from the already-snapped points.

use glam::Vec2;

/// Round each axis of a point to the nearest multiple of `step`
pub fn snap_to_grid(point: Vec2, step: f32) -> Vec2 {
    Vec2::new(
        (point.x / step).round() * step,
        (point.y / step).round() * step,
    )
}

/// Round an angle in radians to the nearest multiple of `increment`
pub fn snap_angle(angle: f32, increment: f32) -> f32 {
    (angle / increment).round() * increment
}

/// Re-aim `end` so the segment from `start` lies on a snapped direction
/// angle while keeping its original length.
///
/// Returns `None` when the segment is shorter than `min_length`; such a
/// segment is not drawable and must produce neither preview nor commit.
pub fn snap_segment_end(start: Vec2, end: Vec2, increment: f32, min_length: f32) -> Option<Vec2> {
    let delta = end - start;
    let length = delta.length();
    if length < min_length {
        return None;
    }

    let angle = snap_angle(delta.y.atan2(delta.x), increment);
    Some(start + Vec2::new(angle.cos(), angle.sin()) * length)
}
