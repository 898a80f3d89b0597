//! Draw session: input events, emitted signals, and the state machine

mod events;
mod machine;

pub use events::{CursorIcon, InputEvent, PointerButton, SessionSignal};
pub use machine::{CANCEL_KEY, DRAW_TOGGLE_KEY, DrawMode, DrawSession};

use glam::Vec2;

/// Maps viewport pointer coordinates to a point on the ground plane.
///
/// Implemented by the surrounding renderer, which owns the camera; the
/// session only ever sees the resolved drafting point. Returning `None`
/// (ray parallel to the plane, pick behind the camera) makes the event
/// a no-op.
pub trait GroundResolver {
    /// Resolve viewport coordinates to ground-plane coordinates
    fn resolve(&self, x: f32, y: f32) -> Option<Vec2>;
}
