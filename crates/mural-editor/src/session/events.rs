//! Input event and signal types

use mural_core::WallSegment;
use uuid::Uuid;

/// Pointer button identity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    /// Left / primary button
    Primary,
    /// Middle button (ignored by the session)
    Middle,
    /// Right / secondary button
    Secondary,
}

impl PointerButton {
    /// Map a platform button index (0 = primary, 2 = secondary)
    pub fn from_index(index: u16) -> Option<Self> {
        match index {
            0 => Some(PointerButton::Primary),
            1 => Some(PointerButton::Middle),
            2 => Some(PointerButton::Secondary),
            _ => None,
        }
    }
}

/// A discrete input event delivered by the platform layer
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Enable or disable draw mode; `None` flips the current state
    ToggleDrawMode { enabled: Option<bool> },
    /// Pointer button press at viewport coordinates
    PointerDown { x: f32, y: f32, button: PointerButton },
    /// Pointer motion at viewport coordinates
    PointerMove { x: f32, y: f32 },
    /// Key press by name
    Key { key: String },
}

/// Mouse cursor requested from the UI layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CursorIcon {
    /// Regular pointer
    #[default]
    Default,
    /// Drafting crosshair, shown while draw mode is active
    Crosshair,
}

/// Signal emitted by the draw session for the rendering/UI layer
#[derive(Debug, Clone, PartialEq)]
pub enum SessionSignal {
    /// The requested mouse cursor changed
    CursorChanged(CursorIcon),
    /// The live preview segment changed; `None` clears it
    PreviewChanged(Option<WallSegment>),
    /// A wall was validated and appended to the registry
    WallCommitted(WallSegment),
    /// A commit attempt was rejected; advisory, non-fatal
    PlacementRejected {
        /// The candidate that failed validation
        candidate: WallSegment,
        /// Id of the committed wall it overlapped
        blocking: Uuid,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_from_index() {
        assert_eq!(PointerButton::from_index(0), Some(PointerButton::Primary));
        assert_eq!(PointerButton::from_index(1), Some(PointerButton::Middle));
        assert_eq!(PointerButton::from_index(2), Some(PointerButton::Secondary));
        assert_eq!(PointerButton::from_index(3), None);
    }
}
