//! Editing context owning the draw session and the wall registry

use std::sync::Arc;

use mural_core::WallRegistry;
use parking_lot::Mutex;

use crate::config::DraftConfig;
use crate::session::{DrawMode, DrawSession, GroundResolver, InputEvent, SessionSignal};

/// Shared editor handle for multi-threaded hosts
///
/// The registry must only ever see one writer; routing every event
/// through this single lock keeps overlap queries on a consistent
/// snapshot of the committed walls.
pub type SharedWallEditor = Arc<Mutex<WallEditor>>;

/// The editing context: one draw session plus the walls it has committed
#[derive(Debug, Clone)]
pub struct WallEditor {
    session: DrawSession,
    walls: WallRegistry,
}

impl WallEditor {
    /// Create an editor with the given drafting constants
    pub fn new(config: DraftConfig) -> Self {
        Self {
            session: DrawSession::new(config),
            walls: WallRegistry::new(),
        }
    }

    /// Feed one input event through the session
    pub fn handle_event<R: GroundResolver>(
        &mut self,
        event: InputEvent,
        resolver: &R,
    ) -> Vec<SessionSignal> {
        self.session.handle_event(event, resolver, &mut self.walls)
    }

    /// Current interaction state
    pub fn mode(&self) -> DrawMode {
        self.session.mode()
    }

    /// Committed walls, for rendering and inspection
    pub fn walls(&self) -> &WallRegistry {
        &self.walls
    }

    /// Clear every committed wall and return the session to `Idle`
    pub fn reset(&mut self) {
        self.session.reset();
        self.walls.clear();
    }
}

impl Default for WallEditor {
    fn default() -> Self {
        Self::new(DraftConfig::default())
    }
}

/// Create a new shared editor handle
pub fn create_shared_editor(config: DraftConfig) -> SharedWallEditor {
    Arc::new(Mutex::new(WallEditor::new(config)))
}
