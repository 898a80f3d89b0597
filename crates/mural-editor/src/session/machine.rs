//! Draw session state machine
//!
//! Turns raw pointer/keyboard events into snapped previews and committed
//! walls. Geometry failures (missed pick, degenerate length, rejected
//! overlap) are absorbed silently: the machine stays in its current state
//! and never panics.

use glam::Vec2;
use mural_core::{WallRegistry, WallSegment, find_conflict, snap_segment_end, snap_to_grid};
use tracing::{debug, info, warn};

use super::GroundResolver;
use super::events::{CursorIcon, InputEvent, PointerButton, SessionSignal};
use crate::config::DraftConfig;

/// Key that flips draw mode on and off (case-insensitive)
pub const DRAW_TOGGLE_KEY: &str = "d";
/// Key that cancels the pending segment without leaving draw mode
pub const CANCEL_KEY: &str = "Escape";

/// Interaction state of the draw session
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DrawMode {
    /// Draw mode off
    #[default]
    Idle,
    /// Draw mode on, waiting for a start point
    Armed,
    /// Start point set, live preview follows the pointer
    Pending {
        /// Grid-snapped start of the segment being drawn
        start: Vec2,
    },
}

impl DrawMode {
    /// Check if draw mode is active
    pub fn is_drawing(&self) -> bool {
        !matches!(self, DrawMode::Idle)
    }

    /// Get the pending start point, if one is set
    pub fn start_point(&self) -> Option<Vec2> {
        match self {
            DrawMode::Pending { start } => Some(*start),
            _ => None,
        }
    }
}

/// The wall drawing state machine
///
/// One instance exists per editing context. Every transition runs through
/// [`DrawSession::handle_event`]; the returned signals describe everything
/// the UI layer must reflect.
#[derive(Debug, Clone)]
pub struct DrawSession {
    mode: DrawMode,
    config: DraftConfig,
}

impl DrawSession {
    /// Create an idle session with the given drafting constants
    pub fn new(config: DraftConfig) -> Self {
        Self {
            mode: DrawMode::Idle,
            config,
        }
    }

    /// Current interaction state
    pub fn mode(&self) -> DrawMode {
        self.mode
    }

    /// Drafting constants the session was built with
    pub fn config(&self) -> &DraftConfig {
        &self.config
    }

    /// Return to `Idle`, dropping any pending start point
    pub fn reset(&mut self) {
        self.mode = DrawMode::Idle;
    }

    /// Process one input event, mutating `walls` on a validated commit
    pub fn handle_event<R: GroundResolver>(
        &mut self,
        event: InputEvent,
        resolver: &R,
        walls: &mut WallRegistry,
    ) -> Vec<SessionSignal> {
        match event {
            InputEvent::ToggleDrawMode { enabled } => self.toggle_draw_mode(enabled),
            InputEvent::PointerMove { x, y } => self.pointer_move(x, y, resolver),
            InputEvent::PointerDown { x, y, button } => match button {
                PointerButton::Primary => self.primary_click(x, y, resolver, walls),
                PointerButton::Secondary => self.cancel_pending(),
                PointerButton::Middle => Vec::new(),
            },
            InputEvent::Key { key } => self.key_pressed(&key),
        }
    }

    /// Flip or set draw mode, announcing the cursor change
    fn toggle_draw_mode(&mut self, enabled: Option<bool>) -> Vec<SessionSignal> {
        let enable = enabled.unwrap_or(!self.mode.is_drawing());
        match (self.mode.is_drawing(), enable) {
            (false, true) => {
                self.mode = DrawMode::Armed;
                info!("draw mode enabled");
                vec![SessionSignal::CursorChanged(CursorIcon::Crosshair)]
            }
            (true, false) => {
                let had_pending = matches!(self.mode, DrawMode::Pending { .. });
                self.mode = DrawMode::Idle;
                info!("draw mode disabled");
                let mut signals = vec![SessionSignal::CursorChanged(CursorIcon::Default)];
                if had_pending {
                    signals.push(SessionSignal::PreviewChanged(None));
                }
                signals
            }
            _ => Vec::new(),
        }
    }

    /// Update the live preview while a start point is pending
    fn pointer_move<R: GroundResolver>(
        &mut self,
        x: f32,
        y: f32,
        resolver: &R,
    ) -> Vec<SessionSignal> {
        let DrawMode::Pending { start } = self.mode else {
            return Vec::new();
        };
        let Some(picked) = resolver.resolve(x, y) else {
            return Vec::new();
        };

        let point = snap_to_grid(picked, self.config.grid_step);
        let preview = snap_segment_end(
            start,
            point,
            self.config.angle_increment(),
            self.config.min_length,
        )
        .map(|end| {
            WallSegment::new(start, end, self.config.wall_thickness, self.config.wall_height)
        });

        vec![SessionSignal::PreviewChanged(preview)]
    }

    /// First click arms a start point; second click validates and commits
    fn primary_click<R: GroundResolver>(
        &mut self,
        x: f32,
        y: f32,
        resolver: &R,
        walls: &mut WallRegistry,
    ) -> Vec<SessionSignal> {
        match self.mode {
            DrawMode::Idle => Vec::new(),
            DrawMode::Armed => {
                let Some(picked) = resolver.resolve(x, y) else {
                    return Vec::new();
                };
                let start = snap_to_grid(picked, self.config.grid_step);
                self.mode = DrawMode::Pending { start };
                debug!(?start, "segment start set");
                Vec::new()
            }
            DrawMode::Pending { start } => {
                let Some(picked) = resolver.resolve(x, y) else {
                    return Vec::new();
                };
                let point = snap_to_grid(picked, self.config.grid_step);

                // A sub-minimum drag is ignored outright; preview and
                // start point stay as they were.
                let Some(end) = snap_segment_end(
                    start,
                    point,
                    self.config.angle_increment(),
                    self.config.min_length,
                ) else {
                    return Vec::new();
                };

                let candidate = WallSegment::new(
                    start,
                    end,
                    self.config.wall_thickness,
                    self.config.wall_height,
                );
                let blocking = find_conflict(&candidate, walls.all(), self.config.endpoint_tolerance)
                    .map(|wall| wall.id);

                match blocking {
                    None => self.commit_and_chain(candidate, walls),
                    Some(blocking) => {
                        warn!(
                            candidate = %candidate.id,
                            blocking = %blocking,
                            "wall placement rejected: footprints overlap"
                        );
                        vec![
                            SessionSignal::PreviewChanged(None),
                            SessionSignal::PlacementRejected { candidate, blocking },
                        ]
                    }
                }
            }
        }
    }

    /// Append a validated wall and arm the next segment at its end point,
    /// so chained drawing continues without re-clicking a start
    fn commit_and_chain(
        &mut self,
        wall: WallSegment,
        walls: &mut WallRegistry,
    ) -> Vec<SessionSignal> {
        info!(wall = %wall.id, length = wall.length(), "wall committed");
        self.mode = DrawMode::Pending { start: wall.end };
        walls.add(wall.clone());
        vec![
            SessionSignal::PreviewChanged(None),
            SessionSignal::WallCommitted(wall),
        ]
    }

    /// Drop the pending segment and fall back to `Armed`
    fn cancel_pending(&mut self) -> Vec<SessionSignal> {
        match self.mode {
            DrawMode::Pending { .. } => {
                self.mode = DrawMode::Armed;
                debug!("pending segment cancelled");
                vec![SessionSignal::PreviewChanged(None)]
            }
            DrawMode::Armed | DrawMode::Idle => Vec::new(),
        }
    }

    fn key_pressed(&mut self, key: &str) -> Vec<SessionSignal> {
        if key.eq_ignore_ascii_case(DRAW_TOGGLE_KEY) {
            self.toggle_draw_mode(None)
        } else if key == CANCEL_KEY {
            self.cancel_pending()
        } else {
            Vec::new()
        }
    }
}
