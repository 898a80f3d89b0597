//! Headless demo: replay a scripted drawing session and log every signal

use glam::{Vec2, Vec3};
use mural_core::GroundPlane;
use mural_editor::{DraftConfig, GroundResolver, InputEvent, PointerButton, WallEditor};

/// Fixed top-down pick: viewport coordinates map one-to-one onto the
/// ground plane through a straight-down ray.
struct TopDownResolver {
    plane: GroundPlane,
}

impl GroundResolver for TopDownResolver {
    fn resolve(&self, x: f32, y: f32) -> Option<Vec2> {
        self.plane.intersect_ray(Vec3::new(x, 10.0, y), -Vec3::Y)
    }
}

fn main() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mural=info,mural_editor=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Mural demo session");

    let resolver = TopDownResolver {
        plane: GroundPlane::default(),
    };
    let mut editor = WallEditor::new(DraftConfig::default());

    let script = [
        InputEvent::ToggleDrawMode { enabled: Some(true) },
        InputEvent::PointerDown {
            x: 1.003,
            y: 0.997,
            button: PointerButton::Primary,
        },
        InputEvent::PointerMove { x: 4.1, y: 1.06 },
        InputEvent::PointerDown {
            x: 4.1,
            y: 1.06,
            button: PointerButton::Primary,
        },
        InputEvent::PointerMove { x: 4.1, y: 4.0 },
        InputEvent::PointerDown {
            x: 4.1,
            y: 4.0,
            button: PointerButton::Primary,
        },
        // Cuts back across the first wall away from any joint: rejected.
        InputEvent::PointerDown {
            x: 2.0,
            y: -2.0,
            button: PointerButton::Primary,
        },
        InputEvent::PointerDown {
            x: 0.0,
            y: 0.0,
            button: PointerButton::Secondary,
        },
        InputEvent::ToggleDrawMode { enabled: Some(false) },
    ];

    for event in script {
        for signal in editor.handle_event(event, &resolver) {
            tracing::info!(?signal, "signal");
        }
    }

    tracing::info!(walls = editor.walls().len(), "session finished");
}
