//! Tastatur-Steuerung des Rotations-Gizmos.
//!
//! Q/E drehen die Referenzen in 15°-Schritten um die Hochachse, solange der
//! Gizmo angezeigt wird.

use crate::app::{OverlayEvent, WidgetState};
use glam::Quat;

/// Drehschritt pro Tastendruck
const ROTATION_STEP_DEG: f32 = 15.0;

/// Verarbeitet Gizmo-Tasten und gibt `GizmoRotated`-Events zurück.
pub(super) fn collect_gizmo_events(
    ui: &egui::Ui,
    widget: &WidgetState,
    rotation: Quat,
) -> Vec<OverlayEvent> {
    if !widget.gizmo_active() {
        return Vec::new();
    }

    let (key_q_pressed, key_e_pressed) =
        ui.input(|i| (i.key_pressed(egui::Key::Q), i.key_pressed(egui::Key::E)));

    let steps = i32::from(key_e_pressed) - i32::from(key_q_pressed);
    if steps == 0 {
        return Vec::new();
    }

    vec![OverlayEvent::GizmoRotated {
        rotation: step_rotation(rotation, steps),
    }]
}

/// Dreht um `steps` Schritte um die Y-Achse (vor der bestehenden Rotation).
fn step_rotation(rotation: Quat, steps: i32) -> Quat {
    let angle = (ROTATION_STEP_DEG * steps as f32).to_radians();
    (Quat::from_rotation_y(angle) * rotation).normalize()
}
