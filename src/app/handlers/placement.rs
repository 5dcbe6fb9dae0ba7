//! Handler für Position, Rotation und Farbe der Referenzen.

use crate::app::OverlayState;
use crate::core::SceneQuery;
use glam::{Quat, Vec2, Vec3};

/// Setzt die gespeicherte Position (Reset oder Picking-Abbruch).
pub fn set_position(state: &mut OverlayState, position: Vec3) {
    state.references.set_position(position);
}

/// Castet einen Strahl durch den Screen-Punkt und platziert am Treffer.
///
/// Ohne Treffer bleibt die Position unverändert.
pub fn pick_position_at(state: &mut OverlayState, scene: &dyn SceneQuery, screen_pos: Vec2) {
    let Some(ray) = scene.camera().screen_ray(screen_pos) else {
        log::trace!("Kein Kamerastrahl für {:?}", screen_pos);
        return;
    };
    match scene.raycast(&ray) {
        Some(hit) => state.references.set_position(hit.point),
        None => log::trace!("Raycast ohne Treffer bei {:?}", screen_pos),
    }
}

/// Setzt die Rotation um den Platzierungspunkt.
pub fn set_rotation(state: &mut OverlayState, rotation: Quat) {
    state.references.set_rotation(rotation);
}

/// Setzt die Material-Farbe aller Referenzen.
pub fn set_color(state: &mut OverlayState, color: [f32; 4]) {
    state.references.set_color(color);
}
