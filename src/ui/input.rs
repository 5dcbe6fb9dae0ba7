//! Viewport-Input-Handling: egui-Pointer-Events → OverlayEvent.
//!
//! Positionen werden in Viewport-lokale Pixel umgerechnet. Pointer-Downs und
//! Bewegungen außerhalb des Viewports gehören anderen Panels und werden
//! verworfen, Pointer-Ups immer weitergereicht, damit laufende Interaktionen enden.

use super::keyboard;
use crate::app::{OverlayEvent, PointerButton, WidgetState};
use crate::shared::ScreenRect;
use glam::{Quat, Vec2};

/// Sammelt alle Overlay-Events eines Frames, beginnend mit dem Tick.
pub fn collect_overlay_events(
    ui: &egui::Ui,
    rect: egui::Rect,
    widget: &WidgetState,
    rotation: Quat,
) -> Vec<OverlayEvent> {
    let mut events = vec![OverlayEvent::Tick {
        viewport: ScreenRect::new(0.0, 0.0, rect.width(), rect.height()),
    }];

    let raw_events = ui.input(|i| i.events.clone());
    for event in &raw_events {
        if let Some(event) = map_pointer_event(event, rect) {
            events.push(event);
        }
    }

    events.extend(keyboard::collect_gizmo_events(ui, widget, rotation));
    events
}

fn map_pointer_event(event: &egui::Event, rect: egui::Rect) -> Option<OverlayEvent> {
    match event {
        egui::Event::PointerMoved(pos) => rect.contains(*pos).then(|| {
            OverlayEvent::PointerMoved {
                pos: to_local(*pos, rect),
            }
        }),
        egui::Event::PointerButton {
            pos,
            button,
            pressed,
            ..
        } => {
            let button = map_button(*button)?;
            let local = to_local(*pos, rect);
            if *pressed {
                rect.contains(*pos)
                    .then_some(OverlayEvent::PointerDown { button, pos: local })
            } else {
                Some(OverlayEvent::PointerUp { button, pos: local })
            }
        }
        _ => None,
    }
}

fn map_button(button: egui::PointerButton) -> Option<PointerButton> {
    match button {
        egui::PointerButton::Primary => Some(PointerButton::Primary),
        egui::PointerButton::Secondary => Some(PointerButton::Secondary),
        egui::PointerButton::Middle => Some(PointerButton::Middle),
        _ => None,
    }
}

/// Rechnet eine egui-Bildschirmposition in Viewport-Pixel um.
pub fn to_local(pos: egui::Pos2, rect: egui::Rect) -> Vec2 {
    Vec2::new(pos.x - rect.min.x, pos.y - rect.min.y)
}

/// Rechnet Viewport-Pixel in eine egui-Bildschirmposition um.
pub fn to_screen(pos: Vec2, rect: egui::Rect) -> egui::Pos2 {
    egui::pos2(rect.min.x + pos.x, rect.min.y + pos.y)
}
