//! Reines Toolbar-Layout: Buttons von links nach rechts mit fester Breite.
//!
//! Benachbarte Buttons überlappen um `ToolbarMetrics::overlap` Pixel, damit
//! die Gruppe optisch verbunden wirkt. Das Layout hängt nur von Anker,
//! eingeblendeter Zweitzeile und dem Vorhandensein von Referenzen ab.

use crate::shared::{ScreenRect, ToolbarMetrics};
use glam::Vec2;

/// Aktion eines Toolbar-Buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolbarAction {
    /// Griff zum Verschieben der Toolbar
    DragHandle,
    /// Zweite Button-Gruppe ein-/ausblenden
    ToggleSubControls,
    /// Referenzen ein-/ausblenden
    ToggleVisibility,
    /// Vorherige Referenz
    Previous,
    /// Name der aktuellen Referenz (Klick fokussiert im Host)
    CurrentLabel,
    /// Nächste Referenz
    Next,
    /// Position per Raycast wählen (rechts: auf Ursprung zurücksetzen)
    PlacePosition,
    /// Rotations-Gizmo umschalten (rechts: Rotation zurücksetzen)
    ToggleRotation,
    /// Farbfeld
    Color,
}

impl ToolbarAction {
    /// Ob der Button auch auf die rechte Maustaste reagiert.
    pub fn accepts_secondary(self) -> bool {
        matches!(
            self,
            ToolbarAction::PlacePosition | ToolbarAction::ToggleRotation
        )
    }
}

/// Ein platzierter Toolbar-Button
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToolbarButton {
    /// Aktion des Buttons
    pub action: ToolbarAction,
    /// Fläche in Viewport-Pixeln
    pub rect: ScreenRect,
    /// Deaktivierte Buttons schlucken Klicks ohne Wirkung
    pub enabled: bool,
}

impl ToolbarButton {
    /// Fläche des Aktiv-Indikators (rechts unten im Button).
    pub fn indicator_rect(&self, scale: f32) -> ScreenRect {
        let size = self.rect.size * scale;
        ScreenRect::from_min_size(self.rect.min + self.rect.size - size, size)
    }
}

/// Berechnet alle Buttons der Toolbar ab dem Anker (linke obere Ecke).
pub fn layout(
    anchor: Vec2,
    show_sub_controls: bool,
    has_references: bool,
    metrics: &ToolbarMetrics,
) -> Vec<ToolbarButton> {
    let mut entries = vec![
        (ToolbarAction::DragHandle, metrics.drag_handle_width, true),
        (
            ToolbarAction::ToggleSubControls,
            metrics.icon_button_width,
            true,
        ),
        (
            ToolbarAction::ToggleVisibility,
            metrics.icon_button_width,
            true,
        ),
    ];

    if show_sub_controls {
        entries.extend([
            (
                ToolbarAction::Previous,
                metrics.nav_button_width,
                has_references,
            ),
            (
                ToolbarAction::CurrentLabel,
                metrics.label_width,
                has_references,
            ),
            (ToolbarAction::Next, metrics.nav_button_width, has_references),
            (ToolbarAction::PlacePosition, metrics.icon_button_width, true),
            (
                ToolbarAction::ToggleRotation,
                metrics.icon_button_width,
                true,
            ),
            (ToolbarAction::Color, metrics.color_field_width, true),
        ]);
    }

    let mut x = anchor.x;
    let mut buttons = Vec::with_capacity(entries.len());
    for (action, width, enabled) in entries {
        buttons.push(ToolbarButton {
            action,
            rect: ScreenRect::new(x, anchor.y, width, metrics.height),
            enabled,
        });
        x += width - metrics.overlap;
    }
    buttons
}

/// Findet den obersten Button unter einem Punkt.
///
/// Bei Überlappung gewinnt der später gezeichnete (rechte) Button.
pub fn hit_test(buttons: &[ToolbarButton], pos: Vec2) -> Option<&ToolbarButton> {
    buttons.iter().rev().find(|button| button.rect.contains(pos))
}
