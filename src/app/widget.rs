//! Transienter Zustand der Overlay-Toolbar.
//!
//! Fensterposition, eingeblendete Zweitzeile und Gizmo-Sichtbarkeit werden
//! in den Präferenz-Speicher gespiegelt, alles andere lebt nur in der Sitzung.

use super::layout::ToolbarAction;
use super::events::PointerButton;
use crate::core::PreferenceStore;
use crate::shared::OverlayOptions;
use glam::{Vec2, Vec3};

const WINDOW_POSITION_KEY: &str = "size_references.editor.window_position";
const SHOW_SUB_CONTROLS_KEY: &str = "size_references.editor.show_sub_controls";
const SHOW_ROTATION_GIZMO_KEY: &str = "size_references.editor.show_rotation_gizmo";

/// Laufende Maus-Interaktion der Toolbar
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Interaction {
    /// Keine Interaktion
    #[default]
    Idle,
    /// Toolbar wird verschoben; `offset` = Fensterposition − Mausposition
    Dragging { offset: Vec2 },
    /// Nächste Mausbewegungen setzen die Position per Raycast
    PickingPosition { initial_position: Vec3 },
}

/// Nach außen sichtbarer Zustand der Zustandsmaschine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetMode {
    Idle,
    Dragging,
    PickingPosition,
    RotatingViaGizmo,
}

/// Gedrückter, noch nicht losgelassener Button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PressedButton {
    pub action: ToolbarAction,
    pub button: PointerButton,
}

/// Zustand der Overlay-Toolbar
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WidgetState {
    /// Linke obere Ecke der Toolbar in Viewport-Pixeln
    pub window_position: Vec2,
    /// Aktive Interaktion
    pub interaction: Interaction,
    /// Button, auf dem die Maus gedrückt wurde (Klick = Down + Up auf demselben Button)
    pub pressed: Option<PressedButton>,
    /// Zweite Button-Gruppe sichtbar
    pub show_sub_controls: bool,
    /// Rotations-Gizmo sichtbar
    pub show_rotation_gizmo: bool,
}

impl WidgetState {
    /// Erstellt den Standardzustand aus den Optionen.
    pub fn new(options: &OverlayOptions) -> Self {
        Self {
            window_position: options.default_window_position(),
            interaction: Interaction::Idle,
            pressed: None,
            show_sub_controls: true,
            show_rotation_gizmo: false,
        }
    }

    /// Lädt die gespiegelten Felder aus dem Präferenz-Speicher.
    pub fn load(store: &dyn PreferenceStore, options: &OverlayOptions) -> Self {
        let defaults = Self::new(options);
        Self {
            window_position: store.get_vec2(WINDOW_POSITION_KEY, defaults.window_position),
            show_sub_controls: store.get_bool(SHOW_SUB_CONTROLS_KEY, defaults.show_sub_controls),
            show_rotation_gizmo: store
                .get_bool(SHOW_ROTATION_GIZMO_KEY, defaults.show_rotation_gizmo),
            ..defaults
        }
    }

    /// Schreibt die gespiegelten Felder, die sich gegenüber `previous` geändert haben.
    pub fn persist_changes(&self, previous: &WidgetState, store: &mut dyn PreferenceStore) {
        if self.window_position != previous.window_position {
            store.set_vec2(WINDOW_POSITION_KEY, self.window_position);
        }
        if self.show_sub_controls != previous.show_sub_controls {
            store.set_bool(SHOW_SUB_CONTROLS_KEY, self.show_sub_controls);
        }
        if self.show_rotation_gizmo != previous.show_rotation_gizmo {
            store.set_bool(SHOW_ROTATION_GIZMO_KEY, self.show_rotation_gizmo);
        }
    }

    /// Zustand der Zustandsmaschine.
    pub fn mode(&self) -> WidgetMode {
        match self.interaction {
            Interaction::Dragging { .. } => WidgetMode::Dragging,
            Interaction::PickingPosition { .. } => WidgetMode::PickingPosition,
            Interaction::Idle if self.gizmo_active() => WidgetMode::RotatingViaGizmo,
            Interaction::Idle => WidgetMode::Idle,
        }
    }

    /// Ob der Rotations-Gizmo tatsächlich angezeigt wird (nur mit Zweitzeile).
    pub fn gizmo_active(&self) -> bool {
        self.show_rotation_gizmo && self.show_sub_controls
    }

    /// Ob gerade eine Position per Raycast gewählt wird.
    pub fn is_picking(&self) -> bool {
        matches!(self.interaction, Interaction::PickingPosition { .. })
    }
}
