//! Reine Übergangsfunktion der Overlay-Zustandsmaschine.
//!
//! `handle_event` liest Widget-Zustand, einen Ausschnitt des Referenz-Zustands
//! und ein Event und liefert den Folgezustand plus die auszuführenden
//! Commands. Keine Seiteneffekte, kein Zugriff auf Speicher oder Szene.

use super::events::{OverlayCommand, OverlayEvent, PointerButton};
use super::layout::{self, ToolbarAction, ToolbarButton};
use super::widget::{Interaction, PressedButton, WidgetState};
use crate::shared::{OverlayOptions, ScreenRect};
use glam::{Quat, Vec2, Vec3};

/// Ausschnitt des Referenz-Zustands, den die Übergangsfunktion benötigt.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReferenceView {
    /// Gespeicherte Position in der aktiven Szene
    pub position: Vec3,
    /// Sichtbarkeit der Referenzen
    pub visible: bool,
    /// Ob das Referenz-Set nicht leer ist
    pub has_references: bool,
}

/// Ergebnis eines Übergangs
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    /// Folgezustand
    pub state: WidgetState,
    /// Auszuführende Commands in Reihenfolge
    pub commands: Vec<OverlayCommand>,
    /// Ob das Event vom Overlay verbraucht wurde (Host soll es ignorieren)
    pub consumed: bool,
}

impl Transition {
    fn unchanged(state: &WidgetState, consumed: bool) -> Self {
        Self {
            state: *state,
            commands: Vec::new(),
            consumed,
        }
    }
}

/// Buttons der Toolbar für einen Widget-Zustand.
pub fn toolbar_buttons(
    state: &WidgetState,
    view: &ReferenceView,
    options: &OverlayOptions,
) -> Vec<ToolbarButton> {
    layout::layout(
        state.window_position,
        state.show_sub_controls,
        view.has_references,
        &options.toolbar,
    )
}

/// Übersetzt ein Event in Folgezustand und Commands.
pub fn handle_event(
    state: &WidgetState,
    view: &ReferenceView,
    event: &OverlayEvent,
    options: &OverlayOptions,
) -> Transition {
    match *event {
        OverlayEvent::Tick { viewport } => on_tick(state, viewport, options),
        OverlayEvent::PointerDown { button, pos } => {
            on_pointer_down(state, view, button, pos, options)
        }
        OverlayEvent::PointerMoved { pos } => on_pointer_moved(state, pos),
        OverlayEvent::PointerUp { button, pos } => on_pointer_up(state, view, button, pos, options),
        OverlayEvent::ColorChanged { color } => {
            if !state.show_sub_controls {
                return Transition::unchanged(state, false);
            }
            Transition {
                state: *state,
                commands: vec![OverlayCommand::SetColor { color }],
                consumed: true,
            }
        }
        OverlayEvent::GizmoRotated { rotation } => {
            if !state.gizmo_active() {
                return Transition::unchanged(state, false);
            }
            Transition {
                state: *state,
                commands: vec![OverlayCommand::SetRotation { rotation }],
                consumed: true,
            }
        }
    }
}

/// Hält die Toolbar im sichtbaren Bereich: liegt die Fensterposition außerhalb
/// des gepolsterten Viewports, springt sie auf die Standard-Position.
fn on_tick(state: &WidgetState, viewport: ScreenRect, options: &OverlayOptions) -> Transition {
    let padded = viewport.inset(options.viewport_padding);
    if padded.contains(state.window_position) {
        return Transition::unchanged(state, false);
    }

    let mut next = *state;
    next.window_position = options.default_window_position();
    Transition {
        state: next,
        commands: Vec::new(),
        consumed: false,
    }
}

fn on_pointer_down(
    state: &WidgetState,
    view: &ReferenceView,
    button: PointerButton,
    pos: Vec2,
    options: &OverlayOptions,
) -> Transition {
    // Laufende Interaktionen halten die Maus exklusiv
    if state.interaction != Interaction::Idle {
        return Transition::unchanged(state, true);
    }

    let buttons = toolbar_buttons(state, view, options);
    let Some(hit) = layout::hit_test(&buttons, pos) else {
        return Transition::unchanged(state, false);
    };

    let mut next = *state;
    if !hit.enabled {
        next.pressed = None;
    } else if hit.action == ToolbarAction::DragHandle && button == PointerButton::Primary {
        next.pressed = None;
        next.interaction = Interaction::Dragging {
            offset: state.window_position - pos,
        };
    } else {
        next.pressed = Some(PressedButton {
            action: hit.action,
            button,
        });
    }

    Transition {
        state: next,
        commands: Vec::new(),
        consumed: true,
    }
}

fn on_pointer_moved(state: &WidgetState, pos: Vec2) -> Transition {
    match state.interaction {
        Interaction::Dragging { offset } => {
            let mut next = *state;
            next.window_position = pos + offset;
            Transition {
                state: next,
                commands: Vec::new(),
                consumed: true,
            }
        }
        Interaction::PickingPosition { .. } => Transition {
            state: *state,
            commands: vec![OverlayCommand::PickPositionAt { screen_pos: pos }],
            consumed: true,
        },
        Interaction::Idle => Transition::unchanged(state, state.pressed.is_some()),
    }
}

fn on_pointer_up(
    state: &WidgetState,
    view: &ReferenceView,
    button: PointerButton,
    pos: Vec2,
    options: &OverlayOptions,
) -> Transition {
    let mut next = *state;
    match state.interaction {
        Interaction::Dragging { .. } => {
            next.interaction = Interaction::Idle;
            Transition {
                state: next,
                commands: Vec::new(),
                consumed: true,
            }
        }
        Interaction::PickingPosition { initial_position } => {
            next.interaction = Interaction::Idle;
            // Rechtsklick bricht ab: Position vor dem Picking wiederherstellen
            let commands = if button == PointerButton::Secondary {
                vec![OverlayCommand::SetPosition {
                    position: initial_position,
                }]
            } else {
                Vec::new()
            };
            Transition {
                state: next,
                commands,
                consumed: true,
            }
        }
        Interaction::Idle => {
            let Some(pressed) = state.pressed else {
                return Transition::unchanged(state, false);
            };
            next.pressed = None;

            let buttons = toolbar_buttons(state, view, options);
            let released_on = layout::hit_test(&buttons, pos)
                .filter(|hit| hit.enabled)
                .map(|hit| hit.action);

            let mut commands = Vec::new();
            if released_on == Some(pressed.action) && pressed.button == button {
                click(&mut next, view, pressed.action, button, &mut commands);
            }

            Transition {
                state: next,
                commands,
                consumed: true,
            }
        }
    }
}

/// Wirkung eines vollständigen Klicks auf einen Toolbar-Button.
fn click(
    next: &mut WidgetState,
    view: &ReferenceView,
    action: ToolbarAction,
    button: PointerButton,
    commands: &mut Vec<OverlayCommand>,
) {
    if button == PointerButton::Middle
        || (button == PointerButton::Secondary && !action.accepts_secondary())
    {
        return;
    }
    let secondary = button == PointerButton::Secondary;

    match action {
        ToolbarAction::DragHandle | ToolbarAction::Color => {}
        ToolbarAction::ToggleSubControls => {
            next.show_sub_controls = !next.show_sub_controls;
        }
        ToolbarAction::ToggleVisibility => commands.push(OverlayCommand::SetVisible {
            visible: !view.visible,
        }),
        ToolbarAction::Previous => commands.push(OverlayCommand::SelectPrevious),
        ToolbarAction::Next => commands.push(OverlayCommand::SelectNext),
        ToolbarAction::CurrentLabel => commands.push(OverlayCommand::FocusCurrentReference),
        ToolbarAction::PlacePosition if secondary => {
            next.interaction = Interaction::Idle;
            commands.push(OverlayCommand::SetPosition {
                position: Vec3::ZERO,
            });
        }
        ToolbarAction::PlacePosition => {
            next.show_rotation_gizmo = false;
            next.interaction = Interaction::PickingPosition {
                initial_position: view.position,
            };
        }
        ToolbarAction::ToggleRotation if secondary => {
            next.show_rotation_gizmo = false;
            commands.push(OverlayCommand::SetRotation {
                rotation: Quat::IDENTITY,
            });
        }
        ToolbarAction::ToggleRotation => {
            next.show_rotation_gizmo = !next.show_rotation_gizmo;
        }
    }
}
