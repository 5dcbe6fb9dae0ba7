//! Overlay Controller für zentrale Event-Verarbeitung.

use super::transition;
use super::{OverlayCommand, OverlayEvent, OverlayState};
use crate::core::{ReferenceItem, SceneQuery};

/// Rückkanal zum Host: Referenz-Objekt selektieren und ins Bild holen.
pub trait HostSelection {
    /// Selektiert das Objekt der Referenz und richtet die Kamera darauf aus.
    fn frame(&mut self, item: &ReferenceItem);
}

/// Ergebnis der Verarbeitung eines Events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EventOutcome {
    /// Event wurde vom Overlay verbraucht (Host soll es nicht weiterverarbeiten)
    pub consumed: bool,
    /// Toolbar-Zustand oder Referenzen haben sich geändert (Repaint nötig)
    pub changed: bool,
}

/// Orchestriert Overlay-Events und Commands auf den OverlayState.
#[derive(Default)]
pub struct OverlayController {
    host_selection: Option<Box<dyn HostSelection>>,
}

impl OverlayController {
    /// Erstellt einen Controller ohne Host-Rückkanal.
    pub fn new() -> Self {
        Self {
            host_selection: None,
        }
    }

    /// Erstellt einen Controller mit Host-Rückkanal für den Referenz-Fokus.
    pub fn with_host_selection(host_selection: Box<dyn HostSelection>) -> Self {
        Self {
            host_selection: Some(host_selection),
        }
    }

    /// Verarbeitet ein Event über die Übergangsfunktion.
    pub fn handle_event(
        &mut self,
        state: &mut OverlayState,
        scene: &dyn SceneQuery,
        event: OverlayEvent,
    ) -> anyhow::Result<EventOutcome> {
        let previous = state.ensure_widget();
        let view = state.references.view();
        let step = transition::handle_event(&previous, &view, &event, &state.options);

        if step.state.mode() != previous.mode() {
            log::debug!("Overlay: {:?} -> {:?}", previous.mode(), step.state.mode());
        }
        if matches!(event, OverlayEvent::Tick { .. })
            && step.state.window_position != previous.window_position
        {
            log::debug!(
                "Toolbar außerhalb des Viewports ({:?}), zurück auf {:?}",
                previous.window_position,
                step.state.window_position
            );
        }

        let changed = step.state != previous || !step.commands.is_empty();
        state.commit_widget(step.state);

        for command in step.commands {
            self.handle_command(state, scene, command)?;
        }

        Ok(EventOutcome {
            consumed: step.consumed,
            changed,
        })
    }

    /// Verarbeitet mehrere Events in Reihenfolge und fasst die Ergebnisse zusammen.
    pub fn handle_events(
        &mut self,
        state: &mut OverlayState,
        scene: &dyn SceneQuery,
        events: impl IntoIterator<Item = OverlayEvent>,
    ) -> anyhow::Result<EventOutcome> {
        let mut total = EventOutcome::default();
        for event in events {
            let outcome = self.handle_event(state, scene, event)?;
            total.consumed |= outcome.consumed;
            total.changed |= outcome.changed;
        }
        Ok(total)
    }

    /// Führt mutierende Commands auf dem OverlayState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut OverlayState,
        scene: &dyn SceneQuery,
        command: OverlayCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Platzierung ===
            OverlayCommand::SetPosition { position } => {
                handlers::placement::set_position(state, position)
            }
            OverlayCommand::PickPositionAt { screen_pos } => {
                handlers::placement::pick_position_at(state, scene, screen_pos)
            }
            OverlayCommand::SetRotation { rotation } => {
                handlers::placement::set_rotation(state, rotation)
            }
            OverlayCommand::SetColor { color } => handlers::placement::set_color(state, color),

            // === Auswahl & Sichtbarkeit ===
            OverlayCommand::SetVisible { visible } => {
                handlers::selection::set_visible(state, visible)
            }
            OverlayCommand::SelectPrevious => handlers::selection::select_previous(state)?,
            OverlayCommand::SelectNext => handlers::selection::select_next(state)?,
            OverlayCommand::FocusCurrentReference => {
                handlers::selection::focus_current(state, self.host_selection.as_mut())?
            }
        }

        Ok(())
    }
}
