//! Overlay State: zentrale Datenhaltung einer Sitzung.

use super::layout::ToolbarButton;
use super::references::ReferenceContext;
use super::transition;
use super::widget::WidgetState;
use super::CommandLog;
use crate::shared::OverlayOptions;

/// Gesamtzustand des Overlays: Optionen, Referenzen, Toolbar, Command-Log.
pub struct OverlayState {
    /// Beim Start geladene Optionen
    pub options: OverlayOptions,
    /// Referenz-Set, Platzierung und Speicher
    pub references: ReferenceContext,
    /// Toolbar-Zustand, erst beim ersten Event angelegt
    widget: Option<WidgetState>,
    /// Ausgeführte Commands
    pub command_log: CommandLog,
}

impl OverlayState {
    /// Erstellt den State; die Toolbar wird erst bei Bedarf geladen.
    pub fn new(references: ReferenceContext, options: OverlayOptions) -> Self {
        Self {
            options,
            references,
            widget: None,
            command_log: CommandLog::new(),
        }
    }

    /// Toolbar-Zustand, beim ersten Zugriff aus dem Speicher geladen.
    pub fn ensure_widget(&mut self) -> WidgetState {
        if let Some(widget) = self.widget {
            return widget;
        }
        let widget = WidgetState::load(self.references.store(), &self.options);
        log::debug!(
            "Toolbar-Zustand geladen: Position {:?}, Zweitzeile {}",
            widget.window_position,
            widget.show_sub_controls
        );
        self.widget = Some(widget);
        widget
    }

    /// Toolbar-Zustand, falls bereits angelegt.
    pub fn widget(&self) -> Option<&WidgetState> {
        self.widget.as_ref()
    }

    /// Ersetzt den Toolbar-Zustand und spiegelt geänderte Felder in den Speicher.
    pub fn commit_widget(&mut self, next: WidgetState) {
        let previous = self.ensure_widget();
        next.persist_changes(&previous, self.references.store_mut());
        self.widget = Some(next);
    }

    /// Buttons der Toolbar für das Zeichnen im Frontend.
    pub fn toolbar_buttons(&mut self) -> Vec<ToolbarButton> {
        let widget = self.ensure_widget();
        transition::toolbar_buttons(&widget, &self.references.view(), &self.options)
    }
}
