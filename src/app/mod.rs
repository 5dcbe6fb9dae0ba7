//! Application-Layer: Controller, State, Events, Toolbar-Layout und Handler.

pub mod command_log;
pub mod controller;
pub mod events;
pub mod handlers;
pub mod layout;
pub mod references;
/// Overlay State
///
/// Dieses Modul verwaltet den Zustand einer Sitzung (Referenzen, Toolbar, Log).
pub mod state;
pub mod transition;
pub mod widget;

pub use command_log::CommandLog;
pub use controller::{EventOutcome, HostSelection, OverlayController};
pub use events::{OverlayCommand, OverlayEvent, PointerButton};
pub use layout::{ToolbarAction, ToolbarButton};
pub use references::ReferenceContext;
pub use state::OverlayState;
pub use transition::{ReferenceView, Transition};
pub use widget::{Interaction, WidgetMode, WidgetState};
