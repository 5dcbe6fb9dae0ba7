//! UI-Komponenten: Overlay-Toolbar, Input-Umsetzung und Viewport-Darstellung.

pub mod input;
mod keyboard;
/// UI-Layer mit egui
///
/// Übersetzt egui-Eingaben in `OverlayEvent`s und zeichnet den Zustand,
/// ohne selbst Zustand zu verändern.
pub mod toolbar;
pub mod viewport;

pub use input::collect_overlay_events;
pub use toolbar::render_toolbar;
pub use viewport::{paint_scene, ReferenceDimensions};
