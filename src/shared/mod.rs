//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Konfiguration, Screen-Geometrie und die dateibasierte
//! Präferenz-Ablage, die zwischen `app`, `ui` und dem Demo-Host geteilt werden.

pub mod options;
pub mod preference_file;
mod rect;
mod render_pipeline;

pub use options::{OverlayOptions, ToolbarMetrics};
pub use preference_file::FilePreferenceStore;
pub use rect::ScreenRect;
pub use render_pipeline::RenderPipeline;
