//! Render-Pipeline-Variante des Hosts (shared zwischen Optionen und Katalog).

use serde::{Deserialize, Serialize};

/// Render-Pipeline, für die die Referenz-Meshes bereitgestellt werden.
///
/// Wird einmal beim Start aus der Konfiguration aufgelöst.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RenderPipeline {
    /// Standard-Pipeline (LDR-Farben)
    #[default]
    Standard,
    /// Universal-Pipeline (HDR-Farben)
    Universal,
    /// High-Definition-Pipeline (HDR-Farben)
    HighDefinition,
}

impl RenderPipeline {
    /// Ob der Farbwähler HDR-Werte anbieten soll.
    pub fn hdr_color(self) -> bool {
        !matches!(self, RenderPipeline::Standard)
    }

    /// Kurzname für Logs und Katalog-Pfade.
    pub fn tag(self) -> &'static str {
        match self {
            RenderPipeline::Standard => "RP",
            RenderPipeline::Universal => "URP",
            RenderPipeline::HighDefinition => "HDRP",
        }
    }
}
