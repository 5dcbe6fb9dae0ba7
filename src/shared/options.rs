//! Zentrale Konfiguration für das Größenreferenz-Overlay.
//!
//! `OverlayOptions` enthält alle beim Start geladenen Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use super::RenderPipeline;
use crate::core::placement::DEFAULT_MARKER_COLOR;
use serde::{Deserialize, Serialize};

// ── Toolbar-Layout ──────────────────────────────────────────────────

/// Höhe aller Toolbar-Buttons in Pixeln.
pub const TOOLBAR_HEIGHT: f32 = 23.0;
/// Überlappung benachbarter Buttons (optisch verbundene Gruppe).
pub const BUTTON_OVERLAP: f32 = 2.0;
/// Breite des Drag-Griffs.
pub const DRAG_HANDLE_WIDTH: f32 = 10.0;
/// Breite der Icon-Buttons (Einblenden, Sichtbarkeit, Platzieren, Rotieren).
pub const ICON_BUTTON_WIDTH: f32 = 26.0;
/// Breite der Navigations-Buttons (vorherige/nächste Referenz).
pub const NAV_BUTTON_WIDTH: f32 = 19.0;
/// Breite des Labels mit dem Namen der aktuellen Referenz.
pub const LABEL_WIDTH: f32 = 120.0;
/// Breite des Farbfelds.
pub const COLOR_FIELD_WIDTH: f32 = 50.0;
/// Größe des Aktiv-Indikators relativ zum Button.
pub const INDICATOR_SCALE: f32 = 0.55;

// ── Fenster ─────────────────────────────────────────────────────────

/// Standard-Position der Toolbar (linke obere Viewport-Ecke).
pub const DEFAULT_WINDOW_POSITION: [f32; 2] = [10.0, 10.0];
/// Innenabstand, in dem die Toolbar-Position im Viewport liegen muss.
pub const VIEWPORT_PADDING: f32 = 5.0;

/// Maße der Overlay-Toolbar.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ToolbarMetrics {
    /// Button-Höhe
    pub height: f32,
    /// Überlappung benachbarter Buttons
    pub overlap: f32,
    /// Breite des Drag-Griffs
    pub drag_handle_width: f32,
    /// Breite der Icon-Buttons
    pub icon_button_width: f32,
    /// Breite der Navigations-Buttons
    pub nav_button_width: f32,
    /// Breite des Referenz-Labels
    pub label_width: f32,
    /// Breite des Farbfelds
    pub color_field_width: f32,
    /// Skalierung des Aktiv-Indikators
    pub indicator_scale: f32,
}

impl Default for ToolbarMetrics {
    fn default() -> Self {
        Self {
            height: TOOLBAR_HEIGHT,
            overlap: BUTTON_OVERLAP,
            drag_handle_width: DRAG_HANDLE_WIDTH,
            icon_button_width: ICON_BUTTON_WIDTH,
            nav_button_width: NAV_BUTTON_WIDTH,
            label_width: LABEL_WIDTH,
            color_field_width: COLOR_FIELD_WIDTH,
            indicator_scale: INDICATOR_SCALE,
        }
    }
}

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle beim Start geladenen Overlay-Optionen.
/// Wird als `size_references.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OverlayOptions {
    /// Render-Pipeline des Hosts (bestimmt Prefab-Variante und HDR-Farben)
    #[serde(default)]
    pub render_pipeline: RenderPipeline,
    /// Standard-Position der Toolbar, auch Ziel beim Zurücksetzen
    pub default_window_position: [f32; 2],
    /// Innenabstand für die Sichtbarkeitsprüfung der Toolbar
    pub viewport_padding: f32,
    /// Standard-Farbe der Referenz-Meshes
    pub default_marker_color: [f32; 4],
    /// Toolbar-Maße
    #[serde(default)]
    pub toolbar: ToolbarMetrics,
    /// Dateiname der Präferenz-Ablage (relativ zur Optionen-Datei)
    #[serde(default = "default_preferences_file")]
    pub preferences_file: String,
}

impl Default for OverlayOptions {
    fn default() -> Self {
        Self {
            render_pipeline: RenderPipeline::default(),
            default_window_position: DEFAULT_WINDOW_POSITION,
            viewport_padding: VIEWPORT_PADDING,
            default_marker_color: DEFAULT_MARKER_COLOR,
            toolbar: ToolbarMetrics::default(),
            preferences_file: default_preferences_file(),
        }
    }
}

/// Serde-Default für `preferences_file` (Abwärtskompatibilität).
fn default_preferences_file() -> String {
    "size_references_prefs.toml".to_string()
}

impl OverlayOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        Self::config_dir().join("size_references.toml")
    }

    /// Pfad der Präferenz-Ablage neben der Optionen-Datei.
    pub fn preferences_path(&self) -> std::path::PathBuf {
        Self::config_dir().join(&self.preferences_file)
    }

    fn config_dir() -> std::path::PathBuf {
        std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(std::path::Path::to_path_buf))
            .unwrap_or_else(|| std::path::PathBuf::from("."))
    }

    /// Standard-Position der Toolbar als Vektor.
    pub fn default_window_position(&self) -> glam::Vec2 {
        glam::Vec2::from_array(self.default_window_position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_toml_roundtrip() {
        let mut options = OverlayOptions::default();
        options.render_pipeline = RenderPipeline::HighDefinition;
        options.toolbar.label_width = 150.0;

        let text = toml::to_string_pretty(&options).unwrap();
        let back: OverlayOptions = toml::from_str(&text).unwrap();

        assert_eq!(back, options);
    }

    #[test]
    fn test_missing_optional_sections_use_defaults() {
        let text = r#"
            default_window_position = [20.0, 30.0]
            viewport_padding = 5.0
            default_marker_color = [1.0, 1.0, 1.0, 1.0]
        "#;
        let options: OverlayOptions = toml::from_str(text).unwrap();

        assert_eq!(options.render_pipeline, RenderPipeline::Standard);
        assert_eq!(options.toolbar, ToolbarMetrics::default());
        assert_eq!(options.preferences_file, "size_references_prefs.toml");
    }

    #[test]
    fn test_save_then_load_from_file() {
        let path = std::env::temp_dir().join(format!(
            "size_references_options_{}.toml",
            std::process::id()
        ));
        let mut options = OverlayOptions::default();
        options.viewport_padding = 12.0;

        options.save_to_file(&path).unwrap();
        let loaded = OverlayOptions::load_from_file(&path);
        let _ = std::fs::remove_file(&path);

        assert_eq!(loaded, options);
    }

    #[test]
    fn test_unreadable_file_falls_back_to_defaults() {
        let path = std::path::Path::new("/nonexistent/size_references.toml");
        assert_eq!(OverlayOptions::load_from_file(path), OverlayOptions::default());
    }
}
