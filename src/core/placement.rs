//! Persistenter Platzierungszustand der Größenreferenzen.
//!
//! Position und Rotation werden pro Szene gespeichert (Schlüssel mit
//! Szenen-Suffix), Farbe, Sichtbarkeit und Auswahl global. Jeder Zugriff
//! liest den Speicher, jede Mutation schreibt sofort.

use super::preferences::PreferenceStore;
use glam::{Mat4, Quat, Vec3};

/// Vertikaler Versatz gegen Z-Fighting mit einer Bodenebene.
pub const GROUND_OFFSET: Vec3 = Vec3::new(0.0, 0.0005, 0.0);
/// Standard-Farbe der Referenz-Meshes (RGBA: Petrol).
pub const DEFAULT_MARKER_COLOR: [f32; 4] = [0.0, 0.4, 0.5, 1.0];

const POSITION_KEY: &str = "size_references.position";
const ROTATION_KEY: &str = "size_references.rotation";
const COLOR_KEY: &str = "size_references.color";
const VISIBLE_KEY: &str = "size_references.visible";
const SELECTED_INDEX_KEY: &str = "size_references.selected_index";

/// Schlüsselverwaltung und typisierte Zugriffe auf die Platzierung.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacementState {
    scene_id: String,
    default_color: [f32; 4],
}

impl PlacementState {
    /// Erstellt den Platzierungszustand für eine Szene.
    pub fn new(scene_id: impl Into<String>) -> Self {
        Self {
            scene_id: scene_id.into(),
            default_color: DEFAULT_MARKER_COLOR,
        }
    }

    /// Überschreibt die Standard-Farbe, die bei fehlendem Eintrag gilt.
    pub fn with_default_color(mut self, color: [f32; 4]) -> Self {
        self.default_color = color;
        self
    }

    /// Kennung der aktiven Szene.
    pub fn scene_id(&self) -> &str {
        &self.scene_id
    }

    /// Wechselt die aktive Szene (nur Schlüssel, keine Speicherzugriffe).
    pub fn set_scene_id(&mut self, scene_id: impl Into<String>) {
        self.scene_id = scene_id.into();
    }

    /// Speicher-Schlüssel der Position in der aktiven Szene.
    pub fn position_key(&self) -> String {
        format!("{}.{}", POSITION_KEY, self.scene_id)
    }

    /// Speicher-Schlüssel der Rotation in der aktiven Szene.
    pub fn rotation_key(&self) -> String {
        format!("{}.{}", ROTATION_KEY, self.scene_id)
    }

    pub fn position(&self, store: &dyn PreferenceStore) -> Vec3 {
        store.get_vec3(&self.position_key(), Vec3::ZERO)
    }

    pub fn set_position(&self, store: &mut dyn PreferenceStore, position: Vec3) {
        store.set_vec3(&self.position_key(), position);
    }

    pub fn rotation(&self, store: &dyn PreferenceStore) -> Quat {
        store.get_quat(&self.rotation_key(), Quat::IDENTITY)
    }

    pub fn set_rotation(&self, store: &mut dyn PreferenceStore, rotation: Quat) {
        store.set_quat(&self.rotation_key(), rotation);
    }

    pub fn color(&self, store: &dyn PreferenceStore) -> [f32; 4] {
        store.get_color(COLOR_KEY, self.default_color)
    }

    pub fn set_color(&self, store: &mut dyn PreferenceStore, color: [f32; 4]) {
        store.set_color(COLOR_KEY, color);
    }

    pub fn visible(&self, store: &dyn PreferenceStore) -> bool {
        store.get_bool(VISIBLE_KEY, true)
    }

    pub fn set_visible(&self, store: &mut dyn PreferenceStore, visible: bool) {
        store.set_bool(VISIBLE_KEY, visible);
    }

    /// Gespeicherter Auswahl-Index.
    ///
    /// Ohne Eintrag gilt die letzte Referenz. Negative Werte werden auf 0
    /// geklemmt, die obere Grenze klemmt das `ReferenceSet`.
    pub fn selected_index(&self, store: &dyn PreferenceStore, total: usize) -> usize {
        let fallback = i32::try_from(total.saturating_sub(1)).unwrap_or(i32::MAX);
        let raw = store.get_int(SELECTED_INDEX_KEY, fallback);
        usize::try_from(raw).unwrap_or(0)
    }

    pub fn set_selected_index(&self, store: &mut dyn PreferenceStore, index: usize) {
        store.set_int(
            SELECTED_INDEX_KEY,
            i32::try_from(index).unwrap_or(i32::MAX),
        );
    }
}

/// Live-Transformation und Material der Referenzen, wie der Host sie darstellt.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReferenceTransform {
    /// Weltposition inklusive `GROUND_OFFSET`
    pub position: Vec3,
    /// Rotation um den Platzierungspunkt
    pub rotation: Quat,
    /// Material-Farbe (RGBA)
    pub color: [f32; 4],
}

impl Default for ReferenceTransform {
    fn default() -> Self {
        Self {
            position: GROUND_OFFSET,
            rotation: Quat::IDENTITY,
            color: DEFAULT_MARKER_COLOR,
        }
    }
}

impl ReferenceTransform {
    /// Setzt die Live-Position aus einer gespeicherten Position.
    pub fn place(&mut self, stored_position: Vec3) {
        self.position = stored_position + GROUND_OFFSET;
    }

    /// Welt-Matrix für das Rendering.
    pub fn matrix(&self) -> Mat4 {
        Mat4::from_rotation_translation(self.rotation, self.position)
    }
}
