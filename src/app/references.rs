//! Referenz-Kontext: bündelt Präferenz-Speicher, Platzierung, Referenz-Set
//! und die Live-Transformation der Referenz-Meshes.
//!
//! Jede Mutation schreibt sofort in den Speicher und aktualisiert danach
//! die Live-Objekte. Gelesen wird immer aus dem Speicher.

use super::transition::ReferenceView;
use crate::core::{
    PlacementState, PreferenceStore, ReferenceCatalog, ReferenceError, ReferenceItem,
    ReferenceSet, ReferenceTransform, SetupError,
};
use crate::shared::{OverlayOptions, RenderPipeline};
use glam::{Quat, Vec3};

/// Zustand der Größenreferenzen einer Sitzung.
pub struct ReferenceContext {
    store: Box<dyn PreferenceStore>,
    placement: PlacementState,
    set: ReferenceSet,
    transform: ReferenceTransform,
    pipeline: RenderPipeline,
}

impl ReferenceContext {
    /// Erstellt den Kontext und wendet die gespeicherten Werte einmalig an.
    pub fn new(
        set: ReferenceSet,
        store: Box<dyn PreferenceStore>,
        scene_id: impl Into<String>,
        options: &OverlayOptions,
    ) -> Self {
        let placement = PlacementState::new(scene_id).with_default_color(options.default_marker_color);
        if set.is_empty() {
            log::warn!("Größenreferenzen ohne Einträge eingerichtet, Navigation deaktiviert");
        }

        let mut context = Self {
            store,
            placement,
            set,
            transform: ReferenceTransform::default(),
            pipeline: options.render_pipeline,
        };
        context.apply_persisted();
        log::info!(
            "Größenreferenzen eingerichtet: {} Einträge, Szene '{}', Pipeline {}",
            context.set.len(),
            context.placement.scene_id(),
            context.pipeline.tag()
        );
        context
    }

    /// Erstellt den Kontext aus einem Katalog für die konfigurierte Pipeline.
    pub fn from_catalog(
        catalog: &dyn ReferenceCatalog,
        store: Box<dyn PreferenceStore>,
        scene_id: impl Into<String>,
        options: &OverlayOptions,
    ) -> Result<Self, SetupError> {
        let pipeline = options.render_pipeline;
        let items = catalog
            .references(pipeline)
            .ok_or(SetupError::CatalogNotFound { pipeline })?;
        Ok(Self::new(ReferenceSet::new(items), store, scene_id, options))
    }

    /// Überträgt alle gespeicherten Werte auf Set und Live-Transformation.
    fn apply_persisted(&mut self) {
        let store = self.store.as_ref();
        let visible = self.placement.visible(store);
        let index = self.placement.selected_index(store, self.set.len());

        self.set.set_visible(visible);
        if !self.set.is_empty() {
            // Index ist über clamp bereits gültig, Fehler nur bei leerem Set
            if let Ok(clamped) = self.set.select_index(index) {
                log::debug!("Gespeicherte Auswahl {} angewendet", clamped);
            }
        }
        self.apply_scene_placement();
        self.transform.color = self.placement.color(self.store.as_ref());
    }

    fn apply_scene_placement(&mut self) {
        let store = self.store.as_ref();
        let position = self.placement.position(store);
        self.transform.rotation = self.placement.rotation(store);
        self.transform.place(position);
    }

    // ── Zugriffe ───────────────────────────────────────────────────

    pub fn set(&self) -> &ReferenceSet {
        &self.set
    }

    pub fn transform(&self) -> &ReferenceTransform {
        &self.transform
    }

    pub fn placement(&self) -> &PlacementState {
        &self.placement
    }

    pub fn store(&self) -> &dyn PreferenceStore {
        self.store.as_ref()
    }

    pub fn store_mut(&mut self) -> &mut dyn PreferenceStore {
        self.store.as_mut()
    }

    /// Konfigurierte Render-Pipeline.
    pub fn pipeline(&self) -> RenderPipeline {
        self.pipeline
    }

    /// Ob die Farbe als HDR-Wert bearbeitet wird.
    pub fn hdr_color(&self) -> bool {
        self.pipeline.hdr_color()
    }

    /// Kennung der aktiven Szene.
    pub fn scene_id(&self) -> &str {
        self.placement.scene_id()
    }

    // ── Platzierung ────────────────────────────────────────────────

    /// Gespeicherte Position in der aktiven Szene (ohne Boden-Versatz).
    pub fn position(&self) -> Vec3 {
        self.placement.position(self.store.as_ref())
    }

    /// Speichert die Position und setzt die Live-Position mit Boden-Versatz.
    pub fn set_position(&mut self, position: Vec3) {
        self.placement.set_position(self.store.as_mut(), position);
        self.transform.place(position);
    }

    pub fn rotation(&self) -> Quat {
        self.placement.rotation(self.store.as_ref())
    }

    pub fn set_rotation(&mut self, rotation: Quat) {
        self.placement.set_rotation(self.store.as_mut(), rotation);
        self.transform.rotation = rotation;
    }

    pub fn color(&self) -> [f32; 4] {
        self.placement.color(self.store.as_ref())
    }

    pub fn set_color(&mut self, color: [f32; 4]) {
        self.placement.set_color(self.store.as_mut(), color);
        self.transform.color = color;
    }

    pub fn is_visible(&self) -> bool {
        self.placement.visible(self.store.as_ref())
    }

    /// Speichert die Sichtbarkeit und wertet die Aktivierung neu aus.
    pub fn set_visible(&mut self, visible: bool) {
        self.placement.set_visible(self.store.as_mut(), visible);
        self.set.set_visible(visible);
    }

    // ── Auswahl ────────────────────────────────────────────────────

    /// Gespeicherter Auswahl-Index, auf die Set-Größe geklemmt.
    pub fn selected_index(&self) -> usize {
        let raw = self
            .placement
            .selected_index(self.store.as_ref(), self.set.len());
        self.set.clamp_index(raw).unwrap_or(0)
    }

    /// Wählt eine Referenz aus (Index ≥ Anzahl wird auf den letzten geklemmt).
    pub fn select_index(&mut self, index: usize) -> Result<usize, ReferenceError> {
        let selected = self.set.select_index(index)?;
        self.placement
            .set_selected_index(self.store.as_mut(), selected);
        Ok(selected)
    }

    /// Nächste Referenz (zirkulär).
    pub fn select_next(&mut self) -> Result<usize, ReferenceError> {
        let selected = self.set.select_next()?;
        self.placement
            .set_selected_index(self.store.as_mut(), selected);
        Ok(selected)
    }

    /// Vorherige Referenz (zirkulär).
    pub fn select_previous(&mut self) -> Result<usize, ReferenceError> {
        let selected = self.set.select_previous()?;
        self.placement
            .set_selected_index(self.store.as_mut(), selected);
        Ok(selected)
    }

    pub fn current_item(&self) -> Result<&ReferenceItem, ReferenceError> {
        self.set.current_item()
    }

    // ── Szenen ─────────────────────────────────────────────────────

    /// Wechselt die aktive Szene und übernimmt deren gespeicherte Platzierung.
    pub fn switch_scene(&mut self, scene_id: impl Into<String>) {
        self.placement.set_scene_id(scene_id);
        self.apply_scene_placement();
        log::info!(
            "Szene '{}' aktiv, Referenzen bei {:?}",
            self.placement.scene_id(),
            self.position()
        );
    }

    /// Ausschnitt für die Übergangsfunktion der Toolbar.
    pub fn view(&self) -> ReferenceView {
        ReferenceView {
            position: self.position(),
            visible: self.is_visible(),
            has_references: !self.set.is_empty(),
        }
    }
}
