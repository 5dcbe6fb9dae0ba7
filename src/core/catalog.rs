//! Katalog der Referenz-Meshes je Render-Pipeline.
//!
//! Der Host liefert die Referenzen explizit; es findet keine Suche in
//! geladenen Assets statt.

use super::reference_set::ReferenceItem;
use crate::shared::RenderPipeline;
use std::collections::HashMap;
use thiserror::Error;

/// Fehler beim Einrichten der Größenreferenzen.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SetupError {
    /// Für die Pipeline ist kein Referenz-Prefab registriert.
    #[error("Kein Referenz-Prefab für Render-Pipeline {} gefunden", .pipeline.tag())]
    CatalogNotFound { pipeline: RenderPipeline },
}

/// Quelle der Referenz-Meshes.
pub trait ReferenceCatalog {
    /// Referenzen für eine Pipeline in Navigationsreihenfolge.
    fn references(&self, pipeline: RenderPipeline) -> Option<Vec<ReferenceItem>>;
}

/// Katalog mit fest registrierten Einträgen.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    entries: HashMap<RenderPipeline, Vec<ReferenceItem>>,
}

impl StaticCatalog {
    /// Erstellt einen leeren Katalog.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Registriert die Referenzen einer Pipeline (ersetzt bestehende).
    pub fn register(&mut self, pipeline: RenderPipeline, items: Vec<ReferenceItem>) {
        self.entries.insert(pipeline, items);
    }

    /// Builder-Variante von `register`.
    pub fn with(mut self, pipeline: RenderPipeline, items: Vec<ReferenceItem>) -> Self {
        self.register(pipeline, items);
        self
    }
}

impl ReferenceCatalog for StaticCatalog {
    fn references(&self, pipeline: RenderPipeline) -> Option<Vec<ReferenceItem>> {
        self.entries.get(&pipeline).cloned()
    }
}
