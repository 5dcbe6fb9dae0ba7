//! Präferenz-Ablage als flache TOML-Datei (Schlüssel → Skalar).

use crate::core::{MemoryPreferenceStore, PrefValue, PreferenceStore};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Dateibasierter Präferenz-Speicher.
///
/// Wird einmal geladen und bei jeder geänderten Schreiboperation sofort
/// zurückgeschrieben. Schreibfehler werden geloggt und unterbrechen die UI nicht.
#[derive(Debug)]
pub struct FilePreferenceStore {
    path: PathBuf,
    values: MemoryPreferenceStore,
    autosave: bool,
}

impl FilePreferenceStore {
    /// Lädt die Ablage. Fehlende oder fehlerhafte Dateien ergeben eine leere Ablage.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let values = match std::fs::read_to_string(&path) {
            Ok(content) => match toml::from_str::<BTreeMap<String, PrefValue>>(&content) {
                Ok(entries) => {
                    log::info!(
                        "{} Präferenzen geladen aus: {}",
                        entries.len(),
                        path.display()
                    );
                    MemoryPreferenceStore::from_entries(entries)
                }
                Err(e) => {
                    log::warn!("Präferenz-Datei fehlerhaft, starte leer: {}", e);
                    MemoryPreferenceStore::new()
                }
            },
            Err(_) => {
                log::info!("Keine Präferenz-Datei gefunden: {}", path.display());
                MemoryPreferenceStore::new()
            }
        };

        Self {
            path,
            values,
            autosave: true,
        }
    }

    /// Schaltet das sofortige Zurückschreiben ab (z.B. für Stapel-Importe).
    pub fn with_autosave(mut self, autosave: bool) -> Self {
        self.autosave = autosave;
        self
    }

    /// Pfad der Datei
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Anzahl gespeicherter Schlüssel.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Gibt `true` zurück, wenn keine Schlüssel gespeichert sind.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Schreibt alle Einträge in die Datei.
    pub fn save(&self) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self.values.entries())?;
        std::fs::write(&self.path, content)?;
        log::debug!("Präferenzen gespeichert nach: {}", self.path.display());
        Ok(())
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn value(&self, key: &str) -> Option<PrefValue> {
        self.values.value(key)
    }

    fn set_value(&mut self, key: &str, value: PrefValue) {
        if self.values.value(key) == Some(value) {
            return;
        }
        self.values.set_value(key, value);
        if self.autosave {
            if let Err(e) = self.save() {
                log::warn!("Präferenzen konnten nicht gespeichert werden: {:#}", e);
            }
        }
    }
}
