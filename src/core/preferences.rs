//! Persistenter Key-Value-Speicher für Einstellungen.
//!
//! Der Speicher ist ein externer Kollaborator: der Host liefert eine
//! Implementierung von `PreferenceStore`. Schlüssel sind flache Strings,
//! Werte flache Skalare. Namespacing erfolgt ausschließlich über
//! String-Verkettung (z.B. Szenen-Suffix).

use glam::{Quat, Vec2, Vec3};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Ein gespeicherter Skalarwert.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrefValue {
    /// Wahrheitswert
    Bool(bool),
    /// Ganzzahl
    Int(i32),
    /// 2D-Vektor (x, y)
    Vec2([f32; 2]),
    /// 3D-Vektor (x, y, z)
    Vec3([f32; 3]),
    /// Quaternion (x, y, z, w)
    Quat([f32; 4]),
    /// Farbe (RGBA)
    Color([f32; 4]),
}

impl PrefValue {
    /// Typname für Log-Ausgaben.
    pub fn kind(&self) -> &'static str {
        match self {
            PrefValue::Bool(_) => "bool",
            PrefValue::Int(_) => "int",
            PrefValue::Vec2(_) => "vec2",
            PrefValue::Vec3(_) => "vec3",
            PrefValue::Quat(_) => "quat",
            PrefValue::Color(_) => "color",
        }
    }
}

/// Schnittstelle zum Präferenz-Speicher des Hosts.
///
/// Implementierungen liefern nur `value`/`set_value`; die typisierten
/// Zugriffe sind darauf aufgebaut. Ein gespeicherter Wert mit falschem Typ
/// wird wie ein fehlender Wert behandelt (Standardwert + Warnung).
pub trait PreferenceStore {
    /// Liest den Rohwert zu einem Schlüssel.
    fn value(&self, key: &str) -> Option<PrefValue>;

    /// Schreibt einen Rohwert (last write wins).
    fn set_value(&mut self, key: &str, value: PrefValue);

    /// Liest einen Wahrheitswert.
    fn get_bool(&self, key: &str, default: bool) -> bool {
        match self.value(key) {
            Some(PrefValue::Bool(v)) => v,
            other => fallback(key, other, "bool", default),
        }
    }

    /// Schreibt einen Wahrheitswert.
    fn set_bool(&mut self, key: &str, value: bool) {
        self.set_value(key, PrefValue::Bool(value));
    }

    /// Liest eine Ganzzahl.
    fn get_int(&self, key: &str, default: i32) -> i32 {
        match self.value(key) {
            Some(PrefValue::Int(v)) => v,
            other => fallback(key, other, "int", default),
        }
    }

    /// Schreibt eine Ganzzahl.
    fn set_int(&mut self, key: &str, value: i32) {
        self.set_value(key, PrefValue::Int(value));
    }

    /// Liest einen 2D-Vektor.
    fn get_vec2(&self, key: &str, default: Vec2) -> Vec2 {
        match self.value(key) {
            Some(PrefValue::Vec2(v)) => Vec2::from_array(v),
            other => fallback(key, other, "vec2", default),
        }
    }

    /// Schreibt einen 2D-Vektor.
    fn set_vec2(&mut self, key: &str, value: Vec2) {
        self.set_value(key, PrefValue::Vec2(value.to_array()));
    }

    /// Liest einen 3D-Vektor.
    fn get_vec3(&self, key: &str, default: Vec3) -> Vec3 {
        match self.value(key) {
            Some(PrefValue::Vec3(v)) => Vec3::from_array(v),
            other => fallback(key, other, "vec3", default),
        }
    }

    /// Schreibt einen 3D-Vektor.
    fn set_vec3(&mut self, key: &str, value: Vec3) {
        self.set_value(key, PrefValue::Vec3(value.to_array()));
    }

    /// Liest eine Rotation.
    fn get_quat(&self, key: &str, default: Quat) -> Quat {
        match self.value(key) {
            Some(PrefValue::Quat(v)) => Quat::from_array(v),
            other => fallback(key, other, "quat", default),
        }
    }

    /// Schreibt eine Rotation.
    fn set_quat(&mut self, key: &str, value: Quat) {
        self.set_value(key, PrefValue::Quat(value.to_array()));
    }

    /// Liest eine RGBA-Farbe.
    fn get_color(&self, key: &str, default: [f32; 4]) -> [f32; 4] {
        match self.value(key) {
            Some(PrefValue::Color(v)) => v,
            other => fallback(key, other, "color", default),
        }
    }

    /// Schreibt eine RGBA-Farbe.
    fn set_color(&mut self, key: &str, value: [f32; 4]) {
        self.set_value(key, PrefValue::Color(value));
    }
}

fn fallback<T>(key: &str, found: Option<PrefValue>, expected: &str, default: T) -> T {
    if let Some(found) = found {
        log::warn!(
            "Präferenz '{}' hat Typ {} statt {}, verwende Standardwert",
            key,
            found.kind(),
            expected
        );
    }
    default
}

/// Flüchtiger Präferenz-Speicher (nur für die laufende Sitzung).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemoryPreferenceStore {
    values: BTreeMap<String, PrefValue>,
}

impl MemoryPreferenceStore {
    /// Erstellt einen leeren Speicher.
    pub fn new() -> Self {
        Self {
            values: BTreeMap::new(),
        }
    }

    /// Erstellt einen Speicher aus bestehenden Einträgen.
    pub fn from_entries(values: BTreeMap<String, PrefValue>) -> Self {
        Self { values }
    }

    /// Anzahl gespeicherter Schlüssel.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Gibt `true` zurück, wenn keine Schlüssel gespeichert sind.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Alle Einträge in Schlüssel-Reihenfolge.
    pub fn entries(&self) -> &BTreeMap<String, PrefValue> {
        &self.values
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn value(&self, key: &str) -> Option<PrefValue> {
        self.values.get(key).copied()
    }

    fn set_value(&mut self, key: &str, value: PrefValue) {
        self.values.insert(key.to_string(), value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_missing_key_returns_default() {
        let store = MemoryPreferenceStore::new();
        assert!(store.get_bool("fehlt", true));
        assert_eq!(store.get_int("fehlt", 7), 7);
        assert_eq!(store.get_quat("fehlt", Quat::IDENTITY), Quat::IDENTITY);
    }

    #[test]
    fn test_vec3_roundtrip_is_exact() {
        let mut store = MemoryPreferenceStore::new();
        let value = Vec3::new(1.25, -3.5, 1e-4);
        store.set_vec3("pos", value);
        assert_eq!(store.get_vec3("pos", Vec3::ZERO), value);
    }

    #[test]
    fn test_wrong_type_is_treated_as_default() {
        let mut store = MemoryPreferenceStore::new();
        store.set_bool("key", true);

        assert_eq!(store.get_int("key", 3), 3);
        let v = store.get_vec2("key", Vec2::new(10.0, 10.0));
        assert_relative_eq!(v.x, 10.0);
        assert_relative_eq!(v.y, 10.0);
        // Der gespeicherte Wert bleibt unangetastet
        assert_eq!(store.value("key"), Some(PrefValue::Bool(true)));
    }

    #[test]
    fn test_last_write_wins() {
        let mut store = MemoryPreferenceStore::new();
        store.set_color("farbe", [1.0, 0.0, 0.0, 1.0]);
        store.set_color("farbe", [0.0, 1.0, 0.0, 0.5]);
        assert_eq!(store.get_color("farbe", [0.0; 4]), [0.0, 1.0, 0.0, 0.5]);
        assert_eq!(store.len(), 1);
    }
}
