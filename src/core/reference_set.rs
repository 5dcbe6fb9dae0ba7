//! Referenz-Set: geordnete Liste platzierbarer Größenreferenzen mit
//! genau einer aktuellen Auswahl.

use thiserror::Error;

/// Opaker Verweis auf ein darstellbares Objekt des Hosts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VisualHandle(pub u64);

/// Eine einzelne Größenreferenz (z.B. "Mensch 1,80 m").
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceItem {
    name: String,
    visual: VisualHandle,
    enabled: bool,
}

impl ReferenceItem {
    /// Erstellt eine deaktivierte Referenz.
    pub fn new(name: impl Into<String>, visual: VisualHandle) -> Self {
        Self {
            name: name.into(),
            visual,
            enabled: false,
        }
    }

    /// Anzeigename
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Darstellbares Objekt des Hosts
    pub fn visual(&self) -> VisualHandle {
        self.visual
    }

    /// Ob die Referenz aktuell dargestellt wird.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}

/// Fehler bei Zugriffen auf das Referenz-Set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReferenceError {
    /// Index liegt außerhalb des Sets (tritt nur bei leerem Set auf, da
    /// alle anderen Indizes geklemmt werden).
    #[error("Referenz-Index {index} außerhalb des gültigen Bereichs (Anzahl: {len})")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Geordnetes Set aus Referenzen.
///
/// Invariante: Ist das Set sichtbar und nicht leer, ist genau die Referenz
/// an `selected_index` aktiviert, sonst keine.
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceSet {
    items: Vec<ReferenceItem>,
    selected_index: usize,
    visible: bool,
    origin_marker_enabled: bool,
}

impl ReferenceSet {
    /// Erstellt ein sichtbares Set; ausgewählt ist die letzte Referenz.
    pub fn new(items: Vec<ReferenceItem>) -> Self {
        let selected_index = items.len().saturating_sub(1);
        let mut set = Self {
            items,
            selected_index,
            visible: true,
            origin_marker_enabled: true,
        };
        set.refresh_enabled();
        set
    }

    /// Anzahl der Referenzen.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Gibt `true` zurück, wenn das Set keine Referenzen enthält.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Alle Referenzen in Navigationsreihenfolge.
    pub fn items(&self) -> &[ReferenceItem] {
        &self.items
    }

    /// Anzeigenamen in Navigationsreihenfolge.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(ReferenceItem::name)
    }

    /// Aktuell ausgewählter Index.
    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    /// Ob das Set sichtbar ist.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Ob der Platzierungs-Marker (Pivot) dargestellt wird.
    pub fn origin_marker_enabled(&self) -> bool {
        self.origin_marker_enabled
    }

    /// Anzahl aktuell aktivierter Referenzen (0 oder 1).
    pub fn enabled_count(&self) -> usize {
        self.items.iter().filter(|item| item.enabled).count()
    }

    /// Klemmt einen Index auf `[0, len - 1]`.
    pub fn clamp_index(&self, index: usize) -> Result<usize, ReferenceError> {
        if self.items.is_empty() {
            return Err(ReferenceError::IndexOutOfRange { index, len: 0 });
        }
        Ok(index.min(self.items.len() - 1))
    }

    /// Wählt eine Referenz aus (geklemmt) und gibt den effektiven Index zurück.
    pub fn select_index(&mut self, index: usize) -> Result<usize, ReferenceError> {
        let index = self.clamp_index(index)?;
        self.selected_index = index;
        self.refresh_enabled();
        Ok(index)
    }

    /// Index der nächsten Referenz (zirkulär).
    pub fn next_index(&self) -> Result<usize, ReferenceError> {
        let current = self.clamp_index(self.selected_index)?;
        Ok(if current + 1 >= self.items.len() {
            0
        } else {
            current + 1
        })
    }

    /// Index der vorherigen Referenz (zirkulär).
    pub fn previous_index(&self) -> Result<usize, ReferenceError> {
        let current = self.clamp_index(self.selected_index)?;
        Ok(if current == 0 {
            self.items.len() - 1
        } else {
            current - 1
        })
    }

    /// Wählt die nächste Referenz aus.
    pub fn select_next(&mut self) -> Result<usize, ReferenceError> {
        let index = self.next_index()?;
        self.select_index(index)
    }

    /// Wählt die vorherige Referenz aus.
    pub fn select_previous(&mut self) -> Result<usize, ReferenceError> {
        let index = self.previous_index()?;
        self.select_index(index)
    }

    /// Setzt die Sichtbarkeit und wertet die Aktivierung neu aus.
    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
        self.refresh_enabled();
    }

    /// Aktuell ausgewählte Referenz.
    pub fn current_item(&self) -> Result<&ReferenceItem, ReferenceError> {
        self.items
            .get(self.selected_index)
            .ok_or(ReferenceError::IndexOutOfRange {
                index: self.selected_index,
                len: self.items.len(),
            })
    }

    fn refresh_enabled(&mut self) {
        let selected = self.selected_index;
        let visible = self.visible;
        for (i, item) in self.items.iter_mut().enumerate() {
            item.enabled = visible && i == selected;
        }
        self.origin_marker_enabled = visible;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set_of(n: u64) -> ReferenceSet {
        ReferenceSet::new(
            (0..n)
                .map(|i| ReferenceItem::new(format!("Ref {i}"), VisualHandle(i)))
                .collect(),
        )
    }

    #[test]
    fn test_new_selects_last_item() {
        let set = set_of(4);
        assert_eq!(set.selected_index(), 3);
        assert_eq!(set.current_item().map(ReferenceItem::name), Ok("Ref 3"));
    }

    #[test]
    fn test_select_index_clamps_upper_bound() {
        let mut set = set_of(3);
        for index in [3, 4, 100, usize::MAX] {
            assert_eq!(set.select_index(index), Ok(2));
            assert_eq!(set.selected_index(), 2);
        }
    }

    #[test]
    fn test_next_previous_roundtrip_from_every_index() {
        let mut set = set_of(5);
        for start in 0..5 {
            set.select_index(start).unwrap();
            set.select_next().unwrap();
            set.select_previous().unwrap();
            assert_eq!(set.selected_index(), start);

            set.select_previous().unwrap();
            set.select_next().unwrap();
            assert_eq!(set.selected_index(), start);
        }
    }

    #[test]
    fn test_navigation_wraps_at_boundaries() {
        let mut set = set_of(3);
        set.select_index(0).unwrap();
        assert_eq!(set.select_previous(), Ok(2));
        assert_eq!(set.select_next(), Ok(0));
    }

    #[test]
    fn test_exactly_one_enabled_when_visible() {
        let mut set = set_of(4);
        for index in 0..4 {
            set.select_index(index).unwrap();
            assert_eq!(set.enabled_count(), 1);
            assert!(set.items()[index].is_enabled());
        }
        assert!(set.origin_marker_enabled());
    }

    #[test]
    fn test_none_enabled_when_hidden() {
        let mut set = set_of(4);
        set.set_visible(false);
        assert_eq!(set.enabled_count(), 0);
        assert!(!set.origin_marker_enabled());

        set.select_index(1).unwrap();
        assert_eq!(set.enabled_count(), 0);

        set.set_visible(true);
        assert_eq!(set.enabled_count(), 1);
        assert!(set.items()[1].is_enabled());
    }

    #[test]
    fn test_empty_set_rejects_selection() {
        let mut set = ReferenceSet::new(Vec::new());
        assert_eq!(
            set.select_index(0),
            Err(ReferenceError::IndexOutOfRange { index: 0, len: 0 })
        );
        assert!(set.select_next().is_err());
        assert!(set.select_previous().is_err());
        assert!(set.current_item().is_err());
        assert_eq!(set.enabled_count(), 0);
    }

    #[test]
    fn test_single_item_wraps_onto_itself() {
        let mut set = set_of(1);
        assert_eq!(set.select_next(), Ok(0));
        assert_eq!(set.select_previous(), Ok(0));
    }
}
