//! OverlayEvent- und OverlayCommand-Enums für den Event/Command-Datenfluss.

use crate::shared::ScreenRect;
use glam::{Quat, Vec2, Vec3};

/// Maustaste eines Pointer-Events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    /// Linke Taste
    Primary,
    /// Rechte Taste
    Secondary,
    /// Mittlere Taste
    Middle,
}

/// Eingaben des Hosts ohne direkte Mutationslogik.
///
/// Positionen sind Viewport-lokale Pixel (Y nach unten).
#[derive(Debug, Clone, PartialEq)]
pub enum OverlayEvent {
    /// Neuer Frame mit der aktuellen Viewport-Fläche
    Tick { viewport: ScreenRect },
    /// Maustaste gedrückt
    PointerDown { button: PointerButton, pos: Vec2 },
    /// Maus bewegt (mit oder ohne gedrückte Taste)
    PointerMoved { pos: Vec2 },
    /// Maustaste losgelassen
    PointerUp { button: PointerButton, pos: Vec2 },
    /// Farbwähler des Frontends hat einen neuen Wert geliefert
    ColorChanged { color: [f32; 4] },
    /// Rotations-Gizmo des Hosts hat die Rotation geändert
    GizmoRotated { rotation: Quat },
}

/// Commands sind mutierende Schritte auf dem Referenz-Kontext,
/// die zentral vom Controller ausgeführt werden.
#[derive(Debug, Clone, PartialEq)]
pub enum OverlayCommand {
    /// Position setzen (Picking-Abbruch, Reset)
    SetPosition { position: Vec3 },
    /// Strahl durch den Screen-Punkt casten und bei Treffer positionieren
    PickPositionAt { screen_pos: Vec2 },
    /// Rotation setzen
    SetRotation { rotation: Quat },
    /// Material-Farbe setzen
    SetColor { color: [f32; 4] },
    /// Sichtbarkeit setzen
    SetVisible { visible: bool },
    /// Vorherige Referenz auswählen (zirkulär)
    SelectPrevious,
    /// Nächste Referenz auswählen (zirkulär)
    SelectNext,
    /// Aktuelle Referenz im Host selektieren und fokussieren
    FocusCurrentReference,
}
