//! Size References Library.
//! Größenreferenzen für 3D-Szenen: Referenz-Set, persistente Platzierung
//! und Overlay-Toolbar als Library exportiert für Hosts und Tests.

pub mod app;
pub mod core;
pub mod shared;
pub mod ui;

pub use app::{
    EventOutcome, HostSelection, OverlayCommand, OverlayController, OverlayEvent, OverlayState,
    PointerButton, ReferenceContext, WidgetMode, WidgetState,
};
pub use core::{
    Aabb, MemoryPreferenceStore, PlacementState, PrefValue, PreferenceStore, Ray, RayHit,
    ReferenceCatalog, ReferenceError, ReferenceItem, ReferenceSet, SceneQuery, SetupError,
    StaticCatalog, StaticScene, ViewportCamera, VisualHandle,
};
pub use shared::{FilePreferenceStore, OverlayOptions, RenderPipeline, ScreenRect};
