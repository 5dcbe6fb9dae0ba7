//! Core-Domänentypen: Referenz-Set, Platzierung, Präferenzen, Kamera, Raycasts.

pub mod camera;
pub mod catalog;
pub mod placement;
pub mod preferences;
pub mod ray;
pub mod reference_set;
pub mod scene;

pub use camera::ViewportCamera;
pub use catalog::{ReferenceCatalog, SetupError, StaticCatalog};
pub use placement::{PlacementState, ReferenceTransform, DEFAULT_MARKER_COLOR, GROUND_OFFSET};
pub use preferences::{MemoryPreferenceStore, PrefValue, PreferenceStore};
pub use ray::{Aabb, Ray, RayHit};
pub use reference_set::{ReferenceError, ReferenceItem, ReferenceSet, VisualHandle};
pub use scene::{Collider, SceneQuery, StaticScene};
