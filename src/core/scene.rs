//! Szenen-Schnittstelle des Hosts: Kamera + Geometrie-Abfragen.

use super::camera::ViewportCamera;
use super::ray::{Aabb, Ray, RayHit};

/// Vom Host gelieferte Sicht auf die aktuelle 3D-Szene.
pub trait SceneQuery {
    /// Kamera des Viewports, in dem das Overlay liegt.
    fn camera(&self) -> &ViewportCamera;

    /// Nächster Treffer eines Strahls mit der Szenen-Geometrie.
    fn raycast(&self, ray: &Ray) -> Option<RayHit>;
}

/// Kollisionsform einer statischen Szene
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Collider {
    /// Unendliche horizontale Ebene auf Höhe `y`
    Ground { height: f32 },
    /// Achsenparallele Box
    Box(Aabb),
}

impl Collider {
    fn intersect(&self, ray: &Ray) -> Option<f32> {
        match self {
            Collider::Ground { height } => ray.intersect_horizontal_plane(*height),
            Collider::Box(aabb) => aabb.intersect(ray),
        }
    }
}

/// Einfache statische Szene (Boden + Boxen).
#[derive(Debug, Clone, Default)]
pub struct StaticScene {
    /// Viewport-Kamera
    pub camera: ViewportCamera,
    /// Geometrie für Raycasts
    pub colliders: Vec<Collider>,
}

impl StaticScene {
    /// Erstellt eine Szene mit Bodenebene auf Höhe 0.
    pub fn with_ground(camera: ViewportCamera) -> Self {
        Self {
            camera,
            colliders: vec![Collider::Ground { height: 0.0 }],
        }
    }

    /// Fügt eine Box hinzu.
    pub fn add_box(&mut self, aabb: Aabb) {
        self.colliders.push(Collider::Box(aabb));
    }

    /// Alle Boxen der Szene (für die Darstellung).
    pub fn boxes(&self) -> impl Iterator<Item = &Aabb> {
        self.colliders.iter().filter_map(|c| match c {
            Collider::Box(aabb) => Some(aabb),
            Collider::Ground { .. } => None,
        })
    }
}

impl SceneQuery for StaticScene {
    fn camera(&self) -> &ViewportCamera {
        &self.camera
    }

    fn raycast(&self, ray: &Ray) -> Option<RayHit> {
        self.colliders
            .iter()
            .filter_map(|collider| collider.intersect(ray))
            .min_by(|a, b| a.total_cmp(b))
            .map(|t| RayHit::along(ray, t))
    }
}
