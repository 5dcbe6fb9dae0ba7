//! Strahlen und Schnitttests für das Positions-Picking.

use glam::Vec3;

/// Strahl mit normierter Richtung
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Startpunkt
    pub origin: Vec3,
    /// Normierte Richtung
    pub direction: Vec3,
}

impl Ray {
    /// Erstellt einen Strahl; `None` bei Null-Richtung.
    pub fn new(origin: Vec3, direction: Vec3) -> Option<Self> {
        let direction = direction.try_normalize()?;
        Some(Self { origin, direction })
    }

    /// Punkt im Abstand `t` entlang des Strahls.
    pub fn point_at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    /// Abstand zum Schnittpunkt mit der horizontalen Ebene `y = height`.
    pub fn intersect_horizontal_plane(&self, height: f32) -> Option<f32> {
        if self.direction.y.abs() <= f32::EPSILON {
            return None;
        }
        let t = (height - self.origin.y) / self.direction.y;
        (t >= 0.0).then_some(t)
    }
}

/// Treffer eines Raycasts
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    /// Trefferpunkt in Welt-Koordinaten
    pub point: Vec3,
    /// Abstand vom Strahl-Ursprung
    pub distance: f32,
}

impl RayHit {
    /// Erstellt einen Treffer bei Abstand `t` entlang `ray`.
    pub fn along(ray: &Ray, t: f32) -> Self {
        Self {
            point: ray.point_at(t),
            distance: t,
        }
    }
}

/// Achsenparallele Box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    /// Erstellt eine Box aus zwei beliebigen Eckpunkten.
    pub fn from_corners(a: Vec3, b: Vec3) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Erstellt eine Box, die auf dem Boden (`min.y`) steht.
    pub fn standing(center_bottom: Vec3, size: Vec3) -> Self {
        let half = Vec3::new(size.x * 0.5, 0.0, size.z * 0.5);
        Self::from_corners(center_bottom - half, center_bottom + half + Vec3::Y * size.y)
    }

    /// Slab-Test: Abstand zum Eintrittspunkt (0, wenn der Ursprung innen liegt).
    pub fn intersect(&self, ray: &Ray) -> Option<f32> {
        let mut t_near = f32::NEG_INFINITY;
        let mut t_far = f32::INFINITY;

        for axis in 0..3 {
            let origin = ray.origin[axis];
            let direction = ray.direction[axis];
            let (min, max) = (self.min[axis], self.max[axis]);

            // Achsenparallel: kein Schnitt mit diesen Ebenen, nur Lage prüfen
            if direction.abs() <= f32::EPSILON {
                if origin < min || origin > max {
                    return None;
                }
                continue;
            }

            let t1 = (min - origin) / direction;
            let t2 = (max - origin) / direction;
            t_near = t_near.max(t1.min(t2));
            t_far = t_far.min(t1.max(t2));
        }

        if t_far < 0.0 || t_near > t_far {
            return None;
        }
        Some(t_near.max(0.0))
    }

    /// Ecken der Box (für Wireframe-Darstellung).
    pub fn corners(&self) -> [Vec3; 8] {
        let (a, b) = (self.min, self.max);
        [
            Vec3::new(a.x, a.y, a.z),
            Vec3::new(b.x, a.y, a.z),
            Vec3::new(b.x, a.y, b.z),
            Vec3::new(a.x, a.y, b.z),
            Vec3::new(a.x, b.y, a.z),
            Vec3::new(b.x, b.y, a.z),
            Vec3::new(b.x, b.y, b.z),
            Vec3::new(a.x, b.y, b.z),
        ]
    }
}
