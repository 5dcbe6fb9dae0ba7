//! Wireframe-Darstellung der Demo-Szene und der Größenreferenzen.
//!
//! Alles wird mit dem egui-Painter über `ViewportCamera::world_to_screen`
//! projiziert. Segmente mit einem Endpunkt hinter der Kamera entfallen.

use super::input::to_screen;
use crate::app::{ReferenceContext, WidgetState};
use crate::core::{Aabb, StaticScene, ViewportCamera, VisualHandle};
use glam::{Mat4, Vec3};
use std::collections::HashMap;

const GRID_HALF_EXTENT: i32 = 10;
const GIZMO_RADIUS: f32 = 1.2;
const GIZMO_SEGMENTS: usize = 48;
const ORIGIN_MARKER_SIZE: f32 = 0.25;

/// Kanten einer Box über die Eckindizes von `Aabb::corners`.
const BOX_EDGES: [(usize, usize); 12] = [
    (0, 1),
    (1, 2),
    (2, 3),
    (3, 0),
    (4, 5),
    (5, 6),
    (6, 7),
    (7, 4),
    (0, 4),
    (1, 5),
    (2, 6),
    (3, 7),
];

/// Abmessungen (Breite, Höhe, Tiefe in Metern) je Referenz-Objekt.
#[derive(Debug, Clone, Default)]
pub struct ReferenceDimensions {
    sizes: HashMap<VisualHandle, Vec3>,
}

impl ReferenceDimensions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: Abmessungen eines Objekts eintragen.
    pub fn with(mut self, visual: VisualHandle, size: Vec3) -> Self {
        self.sizes.insert(visual, size);
        self
    }

    /// Abmessungen oder ein Einheitswürfel für unbekannte Objekte.
    pub fn size_of(&self, visual: VisualHandle) -> Vec3 {
        self.sizes.get(&visual).copied().unwrap_or(Vec3::ONE)
    }
}

/// Zeichnet Boden-Raster, Szenen-Boxen, die aktive Referenz und den Gizmo.
pub fn paint_scene(
    painter: &egui::Painter,
    rect: egui::Rect,
    scene: &StaticScene,
    references: &ReferenceContext,
    widget: Option<&WidgetState>,
    dimensions: &ReferenceDimensions,
) {
    let camera = &scene.camera;
    let grid_stroke = egui::Stroke::new(1.0, egui::Color32::from_gray(60));
    let box_stroke = egui::Stroke::new(1.5, egui::Color32::from_gray(150));

    for i in -GRID_HALF_EXTENT..=GRID_HALF_EXTENT {
        let offset = i as f32;
        let extent = GRID_HALF_EXTENT as f32;
        line(
            painter,
            rect,
            camera,
            Vec3::new(offset, 0.0, -extent),
            Vec3::new(offset, 0.0, extent),
            grid_stroke,
        );
        line(
            painter,
            rect,
            camera,
            Vec3::new(-extent, 0.0, offset),
            Vec3::new(extent, 0.0, offset),
            grid_stroke,
        );
    }

    for aabb in scene.boxes() {
        wire_box(painter, rect, camera, aabb, Mat4::IDENTITY, box_stroke);
    }

    let set = references.set();
    let transform = references.transform();
    let [r, g, b, a] = transform.color;
    let reference_color = egui::Color32::from_rgba_unmultiplied(
        (r.clamp(0.0, 1.0) * 255.0) as u8,
        (g.clamp(0.0, 1.0) * 255.0) as u8,
        (b.clamp(0.0, 1.0) * 255.0) as u8,
        (a.clamp(0.0, 1.0) * 255.0) as u8,
    );
    let reference_stroke = egui::Stroke::new(2.0, reference_color);

    for item in set.items().iter().filter(|item| item.is_enabled()) {
        let size = dimensions.size_of(item.visual());
        let local = Aabb::standing(Vec3::ZERO, size);
        wire_box(
            painter,
            rect,
            camera,
            &local,
            transform.matrix(),
            reference_stroke,
        );
    }

    if set.origin_marker_enabled() {
        let p = transform.position;
        let s = ORIGIN_MARKER_SIZE;
        line(painter, rect, camera, p - Vec3::X * s, p + Vec3::X * s, reference_stroke);
        line(painter, rect, camera, p - Vec3::Z * s, p + Vec3::Z * s, reference_stroke);
    }

    if widget.is_some_and(|w| w.gizmo_active()) {
        paint_rotation_gizmo(painter, rect, camera, transform.matrix());
    }
}

/// Ring um die Hochachse plus Richtungsmarke für die aktuelle Rotation.
fn paint_rotation_gizmo(
    painter: &egui::Painter,
    rect: egui::Rect,
    camera: &ViewportCamera,
    model: Mat4,
) {
    let stroke = egui::Stroke::new(2.0, egui::Color32::from_rgb(80, 200, 80));
    let point = |i: usize| {
        let angle = i as f32 / GIZMO_SEGMENTS as f32 * std::f32::consts::TAU;
        model.transform_point3(Vec3::new(angle.cos(), 0.0, angle.sin()) * GIZMO_RADIUS)
    };
    for i in 0..GIZMO_SEGMENTS {
        line(painter, rect, camera, point(i), point(i + 1), stroke);
    }
    line(
        painter,
        rect,
        camera,
        model.transform_point3(Vec3::ZERO),
        model.transform_point3(Vec3::Z * GIZMO_RADIUS),
        stroke,
    );
}

fn wire_box(
    painter: &egui::Painter,
    rect: egui::Rect,
    camera: &ViewportCamera,
    aabb: &Aabb,
    model: Mat4,
    stroke: egui::Stroke,
) {
    let corners = aabb.corners().map(|c| model.transform_point3(c));
    for (a, b) in BOX_EDGES {
        line(painter, rect, camera, corners[a], corners[b], stroke);
    }
}

fn line(
    painter: &egui::Painter,
    rect: egui::Rect,
    camera: &ViewportCamera,
    from: Vec3,
    to: Vec3,
    stroke: egui::Stroke,
) {
    let (Some(a), Some(b)) = (camera.world_to_screen(from), camera.world_to_screen(to)) else {
        return;
    };
    painter.line_segment([to_screen(a, rect), to_screen(b, rect)], stroke);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_visual_falls_back_to_unit_cube() {
        let dims = ReferenceDimensions::new().with(VisualHandle(1), Vec3::new(0.5, 1.8, 0.3));
        assert_eq!(dims.size_of(VisualHandle(1)), Vec3::new(0.5, 1.8, 0.3));
        assert_eq!(dims.size_of(VisualHandle(7)), Vec3::ONE);
    }
}
