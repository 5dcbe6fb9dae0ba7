//! Perspektivische Viewport-Kamera für Ray-Picking und Overlay-Projektion.

use super::ray::Ray;
use glam::{Mat4, Vec2, Vec3};

/// Perspektivische Kamera des Szenen-Viewports
#[derive(Debug, Clone, PartialEq)]
pub struct ViewportCamera {
    /// Augpunkt in Welt-Koordinaten
    pub position: Vec3,
    /// Blickziel in Welt-Koordinaten
    pub target: Vec3,
    /// Vertikaler Öffnungswinkel (Radiant)
    pub fov_y: f32,
    /// Near-Plane-Abstand
    pub near: f32,
    /// Far-Plane-Abstand
    pub far: f32,
    /// Viewport-Größe in Pixeln
    pub viewport_size: Vec2,
}

impl ViewportCamera {
    /// Minimaler Abstand zwischen Augpunkt und Ziel.
    pub const MIN_DISTANCE: f32 = 0.1;

    /// Erstellt eine Kamera in Augenhöhe mit Blick auf den Ursprung.
    pub fn new(viewport_size: Vec2) -> Self {
        Self {
            position: Vec3::new(0.0, 1.7, 6.0),
            target: Vec3::ZERO,
            fov_y: 60f32.to_radians(),
            near: 0.05,
            far: 1000.0,
            viewport_size,
        }
    }

    /// Richtet die Kamera auf einen Punkt aus.
    pub fn look_at(&mut self, target: Vec3) {
        self.target = target;
    }

    /// Kreist um das Blickziel (Yaw um Welt-Y, Pitch um die Kamera-Rechte).
    pub fn orbit(&mut self, yaw: f32, pitch: f32) {
        let offset = self.position - self.target;
        let distance = offset.length().max(Self::MIN_DISTANCE);
        let current_pitch = (offset.y / distance).clamp(-1.0, 1.0).asin();
        let current_yaw = offset.x.atan2(offset.z);

        let limit = 89f32.to_radians();
        let new_pitch = (current_pitch + pitch).clamp(-limit, limit);
        let new_yaw = current_yaw + yaw;

        self.position = self.target
            + Vec3::new(
                distance * new_pitch.cos() * new_yaw.sin(),
                distance * new_pitch.sin(),
                distance * new_pitch.cos() * new_yaw.cos(),
            );
    }

    /// Ändert den Abstand zum Blickziel um einen Faktor.
    pub fn dolly(&mut self, factor: f32) {
        let offset = (self.position - self.target) * factor;
        if offset.length() >= Self::MIN_DISTANCE {
            self.position = self.target + offset;
        }
    }

    /// Seitenverhältnis des Viewports.
    pub fn aspect(&self) -> f32 {
        self.viewport_size.x / self.viewport_size.y.max(1.0)
    }

    /// View-Matrix (Welt → Kamera)
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, Vec3::Y)
    }

    /// Projektionsmatrix (Kamera → Clip, Tiefe 0..1)
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_y, self.aspect(), self.near, self.far)
    }

    /// Kombinierte View-Projection-Matrix
    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Erzeugt einen Strahl durch einen Screen-Punkt (Pixel, Y nach unten).
    ///
    /// Gibt `None` zurück, wenn der Viewport degeneriert ist.
    pub fn screen_ray(&self, screen_pos: Vec2) -> Option<Ray> {
        if self.viewport_size.x <= 0.0 || self.viewport_size.y <= 0.0 {
            return None;
        }

        let ndc = Vec2::new(
            screen_pos.x / self.viewport_size.x * 2.0 - 1.0,
            1.0 - screen_pos.y / self.viewport_size.y * 2.0,
        );
        let inverse = self.view_projection().inverse();
        let near = inverse.project_point3(Vec3::new(ndc.x, ndc.y, 0.0));
        let far = inverse.project_point3(Vec3::new(ndc.x, ndc.y, 1.0));

        Ray::new(near, far - near)
    }

    /// Projiziert einen Weltpunkt auf den Screen (Pixel, Y nach unten).
    ///
    /// Gibt `None` zurück, wenn der Punkt hinter der Kamera liegt.
    pub fn world_to_screen(&self, world: Vec3) -> Option<Vec2> {
        let clip = self.view_projection() * world.extend(1.0);
        if clip.w <= f32::EPSILON {
            return None;
        }
        let ndc = clip.truncate() / clip.w;
        Some(Vec2::new(
            (ndc.x + 1.0) * 0.5 * self.viewport_size.x,
            (1.0 - ndc.y) * 0.5 * self.viewport_size.y,
        ))
    }
}

impl Default for ViewportCamera {
    fn default() -> Self {
        Self::new(Vec2::new(800.0, 600.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_center_ray_points_at_target() {
        let camera = ViewportCamera::default();
        let ray = camera.screen_ray(Vec2::new(400.0, 300.0)).unwrap();
        let expected = (camera.target - camera.position).normalize();
        assert_relative_eq!(ray.direction.x, expected.x, epsilon = 1e-4);
        assert_relative_eq!(ray.direction.y, expected.y, epsilon = 1e-4);
        assert_relative_eq!(ray.direction.z, expected.z, epsilon = 1e-4);
    }

    #[test]
    fn test_world_to_screen_inverts_screen_ray() {
        let camera = ViewportCamera::default();
        let screen = Vec2::new(120.0, 450.0);
        let ray = camera.screen_ray(screen).unwrap();
        let back = camera.world_to_screen(ray.point_at(5.0)).unwrap();
        assert_relative_eq!(back.x, screen.x, epsilon = 0.05);
        assert_relative_eq!(back.y, screen.y, epsilon = 0.05);
    }

    #[test]
    fn test_upper_screen_half_looks_higher() {
        let camera = ViewportCamera::default();
        let top = camera.screen_ray(Vec2::new(400.0, 10.0)).unwrap();
        let bottom = camera.screen_ray(Vec2::new(400.0, 590.0)).unwrap();
        assert!(top.direction.y > bottom.direction.y);
    }

    #[test]
    fn test_point_behind_camera_is_not_projected() {
        let camera = ViewportCamera::default();
        assert!(camera.world_to_screen(Vec3::new(0.0, 1.7, 20.0)).is_none());
    }

    #[test]
    fn test_degenerate_viewport_has_no_ray() {
        let camera = ViewportCamera::new(Vec2::ZERO);
        assert!(camera.screen_ray(Vec2::ZERO).is_none());
    }

    #[test]
    fn test_orbit_keeps_distance() {
        let mut camera = ViewportCamera::default();
        let before = camera.position.distance(camera.target);
        camera.orbit(0.7, 0.2);
        assert_relative_eq!(
            camera.position.distance(camera.target),
            before,
            epsilon = 1e-4
        );
    }
}
