//! Achsenparalleles Rechteck in Screen-Koordinaten (Pixel, Y nach unten).

use glam::Vec2;

/// Rechteck aus Minimum-Ecke und Größe
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScreenRect {
    /// Linke obere Ecke
    pub min: Vec2,
    /// Breite und Höhe
    pub size: Vec2,
}

impl ScreenRect {
    /// Erstellt ein Rechteck aus Position und Größe.
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            min: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    /// Erstellt ein Rechteck aus Minimum-Ecke und Größe.
    pub fn from_min_size(min: Vec2, size: Vec2) -> Self {
        Self { min, size }
    }

    /// Rechte untere Ecke
    pub fn max(&self) -> Vec2 {
        self.min + self.size
    }

    pub fn width(&self) -> f32 {
        self.size.x
    }

    pub fn height(&self) -> f32 {
        self.size.y
    }

    /// Punkt-Test (Minimum inklusive, Maximum exklusive).
    pub fn contains(&self, point: Vec2) -> bool {
        let max = self.max();
        point.x >= self.min.x && point.x < max.x && point.y >= self.min.y && point.y < max.y
    }

    /// Verkleinert das Rechteck um `padding` auf jeder Seite.
    pub fn inset(&self, padding: f32) -> Self {
        Self {
            min: self.min + Vec2::splat(padding),
            size: (self.size - Vec2::splat(2.0 * padding)).max(Vec2::ZERO),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_is_half_open() {
        let rect = ScreenRect::new(0.0, 0.0, 10.0, 10.0);
        assert!(rect.contains(Vec2::ZERO));
        assert!(rect.contains(Vec2::new(9.9, 9.9)));
        assert!(!rect.contains(Vec2::new(10.0, 5.0)));
        assert!(!rect.contains(Vec2::new(-0.1, 5.0)));
    }

    #[test]
    fn test_inset_never_gets_negative() {
        let rect = ScreenRect::new(0.0, 0.0, 6.0, 800.0).inset(5.0);
        assert_eq!(rect.min, Vec2::splat(5.0));
        assert_eq!(rect.size, Vec2::new(0.0, 790.0));
    }
}
