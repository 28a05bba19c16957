//! Math utilities and types
//!
//! Provides the small set of 2D types the scene and widget layers need:
//! vectors for draw positions, RGB colors from the resource dictionaries,
//! and integer rectangles for widget bounds and hit testing.

use serde::{Deserialize, Serialize};

pub use nalgebra::{Vector2, Vector4};

/// 2D vector type
pub type Vec2 = Vector2<f32>;

/// 4D vector type (used for normalized RGBA colors)
pub type Vec4 = Vector4<f32>;

/// 8-bit RGB color as written in resource dictionaries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color(pub u8, pub u8, pub u8);

impl Color {
    /// Pure black
    pub const BLACK: Self = Self(0, 0, 0);
    /// Pure white
    pub const WHITE: Self = Self(255, 255, 255);

    /// Create a color from its components
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self(r, g, b)
    }

    /// Normalized RGBA with full opacity
    pub fn to_vec4(self) -> Vec4 {
        Vec4::new(
            f32::from(self.0) / 255.0,
            f32::from(self.1) / 255.0,
            f32::from(self.2) / 255.0,
            1.0,
        )
    }
}

impl From<(u8, u8, u8)> for Color {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self(r, g, b)
    }
}

/// Axis-aligned integer rectangle (top-left origin)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rect {
    /// Left edge in pixels
    pub x: i32,
    /// Top edge in pixels
    pub y: i32,
    /// Width in pixels
    pub width: i32,
    /// Height in pixels
    pub height: i32,
}

impl Rect {
    /// Create a new rectangle
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    /// Build from an `(x, y, width, height)` tuple
    pub const fn from_tuple((x, y, width, height): (i32, i32, i32, i32)) -> Self {
        Self::new(x, y, width, height)
    }

    /// Right edge (exclusive)
    pub const fn right(&self) -> i32 {
        self.x.saturating_add(self.width)
    }

    /// Bottom edge (exclusive)
    pub const fn bottom(&self) -> i32 {
        self.y.saturating_add(self.height)
    }

    /// Center point, rounded toward the top-left like most 2D libraries do
    pub const fn center(&self) -> (i32, i32) {
        (self.x.saturating_add(self.width / 2), self.y.saturating_add(self.height / 2))
    }

    /// Same size, moved so that its center lands on `center`
    pub const fn with_center(self, center: (i32, i32)) -> Self {
        Self {
            x: center.0.saturating_sub(self.width / 2),
            y: center.1.saturating_sub(self.height / 2),
            ..self
        }
    }

    /// Whether the rectangle covers no area
    pub const fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// Point containment; left/top edges inclusive, right/bottom exclusive
    pub fn collide_point(&self, point: Vec2) -> bool {
        if self.is_empty() {
            return false;
        }
        let (px, py) = (point.x.floor(), point.y.floor());
        px >= self.x as f32 && px < self.right() as f32 && py >= self.y as f32 && py < self.bottom() as f32
    }
}

impl From<(i32, i32, i32, i32)> for Rect {
    fn from(value: (i32, i32, i32, i32)) -> Self {
        Self::from_tuple(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_collide_point_edges() {
        let rect = Rect::new(300, 250, 300, 60);
        assert!(rect.collide_point(Vec2::new(300.0, 250.0)));
        assert!(rect.collide_point(Vec2::new(599.0, 309.0)));
        assert!(!rect.collide_point(Vec2::new(600.0, 280.0)));
        assert!(!rect.collide_point(Vec2::new(450.0, 310.0)));
        assert!(!rect.collide_point(Vec2::new(299.5, 280.0)));
    }

    #[test]
    fn test_empty_rect_never_collides() {
        let rect = Rect::default();
        assert!(rect.is_empty());
        assert!(!rect.collide_point(Vec2::new(0.0, 0.0)));
    }

    #[test]
    fn test_edges_saturate_near_i32_max() {
        let huge = Rect::new(i32::MAX - 10, 0, i32::MAX, i32::MAX);
        assert_eq!(huge.right(), i32::MAX);
        assert_eq!(huge.bottom(), i32::MAX);
        assert!(!huge.collide_point(Vec2::new(0.0, 5.0)));

        let image = Rect::new(100, 100, i32::MAX, i32::MAX);
        assert!(image.collide_point(Vec2::new(150.0, 150.0)));
        assert_eq!(image.center(), (1_073_741_923, 1_073_741_923));
    }

    #[test]
    fn test_with_center() {
        let outer = Rect::new(100, 100, 200, 100);
        let inner = Rect::new(0, 0, 50, 20).with_center(outer.center());
        assert_eq!(inner, Rect::new(175, 140, 50, 20));
        assert_eq!(inner.center(), outer.center());
    }

    #[test]
    fn test_color_to_vec4() {
        let c = Color::new(255, 0, 51).to_vec4();
        assert_relative_eq!(c.x, 1.0);
        assert_relative_eq!(c.y, 0.0);
        assert_relative_eq!(c.z, 0.2);
        assert_relative_eq!(c.w, 1.0);
    }
}
