//! Logical-unit geometry primitives shared by layout resolution and drawing.

use std::ops::{Add, Mul, Neg};

/// 2D point/offset in logical units (or screen pixels, depending on context).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl Add for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Neg for Vec2 {
    type Output = Vec2;

    fn neg(self) -> Vec2 {
        Vec2::new(-self.x, -self.y)
    }
}

impl Mul<f32> for Vec2 {
    type Output = Vec2;

    fn mul(self, rhs: f32) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

/// Corner-based rectangle: upper-left `(x1, y1)`, lower-right `(x2, y2)`.
///
/// Window records store their bounds in this form. Note that grid layout
/// stores absolute cell dimensions in `x2`/`y2` rather than corner
/// coordinates; only the origin participates in the translation math, so the
/// two encodings coexist and both are preserved as-is.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Bounds {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
}

impl Bounds {
    pub const ZERO: Bounds = Bounds {
        x1: 0.0,
        y1: 0.0,
        x2: 0.0,
        y2: 0.0,
    };

    pub fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    pub fn width(&self) -> f32 {
        self.x2 - self.x1
    }

    pub fn height(&self) -> f32 {
        self.y2 - self.y1
    }

    pub fn upper_left(&self) -> Vec2 {
        Vec2::new(self.x1, self.y1)
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width(), self.height())
    }
}

/// One physical display as enumerated by the host, bounds in physical pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Display {
    pub bounds: Bounds,
}

impl Display {
    pub fn new(bounds: Bounds) -> Self {
        Self { bounds }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_size_and_origin() {
        let b = Bounds::new(10.0, 20.0, 110.0, 70.0);
        assert_eq!(b.width(), 100.0);
        assert_eq!(b.height(), 50.0);
        assert_eq!(b.upper_left(), Vec2::new(10.0, 20.0));
        assert_eq!(b.size(), Vec2::new(100.0, 50.0));
    }

    #[test]
    fn vec2_ops() {
        let v = Vec2::new(3.0, -4.0);
        assert_eq!(-v, Vec2::new(-3.0, 4.0));
        assert_eq!(v * 2.0, Vec2::new(6.0, -8.0));
        assert_eq!(v + Vec2::new(1.0, 1.0), Vec2::new(4.0, -3.0));
    }
}
