//! Geometric primitives in dp and px space: points, vectors and sizes

use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

/// A 2D point (or vector) in fractional density-independent pixels.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct DpPoint2F {
    pub x: f32,
    pub y: f32,
}

impl DpPoint2F {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub const ZERO: DpPoint2F = DpPoint2F { x: 0.0, y: 0.0 };

    pub fn length_squared(&self) -> f32 {
        self.x * self.x + self.y * self.y
    }

    pub fn length(&self) -> f32 {
        self.length_squared().sqrt()
    }

    pub fn is_zero(&self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }
}

impl Add for DpPoint2F {
    type Output = DpPoint2F;

    fn add(self, rhs: DpPoint2F) -> DpPoint2F {
        DpPoint2F::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for DpPoint2F {
    type Output = DpPoint2F;

    fn sub(self, rhs: DpPoint2F) -> DpPoint2F {
        DpPoint2F::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f32> for DpPoint2F {
    type Output = DpPoint2F;

    fn mul(self, rhs: f32) -> DpPoint2F {
        DpPoint2F::new(self.x * rhs, self.y * rhs)
    }
}

impl Div<f32> for DpPoint2F {
    type Output = DpPoint2F;

    fn div(self, rhs: f32) -> DpPoint2F {
        DpPoint2F::new(self.x / rhs, self.y / rhs)
    }
}

impl Neg for DpPoint2F {
    type Output = DpPoint2F;

    fn neg(self) -> DpPoint2F {
        DpPoint2F::new(-self.x, -self.y)
    }
}

/// A whole-pixel 2D point. Used for positions and scroll offsets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct PxPoint2 {
    pub x: i32,
    pub y: i32,
}

impl PxPoint2 {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub const ZERO: PxPoint2 = PxPoint2 { x: 0, y: 0 };

    pub fn to_vector(self) -> PxVector2 {
        PxVector2::new(self.x as f32, self.y as f32)
    }
}

impl Add for PxPoint2 {
    type Output = PxPoint2;

    fn add(self, rhs: PxPoint2) -> PxPoint2 {
        PxPoint2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for PxPoint2 {
    fn add_assign(&mut self, rhs: PxPoint2) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for PxPoint2 {
    type Output = PxPoint2;

    fn sub(self, rhs: PxPoint2) -> PxPoint2 {
        PxPoint2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl SubAssign for PxPoint2 {
    fn sub_assign(&mut self, rhs: PxPoint2) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl Neg for PxPoint2 {
    type Output = PxPoint2;

    fn neg(self) -> PxPoint2 {
        PxPoint2::new(-self.x, -self.y)
    }
}

/// A fractional 2D vector in device pixels.
///
/// Animated offsets are kept fractional so slow transitions don't stall on
/// rounding; they are rounded to [`PxPoint2`] only when combined with
/// committed positions.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct PxVector2 {
    pub x: f32,
    pub y: f32,
}

impl PxVector2 {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub const ZERO: PxVector2 = PxVector2 { x: 0.0, y: 0.0 };

    /// Round each component to the nearest whole pixel.
    pub fn to_px_point2(self) -> PxPoint2 {
        PxPoint2::new(self.x.round() as i32, self.y.round() as i32)
    }

    pub fn lerp(&self, target: &Self, fraction: f32) -> Self {
        PxVector2::new(
            self.x + (target.x - self.x) * fraction,
            self.y + (target.y - self.y) * fraction,
        )
    }
}

impl Add for PxVector2 {
    type Output = PxVector2;

    fn add(self, rhs: PxVector2) -> PxVector2 {
        PxVector2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for PxVector2 {
    type Output = PxVector2;

    fn sub(self, rhs: PxVector2) -> PxVector2 {
        PxVector2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl From<PxPoint2> for PxVector2 {
    fn from(value: PxPoint2) -> Self {
        value.to_vector()
    }
}

/// A whole-pixel 2D extent. Components are never negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct PxSize2D {
    width: i32,
    height: i32,
}

impl PxSize2D {
    /// Negative components are clamped to zero.
    pub const fn new(width: i32, height: i32) -> Self {
        Self {
            width: if width > 0 { width } else { 0 },
            height: if height > 0 { height } else { 0 },
        }
    }

    pub const ZERO: PxSize2D = PxSize2D {
        width: 0,
        height: 0,
    };

    pub const fn width(&self) -> i32 {
        self.width
    }

    pub const fn height(&self) -> i32 {
        self.height
    }

    pub fn set_width(&mut self, width: i32) {
        self.width = width.max(0);
    }

    pub fn set_height(&mut self, height: i32) {
        self.height = height.max(0);
    }

    /// Component-wise subtraction clamped at zero.
    pub fn saturating_sub(self, rhs: PxSize2D) -> PxSize2D {
        PxSize2D::new(self.width - rhs.width, self.height - rhs.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn px_size_clamps_negative_components() {
        let size = PxSize2D::new(-5, 10);
        assert_eq!(size.width(), 0);
        assert_eq!(size.height(), 10);
    }

    #[test]
    fn px_size_saturating_sub() {
        let content = PxSize2D::new(100, 1000);
        let area = PxSize2D::new(120, 200);
        assert_eq!(content.saturating_sub(area), PxSize2D::new(0, 800));
    }

    #[test]
    fn px_vector_rounds_to_nearest_pixel() {
        assert_eq!(PxVector2::new(1.4, -2.6).to_px_point2(), PxPoint2::new(1, -3));
        assert_eq!(PxVector2::new(-0.4, 0.5).to_px_point2(), PxPoint2::new(0, 1));
    }

    #[test]
    fn dp_point_length() {
        let p = DpPoint2F::new(3.0, -4.0);
        assert_eq!(p.length_squared(), 25.0);
        assert_eq!(p.length(), 5.0);
        assert!(!p.is_zero());
        assert!(DpPoint2F::ZERO.is_zero());
    }
}
