#[cfg(test)]
#[path = "viewport_test.rs"]
mod viewport_test;

use serde::{Deserialize, Serialize};

use crate::consts::MIN_DESIRED_PX;

/// A point in pixel space: origin top-left, Y grows downward.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Translate by `(dx, dy)`.
    #[must_use]
    pub fn offset(self, dx: f64, dy: f64) -> Self {
        Self { x: self.x + dx, y: self.y + dy }
    }

    /// Midpoint of the segment `self`–`other`.
    #[must_use]
    pub fn midpoint(self, other: Self) -> Self {
        Self { x: (self.x + other.x) * 0.5, y: (self.y + other.y) * 0.5 }
    }

    /// Euclidean distance to `other`.
    #[must_use]
    pub fn distance(self, other: Self) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }
}

/// Pixel dimensions of a drawing surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewportSize {
    pub width: f64,
    pub height: f64,
}

impl ViewportSize {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// A square viewport.
    #[must_use]
    pub fn square(side: f64) -> Self {
        Self { width: side, height: side }
    }

    #[must_use]
    pub fn min_side(self) -> f64 {
        self.width.min(self.height)
    }

    #[must_use]
    pub fn center(self) -> Point {
        Point::new(self.width * 0.5, self.height * 0.5)
    }

    /// Both dimensions multiplied by `factor`.
    #[must_use]
    pub fn scaled(self, factor: f64) -> Self {
        Self { width: self.width * factor, height: self.height * factor }
    }

    /// How large this viewport is relative to the `desired` size a diagram was
    /// designed for. Lengths designed at `desired` are multiplied by this.
    ///
    /// The tighter of the two axes wins. Desired dimensions are floored at
    /// one pixel.
    #[must_use]
    pub fn scale_for(self, desired: Self) -> f64 {
        let sx = self.width / desired.width.max(MIN_DESIRED_PX);
        let sy = self.height / desired.height.max(MIN_DESIRED_PX);
        sx.min(sy)
    }

    /// Whether there is anything to draw on.
    #[must_use]
    pub fn is_drawable(self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite()
    }
}

/// Maps math coordinates (unit circle, Y up) onto pixels (Y down).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitFrame {
    /// Pixel position of the math origin.
    pub origin: Point,
    /// Pixel length of one math unit.
    pub unit: f64,
}

impl UnitFrame {
    /// Convert a math-space point to pixels. The Y component is negated.
    #[must_use]
    pub fn to_screen(&self, x: f64, y: f64) -> Point {
        Point { x: self.origin.x + x * self.unit, y: self.origin.y - y * self.unit }
    }

    /// Convert a pixel point back to math space.
    #[must_use]
    pub fn to_math(&self, screen: Point) -> (f64, f64) {
        ((screen.x - self.origin.x) / self.unit, (self.origin.y - screen.y) / self.unit)
    }

    /// The pixel point at `angle_rad` on the circle of radius `unit`.
    #[must_use]
    pub fn on_circle(&self, angle_rad: f64) -> Point {
        self.to_screen(angle_rad.cos(), angle_rad.sin())
    }
}
