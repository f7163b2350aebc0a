//! 2D point type and the sampling regions it can be tested against.
use std::ops::{Add, Sub};

use glam::Vec2;
use mint::Vector2;

/// A sample position in normalized coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    /// Center of the unit square, also the center of the inscribed unit circle.
    pub const UNIT_CENTER: Point = Point { x: 0.5, y: 0.5 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// True iff the point lies in `[0, 1] x [0, 1]`.
    #[inline]
    pub fn is_in_unit_square(&self) -> bool {
        self.x >= 0.0 && self.y >= 0.0 && self.x <= 1.0 && self.y <= 1.0
    }

    /// True iff the point lies in the circle of radius 0.5 centered at (0.5, 0.5).
    #[inline]
    pub fn is_in_unit_circle(&self) -> bool {
        let dx = self.x - 0.5;
        let dy = self.y - 0.5;
        dx * dx + dy * dy <= 0.25
    }

    #[inline]
    pub fn distance(&self, other: Point) -> f32 {
        self.distance_squared(other).sqrt()
    }

    #[inline]
    pub fn distance_squared(&self, other: Point) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl From<Vec2> for Point {
    fn from(v: Vec2) -> Self {
        Point::new(v.x, v.y)
    }
}

impl From<Point> for Vec2 {
    fn from(p: Point) -> Self {
        Vec2::new(p.x, p.y)
    }
}

impl From<Vector2<f32>> for Point {
    fn from(v: Vector2<f32>) -> Self {
        Point::new(v.x, v.y)
    }
}

impl From<Point> for Vector2<f32> {
    fn from(p: Point) -> Self {
        Vector2 { x: p.x, y: p.y }
    }
}

impl From<(f32, f32)> for Point {
    fn from((x, y): (f32, f32)) -> Self {
        Point::new(x, y)
    }
}

impl From<Point> for (f32, f32) {
    fn from(p: Point) -> Self {
        (p.x, p.y)
    }
}

/// Area a sampler fills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Region {
    /// `[0, 1] x [0, 1]`.
    UnitSquare,
    /// Circle of radius 0.5 inscribed in the unit square.
    #[default]
    UnitCircle,
}

impl Region {
    /// Maps the `is_circle` flag used by the free generation functions.
    pub fn from_is_circle(is_circle: bool) -> Self {
        if is_circle {
            Region::UnitCircle
        } else {
            Region::UnitSquare
        }
    }

    pub fn is_circle(self) -> bool {
        matches!(self, Region::UnitCircle)
    }

    #[inline]
    pub fn contains(self, p: Point) -> bool {
        match self {
            Region::UnitSquare => p.is_in_unit_square(),
            Region::UnitCircle => p.is_in_unit_circle(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_square_includes_its_edges() {
        assert!(Point::new(0.0, 0.0).is_in_unit_square());
        assert!(Point::new(1.0, 1.0).is_in_unit_square());
        assert!(!Point::new(1.0001, 0.5).is_in_unit_square());
        assert!(!Point::new(0.5, -0.0001).is_in_unit_square());
    }

    #[test]
    fn unit_circle_excludes_square_corners() {
        assert!(Point::UNIT_CENTER.is_in_unit_circle());
        assert!(Point::new(1.0, 0.5).is_in_unit_circle());
        assert!(!Point::new(0.05, 0.05).is_in_unit_circle());
        assert!(Point::new(0.05, 0.05).is_in_unit_square());
    }

    #[test]
    fn region_dispatches_to_predicates() {
        let corner = Point::new(0.0, 1.0);
        assert!(Region::UnitSquare.contains(corner));
        assert!(!Region::UnitCircle.contains(corner));
        assert_eq!(Region::from_is_circle(true), Region::UnitCircle);
        assert_eq!(Region::from_is_circle(false), Region::UnitSquare);
        assert!(Region::default().is_circle());
    }

    #[test]
    fn distance_is_euclidean() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(0.3, 0.4);
        assert!((a.distance(b) - 0.5).abs() < 1e-6);
        assert!((b.distance_squared(a) - 0.25).abs() < 1e-6);
    }

    #[test]
    fn arithmetic_and_conversions() {
        let p = Point::new(0.25, 0.75) + Point::new(0.5, -0.25);
        assert_eq!(p, Point::new(0.75, 0.5));
        assert_eq!(p - Point::UNIT_CENTER, Point::new(0.25, 0.0));

        let v: Vec2 = p.into();
        assert_eq!(Point::from(v), p);

        let m: Vector2<f32> = p.into();
        assert_eq!(Point::from(m), p);

        let t: (f32, f32) = p.into();
        assert_eq!(t, (0.75, 0.5));
    }
}
