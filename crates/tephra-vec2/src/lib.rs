#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![doc = "A `no_std` library for 2D grid and world vector math."]
#![doc = ""]
#![doc = "This crate provides two small value types in (row, column) order: an"]
#![doc = "integer cell vector for discrete board coordinates and a floating-point"]
#![doc = "world vector for continuous positions and directions, together with"]
#![doc = "component-wise arithmetic, conversions, normalization and rounding."]

use core::fmt;
use core::ops::{Add, Mul, Sub};
use libm::{roundf, sqrtf};

/// A discrete 2D cell coordinate or offset in `(y, x)` (row, column) order.
///
/// Grid vectors address board cells, so `y` comes first: it selects the row
/// and `x` the column within it. All arithmetic is component-wise and returns
/// a new value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct GridVec {
    /// Row component.
    pub y: i32,
    /// Column component.
    pub x: i32,
}

impl GridVec {
    /// Construct a new grid vector.
    ///
    /// # Arguments
    ///
    /// * `y`: Row component.
    /// * `x`: Column component.
    pub const fn new(y: i32, x: i32) -> Self {
        GridVec { y, x }
    }

    /// Returns `true` if both components are zero.
    pub const fn is_zero(&self) -> bool {
        self.y == 0 && self.x == 0
    }

    /// Widens both components to a floating-point world vector.
    ///
    /// # Returns
    ///
    /// A [`WorldVec`] with the same `(y, x)` coordinates.
    pub fn to_world(self) -> WorldVec {
        WorldVec::new(self.y as f32, self.x as f32)
    }
}

impl Add for GridVec {
    type Output = GridVec;

    fn add(self, rhs: GridVec) -> GridVec {
        GridVec::new(self.y + rhs.y, self.x + rhs.x)
    }
}

impl Sub for GridVec {
    type Output = GridVec;

    fn sub(self, rhs: GridVec) -> GridVec {
        GridVec::new(self.y - rhs.y, self.x - rhs.x)
    }
}

impl Mul<i32> for GridVec {
    type Output = GridVec;

    fn mul(self, t: i32) -> GridVec {
        GridVec::new(self.y * t, self.x * t)
    }
}

impl From<GridVec> for WorldVec {
    fn from(v: GridVec) -> WorldVec {
        v.to_world()
    }
}

impl fmt::Display for GridVec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(y: {}, x: {})", self.y, self.x)
    }
}

/// A continuous 2D position or direction in `(y, x)` (row, column) order.
///
/// World vectors carry sub-cell positions and velocities between the discrete
/// board steps. All operations are pure and return a new value.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WorldVec {
    /// Row component.
    pub y: f32,
    /// Column component.
    pub x: f32,
}

impl WorldVec {
    /// Construct a new world vector.
    ///
    /// # Arguments
    ///
    /// * `y`: Row component.
    /// * `x`: Column component.
    pub const fn new(y: f32, x: f32) -> Self {
        WorldVec { y, x }
    }

    /// Returns `true` if both components are exactly zero.
    pub fn is_zero(&self) -> bool {
        self.y == 0.0 && self.x == 0.0
    }

    /// Calculates the Euclidean norm `sqrt(y*y + x*x)`.
    pub fn length(self) -> f32 {
        sqrtf(self.y * self.y + self.x * self.x)
    }

    /// Scales the vector to unit length.
    ///
    /// The zero vector has no direction, so normalizing it returns the zero
    /// vector rather than dividing by zero.
    ///
    /// # Returns
    ///
    /// A vector of length 1 pointing the same way as `self`, or the zero
    /// vector if `self` has zero length.
    pub fn normalized(self) -> WorldVec {
        let len = self.length();
        if len == 0.0 {
            return WorldVec::default();
        }
        WorldVec::new(self.y / len, self.x / len)
    }

    /// Rounds both components to the nearest cell, ties away from zero.
    ///
    /// # Returns
    ///
    /// The [`GridVec`] of the nearest cell; `(2.5, -2.5)` rounds to `(3, -3)`.
    pub fn round(self) -> GridVec {
        GridVec::new(roundf(self.y) as i32, roundf(self.x) as i32)
    }

    /// Truncates both components toward zero.
    ///
    /// This is the conversion back from [`GridVec::to_world`]: integer-valued
    /// components round-trip exactly. For fractional components the cell
    /// nearer the origin is chosen; see [`WorldVec::round`] for
    /// nearest-cell conversion.
    pub fn trunc(self) -> GridVec {
        GridVec::new(self.y as i32, self.x as i32)
    }
}

impl Add for WorldVec {
    type Output = WorldVec;

    fn add(self, rhs: WorldVec) -> WorldVec {
        WorldVec::new(self.y + rhs.y, self.x + rhs.x)
    }
}

impl Sub for WorldVec {
    type Output = WorldVec;

    fn sub(self, rhs: WorldVec) -> WorldVec {
        WorldVec::new(self.y - rhs.y, self.x - rhs.x)
    }
}

impl Mul<f32> for WorldVec {
    type Output = WorldVec;

    fn mul(self, t: f32) -> WorldVec {
        WorldVec::new(self.y * t, self.x * t)
    }
}

impl fmt::Display for WorldVec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(y: {:.2}, x: {:.2})", self.y, self.x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    const EPSILON: f32 = 1e-5;

    #[test]
    fn test_grid_add_sub_inverse() {
        let a = GridVec::new(7, -3);
        let b = GridVec::new(-2, 11);
        assert_eq!((a - b) + b, a);
        assert_eq!((a + b) - b, a);
    }

    #[test]
    fn test_grid_add_components() {
        let sum = GridVec::new(1, 2) + GridVec::new(3, 4);
        assert_eq!(sum, GridVec::new(4, 6));
    }

    #[test]
    fn test_grid_scale() {
        let v = GridVec::new(5, -4);
        assert_eq!(v * 1, v);
        assert_eq!(v * 0, GridVec::default());
        assert_eq!(v * -2, GridVec::new(-10, 8));
    }

    #[test]
    fn test_world_add_sub_inverse() {
        let a = WorldVec::new(0.3, -7.25);
        let b = WorldVec::new(1.5, 2.125);
        let r = (a - b) + b;
        assert!((r.y - a.y).abs() < EPSILON);
        assert!((r.x - a.x).abs() < EPSILON);
    }

    #[test]
    fn test_world_sub_components() {
        let d = WorldVec::new(5.0, 5.0) - WorldVec::new(2.0, 1.0);
        assert_eq!(d, WorldVec::new(3.0, 4.0));
    }

    #[test]
    fn test_world_scale() {
        let v = WorldVec::new(1.25, -0.5);
        assert_eq!(v * 1.0, v);
        assert_eq!(v * 0.0, WorldVec::default());
        assert_eq!(v * 2.0, WorldVec::new(2.5, -1.0));
    }

    #[test]
    fn test_length_zero() {
        assert_eq!(WorldVec::default().length(), 0.0);
    }

    #[test]
    fn test_length_three_four_five() {
        // 3-4-5 triangle; also fails if either component is summed
        // instead of squared.
        assert!((WorldVec::new(3.0, 4.0).length() - 5.0).abs() < EPSILON);
        assert!((WorldVec::new(4.0, 3.0).length() - 5.0).abs() < EPSILON);
    }

    #[test]
    fn test_normalize_zero_is_zero() {
        let n = WorldVec::default().normalized();
        assert_eq!(n, WorldVec::default());
        assert!(!n.y.is_nan() && !n.x.is_nan());
    }

    #[test]
    fn test_normalize_unit_length() {
        let cases = [
            WorldVec::new(3.0, 4.0),
            WorldVec::new(-0.01, 0.0),
            WorldVec::new(100.0, -250.0),
        ];
        for v in cases {
            assert!((v.normalized().length() - 1.0).abs() < EPSILON);
        }
    }

    #[test]
    fn test_round_ties_away_from_zero() {
        assert_eq!(WorldVec::new(2.5, -2.5).round(), GridVec::new(3, -3));
        assert_eq!(WorldVec::new(0.5, -0.5).round(), GridVec::new(1, -1));
        assert_eq!(WorldVec::new(2.4, -2.4).round(), GridVec::new(2, -2));
    }

    #[test]
    fn test_trunc_toward_zero() {
        assert_eq!(WorldVec::new(2.9, -2.9).trunc(), GridVec::new(2, -2));
        assert_eq!(WorldVec::new(0.9, -0.9).trunc(), GridVec::default());
    }

    #[test]
    fn test_grid_world_roundtrip() {
        let cells = [
            GridVec::new(0, 0),
            GridVec::new(102, -820),
            GridVec::new(-1, 1),
        ];
        for v in cells {
            assert_eq!(v.to_world().trunc(), v);
            assert_eq!(WorldVec::from(v).trunc(), v);
        }
    }

    #[test]
    fn test_equality_reflexive() {
        let g = GridVec::new(-9, 4);
        let w = WorldVec::new(-9.5, 4.25);
        assert_eq!(g, g);
        assert_eq!(w, w);
        assert_ne!(g, GridVec::new(4, -9));
        assert_ne!(w, WorldVec::new(4.25, -9.5));
    }

    #[test]
    fn test_is_zero() {
        assert!(GridVec::default().is_zero());
        assert!(WorldVec::default().is_zero());
        assert!(!GridVec::new(0, 1).is_zero());
        assert!(!WorldVec::new(0.0, -0.1).is_zero());
    }
}
