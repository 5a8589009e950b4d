//! Geometric primitives for tag placement.
//!
//! This module provides the fundamental geometric types used throughout
//! Placard for deriving insertion points and positioning tag heads.
//!
//! # Overview
//!
//! - [`Point`] - A 3D coordinate in document model space
//! - [`Uv`] - A 2D coordinate on a view's working plane
//!
//! # Coordinate System
//!
//! Placard uses the host document's model space:
//!
//! ```text
//!        +Z (elevation)
//!         │
//!         │
//!         └────────► +X
//!        ╱
//!      +Y
//! ```
//!
//! - **X/Y axes**: span the plan working plane
//! - **Z axis**: elevation, increasing upward
//!
//! Coordinates are in document units; Placard never converts units.

use serde::{Deserialize, Serialize};

/// A 3D point representing a position in document model space.
///
/// Points use `f64` coordinates and provide the small set of vector
/// operations the placement pipeline needs: translation, midpoints, and
/// zero checks.
///
/// # Examples
///
/// ```
/// # use placard_core::geometry::Point;
/// let p1 = Point::new(2.0, 0.0, 0.0);
/// let p2 = Point::new(4.0, 0.0, 0.0);
///
/// // Midpoint calculation
/// let mid = p1.midpoint(p2);
/// assert_eq!(mid.x(), 3.0);
///
/// // Translation by an offset
/// let moved = p1.add_point(Point::new(0.0, 3.0, 0.0));
/// assert_eq!(moved.y(), 3.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize, Serialize)]
pub struct Point {
    x: f64,
    y: f64,
    z: f64,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> f64 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> f64 {
        self.y
    }

    /// Returns the z-coordinate (elevation) of the point
    pub fn z(self) -> f64 {
        self.z
    }

    /// Checks if all three coordinates are zero
    pub fn is_zero(self) -> bool {
        self.x == 0.0 && self.y == 0.0 && self.z == 0.0
    }

    /// Adds another point to this point, returning a new point.
    ///
    /// # Examples
    ///
    /// ```
    /// # use placard_core::geometry::Point;
    /// let anchor = Point::new(1.0, 1.0, 0.0);
    /// let offset = Point::new(0.0, 3.0, 0.0);
    ///
    /// let head = anchor.add_point(offset);
    /// assert_eq!(head.y(), 4.0);
    /// ```
    pub fn add_point(self, other: Point) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
            z: self.z + other.z,
        }
    }

    /// Subtracts another point from this point, returning a new point
    pub fn sub_point(self, other: Point) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
            z: self.z - other.z,
        }
    }

    /// Calculates the midpoint between this point and another point
    pub fn midpoint(self, other: Point) -> Self {
        Self {
            x: (self.x + other.x) / 2.0,
            y: (self.y + other.y) / 2.0,
            z: (self.z + other.z) / 2.0,
        }
    }

    /// Projects the point onto the working plane, dropping elevation
    pub fn to_uv(self) -> Uv {
        Uv {
            u: self.x,
            v: self.y,
        }
    }
}

/// A 2D coordinate on a view's working plane.
///
/// Region-bound tags (area tags) are anchored by a planar coordinate only;
/// their elevation is always zero. [`Uv::to_point`] lifts the coordinate
/// back into model space at zero elevation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize, Serialize)]
pub struct Uv {
    u: f64,
    v: f64,
}

impl Uv {
    /// Creates a new planar coordinate
    pub fn new(u: f64, v: f64) -> Self {
        Self { u, v }
    }

    /// Returns the u-coordinate
    pub fn u(self) -> f64 {
        self.u
    }

    /// Returns the v-coordinate
    pub fn v(self) -> f64 {
        self.v
    }

    /// Lifts the planar coordinate into model space at zero elevation
    pub fn to_point(self) -> Point {
        Point {
            x: self.u,
            y: self.v,
            z: 0.0,
        }
    }
}
