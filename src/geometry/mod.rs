//! # Geometry Module
//!
//! Points in the campus coordinate space.
//!
//! Coordinates are three real numbers in an arbitrary unit space. They are not
//! geographic, so distance is plain Euclidean distance.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Represents a 3D coordinate in the campus space.
///
/// Serialized as a three-element array, which is how campus data files store
/// coordinates.
///
/// # Examples
///
/// ```
/// use campus_nav::Coordinate;
///
/// let a = Coordinate::new(0.0, 0.0, 0.0);
/// let b = Coordinate::new(3.0, 4.0, 12.0);
/// assert_eq!(a.euclidean_distance(b), 13.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 3]", into = "[f64; 3]")]
pub struct Coordinate {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Coordinate {
    /// Creates a new coordinate with the given components.
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Returns the origin (0, 0, 0).
    pub fn origin() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    /// Calculates the straight-line distance to another coordinate.
    pub fn euclidean_distance(self, other: Coordinate) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }

    /// Returns true when no component is NaN or infinite.
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    /// Returns the components as an array.
    pub fn to_array(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }
}

impl From<[f64; 3]> for Coordinate {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl From<Coordinate> for [f64; 3] {
    fn from(coordinate: Coordinate) -> Self {
        coordinate.to_array()
    }
}

impl From<(f64, f64, f64)> for Coordinate {
    fn from((x, y, z): (f64, f64, f64)) -> Self {
        Self::new(x, y, z)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}
