use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use crate::math::{Point3, Vector3};

/// A mesh vertex position.
///
/// Equality is exact: two points are equal only if every coordinate is
/// bit-identical, with `0.0` and `-0.0` treated as the same value. Hashing and
/// ordering use the same per-coordinate key, so equal points always hash
/// equal and compare `Ordering::Equal`.
#[derive(Debug, Clone, Copy)]
pub struct Point(Point3);

impl Point {
    /// Creates a point from its Cartesian coordinates.
    #[must_use]
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self(Point3::new(x, y, z))
    }

    #[must_use]
    pub fn x(&self) -> f64 {
        self.0.x
    }

    #[must_use]
    pub fn y(&self) -> f64 {
        self.0.y
    }

    #[must_use]
    pub fn z(&self) -> f64 {
        self.0.z
    }

    /// Returns the coordinates as `[x, y, z]`.
    #[must_use]
    pub fn coords(&self) -> [f64; 3] {
        [self.0.x, self.0.y, self.0.z]
    }

    /// Returns the underlying `nalgebra` point.
    #[must_use]
    pub fn as_point3(&self) -> &Point3 {
        &self.0
    }

    /// Vector from `other` to `self`.
    #[must_use]
    pub fn sub(&self, other: &Self) -> Vector3 {
        self.0 - other.0
    }

    fn key(&self) -> [u64; 3] {
        [
            coordinate_key(self.0.x),
            coordinate_key(self.0.y),
            coordinate_key(self.0.z),
        ]
    }
}

/// Bit pattern used for equality and hashing. Folds `-0.0` onto `0.0`.
fn coordinate_key(value: f64) -> u64 {
    if value == 0.0 {
        0
    } else {
        value.to_bits()
    }
}

fn normalized(value: f64) -> f64 {
    if value == 0.0 {
        0.0
    } else {
        value
    }
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Point {}

impl Hash for Point {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl Ord for Point {
    /// Lexicographic by `x`, then `y`, then `z`.
    fn cmp(&self, other: &Self) -> Ordering {
        self.coords()
            .iter()
            .zip(other.coords().iter())
            .map(|(a, b)| normalized(*a).total_cmp(&normalized(*b)))
            .find(|ord| *ord != Ordering::Equal)
            .unwrap_or(Ordering::Equal)
    }
}

impl PartialOrd for Point {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl From<[f64; 3]> for Point {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl From<Point3> for Point {
    fn from(point: Point3) -> Self {
        Self(point)
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {})", self.0.x, self.0.y, self.0.z)
    }
}
