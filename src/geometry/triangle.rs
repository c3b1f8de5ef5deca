use crate::error::DegenerateReason;
use crate::math::Vector3;

use super::edge::Edge;
use super::point::Point;

/// An oriented triangle.
///
/// The cyclic order `a -> b -> c -> a` defines the triangle's directed edges
/// and hence its winding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Triangle {
    pub a: Point,
    pub b: Point,
    pub c: Point,
}

impl Triangle {
    /// Creates a triangle from its three vertices in winding order.
    #[must_use]
    pub fn new(a: Point, b: Point, c: Point) -> Self {
        Self { a, b, c }
    }

    /// Returns the vertices as `[a, b, c]`.
    #[must_use]
    pub fn vertices(&self) -> [Point; 3] {
        [self.a, self.b, self.c]
    }

    /// The three directed edges `(a, b)`, `(b, c)`, `(c, a)`.
    #[must_use]
    pub fn directed_edges(&self) -> [(Point, Point); 3] {
        [(self.a, self.b), (self.b, self.c), (self.c, self.a)]
    }

    /// The three edges in canonical form, in the same order as
    /// [`directed_edges`](Self::directed_edges).
    #[must_use]
    pub fn edges(&self) -> [Edge; 3] {
        self.directed_edges().map(|(p, q)| Edge::new(p, q))
    }

    /// Returns `true` if the triangle traverses `from -> to` as one of its
    /// directed edges.
    #[must_use]
    pub fn has_directed_edge(&self, from: Point, to: Point) -> bool {
        self.directed_edges()
            .iter()
            .any(|&(p, q)| p == from && q == to)
    }

    /// Reverses the winding in place by swapping `b` and `c`.
    pub fn flip(&mut self) {
        std::mem::swap(&mut self.b, &mut self.c);
    }

    /// Returns a copy with reversed winding. Flipping twice is the identity.
    #[must_use]
    pub fn flipped(&self) -> Self {
        Self::new(self.a, self.c, self.b)
    }

    /// Non-normalized facet normal `(b - a) x (c - a)`.
    #[must_use]
    pub fn normal(&self) -> Vector3 {
        self.b.sub(&self.a).cross(&self.c.sub(&self.a))
    }

    /// Checks the triangle for degeneracy.
    ///
    /// A triangle is degenerate if a coordinate is not finite, if two
    /// vertices coincide, or if the squared norm of its edge cross product is
    /// below `tolerance^2`.
    #[must_use]
    pub fn degeneracy(&self, tolerance: f64) -> Option<DegenerateReason> {
        if !self.vertices().iter().flat_map(Point::coords).all(f64::is_finite) {
            return Some(DegenerateReason::NonFinite);
        }
        if self.a == self.b || self.b == self.c || self.c == self.a {
            return Some(DegenerateReason::DuplicateVertices);
        }
        if self.normal().norm_squared() < tolerance * tolerance {
            return Some(DegenerateReason::Collinear);
        }
        None
    }
}
