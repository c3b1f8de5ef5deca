use std::collections::hash_map::Entry;
use std::collections::HashMap;

use crate::error::MeshError;
use crate::geometry::{Edge, Triangle};

/// Position of a triangle in its mesh's triangle list.
pub type TriangleIndex = usize;

/// The two incident-triangle slots of an edge.
///
/// `second` is `None` while the edge is a boundary edge. There are exactly two
/// slots: a third registration is a non-manifold violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeSlots {
    first: TriangleIndex,
    second: Option<TriangleIndex>,
}

impl EdgeSlots {
    fn new(first: TriangleIndex) -> Self {
        Self {
            first,
            second: None,
        }
    }

    #[must_use]
    pub fn first(&self) -> TriangleIndex {
        self.first
    }

    #[must_use]
    pub fn second(&self) -> Option<TriangleIndex> {
        self.second
    }

    /// Returns `true` if only one triangle uses this edge.
    #[must_use]
    pub fn is_boundary(&self) -> bool {
        self.second.is_none()
    }

    /// Returns the triangle on the other side of the edge from `of`.
    ///
    /// `None` for boundary edges.
    #[must_use]
    pub fn other(&self, of: TriangleIndex) -> Option<TriangleIndex> {
        let second = self.second?;
        if self.first == of {
            Some(second)
        } else {
            Some(self.first)
        }
    }

    /// Registers `index` in the free slot. Returns the occupied pair if both
    /// slots are already taken.
    fn register(&mut self, index: TriangleIndex) -> Result<(), [TriangleIndex; 2]> {
        match self.second {
            None => {
                self.second = Some(index);
                Ok(())
            }
            Some(second) => Err([self.first, second]),
        }
    }
}

/// Map from canonical edge to its incident triangles.
#[derive(Debug, Clone, Default)]
pub struct EdgeConnectivity {
    edges: HashMap<Edge, EdgeSlots>,
}

impl EdgeConnectivity {
    /// Builds the connectivity map for `triangles`.
    ///
    /// Each triangle's three canonical edges receive the triangle's index in
    /// their first free slot.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::NonManifoldEdge`] if an edge would receive a third
    /// incident triangle.
    pub fn build(triangles: &[Triangle]) -> Result<Self, MeshError> {
        let mut edges: HashMap<Edge, EdgeSlots> = HashMap::with_capacity(triangles.len() * 3 / 2);

        for (index, triangle) in triangles.iter().enumerate() {
            for edge in triangle.edges() {
                match edges.entry(edge) {
                    Entry::Vacant(vacant) => {
                        vacant.insert(EdgeSlots::new(index));
                    }
                    Entry::Occupied(mut occupied) => {
                        occupied.get_mut().register(index).map_err(|pair| {
                            MeshError::NonManifoldEdge {
                                edge,
                                triangles: pair,
                                extra: index,
                            }
                        })?;
                    }
                }
            }
        }

        Ok(Self { edges })
    }

    /// Looks up the slots of a canonical edge.
    #[must_use]
    pub fn get(&self, edge: &Edge) -> Option<&EdgeSlots> {
        self.edges.get(edge)
    }

    /// Returns the triangle sharing `edge` with `of`, if the edge is interior.
    #[must_use]
    pub fn neighbor(&self, edge: &Edge, of: TriangleIndex) -> Option<TriangleIndex> {
        self.edges.get(edge).and_then(|slots| slots.other(of))
    }

    /// Number of distinct edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Number of edges with a single incident triangle.
    #[must_use]
    pub fn boundary_edge_count(&self) -> usize {
        self.edges.values().filter(|slots| slots.is_boundary()).count()
    }

    /// Iterates over all edges and their slots in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&Edge, &EdgeSlots)> {
        self.edges.iter()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::{make_edge, Point};

    fn p(x: f64, y: f64, z: f64) -> Point {
        Point::new(x, y, z)
    }

    fn tri(a: [f64; 3], b: [f64; 3], c: [f64; 3]) -> Triangle {
        Triangle::new(a.into(), b.into(), c.into())
    }

    #[test]
    fn single_triangle_has_three_boundary_edges() {
        let triangles = [tri([0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0])];
        let conn = EdgeConnectivity::build(&triangles).unwrap();
        assert_eq!(conn.edge_count(), 3);
        assert_eq!(conn.boundary_edge_count(), 3);
        for (_, slots) in conn.iter() {
            assert_eq!(slots.first(), 0);
            assert_eq!(slots.second(), None);
        }
    }

    #[test]
    fn disjoint_triangles_give_three_boundary_slots_each() {
        let triangles: Vec<Triangle> = (0..4)
            .map(|i| {
                let x = f64::from(i) * 10.0;
                tri([x, 0.0, 0.0], [x + 1.0, 0.0, 0.0], [x, 1.0, 0.0])
            })
            .collect();
        let conn = EdgeConnectivity::build(&triangles).unwrap();
        assert_eq!(conn.edge_count(), 12);
        assert_eq!(conn.boundary_edge_count(), 12);
    }

    #[test]
    fn shared_edge_has_both_indices() {
        let triangles = [
            tri([0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
            tri([1.0, 0.0, 0.0], [1.0, 1.0, 0.0], [0.0, 1.0, 0.0]),
        ];
        let conn = EdgeConnectivity::build(&triangles).unwrap();
        assert_eq!(conn.edge_count(), 5);
        assert_eq!(conn.boundary_edge_count(), 4);

        let shared = make_edge(p(0.0, 1.0, 0.0), p(1.0, 0.0, 0.0));
        let slots = conn.get(&shared).unwrap();
        assert_eq!(slots.first(), 0);
        assert_eq!(slots.second(), Some(1));
        assert_eq!(conn.neighbor(&shared, 0), Some(1));
        assert_eq!(conn.neighbor(&shared, 1), Some(0));
    }

    #[test]
    fn boundary_edge_has_no_neighbor() {
        let triangles = [
            tri([0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
            tri([1.0, 0.0, 0.0], [1.0, 1.0, 0.0], [0.0, 1.0, 0.0]),
        ];
        let conn = EdgeConnectivity::build(&triangles).unwrap();
        let boundary = make_edge(p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0));
        assert!(conn.get(&boundary).unwrap().is_boundary());
        assert_eq!(conn.neighbor(&boundary, 0), None);
        assert_eq!(conn.neighbor(&make_edge(p(5.0, 5.0, 5.0), p(6.0, 6.0, 6.0)), 0), None);
    }

    #[test]
    fn third_triangle_on_edge_is_non_manifold() {
        let triangles = [
            tri([0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.5, 1.0, 0.0]),
            tri([0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.5, 0.5, 0.0]),
            tri([0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.5, -0.5, 0.0]),
        ];
        let err = EdgeConnectivity::build(&triangles).unwrap_err();
        match err {
            MeshError::NonManifoldEdge {
                edge,
                triangles,
                extra,
            } => {
                assert_eq!(edge, make_edge(p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0)));
                assert_eq!(triangles, [0, 1]);
                assert_eq!(extra, 2);
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
