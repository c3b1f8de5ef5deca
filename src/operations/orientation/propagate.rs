use std::collections::VecDeque;

use tracing::{debug, trace, warn};

use crate::error::Result;
use crate::geometry::{Edge, Triangle};
use crate::topology::{TriangleIndex, TriangleMesh};

/// Returns `true` if `t1` and `t2` traverse the shared `edge` in opposite
/// directions.
///
/// Exactly one of the two triangles may contain the directed edge
/// `edge.first() -> edge.second()`.
#[must_use]
pub fn are_orientations_consistent(t1: &Triangle, t2: &Triangle, edge: &Edge) -> bool {
    let t1_forward = t1.has_directed_edge(edge.first(), edge.second());
    let t2_forward = t2.has_directed_edge(edge.first(), edge.second());
    t1_forward != t2_forward
}

/// Which winding of an already visited triangle its neighbors are checked
/// against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OrientationReference {
    /// Compare with the triangle as stored in the mesh. Every reported
    /// triangle disagrees with the stored winding of the triangle it was
    /// reached from.
    #[default]
    Stored,
    /// Compare with the triangle's corrected winding, so a flip propagates
    /// through the rest of the component.
    Corrected,
}

/// A triangle whose winding was reversed during propagation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reoriented {
    /// Index of the triangle in the mesh.
    pub index: TriangleIndex,
    /// The triangle with `b` and `c` swapped.
    pub triangle: Triangle,
}

/// Breadth-first winding propagation from a seed triangle.
///
/// The seed is assumed correctly oriented. Only the component containing the
/// seed is visited; the mesh is never modified.
pub struct PropagateOrientation {
    seed: TriangleIndex,
    reference: OrientationReference,
}

impl PropagateOrientation {
    /// Creates a new `PropagateOrientation` operation seeded at `seed`.
    #[must_use]
    pub fn new(seed: TriangleIndex) -> Self {
        Self {
            seed,
            reference: OrientationReference::default(),
        }
    }

    /// Sets which winding neighbors are compared against.
    #[must_use]
    pub fn with_reference(mut self, reference: OrientationReference) -> Self {
        self.reference = reference;
        self
    }

    /// Executes the propagation, returning the flipped copies of every
    /// inconsistent triangle in visit order.
    ///
    /// An out-of-range seed yields an empty list.
    #[must_use]
    pub fn execute(&self, mesh: &TriangleMesh) -> Vec<Triangle> {
        self.execute_indexed(mesh)
            .into_iter()
            .map(|r| r.triangle)
            .collect()
    }

    /// Like [`execute`](Self::execute), but keeps each flipped triangle's
    /// mesh index.
    #[must_use]
    pub fn execute_indexed(&self, mesh: &TriangleMesh) -> Vec<Reoriented> {
        let triangles = mesh.triangles();
        let connectivity = mesh.connectivity();

        if self.seed >= triangles.len() {
            warn!(
                seed = self.seed,
                triangles = triangles.len(),
                "seed out of range, nothing to propagate"
            );
            return Vec::new();
        }

        let mut visited = vec![false; triangles.len()];
        let mut flipped = vec![false; triangles.len()];
        let mut result = Vec::new();
        let mut queue = VecDeque::new();

        visited[self.seed] = true;
        queue.push_back(self.seed);

        while let Some(index) = queue.pop_front() {
            let current = match self.reference {
                OrientationReference::Corrected if flipped[index] => triangles[index].flipped(),
                _ => triangles[index],
            };

            for edge in current.edges() {
                let Some(neighbor) = connectivity.neighbor(&edge, index) else {
                    continue;
                };
                if visited[neighbor] {
                    continue;
                }

                let candidate = &triangles[neighbor];
                if !are_orientations_consistent(&current, candidate, &edge) {
                    trace!(triangle = neighbor, from = index, "flipping inconsistent triangle");
                    flipped[neighbor] = true;
                    result.push(Reoriented {
                        index: neighbor,
                        triangle: candidate.flipped(),
                    });
                }

                visited[neighbor] = true;
                queue.push_back(neighbor);
            }
        }

        debug!(seed = self.seed, flipped = result.len(), "orientation propagated");
        result
    }
}

/// Flipped copies of every triangle whose winding disagrees with its BFS
/// parent, starting from `seed`. See [`PropagateOrientation`].
#[must_use]
pub fn propagate_orientation(mesh: &TriangleMesh, seed: TriangleIndex) -> Vec<Triangle> {
    PropagateOrientation::new(seed).execute(mesh)
}

/// Builds a new mesh with each reoriented triangle replaced by its
/// corrected copy.
///
/// # Errors
///
/// Returns any validation error from [`TriangleMesh::new`]. Flipping never
/// changes geometry, so this only fails if `corrections` refers to
/// triangles from a different mesh.
pub fn apply_reorientation(mesh: &TriangleMesh, corrections: &[Reoriented]) -> Result<TriangleMesh> {
    let mut triangles = mesh.triangles().to_vec();
    for correction in corrections {
        if let Some(slot) = triangles.get_mut(correction.index) {
            *slot = correction.triangle;
        }
    }
    TriangleMesh::new(triangles)
}
