use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use tracing::debug;

use crate::error::{MeshError, Result};
use crate::geometry::Triangle;
use crate::io::stl::parse_ascii_stl;
use crate::math::DEGENERACY_TOLERANCE;

use super::connectivity::{EdgeConnectivity, TriangleIndex};

/// Parameters controlling mesh validation.
#[derive(Debug, Clone, Copy)]
pub struct MeshParams {
    /// Triangles whose edge cross product has a norm below this value are
    /// rejected as collinear.
    pub degeneracy_tolerance: f64,
}

impl Default for MeshParams {
    fn default() -> Self {
        Self {
            degeneracy_tolerance: DEGENERACY_TOLERANCE,
        }
    }
}

/// A validated triangle soup together with its edge connectivity.
///
/// The triangle list is immutable once built. Every analysis in
/// [`operations`](crate::operations) borrows the mesh read-only and returns
/// owned results.
#[derive(Debug, Clone)]
pub struct TriangleMesh {
    triangles: Vec<Triangle>,
    connectivity: EdgeConnectivity,
}

impl TriangleMesh {
    /// Builds a mesh from `triangles` with default parameters.
    ///
    /// # Errors
    ///
    /// See [`TriangleMesh::with_params`].
    pub fn new(triangles: Vec<Triangle>) -> Result<Self> {
        Self::with_params(triangles, MeshParams::default())
    }

    /// Validates `triangles` and builds their edge connectivity.
    ///
    /// All triangles are checked for degeneracy before any connectivity is
    /// built, so a degenerate triangle is reported even when the soup also
    /// contains a non-manifold edge.
    ///
    /// # Errors
    ///
    /// - [`MeshError::EmptyInput`] if `triangles` is empty.
    /// - [`MeshError::DegenerateTriangle`] for the first triangle with
    ///   coincident or collinear vertices.
    /// - [`MeshError::NonManifoldEdge`] if an edge is shared by a third triangle.
    pub fn with_params(triangles: Vec<Triangle>, params: MeshParams) -> Result<Self> {
        if triangles.is_empty() {
            return Err(MeshError::EmptyInput.into());
        }

        for (index, triangle) in triangles.iter().enumerate() {
            if let Some(reason) = triangle.degeneracy(params.degeneracy_tolerance) {
                return Err(MeshError::DegenerateTriangle { index, reason }.into());
            }
        }

        let connectivity = EdgeConnectivity::build(&triangles)?;
        debug!(
            triangles = triangles.len(),
            edges = connectivity.edge_count(),
            boundary_edges = connectivity.boundary_edge_count(),
            "built triangle mesh"
        );

        Ok(Self {
            triangles,
            connectivity,
        })
    }

    /// Reads an ASCII STL file and builds a mesh from its triangles.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be opened or read, and any
    /// validation error from [`TriangleMesh::new`].
    pub fn from_stl_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let triangles = parse_ascii_stl(BufReader::new(file))?;
        debug!(path = %path.display(), triangles = triangles.len(), "parsed STL");
        Self::new(triangles)
    }

    /// The triangles, in input order.
    #[must_use]
    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    /// Returns the triangle at `index`, if any.
    #[must_use]
    pub fn triangle(&self, index: TriangleIndex) -> Option<&Triangle> {
        self.triangles.get(index)
    }

    /// Number of triangles. Never zero.
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    #[must_use]
    pub fn connectivity(&self) -> &EdgeConnectivity {
        &self.connectivity
    }

    /// Consumes the mesh, returning its triangles.
    #[must_use]
    pub fn into_triangles(self) -> Vec<Triangle> {
        self.triangles
    }
}
