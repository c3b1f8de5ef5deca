use std::io::Write;

use crate::error::Result;
use crate::geometry::Triangle;
use crate::io::stl::write_ascii_stl;
use crate::operations::orientation::propagate_orientation;
use crate::operations::query::{closed_components, find_connected_components, identify_voids};
use crate::topology::{TriangleIndex, TriangleMesh};

/// Solid name of the STL written by [`export_inconsistent_triangles`].
pub const REORIENTED_SOLID_NAME: &str = "reoriented_triangles";

/// Solid name of the STL written by [`export_voids`].
pub const VOIDS_SOLID_NAME: &str = "voids";

/// Propagates orientation from `seed` and writes the flipped triangles as
/// ASCII STL.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn export_inconsistent_triangles<W: Write>(
    mesh: &TriangleMesh,
    seed: TriangleIndex,
    out: &mut W,
) -> Result<()> {
    let flipped = propagate_orientation(mesh, seed);
    write_ascii_stl(out, REORIENTED_SOLID_NAME, &flipped)
}

/// Partitions the mesh, keeps its closed shells, and writes the triangles of
/// every void shell as ASCII STL.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn export_voids<W: Write>(mesh: &TriangleMesh, out: &mut W) -> Result<()> {
    let closed = closed_components(mesh, find_connected_components(mesh));
    let voids = identify_voids(mesh, &closed);

    let triangles: Vec<Triangle> = voids
        .iter()
        .flatten()
        .filter_map(|&index| mesh.triangle(index).copied())
        .collect();
    write_ascii_stl(out, VOIDS_SOLID_NAME, &triangles)
}
