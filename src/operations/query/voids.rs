use tracing::debug;

use crate::math::AABB_TOLERANCE;
use crate::topology::TriangleMesh;

use super::bounding_box::{component_aabb, Aabb};
use super::components::ConnectedComponent;

/// Parameters controlling void detection.
#[derive(Debug, Clone, Copy)]
pub struct VoidParams {
    /// Padding added to every shell's bounding box. The sign is ignored.
    pub pad: f64,
    /// Clearance required on every side for one box to contain another.
    pub tolerance: f64,
}

impl Default for VoidParams {
    fn default() -> Self {
        Self {
            pad: AABB_TOLERANCE,
            tolerance: AABB_TOLERANCE,
        }
    }
}

/// Finds closed shells nested inside other closed shells.
///
/// A shell is a void if its padded AABB is contained in the padded AABB of
/// some other shell in the set. Box containment is necessary but not
/// sufficient for geometric nesting: shells whose boxes nest without the
/// shells themselves nesting are still reported.
pub struct IdentifyVoids<'a> {
    closed: &'a [ConnectedComponent],
    params: VoidParams,
}

impl<'a> IdentifyVoids<'a> {
    /// Creates a new `IdentifyVoids` query over the closed shells `closed`.
    #[must_use]
    pub fn new(closed: &'a [ConnectedComponent]) -> Self {
        Self {
            closed,
            params: VoidParams::default(),
        }
    }

    /// Sets custom padding and containment tolerance.
    #[must_use]
    pub fn with_params(mut self, params: VoidParams) -> Self {
        self.params = params;
        self
    }

    /// Executes the query, returning the void shells in input order.
    #[must_use]
    pub fn execute(&self, mesh: &TriangleMesh) -> Vec<ConnectedComponent> {
        if self.closed.len() < 2 {
            return Vec::new();
        }

        let boxes: Vec<Option<Aabb>> = self
            .closed
            .iter()
            .map(|component| component_aabb(mesh, component, self.params.pad))
            .collect();

        let voids: Vec<ConnectedComponent> = self
            .closed
            .iter()
            .enumerate()
            .filter(|&(i, _)| {
                let Some(inner) = &boxes[i] else {
                    return false;
                };
                boxes.iter().enumerate().any(|(j, outer)| {
                    j != i
                        && outer
                            .as_ref()
                            .is_some_and(|outer| outer.contains(inner, self.params.tolerance))
                })
            })
            .map(|(_, component)| component.clone())
            .collect();

        debug!(
            shells = self.closed.len(),
            voids = voids.len(),
            "identified voids"
        );
        voids
    }
}

/// Closed shells whose bounding box lies inside another's. See
/// [`IdentifyVoids`].
#[must_use]
pub fn identify_voids(mesh: &TriangleMesh, closed: &[ConnectedComponent]) -> Vec<ConnectedComponent> {
    IdentifyVoids::new(closed).execute(mesh)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::{Point, Triangle};
    use crate::operations::query::{closed_components, find_connected_components};

    /// Closed tetrahedron with its right-angle corner at `origin`, edge `size`.
    fn tetrahedron(origin: [f64; 3], size: f64) -> Vec<Triangle> {
        let [x, y, z] = origin;
        let o = Point::new(x, y, z);
        let px = Point::new(x + size, y, z);
        let py = Point::new(x, y + size, z);
        let pz = Point::new(x, y, z + size);
        vec![
            Triangle::new(o, py, px),
            Triangle::new(o, px, pz),
            Triangle::new(o, pz, py),
            Triangle::new(px, py, pz),
        ]
    }

    fn shells(mesh: &TriangleMesh) -> Vec<ConnectedComponent> {
        closed_components(mesh, find_connected_components(mesh))
    }

    #[test]
    fn single_shell_has_no_voids() {
        let mesh = TriangleMesh::new(tetrahedron([0.0, 0.0, 0.0], 1.0)).unwrap();
        let closed = shells(&mesh);
        assert_eq!(closed.len(), 1);
        assert!(identify_voids(&mesh, &closed).is_empty());
    }

    #[test]
    fn nested_shell_is_void() {
        let mut triangles = tetrahedron([0.0, 0.0, 0.0], 10.0);
        triangles.extend(tetrahedron([1.0, 1.0, 1.0], 2.0));
        let mesh = TriangleMesh::new(triangles).unwrap();
        let closed = shells(&mesh);
        assert_eq!(closed.len(), 2);
        let voids = identify_voids(&mesh, &closed);
        assert_eq!(voids.len(), 1);
        let mut members = voids[0].clone();
        members.sort_unstable();
        assert_eq!(members, vec![4, 5, 6, 7]);
    }

    #[test]
    fn disjoint_shells_have_no_voids() {
        let mut triangles = tetrahedron([0.0, 0.0, 0.0], 1.0);
        triangles.extend(tetrahedron([5.0, 0.0, 0.0], 1.0));
        let mesh = TriangleMesh::new(triangles).unwrap();
        let closed = shells(&mesh);
        assert_eq!(closed.len(), 2);
        assert!(identify_voids(&mesh, &closed).is_empty());
    }

    #[test]
    fn touching_boxes_are_not_voids() {
        // Inner shell shares the outer shell's min corner, so there is no clearance.
        let mut triangles = tetrahedron([0.0, 0.0, 0.0], 10.0);
        triangles.extend(tetrahedron([0.0, 0.0, 0.0], 2.0));
        let mesh = TriangleMesh::new(triangles).unwrap();
        let closed = shells(&mesh);
        assert_eq!(closed.len(), 2);
        assert!(identify_voids(&mesh, &closed).is_empty());

        let loose = VoidParams {
            pad: 0.0,
            tolerance: 0.0,
        };
        let voids = IdentifyVoids::new(&closed).with_params(loose).execute(&mesh);
        assert_eq!(voids.len(), 1);
    }

    #[test]
    fn box_nesting_without_shell_nesting_is_still_reported() {
        // The small tetrahedron sits in the empty corner of the large one's
        // bounding box, outside the large solid itself.
        let mut triangles = tetrahedron([0.0, 0.0, 0.0], 10.0);
        triangles.extend(tetrahedron([7.0, 7.0, 7.0], 1.0));
        let mesh = TriangleMesh::new(triangles).unwrap();
        let closed = shells(&mesh);
        assert_eq!(identify_voids(&mesh, &closed).len(), 1);
    }

    #[test]
    fn multiple_voids_in_one_shell() {
        let mut triangles = tetrahedron([0.0, 0.0, 0.0], 20.0);
        triangles.extend(tetrahedron([1.0, 1.0, 1.0], 1.0));
        triangles.extend(tetrahedron([3.0, 1.0, 1.0], 1.0));
        triangles.extend(tetrahedron([1.0, 3.0, 1.0], 1.0));
        let mesh = TriangleMesh::new(triangles).unwrap();
        let closed = shells(&mesh);
        assert_eq!(closed.len(), 4);
        let voids = identify_voids(&mesh, &closed);
        assert_eq!(voids.len(), 3);
        assert_eq!(voids, closed[1..].to_vec());
    }
}
