use crate::topology::{TriangleIndex, TriangleMesh};

use super::components::ConnectedComponent;

/// Checks whether a shell is closed: every edge of every triangle in it is
/// shared by exactly two triangles.
pub struct IsClosed<'a> {
    component: &'a [TriangleIndex],
}

impl<'a> IsClosed<'a> {
    /// Creates a new `IsClosed` query over `component`.
    #[must_use]
    pub fn new(component: &'a [TriangleIndex]) -> Self {
        Self { component }
    }

    /// Executes the check.
    ///
    /// A triangle index outside the mesh, or an edge missing from the
    /// connectivity map, makes the component open.
    #[must_use]
    pub fn execute(&self, mesh: &TriangleMesh) -> bool {
        let connectivity = mesh.connectivity();
        self.component.iter().all(|&index| {
            mesh.triangle(index).is_some_and(|triangle| {
                triangle.edges().iter().all(|edge| {
                    connectivity
                        .get(edge)
                        .is_some_and(|slots| !slots.is_boundary())
                })
            })
        })
    }
}

/// Returns `true` if `component` has no boundary edge. See [`IsClosed`].
#[must_use]
pub fn is_component_closed(mesh: &TriangleMesh, component: &[TriangleIndex]) -> bool {
    IsClosed::new(component).execute(mesh)
}

/// Keeps the closed components, preserving their order.
#[must_use]
pub fn closed_components(
    mesh: &TriangleMesh,
    components: Vec<ConnectedComponent>,
) -> Vec<ConnectedComponent> {
    components
        .into_iter()
        .filter(|component| is_component_closed(mesh, component))
        .collect()
}
