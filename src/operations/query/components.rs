use std::collections::VecDeque;

use tracing::debug;

use crate::topology::{TriangleIndex, TriangleMesh};

/// Triangle indices of one connected shell, in BFS visit order (seed first).
pub type ConnectedComponent = Vec<TriangleIndex>;

/// Partitions a mesh into edge-connected shells.
///
/// Seeds are taken in increasing index order, so components come out sorted
/// by their smallest member. Only interior edges (two incident triangles)
/// connect triangles.
#[derive(Debug, Clone, Copy, Default)]
pub struct FindComponents;

impl FindComponents {
    /// Creates a new `FindComponents` query.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Executes the partition. Every triangle appears in exactly one
    /// component.
    #[must_use]
    pub fn execute(&self, mesh: &TriangleMesh) -> Vec<ConnectedComponent> {
        let triangles = mesh.triangles();
        let connectivity = mesh.connectivity();
        let mut visited = vec![false; triangles.len()];
        let mut components = Vec::new();
        let mut queue = VecDeque::new();

        // Every index below `cursor` has been visited.
        let mut cursor = 0;
        while let Some(seed) = (cursor..triangles.len()).find(|&i| !visited[i]) {
            cursor = seed + 1;

            let mut component = ConnectedComponent::new();
            visited[seed] = true;
            queue.push_back(seed);

            while let Some(index) = queue.pop_front() {
                component.push(index);
                for edge in triangles[index].edges() {
                    let Some(neighbor) = connectivity.neighbor(&edge, index) else {
                        continue;
                    };
                    if !visited[neighbor] {
                        visited[neighbor] = true;
                        queue.push_back(neighbor);
                    }
                }
            }

            components.push(component);
        }

        debug!(components = components.len(), "partitioned mesh into shells");
        components
    }
}

/// Partitions `mesh` into connected shells. See [`FindComponents`].
#[must_use]
pub fn find_connected_components(mesh: &TriangleMesh) -> Vec<ConnectedComponent> {
    FindComponents::new().execute(mesh)
}
