pub mod connectivity;
pub mod mesh;

pub use connectivity::{EdgeConnectivity, EdgeSlots, TriangleIndex};
pub use mesh::{MeshParams, TriangleMesh};
