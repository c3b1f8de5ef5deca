pub mod error;
pub mod geometry;
pub mod io;
pub mod math;
pub mod operations;
pub mod topology;

pub use error::{Result, TrishellError};
pub use geometry::{make_edge, Edge, Point, Triangle};
pub use operations::orientation::propagate_orientation;
pub use operations::query::{
    find_connected_components, identify_voids, is_component_closed, ConnectedComponent,
};
pub use topology::{TriangleIndex, TriangleMesh};
