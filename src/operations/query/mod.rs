mod bounding_box;
mod components;
mod is_closed;
mod voids;

pub use bounding_box::{component_aabb, Aabb, BoundingBox};
pub use components::{find_connected_components, ConnectedComponent, FindComponents};
pub use is_closed::{closed_components, is_component_closed, IsClosed};
pub use voids::{identify_voids, IdentifyVoids, VoidParams};
