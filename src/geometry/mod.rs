pub mod edge;
pub mod point;
pub mod triangle;

pub use edge::{make_edge, Edge};
pub use point::Point;
pub use triangle::Triangle;
