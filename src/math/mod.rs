/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// Tolerance below which a triangle's doubled area counts as zero.
///
/// Compared squared against the squared norm of the edge cross product.
pub const DEGENERACY_TOLERANCE: f64 = 1e-16;

/// Padding and containment tolerance for shell bounding boxes.
pub const AABB_TOLERANCE: f64 = 1e-9;
