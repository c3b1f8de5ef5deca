use thiserror::Error;

use crate::geometry::Edge;
use crate::topology::TriangleIndex;

/// Top-level error type for the trishell crate.
#[derive(Debug, Error)]
pub enum TrishellError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Mesh(#[from] MeshError),

    #[error(transparent)]
    Io(#[from] IoError),
}

/// Errors related to geometric value construction.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("bounding box min must be <= max on every axis (min = {min:?}, max = {max:?})")]
    InvalidBounds { min: [f64; 3], max: [f64; 3] },
}

/// Validation failures raised while building a [`TriangleMesh`](crate::topology::TriangleMesh).
#[derive(Debug, Error)]
pub enum MeshError {
    #[error("triangle list is empty")]
    EmptyInput,

    #[error("triangle {index} is degenerate: {reason}")]
    DegenerateTriangle {
        index: TriangleIndex,
        reason: DegenerateReason,
    },

    #[error("edge {edge} is shared by more than two triangles ({triangles:?} and {extra})")]
    NonManifoldEdge {
        edge: Edge,
        triangles: [TriangleIndex; 2],
        extra: TriangleIndex,
    },
}

/// Why a triangle was rejected as degenerate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DegenerateReason {
    /// Two of the three vertices coincide.
    DuplicateVertices,
    /// The vertices are collinear (zero area).
    Collinear,
    /// A coordinate is NaN or infinite.
    NonFinite,
}

impl std::fmt::Display for DegenerateReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateVertices => f.write_str("duplicate vertices"),
            Self::Collinear => f.write_str("collinear vertices"),
            Self::NonFinite => f.write_str("non-finite coordinate"),
        }
    }
}

/// Errors raised by the STL readers and writers.
#[derive(Debug, Error)]
pub enum IoError {
    #[error("I/O failure: {0}")]
    Io(#[from] std::io::Error),

    #[error("binary STL is truncated: expected {expected} bytes, got {actual}")]
    TruncatedBinary { expected: usize, actual: usize },
}

impl From<std::io::Error> for TrishellError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(IoError::Io(err))
    }
}

/// Convenience type alias for results using [`TrishellError`].
pub type Result<T> = std::result::Result<T, TrishellError>;
