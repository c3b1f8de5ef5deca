mod propagate;

pub use propagate::{
    apply_reorientation, are_orientations_consistent, propagate_orientation, OrientationReference,
    PropagateOrientation, Reoriented,
};
