use crate::error::{GeometryError, Result};
use crate::geometry::Point;
use crate::math::{Point3, AABB_TOLERANCE};
use crate::topology::{TriangleIndex, TriangleMesh};

/// An axis-aligned bounding box.
///
/// `min <= max` holds on every axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Minimum corner of the bounding box.
    pub min: Point3,
    /// Maximum corner of the bounding box.
    pub max: Point3,
}

impl Aabb {
    /// Creates a box from its corners.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::InvalidBounds`] if `min` exceeds `max` on any
    /// axis.
    pub fn new(min: Point3, max: Point3) -> Result<Self> {
        if min.x > max.x || min.y > max.y || min.z > max.z {
            return Err(GeometryError::InvalidBounds {
                min: [min.x, min.y, min.z],
                max: [max.x, max.y, max.z],
            }
            .into());
        }
        Ok(Self { min, max })
    }

    /// The box spanned by two opposite corners, grown by `pad` on every side.
    ///
    /// Only the magnitude of `pad` is used; a negative pad also grows the box.
    #[must_use]
    pub fn from_points(a: &Point, b: &Point, pad: f64) -> Self {
        let (a, b) = (a.as_point3(), b.as_point3());
        let pad = pad.abs();
        Self {
            min: Point3::new(a.x.min(b.x) - pad, a.y.min(b.y) - pad, a.z.min(b.z) - pad),
            max: Point3::new(a.x.max(b.x) + pad, a.y.max(b.y) + pad, a.z.max(b.z) + pad),
        }
    }

    /// Grows the box to include `point`.
    pub fn include(&mut self, point: &Point) {
        let p = point.as_point3();
        self.min = Point3::new(self.min.x.min(p.x), self.min.y.min(p.y), self.min.z.min(p.z));
        self.max = Point3::new(self.max.x.max(p.x), self.max.y.max(p.y), self.max.z.max(p.z));
    }

    /// Returns the box grown by `|pad|` on every side. Boxes never shrink.
    #[must_use]
    pub fn padded(&self, pad: f64) -> Self {
        let pad = pad.abs();
        Self {
            min: Point3::new(self.min.x - pad, self.min.y - pad, self.min.z - pad),
            max: Point3::new(self.max.x + pad, self.max.y + pad, self.max.z + pad),
        }
    }

    /// Returns `true` if `inner` lies inside `self` with at least `tol` to
    /// spare on every side.
    #[must_use]
    pub fn contains(&self, inner: &Aabb, tol: f64) -> bool {
        (0..3).all(|axis| {
            self.min[axis] <= inner.min[axis] - tol && inner.max[axis] + tol <= self.max[axis]
        })
    }
}

/// Computes the axis-aligned bounding box of a set of mesh triangles.
pub struct BoundingBox<'a> {
    component: &'a [TriangleIndex],
    pad: f64,
}

impl<'a> BoundingBox<'a> {
    /// Creates a new `BoundingBox` query over `component`, padded by the
    /// default [`AABB_TOLERANCE`].
    #[must_use]
    pub fn new(component: &'a [TriangleIndex]) -> Self {
        Self {
            component,
            pad: AABB_TOLERANCE,
        }
    }

    /// Sets the padding added on every side. The sign is ignored.
    #[must_use]
    pub fn with_pad(mut self, pad: f64) -> Self {
        self.pad = pad;
        self
    }

    /// Executes the query, returning the padded AABB of every vertex of the
    /// component's triangles.
    ///
    /// Returns `None` if the component has no triangle in `mesh`.
    #[must_use]
    pub fn execute(&self, mesh: &TriangleMesh) -> Option<Aabb> {
        let mut vertices = self
            .component
            .iter()
            .filter_map(|&index| mesh.triangle(index))
            .flat_map(|triangle| triangle.vertices());

        let first = vertices.next()?;
        let mut aabb = Aabb::from_points(&first, &first, 0.0);
        for vertex in vertices {
            aabb.include(&vertex);
        }
        Some(aabb.padded(self.pad))
    }
}

/// Padded AABB of a component. See [`BoundingBox`].
#[must_use]
pub fn component_aabb(mesh: &TriangleMesh, component: &[TriangleIndex], pad: f64) -> Option<Aabb> {
    BoundingBox::new(component).with_pad(pad).execute(mesh)
}
