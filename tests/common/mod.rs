#![allow(dead_code)]

use std::fmt::Write as _;

use trishell::{Point, Triangle};

/// Installs a test subscriber once; `RUST_LOG` controls verbosity.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn p(x: f64, y: f64, z: f64) -> Point {
    Point::new(x, y, z)
}

/// Closed axis-aligned cube, 12 outward-facing triangles.
pub fn cube(min: [f64; 3], size: f64) -> Vec<Triangle> {
    let [x0, y0, z0] = min;
    let (x1, y1, z1) = (x0 + size, y0 + size, z0 + size);
    let v = |x, y, z| p(x, y, z);
    let faces = [
        // z = z0, normal -z
        [v(x0, y0, z0), v(x1, y1, z0), v(x1, y0, z0)],
        [v(x0, y0, z0), v(x0, y1, z0), v(x1, y1, z0)],
        // z = z1, normal +z
        [v(x0, y0, z1), v(x1, y0, z1), v(x1, y1, z1)],
        [v(x0, y0, z1), v(x1, y1, z1), v(x0, y1, z1)],
        // y = y0, normal -y
        [v(x0, y0, z0), v(x1, y0, z0), v(x1, y0, z1)],
        [v(x0, y0, z0), v(x1, y0, z1), v(x0, y0, z1)],
        // y = y1, normal +y
        [v(x0, y1, z0), v(x1, y1, z1), v(x1, y1, z0)],
        [v(x0, y1, z0), v(x0, y1, z1), v(x1, y1, z1)],
        // x = x0, normal -x
        [v(x0, y0, z0), v(x0, y1, z1), v(x0, y1, z0)],
        [v(x0, y0, z0), v(x0, y0, z1), v(x0, y1, z1)],
        // x = x1, normal +x
        [v(x1, y0, z0), v(x1, y1, z0), v(x1, y1, z1)],
        [v(x1, y0, z0), v(x1, y1, z1), v(x1, y0, z1)],
    ];
    faces
        .into_iter()
        .map(|[a, b, c]| Triangle::new(a, b, c))
        .collect()
}

/// Strip of quads at height `y`; the second triangle of each quad is wound
/// against the first.
pub fn inconsistent_strip(quads: u32, y: f64) -> Vec<Triangle> {
    let mut triangles = Vec::new();
    for k in 0..quads {
        let x0 = f64::from(k);
        let x1 = x0 + 1.0;
        triangles.push(Triangle::new(p(x0, y, 0.0), p(x1, y, 0.0), p(x0, y + 1.0, 0.0)));
        triangles.push(Triangle::new(
            p(x1, y, 0.0),
            p(x0, y + 1.0, 0.0),
            p(x1, y + 1.0, 0.0),
        ));
    }
    triangles
}

/// `rows x cols` grid of quads, all counter-clockwise seen from +z.
pub fn consistent_grid(rows: u32, cols: u32) -> Vec<Triangle> {
    let mut triangles = Vec::new();
    for i in 0..rows {
        for j in 0..cols {
            let (x0, y0) = (f64::from(j), f64::from(i));
            let (x1, y1) = (x0 + 1.0, y0 + 1.0);
            triangles.push(Triangle::new(p(x0, y0, 0.0), p(x1, y0, 0.0), p(x0, y1, 0.0)));
            triangles.push(Triangle::new(p(x1, y0, 0.0), p(x1, y1, 0.0), p(x0, y1, 0.0)));
        }
    }
    triangles
}

/// Renders triangles as ASCII STL text, with the facet normal left at zero.
pub fn to_stl(name: &str, triangles: &[Triangle]) -> String {
    let mut stl = format!("solid {name}\n");
    for t in triangles {
        stl.push_str("  facet normal 0 0 0\n    outer loop\n");
        for v in t.vertices() {
            let _ = writeln!(stl, "      vertex {} {} {}", v.x(), v.y(), v.z());
        }
        stl.push_str("    endloop\n  endfacet\n");
    }
    let _ = writeln!(stl, "endsolid {name}");
    stl
}
