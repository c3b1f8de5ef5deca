//! STL reading and writing.
//!
//! The ASCII reader is a token scanner: it looks for the `vertex` keyword,
//! reads the following three numbers, and groups every three vertices into a
//! triangle. All other tokens (`solid`, `facet normal ...`, `outer loop`, ...)
//! are ignored, so facet normals in the file never influence winding.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Read, Write};
use std::path::Path;

use tracing::{debug, warn};

use crate::error::{IoError, Result};
use crate::geometry::{Point, Triangle};

/// Size of the binary STL header in bytes.
const BINARY_HEADER_LEN: usize = 80;

/// Size of one binary STL facet record: normal, three vertices, attribute.
const BINARY_FACET_LEN: usize = 12 * 4 + 2;

/// Solid name used by [`transcode_binary_stl`].
const CONVERTED_SOLID_NAME: &str = "converted";

/// Collects vertex coordinates across tokens and emits triangles.
#[derive(Default)]
struct VertexScanner {
    triangles: Vec<Triangle>,
    pending: Vec<Point>,
    coords: Vec<f64>,
    in_vertex: bool,
    stopped: bool,
}

impl VertexScanner {
    fn feed(&mut self, token: &str) {
        if self.stopped {
            return;
        }
        if !self.in_vertex {
            if token == "vertex" {
                self.in_vertex = true;
                self.coords.clear();
            }
            return;
        }

        let Ok(value) = token.parse::<f64>() else {
            warn!(token, "malformed STL coordinate, stopping parse");
            self.stopped = true;
            return;
        };
        self.coords.push(value);
        if self.coords.len() < 3 {
            return;
        }

        self.in_vertex = false;
        self.pending
            .push(Point::new(self.coords[0], self.coords[1], self.coords[2]));
        if self.pending.len() == 3 {
            self.triangles
                .push(Triangle::new(self.pending[0], self.pending[1], self.pending[2]));
            self.pending.clear();
        }
    }

    fn finish(self) -> Vec<Triangle> {
        if !self.pending.is_empty() {
            warn!(
                vertices = self.pending.len(),
                "dropping incomplete trailing triangle"
            );
        }
        self.triangles
    }
}

/// Parses triangles from ASCII STL text.
///
/// Every three consecutive `vertex x y z` entries form one triangle, in file
/// order. An incomplete trailing triangle is dropped. A coordinate that does
/// not parse as a number stops the scan; the triangles completed before it
/// are returned.
///
/// # Errors
///
/// Returns an error only if reading from `input` fails.
pub fn parse_ascii_stl<R: Read>(input: R) -> Result<Vec<Triangle>> {
    let mut reader = BufReader::new(input);
    let mut scanner = VertexScanner::default();
    let mut line = Vec::new();

    loop {
        line.clear();
        if reader.read_until(b'\n', &mut line)? == 0 {
            break;
        }
        let text = String::from_utf8_lossy(&line);
        for token in text.split_whitespace() {
            scanner.feed(token);
        }
        if scanner.stopped {
            break;
        }
    }

    Ok(scanner.finish())
}

/// Writes `triangles` as an ASCII STL solid called `name`.
///
/// Each facet carries the non-normalized normal `(b - a) x (c - a)`. An empty
/// slice still produces a matching `solid`/`endsolid` pair.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_ascii_stl<W: Write>(out: &mut W, name: &str, triangles: &[Triangle]) -> Result<()> {
    writeln!(out, "solid {name}")?;
    for triangle in triangles {
        write_facet(out, triangle)?;
    }
    writeln!(out, "endsolid {name}")?;
    Ok(())
}

fn write_facet<W: Write>(out: &mut W, triangle: &Triangle) -> std::io::Result<()> {
    let n = triangle.normal();
    writeln!(out, "  facet normal {} {} {}", n.x, n.y, n.z)?;
    writeln!(out, "    outer loop")?;
    for v in triangle.vertices() {
        writeln!(out, "      vertex {} {} {}", v.x(), v.y(), v.z())?;
    }
    writeln!(out, "    endloop")?;
    writeln!(out, "  endfacet")
}

/// Decoded binary STL facet: vertex coordinates in file precision.
struct BinaryFacet {
    vertices: [[f32; 3]; 3],
}

fn read_f32(bytes: &[u8], offset: usize) -> f32 {
    f32::from_le_bytes([
        bytes[offset],
        bytes[offset + 1],
        bytes[offset + 2],
        bytes[offset + 3],
    ])
}

/// Splits a binary STL image into facets, checking its length first.
fn decode_binary(bytes: &[u8]) -> Result<Vec<BinaryFacet>> {
    let header_len = BINARY_HEADER_LEN + 4;
    if bytes.len() < header_len {
        return Err(IoError::TruncatedBinary {
            expected: header_len,
            actual: bytes.len(),
        }
        .into());
    }

    let count = u32::from_le_bytes([
        bytes[BINARY_HEADER_LEN],
        bytes[BINARY_HEADER_LEN + 1],
        bytes[BINARY_HEADER_LEN + 2],
        bytes[BINARY_HEADER_LEN + 3],
    ]) as usize;
    // A count too large to address can never be satisfied by the input.
    let expected = count
        .checked_mul(BINARY_FACET_LEN)
        .and_then(|n| n.checked_add(header_len))
        .unwrap_or(usize::MAX);
    if bytes.len() < expected {
        return Err(IoError::TruncatedBinary {
            expected,
            actual: bytes.len(),
        }
        .into());
    }

    let facets = bytes[header_len..expected]
        .chunks_exact(BINARY_FACET_LEN)
        .map(|record| {
            // Skip the stored normal (first 12 bytes); trailing attribute word is ignored.
            let vertex = |i: usize| {
                let base = 12 + i * 12;
                [
                    read_f32(record, base),
                    read_f32(record, base + 4),
                    read_f32(record, base + 8),
                ]
            };
            BinaryFacet {
                vertices: [vertex(0), vertex(1), vertex(2)],
            }
        })
        .collect();

    debug!(facets = count, "decoded binary STL");
    Ok(facets)
}

/// Reads triangles from a binary STL stream.
///
/// # Errors
///
/// Returns an error if reading fails or the data is shorter than its
/// declared facet count requires.
pub fn read_binary_stl<R: Read>(mut input: R) -> Result<Vec<Triangle>> {
    let mut bytes = Vec::new();
    input.read_to_end(&mut bytes)?;
    let facets = decode_binary(&bytes)?;

    Ok(facets
        .iter()
        .map(|facet| {
            let [a, b, c] = facet
                .vertices
                .map(|[x, y, z]| Point::new(f64::from(x), f64::from(y), f64::from(z)));
            Triangle::new(a, b, c)
        })
        .collect())
}

/// Transcodes a binary STL stream into ASCII STL.
///
/// The output solid is named `converted`, and every facet normal is written
/// as `0 0 0`. Coordinates are widened to `f64` before printing, so parsing
/// the output yields the same points as [`read_binary_stl`].
///
/// # Errors
///
/// Returns an error if reading or writing fails or the binary data is
/// truncated.
pub fn transcode_binary_stl<R: Read, W: Write>(mut input: R, out: &mut W) -> Result<()> {
    let mut bytes = Vec::new();
    input.read_to_end(&mut bytes)?;
    let facets = decode_binary(&bytes)?;

    writeln!(out, "solid {CONVERTED_SOLID_NAME}")?;
    for facet in &facets {
        writeln!(out, "  facet normal 0 0 0")?;
        writeln!(out, "    outer loop")?;
        for [x, y, z] in facet.vertices {
            let (x, y, z) = (f64::from(x), f64::from(y), f64::from(z));
            writeln!(out, "      vertex {x} {y} {z}")?;
        }
        writeln!(out, "    endloop")?;
        writeln!(out, "  endfacet")?;
    }
    writeln!(out, "endsolid {CONVERTED_SOLID_NAME}")?;
    Ok(())
}

/// Converts the binary STL at `binary_path` into an ASCII STL at `ascii_path`.
///
/// # Errors
///
/// Returns an error if either file cannot be opened, or see
/// [`transcode_binary_stl`].
pub fn convert_binary_stl_to_ascii(
    binary_path: impl AsRef<Path>,
    ascii_path: impl AsRef<Path>,
) -> Result<()> {
    let input = BufReader::new(File::open(binary_path.as_ref())?);
    let mut out = BufWriter::new(File::create(ascii_path.as_ref())?);
    transcode_binary_stl(input, &mut out)?;
    out.flush()?;
    Ok(())
}
