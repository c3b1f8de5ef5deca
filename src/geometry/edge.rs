use super::point::Point;

/// An undirected edge in canonical form.
///
/// The endpoints are stored with the lexicographically smaller point first,
/// so the same geometric edge compares and hashes equal no matter which
/// triangle or traversal direction produced it. The only way to build one is
/// [`Edge::new`] (or [`make_edge`]), which performs the canonicalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Edge {
    first: Point,
    second: Point,
}

impl Edge {
    /// Creates the canonical edge between `p` and `q`.
    #[must_use]
    pub fn new(p: Point, q: Point) -> Self {
        if q < p {
            Self {
                first: q,
                second: p,
            }
        } else {
            Self {
                first: p,
                second: q,
            }
        }
    }

    /// The lexicographically smaller endpoint.
    #[must_use]
    pub fn first(&self) -> Point {
        self.first
    }

    /// The lexicographically larger endpoint.
    #[must_use]
    pub fn second(&self) -> Point {
        self.second
    }

    /// Returns `true` if both endpoints coincide.
    #[must_use]
    pub fn is_self_loop(&self) -> bool {
        self.first == self.second
    }
}

/// Creates the canonical edge between `p` and `q`.
#[must_use]
pub fn make_edge(p: Point, q: Point) -> Edge {
    Edge::new(p, q)
}

impl std::fmt::Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.first, self.second)
    }
}
