//! Simple closed polygons with ray-cast containment.

use std::fmt;

use thiserror::Error;

use super::types::{Point, Segment};

/// Horizontal margin added past `max_x` when casting the containment ray.
///
/// Fixed constant, adequate for coordinate magnitudes far below ~1e15; see
/// [`Polygon::contains`].
const RAY_MARGIN: f64 = 50.0;

/// Axis-aligned extrema of a polygon's vertices.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds2 {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

/// Polygon construction failure.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PolygonError {
    /// Fewer than 3 vertices were supplied.
    #[error("polygon must consist of at least 3 points, got {0}")]
    TooFewVertices(usize),
}

/// Simple closed polygon over an ordered vertex list.
///
/// The edge from the last vertex back to the first is implicit. Winding order
/// does not affect any result. Immutable after construction. Degenerate but
/// ≥3-point inputs (e.g. collinear vertices) are accepted; their area is 0.
#[derive(Clone, Debug, PartialEq)]
pub struct Polygon {
    vertices: Vec<Point>,
}

impl Polygon {
    /// Build from any ordered sequence of numeric pairs (normalized to f64).
    ///
    /// The only validation is the vertex count; fewer than 3 points fail with
    /// [`PolygonError::TooFewVertices`].
    pub fn new<I, P>(vertices: I) -> Result<Self, PolygonError>
    where
        I: IntoIterator<Item = P>,
        P: Into<Point>,
    {
        let vertices: Vec<Point> = vertices.into_iter().map(Into::into).collect();
        if vertices.len() < 3 {
            return Err(PolygonError::TooFewVertices(vertices.len()));
        }
        Ok(Self { vertices })
    }

    #[inline]
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    /// Non-negative shoelace area.
    ///
    /// Winding-independent (magnitude of the signed sum); correct for simple,
    /// non-self-intersecting polygons.
    pub fn area(&self) -> f64 {
        let n = self.vertices.len();
        let mut twice = 0.0;
        for i in 0..n {
            let p = self.vertices[i];
            let q = self.vertices[(i + 1) % n];
            twice += p.x * q.y - p.y * q.x;
        }
        (twice / 2.0).abs()
    }

    /// Boundary segments in vertex order, closing edge last.
    pub fn edges(&self) -> Vec<Segment> {
        let n = self.vertices.len();
        (0..n)
            .map(|i| Segment::new(self.vertices[i], self.vertices[(i + 1) % n]))
            .collect()
    }

    /// Vertex extrema on both axes.
    pub fn bounds(&self) -> Bounds2 {
        let first = self.vertices[0];
        let mut b = Bounds2 {
            min_x: first.x,
            max_x: first.x,
            min_y: first.y,
            max_y: first.y,
        };
        for v in &self.vertices[1..] {
            b.min_x = b.min_x.min(v.x);
            b.max_x = b.max_x.max(v.x);
            b.min_y = b.min_y.min(v.y);
            b.max_y = b.max_y.max(v.y);
        }
        b
    }

    /// Odd/even ray-casting containment test.
    ///
    /// Casts a horizontal segment from `p` to `(bounds().max_x + 50, p.y)` and
    /// counts boundary crossings; odd means inside. Documented limitations:
    /// - The 50-unit margin is fixed; for vertex magnitudes approaching 1e15
    ///   the ray can degenerate and results are undefined.
    /// - A ray collinear with a horizontal edge skips that edge (parallel
    ///   tolerance), so boundary points resolve to whatever parity the
    ///   remaining edges produce; the corner tests pin the resulting policy.
    pub fn contains(&self, p: Point) -> bool {
        let ray = Segment::new(p, Point::new(self.bounds().max_x + RAY_MARGIN, p.y));
        ray.count_intersections(&self.edges()) % 2 == 1
    }
}

impl fmt::Display for Polygon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, v) in self.vertices.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{v}")?;
        }
        write!(f, "]")
    }
}
