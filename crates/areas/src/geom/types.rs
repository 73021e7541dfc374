//! Point and segment value types.

use std::fmt;

use nalgebra::{Matrix2, Vector2};

/// Tolerance on the Cramer determinant below which two carrying lines are
/// treated as parallel and no intersection is reported.
///
/// Collinear overlapping segments also fall under it and report no
/// intersection; the containment parity count relies on this when a ray runs
/// along a horizontal edge.
const EPS_PARALLEL: f64 = 1e-4;

/// Immutable 2D point: plain f64 coordinates, value equality.
///
/// No validation is performed; behavior for NaN or infinite coordinates is
/// outside the contract.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// View as a nalgebra vector for linear-algebra call sites.
    #[inline]
    pub fn coords(self) -> Vector2<f64> {
        Vector2::new(self.x, self.y)
    }
}

impl<X, Y> From<(X, Y)> for Point
where
    X: Into<f64>,
    Y: Into<f64>,
{
    /// Normalizes any numeric pair (mixed integer/float included) to f64 once
    /// at the boundary.
    #[inline]
    fn from((x, y): (X, Y)) -> Self {
        Self::new(x.into(), y.into())
    }
}

impl From<Vector2<f64>> for Point {
    #[inline]
    fn from(v: Vector2<f64>) -> Self {
        Self::new(v.x, v.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Segment between two points.
///
/// Direction only matters for construction; intersection is symmetric in the
/// operands and in start/end.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub start: Point,
    pub end: Point,
}

impl Segment {
    #[inline]
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// General form `a·x + b·y = c` of the carrying line.
    #[inline]
    fn line(&self) -> (f64, f64, f64) {
        let a = self.end.y - self.start.y;
        let b = self.start.x - self.end.x;
        (a, b, a * self.start.x + b * self.start.y)
    }

    /// Inclusive axis-aligned envelope test.
    #[inline]
    fn envelope_contains(&self, p: Point) -> bool {
        p.x >= self.start.x.min(self.end.x)
            && p.x <= self.start.x.max(self.end.x)
            && p.y >= self.start.y.min(self.end.y)
            && p.y <= self.start.y.max(self.end.y)
    }

    /// Intersection point with `other`, if the finite segments cross.
    ///
    /// Solves the two carrying lines by Cramer's rule, then keeps the solution
    /// only if it lies in both segments' envelopes (inclusive, so a shared
    /// endpoint counts as an intersection). Determinants under the parallel
    /// tolerance report `None`; collinear overlapping segments therefore also
    /// report `None` — a known gap, kept as-is.
    pub fn intersection(&self, other: &Segment) -> Option<Point> {
        let (a1, b1, c1) = self.line();
        let (a2, b2, c2) = other.line();
        let det = Matrix2::new(a1, b1, a2, b2).determinant();
        if det.abs() < EPS_PARALLEL {
            return None;
        }
        let p = Point::new((b2 * c1 - b1 * c2) / det, (a1 * c2 - a2 * c1) / det);
        if self.envelope_contains(p) && other.envelope_contains(p) {
            Some(p)
        } else {
            None
        }
    }

    #[inline]
    pub fn intersects(&self, other: &Segment) -> bool {
        self.intersection(other).is_some()
    }

    /// How many of `segments` this segment intersects. Feeds the polygon
    /// containment parity count.
    pub fn count_intersections(&self, segments: &[Segment]) -> usize {
        segments.iter().filter(|s| self.intersects(s)).count()
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}<->{}", self.start, self.end)
    }
}
