//! Insertion-ordered registry of named regions.

use crate::geom::{Point, Polygon, PolygonError};

/// Ordered collection of `(name, polygon)` regions.
///
/// Insertion order is significant: equal-area matches resolve to the earliest
/// inserted region. Names need not be unique; duplicates are independent
/// entries. There is no removal.
///
/// The intended usage is single-writer setup followed by read-only queries.
/// The registry carries no internal synchronization; share it across threads
/// only behind external locking, and only once registration is finished.
#[derive(Clone, Debug, Default)]
pub struct Areas {
    entries: Vec<(String, Polygon)>,
}

impl Areas {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of registered regions (duplicates counted).
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Register a region under `name`.
    ///
    /// Accepts any ordered sequence of numeric pairs (mixed integer/float
    /// input is normalized once here). The only failure is the polygon
    /// constructor's minimum of 3 points, surfaced immediately.
    pub fn add_region<I, P>(
        &mut self,
        name: impl Into<String>,
        points: I,
    ) -> Result<(), PolygonError>
    where
        I: IntoIterator<Item = P>,
        P: Into<Point>,
    {
        let polygon = Polygon::new(points)?;
        self.entries.push((name.into(), polygon));
        Ok(())
    }

    /// Best (smallest-area) region containing `(x, y)`, or `None` when no
    /// region contains the point. Never an empty-string sentinel: a region
    /// legitimately named `""` is distinguishable from "no match".
    pub fn best_region(&self, x: f64, y: f64) -> Option<&str> {
        self.best_region_at(Point::new(x, y))
    }

    /// Point-taking variant of [`Areas::best_region`].
    ///
    /// Scans entries in insertion order; a later region displaces the current
    /// best only with a strictly smaller area, so equal-area ties resolve to
    /// the earliest insertion.
    pub fn best_region_at(&self, p: Point) -> Option<&str> {
        let mut best: Option<(&str, f64)> = None;
        for (name, polygon) in &self.entries {
            if !polygon.contains(p) {
                continue;
            }
            let area = polygon.area();
            if best.is_none_or(|(_, smallest)| area < smallest) {
                best = Some((name, area));
            }
        }
        best.map(|(name, _)| name)
    }

    /// Names of all regions containing `(x, y)`: deduplicated, preserving the
    /// order in which each distinct name was first seen. Possibly empty.
    pub fn all_regions_with_point(&self, x: f64, y: f64) -> Vec<&str> {
        self.regions_at(Point::new(x, y))
    }

    /// Point-taking variant of [`Areas::all_regions_with_point`].
    pub fn regions_at(&self, p: Point) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for (name, polygon) in &self.entries {
            if polygon.contains(p) && !names.contains(&name.as_str()) {
                names.push(name);
            }
        }
        names
    }
}
