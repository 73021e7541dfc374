//! 2D membership geometry (points, segments, simple polygons).
//!
//! Purpose
//! - Provide exactly the primitives the region registry needs: segment
//!   intersection, shoelace area, vertex bounds, and ray-cast containment.
//! - Keep numerics explicit: one determinant tolerance, one ray margin, each
//!   documented at its use site.
//!
//! Out of scope (by design)
//! - Boolean operations, holes, self-intersecting polygons, spatial indexing.
//! - Robustness beyond the fixed tolerances; NaN/infinite coordinates are
//!   outside the contract.

pub mod polygon;
pub mod rand;
mod types;

pub use polygon::{Bounds2, Polygon, PolygonError};
pub use types::{Point, Segment};

#[cfg(test)]
mod tests;
