//! Named-region membership queries over 2D polygons.
//!
//! Callers register named polygons ("regions") with [`Areas`] and query points
//! against them: [`Areas::best_region`] resolves overlapping matches to the
//! smallest-area region, [`Areas::all_regions_with_point`] lists every match.
//!
//! The geometry layer is deliberately small: f64 points and segments, shoelace
//! areas, and an odd/even ray-casting containment test with fixed, documented
//! tolerances. See [`geom`] for the numeric caveats.

pub mod geom;
pub mod registry;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use geom::{Bounds2, Point, Polygon, PolygonError, Segment};
pub use registry::Areas;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::geom::rand::{draw_polygon_radial, RadialCfg, ReplayToken, VertexCount};
    pub use crate::geom::{Bounds2, Point, Polygon, PolygonError, Segment};
    pub use crate::registry::Areas;
}
