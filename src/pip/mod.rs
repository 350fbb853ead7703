//! Point-in-polygon (PIP) country resolution.
//!
//! Ray-cast containment, haversine distance, an R-tree prefilter and the
//! two resolvers built on them: shapes to intersecting countries, and line
//! endpoints to containing countries.

pub mod distance;
pub mod geometry;
mod index;
pub mod line;
pub mod shape;
mod service;

pub use distance::{haversine_distance_km, point_in_circle};
pub use geometry::{point_in_geometry, point_in_multi_polygon, point_in_polygon, point_in_ring};
pub use index::CountryIndex;
pub use line::detect_countries_for_line;
pub use service::CountryDetector;
pub use shape::detect_countries_in_shape;
