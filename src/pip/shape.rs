//! Resolve a user-drawn shape to the countries it touches.
//!
//! Two sampling passes, merged:
//!
//! 1. **Vertex pass**: for each country, test up to `samples_per_country` of
//!    its boundary vertices against the shape, and the shape's own anchor
//!    points (circle center or polygon vertices) against the country.
//! 2. **Grid pass**: lay a fixed grid over the shape's extent, keep the points
//!    inside the shape and look up the country each one falls in.
//!
//! This trades precision for cost. A country entirely inside a shape, or a
//! shape entirely inside a country, is only found when some sampled point
//! of one lands in the other.

use geo::{BoundingRect, Coord, LineString};
use tracing::debug;

use super::distance::{km_to_degree_offsets, point_in_circle};
use super::geometry::{point_in_coords, point_in_geometry};
use crate::config::DetectionConfig;
use crate::models::{CountryGeometry, CountrySet, Shape};

/// Names of the countries intersecting `shape`, in collection order.
///
/// An invalid shape yields an empty list.
pub fn detect_countries_in_shape(
    shape: &Shape,
    countries: &CountrySet,
    config: &DetectionConfig,
) -> Vec<String> {
    if let Err(e) = shape.validate() {
        debug!("Ignoring invalid shape: {}", e);
        return Vec::new();
    }

    let mut matched = vec![false; countries.len()];

    let vertex_hits = vertex_pass(shape, countries, config, &mut matched);
    let grid_hits = grid_pass(shape, countries, config, &mut matched);

    debug!(
        "Shape resolution: {} vertex-pass hits, {} new grid-pass hits",
        vertex_hits, grid_hits
    );

    countries
        .countries()
        .iter()
        .zip(matched)
        .filter(|(_, hit)| *hit)
        .map(|(country, _)| country.name.clone())
        .collect()
}

/// Up to `k` outer-ring vertices of a geometry.
///
/// Returns every vertex when there are at most `k`, otherwise `k` vertices
/// at an even stride over the concatenated rings.
pub fn sample_vertices(geometry: &CountryGeometry, k: usize) -> Vec<Coord<f64>> {
    let total = geometry.vertex_count();
    if total <= k {
        return geometry.outer_vertices().copied().collect();
    }

    let mut picks = (0..k).map(|i| i * total / k).peekable();
    let mut samples = Vec::with_capacity(k);
    for (idx, vertex) in geometry.outer_vertices().enumerate() {
        match picks.peek() {
            Some(&next) if next == idx => {
                samples.push(*vertex);
                picks.next();
            }
            Some(_) => {}
            None => break,
        }
    }
    samples
}

/// Mark countries found by vertex sampling. Returns how many were found.
fn vertex_pass(
    shape: &Shape,
    countries: &CountrySet,
    config: &DetectionConfig,
    matched: &mut [bool],
) -> usize {
    let mut hits = 0;
    for (country, hit) in countries.countries().iter().zip(matched.iter_mut()) {
        let samples = sample_vertices(&country.geometry, config.samples_per_country);

        let found = match shape {
            Shape::Circle { center, radius_km } => {
                samples
                    .iter()
                    .any(|s| point_in_circle(*s, *center, *radius_km))
                    || point_in_geometry(*center, &country.geometry)
            }
            Shape::Polygon { vertices } => {
                samples.iter().any(|s| point_in_coords(*s, vertices))
                    || vertices
                        .iter()
                        .any(|v| point_in_geometry(*v, &country.geometry))
            }
        };

        if found {
            *hit = true;
            hits += 1;
        }
    }
    hits
}

/// Mark countries found by the grid. Returns how many were newly found.
fn grid_pass(
    shape: &Shape,
    countries: &CountrySet,
    config: &DetectionConfig,
    matched: &mut [bool],
) -> usize {
    let points = match shape {
        Shape::Circle { center, radius_km } => circle_grid(*center, *radius_km, config),
        Shape::Polygon { vertices } => polygon_grid(vertices, config.polygon_grid_size),
    };

    let mut hits = 0;
    for p in points {
        if let Some(position) = countries.position_at(p) {
            if !matched[position] {
                matched[position] = true;
                hits += 1;
            }
        }
    }
    hits
}

/// Grid points inside a circle, laid over its equirectangular bounding square.
fn circle_grid(center: Coord<f64>, radius_km: f64, config: &DetectionConfig) -> Vec<Coord<f64>> {
    let (d_lon, d_lat) = km_to_degree_offsets(center.y, radius_km, config.km_per_degree);
    let min = Coord {
        x: center.x - d_lon,
        y: center.y - d_lat,
    };
    let max = Coord {
        x: center.x + d_lon,
        y: center.y + d_lat,
    };

    grid(min, max, config.circle_grid_size)
        .filter(|p| point_in_circle(*p, center, radius_km))
        .collect()
}

/// Grid points inside a polygon, laid over its bounding box.
fn polygon_grid(vertices: &[Coord<f64>], n: usize) -> Vec<Coord<f64>> {
    let Some(rect) = LineString::from(vertices.to_vec()).bounding_rect() else {
        return Vec::new();
    };

    grid(rect.min(), rect.max(), n)
        .filter(|p| point_in_coords(*p, vertices))
        .collect()
}

/// `n x n` points spanning `min..=max` on both axes. A single point sits at
/// the middle.
fn grid(min: Coord<f64>, max: Coord<f64>, n: usize) -> impl Iterator<Item = Coord<f64>> {
    let step = move |lo: f64, hi: f64, i: usize| {
        if n == 1 {
            (lo + hi) / 2.0
        } else {
            lo + (hi - lo) * i as f64 / (n - 1) as f64
        }
    };

    (0..n).flat_map(move |i| {
        (0..n).map(move |j| Coord {
            x: step(min.x, max.x, i),
            y: step(min.y, max.y, j),
        })
    })
}
