//! Crossing-number point-in-polygon primitives.
//!
//! Rings are implicitly closed; an explicit closing vertex is tolerated and
//! ignored. Only outer rings take part in containment (see
//! [`crate::models::HOLES_IGNORED`]).

use geo::{Coord, LineString, MultiPolygon, Polygon};

use crate::models::CountryGeometry;

/// Fewest distinct vertices a ring needs to enclose any area.
pub const MIN_RING_VERTICES: usize = 3;

/// Distinct vertices of a ring, dropping a closing vertex equal to the first.
pub fn ring_vertices(coords: &[Coord<f64>]) -> &[Coord<f64>] {
    match coords {
        [first, .., last] if first == last => &coords[..coords.len() - 1],
        _ => coords,
    }
}

/// True when the ring has enough distinct, finite vertices to test against.
pub fn is_valid_ring(coords: &[Coord<f64>]) -> bool {
    let ring = ring_vertices(coords);
    ring.len() >= MIN_RING_VERTICES && ring.iter().all(|c| c.x.is_finite() && c.y.is_finite())
}

/// Ray-cast `p` against a vertex sequence.
///
/// Casts a ray towards +x and toggles on every edge that straddles `p.y` with
/// its crossing to the right of `p`. Points exactly on an edge may land on
/// either side.
pub fn point_in_coords(p: Coord<f64>, coords: &[Coord<f64>]) -> bool {
    let ring = ring_vertices(coords);
    if ring.len() < MIN_RING_VERTICES {
        return false;
    }

    let mut inside = false;
    let mut j = ring.len() - 1;
    for i in 0..ring.len() {
        let (a, b) = (ring[i], ring[j]);
        // The straddle check guarantees a.y != b.y
        if (a.y > p.y) != (b.y > p.y) && p.x < a.x + (p.y - a.y) * (b.x - a.x) / (b.y - a.y) {
            inside = !inside;
        }
        j = i;
    }
    inside
}

pub fn point_in_ring(p: Coord<f64>, ring: &LineString<f64>) -> bool {
    point_in_coords(p, &ring.0)
}

/// Outer ring only; interior rings are never consulted.
pub fn point_in_polygon(p: Coord<f64>, polygon: &Polygon<f64>) -> bool {
    point_in_ring(p, polygon.exterior())
}

pub fn point_in_multi_polygon(p: Coord<f64>, mp: &MultiPolygon<f64>) -> bool {
    mp.0.iter().any(|polygon| point_in_polygon(p, polygon))
}

pub fn point_in_geometry(p: Coord<f64>, geometry: &CountryGeometry) -> bool {
    match geometry {
        CountryGeometry::Polygon(polygon) => point_in_polygon(p, polygon),
        CountryGeometry::MultiPolygon(mp) => point_in_multi_polygon(p, mp),
    }
}
