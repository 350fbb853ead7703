//! Country boundaries and the validated collection the resolvers run over.

use geo::{BoundingRect, Coord, MultiPolygon, Polygon, Rect};
use hashbrown::HashSet;
use tracing::{info, warn};

use crate::pip::geometry::{is_valid_ring, point_in_geometry, ring_vertices};
use crate::pip::CountryIndex;

/// Interior rings (holes) are kept in the data but never affect containment,
/// sampling, or bounds. Enclaves therefore resolve to the enclosing country
/// unless they are listed earlier in the collection.
pub const HOLES_IGNORED: bool = true;

/// Boundary of a single country.
#[derive(Debug, Clone, PartialEq)]
pub enum CountryGeometry {
    Polygon(Polygon<f64>),
    /// Disjoint pieces, e.g. an archipelago.
    MultiPolygon(MultiPolygon<f64>),
}

impl From<Polygon<f64>> for CountryGeometry {
    fn from(polygon: Polygon<f64>) -> Self {
        CountryGeometry::Polygon(polygon)
    }
}

impl From<MultiPolygon<f64>> for CountryGeometry {
    fn from(mp: MultiPolygon<f64>) -> Self {
        CountryGeometry::MultiPolygon(mp)
    }
}

impl CountryGeometry {
    /// Constituent polygons, one for the `Polygon` variant.
    pub fn polygons(&self) -> &[Polygon<f64>] {
        match self {
            CountryGeometry::Polygon(polygon) => std::slice::from_ref(polygon),
            CountryGeometry::MultiPolygon(mp) => &mp.0,
        }
    }

    /// Distinct outer-ring vertices of every constituent polygon, in order.
    pub fn outer_vertices(&self) -> impl Iterator<Item = &Coord<f64>> {
        self.polygons()
            .iter()
            .flat_map(|polygon| ring_vertices(&polygon.exterior().0).iter())
    }

    pub fn vertex_count(&self) -> usize {
        self.polygons()
            .iter()
            .map(|polygon| ring_vertices(&polygon.exterior().0).len())
            .sum()
    }

    /// Bounds of the outer rings.
    pub fn bbox(&self) -> Option<Rect<f64>> {
        match self {
            CountryGeometry::Polygon(polygon) => polygon.bounding_rect(),
            CountryGeometry::MultiPolygon(mp) => mp.bounding_rect(),
        }
    }

    /// Drop polygons whose outer ring is degenerate. Returns `None` when no
    /// usable polygon remains.
    pub fn without_degenerate_rings(self) -> Option<Self> {
        match self {
            CountryGeometry::Polygon(polygon) => {
                is_valid_ring(&polygon.exterior().0).then_some(CountryGeometry::Polygon(polygon))
            }
            CountryGeometry::MultiPolygon(mp) => {
                let kept: Vec<Polygon<f64>> = mp
                    .0
                    .into_iter()
                    .filter(|polygon| is_valid_ring(&polygon.exterior().0))
                    .collect();
                if kept.is_empty() {
                    None
                } else {
                    Some(CountryGeometry::MultiPolygon(MultiPolygon::new(kept)))
                }
            }
        }
    }
}

/// A named country boundary.
#[derive(Debug, Clone, PartialEq)]
pub struct Country {
    pub name: String,
    pub geometry: CountryGeometry,
}

impl Country {
    pub fn new(name: impl Into<String>, geometry: impl Into<CountryGeometry>) -> Self {
        Self {
            name: name.into(),
            geometry: geometry.into(),
        }
    }

    pub fn contains(&self, p: Coord<f64>) -> bool {
        point_in_geometry(p, &self.geometry)
    }
}

/// Validated, read-only country collection with its spatial index.
///
/// Built once per session by the caller and shared by reference (or `Arc`)
/// with every resolution. Collection order decides which country wins where
/// boundaries overlap, and the order of detection results.
#[derive(Debug)]
pub struct CountrySet {
    countries: Vec<Country>,
    index: CountryIndex,
}

impl CountrySet {
    /// Validate and index a country collection.
    ///
    /// Degenerate polygons are dropped; a country left without any usable
    /// ring, or repeating an earlier name, is skipped with a warning.
    pub fn build(countries: impl IntoIterator<Item = Country>) -> Self {
        let mut seen: HashSet<String> = HashSet::new();
        let mut kept = Vec::new();
        let mut skipped = 0usize;

        for country in countries {
            let Country { name, geometry } = country;

            let Some(geometry) = geometry.without_degenerate_rings() else {
                warn!("Skipping country '{}': no ring with at least 3 vertices", name);
                skipped += 1;
                continue;
            };

            if !seen.insert(name.clone()) {
                warn!("Skipping duplicate country '{}'", name);
                skipped += 1;
                continue;
            }

            kept.push(Country { name, geometry });
        }

        info!(
            "Loaded {} countries ({} skipped)",
            kept.len(),
            skipped
        );

        let index = CountryIndex::build(&kept);
        Self {
            countries: kept,
            index,
        }
    }

    pub fn len(&self) -> usize {
        self.countries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }

    pub fn countries(&self) -> &[Country] {
        &self.countries
    }

    pub fn get(&self, position: usize) -> Option<&Country> {
        self.countries.get(position)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.countries.iter().map(|c| c.name.as_str())
    }

    /// Position of the first country, in collection order, containing `p`.
    pub fn position_at(&self, p: Coord<f64>) -> Option<usize> {
        self.index
            .candidates(p)
            .into_iter()
            .find(|&position| self.countries[position].contains(p))
    }

    /// First country, in collection order, containing `p`.
    pub fn country_at(&self, p: Coord<f64>) -> Option<&Country> {
        self.position_at(p).map(|position| &self.countries[position])
    }
}
