//! Spatial index over country bounding boxes.

use geo::Coord;
use rstar::{RTree, RTreeObject, AABB};
use std::fmt;
use tracing::info;

use crate::models::Country;

/// R-tree entry: a country's outer-ring bounds and its position in the
/// owning collection.
#[derive(Debug, Clone)]
struct IndexedCountry {
    position: usize,
    envelope: AABB<[f64; 2]>,
}

impl RTreeObject for IndexedCountry {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        self.envelope
    }
}

/// Bounding-box prefilter for point lookups.
///
/// A point outside a ring's bounding box has an even crossing count, so
/// filtering by box never changes which country a lookup finds.
pub struct CountryIndex {
    tree: RTree<IndexedCountry>,
}

impl fmt::Debug for CountryIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CountryIndex")
            .field("entries", &self.tree.size())
            .finish()
    }
}

impl CountryIndex {
    /// Build the index from a validated country slice.
    pub fn build(countries: &[Country]) -> Self {
        let indexed: Vec<IndexedCountry> = countries
            .iter()
            .enumerate()
            .filter_map(|(position, country)| {
                let rect = country.geometry.bbox()?;
                Some(IndexedCountry {
                    position,
                    envelope: AABB::from_corners(
                        [rect.min().x, rect.min().y],
                        [rect.max().x, rect.max().y],
                    ),
                })
            })
            .collect();

        let tree = RTree::bulk_load(indexed);
        info!("Country index built with {} entries", tree.size());

        Self { tree }
    }

    /// Positions of countries whose bounds contain `p`, in ascending order.
    pub fn candidates(&self, p: Coord<f64>) -> Vec<usize> {
        let query = AABB::from_point([p.x, p.y]);
        let mut positions: Vec<usize> = self
            .tree
            .locate_in_envelope_intersecting(&query)
            .map(|ic| ic.position)
            .collect();
        positions.sort_unstable();
        positions
    }

    pub fn len(&self) -> usize {
        self.tree.size()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.size() == 0
    }
}
