//! Core data models for country resolution.

pub mod country;
pub mod shape;

pub use country::{Country, CountryGeometry, CountrySet, HOLES_IGNORED};
pub use shape::{Line, LineEndpoints, Shape};

/// Serde adapters that write a coordinate as a `[lon, lat]` pair, the order
/// map layers and GeoJSON use.
pub(crate) mod lon_lat {
    use geo::Coord;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S: Serializer>(coord: &Coord<f64>, s: S) -> Result<S::Ok, S::Error> {
        [coord.x, coord.y].serialize(s)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Coord<f64>, D::Error> {
        let [x, y] = <[f64; 2]>::deserialize(d)?;
        Ok(Coord { x, y })
    }

    pub mod seq {
        use geo::Coord;
        use serde::{Deserialize, Deserializer, Serialize, Serializer};

        pub fn serialize<S: Serializer>(coords: &[Coord<f64>], s: S) -> Result<S::Ok, S::Error> {
            let pairs: Vec<[f64; 2]> = coords.iter().map(|c| [c.x, c.y]).collect();
            pairs.serialize(s)
        }

        pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Vec<Coord<f64>>, D::Error> {
            let pairs = Vec::<[f64; 2]>::deserialize(d)?;
            Ok(pairs.into_iter().map(|[x, y]| Coord { x, y }).collect())
        }
    }
}
