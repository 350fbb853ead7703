//! Synthetic world used across unit tests.
//!
//! ```text
//!  lat
//!  10 +---------+---------+
//!     | Westland| Eastland|          Archipelago: two 2x2 islands
//!   0 +---------+---------+          at lon 30..32 and 34..36, lat 0..2
//!     0        10        20   lon
//! ```
//!
//! Giantia is a 40x40 degree square with only four vertices, far to the
//! west (lon -60..-20, lat -30..10).

use geo::{Coord, LineString, MultiPolygon, Polygon};

use crate::models::{Country, CountrySet};

pub const VALID_NAMES: [&str; 4] = ["Westland", "Eastland", "Archipelago", "Giantia"];
pub const ARCHIPELAGO_POSITION: usize = 2;

/// Open water, outside every fixture country.
pub const OCEAN: Coord<f64> = Coord { x: -100.0, y: 50.0 };

pub fn rect(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Polygon<f64> {
    Polygon::new(
        LineString::from(vec![
            (min_x, min_y),
            (max_x, min_y),
            (max_x, max_y),
            (min_x, max_y),
        ]),
        vec![],
    )
}

/// The well-formed countries, in collection order.
pub fn countries() -> Vec<Country> {
    vec![
        Country::new("Westland", rect(0.0, 0.0, 10.0, 10.0)),
        Country::new("Eastland", rect(10.0, 0.0, 20.0, 10.0)),
        Country::new(
            "Archipelago",
            MultiPolygon::new(vec![rect(30.0, 0.0, 32.0, 2.0), rect(34.0, 0.0, 36.0, 2.0)]),
        ),
        Country::new("Giantia", rect(-60.0, -30.0, -20.0, 10.0)),
    ]
}

/// Well-formed countries followed by records the loader must skip.
pub fn raw_countries() -> Vec<Country> {
    let mut all = countries();
    all.push(Country::new(
        "Brokenland",
        Polygon::new(LineString::from(vec![(50.0, 50.0), (51.0, 51.0)]), vec![]),
    ));
    all.push(Country::new("Westland", rect(80.0, 0.0, 90.0, 10.0)));
    all
}

pub fn world() -> CountrySet {
    CountrySet::build(raw_countries())
}
