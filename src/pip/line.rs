//! Resolve a line's endpoints to the countries containing them.

use tracing::debug;

use crate::models::{CountrySet, Line, LineEndpoints};

/// Country names at the first and last point of `line`.
///
/// Lines with fewer than two points resolve both ends to `None`.
pub fn detect_countries_for_line(line: &Line, countries: &CountrySet) -> LineEndpoints {
    let Some((from, to)) = line.endpoints() else {
        debug!("Line has {} points, nothing to resolve", line.points.len());
        return LineEndpoints::default();
    };

    let name_at = |p| countries.country_at(p).map(|c| c.name.clone());
    LineEndpoints {
        from: name_at(from),
        to: name_at(to),
    }
}
