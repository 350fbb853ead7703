//! User-drawn inputs: shapes and lines.

use geo::Coord;
use serde::{Deserialize, Serialize};

use super::lon_lat;
use crate::error::ShapeError;
use crate::pip::geometry::{ring_vertices, MIN_RING_VERTICES};

/// A shape drawn on the map, in `[lon, lat]` degrees.
///
/// Serialized with an internal `type` tag:
/// `{"type": "circle", "center": [lon, lat], "radius_km": 50.0}` or
/// `{"type": "polygon", "vertices": [[lon, lat], ...]}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Shape {
    Circle {
        #[serde(with = "lon_lat")]
        center: Coord<f64>,
        radius_km: f64,
    },
    Polygon {
        #[serde(with = "lon_lat::seq")]
        vertices: Vec<Coord<f64>>,
    },
}

impl Shape {
    pub fn circle(center: Coord<f64>, radius_km: f64) -> Self {
        Shape::Circle { center, radius_km }
    }

    pub fn polygon(vertices: Vec<Coord<f64>>) -> Self {
        Shape::Polygon { vertices }
    }

    /// Check the minimal validity the resolver needs.
    pub fn validate(&self) -> Result<(), ShapeError> {
        match self {
            Shape::Circle { center, radius_km } => {
                if !is_finite(center) {
                    return Err(ShapeError::NonFiniteCoordinate);
                }
                // NaN fails this comparison too
                if !(*radius_km > 0.0 && radius_km.is_finite()) {
                    return Err(ShapeError::NonPositiveRadius(*radius_km));
                }
                Ok(())
            }
            Shape::Polygon { vertices } => {
                // A closing vertex equal to the first does not count
                let distinct = ring_vertices(vertices).len();
                if distinct < MIN_RING_VERTICES {
                    return Err(ShapeError::TooFewVertices(distinct));
                }
                if !vertices.iter().all(is_finite) {
                    return Err(ShapeError::NonFiniteCoordinate);
                }
                Ok(())
            }
        }
    }
}

fn is_finite(coord: &Coord<f64>) -> bool {
    coord.x.is_finite() && coord.y.is_finite()
}

/// A drawn line. Only its first and last points are resolved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Line {
    #[serde(with = "lon_lat::seq")]
    pub points: Vec<Coord<f64>>,
}

impl Line {
    pub fn new(points: Vec<Coord<f64>>) -> Self {
        Self { points }
    }

    /// First and last point, or `None` when the line has fewer than two.
    pub fn endpoints(&self) -> Option<(Coord<f64>, Coord<f64>)> {
        match self.points.as_slice() {
            [first, .., last] => Some((*first, *last)),
            _ => None,
        }
    }
}

/// Countries containing a line's endpoints. `None` means open ocean or
/// unmapped territory.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineEndpoints {
    pub from: Option<String>,
    pub to: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(x: f64, y: f64) -> Coord<f64> {
        Coord { x, y }
    }

    #[test]
    fn test_circle_validation() {
        assert!(Shape::circle(c(5.0, 5.0), 50.0).validate().is_ok());
        assert_eq!(
            Shape::circle(c(5.0, 5.0), 0.0).validate(),
            Err(ShapeError::NonPositiveRadius(0.0))
        );
        assert!(Shape::circle(c(5.0, 5.0), -1.0).validate().is_err());
        assert!(Shape::circle(c(5.0, 5.0), f64::NAN).validate().is_err());
        assert!(Shape::circle(c(5.0, 5.0), f64::INFINITY).validate().is_err());
        assert_eq!(
            Shape::circle(c(f64::NAN, 5.0), 10.0).validate(),
            Err(ShapeError::NonFiniteCoordinate)
        );
    }

    #[test]
    fn test_polygon_validation() {
        let triangle = vec![c(0.0, 0.0), c(1.0, 0.0), c(0.0, 1.0)];
        assert!(Shape::polygon(triangle).validate().is_ok());
        assert_eq!(
            Shape::polygon(vec![c(0.0, 0.0), c(1.0, 0.0)]).validate(),
            Err(ShapeError::TooFewVertices(2))
        );
        assert_eq!(
            Shape::polygon(vec![]).validate(),
            Err(ShapeError::TooFewVertices(0))
        );
        let bad = vec![c(0.0, 0.0), c(f64::INFINITY, 0.0), c(0.0, 1.0)];
        assert_eq!(
            Shape::polygon(bad).validate(),
            Err(ShapeError::NonFiniteCoordinate)
        );
    }

    #[test]
    fn test_closed_two_point_polygon_is_invalid() {
        let closed = vec![c(5.0, 5.0), c(6.0, 6.0), c(5.0, 5.0)];
        assert_eq!(
            Shape::polygon(closed).validate(),
            Err(ShapeError::TooFewVertices(2))
        );

        let closed_triangle = vec![c(0.0, 0.0), c(1.0, 0.0), c(0.0, 1.0), c(0.0, 0.0)];
        assert!(Shape::polygon(closed_triangle).validate().is_ok());
    }

    #[test]
    fn test_line_endpoints() {
        let line = Line::new(vec![c(1.0, 1.0), c(2.0, 2.0), c(3.0, 3.0)]);
        assert_eq!(line.endpoints(), Some((c(1.0, 1.0), c(3.0, 3.0))));
        assert_eq!(Line::new(vec![c(1.0, 1.0)]).endpoints(), None);
        assert_eq!(Line::new(vec![]).endpoints(), None);
    }

    #[test]
    fn test_shape_wire_format() {
        let json = r#"{"type":"circle","center":[5.0,5.0],"radius_km":50.0}"#;
        let shape: Shape = serde_json::from_str(json).unwrap();
        assert_eq!(shape, Shape::circle(c(5.0, 5.0), 50.0));

        let json = r#"{"type":"polygon","vertices":[[0.0,0.0],[1.0,0.0],[0.0,1.0]]}"#;
        let shape: Shape = serde_json::from_str(json).unwrap();
        match shape {
            Shape::Polygon { vertices } => assert_eq!(vertices[1], c(1.0, 0.0)),
            other => panic!("expected polygon, got {:?}", other),
        }
    }

    #[test]
    fn test_endpoints_serialize_null() {
        let endpoints = LineEndpoints {
            from: Some("Westland".to_string()),
            to: None,
        };
        let json = serde_json::to_string(&endpoints).unwrap();
        assert_eq!(json, r#"{"from":"Westland","to":null}"#);
    }
}
