//! Field Area
//!
//! Geodesic area on the WGS84 ellipsoid, reported in hectares.

use std::fmt;

use geo::orient::{Direction, Orient};
use geo::{GeodesicArea, LineString, Polygon};

use crate::geojson::{Feature, Position};
use crate::models::FieldSize;

const SQUARE_METERS_PER_HECTARE: f64 = 10_000.0;

#[derive(Debug, Clone, PartialEq)]
pub enum AreaError {
    NotAPolygon,
    TooFewPositions(usize),
    NonFiniteCoordinate,
}

impl fmt::Display for AreaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AreaError::NotAPolygon => write!(f, "feature is not a polygon"),
            AreaError::TooFewPositions(n) => write!(f, "ring has {} distinct positions, need 3", n),
            AreaError::NonFiniteCoordinate => write!(f, "ring has a non-finite coordinate"),
        }
    }
}

impl std::error::Error for AreaError {}

/// Unsigned geodesic area of a closed or open `(lng, lat)` ring, in m²
pub fn ring_area_m2(ring: &[Position]) -> Result<f64, AreaError> {
    if ring.iter().any(|(lng, lat)| !lng.is_finite() || !lat.is_finite()) {
        return Err(AreaError::NonFiniteCoordinate);
    }
    let open_len = match (ring.first(), ring.last()) {
        (Some(first), Some(last)) if ring.len() > 1 && first == last => ring.len() - 1,
        _ => ring.len(),
    };
    if open_len < 3 {
        return Err(AreaError::TooFewPositions(open_len));
    }

    // Drawn rings keep the click order; the area wants a counter-clockwise exterior
    let polygon = Polygon::new(LineString::from(ring.to_vec()), vec![]).orient(Direction::Default);
    Ok(polygon.geodesic_area_unsigned())
}

/// Area of the feature's outer ring in hectares
pub fn feature_hectares(feature: &Feature) -> Result<f64, AreaError> {
    let ring = feature.outer_ring().ok_or(AreaError::NotAPolygon)?;
    Ok(ring_area_m2(&ring)? / SQUARE_METERS_PER_HECTARE)
}

/// Size to submit; `Unknown` when the area cannot be computed
pub fn field_size(feature: &Feature) -> FieldSize {
    match feature_hectares(feature) {
        Ok(hectares) => FieldSize::Hectares(hectares),
        Err(e) => {
            log::error!("[Editor] Area computation failed: {}", e);
            FieldSize::Unknown
        }
    }
}
