//! GeoJSON Helpers
//!
//! Just enough GeoJSON for field outlines. Geometries stay as raw JSON so
//! whatever the drawing layer or the backend produced is passed on untouched;
//! typed views are taken only where the app needs coordinates.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single GeoJSON feature, geometry kept verbatim
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub properties: Value,
    pub geometry: Value,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeatureCollection {
    #[serde(default)]
    pub features: Vec<Feature>,
}

impl FeatureCollection {
    pub fn first(&self) -> Option<&Feature> {
        self.features.first()
    }
}

/// `(lng, lat)` in degrees, GeoJSON axis order
pub type Position = (f64, f64);

impl Feature {
    /// Outer ring of a Polygon geometry; `None` for any other geometry type
    pub fn outer_ring(&self) -> Option<Vec<Position>> {
        if self.geometry.get("type")?.as_str()? != "Polygon" {
            return None;
        }
        let ring = self.geometry.get("coordinates")?.as_array()?.first()?.as_array()?;
        ring.iter().map(position).collect()
    }
}

fn position(value: &Value) -> Option<Position> {
    let coords = value.as_array()?;
    match (coords.first()?.as_f64(), coords.get(1)?.as_f64()) {
        (Some(lng), Some(lat)) => Some((lng, lat)),
        _ => None,
    }
}

/// Lat/lng bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub south: f64,
    pub west: f64,
    pub north: f64,
    pub east: f64,
}

impl Bounds {
    fn around(lng: f64, lat: f64) -> Self {
        Self { south: lat, west: lng, north: lat, east: lng }
    }

    fn extend(&mut self, lng: f64, lat: f64) {
        self.south = self.south.min(lat);
        self.north = self.north.max(lat);
        self.west = self.west.min(lng);
        self.east = self.east.max(lng);
    }
}

/// Bounds of every position in a Feature or bare geometry.
///
/// `None` when there is no usable position at all, which callers treat as
/// "fall back to the world view".
pub fn geometry_bounds(value: &Value) -> Option<Bounds> {
    let geometry = value.get("geometry").unwrap_or(value);
    let mut bounds = None;
    collect_positions(geometry.get("coordinates")?, &mut bounds);
    bounds
}

fn collect_positions(value: &Value, bounds: &mut Option<Bounds>) {
    let Some(items) = value.as_array() else { return };

    if let Some((lng, lat)) = position(value) {
        if lng.is_finite() && lat.is_finite() {
            match bounds {
                Some(b) => b.extend(lng, lat),
                None => *bounds = Some(Bounds::around(lng, lat)),
            }
        }
        return;
    }
    for item in items {
        collect_positions(item, bounds);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn square_feature() -> Value {
        json!({
            "type": "Feature",
            "properties": {},
            "geometry": {
                "type": "Polygon",
                "coordinates": [[[24.0, 45.0], [24.1, 45.0], [24.1, 45.1], [24.0, 45.1], [24.0, 45.0]]]
            }
        })
    }

    #[test]
    fn test_bounds_of_feature() {
        let bounds = geometry_bounds(&square_feature()).unwrap();
        assert_eq!(bounds, Bounds { south: 45.0, west: 24.0, north: 45.1, east: 24.1 });
    }

    #[test]
    fn test_bounds_of_bare_multipolygon() {
        let geometry = json!({
            "type": "MultiPolygon",
            "coordinates": [
                [[[1.0, 1.0], [2.0, 1.0], [2.0, 2.0], [1.0, 1.0]]],
                [[[-3.0, -4.0], [-2.0, -4.0], [-2.0, -3.0], [-3.0, -4.0]]]
            ]
        });
        let bounds = geometry_bounds(&geometry).unwrap();
        assert_eq!(bounds, Bounds { south: -4.0, west: -3.0, north: 2.0, east: 2.0 });
    }

    #[test]
    fn test_no_bounds_without_coordinates() {
        assert!(geometry_bounds(&Value::Null).is_none());
        assert!(geometry_bounds(&json!({"type": "Feature", "geometry": null})).is_none());
        assert!(geometry_bounds(&json!({"type": "Polygon", "coordinates": []})).is_none());
        assert!(geometry_bounds(&json!("not geojson")).is_none());
    }

    #[test]
    fn test_outer_ring() {
        let feature: Feature = serde_json::from_value(square_feature()).unwrap();
        let ring = feature.outer_ring().unwrap();
        assert_eq!(ring.len(), 5);
        assert_eq!(ring[1], (24.1, 45.0));
    }

    #[test]
    fn test_outer_ring_rejects_other_geometries() {
        let feature: Feature = serde_json::from_value(json!({
            "type": "Feature",
            "geometry": {"type": "Point", "coordinates": [24.0, 45.0]}
        }))
        .unwrap();
        assert!(feature.outer_ring().is_none());
    }
}
