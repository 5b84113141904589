//! Frontend Models
//!
//! Data structures matching backend records.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::geojson::Feature;

/// Backend-assigned field id
pub type FieldId = u32;

/// Field parcel (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub id: FieldId,
    pub name: String,
    /// Hectares as a decimal string, e.g. "1.25"
    #[serde(default, deserialize_with = "lenient_string")]
    pub size: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub location: String,
    /// Polygon feature, kept raw; may be missing or malformed
    #[serde(default)]
    pub geojson: Value,
}

impl Field {
    /// Geometry member of the stored feature (`null` when absent)
    pub fn geometry(&self) -> Value {
        self.geojson.get("geometry").cloned().unwrap_or(Value::Null)
    }
}

/// Accepts strings, numbers and null (Django serializes decimals either way)
fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Null => String::new(),
        other => other.to_string(),
    })
}

/// Area of a new field as submitted
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldSize {
    Hectares(f64),
    Unknown,
}

impl fmt::Display for FieldSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldSize::Hectares(ha) => write!(f, "{:.2}", ha),
            FieldSize::Unknown => write!(f, "Unknown"),
        }
    }
}

impl Serialize for FieldSize {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// POST body for a new field
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewFieldRecord {
    pub name: String,
    pub location: String,
    pub size: FieldSize,
    /// Only the polygon feature, not the whole collection
    pub geojson: Feature,
}

/// Reverse-geocode response; every member is optional
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ReverseGeocode {
    #[serde(default)]
    pub locality: Option<String>,
    #[serde(default)]
    pub county: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Shown when a field's place cannot be resolved
pub const UNKNOWN_LOCATION: &str = "Locatie necunoscuta";

/// Human-readable place of a field, derived client-side
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PlaceLabel {
    #[default]
    Pending,
    Known(String),
    Unknown,
}

impl fmt::Display for PlaceLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlaceLabel::Pending => write!(f, "…"),
            PlaceLabel::Known(label) => write!(f, "{}", label),
            PlaceLabel::Unknown => write!(f, "{}", UNKNOWN_LOCATION),
        }
    }
}

/// Gallery card data: a field with its place label attached by id
#[derive(Debug, Clone, PartialEq)]
pub struct GalleryEntry {
    pub field: Field,
    pub place: PlaceLabel,
}

impl GalleryEntry {
    pub fn new(field: Field) -> Self {
        Self { field, place: PlaceLabel::Pending }
    }

    pub fn id(&self) -> FieldId {
        self.field.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_field_accepts_numeric_and_null_members() {
        let field: Field = serde_json::from_value(json!({
            "id": 7,
            "name": "North plot",
            "size": 12.5,
            "location": null
        }))
        .unwrap();

        assert_eq!(field.size, "12.5");
        assert_eq!(field.location, "");
        assert_eq!(field.geojson, Value::Null);
        assert_eq!(field.geometry(), Value::Null);
    }

    #[test]
    fn test_size_formatting() {
        assert_eq!(FieldSize::Hectares(1.0).to_string(), "1.00");
        assert_eq!(FieldSize::Hectares(12.3456).to_string(), "12.35");
        assert_eq!(FieldSize::Unknown.to_string(), "Unknown");
    }

    #[test]
    fn test_record_serializes_size_as_string() {
        let record = NewFieldRecord {
            name: "Lot 4".to_string(),
            location: "Romania".to_string(),
            size: FieldSize::Hectares(2.5),
            geojson: Feature {
                kind: "Feature".to_string(),
                properties: json!({}),
                geometry: json!({"type": "Polygon", "coordinates": []}),
            },
        };

        let body = serde_json::to_value(&record).unwrap();
        assert_eq!(body["size"], json!("2.50"));
        assert_eq!(body["geojson"]["type"], json!("Feature"));
        assert_eq!(body["location"], json!("Romania"));
    }

    #[test]
    fn test_place_label_display() {
        assert_eq!(PlaceLabel::Unknown.to_string(), UNKNOWN_LOCATION);
        assert_eq!(PlaceLabel::Known("Cluj".to_string()).to_string(), "Cluj");
    }
}
