//! Place-Label Resolver
//!
//! Turns each field's geometry into "locality, county, country" through the
//! backend's reverse geocoder. Lookups run one after another, in list order,
//! and a failed lookup only affects its own field.

use crate::api::FieldsApi;
use crate::models::{Field, FieldId, GalleryEntry, PlaceLabel, ReverseGeocode};

fn present(part: &Option<String>) -> Option<&str> {
    part.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

/// Label from the parts present in a response (county preferred over state)
pub fn place_label(response: &ReverseGeocode) -> PlaceLabel {
    let parts: Vec<&str> = [
        present(&response.locality),
        present(&response.county).or_else(|| present(&response.state)),
        present(&response.country),
    ]
    .into_iter()
    .flatten()
    .collect();

    if parts.is_empty() {
        PlaceLabel::Unknown
    } else {
        PlaceLabel::Known(parts.join(", "))
    }
}

/// One label per field, same order as `fields`
pub async fn resolve_place_labels<A: FieldsApi + ?Sized>(api: &A, fields: &[Field]) -> Vec<(FieldId, PlaceLabel)> {
    let mut labels = Vec::with_capacity(fields.len());
    for field in fields {
        let label = match api.reverse_geocode(field.id, &field.geometry()).await {
            Ok(response) => place_label(&response),
            Err(e) => {
                log::error!("[Gallery] Reverse geocoding failed for field {}: {}", field.id, e);
                PlaceLabel::Unknown
            }
        };
        labels.push((field.id, label));
    }
    labels
}

/// Attach labels to the entries with the same field id; entries without a label keep theirs
pub fn attach_labels(entries: &mut [GalleryEntry], labels: Vec<(FieldId, PlaceLabel)>) {
    for (id, label) in labels {
        if let Some(entry) = entries.iter_mut().find(|entry| entry.id() == id) {
            entry.place = label;
        }
    }
}
