//! Field Card Component
//!
//! One saved field: preview map, name, place, size and delete action.

use leptos::prelude::*;

use crate::components::MiniMap;
use crate::models::{FieldId, GalleryEntry, PlaceLabel};
use crate::store::{use_gallery_store, GalleryStateStoreFields};

#[component]
pub fn FieldCard(entry: GalleryEntry) -> impl IntoView {
    let store = use_gallery_store();
    let id: FieldId = entry.id();
    let field = entry.field;

    // Labels arrive after the card is rendered
    let place = move || {
        store
            .entries()
            .read()
            .iter()
            .find(|e| e.id() == id)
            .map(|e| e.place.clone())
            .unwrap_or(PlaceLabel::Pending)
            .to_string()
    };

    view! {
        <div class="field-card">
            <MiniMap field_id=id geojson=field.geojson.clone() />
            <div class="field-card-body">
                <h3 class="field-name">{field.name.clone()}</h3>
                <p class="field-meta">"Locație: " {place}</p>
                <p class="field-meta">"Dimensiune: " {field.size.clone()} " ha"</p>
                <button
                    class="delete-btn"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        store.prompt().write().request(id);
                    }
                >
                    "Șterge"
                </button>
            </div>
        </div>
    }
}
