//! Mini Map Component
//!
//! Read-only preview of one field, built once its container has a size.

use leptos::prelude::*;
use leptos_leaflet::{js_error_message, use_size_observer};
use serde_json::Value;

use crate::context::use_app_context;
use crate::editor::MapHandle;
use crate::gallery::{MiniMapAction, MiniMapRegistry, PreviewMap};
use crate::models::FieldId;

/// Preview-map lifecycle of every card on the gallery
pub type MiniMapRegistryHandle = StoredValue<MiniMapRegistry>;

#[component]
pub fn MiniMap(field_id: FieldId, geojson: Value) -> impl IntoView {
    let ctx = use_app_context();
    let registry = expect_context::<MiniMapRegistryHandle>();
    let container = NodeRef::<leptos::html::Div>::new();
    let preview = StoredValue::new_local(None::<PreviewMap>);

    registry.update_value(|r| r.mount(field_id));

    use_size_observer(container, move |size| {
        let action = registry
            .try_update_value(|r| r.on_size(field_id, size))
            .unwrap_or(MiniMapAction::Wait);
        match action {
            MiniMapAction::Build => {
                let Some(element) = container.get_untracked() else {
                    registry.update_value(|r| r.build_failed(field_id));
                    return;
                };
                preview.update_value(|current| {
                    if let Some(old) = current.take() {
                        old.release();
                    }
                });
                match PreviewMap::build(&element, &geojson, &ctx.config) {
                    Ok(map) => preview.set_value(Some(map)),
                    Err(e) => {
                        log::error!("[Gallery] Mini map for field {} failed: {}", field_id, js_error_message(&e));
                        registry.update_value(|r| r.build_failed(field_id));
                    }
                }
            }
            MiniMapAction::Refresh => preview.with_value(|current| {
                if let Some(map) = current {
                    map.invalidate_size();
                }
            }),
            MiniMapAction::Wait => {}
        }
    });

    on_cleanup(move || {
        preview.try_update_value(|current| {
            if let Some(map) = current.take() {
                map.release();
            }
        });
        registry.try_update_value(|r| r.unmount(field_id));
    });

    view! {
        <div class="mini-map" node_ref=container></div>
    }
}
