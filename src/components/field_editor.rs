//! Field Editor Screen
//!
//! Name input, save/clear actions and the drawing map.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_leaflet::{js_error_message, use_size_observer, FeatureGroup};

use crate::components::NotificationToast;
use crate::context::use_app_context;
use crate::editor::{name_after_save, submit_draft, DrawingLayer, EditorMap, FieldDraft, MapSlot};
use crate::notification::NotificationState;

const MAP_INIT_FAILED: &str = "Error initializing map. Please refresh the page.";

#[component]
pub fn FieldEditor() -> impl IntoView {
    let ctx = use_app_context();
    let (name, set_name) = signal(String::new());
    let (notification, set_notification) = signal(NotificationState::default());
    let (saving, set_saving) = signal(false);

    let container = NodeRef::<leptos::html::Div>::new();
    let slot = StoredValue::new_local(MapSlot::<EditorMap>::new());

    // Build the map once the container is in the DOM
    let config = ctx.config.clone();
    Effect::new(move |_| {
        let Some(element) = container.get() else {
            return;
        };
        if !slot.try_update_value(|s| s.begin()).unwrap_or(false) {
            return;
        }
        let built = EditorMap::build(&element, &config);
        if let Some(e) = slot.try_update_value(|s| s.finish(built)).flatten() {
            log::error!("[Editor] Map initialization failed: {}", js_error_message(&e));
            set_notification.set(NotificationState::error(MAP_INIT_FAILED));
        }
    });

    // Settled layout and later container changes
    use_size_observer(container, move |size| {
        if !size.is_empty() {
            slot.with_value(|s| s.invalidate_size());
        }
    });

    let resize = window_event_listener(leptos::ev::resize, move |_| {
        slot.try_with_value(|s| s.invalidate_size());
    });

    on_cleanup(move || {
        resize.remove();
        slot.try_update_value(|s| s.teardown());
    });

    let drawing = move || -> Option<FeatureGroup> { slot.with_value(|s| s.map().map(EditorMap::drawn_items)) };

    let on_save = {
        let ctx = ctx.clone();
        move |_| {
            if saving.get_untracked() {
                return;
            }
            let mut draft = FieldDraft::new(name.get_untracked(), drawing());
            let api = ctx.api.clone();
            let location = ctx.config.field_location.clone();
            set_saving.set(true);
            spawn_local(async move {
                let outcome = submit_draft(api.as_ref(), &draft, &location).await;
                set_notification.set(draft.settle(&outcome));
                // A failed save keeps whatever was typed meanwhile
                if let Some(name) = name_after_save(&outcome) {
                    set_name.set(name);
                }
                set_saving.set(false);
            });
        }
    };

    let on_clear = move |_| {
        drawing().clear();
        log::info!("[Editor] Drawing cleared");
    };

    view! {
        <section class="screen editor">
            <header class="screen-header">
                <h1>"Adăugați o parcelă nouă"</h1>
                <p class="screen-subtitle">
                    "În această secțiune puteți salva parcele noi, pe care le puteți vizualiza ulterior în pagina \"Parcele salvate\""
                </p>
            </header>

            <div class="editor-layout">
                <div class="editor-panel">
                    <h2>"Pentru a salva o parcelă, folosiți-vă de instrumentul de desenat"</h2>
                    <input
                        type="text"
                        class="field-name-input"
                        placeholder="Nume câmp"
                        prop:value=move || name.get()
                        on:input=move |ev| set_name.set(event_target_value(&ev))
                    />
                    <div class="editor-actions">
                        <button class="save-btn" disabled=move || saving.get() on:click=on_save>
                            "Salvează"
                        </button>
                        <button class="clear-btn" on:click=on_clear>
                            "Anulează"
                        </button>
                    </div>
                </div>

                <div class="editor-map" node_ref=container></div>
            </div>

            <NotificationToast
                notification=notification
                on_close=Callback::new(move |_: ()| set_notification.update(|n| n.close()))
                hide_after_ms=ctx.config.notification_hide_ms
            />
        </section>
    }
}
