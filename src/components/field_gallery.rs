//! Field Gallery Screen
//!
//! Saved fields as cards. Loads once per activation, then resolves place
//! labels one field at a time.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::components::{ConfirmDialog, FieldCard, MiniMapRegistryHandle, NotificationToast};
use crate::context::use_app_context;
use crate::gallery::{delete_field, load_fields, resolve_place_labels, MiniMapRegistry};
use crate::store::{store_apply_deletion, store_attach_labels, store_set_fields, GalleryState, GalleryStateStoreFields, GalleryStore};

#[component]
pub fn FieldGallery() -> impl IntoView {
    let ctx = use_app_context();
    let store: GalleryStore = Store::new(GalleryState::default());
    provide_context(store);
    provide_context::<MiniMapRegistryHandle>(StoredValue::new(MiniMapRegistry::default()));

    // Load on mount, then label the cards
    let api = ctx.api.clone();
    Effect::new(move |_| {
        let api = api.clone();
        spawn_local(async move {
            let fields = load_fields(api.as_ref()).await;
            store_set_fields(&store, fields.clone());
            if fields.is_empty() {
                return;
            }
            let labels = resolve_place_labels(api.as_ref(), &fields).await;
            store_attach_labels(&store, labels);
        });
    });

    // Changes only on first/last card
    let is_empty = Memo::new(move |_| store.entries().read().is_empty());

    let on_confirm = {
        let api = ctx.api.clone();
        Callback::new(move |_: ()| {
            let Some(id) = store.prompt().write().confirm() else {
                return;
            };
            let api = api.clone();
            spawn_local(async move {
                let outcome = delete_field(api.as_ref(), id).await;
                store_apply_deletion(&store, &outcome);
            });
        })
    };

    let on_cancel = Callback::new(move |_: ()| store.prompt().write().cancel());

    view! {
        <section class="screen gallery">
            <header class="screen-header">
                <h1>"Parcele salvate"</h1>
                <p class="screen-subtitle">"În această secțiune puteți vizualiza și gestiona parcelele salvate"</p>
            </header>

            {move || {
                if !store.loaded().get() {
                    view! { <p class="gallery-status">"Se încarcă..."</p> }.into_any()
                } else if is_empty.get() {
                    view! { <p class="gallery-status">"Nu există parcele salvate momentan."</p> }.into_any()
                } else {
                    view! {
                        <div class="field-grid">
                            <For
                                each=move || store.entries().get()
                                key=|entry| entry.id()
                                children=move |entry| view! { <FieldCard entry=entry /> }
                            />
                        </div>
                    }.into_any()
                }
            }}

            <ConfirmDialog
                open=Signal::derive(move || store.prompt().read().is_open())
                title="Confirmare ștergere"
                message="Sigur doriți să ștergeți această parcelă?"
                confirm_label="Șterge"
                on_confirm=on_confirm
                on_cancel=on_cancel
            />

            <NotificationToast
                notification=Signal::derive(move || store.notification().get())
                on_close=Callback::new(move |_: ()| {
                    if let Some(mut note) = store.notification().try_write() {
                        note.close();
                    }
                })
                hide_after_ms=ctx.config.notification_hide_ms
            />
        </section>
    }
}
