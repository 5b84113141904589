//! Gallery State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Created per
//! gallery mount; nothing here outlives the screen.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::gallery::{DeletePrompt, DeletionOutcome};
use crate::models::{Field, FieldId, GalleryEntry, PlaceLabel};
use crate::notification::NotificationState;

/// Gallery screen state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct GalleryState {
    /// Cards, in backend order
    pub entries: Vec<GalleryEntry>,
    /// First list request finished (successfully or not)
    pub loaded: bool,
    /// Shared delete confirmation
    pub prompt: DeletePrompt,
    pub notification: NotificationState,
}

/// Type alias for the store
pub type GalleryStore = Store<GalleryState>;

/// Get the gallery store from context
pub fn use_gallery_store() -> GalleryStore {
    expect_context::<GalleryStore>()
}

// ========================
// Store Helper Functions
// ========================
//
// Async results may land after the gallery unmounted and its store was
// disposed; they are dropped then.

/// Replace the cards with freshly loaded fields, labels pending
pub fn store_set_fields(store: &GalleryStore, fields: Vec<Field>) {
    if let Some(mut entries) = store.entries().try_write() {
        *entries = fields.into_iter().map(GalleryEntry::new).collect();
    }
    if let Some(mut loaded) = store.loaded().try_write() {
        *loaded = true;
    }
}

/// Attach resolved labels to the cards with matching ids
pub fn store_attach_labels(store: &GalleryStore, labels: Vec<(FieldId, PlaceLabel)>) {
    if let Some(mut entries) = store.entries().try_write() {
        crate::gallery::attach_labels(&mut entries, labels);
    }
}

/// Show a notification, replacing the current one
pub fn store_notify(store: &GalleryStore, notification: NotificationState) {
    if let Some(mut current) = store.notification().try_write() {
        *current = notification;
    }
}

/// Apply a finished delete to the cards and report it
pub fn store_apply_deletion(store: &GalleryStore, outcome: &DeletionOutcome) {
    let Some(note) = store.entries().try_write().map(|mut entries| outcome.apply(&mut entries)) else {
        log::info!("[Gallery] Delete finished after the gallery closed");
        return;
    };
    store_notify(store, note);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;
    use crate::gallery::DELETED;
    use leptos::reactive::owner::Owner;
    use serde_json::Value;

    fn field(id: FieldId) -> Field {
        Field {
            id,
            name: format!("Field {}", id),
            size: "1.00".to_string(),
            location: "Romania".to_string(),
            geojson: Value::Null,
        }
    }

    fn ids(store: &GalleryStore) -> Vec<FieldId> {
        store.entries().with_untracked(|entries| entries.iter().map(GalleryEntry::id).collect())
    }

    #[test]
    fn test_labels_and_deletion_update_live_store() {
        let owner = Owner::new();
        let store = owner.with(|| Store::new(GalleryState::default()));

        store_set_fields(&store, vec![field(1), field(2)]);
        store_attach_labels(&store, vec![(2, PlaceLabel::Unknown)]);
        store_apply_deletion(&store, &DeletionOutcome::Deleted(1));

        assert!(store.loaded().get_untracked());
        assert_eq!(ids(&store), vec![2]);
        assert_eq!(store.entries().with_untracked(|entries| entries[0].place.clone()), PlaceLabel::Unknown);
        assert_eq!(store.notification().get_untracked(), NotificationState::success(DELETED));
    }

    #[test]
    fn test_late_results_after_unmount_are_dropped() {
        let owner = Owner::new();
        let store = owner.with(|| Store::new(GalleryState::default()));
        store_set_fields(&store, vec![field(1)]);

        owner.cleanup();

        store_attach_labels(&store, vec![(1, PlaceLabel::Unknown)]);
        store_set_fields(&store, vec![field(3)]);
        store_apply_deletion(&store, &DeletionOutcome::Deleted(1));
        store_apply_deletion(&store, &DeletionOutcome::Failed(1, ApiError::Transport("Failed to fetch".to_string())));
        store_notify(&store, NotificationState::error("late"));
    }
}
