//! UI Components
//!
//! Leptos components for the two screens.

mod confirm_dialog;
mod field_card;
mod field_editor;
mod field_gallery;
mod mini_map;
mod notification_toast;
mod screen_tabs;

pub use confirm_dialog::ConfirmDialog;
pub use field_card::FieldCard;
pub use field_editor::FieldEditor;
pub use field_gallery::FieldGallery;
pub use mini_map::{MiniMap, MiniMapRegistryHandle};
pub use notification_toast::NotificationToast;
pub use screen_tabs::{Screen, ScreenTabs};
