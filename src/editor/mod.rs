//! Field Editor
//!
//! Drawing a new field and sending it to the backend.

mod area;
mod lifecycle;
mod map;
mod submission;

pub use lifecycle::{MapHandle, MapSlot};
pub use map::EditorMap;
pub use submission::{name_after_save, submit_draft, DrawingLayer, FieldDraft};
