//! Field Gallery Workflows
//!
//! Everything the gallery screen does, minus the rendering.

mod deletion;
mod labels;
mod loader;
mod minimap;
mod preview;

pub use deletion::{delete_field, DeletePrompt, DeletionOutcome};
#[cfg(test)]
pub use deletion::DELETED;
pub use labels::{attach_labels, resolve_place_labels};
pub use loader::load_fields;
pub use minimap::{MiniMapAction, MiniMapRegistry};
pub use preview::PreviewMap;
