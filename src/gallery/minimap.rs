//! Mini-Map Lifecycle
//!
//! Per-card preview maps are built lazily: only once the card's container
//! reports a non-zero size, and only once per field id while mounted.

use std::collections::HashMap;

use leptos_leaflet::{ElementSize, LatLng};
use serde_json::Value;

use crate::geojson::{geometry_bounds, Bounds};
use crate::models::FieldId;

pub const WORLD_CENTER: LatLng = LatLng(0.0, 0.0);
pub const WORLD_ZOOM: f64 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MiniMapState {
    #[default]
    Unmounted,
    /// Container exists but has no size yet
    Pending,
    Initialized,
}

/// What a card should do after a size report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MiniMapAction {
    /// Build the map now
    Build,
    /// Map exists; recompute its size
    Refresh,
    /// Nothing to do yet
    Wait,
}

/// Lifecycle of every card's preview map, keyed by field id
#[derive(Debug, Clone, Default)]
pub struct MiniMapRegistry {
    states: HashMap<FieldId, MiniMapState>,
}

impl MiniMapRegistry {
    pub fn state(&self, id: FieldId) -> MiniMapState {
        self.states.get(&id).copied().unwrap_or_default()
    }

    /// Container for `id` exists; a mounted or built map is left alone
    pub fn mount(&mut self, id: FieldId) {
        self.states.entry(id).or_insert(MiniMapState::Pending);
    }

    /// React to a size measurement of `id`'s container.
    ///
    /// Returns `Build` at most once per mount: the id is marked Initialized
    /// before the caller builds.
    pub fn on_size(&mut self, id: FieldId, size: ElementSize) -> MiniMapAction {
        let state = self.states.entry(id).or_insert(MiniMapState::Pending);
        match (*state, size.is_empty()) {
            (_, true) => MiniMapAction::Wait,
            (MiniMapState::Initialized, false) => MiniMapAction::Refresh,
            (_, false) => {
                *state = MiniMapState::Initialized;
                MiniMapAction::Build
            }
        }
    }

    /// Building failed; the next size report may try again
    pub fn build_failed(&mut self, id: FieldId) {
        if let Some(state) = self.states.get_mut(&id) {
            *state = MiniMapState::Pending;
        }
    }

    /// Container is gone; its map must already be released
    pub fn unmount(&mut self, id: FieldId) {
        self.states.remove(&id);
    }
}

/// Initial view of a preview map
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PreviewView {
    Fit(Bounds),
    World,
}

impl PreviewView {
    pub fn for_geojson(geojson: &Value) -> Self {
        match geometry_bounds(geojson) {
            Some(bounds) => PreviewView::Fit(bounds),
            None => PreviewView::World,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const SIZED: ElementSize = ElementSize { width: 300.0, height: 150.0 };
    const COLLAPSED: ElementSize = ElementSize { width: 0.0, height: 0.0 };

    #[test]
    fn test_collapsed_container_stays_pending() {
        let mut registry = MiniMapRegistry::default();
        registry.mount(1);

        assert_eq!(registry.on_size(1, COLLAPSED), MiniMapAction::Wait);
        assert_eq!(registry.state(1), MiniMapState::Pending);
    }

    #[test]
    fn test_built_at_most_once_per_mount() {
        let mut registry = MiniMapRegistry::default();
        registry.mount(1);

        let builds = (0..5)
            .map(|_| registry.on_size(1, SIZED))
            .filter(|action| *action == MiniMapAction::Build)
            .count();

        assert_eq!(builds, 1);
        assert_eq!(registry.state(1), MiniMapState::Initialized);
    }

    #[test]
    fn test_remount_does_not_reset_initialized() {
        let mut registry = MiniMapRegistry::default();
        registry.mount(1);
        registry.on_size(1, SIZED);
        registry.mount(1);

        assert_eq!(registry.on_size(1, SIZED), MiniMapAction::Refresh);
    }

    #[test]
    fn test_unmount_allows_fresh_build() {
        let mut registry = MiniMapRegistry::default();
        registry.mount(1);
        registry.on_size(1, SIZED);
        registry.unmount(1);

        assert_eq!(registry.state(1), MiniMapState::Unmounted);
        registry.mount(1);
        assert_eq!(registry.on_size(1, SIZED), MiniMapAction::Build);
    }

    #[test]
    fn test_failed_build_retries() {
        let mut registry = MiniMapRegistry::default();
        registry.mount(2);
        assert_eq!(registry.on_size(2, SIZED), MiniMapAction::Build);
        registry.build_failed(2);

        assert_eq!(registry.on_size(2, SIZED), MiniMapAction::Build);
    }

    #[test]
    fn test_cards_are_independent() {
        let mut registry = MiniMapRegistry::default();
        registry.mount(1);
        registry.mount(2);
        registry.on_size(1, SIZED);

        assert_eq!(registry.state(2), MiniMapState::Pending);
        assert_eq!(registry.on_size(2, SIZED), MiniMapAction::Build);
    }

    #[test]
    fn test_preview_view() {
        let feature = json!({
            "type": "Feature",
            "geometry": {"type": "Polygon", "coordinates": [[[24.0, 45.0], [24.2, 45.0], [24.2, 45.3], [24.0, 45.0]]]}
        });
        assert!(matches!(PreviewView::for_geojson(&feature), PreviewView::Fit(b) if b.north == 45.3 && b.east == 24.2));
        assert_eq!(PreviewView::for_geojson(&Value::Null), PreviewView::World);
        assert_eq!(PreviewView::for_geojson(&json!({"type": "Feature", "geometry": {"type": "Polygon", "coordinates": [[]]}})), PreviewView::World);
    }
}
