//! App Configuration
//!
//! Backend location, tile services and map defaults.

use leptos_leaflet::LatLng;

const DEFAULT_API_BASE: &str = "http://localhost:8000";

pub const IMAGERY_TILES: &str =
    "https://server.arcgisonline.com/ArcGIS/rest/services/World_Imagery/MapServer/tile/{z}/{y}/{x}";
pub const LABEL_TILES: &str =
    "https://services.arcgisonline.com/ArcGIS/rest/services/Reference/World_Boundaries_and_Places/MapServer/tile/{z}/{y}/{x}";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Origin of the REST backend, without trailing slash
    pub api_base: String,
    pub imagery_tiles: String,
    pub label_tiles: String,
    pub imagery_max_zoom: u8,
    /// Editor map start view
    pub editor_center: LatLng,
    pub editor_zoom: f64,
    /// Zoom applied when a search result is picked
    pub search_zoom: f64,
    /// Location label stored with every new field
    pub field_location: String,
    pub notification_hide_ms: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            imagery_tiles: IMAGERY_TILES.to_string(),
            label_tiles: LABEL_TILES.to_string(),
            imagery_max_zoom: 19,
            editor_center: LatLng(45.9432, 24.9668),
            editor_zoom: 6.0,
            search_zoom: 15.0,
            field_location: "Romania".to_string(),
            notification_hide_ms: 6000,
        }
    }
}

impl AppConfig {
    /// Defaults, with `FIELD_ATLAS_API_BASE` (read at build time) overriding the backend origin
    pub fn from_env() -> Self {
        Self::default().with_api_base(option_env!("FIELD_ATLAS_API_BASE"))
    }

    fn with_api_base(mut self, base: Option<&str>) -> Self {
        if let Some(base) = base.map(str::trim).filter(|b| !b.is_empty()) {
            self.api_base = base.trim_end_matches('/').to_string();
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.api_base, "http://localhost:8000");
        assert_eq!(config.editor_center, LatLng(45.9432, 24.9668));
        assert_eq!(config.field_location, "Romania");
    }

    #[test]
    fn test_api_base_override_strips_trailing_slash() {
        let config = AppConfig::default().with_api_base(Some("https://farm.example.org/"));
        assert_eq!(config.api_base, "https://farm.example.org");
    }

    #[test]
    fn test_blank_override_is_ignored() {
        let config = AppConfig::default().with_api_base(Some("  "));
        assert_eq!(config.api_base, DEFAULT_API_BASE);
    }
}
