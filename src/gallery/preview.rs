//! Preview Map
//!
//! Read-only Leaflet map of one stored field, shown on its gallery card.

use leptos_leaflet::{bounds, create_map, geo_json, js_error_message, lat_lng_js, tile_layer, to_js, LatLng, Map, MapOptions, TileLayerOptions};
use serde_json::Value;
use wasm_bindgen::JsValue;
use web_sys::HtmlElement;

use super::minimap::{PreviewView, WORLD_CENTER, WORLD_ZOOM};
use crate::config::AppConfig;
use crate::editor::MapHandle;

pub struct PreviewMap {
    map: Map,
}

impl PreviewMap {
    pub fn build(container: &HtmlElement, geojson: &Value, config: &AppConfig) -> Result<Self, JsValue> {
        let map = create_map(container, &to_js(&MapOptions::static_preview())?)?;
        let preview = Self { map };
        if let Err(e) = preview.populate(geojson, config) {
            preview.map.remove();
            return Err(e);
        }
        Ok(preview)
    }

    fn populate(&self, geojson: &Value, config: &AppConfig) -> Result<(), JsValue> {
        match PreviewView::for_geojson(geojson) {
            PreviewView::Fit(b) => self.map.fit_bounds(&bounds(LatLng(b.south, b.west), LatLng(b.north, b.east))),
            PreviewView::World => self.map.set_view(&lat_lng_js(WORLD_CENTER), WORLD_ZOOM),
        }

        tile_layer(
            &config.imagery_tiles,
            &to_js(&TileLayerOptions {
                attribution: String::new(),
                max_zoom: Some(config.imagery_max_zoom),
                pane: None,
            })?,
        )
        .add_to(&self.map);

        if !geojson.is_null() {
            // A broken outline still leaves a usable imagery preview
            match geo_json(&to_js(geojson)?) {
                Ok(outline) => outline.add_to(&self.map),
                Err(e) => log::warn!("[Gallery] Outline not drawn: {}", js_error_message(&e)),
            }
        }
        Ok(())
    }
}

impl MapHandle for PreviewMap {
    fn invalidate_size(&self) {
        self.map.invalidate_size(false);
    }

    fn release(self) {
        self.map.remove();
    }
}
