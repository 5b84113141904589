//! Editor Map
//!
//! The interactive Leaflet map of the editor screen: imagery, search box,
//! zoom control and the polygon draw toolbar feeding one drawn-items group.

use leptos_leaflet::{
    draw_control_options, event_handler, event_path, tile_layer, to_js, zoom_control, Control,
    ControlPosition, DrawControl, DrawEditOptions, DrawShapes, EventHandler, FeatureGroup, GeocoderOptions, Layer,
    Map, MapOptions, PolyEditOptions, TileLayerOptions, ZoomControlOptions, DRAW_CREATED, MARK_GEOCODE,
};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use crate::config::AppConfig;
use crate::editor::lifecycle::MapHandle;
use crate::editor::submission::DrawingLayer;
use crate::geojson::FeatureCollection;

const SEARCH_PLACEHOLDER: &str = "Introduceți o adresă sau un oraș..";

/// Live editor map plus the listeners bound to it
pub struct EditorMap {
    map: Map,
    drawn: FeatureGroup,
    _handlers: Vec<EventHandler>,
}

impl EditorMap {
    /// Build the map inside `container`; any Leaflet exception is returned
    pub fn build(container: &HtmlElement, config: &AppConfig) -> Result<Self, JsValue> {
        let options = to_js(&MapOptions::interactive(config.editor_center, config.editor_zoom))?;
        let map = leptos_leaflet::create_map(container, &options)?;

        let built = Self::decorate(&map, config);
        if built.is_err() {
            // Half-built maps would keep the container bound
            map.remove();
        }
        built
    }

    fn decorate(map: &Map, config: &AppConfig) -> Result<Self, JsValue> {
        zoom_control(&to_js(&ZoomControlOptions { position: ControlPosition::TopRight })?).add_to(map);

        let search = Control::geocoder(&to_js(&GeocoderOptions {
            placeholder: SEARCH_PLACEHOLDER.to_string(),
            collapsed: false,
            position: ControlPosition::TopLeft,
            text: "Address Search".to_string(),
            default_mark_geocode: false,
        })?)?;
        let on_result = {
            let map = map.clone();
            let zoom = config.search_zoom;
            event_handler(move |event| {
                if let Some(center) = event_path(&event, &["geocode", "center"]) {
                    map.set_view(&center, zoom);
                }
            })
        };
        search.on(MARK_GEOCODE, on_result.as_ref().unchecked_ref());
        search.add_to(map);

        tile_layer(
            &config.imagery_tiles,
            &to_js(&TileLayerOptions {
                attribution: "Tiles © Esri".to_string(),
                max_zoom: Some(config.imagery_max_zoom),
                pane: None,
            })?,
        )
        .add_to(map);
        tile_layer(
            &config.label_tiles,
            &to_js(&TileLayerOptions {
                attribution: "Labels © Esri".to_string(),
                max_zoom: None,
                pane: Some("overlayPane".to_string()),
            })?,
        )
        .add_to(map);

        let drawn = FeatureGroup::new();
        drawn.add_to(map);

        let edit = DrawEditOptions { poly: PolyEditOptions { allow_intersection: false } };
        let toolbar = DrawControl::new(&draw_control_options(&DrawShapes::polygon_only(), &edit, &drawn)?)?;
        map.add_control(&toolbar);

        let on_created = {
            let drawn = drawn.clone();
            event_handler(move |event| {
                if let Some(layer) = event_path(&event, &["layer"]) {
                    drawn.add_layer(layer.unchecked_ref::<Layer>());
                    log::info!("[Editor] Shape drawn ({} in group)", drawn.get_layers().length());
                }
            })
        };
        map.on(DRAW_CREATED, on_created.as_ref().unchecked_ref());

        log::info!("[Editor] Map ready at {:?}, zoom {}", config.editor_center, config.editor_zoom);
        Ok(Self { map: map.clone(), drawn, _handlers: vec![on_result, on_created] })
    }

    /// Group the draw toolbar adds shapes to
    pub fn drawn_items(&self) -> FeatureGroup {
        self.drawn.clone()
    }
}

impl MapHandle for EditorMap {
    fn invalidate_size(&self) {
        self.map.invalidate_size(true);
    }

    fn release(self) {
        self.map.remove();
        log::info!("[Editor] Map released");
    }
}

impl DrawingLayer for FeatureGroup {
    fn layer_count(&self) -> usize {
        self.get_layers().length() as usize
    }

    fn feature_collection(&self) -> FeatureCollection {
        serde_wasm_bindgen::from_value(self.to_geo_json()).unwrap_or_else(|e| {
            log::error!("[Editor] Drawn shapes did not serialize: {}", e);
            FeatureCollection::default()
        })
    }

    fn clear(&self) {
        self.clear_layers();
    }
}
