//! Leaflet Bindings
//!
//! Raw wasm-bindgen imports for the parts of Leaflet, leaflet-draw and
//! leaflet-control-geocoder the app uses. The scripts are loaded by the
//! host page and reached through the global `L`.

use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;

#[wasm_bindgen]
extern "C" {
    // ========================
    // Map
    // ========================

    #[wasm_bindgen(js_namespace = L, js_name = Map)]
    #[derive(Debug, Clone)]
    pub type Map;

    /// `L.map(container, options)`; throws if the container is already bound
    #[wasm_bindgen(catch, js_namespace = L, js_name = map)]
    pub fn create_map(container: &HtmlElement, options: &JsValue) -> Result<Map, JsValue>;

    #[wasm_bindgen(method, js_name = setView)]
    pub fn set_view(this: &Map, center: &JsValue, zoom: f64);

    #[wasm_bindgen(method, js_name = fitBounds)]
    pub fn fit_bounds(this: &Map, bounds: &LatLngBounds);

    #[wasm_bindgen(method, js_name = invalidateSize)]
    pub fn invalidate_size(this: &Map, animate: bool);

    #[wasm_bindgen(method, js_name = addControl)]
    pub fn add_control(this: &Map, control: &Control);

    #[wasm_bindgen(method)]
    pub fn on(this: &Map, event: &str, handler: &js_sys::Function);

    /// Detaches every handler and layer and unbinds the container
    #[wasm_bindgen(method)]
    pub fn remove(this: &Map);

    #[wasm_bindgen(js_namespace = L, js_name = LatLngBounds)]
    #[derive(Debug, Clone)]
    pub type LatLngBounds;

    #[wasm_bindgen(js_namespace = L, js_name = latLngBounds)]
    pub fn lat_lng_bounds(south_west: &JsValue, north_east: &JsValue) -> LatLngBounds;

    // ========================
    // Layers
    // ========================

    #[wasm_bindgen(js_namespace = L, js_name = Layer)]
    #[derive(Debug, Clone)]
    pub type Layer;

    #[wasm_bindgen(method, js_name = addTo)]
    pub fn add_to(this: &Layer, map: &Map);

    #[wasm_bindgen(extends = Layer, js_namespace = L, js_name = TileLayer)]
    #[derive(Debug, Clone)]
    pub type TileLayer;

    #[wasm_bindgen(js_namespace = L, js_name = tileLayer)]
    pub fn tile_layer(url_template: &str, options: &JsValue) -> TileLayer;

    #[wasm_bindgen(extends = Layer, js_namespace = L, js_name = GeoJSON)]
    #[derive(Debug, Clone)]
    pub type GeoJson;

    #[wasm_bindgen(catch, js_namespace = L, js_name = geoJSON)]
    pub fn geo_json(data: &JsValue) -> Result<GeoJson, JsValue>;

    #[wasm_bindgen(extends = Layer, js_namespace = L)]
    #[derive(Debug, Clone)]
    pub type FeatureGroup;

    #[wasm_bindgen(constructor, js_namespace = L)]
    pub fn new() -> FeatureGroup;

    #[wasm_bindgen(method, js_name = addLayer)]
    pub fn add_layer(this: &FeatureGroup, layer: &Layer);

    #[wasm_bindgen(method, js_name = getLayers)]
    pub fn get_layers(this: &FeatureGroup) -> js_sys::Array;

    #[wasm_bindgen(method, js_name = clearLayers)]
    pub fn clear_layers(this: &FeatureGroup);

    /// FeatureCollection of every layer in the group
    #[wasm_bindgen(method, js_name = toGeoJSON)]
    pub fn to_geo_json(this: &FeatureGroup) -> JsValue;

    // ========================
    // Controls
    // ========================

    #[wasm_bindgen(js_namespace = L, js_name = Control)]
    #[derive(Debug, Clone)]
    pub type Control;

    #[wasm_bindgen(method, js_name = addTo)]
    pub fn add_to(this: &Control, map: &Map);

    #[wasm_bindgen(js_namespace = ["L", "control"], js_name = zoom)]
    pub fn zoom_control(options: &JsValue) -> Control;

    /// Search box from leaflet-control-geocoder
    #[wasm_bindgen(extends = Control, js_namespace = ["L", "Control"], js_name = Geocoder)]
    #[derive(Debug, Clone)]
    pub type GeocoderControl;

    /// `L.Control.geocoder(options)`, reached as `Control::geocoder`
    #[wasm_bindgen(catch, js_namespace = ["L", "Control"], js_name = geocoder)]
    pub fn geocoder(options: &JsValue) -> Result<GeocoderControl, JsValue>;

    #[wasm_bindgen(method)]
    pub fn on(this: &GeocoderControl, event: &str, handler: &js_sys::Function);
}

#[wasm_bindgen]
extern "C" {
    /// `L.Control.Draw` from leaflet-draw
    #[wasm_bindgen(extends = Control, js_namespace = ["L", "Control"], js_name = Draw)]
    #[derive(Debug, Clone)]
    pub type DrawControl;

    #[wasm_bindgen(catch, constructor, js_namespace = ["L", "Control"], js_class = "Draw")]
    pub fn new(options: &JsValue) -> Result<DrawControl, JsValue>;
}

/// Fired by leaflet-draw when the user finishes a shape (`L.Draw.Event.CREATED`)
pub const DRAW_CREATED: &str = "draw:created";

/// Fired by the geocoder when the user picks a search result
pub const MARK_GEOCODE: &str = "markgeocode";
