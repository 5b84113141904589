//! Leaflet Option Objects
//!
//! Serde mirrors of the plain option objects Leaflet and its plugins take.
//! Converted to JS with [`to_js`].

use serde::Serialize;
use wasm_bindgen::JsValue;

/// `[lat, lng]` pair
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LatLng(pub f64, pub f64);

impl LatLng {
    pub fn lat(&self) -> f64 {
        self.0
    }

    pub fn lng(&self) -> f64 {
        self.1
    }
}

/// Corner of the map a control is docked to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ControlPosition {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub center: Option<LatLng>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zoom: Option<f64>,
    pub zoom_control: bool,
    pub attribution_control: bool,
    pub dragging: bool,
    pub scroll_wheel_zoom: bool,
    pub double_click_zoom: bool,
    pub box_zoom: bool,
    pub keyboard: bool,
    pub tap: bool,
    pub touch_zoom: bool,
}

impl MapOptions {
    /// Fully interactive map; the zoom control is left to the caller
    pub fn interactive(center: LatLng, zoom: f64) -> Self {
        Self {
            center: Some(center),
            zoom: Some(zoom),
            zoom_control: false,
            attribution_control: true,
            dragging: true,
            scroll_wheel_zoom: true,
            double_click_zoom: true,
            box_zoom: true,
            keyboard: true,
            tap: true,
            touch_zoom: true,
        }
    }

    /// Read-only preview: every interaction handler and control disabled
    pub fn static_preview() -> Self {
        Self {
            center: None,
            zoom: None,
            zoom_control: false,
            attribution_control: false,
            dragging: false,
            scroll_wheel_zoom: false,
            double_click_zoom: false,
            box_zoom: false,
            keyboard: false,
            tap: false,
            touch_zoom: false,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TileLayerOptions {
    pub attribution: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_zoom: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pane: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ZoomControlOptions {
    pub position: ControlPosition,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeocoderOptions {
    pub placeholder: String,
    pub collapsed: bool,
    pub position: ControlPosition,
    pub text: String,
    pub default_mark_geocode: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShapeOptions {
    pub weight: f64,
    pub opacity: f64,
    pub fill_opacity: f64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PolygonDrawOptions {
    pub allow_intersection: bool,
    pub show_area: bool,
    pub shape_options: ShapeOptions,
}

/// Shapes offered by the draw toolbar; `false` hides a tool
#[derive(Debug, Clone, Serialize)]
pub struct DrawShapes {
    pub polygon: PolygonDrawOptions,
    pub polyline: bool,
    pub rectangle: bool,
    pub circle: bool,
    pub marker: bool,
    pub circlemarker: bool,
}

impl DrawShapes {
    /// Polygon tool only, self-intersecting outlines rejected
    pub fn polygon_only() -> Self {
        Self {
            polygon: PolygonDrawOptions {
                allow_intersection: false,
                show_area: true,
                shape_options: ShapeOptions {
                    weight: 3.0,
                    opacity: 0.9,
                    fill_opacity: 0.4,
                },
            },
            polyline: false,
            rectangle: false,
            circle: false,
            marker: false,
            circlemarker: false,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PolyEditOptions {
    pub allow_intersection: bool,
}

/// `edit` block of the draw control; the feature group is attached in
/// [`crate::draw_control_options`] since it is a live JS object
#[derive(Debug, Clone, Serialize)]
pub struct DrawEditOptions {
    pub poly: PolyEditOptions,
}

/// Serialize to a plain JS object (maps become objects, not `Map`s)
pub fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, serde_wasm_bindgen::Error> {
    value.serialize(&serde_wasm_bindgen::Serializer::json_compatible())
}
