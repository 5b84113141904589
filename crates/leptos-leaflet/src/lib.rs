//! Leptos Leaflet Utilities
//!
//! Thin Leaflet bindings for Leptos apps.
//! Option objects are typed with serde; map containers are handed out as
//! `NodeRef`s and only used once they report a non-zero size.

pub mod bindings;
pub mod options;
mod observe;

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

pub use bindings::*;
pub use observe::{ElementSize, SizeObserver};
pub use options::*;

/// `[lat, lng]` as a JS array
pub fn lat_lng_js(point: LatLng) -> JsValue {
    js_sys::Array::of2(&JsValue::from_f64(point.lat()), &JsValue::from_f64(point.lng())).into()
}

/// Rectangle spanned by two corners
pub fn bounds(south_west: LatLng, north_east: LatLng) -> LatLngBounds {
    lat_lng_bounds(&lat_lng_js(south_west), &lat_lng_js(north_east))
}

/// Options for `L.Control.Draw` editing `group`
pub fn draw_control_options(shapes: &DrawShapes, edit: &DrawEditOptions, group: &FeatureGroup) -> Result<JsValue, JsValue> {
    let draw = to_js(shapes)?;
    let edit = to_js(edit)?;
    js_sys::Reflect::set(&edit, &JsValue::from_str("featureGroup"), group)?;

    let options = js_sys::Object::new();
    js_sys::Reflect::set(&options, &JsValue::from_str("draw"), &draw)?;
    js_sys::Reflect::set(&options, &JsValue::from_str("edit"), &edit)?;
    Ok(options.into())
}

/// Walk a property path on an event object, e.g. `["geocode", "center"]`
pub fn event_path(event: &JsValue, path: &[&str]) -> Option<JsValue> {
    let mut current = event.clone();
    for key in path {
        current = js_sys::Reflect::get(&current, &JsValue::from_str(key)).ok()?;
        if current.is_undefined() || current.is_null() {
            return None;
        }
    }
    Some(current)
}

/// Readable text for a thrown JS value
pub fn js_error_message(error: &JsValue) -> String {
    if let Some(message) = error.dyn_ref::<js_sys::Error>().map(|e| String::from(e.message())) {
        return message;
    }
    error.as_string().unwrap_or_else(|| format!("{:?}", error))
}

/// Event listener closure; keep it alive for as long as the emitter
pub type EventHandler = Closure<dyn FnMut(JsValue)>;

pub fn event_handler<F>(handler: F) -> EventHandler
where
    F: FnMut(JsValue) + 'static,
{
    Closure::<dyn FnMut(JsValue)>::new(handler)
}

/// Observe the size of the element behind `node_ref` once it is mounted.
///
/// The observer lives as long as the calling component's owner.
pub fn use_size_observer<F>(node_ref: NodeRef<leptos::html::Div>, on_size: F)
where
    F: FnMut(ElementSize) + Clone + 'static,
{
    let observer = StoredValue::new_local(None::<SizeObserver>);

    Effect::new(move |_| {
        if let Some(element) = node_ref.get() {
            // Replacing the previous observer disconnects it
            let observed = SizeObserver::observe(&element, on_size.clone()).ok();
            observer.set_value(observed);
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_options_disable_interaction() {
        let options = MapOptions::static_preview();
        assert!(!options.dragging);
        assert!(!options.scroll_wheel_zoom);
        assert!(!options.touch_zoom);
        assert!(!options.keyboard);
        assert!(options.center.is_none());
    }

    #[test]
    fn test_polygon_only_toolbar() {
        let shapes = DrawShapes::polygon_only();
        assert!(!shapes.polyline && !shapes.rectangle && !shapes.circle && !shapes.marker && !shapes.circlemarker);
        assert!(!shapes.polygon.allow_intersection);
    }
}
