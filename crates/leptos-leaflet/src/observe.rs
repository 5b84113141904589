//! Element Size Observation
//!
//! Readiness signal for map containers: a map should only be built once its
//! container has been laid out with a non-zero size.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// Measured content box of an element, in CSS pixels
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ElementSize {
    pub width: f64,
    pub height: f64,
}

impl ElementSize {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Collapsed layout (hidden, not yet laid out, or zero in one axis)
    pub fn is_empty(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }
}

/// Owns a `ResizeObserver` watching one element; disconnects on drop
pub struct SizeObserver {
    observer: web_sys::ResizeObserver,
    _callback: Closure<dyn FnMut(js_sys::Array)>,
}

impl SizeObserver {
    /// Observe `element`, calling `on_size` with the initial size and on every change
    pub fn observe<F>(element: &web_sys::Element, mut on_size: F) -> Result<Self, JsValue>
    where
        F: FnMut(ElementSize) + 'static,
    {
        let callback = Closure::<dyn FnMut(js_sys::Array)>::new(move |entries: js_sys::Array| {
            // Only the latest measurement matters
            if let Some(entry) = entries.iter().last() {
                let entry: web_sys::ResizeObserverEntry = entry.unchecked_into();
                let rect = entry.content_rect();
                on_size(ElementSize::new(rect.width(), rect.height()));
            }
        });
        let observer = web_sys::ResizeObserver::new(callback.as_ref().unchecked_ref())?;
        observer.observe(element);
        Ok(Self { observer, _callback: callback })
    }
}

impl Drop for SizeObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_axis_is_empty() {
        assert!(ElementSize::default().is_empty());
        assert!(ElementSize::new(300.0, 0.0).is_empty());
        assert!(ElementSize::new(0.0, 150.0).is_empty());
        assert!(!ElementSize::new(300.0, 150.0).is_empty());
    }

    #[test]
    fn test_nan_is_empty() {
        assert!(ElementSize::new(f64::NAN, 150.0).is_empty());
    }
}
