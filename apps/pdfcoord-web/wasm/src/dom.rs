//! Small DOM helpers shared by the components

use js_sys::Reflect;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, MouseEvent, Window};

pub fn window() -> Result<Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("No window object available"))
}

pub fn document() -> Result<Document, JsValue> {
    window()?
        .document()
        .ok_or_else(|| JsValue::from_str("No document object available"))
}

/// Create an element and cast it to `T`
pub fn create<T: JsCast>(document: &Document, tag: &str) -> Result<T, JsValue> {
    document
        .create_element(tag)?
        .dyn_into::<T>()
        .map_err(|_| JsValue::from_str(&format!("<{}> has an unexpected type", tag)))
}

pub fn set_styles(element: &HtmlElement, styles: &[(&str, &str)]) -> Result<(), JsValue> {
    let style = element.style();
    for (property, value) in styles {
        style.set_property(property, value)?;
    }
    Ok(())
}

/// Client coordinates of a mouse event as doubles.
///
/// `MouseEvent::client_x` is typed `long`, but browsers following CSSOM View
/// deliver fractional values; read the raw properties to keep them.
pub fn client_point(event: &MouseEvent) -> (f64, f64) {
    let read = |name: &str| Reflect::get(event, &JsValue::from_str(name)).ok()?.as_f64();
    (
        read("clientX").unwrap_or_else(|| f64::from(event.client_x())),
        read("clientY").unwrap_or_else(|| f64::from(event.client_y())),
    )
}
