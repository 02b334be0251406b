//! Conversions between JS exceptions and [`ViewerError`]

use pdfcoord_core::ViewerError;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// Convert a core error into the value thrown across the wasm boundary
pub fn to_js(err: ViewerError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Best-effort human readable message from a thrown JS value
pub fn js_message(value: &JsValue) -> String {
    if let Some(text) = value.as_string() {
        return text;
    }
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    format!("{:?}", value)
}

pub fn dom_error(value: JsValue) -> ViewerError {
    ViewerError::Dom(js_message(&value))
}

#[cfg(test)]
#[cfg(target_arch = "wasm32")]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_js_message_from_string() {
        assert_eq!(js_message(&JsValue::from_str("boom")), "boom");
    }

    #[wasm_bindgen_test]
    fn test_js_message_from_error() {
        let err: JsValue = js_sys::Error::new("Missing PDF").into();
        assert_eq!(js_message(&err), "Missing PDF");
    }

    #[wasm_bindgen_test]
    fn test_to_js() {
        let value = to_js(ViewerError::NoPages);
        assert_eq!(value.as_string().as_deref(), Some("PDF has no pages"));
    }
}
