//! Transient toast notifications

use pdfcoord_core::Notification;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

use crate::dom;

pub(crate) const TOAST_STYLES: &[(&str, &str)] = &[
    ("position", "fixed"),
    ("right", "24px"),
    ("bottom", "24px"),
    ("color", "white"),
    ("padding", "8px 16px"),
    ("border-radius", "4px"),
    ("font-size", "14px"),
    ("box-shadow", "0 2px 6px rgba(0, 0, 0, 0.3)"),
    ("pointer-events", "none"),
    ("z-index", "1000"),
];

/// Shows notifications as toasts appended to `host`
pub struct Toaster {
    document: Document,
    host: HtmlElement,
}

impl Toaster {
    pub fn new(document: Document, host: HtmlElement) -> Self {
        Self { document, host }
    }

    /// Append a toast and schedule its removal after `duration_ms`
    pub fn show(&self, notification: &Notification) -> Result<(), JsValue> {
        let toast: HtmlElement = dom::create(&self.document, "div")?;
        toast.set_class_name(&notification.class_name());
        toast.set_attribute("role", "status")?;
        dom::set_styles(&toast, TOAST_STYLES)?;
        toast
            .style()
            .set_property("background-color", notification.kind.background())?;
        toast.set_text_content(Some(&notification.message));
        self.host.append_child(&toast)?;

        let remove = Closure::once_into_js(move || toast.remove());
        dom::window()?.set_timeout_with_callback_and_timeout_and_arguments_0(
            remove.unchecked_ref(),
            i32::try_from(notification.duration_ms).unwrap_or(i32::MAX),
        )?;
        Ok(())
    }
}

#[cfg(test)]
#[cfg(target_arch = "wasm32")]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_show_appends_toast() {
        let document = dom::document().unwrap();
        let host: HtmlElement = dom::create(&document, "div").unwrap();
        let toaster = Toaster::new(document, host.clone());

        toaster
            .show(&Notification::copied("X:320, Y:75", 50))
            .unwrap();

        let toast = host.first_element_child().unwrap();
        assert_eq!(toast.class_name(), "toast toast-success");
        assert_eq!(toast.text_content().as_deref(), Some("Copied X:320, Y:75"));
    }
}
