//! Copy-coordinates click action

use std::rc::Rc;

use js_sys::{Function, Promise, Reflect};
use pdfcoord_core::{clipboard_text, Notification, ViewerError};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{HtmlElement, MouseEvent};

use crate::dom;
use crate::errors::{dom_error, js_message};
use crate::logging;
use crate::toast::Toaster;

/// Write `text` with `navigator.clipboard.writeText`
pub async fn write_text(text: &str) -> Result<(), ViewerError> {
    let navigator = dom::window().map_err(dom_error)?.navigator();

    let clipboard = Reflect::get(&navigator, &JsValue::from_str("clipboard"))
        .map_err(|e| ViewerError::Clipboard(js_message(&e)))?;
    if clipboard.is_undefined() || clipboard.is_null() {
        return Err(ViewerError::Clipboard("Clipboard API not available".into()));
    }

    let write: Function = Reflect::get(&clipboard, &JsValue::from_str("writeText"))
        .map_err(|e| ViewerError::Clipboard(js_message(&e)))?
        .dyn_into()
        .map_err(|_| ViewerError::Clipboard("writeText is not a function".into()))?;

    let promise: Promise = write
        .call1(&clipboard, &JsValue::from_str(text))
        .map_err(|e| ViewerError::Clipboard(js_message(&e)))?
        .dyn_into()
        .map_err(|_| ViewerError::Clipboard("writeText did not return a promise".into()))?;

    JsFuture::from(promise)
        .await
        .map_err(|e| ViewerError::Clipboard(js_message(&e)))?;
    Ok(())
}

/// Copies the viewport coordinates of every click inside `target`.
///
/// Each click is independent: it formats the text, writes it, and reports
/// the outcome through a toast.
pub struct CopyAction {
    target: HtmlElement,
    listener: Closure<dyn FnMut(MouseEvent)>,
}

impl CopyAction {
    pub fn attach(
        target: &HtmlElement,
        toaster: Rc<Toaster>,
        notification_ms: u32,
    ) -> Result<Self, JsValue> {
        let listener = Closure::wrap(Box::new(move |event: MouseEvent| {
            let (client_x, client_y) = dom::client_point(&event);
            let text = clipboard_text(client_x, client_y);
            let toaster = Rc::clone(&toaster);
            spawn_local(async move {
                let notification = match write_text(&text).await {
                    Ok(()) => Notification::copied(&text, notification_ms),
                    Err(err) => {
                        logging::error(&format!("Failed to copy coordinates: {}", err));
                        Notification::copy_failed(&err, notification_ms)
                    }
                };
                if let Err(err) = toaster.show(&notification) {
                    logging::error(&format!("Failed to show notification: {:?}", err));
                }
            });
        }) as Box<dyn FnMut(MouseEvent)>);

        target.add_event_listener_with_callback("click", listener.as_ref().unchecked_ref())?;

        Ok(Self {
            target: target.clone(),
            listener,
        })
    }
}

impl Drop for CopyAction {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback("click", self.listener.as_ref().unchecked_ref());
    }
}

#[cfg(test)]
#[cfg(target_arch = "wasm32")]
mod wasm_tests {
    use super::*;
    use js_sys::Object;
    use wasm_bindgen_test::*;
    use web_sys::Navigator;

    wasm_bindgen_test_configure!(run_in_browser);

    async fn sleep(ms: i32) {
        let promise = Promise::new(&mut |resolve, _| {
            dom::window()
                .unwrap()
                .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms)
                .unwrap();
        });
        JsFuture::from(promise).await.unwrap();
    }

    /// Shadow `navigator.clipboard` with `undefined` until `restore_clipboard`
    fn hide_clipboard() -> Navigator {
        let navigator = dom::window().unwrap().navigator();
        let descriptor = Object::new();
        Reflect::set(&descriptor, &"value".into(), &JsValue::UNDEFINED).unwrap();
        Reflect::set(&descriptor, &"configurable".into(), &JsValue::TRUE).unwrap();
        Object::define_property(&navigator, &"clipboard".into(), &descriptor);
        navigator
    }

    fn restore_clipboard(navigator: &Navigator) {
        Reflect::delete_property(navigator, &"clipboard".into()).unwrap();
    }

    #[wasm_bindgen_test]
    async fn test_write_without_clipboard_api() {
        let navigator = hide_clipboard();
        let result = write_text("X:320, Y:75").await;
        restore_clipboard(&navigator);

        assert_eq!(
            result,
            Err(ViewerError::Clipboard("Clipboard API not available".into()))
        );
    }

    #[wasm_bindgen_test]
    async fn test_click_without_clipboard_shows_error_toast() {
        let document = dom::document().unwrap();
        let host: HtmlElement = dom::create(&document, "div").unwrap();
        document.body().unwrap().append_child(&host).unwrap();
        let toaster = Rc::new(Toaster::new(document, host.clone()));
        let action = CopyAction::attach(&host, toaster, 10_000).unwrap();

        let navigator = hide_clipboard();
        host.click();
        sleep(50).await;
        restore_clipboard(&navigator);

        let toast = host.query_selector(".toast-error").unwrap().unwrap();
        assert_eq!(
            toast.text_content().as_deref(),
            Some("Clipboard write failed: Clipboard API not available")
        );
        assert!(host.query_selector(".toast-success").unwrap().is_none());

        drop(action);
        host.remove();
    }
}
