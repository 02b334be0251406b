//! PDF.js integration through the JavaScript bridge
//!
//! pdf.js owns parsing and rasterization. The bridge exposes the steps the
//! viewer needs (open document, get page, get viewport, render, destroy)
//! and throws or rejects on failure, which surfaces here as `Err`.

use js_sys::Reflect;
use pdfcoord_core::{Viewport, ViewerError};
use wasm_bindgen::prelude::*;
use web_sys::HtmlCanvasElement;

use crate::errors::js_message;
use crate::logging;

#[wasm_bindgen(module = "/www/js/pdf-bridge.js")]
extern "C" {
    #[wasm_bindgen(js_name = initPdfJs, catch)]
    fn init_pdf_js_internal(worker_src: &str) -> Result<(), JsValue>;

    #[wasm_bindgen(js_name = openDocument, catch)]
    async fn open_document_internal(url: &str) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(js_name = getPage, catch)]
    async fn get_page_internal(doc: &JsValue, page_num: u32) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(js_name = pageViewport, catch)]
    fn page_viewport_internal(page: &JsValue, scale: f64) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(js_name = renderPage, catch)]
    async fn render_page_internal(
        page: &JsValue,
        canvas: &HtmlCanvasElement,
        scale: f64,
    ) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(js_name = destroyDocument, catch)]
    fn destroy_document_internal(doc: &JsValue) -> Result<(), JsValue>;
}

/// Point pdf.js at its worker script. Must run before the first load.
///
/// Fails when the pdf.js library itself is not on the page.
pub fn init_pdf_js(worker_src: &str) -> Result<(), ViewerError> {
    init_pdf_js_internal(worker_src).map_err(|e| ViewerError::Load(js_message(&e)))
}

/// Loaded pdf.js document proxy. The proxy is destroyed on drop.
pub struct PdfDocument {
    proxy: JsValue,
    page_count: u32,
}

impl PdfDocument {
    pub async fn open(url: &str) -> Result<Self, ViewerError> {
        let proxy = open_document_internal(url)
            .await
            .map_err(|e| ViewerError::Load(js_message(&e)))?;

        if proxy.is_undefined() || proxy.is_null() {
            return Err(ViewerError::Load("Failed to load PDF document".into()));
        }

        let page_count = Reflect::get(&proxy, &JsValue::from_str("numPages"))
            .ok()
            .and_then(|n| n.as_f64())
            .map(|n| n as u32)
            .unwrap_or(0);

        Ok(Self { proxy, page_count })
    }

    pub fn page_count(&self) -> u32 {
        self.page_count
    }

    /// Fetch a page (1-indexed)
    pub async fn page(&self, page_num: u32) -> Result<PdfPage, ViewerError> {
        if self.page_count == 0 {
            return Err(ViewerError::NoPages);
        }
        if page_num < 1 || page_num > self.page_count {
            return Err(ViewerError::Render(format!(
                "Invalid page number: {} (document has {} pages)",
                page_num, self.page_count
            )));
        }

        let proxy = get_page_internal(&self.proxy, page_num)
            .await
            .map_err(|e| ViewerError::Render(js_message(&e)))?;
        Ok(PdfPage { proxy })
    }
}

impl Drop for PdfDocument {
    fn drop(&mut self) {
        if let Err(err) = destroy_document_internal(&self.proxy) {
            logging::warn(&format!("Failed to destroy PDF document: {}", js_message(&err)));
        }
    }
}

/// Loaded pdf.js page proxy
pub struct PdfPage {
    proxy: JsValue,
}

impl PdfPage {
    pub fn viewport(&self, scale: f64) -> Result<Viewport, ViewerError> {
        let raw = page_viewport_internal(&self.proxy, scale)
            .map_err(|e| ViewerError::Render(js_message(&e)))?;
        serde_wasm_bindgen::from_value(raw)
            .map_err(|e| ViewerError::Render(format!("Malformed viewport: {}", e)))
    }

    /// Rasterize into `canvas` at `scale`
    pub async fn render(&self, canvas: &HtmlCanvasElement, scale: f64) -> Result<(), ViewerError> {
        render_page_internal(&self.proxy, canvas, scale)
            .await
            .map_err(|e| ViewerError::Render(js_message(&e)))?;
        Ok(())
    }
}

#[cfg(test)]
#[cfg(target_arch = "wasm32")]
mod wasm_tests {
    use super::*;
    use js_sys::{Function, Object};
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_init_without_pdfjs_is_load_error() {
        let err = init_pdf_js("worker.js").unwrap_err();
        assert_eq!(err, ViewerError::Load("pdf.js is not loaded".into()));
    }

    #[wasm_bindgen_test]
    fn test_drop_destroys_proxy() {
        let proxy = Object::new();
        let destroy = Function::new_no_args("this.destroyed = true;");
        Reflect::set(&proxy, &"destroy".into(), &destroy).unwrap();

        drop(PdfDocument {
            proxy: proxy.clone().into(),
            page_count: 1,
        });

        let destroyed = Reflect::get(&proxy, &"destroyed".into()).unwrap();
        assert_eq!(destroyed.as_bool(), Some(true));
    }

    #[wasm_bindgen_test]
    async fn test_page_of_empty_document_fails() {
        let document = PdfDocument {
            proxy: Object::new().into(),
            page_count: 0,
        };
        assert!(matches!(document.page(1).await, Err(ViewerError::NoPages)));
    }
}
