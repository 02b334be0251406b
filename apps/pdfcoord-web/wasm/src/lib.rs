//! pdfcoord - A4 PDF page viewer with a coordinate crosshair
//!
//! Renders one page of a PDF into an A4 canvas via pdf.js, draws a crosshair
//! that follows the mouse with its container-local coordinates, and copies
//! click coordinates to the clipboard.

use std::rc::Rc;

use js_sys::Promise;
use pdfcoord_core::ViewerConfig;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

pub mod clipboard;
pub mod dom;
pub mod errors;
pub mod logging;
pub mod overlay;
pub mod pdf_bridge;
pub mod pdf_viewer;
pub mod pointer;
pub mod toast;

pub use clipboard::{write_text, CopyAction};
pub use overlay::OverlayView;
pub use pdf_bridge::{init_pdf_js, PdfDocument, PdfPage};
pub use pdf_viewer::PdfViewer;
pub use pointer::PointerTracker;
pub use toast::Toaster;

const APP_TITLE: &str = "PDF Navigation";

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    logging::info("pdfcoord WASM initialized");
}

/// Parse an optional JSON config, falling back to defaults when absent
pub(crate) fn parse_config(json: Option<&str>) -> Result<ViewerConfig, JsValue> {
    match json {
        Some(json) if !json.trim().is_empty() => {
            ViewerConfig::from_json(json).map_err(errors::to_js)
        }
        _ => Ok(ViewerConfig::default()),
    }
}

/// The whole application: title, viewer, crosshair and copy action
#[wasm_bindgen]
pub struct App {
    viewer: PdfViewer,
    tracker: PointerTracker,
    _copy: CopyAction,
}

#[wasm_bindgen]
impl App {
    /// Mount the app into the element with id `root_id` and start loading
    /// `pdf_url`
    #[wasm_bindgen]
    pub fn mount(
        root_id: &str,
        pdf_url: &str,
        config_json: Option<String>,
    ) -> Result<App, JsValue> {
        let config = parse_config(config_json.as_deref())?;
        let document = dom::document()?;
        let root: HtmlElement = document
            .get_element_by_id(root_id)
            .ok_or_else(|| JsValue::from_str(&format!("Element #{} not found", root_id)))?
            .dyn_into()
            .map_err(|_| JsValue::from_str(&format!("#{} is not an HTML element", root_id)))?;

        if let Err(err) = init_pdf_js(&config.worker_src) {
            logging::error(&format!("Error initializing pdf.js: {}", err));
            return Err(errors::to_js(err));
        }

        let title: HtmlElement = dom::create(&document, "h1")?;
        title.set_text_content(Some(APP_TITLE));
        root.append_child(&title)?;

        let viewer = PdfViewer::mount(&root, config.clone())?;
        let overlay = OverlayView::create(&document, viewer.frame(), &config.line_color)?;
        let tracker = PointerTracker::attach(viewer.frame(), overlay, config.label_offset)?;

        let toaster = Rc::new(Toaster::new(document, root.clone()));
        let copy = CopyAction::attach(&root, toaster, config.notification_ms)?;

        // resolves on its own; failures land in the render state
        let _ = viewer.load(pdf_url.to_string());

        Ok(App {
            viewer,
            tracker,
            _copy: copy,
        })
    }

    /// Render a different PDF, superseding any load still in flight
    #[wasm_bindgen]
    pub fn set_url(&self, url: String) -> Promise {
        self.viewer.load(url)
    }

    /// Current render state (`{ status, url, ... }`)
    #[wasm_bindgen]
    pub fn state(&self) -> JsValue {
        self.viewer.state()
    }

    /// Error message of the latest load, if it failed
    #[wasm_bindgen]
    pub fn error(&self) -> Option<String> {
        self.viewer.error()
    }

    /// Current crosshair position (`{ x, y }`)
    #[wasm_bindgen]
    pub fn pointer(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.tracker.position())
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }
}
