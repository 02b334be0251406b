//! A4 page viewer component
//!
//! Renders the configured page of a PDF into a fixed A4 canvas. Each call to
//! `load` is one load-render sequence holding a render ticket; a newer call
//! supersedes it, and the superseded sequence stops at its next suspension
//! point without touching the visible canvas.

use std::cell::RefCell;
use std::rc::Rc;

use js_sys::Promise;
use pdfcoord_core::{
    css_px, Commit, PageSize, RenderPlan, RenderSequencer, RenderState, RenderTicket,
    RenderedPage, ViewerConfig, ViewerError, RENDERED_PAGE,
};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::future_to_promise;
use web_sys::{CanvasRenderingContext2d, Document, Element, HtmlCanvasElement, HtmlElement};

use crate::dom;
use crate::errors::dom_error;
use crate::logging;
use crate::pdf_bridge::PdfDocument;

pub(crate) const OUTER_STYLES: &[(&str, &str)] = &[
    ("padding", "20px"),
    ("background", "#333"),
    ("border-radius", "8px"),
    ("box-shadow", "0 4px 8px rgba(0, 0, 0, 0.2)"),
    ("display", "inline-block"),
];

pub(crate) const BANNER_STYLES: &[(&str, &str)] = &[
    ("position", "absolute"),
    ("top", "0"),
    ("left", "0"),
    ("right", "0"),
    ("padding", "8px 12px"),
    ("background-color", "rgba(198, 40, 40, 0.9)"),
    ("color", "white"),
    ("font-size", "13px"),
    ("pointer-events", "none"),
    ("z-index", "3"),
    ("display", "none"),
];

struct ViewerInner {
    config: ViewerConfig,
    document: Document,
    frame: HtmlElement,
    surface: HtmlCanvasElement,
    banner: HtmlElement,
    sequencer: RefCell<RenderSequencer>,
}

impl ViewerInner {
    fn is_current(&self, ticket: RenderTicket) -> bool {
        self.sequencer.borrow().is_current(ticket)
    }

    fn state(&self) -> RenderState {
        self.sequencer.borrow().state().clone()
    }

    /// Off-screen canvas with the same backing size as the visible surface
    fn scratch_canvas(&self) -> Result<HtmlCanvasElement, ViewerError> {
        let canvas: HtmlCanvasElement = dom::create(&self.document, "canvas").map_err(dom_error)?;
        canvas.set_width(self.surface.width());
        canvas.set_height(self.surface.height());
        Ok(canvas)
    }

    /// Replace the visible surface's pixels with `scratch`
    fn present(&self, scratch: &HtmlCanvasElement) -> Result<(), ViewerError> {
        let context = self
            .surface
            .get_context("2d")
            .map_err(dom_error)?
            .ok_or_else(|| ViewerError::Dom("2d context unavailable".into()))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| ViewerError::Dom("unexpected context type".into()))?;

        context.clear_rect(
            0.0,
            0.0,
            f64::from(self.surface.width()),
            f64::from(self.surface.height()),
        );
        context
            .draw_image_with_html_canvas_element(scratch, 0.0, 0.0)
            .map_err(dom_error)
    }

    fn show_banner(&self, message: &str) {
        self.banner.set_text_content(Some(message));
        if let Err(err) = self.banner.style().set_property("display", "block") {
            logging::error(&format!("Failed to show error banner: {:?}", err));
        }
    }

    fn hide_banner(&self) {
        if let Err(err) = self.banner.style().set_property("display", "none") {
            logging::error(&format!("Failed to hide error banner: {:?}", err));
        }
    }
}

/// Open, fit, rasterize and present one page.
///
/// Returns `Ok(None)` when the ticket was superseded along the way.
async fn render_into_surface(
    inner: &ViewerInner,
    ticket: RenderTicket,
    url: &str,
) -> Result<Option<RenderedPage>, ViewerError> {
    let document = PdfDocument::open(url).await?;
    if !inner.is_current(ticket) {
        return Ok(None);
    }

    let page = document.page(RENDERED_PAGE).await?;
    if !inner.is_current(ticket) {
        return Ok(None);
    }

    let unscaled = page.viewport(1.0)?;
    let intrinsic = PageSize::new(unscaled.width, unscaled.height);
    let plan = RenderPlan::for_page(intrinsic, inner.config.surface())?;
    let viewport = page.viewport(plan.scale)?;

    let scratch = inner.scratch_canvas()?;
    page.render(&scratch, plan.scale).await?;
    if !inner.is_current(ticket) {
        return Ok(None);
    }

    inner.present(&scratch)?;
    Ok(Some(RenderedPage::new(
        document.page_count(),
        intrinsic,
        viewport,
        plan.surface,
    )))
}

/// One full load-render sequence. Never fails; errors end up in the state.
async fn run_load(inner: Rc<ViewerInner>, url: String) -> RenderState {
    let ticket = inner.sequencer.borrow_mut().begin(&url);
    inner.hide_banner();
    logging::info(&format!("Loading {} (ticket {})", url, ticket.id()));

    let result = match render_into_surface(&inner, ticket, &url).await {
        Ok(Some(page)) => Ok(page),
        Ok(None) => {
            logging::warn(&format!("Render of {} superseded, result discarded", url));
            return inner.state();
        }
        Err(err) => {
            logging::error(&format!("Error loading PDF {}: {}", url, err));
            Err(err)
        }
    };

    let failure = result.as_ref().err().map(ToString::to_string);
    let commit = inner.sequencer.borrow_mut().complete(ticket, result);
    match (commit, failure) {
        (Commit::Applied, Some(message)) => inner.show_banner(&message),
        (Commit::Applied, None) => logging::info(&format!("Rendered {}", url)),
        (Commit::Superseded, _) => {}
    }
    inner.state()
}

fn state_to_js(state: &RenderState) -> JsValue {
    serde_wasm_bindgen::to_value(state).unwrap_or_else(|e| JsValue::from_str(&e.to_string()))
}

/// PdfViewer renders one PDF page into an A4-sized canvas
#[wasm_bindgen]
pub struct PdfViewer {
    inner: Rc<ViewerInner>,
}

impl PdfViewer {
    /// Build the viewer DOM inside `host`
    pub fn mount(host: &Element, config: ViewerConfig) -> Result<Self, JsValue> {
        let document = dom::document()?;
        let surface_size = config.surface();
        let width = css_px(surface_size.width);
        let height = css_px(surface_size.height);

        let outer: HtmlElement = dom::create(&document, "div")?;
        outer.set_class_name("a4-container");
        dom::set_styles(&outer, OUTER_STYLES)?;

        let frame: HtmlElement = dom::create(&document, "div")?;
        frame.set_class_name("a4-page");
        dom::set_styles(
            &frame,
            &[
                ("position", "relative"),
                ("display", "inline-block"),
                ("width", width.as_str()),
                ("height", height.as_str()),
                ("background", "white"),
                ("box-shadow", "0 0 10px rgba(0, 0, 0, 0.1)"),
                ("overflow", "hidden"),
                ("border", "1px solid black"),
            ],
        )?;

        let surface: HtmlCanvasElement = dom::create(&document, "canvas")?;
        let (pixel_width, pixel_height) = surface_size.canvas_pixels();
        surface.set_width(pixel_width);
        surface.set_height(pixel_height);
        dom::set_styles(&surface, &[("width", "100%"), ("height", "100%")])?;

        let banner: HtmlElement = dom::create(&document, "div")?;
        banner.set_class_name("a4-error");
        banner.set_attribute("role", "alert")?;
        dom::set_styles(&banner, BANNER_STYLES)?;

        frame.append_child(&surface)?;
        frame.append_child(&banner)?;
        outer.append_child(&frame)?;
        host.append_child(&outer)?;

        Ok(Self {
            inner: Rc::new(ViewerInner {
                config,
                document,
                frame,
                surface,
                banner,
                sequencer: RefCell::new(RenderSequencer::new()),
            }),
        })
    }

    /// Page container; pointer coordinates are relative to it
    pub fn frame(&self) -> &HtmlElement {
        &self.inner.frame
    }
}

#[wasm_bindgen]
impl PdfViewer {
    /// Create a viewer inside `host` with an optional JSON config
    #[wasm_bindgen(constructor)]
    pub fn new(host: &Element, config_json: Option<String>) -> Result<PdfViewer, JsValue> {
        let config = crate::parse_config(config_json.as_deref())?;
        Self::mount(host, config)
    }

    /// Load `url` and render its page. Resolves to the resulting render
    /// state; never rejects.
    #[wasm_bindgen]
    pub fn load(&self, url: String) -> Promise {
        let inner = Rc::clone(&self.inner);
        future_to_promise(async move {
            let state = run_load(inner, url).await;
            Ok(state_to_js(&state))
        })
    }

    /// Current render state as a JS object (`{ status, url, ... }`)
    #[wasm_bindgen]
    pub fn state(&self) -> JsValue {
        state_to_js(&self.inner.state())
    }

    /// Last requested URL
    #[wasm_bindgen]
    pub fn url(&self) -> Option<String> {
        self.inner.state().url().map(str::to_string)
    }

    #[wasm_bindgen]
    pub fn is_rendered(&self) -> bool {
        matches!(self.inner.state(), RenderState::Rendered { .. })
    }

    /// Error message of the last failed load, if the latest load failed
    #[wasm_bindgen]
    pub fn error(&self) -> Option<String> {
        self.inner.state().error().map(str::to_string)
    }
}
