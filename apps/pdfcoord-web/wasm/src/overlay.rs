//! Crosshair overlay elements
//!
//! Two guide lines and a coordinate label, absolutely positioned inside the
//! page frame. They never receive pointer events, so the frame keeps getting
//! `mousemove` while the pointer is over them.

use pdfcoord_core::{css_px, OverlayLayout};
use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlElement};

use crate::dom;

pub(crate) const VERTICAL_LINE_STYLES: &[(&str, &str)] = &[
    ("position", "absolute"),
    ("top", "0"),
    ("width", "1px"),
    ("height", "100%"),
    ("pointer-events", "none"),
    ("z-index", "1"),
];

pub(crate) const HORIZONTAL_LINE_STYLES: &[(&str, &str)] = &[
    ("position", "absolute"),
    ("left", "0"),
    ("width", "100%"),
    ("height", "1px"),
    ("pointer-events", "none"),
    ("z-index", "1"),
];

pub(crate) const LABEL_STYLES: &[(&str, &str)] = &[
    ("position", "absolute"),
    ("background-color", "rgba(0, 0, 0, 0.7)"),
    ("color", "white"),
    ("padding", "4px 8px"),
    ("border-radius", "4px"),
    ("font-size", "12px"),
    ("white-space", "nowrap"),
    ("pointer-events", "none"),
    ("z-index", "2"),
];

/// DOM elements of the crosshair
pub struct OverlayView {
    vertical: HtmlElement,
    horizontal: HtmlElement,
    label: HtmlElement,
}

impl OverlayView {
    /// Create the overlay elements inside `frame`
    ///
    /// # Errors
    /// Returns JsValue error if unable to create or configure the elements
    pub fn create(
        document: &Document,
        frame: &HtmlElement,
        line_color: &str,
    ) -> Result<Self, JsValue> {
        let vertical: HtmlElement = dom::create(document, "div")?;
        vertical.set_class_name("crosshair-vertical");
        dom::set_styles(&vertical, VERTICAL_LINE_STYLES)?;
        vertical.style().set_property("background-color", line_color)?;

        let horizontal: HtmlElement = dom::create(document, "div")?;
        horizontal.set_class_name("crosshair-horizontal");
        dom::set_styles(&horizontal, HORIZONTAL_LINE_STYLES)?;
        horizontal
            .style()
            .set_property("background-color", line_color)?;

        let label: HtmlElement = dom::create(document, "div")?;
        label.set_class_name("crosshair-label");
        dom::set_styles(&label, LABEL_STYLES)?;

        frame.append_child(&vertical)?;
        frame.append_child(&horizontal)?;
        frame.append_child(&label)?;

        Ok(Self {
            vertical,
            horizontal,
            label,
        })
    }

    /// Move the elements to `layout`
    pub fn apply(&self, layout: &OverlayLayout) -> Result<(), JsValue> {
        self.vertical
            .style()
            .set_property("left", &css_px(layout.vertical_line_left))?;
        self.horizontal
            .style()
            .set_property("top", &css_px(layout.horizontal_line_top))?;

        let label_style = self.label.style();
        label_style.set_property("left", &css_px(layout.label_left))?;
        label_style.set_property("top", &css_px(layout.label_top))?;
        self.label.set_text_content(Some(&layout.label_text));
        Ok(())
    }
}
