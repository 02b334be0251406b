//! Pointer tracking over the page frame

use std::cell::RefCell;
use std::rc::Rc;

use pdfcoord_core::{ContainerRect, OverlayTracker, PointerPosition};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, MouseEvent};

use crate::dom;
use crate::logging;
use crate::overlay::OverlayView;

/// Keeps the crosshair under the mouse.
///
/// Listens for `mousemove` on the frame only. The bounding rectangle is read
/// on every event so scrolling and layout changes are picked up. Dropping
/// the tracker removes the listener.
pub struct PointerTracker {
    target: HtmlElement,
    tracker: Rc<RefCell<OverlayTracker>>,
    listener: Closure<dyn FnMut(MouseEvent)>,
}

impl PointerTracker {
    pub fn attach(
        frame: &HtmlElement,
        view: OverlayView,
        label_offset: f64,
    ) -> Result<Self, JsValue> {
        let tracker = Rc::new(RefCell::new(OverlayTracker::new(label_offset)));
        view.apply(&tracker.borrow().layout())?;

        let listener = {
            let tracker = Rc::clone(&tracker);
            let frame = frame.clone();
            Closure::wrap(Box::new(move |event: MouseEvent| {
                let bounds = frame.get_bounding_client_rect();
                let rect =
                    ContainerRect::new(bounds.left(), bounds.top(), bounds.width(), bounds.height());
                let (client_x, client_y) = dom::client_point(&event);
                let layout = tracker.borrow_mut().pointer_moved(&rect, client_x, client_y);
                if let Err(err) = view.apply(&layout) {
                    logging::error(&format!("Failed to move crosshair: {:?}", err));
                }
            }) as Box<dyn FnMut(MouseEvent)>)
        };

        frame.add_event_listener_with_callback("mousemove", listener.as_ref().unchecked_ref())?;

        Ok(Self {
            target: frame.clone(),
            tracker,
            listener,
        })
    }

    pub fn position(&self) -> PointerPosition {
        self.tracker.borrow().position()
    }
}

impl Drop for PointerTracker {
    fn drop(&mut self) {
        let _ = self.target.remove_event_listener_with_callback(
            "mousemove",
            self.listener.as_ref().unchecked_ref(),
        );
    }
}
