//! Crosshair overlay geometry
//!
//! Converts pointer events (viewport/client coordinates) into container-local
//! positions and derives where the two guide lines and the coordinate label
//! go. Nothing here touches the DOM; the web crate applies the layout.

use serde::{Deserialize, Serialize};

/// Distance (px) between the pointer and the label's top-left corner
pub const DEFAULT_LABEL_OFFSET: f64 = 10.0;

/// Round the way browsers' `Math.round` does: halves go towards +infinity.
///
/// `f64::round` rounds halves away from zero, which disagrees for negative
/// halves (`-2.5` -> `-3` instead of `-2`).
pub fn js_round(value: f64) -> f64 {
    let floor = value.floor();
    let rounded = if value - floor >= 0.5 { floor + 1.0 } else { floor };
    // collapse -0.0
    rounded + 0.0
}

/// Format a pixel value the way JS string conversion prints it (`320`,
/// `100.4`, `-0` as `0`).
///
/// Agrees with JS for magnitudes in `[1e-6, 1e21)`. Outside that range JS
/// switches to exponent notation and this keeps plain decimals.
pub fn js_number(value: f64) -> String {
    format!("{}", value + 0.0)
}

/// Format a CSS pixel length (`100.4px`)
pub fn css_px(value: f64) -> String {
    format!("{}px", js_number(value))
}

/// Pointer position in container-local CSS pixels
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PointerPosition {
    pub x: f64,
    pub y: f64,
}

impl PointerPosition {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Label text: `X: {round(x)}, Y: {round(y)}`
    pub fn label(&self) -> String {
        format!(
            "X: {}, Y: {}",
            js_number(js_round(self.x)),
            js_number(js_round(self.y))
        )
    }
}

/// Bounding rectangle of the tracked container, in client coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ContainerRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl ContainerRect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Convert a client (viewport) point into container-local coordinates.
    ///
    /// No clamping: points outside the rectangle produce negative or
    /// oversized values.
    pub fn local_position(&self, client_x: f64, client_y: f64) -> PointerPosition {
        PointerPosition::new(client_x - self.left, client_y - self.top)
    }
}

/// Where the overlay elements go for one pointer position
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverlayLayout {
    /// `left` of the vertical guide line
    pub vertical_line_left: f64,
    /// `top` of the horizontal guide line
    pub horizontal_line_top: f64,
    pub label_left: f64,
    pub label_top: f64,
    pub label_text: String,
}

impl OverlayLayout {
    pub fn for_position(position: PointerPosition, label_offset: f64) -> Self {
        Self {
            vertical_line_left: position.x,
            horizontal_line_top: position.y,
            label_left: position.x + label_offset,
            label_top: position.y + label_offset,
            label_text: position.label(),
        }
    }
}

/// Holds the current crosshair position.
///
/// Every pointer move replaces the position; there is no throttling or
/// smoothing, so one layout is produced per event.
#[derive(Debug, Clone)]
pub struct OverlayTracker {
    position: PointerPosition,
    label_offset: f64,
}

impl OverlayTracker {
    pub fn new(label_offset: f64) -> Self {
        Self {
            position: PointerPosition::default(),
            label_offset,
        }
    }

    pub fn position(&self) -> PointerPosition {
        self.position
    }

    /// Layout for the current position
    pub fn layout(&self) -> OverlayLayout {
        OverlayLayout::for_position(self.position, self.label_offset)
    }

    /// Record a pointer move reported in client coordinates
    pub fn pointer_moved(
        &mut self,
        rect: &ContainerRect,
        client_x: f64,
        client_y: f64,
    ) -> OverlayLayout {
        self.position = rect.local_position(client_x, client_y);
        self.layout()
    }

    pub fn reset(&mut self) {
        self.position = PointerPosition::default();
    }
}

impl Default for OverlayTracker {
    fn default() -> Self {
        Self::new(DEFAULT_LABEL_OFFSET)
    }
}
