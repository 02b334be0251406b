//! Core logic for the A4 PDF coordinate viewer
//!
//! This crate has no browser dependencies. It computes page scale and
//! surface fit, sequences load-render invocations, lays out the crosshair
//! overlay and formats clipboard text. The wasm app drives it from DOM
//! events and pdf.js.

pub mod clipboard;
pub mod config;
pub mod error;
pub mod geometry;
pub mod notification;
pub mod overlay;
pub mod render;

pub use clipboard::clipboard_text;
pub use config::ViewerConfig;
pub use error::ViewerError;
pub use geometry::{
    fit_scale, PageSize, RenderPlan, SurfaceFit, SurfaceSize, Viewport, A4_HEIGHT, A4_WIDTH,
};
pub use notification::{Notification, NotificationKind};
pub use overlay::{
    css_px, js_round, ContainerRect, OverlayLayout, OverlayTracker, PointerPosition,
};
pub use render::{
    Commit, RenderSequencer, RenderState, RenderTicket, RenderedPage, RENDERED_PAGE,
};
