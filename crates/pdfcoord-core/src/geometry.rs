//! Page and surface geometry
//!
//! Pages are fitted to a fixed target width. The drawing surface keeps its
//! A4 size no matter what the page looks like, so pages with another aspect
//! ratio end up cropped or padded at the bottom.

use serde::{Deserialize, Serialize};

use crate::error::ViewerError;

/// A4 width in CSS pixels (210mm at 96 DPI)
pub const A4_WIDTH: f64 = 595.276;

/// A4 height in CSS pixels (297mm at 96 DPI)
pub const A4_HEIGHT: f64 = 841.89;

/// Height difference (px) still treated as an exact fit
const FIT_TOLERANCE: f64 = 1.0;

/// Compute the uniform scale mapping `intrinsic_width` onto `target_width`
pub fn fit_scale(target_width: f64, intrinsic_width: f64) -> Result<f64, ViewerError> {
    if !intrinsic_width.is_finite() || intrinsic_width <= 0.0 {
        return Err(ViewerError::InvalidPageWidth(intrinsic_width));
    }
    if !target_width.is_finite() || target_width <= 0.0 {
        return Err(ViewerError::Config(format!(
            "target width must be positive, got {}",
            target_width
        )));
    }

    let scale = target_width / intrinsic_width;
    tracing::debug!(target_width, intrinsic_width, scale, "computed fit scale");
    Ok(scale)
}

/// Page dimensions at scale 1, in PDF points
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PageSize {
    pub width: f64,
    pub height: f64,
}

impl PageSize {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Rendering transform for a page at a given scale
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub scale: f64,
    /// Rotation in degrees (0, 90, 180, 270)
    #[serde(default)]
    pub rotation: i32,
}

impl Viewport {
    /// Derive the viewport of a page (given at scale 1) at `scale`
    pub fn at_scale(page: PageSize, scale: f64) -> Self {
        Self {
            width: page.width * scale,
            height: page.height * scale,
            scale,
            rotation: 0,
        }
    }
}

/// Fixed drawing surface the page is rasterized into
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SurfaceSize {
    pub width: f64,
    pub height: f64,
}

impl SurfaceSize {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn a4() -> Self {
        Self::new(A4_WIDTH, A4_HEIGHT)
    }

    /// Backing-store size of a canvas with this CSS size.
    ///
    /// Canvas pixel dimensions are unsigned integers, assigning 595.276
    /// stores 595.
    pub fn canvas_pixels(&self) -> (u32, u32) {
        (self.width.max(0.0) as u32, self.height.max(0.0) as u32)
    }
}

impl Default for SurfaceSize {
    fn default() -> Self {
        Self::a4()
    }
}

/// How a scaled page sits on the surface
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum SurfaceFit {
    Exact,
    /// Page is taller than the surface, `overflow` px are cut off at the bottom
    Cropped { overflow: f64 },
    /// Page is shorter than the surface, `gap` px stay blank at the bottom
    Padded { gap: f64 },
}

impl SurfaceFit {
    pub fn classify(viewport: &Viewport, surface: &SurfaceSize) -> Self {
        let delta = viewport.height - surface.height;
        if delta.abs() <= FIT_TOLERANCE {
            SurfaceFit::Exact
        } else if delta > 0.0 {
            SurfaceFit::Cropped { overflow: delta }
        } else {
            SurfaceFit::Padded { gap: -delta }
        }
    }

    pub fn is_exact(&self) -> bool {
        matches!(self, SurfaceFit::Exact)
    }
}

/// Scale and expected viewport for rendering a page onto a surface
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderPlan {
    pub scale: f64,
    pub viewport: Viewport,
    pub surface: SurfaceSize,
}

impl RenderPlan {
    pub fn for_page(page: PageSize, surface: SurfaceSize) -> Result<Self, ViewerError> {
        let scale = fit_scale(surface.width, page.width)?;
        Ok(Self {
            scale,
            viewport: Viewport::at_scale(page, scale),
            surface,
        })
    }

    pub fn fit(&self) -> SurfaceFit {
        SurfaceFit::classify(&self.viewport, &self.surface)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_scale_letter() {
        let scale = fit_scale(A4_WIDTH, 612.0).unwrap();
        assert!((scale - 0.972673).abs() < 1e-6);
        assert!((scale * 612.0 - A4_WIDTH).abs() < 1e-9);
    }

    #[test]
    fn test_fit_scale_a4_points_is_identity() {
        let scale = fit_scale(A4_WIDTH, A4_WIDTH).unwrap();
        assert_eq!(scale, 1.0);
    }

    #[test]
    fn test_fit_scale_rejects_bad_width() {
        assert_eq!(
            fit_scale(A4_WIDTH, 0.0),
            Err(ViewerError::InvalidPageWidth(0.0))
        );
        assert_eq!(
            fit_scale(A4_WIDTH, -10.0),
            Err(ViewerError::InvalidPageWidth(-10.0))
        );
        assert!(fit_scale(A4_WIDTH, f64::NAN).is_err());
        assert!(fit_scale(A4_WIDTH, f64::INFINITY).is_err());
    }

    #[test]
    fn test_fit_scale_rejects_bad_target() {
        assert!(matches!(
            fit_scale(0.0, 612.0),
            Err(ViewerError::Config(_))
        ));
    }

    #[test]
    fn test_viewport_at_scale() {
        let vp = Viewport::at_scale(PageSize::new(612.0, 792.0), 1.5);
        assert_eq!(vp.width, 918.0);
        assert_eq!(vp.height, 1188.0);
        assert_eq!(vp.scale, 1.5);
        assert_eq!(vp.rotation, 0);
    }

    #[test]
    fn test_canvas_pixels_truncate() {
        assert_eq!(SurfaceSize::a4().canvas_pixels(), (595, 841));
    }

    #[test]
    fn test_surface_fit_a4_page_is_exact() {
        let plan = RenderPlan::for_page(PageSize::new(595.0, 842.0), SurfaceSize::a4()).unwrap();
        assert!(plan.fit().is_exact());
    }

    #[test]
    fn test_surface_fit_letter_is_padded() {
        // 792 * (595.276 / 612) = 770.36
        let plan = RenderPlan::for_page(PageSize::new(612.0, 792.0), SurfaceSize::a4()).unwrap();
        match plan.fit() {
            SurfaceFit::Padded { gap } => assert!((gap - 71.53).abs() < 0.01),
            other => panic!("expected padded, got {:?}", other),
        }
    }

    #[test]
    fn test_surface_fit_legal_is_cropped() {
        // 1008 * (595.276 / 612) = 980.46
        let plan = RenderPlan::for_page(PageSize::new(612.0, 1008.0), SurfaceSize::a4()).unwrap();
        match plan.fit() {
            SurfaceFit::Cropped { overflow } => assert!((overflow - 138.57).abs() < 0.01),
            other => panic!("expected cropped, got {:?}", other),
        }
    }
}
