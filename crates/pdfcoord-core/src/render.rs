//! Render sequencing
//!
//! Each load-render invocation takes a [`RenderTicket`]. A newer invocation
//! supersedes every older one: stale invocations must stop at their next
//! suspension point, and anything they try to commit is discarded.

use serde::Serialize;

use crate::error::ViewerError;
use crate::geometry::{PageSize, SurfaceFit, SurfaceSize, Viewport};

/// Token identifying one load-render invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct RenderTicket(u64);

impl RenderTicket {
    pub fn id(&self) -> u64 {
        self.0
    }
}

/// The only page the viewer renders (1-indexed)
pub const RENDERED_PAGE: u32 = 1;

/// Summary of a successfully rendered page
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedPage {
    pub page_count: u32,
    pub intrinsic: PageSize,
    pub scale: f64,
    pub viewport: Viewport,
    pub surface: SurfaceSize,
    pub fit: SurfaceFit,
}

impl RenderedPage {
    pub fn new(
        page_count: u32,
        intrinsic: PageSize,
        viewport: Viewport,
        surface: SurfaceSize,
    ) -> Self {
        let fit = SurfaceFit::classify(&viewport, &surface);
        Self {
            page_count,
            intrinsic,
            scale: viewport.scale,
            viewport,
            surface,
            fit,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum RenderState {
    Idle,
    Loading { url: String, ticket: u64 },
    Rendered { url: String, page: RenderedPage },
    Failed { url: String, message: String },
}

impl RenderState {
    pub fn url(&self) -> Option<&str> {
        match self {
            RenderState::Idle => None,
            RenderState::Loading { url, .. }
            | RenderState::Rendered { url, .. }
            | RenderState::Failed { url, .. } => Some(url),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, RenderState::Loading { .. })
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            RenderState::Failed { message, .. } => Some(message),
            _ => None,
        }
    }
}

/// Outcome of committing an invocation's result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commit {
    Applied,
    /// A newer invocation exists; the result was dropped
    Superseded,
}

/// Hands out render tickets and owns the render state
#[derive(Debug)]
pub struct RenderSequencer {
    latest: u64,
    state: RenderState,
}

impl RenderSequencer {
    pub fn new() -> Self {
        Self {
            latest: 0,
            state: RenderState::Idle,
        }
    }

    /// Start a new invocation for `url`, superseding any in flight
    pub fn begin(&mut self, url: &str) -> RenderTicket {
        if self.state.is_loading() {
            tracing::debug!(superseded = self.latest, "superseding in-flight render");
        }
        self.latest += 1;
        self.state = RenderState::Loading {
            url: url.to_string(),
            ticket: self.latest,
        };
        RenderTicket(self.latest)
    }

    pub fn is_current(&self, ticket: RenderTicket) -> bool {
        ticket.0 == self.latest
    }

    /// Record the result of an invocation if it is still current
    pub fn complete(
        &mut self,
        ticket: RenderTicket,
        result: Result<RenderedPage, ViewerError>,
    ) -> Commit {
        if !self.is_current(ticket) {
            tracing::warn!(
                ticket = ticket.0,
                latest = self.latest,
                "discarding result of superseded render"
            );
            return Commit::Superseded;
        }

        let url = self.state.url().unwrap_or_default().to_string();
        self.state = match result {
            Ok(page) => {
                if !page.fit.is_exact() {
                    tracing::warn!(fit = ?page.fit, "page is not A4-proportioned");
                }
                RenderState::Rendered { url, page }
            }
            Err(err) => RenderState::Failed {
                url,
                message: err.to_string(),
            },
        };
        Commit::Applied
    }

    pub fn state(&self) -> &RenderState {
        &self.state
    }
}

impl Default for RenderSequencer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::RenderPlan;
    use pretty_assertions::assert_eq;

    fn letter_page() -> RenderedPage {
        let intrinsic = PageSize::new(612.0, 792.0);
        let plan = RenderPlan::for_page(intrinsic, SurfaceSize::a4()).unwrap();
        RenderedPage::new(3, intrinsic, plan.viewport, plan.surface)
    }

    #[test]
    fn test_initial_state_is_idle() {
        let seq = RenderSequencer::new();
        assert_eq!(seq.state(), &RenderState::Idle);
    }

    #[test]
    fn test_begin_enters_loading() {
        let mut seq = RenderSequencer::new();
        let ticket = seq.begin("a.pdf");
        assert_eq!(ticket.id(), 1);
        assert_eq!(
            seq.state(),
            &RenderState::Loading {
                url: "a.pdf".to_string(),
                ticket: 1
            }
        );
    }

    #[test]
    fn test_complete_applies_current() {
        let mut seq = RenderSequencer::new();
        let ticket = seq.begin("a.pdf");
        assert_eq!(seq.complete(ticket, Ok(letter_page())), Commit::Applied);
        match seq.state() {
            RenderState::Rendered { url, page } => {
                assert_eq!(url, "a.pdf");
                assert_eq!(page.page_count, 3);
                assert!(matches!(page.fit, SurfaceFit::Padded { .. }));
            }
            other => panic!("unexpected state {:?}", other),
        }
    }

    #[test]
    fn test_stale_result_is_discarded() {
        let mut seq = RenderSequencer::new();
        let old = seq.begin("old.pdf");
        let new = seq.begin("new.pdf");

        assert!(!seq.is_current(old));
        assert_eq!(seq.complete(old, Ok(letter_page())), Commit::Superseded);
        assert!(seq.state().is_loading());
        assert_eq!(seq.state().url(), Some("new.pdf"));

        assert_eq!(seq.complete(new, Ok(letter_page())), Commit::Applied);
        assert_eq!(seq.state().url(), Some("new.pdf"));
    }

    #[test]
    fn test_stale_failure_does_not_clobber_success() {
        let mut seq = RenderSequencer::new();
        let old = seq.begin("old.pdf");
        let new = seq.begin("new.pdf");
        seq.complete(new, Ok(letter_page()));

        let commit = seq.complete(old, Err(ViewerError::Load("network".into())));
        assert_eq!(commit, Commit::Superseded);
        assert!(matches!(seq.state(), RenderState::Rendered { .. }));
    }

    #[test]
    fn test_failure_is_recorded() {
        let mut seq = RenderSequencer::new();
        let ticket = seq.begin("broken.pdf");
        seq.complete(ticket, Err(ViewerError::Load("Invalid PDF structure".into())));
        assert_eq!(
            seq.state().error(),
            Some("Failed to load PDF: Invalid PDF structure")
        );
        assert_eq!(seq.state().url(), Some("broken.pdf"));
    }

    #[test]
    fn test_state_serializes_with_status_tag() {
        let mut seq = RenderSequencer::new();
        let ticket = seq.begin("a.pdf");
        seq.complete(ticket, Err(ViewerError::NoPages));
        let json = serde_json::to_value(seq.state()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "status": "failed",
                "url": "a.pdf",
                "message": "PDF has no pages"
            })
        );
    }
}
