use crate::foundation::{
    core::{Rect, Viewport},
    error::{VitrineError, VitrineResult},
};

/// Geometry of the fixed hero and the scrolling panel at one scroll offset.
///
/// The panel starts one viewport height below the top of the document, so at
/// rest it sits just below the fold and the hero is fully visible. All
/// coordinates are in viewport space.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct ScrollState {
    pub viewport: Viewport,
    pub scroll_px: f64,
    /// Total panel height in pixels (content-dependent).
    pub panel_height_px: f64,
}

impl ScrollState {
    pub fn at(viewport: Viewport, scroll_px: f64, panel_height_px: f64) -> VitrineResult<Self> {
        if !scroll_px.is_finite() || scroll_px < 0.0 {
            return Err(VitrineError::layout("scroll offset must be finite and >= 0"));
        }
        if !panel_height_px.is_finite() || panel_height_px <= 0.0 {
            return Err(VitrineError::layout("panel height must be > 0"));
        }
        Ok(Self {
            viewport,
            scroll_px: scroll_px.min(Self::max_scroll(panel_height_px)),
            panel_height_px,
        })
    }

    /// Document height minus viewport height.
    ///
    /// The document is one viewport of spacer plus the panel, so the panel
    /// bottom can reach the bottom of the viewport and no further.
    pub fn max_scroll(panel_height_px: f64) -> f64 {
        panel_height_px.max(0.0)
    }

    /// Panel top edge in viewport space.
    pub fn panel_top(&self) -> f64 {
        f64::from(self.viewport.height) - self.scroll_px
    }

    /// Whole panel box in viewport space (may extend past the viewport).
    pub fn panel_rect(&self) -> Rect {
        let top = self.panel_top();
        Rect::new(
            0.0,
            top,
            f64::from(self.viewport.width),
            top + self.panel_height_px,
        )
    }

    /// Part of the viewport covered by the panel, if any.
    pub fn panel_visible_rect(&self) -> Option<Rect> {
        let vis = self.panel_rect().intersect(self.viewport.rect());
        if vis.width() <= 0.0 || vis.height() <= 0.0 {
            return None;
        }
        Some(vis)
    }

    /// Part of the viewport where the hero shows unobstructed.
    pub fn hero_uncovered_rect(&self) -> Rect {
        let vp = self.viewport.rect();
        let bottom = self.panel_top().clamp(0.0, vp.y1);
        Rect::new(vp.x0, vp.y0, vp.x1, bottom)
    }

    /// Fraction of the viewport area covered by the panel, in `[0, 1]`.
    pub fn covered_fraction(&self) -> f64 {
        self.panel_visible_rect()
            .map(|r| r.height() / f64::from(self.viewport.height))
            .unwrap_or(0.0)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/scroll.rs"]
mod tests;
