use crate::{
    content::model::{HeroArrangement, PageConfig, VideoRef},
    foundation::core::{Rect, Viewport},
    layout::blend::GlassBlend,
    layout::breakpoint::Breakpoint,
};

/// Everything that differs between device classes, resolved from config.
///
/// Markup and stylesheet generation map [`Breakpoint::ALL`] through
/// [`describe`] instead of duplicating the hero per device class.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct RenderDescriptor {
    pub breakpoint: Breakpoint,
    /// `None` for the mobile-first base rules.
    pub media: Option<String>,
    pub arrangement: HeroArrangement,
    pub video: VideoRef,
    pub video_rotation_deg: f64,
    pub blend: GlassBlend,
}

pub fn describe(breakpoint: Breakpoint, config: &PageConfig) -> RenderDescriptor {
    let variant = config.variant(breakpoint);
    RenderDescriptor {
        breakpoint,
        media: config.breakpoint.media_condition(breakpoint),
        arrangement: variant.arrangement,
        video: variant.video.clone(),
        video_rotation_deg: variant.video_rotation_deg,
        blend: variant.blend.clone(),
    }
}

/// Descriptor for a concrete viewport width.
pub fn describe_for_width(width_px: u32, config: &PageConfig) -> RenderDescriptor {
    describe(Breakpoint::classify(width_px, &config.breakpoint), config)
}

/// All descriptors in stylesheet order.
pub fn describe_all(config: &PageConfig) -> Vec<RenderDescriptor> {
    Breakpoint::ALL
        .iter()
        .map(|&bp| describe(bp, config))
        .collect()
}

/// Hero boxes in viewport space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeroBoxes {
    /// Box the video is clipped to.
    pub video: Rect,
    /// Box holding heading, tagline and links.
    pub text: Rect,
}

impl RenderDescriptor {
    pub fn hero_boxes(&self, viewport: Viewport) -> HeroBoxes {
        let w = f64::from(viewport.width);
        let h = f64::from(viewport.height);
        match self.arrangement {
            HeroArrangement::Stacked { video_band_vh } => {
                let band = viewport.vh(video_band_vh);
                HeroBoxes {
                    video: Rect::new(0.0, 0.0, w, band),
                    text: Rect::new(0.0, band, w, h),
                }
            }
            HeroArrangement::Columns => {
                let mid = w / 2.0;
                HeroBoxes {
                    video: Rect::new(mid, 0.0, w, h),
                    text: Rect::new(0.0, 0.0, mid, h),
                }
            }
        }
    }

    /// Whether the video block precedes the text block in document order.
    pub fn video_leads(&self) -> bool {
        matches!(self.arrangement, HeroArrangement::Stacked { .. })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/descriptor.rs"]
mod tests;
