use std::path::Path;

use anyhow::Context as _;

use crate::{
    animation::entrance::EntranceConfig,
    foundation::core::Rgba8,
    foundation::error::{VitrineError, VitrineResult},
    layout::blend::GlassBlend,
    layout::breakpoint::{Breakpoint, BreakpointRule},
};

/// A complete portfolio page: literal content plus presentation config.
///
/// A portfolio is a pure data model that can be:
/// - built programmatically (see [`crate::PortfolioBuilder`])
/// - serialized/deserialized via Serde (JSON)
///
/// It is immutable for the life of a render; [`crate::render_page`] turns it
/// into markup and [`crate::render_preview`] into pixels.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Portfolio {
    /// Document `<title>`; falls back to the hero heading.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub hero: Hero,
    #[serde(default)]
    pub publications: Vec<PublicationEntry>,
    #[serde(default)]
    pub projects: Vec<ProjectEntry>,
    #[serde(default)]
    pub resume: Resume,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub about: Option<About>,
    pub footer: Footer,
    #[serde(default)]
    pub config: PageConfig,
}

/// Full-viewport introduction shown behind the scrolling panel.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Hero {
    pub heading: String,
    #[serde(default)]
    pub tagline: Vec<RichText>,
    #[serde(default)]
    pub links: Vec<SocialLinkEntry>,
}

/// Inline run of tagline text.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum RichText {
    Plain(String),
    Emphasis(String),
    /// Paragraph break.
    Break,
}

/// Symbolic icon reference, rendered as an inline SVG glyph.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Icon {
    Scholar,
    GitHub,
    LinkedIn,
    Mail,
    FileText,
    Code,
    MapPin,
    ChevronDown,
    User,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SocialLinkEntry {
    pub icon: Icon,
    pub label: String,
    /// Passed through uninterpreted; may be a URL or a `mailto:` address.
    pub href: String,
}

impl SocialLinkEntry {
    pub fn new(icon: Icon, label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            icon,
            label: label.into(),
            href: href.into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Author {
    pub name: String,
    /// Rendered bold (the page owner).
    #[serde(default)]
    pub highlight: bool,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PublicationEntry {
    pub year: String,
    pub title: String,
    pub href: String,
    #[serde(default)]
    pub authors: Vec<Author>,
    /// Appended after the author list, e.g. "et al.".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authors_suffix: Option<String>,
    pub venue: String,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ProjectEntry {
    pub title: String,
    pub href: String,
    /// Language/tag badge.
    pub tag: String,
    pub description: String,
}

/// Two-column resume block.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Resume {
    #[serde(default)]
    pub education: Vec<EducationEntry>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub press: Vec<PressMention>,
    #[serde(default)]
    pub talks: Vec<TalkSeries>,
    /// Right column, e.g. research experience, teaching, writing.
    #[serde(default)]
    pub sections: Vec<ResumeSection>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct EducationEntry {
    pub institution: String,
    pub degree: String,
    pub years: String,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PressMention {
    pub title: String,
    pub outlet: String,
    pub href: String,
}

/// Talks or posters at one venue, one link per year.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TalkSeries {
    pub venue: String,
    #[serde(default)]
    pub links: Vec<TalkLink>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TalkLink {
    pub label: String,
    pub href: String,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ResumeSection {
    pub heading: String,
    /// Display order is input order.
    #[serde(default)]
    pub entries: Vec<ResumeEntry>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ResumeEntry {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    /// Opaque label; never parsed.
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default)]
    pub body: EntryBody,
}

impl ResumeEntry {
    pub fn new(title: impl Into<String>, date: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            subtitle: None,
            date: date.into(),
            location: None,
            body: EntryBody::default(),
        }
    }

    pub fn subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn paragraph(mut self, text: impl Into<String>) -> Self {
        self.body = EntryBody::Paragraph(text.into());
        self
    }

    pub fn bullets<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.body = EntryBody::Bullets(items.into_iter().map(Into::into).collect());
        self
    }

    pub fn validate(&self) -> VitrineResult<()> {
        if self.title.trim().is_empty() {
            return Err(VitrineError::validation("resume entry title must be non-empty"));
        }
        if self.date.trim().is_empty() {
            return Err(VitrineError::validation(format!(
                "resume entry '{}' must have a date label",
                self.title
            )));
        }
        Ok(())
    }
}

/// Free-form body of a resume entry.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum EntryBody {
    #[default]
    Empty,
    Paragraph(String),
    Bullets(Vec<String>),
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct About {
    pub portrait: ImageRef,
    #[serde(default)]
    pub paragraphs: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ImageRef {
    pub src: String,
    pub alt: String,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Footer {
    pub owner: String,
    /// Copyright year; the build resolves the current year when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    #[serde(default = "default_rights")]
    pub rights: String,
    /// Monospace caption describing the background simulation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
}

fn default_rights() -> String {
    "All rights reserved.".to_string()
}

/// Presentation configuration: breakpoint, per-variant hero/blend and motion.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PageConfig {
    #[serde(default)]
    pub breakpoint: BreakpointRule,
    #[serde(default = "VariantConfig::narrow_default")]
    pub narrow: VariantConfig,
    #[serde(default = "VariantConfig::wide_default")]
    pub wide: VariantConfig,
    #[serde(default)]
    pub entrance: EntranceConfig,
    #[serde(default)]
    pub theme: Theme,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            breakpoint: BreakpointRule::default(),
            narrow: VariantConfig::narrow_default(),
            wide: VariantConfig::wide_default(),
            entrance: EntranceConfig::default(),
            theme: Theme::default(),
        }
    }
}

impl PageConfig {
    pub fn variant(&self, bp: Breakpoint) -> &VariantConfig {
        match bp {
            Breakpoint::Narrow => &self.narrow,
            Breakpoint::Wide => &self.wide,
        }
    }

    pub fn validate(&self) -> VitrineResult<()> {
        self.breakpoint.validate().map_err(VitrineError::validation)?;
        for bp in Breakpoint::ALL {
            self.variant(bp)
                .validate()
                .map_err(|e| VitrineError::validation(format!("{} variant: {e}", bp.name())))?;
        }
        self.entrance.validate().map_err(VitrineError::validation)?;
        self.theme.validate()
    }
}

/// Hero layout of one device class.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum HeroArrangement {
    /// Video band on top (`video_band_vh` tall), text below.
    Stacked { video_band_vh: f64 },
    /// Text in the left column, video in the right column.
    Columns,
}

/// Looping background video of one device class.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct VideoRef {
    pub src: String,
    #[serde(default = "default_video_mime")]
    pub mime: String,
    /// Still frame used by the preview compositor in place of the video.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preview_frame: Option<String>,
}

fn default_video_mime() -> String {
    "video/mp4".to_string()
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct VariantConfig {
    pub arrangement: HeroArrangement,
    pub video: VideoRef,
    #[serde(default)]
    pub video_rotation_deg: f64,
    pub blend: GlassBlend,
}

impl VariantConfig {
    pub fn narrow_default() -> Self {
        Self {
            arrangement: HeroArrangement::Stacked {
                video_band_vh: 35.0,
            },
            video: VideoRef {
                src: "/simulation_mobile_4000kbps.mp4".to_string(),
                mime: default_video_mime(),
                preview_frame: None,
            },
            video_rotation_deg: 0.0,
            blend: GlassBlend::narrow_default(),
        }
    }

    pub fn wide_default() -> Self {
        Self {
            arrangement: HeroArrangement::Columns,
            video: VideoRef {
                src: "/simulation2_4000kbps.mp4".to_string(),
                mime: default_video_mime(),
                preview_frame: None,
            },
            video_rotation_deg: 90.0,
            blend: GlassBlend::wide_default(),
        }
    }

    fn validate(&self) -> Result<(), String> {
        if let HeroArrangement::Stacked { video_band_vh } = self.arrangement
            && (!video_band_vh.is_finite() || !(0.0..=100.0).contains(&video_band_vh))
        {
            return Err("video_band_vh must be within [0, 100]".to_string());
        }
        if self.video.src.trim().is_empty() {
            return Err("video src must be non-empty".to_string());
        }
        if !self.video_rotation_deg.is_finite() {
            return Err("video rotation must be finite".to_string());
        }
        self.blend.validate()
    }
}

/// Color and frame tokens.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Theme {
    pub background: Rgba8,
    /// Shown where the narrow video would be when playback is blocked.
    pub hero_fallback: Rgba8,
    pub text: Rgba8,
    pub muted: Rgba8,
    pub divider: Rgba8,
    pub footer_background: Rgba8,
    pub border_stroke: Rgba8,
    pub border_inset_px: f64,
    pub border_stroke_width: f64,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: Rgba8::opaque(250, 250, 249),
            hero_fallback: Rgba8::opaque(245, 245, 244),
            text: Rgba8::opaque(28, 25, 23),
            muted: Rgba8::opaque(87, 83, 78),
            divider: Rgba8::opaque(214, 211, 209),
            footer_background: Rgba8::opaque(28, 25, 23),
            border_stroke: Rgba8::opaque(87, 83, 78),
            border_inset_px: 16.0,
            border_stroke_width: 2.0,
        }
    }
}

impl Theme {
    fn validate(&self) -> VitrineResult<()> {
        if !self.border_inset_px.is_finite() || self.border_inset_px < 0.0 {
            return Err(VitrineError::validation("border inset must be >= 0"));
        }
        if !self.border_stroke_width.is_finite() || self.border_stroke_width <= 0.0 {
            return Err(VitrineError::validation("border stroke width must be > 0"));
        }
        Ok(())
    }
}

impl Portfolio {
    pub fn from_json_str(s: &str) -> VitrineResult<Self> {
        let portfolio: Self = serde_json::from_str(s)?;
        Ok(portfolio)
    }

    pub fn from_path(path: &Path) -> VitrineResult<Self> {
        let s = std::fs::read_to_string(path)
            .with_context(|| format!("read portfolio json '{}'", path.display()))?;
        Self::from_json_str(&s)
    }

    pub fn to_json_pretty(&self) -> VitrineResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn page_title(&self) -> &str {
        self.title.as_deref().unwrap_or(&self.hero.heading)
    }

    /// Every resume entry in display order, across sections.
    pub fn resume_entries(&self) -> impl Iterator<Item = &ResumeEntry> {
        self.resume.sections.iter().flat_map(|s| s.entries.iter())
    }

    /// Structural checks only: URLs and date labels are never interpreted.
    pub fn validate(&self) -> VitrineResult<()> {
        if self.hero.heading.trim().is_empty() {
            return Err(VitrineError::validation("hero heading must be non-empty"));
        }
        for link in &self.hero.links {
            if link.label.trim().is_empty() {
                return Err(VitrineError::validation("social link label must be non-empty"));
            }
        }
        for section in &self.resume.sections {
            if section.heading.trim().is_empty() {
                return Err(VitrineError::validation("resume section heading must be non-empty"));
            }
            for entry in &section.entries {
                entry.validate()?;
            }
        }
        if self.footer.owner.trim().is_empty() {
            return Err(VitrineError::validation("footer owner must be non-empty"));
        }
        self.config.validate()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/content/model.rs"]
mod tests;
