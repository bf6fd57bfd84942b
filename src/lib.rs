//! Vitrine generates a single-page researcher portfolio as static HTML + CSS.
//!
//! The page is a fixed hero (heading, tagline, links and a looping background
//! video) with a content panel that scrolls over it. The panel blends with the
//! hero through a breakpoint-dependent translucency gradient over a blurred
//! backdrop. A decorative border traces itself once on load and fades.
//!
//! # Pipeline overview
//!
//! 1. **Load**: [`Portfolio`] from JSON or [`PortfolioBuilder`], then [`Portfolio::validate`]
//! 2. **Describe**: [`describe`] maps each [`Breakpoint`] to a [`RenderDescriptor`] (pure)
//! 3. **Emit**: [`render_page`] produces a [`Page`] (`index.html` + `style.css`)
//! 4. **Build**: [`build_site`] writes the page, skipping files whose content is unchanged
//! 5. **Preview**: [`render_preview`] rasterizes the composition at a viewport,
//!    scroll offset and time since load into a [`FrameRGBA`]
//!
//! The generated page carries no script: breakpoints are media queries and the
//! entrance effects are one-shot CSS animations. Markup is written as `leptos`
//! components and server-rendered once per build.
#![forbid(unsafe_code)]

mod animation;
mod content;
mod foundation;
mod layout;
mod markup;
mod render;
mod site;

pub use animation::ease::Ease;
pub use animation::entrance::{EntranceAnimation, EntranceConfig, EntranceSample, Keyframes};
pub use content::dsl::{PortfolioBuilder, project, publication};
pub use content::model::{
    About, Author, EducationEntry, EntryBody, Footer, Hero, HeroArrangement, Icon, ImageRef,
    PageConfig, Portfolio, PressMention, ProjectEntry, PublicationEntry, Resume, ResumeEntry,
    ResumeSection, RichText, SocialLinkEntry, TalkLink, TalkSeries, Theme, VariantConfig,
    VideoRef,
};
pub use foundation::core::{Affine, Point, Rect, Rgba8, Vec2, Viewport};
pub use foundation::error::{VitrineError, VitrineResult};
pub use layout::blend::{GlassBlend, GradientDirection, GradientStop};
pub use layout::breakpoint::{Breakpoint, BreakpointRule};
pub use layout::descriptor::{
    HeroBoxes, RenderDescriptor, describe, describe_all, describe_for_width,
};
pub use layout::scroll::ScrollState;
pub use markup::icons::{Glyph, GlyphProps};
pub use markup::page::{Page, STYLESHEET_HREF, current_year, render_page, render_page_for_year};
pub use markup::style::{GLASS_PANEL_CLASS, stylesheet};
pub use markup::templates::{
    EXTERNAL_REL, ExternalLink, ExternalLinkProps, ResumeItem, ResumeItemProps, SocialLink,
    SocialLinkProps, render_html,
};
pub use render::assets::{AssetRoot, DecodedImage};
pub use render::frame::FrameRGBA;
pub use render::preview::{PreviewRequest, render_preview};
pub use site::build::{BuildOptions, BuildReport, INDEX_FILE, build_site};
pub use site::fingerprint::{ContentFingerprint, fingerprint_bytes};
