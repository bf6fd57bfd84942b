use std::fmt::Write as _;

use crate::{
    animation::entrance::Keyframes,
    content::model::{HeroArrangement, Icon, Portfolio, Theme},
    foundation::{
        core::{Affine, Point, Rect, Vec2, Viewport},
        error::{VitrineError, VitrineResult},
    },
    layout::{
        descriptor::{RenderDescriptor, describe_for_width},
        scroll::ScrollState,
    },
    markup::{icons::path_data, page::tagline_plain},
    render::{
        assets::{AssetRoot, DecodedImage},
        blur::blur_region,
        composite::{blit, fill_rect, fill_rect_with, over, pixel_span},
        frame::FrameRGBA,
        raster::{escape_xml, rasterize_str},
    },
};

/// One instant of the page as a visitor would see it.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PreviewRequest {
    pub viewport: Viewport,
    /// Vertical scroll offset in pixels.
    #[serde(default)]
    pub scroll_px: f64,
    /// Seconds since the page was first displayed.
    #[serde(default)]
    pub time_s: f64,
    /// Rendered panel height; defaults to four viewport heights.
    #[serde(default)]
    pub panel_height_px: Option<f64>,
}

impl PreviewRequest {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            scroll_px: 0.0,
            time_s: 0.0,
            panel_height_px: None,
        }
    }

    pub fn scroll(mut self, scroll_px: f64) -> Self {
        self.scroll_px = scroll_px;
        self
    }

    pub fn time(mut self, time_s: f64) -> Self {
        self.time_s = time_s;
        self
    }

    pub fn panel_height(mut self, panel_height_px: f64) -> Self {
        self.panel_height_px = Some(panel_height_px);
        self
    }

    pub fn resolved_panel_height(&self) -> f64 {
        self.panel_height_px
            .unwrap_or_else(|| 4.0 * f64::from(self.viewport.height))
    }

    /// Largest scroll offset the document allows.
    pub fn max_scroll(&self) -> f64 {
        ScrollState::max_scroll(self.resolved_panel_height())
    }
}

/// Rasterize the page composition for one viewport, scroll offset and time.
///
/// Layers, back to front: page background, hero (fading in), the glass panel
/// surface (blurred backdrop under the breakpoint's tint gradient), then the
/// border overlay. Panel content is not typeset; the panel is drawn as the
/// surface that blends with the hero.
#[tracing::instrument(skip(portfolio, assets), fields(width = req.viewport.width, height = req.viewport.height))]
pub fn render_preview(
    portfolio: &Portfolio,
    req: &PreviewRequest,
    assets: &AssetRoot,
) -> VitrineResult<FrameRGBA> {
    if !req.time_s.is_finite() {
        return Err(VitrineError::validation("preview time must be finite"));
    }
    let config = &portfolio.config;
    let vp = req.viewport;
    let descriptor = describe_for_width(vp.width, config);
    let scroll = ScrollState::at(vp, req.scroll_px, req.resolved_panel_height())?;
    tracing::debug!(
        breakpoint = descriptor.breakpoint.name(),
        scroll_px = scroll.scroll_px,
        "preview geometry"
    );

    let theme = &config.theme;
    let mut frame = FrameRGBA::filled(vp.width, vp.height, theme.background)?;

    let content = config.entrance.content_fade.sample(req.time_s);
    if content.opacity > 0.0 {
        let hero = hero_layer(portfolio, &descriptor, vp, assets)?;
        blit(
            &mut frame,
            &hero,
            0,
            content.translate_y_px.round() as i64,
            content.opacity as f32,
        );
    }

    if let Some(visible) = scroll.panel_visible_rect() {
        let blend = &descriptor.blend;
        let panel = scroll.panel_rect();
        blur_region(&mut frame, visible, blend.backdrop_blur_px)?;
        fill_rect_with(&mut frame, visible, |p| blend.color_at(blend.position_in(panel, p)));
        let divider = Rect::new(panel.x0, panel.y0, panel.x1, panel.y0 + 1.0);
        fill_rect(&mut frame, divider.intersect(visible), theme.divider, 1.0);
    }

    draw_border(&mut frame, portfolio, req.time_s)?;
    Ok(frame)
}

fn hero_layer(
    portfolio: &Portfolio,
    d: &RenderDescriptor,
    vp: Viewport,
    assets: &AssetRoot,
) -> VitrineResult<FrameRGBA> {
    let theme = &portfolio.config.theme;
    let boxes = d.hero_boxes(vp);
    let mut layer = FrameRGBA::new(vp.width, vp.height)?;

    if let HeroArrangement::Stacked { .. } = d.arrangement {
        fill_rect(&mut layer, boxes.video, theme.hero_fallback, 1.0);
        fill_rect(&mut layer, boxes.text, theme.background, 1.0);
    }

    let poster = d
        .video
        .preview_frame
        .as_deref()
        .and_then(|src| assets.load_image(src));
    if let Some(img) = poster {
        draw_video_frame(&mut layer, &img, boxes.video, d.video_rotation_deg, vp);
    }

    let (pad_left, pad_right, pad_bottom) = match d.arrangement {
        HeroArrangement::Stacked { .. } => (32.0, 32.0, vp.vh(20.0)),
        HeroArrangement::Columns => (128.0, 48.0, 0.0),
    };
    let text_box = Rect::new(
        boxes.text.x0 + pad_left,
        boxes.text.y0,
        boxes.text.x1 - pad_right,
        boxes.text.y1 - pad_bottom,
    );
    if text_box.width() >= 1.0 && text_box.height() >= 1.0 {
        let svg = hero_text_svg(portfolio, theme, text_box.width(), text_box.height());
        let text = rasterize_str(&svg)?;
        blit(
            &mut layer,
            &text,
            text_box.x0.round() as i64,
            text_box.y0.round() as i64,
            1.0,
        );
    }

    let hint = scroll_hint_svg();
    let hint = rasterize_str(&hint)?;
    let hint_y = f64::from(vp.height) - 32.0 - f64::from(hint.height);
    blit(&mut layer, &hint, 32, hint_y.round() as i64, 1.0);

    Ok(layer)
}

/// Frame-space to video-space mapping of the hero video inside `bx`.
///
/// Unrotated video covers the box. Rotated video is sized to one viewport
/// height across its own width, centered, then rotated about its center.
pub(crate) fn video_transform(
    img_w: f64,
    img_h: f64,
    bx: Rect,
    rotation_deg: f64,
    vp: Viewport,
) -> Affine {
    let center = bx.center().to_vec2();
    let to_origin = Affine::translate(Vec2::new(-img_w / 2.0, -img_h / 2.0));
    let placed = if rotation_deg == 0.0 {
        let scale = (bx.width() / img_w).max(bx.height() / img_h);
        Affine::translate(center) * Affine::scale(scale) * to_origin
    } else {
        let scale = f64::from(vp.height) / img_w;
        Affine::translate(center)
            * Affine::rotate(rotation_deg.to_radians())
            * Affine::scale(scale)
            * to_origin
    };
    placed.inverse()
}

fn draw_video_frame(
    layer: &mut FrameRGBA,
    img: &DecodedImage,
    bx: Rect,
    rotation_deg: f64,
    vp: Viewport,
) {
    let to_image = video_transform(
        f64::from(img.width),
        f64::from(img.height),
        bx,
        rotation_deg,
        vp,
    );
    let Some((x0, y0, x1, y1)) = pixel_span(layer, bx) else {
        return;
    };
    for y in y0..y1 {
        for x in x0..x1 {
            let p = Point::new(f64::from(x) + 0.5, f64::from(y) + 0.5);
            let src = img.sample_through(to_image, p);
            let out = over(layer.pixel(x, y), src, 1.0);
            layer.set_pixel(x, y, out);
        }
    }
}

fn hero_text_svg(portfolio: &Portfolio, theme: &Theme, width: f64, height: f64) -> String {
    const HEADING_PX: f64 = 40.0;
    const BODY_PX: f64 = 20.0;
    const LINK_PX: f64 = 16.0;

    let body_chars = ((width / (BODY_PX * 0.5)).floor() as usize).max(8);
    let mut body_lines: Vec<String> = Vec::new();
    for para in tagline_plain(portfolio) {
        body_lines.extend(wrap(&para, body_chars));
    }
    let links: Vec<&str> = portfolio
        .hero
        .links
        .iter()
        .map(|l| l.label.as_str())
        .collect();

    let block = HEADING_PX * 1.2
        + 24.0
        + body_lines.len() as f64 * BODY_PX * 1.6
        + if links.is_empty() { 0.0 } else { 16.0 + LINK_PX * 1.5 };
    let mut y = ((height - block) / 2.0).max(0.0) + HEADING_PX;

    let mut svg = String::new();
    let _ = write!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = width.round().max(1.0),
        h = height.round().max(1.0),
    );
    let _ = write!(
        svg,
        r#"<text x="0" y="{y}" font-family="sans-serif" font-size="{HEADING_PX}" font-weight="700" fill="{}">{}</text>"#,
        theme.text.css(),
        escape_xml(&portfolio.hero.heading)
    );
    y += HEADING_PX * 0.2 + 24.0;
    for line in &body_lines {
        y += BODY_PX * 1.6;
        let _ = write!(
            svg,
            r#"<text x="0" y="{y}" font-family="sans-serif" font-size="{BODY_PX}" font-weight="300" fill="{}">{}</text>"#,
            theme.muted.css(),
            escape_xml(line)
        );
    }
    if !links.is_empty() {
        y += 16.0 + LINK_PX * 1.5;
        let _ = write!(
            svg,
            r#"<text x="0" y="{y}" font-family="sans-serif" font-size="{LINK_PX}" font-weight="500" fill="{}">{}</text>"#,
            theme.muted.css(),
            escape_xml(&links.join("   "))
        );
    }
    svg.push_str("</svg>");
    svg
}

fn scroll_hint_svg() -> String {
    let paths: String = path_data(Icon::ChevronDown)
        .iter()
        .map(|d| format!(r#"<path d="{d}"/>"#))
        .collect();
    format!(
        r##"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="#a8a29e" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">{paths}</svg>"##
    )
}

/// Greedy word wrap at `max_chars` characters per line.
fn wrap(text: &str, max_chars: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();
    for word in text.split_whitespace() {
        let needed = if line.is_empty() {
            word.chars().count()
        } else {
            line.chars().count() + 1 + word.chars().count()
        };
        if needed > max_chars && !line.is_empty() {
            lines.push(std::mem::take(&mut line));
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(word);
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

/// Fixed outline inset from the viewport edges, tracing itself then fading.
fn draw_border(frame: &mut FrameRGBA, portfolio: &Portfolio, time_s: f64) -> VitrineResult<()> {
    let entrance = &portfolio.config.entrance;
    let theme = &portfolio.config.theme;

    let fade = entrance.border_fade.sample(time_s);
    if fade.opacity <= 0.0 {
        return Ok(());
    }
    let inset = theme.border_inset_px;
    let w = f64::from(frame.width) - 2.0 * inset;
    let h = f64::from(frame.height) - 2.0 * inset;
    if w < 4.0 || h < 4.0 {
        return Ok(());
    }

    let trace = entrance.border_trace.sample(time_s);
    let dash = match (entrance.border_trace.keyframes, trace.dash_offset) {
        (Keyframes::DrawRect { dash_length }, Some(offset)) => format!(
            r#" stroke-dasharray="{dash_length}" stroke-dashoffset="{offset}""#
        ),
        _ => String::new(),
    };
    let svg = format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}"><rect x="1" y="1" width="{rw}" height="{rh}" fill="none" stroke="{stroke}" stroke-width="{sw}"{dash}/></svg>"#,
        w = w.round(),
        h = h.round(),
        rw = w.round() * 0.998,
        rh = h.round() * 0.998,
        stroke = theme.border_stroke.css(),
        sw = theme.border_stroke_width,
    );
    let overlay = rasterize_str(&svg)?;
    let offset = inset.round() as i64;
    blit(frame, &overlay, offset, offset, fade.opacity as f32);
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/render/preview.rs"]
mod tests;
