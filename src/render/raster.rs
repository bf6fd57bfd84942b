use std::sync::{Arc, OnceLock};

use anyhow::Context;

use crate::{
    foundation::error::{VitrineError, VitrineResult},
    render::frame::FrameRGBA,
};

/// System font database shared by every SVG parse in the process.
fn system_fontdb() -> Arc<usvg::fontdb::Database> {
    static DB: OnceLock<Arc<usvg::fontdb::Database>> = OnceLock::new();
    DB.get_or_init(|| {
        let mut db = usvg::fontdb::Database::new();
        db.load_system_fonts();
        tracing::debug!(faces = db.len(), "loaded system fonts");
        Arc::new(db)
    })
    .clone()
}

pub fn parse_svg(svg: &str) -> VitrineResult<usvg::Tree> {
    let opts = usvg::Options {
        fontdb: system_fontdb(),
        ..Default::default()
    };
    let tree = usvg::Tree::from_str(svg, &opts).context("parse svg tree")?;
    Ok(tree)
}

/// Rasterize `tree` scaled to exactly `width` x `height` pixels.
pub fn rasterize(tree: &usvg::Tree, width: u32, height: u32) -> VitrineResult<FrameRGBA> {
    let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| VitrineError::render("failed to allocate svg pixmap"))?;

    let sx = (width as f32) / tree.size().width();
    let sy = (height as f32) / tree.size().height();
    let xform = resvg::tiny_skia::Transform::from_scale(sx, sy);

    resvg::render(tree, xform, &mut pixmap.as_mut());
    FrameRGBA::from_premul(width, height, pixmap.take())
}

/// Parse and rasterize in one step; the document's own size is the output size.
pub fn rasterize_str(svg: &str) -> VitrineResult<FrameRGBA> {
    let tree = parse_svg(svg)?;
    let size = tree.size().to_int_size();
    rasterize(&tree, size.width(), size.height())
}

/// Escape text for inclusion in SVG character data or attribute values.
pub(crate) fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/raster.rs"]
mod tests;
