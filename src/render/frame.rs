use std::path::Path;

use anyhow::Context;

use crate::foundation::{
    core::Rgba8,
    error::{VitrineError, VitrineResult},
};

/// CPU pixel buffer produced by the preview compositor.
#[derive(Clone, Debug, PartialEq)]
pub struct FrameRGBA {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// Premultiplied RGBA8 bytes, tightly packed, row-major.
    pub data: Vec<u8>,
}

impl FrameRGBA {
    /// Fully transparent frame.
    pub fn new(width: u32, height: u32) -> VitrineResult<Self> {
        let len = byte_len(width, height)?;
        Ok(Self {
            width,
            height,
            data: vec![0; len],
        })
    }

    /// Frame filled with one straight-alpha color.
    pub fn filled(width: u32, height: u32, color: Rgba8) -> VitrineResult<Self> {
        let mut frame = Self::new(width, height)?;
        let px = color.to_premul();
        for dst in frame.data.chunks_exact_mut(4) {
            dst.copy_from_slice(&px);
        }
        Ok(frame)
    }

    pub(crate) fn from_premul(width: u32, height: u32, data: Vec<u8>) -> VitrineResult<Self> {
        if data.len() != byte_len(width, height)? {
            return Err(VitrineError::render(
                "frame data must match width*height*4",
            ));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    fn index(&self, x: u32, y: u32) -> usize {
        ((y as usize) * (self.width as usize) + (x as usize)) * 4
    }

    /// Premultiplied pixel; panics when out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let i = self.index(x, y);
        [
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ]
    }

    pub(crate) fn set_pixel(&mut self, x: u32, y: u32, px: [u8; 4]) {
        let i = self.index(x, y);
        self.data[i..i + 4].copy_from_slice(&px);
    }

    /// Straight-alpha color of one pixel.
    pub fn color_at(&self, x: u32, y: u32) -> Rgba8 {
        let [r, g, b, a] = demultiply(self.pixel(x, y));
        Rgba8 { r, g, b, a }
    }

    /// Straight-alpha copy of the whole frame, as image encoders expect.
    pub fn to_straight_rgba8(&self) -> Vec<u8> {
        let mut out = self.data.clone();
        for px in out.chunks_exact_mut(4) {
            let straight = demultiply([px[0], px[1], px[2], px[3]]);
            px.copy_from_slice(&straight);
        }
        out
    }

    /// Encode as PNG, creating parent directories as needed.
    pub fn save_png(&self, path: &Path) -> VitrineResult<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create output dir '{}'", parent.display()))?;
        }
        image::save_buffer_with_format(
            path,
            &self.to_straight_rgba8(),
            self.width,
            self.height,
            image::ColorType::Rgba8,
            image::ImageFormat::Png,
        )
        .with_context(|| format!("write png '{}'", path.display()))?;
        Ok(())
    }
}

fn byte_len(width: u32, height: u32) -> VitrineResult<usize> {
    if width == 0 || height == 0 {
        return Err(VitrineError::render("frame width/height must be > 0"));
    }
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|v| v.checked_mul(4))
        .ok_or_else(|| VitrineError::render("frame buffer size overflow"))
}

fn demultiply(px: [u8; 4]) -> [u8; 4] {
    let a = u32::from(px[3]);
    if a == 0 {
        return [0, 0, 0, 0];
    }
    if a == 255 {
        return px;
    }
    let un = |c: u8| ((u32::from(c) * 255 + a / 2) / a).min(255) as u8;
    [un(px[0]), un(px[1]), un(px[2]), px[3]]
}

pub(crate) fn premultiply_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = u16::from(px[3]);
        if a == 255 {
            continue;
        }
        for c in &mut px[..3] {
            *c = crate::foundation::math::mul_div255_u8(u16::from(*c), a);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/frame.rs"]
mod tests;
