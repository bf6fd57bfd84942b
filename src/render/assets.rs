use std::path::PathBuf;

use anyhow::Context;

use crate::{
    foundation::{
        core::{Affine, Point},
        error::VitrineResult,
    },
    render::frame::premultiply_in_place,
};

/// Decoded raster image, premultiplied RGBA8.
#[derive(Clone, Debug)]
pub struct DecodedImage {
    pub width: u32,
    pub height: u32,
    pub rgba8_premul: Vec<u8>,
}

impl DecodedImage {
    pub fn decode(bytes: &[u8]) -> VitrineResult<Self> {
        let dyn_img = image::load_from_memory(bytes).context("decode image from memory")?;
        let rgba = dyn_img.to_rgba8();
        let (width, height) = rgba.dimensions();

        let mut rgba8_premul = rgba.into_raw();
        premultiply_in_place(&mut rgba8_premul);

        Ok(Self {
            width,
            height,
            rgba8_premul,
        })
    }

    /// Nearest-neighbour sample at image-space point `p`; transparent outside.
    pub fn sample(&self, p: Point) -> [u8; 4] {
        if p.x < 0.0 || p.y < 0.0 {
            return [0; 4];
        }
        let (x, y) = (p.x.floor() as u64, p.y.floor() as u64);
        if x >= u64::from(self.width) || y >= u64::from(self.height) {
            return [0; 4];
        }
        let i = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        [
            self.rgba8_premul[i],
            self.rgba8_premul[i + 1],
            self.rgba8_premul[i + 2],
            self.rgba8_premul[i + 3],
        ]
    }

    /// Sample through `to_image`, which maps frame space into image space.
    pub fn sample_through(&self, to_image: Affine, p: Point) -> [u8; 4] {
        self.sample(to_image * p)
    }
}

/// Directory that page asset paths (`/portrait.jpg`) resolve against.
#[derive(Clone, Debug)]
pub struct AssetRoot {
    root: PathBuf,
}

impl AssetRoot {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Filesystem path of a site-absolute or relative asset path.
    pub fn resolve(&self, src: &str) -> PathBuf {
        self.root.join(src.trim_start_matches('/'))
    }

    /// Load and decode an image. A missing or undecodable file yields `None`,
    /// the same way a browser leaves a broken poster blank.
    pub fn load_image(&self, src: &str) -> Option<DecodedImage> {
        let path = self.resolve(src);
        let bytes = match std::fs::read(&path) {
            Ok(bytes) => bytes,
            Err(err) => {
                tracing::debug!(path = %path.display(), %err, "preview image unavailable");
                return None;
            }
        };
        match DecodedImage::decode(&bytes) {
            Ok(img) => Some(img),
            Err(err) => {
                tracing::debug!(path = %path.display(), %err, "preview image undecodable");
                None
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/assets.rs"]
mod tests;
