use crate::foundation::{
    core::Rgba8,
    error::{CoverflowError, CoverflowResult},
};

/// Row-major RGBA8 output buffer the carousel renders into.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u32,
    height: u32,
    pixels: Vec<Rgba8>,
}

impl FrameBuffer {
    pub fn new(width: u32, height: u32, fill: Rgba8) -> Self {
        Self {
            width,
            height,
            pixels: vec![fill; (width as usize) * (height as usize)],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn clear(&mut self, fill: Rgba8) {
        self.pixels.fill(fill);
    }

    /// Reallocate for a new size, filled with `fill`.
    pub fn resize(&mut self, width: u32, height: u32, fill: Rgba8) {
        *self = Self::new(width, height, fill);
    }

    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Rgba8 {
        self.pixels[self.index(x, y)]
    }

    #[inline]
    pub fn put(&mut self, x: u32, y: u32, px: Rgba8) {
        let i = self.index(x, y);
        self.pixels[i] = px;
    }

    pub fn pixels(&self) -> &[Rgba8] {
        &self.pixels
    }

    /// Tightly packed RGBA bytes, row-major.
    pub fn as_bytes(&self) -> &[u8] {
        self.pixels.as_flattened()
    }

    pub fn to_rgba_image(&self) -> CoverflowResult<image::RgbaImage> {
        image::RgbaImage::from_raw(self.width, self.height, self.as_bytes().to_vec()).ok_or_else(
            || {
                CoverflowError::Other(anyhow::anyhow!(
                    "frame buffer {}x{} does not match its pixel data",
                    self.width,
                    self.height
                ))
            },
        )
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        (y as usize) * (self.width as usize) + (x as usize)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/surface.rs"]
mod tests;
