use crate::foundation::{
    core::Rgba8,
    error::{CoverflowError, CoverflowResult},
};

/// Preprocessed drawable surface for one cover.
///
/// Pixels are stored column-major: the renderer samples one source column per
/// output column and walks it vertically, so each column is a contiguous slice.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CoverVisual {
    width: u32,
    height: u32,
    columns: Vec<Rgba8>,
}

impl CoverVisual {
    /// Wrap column-major pixels (`width` columns of `height` pixels each).
    pub fn from_column_major(
        width: u32,
        height: u32,
        columns: Vec<Rgba8>,
    ) -> CoverflowResult<Self> {
        let expected = (width as usize).saturating_mul(height as usize);
        if columns.len() != expected {
            return Err(CoverflowError::validation(format!(
                "cover visual expects {expected} pixels for {width}x{height}, got {}",
                columns.len()
            )));
        }
        Ok(Self {
            width,
            height,
            columns,
        })
    }

    /// Transpose a row-major RGBA image into a visual.
    pub fn from_rgba_image(img: &image::RgbaImage) -> Self {
        let (width, height) = img.dimensions();
        let mut columns = Vec::with_capacity((width as usize) * (height as usize));
        for x in 0..width {
            for y in 0..height {
                columns.push(img.get_pixel(x, y).0);
            }
        }
        Self {
            width,
            height,
            columns,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Source column `x`, top to bottom.
    pub fn column(&self, x: usize) -> &[Rgba8] {
        let h = self.height as usize;
        &self.columns[x * h..(x + 1) * h]
    }

    pub fn pixel(&self, x: u32, y: u32) -> Rgba8 {
        self.column(x as usize)[y as usize]
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/visual.rs"]
mod tests;
