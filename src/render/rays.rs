use crate::foundation::fixed::Fixed;

/// Per-column slopes of the camera rays through the middle scanline.
///
/// Built for one viewport size; symmetric about the center column:
/// `table[half_w - 1 - i] == -table[half_w + i]`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RayTable {
    half_width: usize,
    slopes: Vec<Fixed>,
}

impl RayTable {
    pub fn new(width: u32, height: u32) -> Self {
        let half_width = (width as usize).div_ceil(2);
        let half_height = i64::from(height.div_ceil(2)).max(1);

        let mut slopes = vec![Fixed::ZERO; half_width * 2];
        for i in 0..half_width {
            let gg = (Fixed::HALF + Fixed::from_int(i as i64)) / (2 * half_height);
            slopes[half_width - 1 - i] = -gg;
            slopes[half_width + i] = gg;
        }
        Self { half_width, slopes }
    }

    pub fn half_width(&self) -> usize {
        self.half_width
    }

    pub fn len(&self) -> usize {
        self.slopes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slopes.is_empty()
    }

    /// Slope for output column `x`.
    pub fn slope(&self, x: usize) -> Fixed {
        self.slopes[x]
    }

    pub fn as_slice(&self) -> &[Fixed] {
        &self.slopes
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/rays.rs"]
mod tests;
