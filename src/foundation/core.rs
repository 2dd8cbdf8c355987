/// Straight RGBA8 pixel.
pub type Rgba8 = [u8; 4];

/// Opaque black.
pub const BLACK: Rgba8 = [0, 0, 0, 255];

/// Output surface dimensions in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 800,
            height: 400,
        }
    }
}

/// Per-channel brightness multiplier out of 256 (256 leaves pixels untouched).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Brightness(pub u16);

impl Brightness {
    pub const FULL: Brightness = Brightness(256);
    pub const HALF: Brightness = Brightness(128);

    pub fn apply(self, px: Rgba8) -> Rgba8 {
        if self.0 >= 256 {
            return px;
        }
        let k = u32::from(self.0);
        let scale = |c: u8| ((u32::from(c) * k) / 256) as u8;
        [scale(px[0]), scale(px[1]), scale(px[2]), px[3]]
    }
}

/// Inclusive column range handed to the renderer. The bounds may arrive out
/// of order or outside the buffer; the renderer normalizes them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColumnRange {
    pub first: i64,
    pub last: i64,
}

impl ColumnRange {
    pub fn new(first: i64, last: i64) -> Self {
        Self { first, last }
    }

    /// Every column of a buffer `width` pixels wide.
    pub fn full(width: u32) -> Self {
        Self::new(0, i64::from(width) - 1)
    }
}

/// Inclusive pixel rectangle actually written by a render call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DrawnBounds {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl DrawnBounds {
    pub fn width(&self) -> u32 {
        self.right - self.left + 1
    }

    /// Midpoint column, rounded down.
    pub fn center_x(&self) -> u32 {
        self.left + (self.right - self.left) / 2
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
