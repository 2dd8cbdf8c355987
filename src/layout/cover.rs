use crate::{
    assets::visual::CoverVisual,
    foundation::{fixed::Fixed, trig::Angle},
};

/// Transient 3-D placement of a cover: plane tilt plus offset from the focus
/// position. Rewritten by layout or the animation controller before every render.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Placement {
    pub angle: Angle,
    pub cx: Fixed,
    pub cy: Fixed,
}

impl Placement {
    /// Centered and facing the viewer.
    pub const FACING: Placement = Placement {
        angle: Angle::ZERO,
        cx: Fixed::ZERO,
        cy: Fixed::ZERO,
    };
}

/// One image in the carousel.
#[derive(Clone, Debug)]
pub struct Cover {
    /// Where the image came from (file name, or any caller-chosen tag).
    pub label: String,
    pub visual: CoverVisual,
    pub placement: Placement,
}

impl Cover {
    pub fn new(label: impl Into<String>, visual: CoverVisual) -> Self {
        Self {
            label: label.into(),
            visual,
            placement: Placement::FACING,
        }
    }
}
