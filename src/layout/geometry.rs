use crate::{
    foundation::{core::Viewport, fixed::Fixed, trig::Angle},
    render::rays::RayTable,
};

/// Everything derived from viewport size, cell size, zoom and tilt.
///
/// Rebuilt whenever one of those inputs changes; read-only otherwise.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Geometry {
    pub viewport: Viewport,
    pub rays: RayTable,
    /// Tilt of every steady-state neighbor (left side `+tilt`, right side `-tilt`).
    pub tilt: Angle,
    /// Horizontal offset of the nearest neighbor from the focus.
    pub offset_x: Fixed,
    /// Depth offset shared by all neighbors.
    pub offset_y: Fixed,
    /// Extra horizontal gap between successive neighbors.
    pub spacing: Fixed,
    /// Camera distance in pixels: `height * 100 / zoom_percent`.
    pub distance: i64,
}

impl Geometry {
    pub fn new(
        viewport: Viewport,
        cell_width: u32,
        zoom_percent: u32,
        tilt: Angle,
        spacing: u32,
    ) -> Self {
        let half_cell = i64::from(cell_width / 2);
        let cell = Fixed::from_int(i64::from(cell_width));

        let offset_x = (Fixed::ONE - tilt.cos()) * half_cell + cell;
        let offset_y = tilt.sin() * half_cell + cell / 4;
        let distance = i64::from(viewport.height) * 100 / i64::from(zoom_percent.max(1));

        tracing::debug!(
            width = viewport.width,
            height = viewport.height,
            tilt = tilt.0,
            offset_x = offset_x.to_f64(),
            offset_y = offset_y.to_f64(),
            distance,
            "recalculated geometry"
        );

        Self {
            viewport,
            rays: RayTable::new(viewport.width, viewport.height),
            tilt,
            offset_x,
            offset_y,
            spacing: Fixed::from_int(i64::from(spacing)),
            distance,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/geometry.rs"]
mod tests;
