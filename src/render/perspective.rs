//! Ray-cast compositor for one tilted cover.
//!
//! Every output column casts a ray through the mid scanline, intersects it with
//! the cover's plane and picks one source column. That column is then written
//! as a vertical strip growing outward from the buffer's center row, stepping
//! through source rows with a fixed-point accumulator. Sampling is
//! nearest-column, nearest-row.

use crate::{
    assets::visual::CoverVisual,
    foundation::{
        core::{Brightness, ColumnRange, DrawnBounds, Rgba8},
        fixed::Fixed,
    },
    layout::{
        cover::{Cover, Placement},
        geometry::Geometry,
    },
    render::surface::FrameBuffer,
};

/// Draw `cover` into `target`, restricted to the inclusive columns of `range`.
///
/// Returns the columns actually written (full buffer height), or `None` when
/// the cover is occluded, off screen or the range is degenerate.
pub fn render_cover(
    target: &mut FrameBuffer,
    geometry: &Geometry,
    cover: &Cover,
    range: ColumnRange,
    brightness: Brightness,
) -> Option<DrawnBounds> {
    let drawn = render_visual(target, geometry, &cover.visual, cover.placement, range, brightness)?;
    tracing::trace!(
        label = %cover.label,
        angle = cover.placement.angle.0,
        left = drawn.left,
        right = drawn.right,
        "rendered cover"
    );
    Some(drawn)
}

/// [`render_cover`] for a bare visual at an explicit placement.
pub(crate) fn render_visual(
    target: &mut FrameBuffer,
    geometry: &Geometry,
    visual: &CoverVisual,
    placement: Placement,
    range: ColumnRange,
    brightness: Brightness,
) -> Option<DrawnBounds> {
    debug_assert_eq!(
        (target.width(), target.height()),
        (geometry.viewport.width, geometry.viewport.height),
        "geometry out of sync with output buffer"
    );

    let w = i64::from(target.width()).min(geometry.rays.len() as i64);
    let h = i64::from(target.height());
    if w <= 0 || h <= 0 {
        return None;
    }

    let (mut col1, mut col2) = (range.first, range.last);
    if col1 > col2 {
        std::mem::swap(&mut col1, &mut col2);
    }
    let col1 = col1.clamp(0, w - 1);
    let col2 = col2.clamp(0, w - 1);
    if col1 == col2 {
        return None;
    }

    let sw = i64::from(visual.width());
    let sh = i64::from(visual.height());
    let distance = geometry.distance;

    let sdx = placement.angle.cos();
    let sdy = placement.angle.sin();
    let xs = placement.cx - sdx * sw / 2;
    let ys = placement.cy - sdy * sw / 2;
    let near = Fixed::from_int(distance);

    let xi = (Fixed::from_raw(w * Fixed::ONE_RAW / 2) + (xs * h) / (near + ys))
        .to_int()
        .max(0);
    if xi >= w {
        return None;
    }

    let mut drawn: Option<(i64, i64)> = None;

    for x in xi.max(col1)..=col2 {
        let ray = geometry.rays.slope(x as usize);

        let mut hity = Fixed::ZERO;
        if sdy != Fixed::ZERO {
            let fk = ray - sdx / sdy;
            hity = -((ray * distance - placement.cx + placement.cy.mul_div(sdx, sdy)) / fk);
        }

        let dist = near + hity;
        if dist < Fixed::ZERO {
            continue;
        }

        let hitx = dist * ray;
        let hitdist = (hitx - placement.cx) / sdx;
        let column = (sw / 2).saturating_add(hitdist.to_int());
        if column >= sw {
            break;
        }
        if column < 0 {
            continue;
        }

        drawn = Some(match drawn {
            Some((left, _)) => (left, x),
            None => (x, x),
        });

        let source = visual.column(column as usize);
        draw_strip(target, source, x as u32, (dist / h).raw(), sh, brightness);
    }

    let (left, right) = drawn?;
    Some(DrawnBounds {
        left: left as u32,
        right: right as u32,
        top: 0,
        bottom: target.height() - 1,
    })
}

/// Write one source column as a strip centered on the buffer's middle row.
fn draw_strip(
    target: &mut FrameBuffer,
    source: &[Rgba8],
    x: u32,
    dy: i64,
    sh: i64,
    brightness: Brightness,
) {
    let h = i64::from(target.height());
    let center = (sh / 2) * Fixed::ONE_RAW;
    let mut p1 = center - dy / 2;
    let mut p2 = center + dy / 2;
    let mut y1 = h / 2;
    let mut y2 = y1 + 1;

    while y1 >= 0 && y2 < h && p1 >= 0 && (p2 >> Fixed::SHIFT) < sh {
        let top = source[(p1 >> Fixed::SHIFT) as usize];
        let bottom = source[(p2 >> Fixed::SHIFT) as usize];
        target.put(x, y1 as u32, brightness.apply(top));
        target.put(x, y2 as u32, brightness.apply(bottom));
        p1 -= dy;
        p2 += dy;
        y1 -= 1;
        y2 += 1;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/perspective.rs"]
mod tests;
