//! Steady-state placement of covers around the focus.
//!
//! Ownership of placements per frame: while resting, layout writes every
//! cover. While a transition is running the animation controller owns the
//! transitioning cover and the neighbor it is approaching; it hands those
//! indices to [`arrange_except`] and writes them itself.

use crate::{
    foundation::fixed::Fixed,
    layout::{
        cover::{Cover, Placement},
        geometry::Geometry,
    },
};

/// Place every cover relative to `focus`, shifted sideways by `factor`.
///
/// With `factor == 0` the focus cover is reset to [`Placement::FACING`]; with
/// a non-zero factor its placement belongs to the animation controller and is
/// left untouched.
pub fn arrange_covers(covers: &mut [Cover], focus: usize, geometry: &Geometry, factor: Fixed) {
    if factor == Fixed::ZERO {
        arrange_except(covers, focus, geometry, factor, &[]);
    } else {
        arrange_except(covers, focus, geometry, factor, &[focus]);
    }
}

/// [`arrange_covers`] that skips the indices in `claimed`.
pub(crate) fn arrange_except(
    covers: &mut [Cover],
    focus: usize,
    geometry: &Geometry,
    factor: Fixed,
    claimed: &[usize],
) {
    if covers.is_empty() {
        return;
    }
    assert!(
        focus < covers.len(),
        "focus index {focus} out of range for {} covers",
        covers.len()
    );

    for i in (0..focus).rev() {
        if claimed.contains(&i) {
            continue;
        }
        let steps = (focus - 1 - i) as i64;
        covers[i].placement = Placement {
            angle: geometry.tilt,
            cx: -(geometry.offset_x + geometry.spacing * steps + factor),
            cy: geometry.offset_y,
        };
    }

    for i in focus + 1..covers.len() {
        if claimed.contains(&i) {
            continue;
        }
        let steps = (i - focus - 1) as i64;
        covers[i].placement = Placement {
            angle: -geometry.tilt,
            cx: geometry.offset_x + geometry.spacing * steps - factor,
            cy: geometry.offset_y,
        };
    }

    if !claimed.contains(&focus) {
        covers[focus].placement = Placement::FACING;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/arrange.rs"]
mod tests;
