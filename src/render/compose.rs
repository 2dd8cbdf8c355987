use crate::{
    animation::controller::{Direction, EdgeFade},
    foundation::core::{Brightness, ColumnRange, DrawnBounds, Rgba8},
    layout::{
        cover::{Cover, Placement},
        geometry::Geometry,
    },
    render::{
        perspective::{render_cover, render_visual},
        surface::FrameBuffer,
    },
};

/// Knobs for one composition pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ComposeOptions {
    pub background: Rgba8,
    /// At most this many covers per side; the outermost one is drawn dimmed.
    pub side_limit: Option<usize>,
    /// Set while a transition runs. With a side limit, one extra cover per
    /// side is drawn and the outermost slots ramp with the fade.
    pub edge_fade: Option<EdgeFade>,
}

/// What a composition pass drew.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameReport {
    /// Bounds of the focus cover, if any of it was visible.
    pub focus: Option<DrawnBounds>,
    /// Covers drawn to the left of the focus.
    pub left_drawn: usize,
    /// Covers drawn to the right of the focus.
    pub right_drawn: usize,
    /// Leftmost column claimed after the pass.
    pub left_edge: u32,
    /// Rightmost column claimed after the pass.
    pub right_edge: u32,
}

impl FrameReport {
    pub fn covers_drawn(&self) -> usize {
        usize::from(self.focus.is_some()) + self.left_drawn + self.right_drawn
    }
}

/// Clear `target` and draw the browse view: the focus cover first, then its
/// neighbors outward, each confined to the columns nearer covers left free.
///
/// A side stops at the first cover that draws nothing; every farther cover on
/// that side is hidden behind it.
#[tracing::instrument(level = "debug", skip_all, fields(focus = focus, covers = covers.len()))]
pub fn compose_frame(
    target: &mut FrameBuffer,
    geometry: &Geometry,
    covers: &[Cover],
    focus: usize,
    opts: &ComposeOptions,
) -> FrameReport {
    target.clear(opts.background);
    let width = i64::from(target.width());
    let mid = (width / 2) as u32;

    if covers.is_empty() {
        return FrameReport {
            left_edge: mid,
            right_edge: mid,
            ..FrameReport::default()
        };
    }
    assert!(
        focus < covers.len(),
        "focus index {focus} out of range for {} covers",
        covers.len()
    );

    let focus_bounds = render_cover(
        target,
        geometry,
        &covers[focus],
        ColumnRange::full(target.width()),
        Brightness::FULL,
    );
    let (mut left_edge, mut right_edge) = match focus_bounds {
        Some(b) => (i64::from(b.left), i64::from(b.right)),
        None => (i64::from(mid), i64::from(mid)),
    };

    let slots = match opts.side_limit {
        Some(n) if opts.edge_fade.is_some() => n.saturating_add(1),
        Some(n) => n,
        None => usize::MAX,
    };
    let brightness_at = |side: Side, n: usize| match opts.side_limit {
        Some(limit) => side_brightness(side, n, limit, opts.edge_fade),
        None => Brightness::FULL,
    };

    let mut left_drawn = 0;
    for (n, i) in (0..focus).rev().take(slots).enumerate() {
        let range = ColumnRange::new(0, left_edge - 1);
        let brightness = brightness_at(Side::Left, n);
        match render_cover(target, geometry, &covers[i], range, brightness) {
            Some(b) => {
                left_edge = i64::from(b.left);
                left_drawn += 1;
            }
            None => {
                tracing::trace!(index = i, "left side occluded");
                break;
            }
        }
    }

    let mut right_drawn = 0;
    for (n, i) in (focus + 1..covers.len()).take(slots).enumerate() {
        let range = ColumnRange::new(right_edge + 1, width - 1);
        let brightness = brightness_at(Side::Right, n);
        match render_cover(target, geometry, &covers[i], range, brightness) {
            Some(b) => {
                right_edge = i64::from(b.right);
                right_drawn += 1;
            }
            None => {
                tracing::trace!(index = i, "right side occluded");
                break;
            }
        }
    }

    let report = FrameReport {
        focus: focus_bounds,
        left_drawn,
        right_drawn,
        left_edge: left_edge as u32,
        right_edge: right_edge as u32,
    };
    tracing::debug!(
        left_drawn,
        right_drawn,
        left_edge = report.left_edge,
        right_edge = report.right_edge,
        "composed frame"
    );
    report
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Side {
    Left,
    Right,
}

/// Brightness of the `n`-th cover out from the focus on `side`.
///
/// At rest the cover at the limit is drawn at half brightness. In flight the
/// last three slots, the one past the limit included, ramp with the fade in
/// opposite directions on the two sides.
fn side_brightness(side: Side, n: usize, limit: usize, edge: Option<EdgeFade>) -> Brightness {
    let Some(EdgeFade { direction, fade }) = edge else {
        return if n + 1 == limit {
            Brightness::HALF
        } else {
            Brightness::FULL
        };
    };
    let half = fade.min(256) / 2;
    let forward = direction == Direction::Forward;
    let level = match (side, limit.checked_sub(n), forward) {
        (Side::Left, Some(0), true) => 0,
        (Side::Left, Some(0), false) => 128 - half,
        (Side::Left, Some(1), true) => 128 - half,
        (Side::Left, Some(1), false) => 256 - half,
        (Side::Left, Some(2), true) => 256 - half,
        (Side::Right, Some(0), true) => half,
        (Side::Right, Some(0), false) => 0,
        (Side::Right, Some(1), true) => 128 + half,
        (Side::Right, Some(1), false) => half,
        (Side::Right, Some(2), false) => 128 + half,
        _ => 256,
    };
    Brightness(level)
}

/// Clear `target` and draw a single cover centered and facing the viewer.
pub fn compose_detail(
    target: &mut FrameBuffer,
    geometry: &Geometry,
    cover: &Cover,
    background: Rgba8,
) -> FrameReport {
    target.clear(background);
    let drawn = render_visual(
        target,
        geometry,
        &cover.visual,
        Placement::FACING,
        ColumnRange::full(target.width()),
        Brightness::FULL,
    );
    let mid = target.width() / 2;
    FrameReport {
        focus: drawn,
        left_drawn: 0,
        right_drawn: 0,
        left_edge: drawn.map_or(mid, |b| b.left),
        right_edge: drawn.map_or(mid, |b| b.right),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/compose.rs"]
mod tests;
