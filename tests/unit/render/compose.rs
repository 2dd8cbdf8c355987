use super::*;
use crate::{
    animation::controller::{Direction, EdgeFade},
    assets::visual::CoverVisual,
    foundation::{core::Viewport, fixed::Fixed, trig::Angle},
    layout::arrange::arrange_covers,
};

const BG: Rgba8 = [3, 3, 3, 255];

fn flat_covers(n: usize) -> Vec<Cover> {
    (0..n)
        .map(|i| {
            let c = [200, 100, 50 + i as u8, 255];
            let px = vec![c; 135 * 350];
            Cover::new(format!("c{i}"), CoverVisual::from_column_major(135, 350, px).unwrap())
        })
        .collect()
}

fn setup(n: usize, focus: usize) -> (FrameBuffer, Geometry, Vec<Cover>) {
    let vp = Viewport::default();
    let g = Geometry::new(vp, 135, 100, Angle::from_degrees(80), 60);
    let mut covers = flat_covers(n);
    arrange_covers(&mut covers, focus, &g, Fixed::ZERO);
    (FrameBuffer::new(vp.width, vp.height, [9, 9, 9, 255]), g, covers)
}

fn opts(side_limit: Option<usize>) -> ComposeOptions {
    ComposeOptions {
        background: BG,
        side_limit,
        edge_fade: None,
    }
}

fn in_flight(side_limit: usize, direction: Direction, fade: u16) -> ComposeOptions {
    ComposeOptions {
        edge_fade: Some(EdgeFade { direction, fade }),
        ..opts(Some(side_limit))
    }
}

#[test]
fn draws_focus_then_both_sides() {
    let (mut fb, g, covers) = setup(5, 2);
    let report = compose_frame(&mut fb, &g, &covers, 2, &opts(None));

    let focus = report.focus.unwrap();
    assert_eq!((focus.left, focus.right), (333, 467));
    assert!(report.left_drawn >= 1);
    assert!(report.right_drawn >= 1);
    assert_eq!(report.left_drawn, report.right_drawn);
    assert!(report.left_edge < 333);
    assert!(report.right_edge > 467);
    assert_eq!(report.covers_drawn(), 1 + report.left_drawn + report.right_drawn);

    // Cleared to the background, then the focus drawn over the center.
    assert_eq!(fb.get(0, 0), BG);
    assert_eq!(fb.get(400, 200), [200, 100, 52, 255]);
}

#[test]
fn layout_is_mirror_symmetric() {
    let (mut fb, g, covers) = setup(5, 2);
    let report = compose_frame(&mut fb, &g, &covers, 2, &opts(None));
    let left_gap = 333 - report.left_edge;
    let right_gap = report.right_edge - 467;
    assert!(left_gap.abs_diff(right_gap) <= 2, "{left_gap} vs {right_gap}");
}

#[test]
fn occlusion_is_monotonic_outward() {
    let (mut fb, g, covers) = setup(12, 0);
    let report = compose_frame(&mut fb, &g, &covers, 0, &opts(None));
    assert_eq!(report.left_drawn, 0);
    assert!(report.right_drawn < 11);

    let stopped_at = 1 + report.right_drawn;
    let range = ColumnRange::new(i64::from(report.right_edge) + 1, 799);
    for cover in &covers[stopped_at..] {
        let mut scratch = FrameBuffer::new(800, 400, BG);
        assert_eq!(render_cover(&mut scratch, &g, cover, range, Brightness::FULL), None);
    }
}

#[test]
fn side_limit_caps_and_dims_the_outermost_cover() {
    let (mut fb, g, covers) = setup(5, 2);
    let report = compose_frame(&mut fb, &g, &covers, 2, &opts(Some(1)));
    assert_eq!(report.left_drawn, 1);
    assert_eq!(report.right_drawn, 1);

    assert_eq!(fb.get(report.right_edge, 200), [100, 50, 26, 255]);
    assert_eq!(fb.get(report.left_edge, 200), [100, 50, 25, 255]);
}

#[test]
fn edge_fade_ramps_the_outer_covers_while_moving_forward() {
    let (mut fb, g, covers) = setup(5, 2);
    let rest = compose_frame(&mut fb, &g, &covers, 2, &opts(Some(1)));
    let (left, right) = (rest.left_edge, rest.right_edge);

    // Start of the step: the limit covers sit at half, the extra slots are black.
    let report = compose_frame(&mut fb, &g, &covers, 2, &in_flight(1, Direction::Forward, 0));
    assert_eq!((report.left_drawn, report.right_drawn), (2, 2));
    assert_eq!((report.left_edge, report.right_edge), (158, 641));
    assert_eq!(fb.get(left, 200), [100, 50, 25, 255]);
    assert_eq!(fb.get(right, 200), [100, 50, 26, 255]);
    assert_eq!(fb.get(641, 200), [0, 0, 0, 255]);

    // Halfway: the left cover dims toward black, the right ones brighten.
    compose_frame(&mut fb, &g, &covers, 2, &in_flight(1, Direction::Forward, 128));
    assert_eq!(fb.get(left, 200), [50, 25, 12, 255]);
    assert_eq!(fb.get(right, 200), [150, 75, 39, 255]);
    assert_eq!(fb.get(641, 200), [50, 25, 13, 255]);
    assert_eq!(fb.get(158, 200), [0, 0, 0, 255]);
}

#[test]
fn edge_fade_mirrors_when_moving_backward() {
    let (mut fb, g, covers) = setup(5, 2);
    let rest = compose_frame(&mut fb, &g, &covers, 2, &opts(Some(1)));
    let (left, right) = (rest.left_edge, rest.right_edge);

    compose_frame(&mut fb, &g, &covers, 2, &in_flight(1, Direction::Backward, 128));
    assert_eq!(fb.get(left, 200), [150, 75, 38, 255]);
    assert_eq!(fb.get(right, 200), [50, 25, 13, 255]);
    assert_eq!(fb.get(158, 200), [50, 25, 12, 255]);
    assert_eq!(fb.get(641, 200), [0, 0, 0, 255]);
}

#[test]
fn edge_fade_without_side_limit_draws_at_full_brightness() {
    let (mut fb, g, covers) = setup(5, 2);
    let fade = ComposeOptions {
        edge_fade: Some(EdgeFade {
            direction: Direction::Forward,
            fade: 128,
        }),
        ..opts(None)
    };
    let report = compose_frame(&mut fb, &g, &covers, 2, &fade);
    assert_eq!(fb.get(report.right_edge, 200), [200, 100, 54, 255]);
}

#[test]
fn zero_side_limit_draws_only_the_focus() {
    let (mut fb, g, covers) = setup(5, 2);
    let report = compose_frame(&mut fb, &g, &covers, 2, &opts(Some(0)));
    assert_eq!(report.covers_drawn(), 1);
    assert_eq!((report.left_edge, report.right_edge), (333, 467));
}

#[test]
fn single_cover_fills_full_height() {
    let (mut fb, g, covers) = setup(1, 0);
    let report = compose_frame(&mut fb, &g, &covers, 0, &opts(None));
    let b = report.focus.unwrap();
    assert_eq!((b.top, b.bottom), (0, 399));
    assert_eq!(report.covers_drawn(), 1);
}

#[test]
fn empty_carousel_only_clears() {
    let (mut fb, g, _) = setup(1, 0);
    let report = compose_frame(&mut fb, &g, &[], 0, &opts(None));
    assert_eq!(report.focus, None);
    assert_eq!((report.left_edge, report.right_edge), (400, 400));
    assert!(fb.pixels().iter().all(|p| *p == BG));
}

#[test]
fn detail_view_draws_one_facing_cover() {
    let (mut fb, g, covers) = setup(5, 2);
    // Cover 3 sits tilted to the right; the detail view ignores its placement.
    let report = compose_detail(&mut fb, &g, &covers[3], BG);
    let b = report.focus.unwrap();
    assert_eq!((b.left, b.right), (333, 467));
    assert_eq!(fb.get(400, 200), [200, 100, 53, 255]);
    assert_eq!(fb.get(600, 200), BG);
}

#[test]
#[should_panic(expected = "out of range")]
fn focus_out_of_range_panics() {
    let (mut fb, g, covers) = setup(2, 0);
    compose_frame(&mut fb, &g, &covers, 2, &opts(None));
}
