use super::*;
use crate::{assets::visual::CoverVisual, foundation::core::Viewport};

fn covers(n: usize) -> Vec<Cover> {
    (0..n)
        .map(|i| {
            let visual = CoverVisual::from_column_major(1, 1, vec![[i as u8, 0, 0, 255]]).unwrap();
            Cover::new(format!("c{i}"), visual)
        })
        .collect()
}

fn geometry() -> Geometry {
    Geometry::new(Viewport::default(), 135, 100, Angle::from_degrees(80), 60)
}

fn run_to_rest(
    anim: &mut AnimationState,
    cs: &mut [Cover],
    focus: &mut usize,
    g: &Geometry,
) -> (usize, Vec<TickOutcome>) {
    let mut outcomes = Vec::new();
    for ticks in 1..=1_000 {
        let out = anim.advance(cs, focus, g);
        outcomes.push(out);
        if matches!(out, TickOutcome::Arrived { .. }) {
            return (ticks, outcomes);
        }
    }
    panic!("transition did not arrive");
}

#[test]
fn resting_state_is_idle() {
    let g = geometry();
    let mut cs = covers(3);
    let mut focus = 1;
    let mut anim = AnimationState::resting(1);
    assert!(!anim.is_transitioning());
    assert_eq!(anim.frame(), Fixed::from_int(1));
    assert_eq!(anim.advance(&mut cs, &mut focus, &g), TickOutcome::Idle);
}

#[test]
fn begin_to_current_focus_is_a_no_op() {
    let mut anim = AnimationState::resting(2);
    assert!(!anim.begin(2, 2));
    assert_eq!(anim.direction(), None);
}

#[test]
fn forward_step_converges_and_snaps() {
    let g = geometry();
    let mut cs = covers(5);
    let mut focus = 2;
    arrange_covers(&mut cs, focus, &g, Fixed::ZERO);
    let mut anim = AnimationState::resting(focus);
    assert!(anim.begin(focus, 3));
    assert_eq!(anim.direction(), Some(Direction::Forward));

    let target = Fixed::from_int(3);
    let mut last = (anim.frame() - target).abs();
    let mut ticks = 0;
    loop {
        ticks += 1;
        assert!(ticks < 200, "no livelock");
        let out = anim.advance(&mut cs, &mut focus, &g);
        let dist = (anim.frame() - target).abs();
        assert!(dist < last, "distance must shrink every tick");
        last = dist;
        if out == (TickOutcome::Arrived { index: 3 }) {
            break;
        }
        assert_eq!(out, TickOutcome::Moving { index: 2 });
    }

    assert_eq!(last, Fixed::ZERO);
    assert_eq!(focus, 3);
    assert_eq!(anim.direction(), None);
    assert_eq!(cs[3].placement, Placement::FACING);
    assert_eq!(cs[2].placement.angle, g.tilt);
    assert_eq!(cs[4].placement.cx, g.offset_x);
}

#[test]
fn backward_step_converges() {
    let g = geometry();
    let mut cs = covers(5);
    let mut focus = 2;
    arrange_covers(&mut cs, focus, &g, Fixed::ZERO);
    let mut anim = AnimationState::resting(focus);
    assert!(anim.begin(focus, 1));

    let (_, outcomes) = run_to_rest(&mut anim, &mut cs, &mut focus, &g);
    assert_eq!(outcomes.last(), Some(&TickOutcome::Arrived { index: 1 }));
    assert!(
        outcomes[..outcomes.len() - 1]
            .iter()
            .all(|o| *o == TickOutcome::Moving { index: 2 })
    );
    assert_eq!(focus, 1);
    assert_eq!(cs[1].placement, Placement::FACING);
    assert_eq!(cs[2].placement.angle, -g.tilt);
}

#[test]
fn first_tick_blends_leaving_cover_and_neighbor() {
    let g = geometry();
    let mut cs = covers(5);
    let mut focus = 2;
    arrange_covers(&mut cs, focus, &g, Fixed::ZERO);
    let mut anim = AnimationState::resting(focus);
    anim.begin(focus, 3);
    anim.advance(&mut cs, &mut focus, &g);

    let leaving = cs[2].placement;
    assert!(leaving.angle.0 > 0 && leaving.angle.0 < g.tilt.0);
    assert!(leaving.cx < Fixed::ZERO && leaving.cx > -g.offset_x);

    let arriving = cs[3].placement;
    assert!(arriving.angle.0 < 0 && arriving.angle.0 > -g.tilt.0);
    assert!(arriving.cx > Fixed::ZERO && arriving.cx < g.offset_x);

    // Others slide toward the left by the same fraction of the spacing.
    assert!(cs[4].placement.cx < g.offset_x + g.spacing);
    assert!(cs[1].placement.cx < -g.offset_x);
}

#[test]
fn long_jump_walks_through_every_index() {
    let g = geometry();
    let mut cs = covers(5);
    let mut focus = 0;
    arrange_covers(&mut cs, focus, &g, Fixed::ZERO);
    let mut anim = AnimationState::resting(focus);
    anim.begin(focus, 4);

    let (ticks, outcomes) = run_to_rest(&mut anim, &mut cs, &mut focus, &g);
    let mut visited: Vec<usize> = outcomes
        .iter()
        .filter_map(|o| match o {
            TickOutcome::Moving { index } => Some(*index),
            _ => None,
        })
        .collect();
    assert!(visited.windows(2).all(|w| w[0] <= w[1]));
    visited.dedup();
    assert_eq!(visited, vec![0, 1, 2, 3]);
    assert_eq!(focus, 4);
    assert!(ticks < 4 * 7);
}

#[test]
fn settle_mid_flight_jumps_to_target() {
    let g = geometry();
    let mut cs = covers(4);
    let mut focus = 1;
    let mut anim = AnimationState::resting(focus);
    anim.begin(focus, 2);
    anim.advance(&mut cs, &mut focus, &g);
    assert!(anim.is_transitioning());

    anim.settle(&mut cs, &mut focus, &g);
    assert_eq!(focus, 2);
    assert_eq!(anim, AnimationState::resting(2));
    assert_eq!(cs[2].placement, Placement::FACING);
}

#[test]
fn empty_carousel_never_moves() {
    let g = geometry();
    let mut focus = 0;
    let mut anim = AnimationState::resting(0);
    anim.begin(0, 1);
    assert_eq!(anim.advance(&mut [], &mut focus, &g), TickOutcome::Idle);
    assert!(!anim.is_transitioning());
}

#[test]
fn edge_fade_tracks_the_fractional_position() {
    let g = geometry();
    let mut cs = covers(5);
    let mut focus = 2;
    let mut anim = AnimationState::resting(focus);
    assert_eq!(anim.edge_fade(), None);

    anim.begin(focus, 3);
    let mut fades = Vec::new();
    while let TickOutcome::Moving { .. } = anim.advance(&mut cs, &mut focus, &g) {
        let edge = anim.edge_fade().unwrap();
        assert_eq!(edge.direction, Direction::Forward);
        assert_eq!(i64::from(edge.fade), anim.frame().frac().raw() >> 8);
        fades.push(edge.fade);
    }
    assert!(fades.len() > 1);
    assert!(fades[0] > 0);
    assert!(fades.windows(2).all(|w| w[0] < w[1]), "{fades:?}");
    assert_eq!(anim.edge_fade(), None);

    // Backward the fraction starts near one and falls.
    anim.begin(focus, 2);
    let mut fades = Vec::new();
    while let TickOutcome::Moving { .. } = anim.advance(&mut cs, &mut focus, &g) {
        fades.push(anim.edge_fade().unwrap().fade);
    }
    assert!(fades[0] > 128);
    assert!(fades.windows(2).all(|w| w[0] > w[1]), "{fades:?}");
}
