use super::*;

#[test]
fn brightness_scales_color_but_not_alpha() {
    let px = [200, 100, 50, 255];
    assert_eq!(Brightness::FULL.apply(px), px);
    assert_eq!(Brightness::HALF.apply(px), [100, 50, 25, 255]);
    assert_eq!(Brightness(0).apply(px), [0, 0, 0, 255]);
}

#[test]
fn full_range_spans_the_buffer() {
    assert_eq!(ColumnRange::full(800), ColumnRange::new(0, 799));
}

#[test]
fn drawn_bounds_width_and_center() {
    let b = DrawnBounds {
        left: 333,
        right: 467,
        top: 0,
        bottom: 399,
    };
    assert_eq!(b.width(), 135);
    assert_eq!(b.center_x(), 400);
}
