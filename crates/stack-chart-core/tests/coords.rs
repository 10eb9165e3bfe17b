// File: crates/stack-chart-core/tests/coords.rs
// Purpose: x/y pixel mapping, screen-space inversion and collapsed extents.

mod common;

use common::{approx, day, frame, fruit_frame};
use stack_chart_core::{compute_ticks, CoordinateMapper, Insets, LinearScale, Viewport};

fn viewport() -> Viewport {
    Viewport::new(800.0, 400.0, Insets::new(60.0, 30.0, 20.0, 30.0))
}

#[test]
fn y_maps_zero_to_bottom_and_domain_max_to_top() {
    let f = fruit_frame();
    let vp = viewport();
    let ticks = compute_ticks(190.0, 10).unwrap();
    let m = CoordinateMapper::new(&f, &vp, &ticks);
    assert_eq!(m.y(0.0), vp.height - vp.margin.bottom);
    assert!(approx(m.y(ticks.domain_max), vp.margin.top));
    // larger values sit higher on screen
    assert!(m.y(150.0) < m.y(50.0));
}

#[test]
fn x_spans_the_plot_between_first_and_last_date() {
    let f = fruit_frame();
    let vp = viewport();
    let m = CoordinateMapper::new(&f, &vp, &compute_ticks(190.0, 10).unwrap());
    assert_eq!(m.x(day(0)), 60.0);
    assert!(approx(m.x(day(2)), 770.0));
    assert!(approx(m.x(day(1)), 415.0));
    assert_eq!(m.x_scale().invert(415.0), Some(day(1)));
}

#[test]
fn single_observation_collapses_x_to_plot_middle() {
    let f = frame(&["a"], &[&[100.0]]);
    let vp = viewport();
    let m = CoordinateMapper::new(&f, &vp, &compute_ticks(100.0, 5).unwrap());
    let mid = (vp.plot_left() + vp.plot_right()) / 2.0;
    assert_eq!(m.x(day(0)), mid);
    assert_eq!(m.x(day(40)), mid);
}

#[test]
fn empty_frame_is_deterministic() {
    let f = frame(&["a"], &[]);
    let vp = viewport();
    let ticks = compute_ticks(0.0, 5).unwrap();
    let m = CoordinateMapper::new(&f, &vp, &ticks);
    let x = m.x(day(3));
    assert!(x.is_finite());
    assert_eq!(x, m.x(day(9)));
    let y_mid = (vp.plot_top() + vp.plot_bottom()) / 2.0;
    assert_eq!(m.y(0.0), y_mid);
    assert_eq!(m.y(42.0), y_mid);
}

#[test]
fn resize_only_moves_pixels() {
    let f = fruit_frame();
    let ticks = compute_ticks(190.0, 10).unwrap();
    let narrow = CoordinateMapper::new(&f, &viewport(), &ticks);
    let wide = CoordinateMapper::new(&f, &viewport().with_width(1200.0), &ticks);
    assert_eq!(narrow.x(day(0)), wide.x(day(0)));
    assert!(wide.x(day(2)) > narrow.x(day(2)));
    assert_eq!(narrow.y(120.0), wide.y(120.0));
}

#[test]
fn linear_scale_inverts() {
    let s = LinearScale::new((0.0, 200.0), (470.0, 20.0));
    for v in [0.0, 37.5, 100.0, 200.0] {
        assert!(approx(s.invert(s.apply(v)), v));
    }
    let collapsed = LinearScale::new((5.0, 5.0), (0.0, 10.0));
    assert!(collapsed.is_collapsed());
    assert_eq!(collapsed.invert(3.0), 5.0);
}
