// File: crates/stack-chart-core/tests/ticks.rs
// Purpose: Nice-tick generation, headroom tick, degenerate domains and the linear y scale.

mod common;

use common::{approx, fruit_frame};
use stack_chart_core::{build_layers, compute_ticks, ChartError, MAX_TICK_COUNT};

#[test]
fn zero_max_yields_single_tick() {
    let t = compute_ticks(0.0, 10).expect("ticks");
    assert_eq!(t.ticks, vec![0.0]);
    assert_eq!(t.domain_max, 0.0);

    // collapsed domain maps everything to the middle of the pixel range
    let y = t.linear_scale(1000.0, 0.0);
    assert_eq!(y.apply(0.0), 500.0);
    assert_eq!(y.apply(1.0), 500.0);
}

#[test]
fn single_value_hundred_five_ticks() {
    let t = compute_ticks(100.0, 5).unwrap();
    assert_eq!(t.ticks, vec![0.0, 20.0, 40.0, 60.0, 80.0, 100.0]);
    assert_eq!(t.step, 20.0);
    assert_eq!(t.domain_max, 100.0);

    let y = t.linear_scale(1000.0, 0.0);
    assert_eq!(y.apply(0.0), 1000.0);
    assert_eq!(y.apply(50.0), 500.0);
    assert_eq!(y.apply(100.0), 0.0);
}

#[test]
fn three_hundred_ten_ticks() {
    let t = compute_ticks(300.0, 10).unwrap();
    let want: Vec<f64> = (0..=10).map(|k| k as f64 * 30.0).collect();
    assert_eq!(t.ticks, want);

    let y = t.linear_scale(1000.0, 0.0);
    assert_eq!(y.apply(75.0), 750.0);
    assert_eq!(y.apply(150.0), 500.0);
    assert_eq!(y.apply(225.0), 250.0);
    assert_eq!(y.apply(300.0), 0.0);
}

#[test]
fn stacked_fixture_rounds_up_to_two_hundred() {
    let frame = fruit_frame();
    let layers = build_layers(frame.observations(), frame.keys()).unwrap();
    assert_eq!(layers.max_top(), 190.0);

    let t = compute_ticks(layers.max_top(), 10).unwrap();
    let want: Vec<f64> = (0..=10).map(|k| k as f64 * 20.0).collect();
    assert_eq!(t.ticks, want);
    assert_eq!(t.domain_max, 200.0);

    let y = t.linear_scale(1000.0, 0.0);
    assert_eq!(y.apply(50.0), 750.0);
    assert_eq!(y.apply(100.0), 500.0);
    assert_eq!(y.apply(150.0), 250.0);
    assert_eq!(y.apply(200.0), 0.0);
}

#[test]
fn ticks_ascend_from_zero_and_cover_max() {
    let maxes = [0.3, 1.0, 7.5, 19.0, 99.9, 101.0, 190.0, 1234.5, 98_765.0, 3.0e7];
    for &max in &maxes {
        for count in 1..=12usize {
            let t = compute_ticks(max, count).unwrap();
            assert_eq!(t.ticks[0], 0.0);
            assert!(t.ticks.windows(2).all(|w| w[0] < w[1]), "not ascending for {max}/{count}");
            let last = *t.ticks.last().unwrap();
            assert_eq!(last, t.domain_max);
            assert!(last >= max, "{last} < {max}");
            // the tick just before the last one is still below max
            if t.ticks.len() > 1 {
                assert!(t.ticks[t.ticks.len() - 2] < max);
            }
            let multiple = last / t.step;
            assert!(approx(multiple, multiple.round()), "{last} not a multiple of {}", t.step);
            assert!(t.ticks.len() <= count + 2);
        }
    }
}

#[test]
fn small_increments_use_tenth_magnitude() {
    let t = compute_ticks(0.3, 6).unwrap();
    assert!(approx(t.step, 0.1));
    assert!(approx(t.domain_max, 0.3) || t.domain_max > 0.3);
}

#[test]
fn zero_tick_count_is_rejected() {
    let err = compute_ticks(10.0, 0).unwrap_err();
    assert!(matches!(err, ChartError::InvalidTickCount(0)));
}

#[test]
fn non_finite_max_is_rejected() {
    assert!(matches!(compute_ticks(f64::NAN, 5), Err(ChartError::NonFiniteMax(_))));
    assert!(matches!(compute_ticks(f64::INFINITY, 5), Err(ChartError::NonFiniteMax(_))));
}

#[test]
fn vanishing_max_is_rejected_not_panicking() {
    // the raw increment underflows to zero or a subnormal
    assert!(matches!(compute_ticks(5e-324, 2), Err(ChartError::NonFiniteMax(_))));
    assert!(matches!(compute_ticks(f64::MIN_POSITIVE, 10), Err(ChartError::NonFiniteMax(_))));

    // smallest normal maximum with one tick still works
    let t = compute_ticks(f64::MIN_POSITIVE, 1).expect("ticks");
    assert_eq!(t.ticks[0], 0.0);
    assert!(t.domain_max >= f64::MIN_POSITIVE);
}

#[test]
fn oversized_tick_count_is_rejected() {
    assert!(matches!(compute_ticks(1.0, usize::MAX), Err(ChartError::InvalidTickCount(usize::MAX))));
    assert!(matches!(
        compute_ticks(1.0, MAX_TICK_COUNT + 1),
        Err(ChartError::InvalidTickCount(n)) if n == MAX_TICK_COUNT + 1
    ));

    let t = compute_ticks(1.0e6, MAX_TICK_COUNT).expect("ticks");
    assert!(t.ticks.len() <= MAX_TICK_COUNT + 2);
    assert!(t.domain_max >= 1.0e6);
}

#[test]
fn recomputation_is_idempotent() {
    assert_eq!(compute_ticks(190.0, 10).unwrap(), compute_ticks(190.0, 10).unwrap());
}
