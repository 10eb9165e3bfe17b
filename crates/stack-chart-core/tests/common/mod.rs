// File: crates/stack-chart-core/tests/common/mod.rs
// Purpose: Shared fixtures for the integration tests.
#![allow(dead_code)]

use chrono::{DateTime, Duration, TimeZone, Utc};
use stack_chart_core::{Frame, Insets, Observation, SeriesKeys, Viewport};

pub const NO_MARGIN: Insets = Insets::zero();

pub fn day(n: i64) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap() + Duration::days(n)
}

pub fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

/// Rows of (key, value) pairs dated one day apart.
pub fn frame(keys: &[&str], rows: &[&[f64]]) -> Frame {
    let keys = SeriesKeys::new(keys.iter().copied()).unwrap();
    let observations = rows
        .iter()
        .enumerate()
        .map(|(i, row)| {
            keys.iter()
                .zip(row.iter())
                .fold(Observation::new(day(i as i64)), |o, (k, &v)| o.with_value(k, v))
        })
        .collect();
    Frame::new(keys, observations).unwrap()
}

/// The three-row, three-series fixture whose tallest column sums to 190.
pub fn fruit_frame() -> Frame {
    frame(
        &["apple", "banana", "cherries"],
        &[&[20.0, 60.0, 50.0], &[70.0, 50.0, 70.0], &[10.0, 90.0, 20.0]],
    )
}

pub fn square(side: f64) -> Viewport {
    Viewport::new(side, side, NO_MARGIN)
}
