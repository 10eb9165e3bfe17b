// File: crates/stack-chart-core/src/ticks.rs
// Summary: "Nice" y-axis tick generation with a headroom tick above the tallest stack.

use crate::error::{ChartError, Result};
use crate::scale::LinearScale;

/// Default requested tick count.
pub const DEFAULT_TICK_COUNT: usize = 5;

/// Largest accepted tick count; the tick vector is sized from it.
pub const MAX_TICK_COUNT: usize = 10_000;

/// Ascending tick values plus the rounded upper domain bound they imply.
#[derive(Clone, Debug, PartialEq)]
pub struct TickSet {
    pub ticks: Vec<f64>,
    /// Spacing between ticks; 0 when the domain is collapsed.
    pub step: f64,
    /// Last tick; the authoritative y-domain upper bound.
    pub domain_max: f64,
}

impl TickSet {
    /// Linear map from `[0, domain_max]` onto `[pixel_low, pixel_high]`.
    pub fn linear_scale(&self, pixel_low: f64, pixel_high: f64) -> LinearScale {
        LinearScale::new((0.0, self.domain_max), (pixel_low, pixel_high))
    }
}

/// Compute ticks for a stack whose tallest column is `max_value`.
///
/// The step is the raw increment `max_value / tick_count` rounded up to a
/// multiple of its own leading power of ten (so 19 becomes 20 and 0.3
/// stays 0.3). Ticks run from 0 in whole steps until one reaches or passes
/// `max_value`; that last tick becomes `domain_max`. The output may hold
/// one more tick than requested.
///
/// `tick_count` must lie in `1..=MAX_TICK_COUNT`. A maximum so small that
/// the raw increment is zero or subnormal has no representable step and is
/// rejected with [`ChartError::NonFiniteMax`].
///
/// A negative `max_value` is outside the contract: it yields `[0]` with a
/// zero domain and is not corrected.
pub fn compute_ticks(max_value: f64, tick_count: usize) -> Result<TickSet> {
    if tick_count == 0 || tick_count > MAX_TICK_COUNT {
        return Err(ChartError::InvalidTickCount(tick_count));
    }
    if !max_value.is_finite() {
        return Err(ChartError::NonFiniteMax(max_value));
    }
    if max_value <= 0.0 {
        tracing::debug!(max_value, "collapsed y domain");
        return Ok(TickSet { ticks: vec![0.0], step: 0.0, domain_max: 0.0 });
    }

    let step = match nice_step(max_value / tick_count as f64) {
        Some(step) if step.is_finite() && step > 0.0 => step,
        _ => return Err(ChartError::NonFiniteMax(max_value)),
    };
    // step >= max_value / tick_count, so about tick_count + 1 ticks
    let mut ticks = Vec::with_capacity(tick_count + 1);
    let mut k = 0u64;
    loop {
        let v = k as f64 * step;
        ticks.push(v);
        if v >= max_value {
            break;
        }
        k += 1;
    }
    let domain_max = ticks[ticks.len() - 1];
    tracing::debug!(max_value, tick_count, step, domain_max, n = ticks.len(), "computed y ticks");
    Ok(TickSet { ticks, step, domain_max })
}

/// Round `raw` up to the next multiple of `10^(digits - 1)`, where `digits`
/// is `log10(raw) + 1` truncated toward zero. `None` unless `raw` is a
/// normal positive float.
fn nice_step(raw: f64) -> Option<f64> {
    if !raw.is_normal() || raw < 0.0 {
        return None;
    }
    let digits = (raw.log10() + 1.0).trunc() as i32;
    let magnitude = 10f64.powf(f64::from(digits.saturating_sub(1)));
    Some((raw / magnitude).ceil() * magnitude)
}

#[cfg(test)]
mod tests {
    use super::nice_step;

    #[test]
    fn nice_step_rounds_up_within_magnitude() {
        assert_eq!(nice_step(19.0), Some(20.0));
        assert_eq!(nice_step(20.0), Some(20.0));
        assert_eq!(nice_step(30.0), Some(30.0));
        assert_eq!(nice_step(101.0), Some(200.0));
        assert_eq!(nice_step(7.0), Some(7.0));
        // sub-unit increments share the 0.1 magnitude
        assert!((nice_step(0.5).unwrap() - 0.5).abs() < 1e-12);
        assert!((nice_step(0.05).unwrap() - 0.1).abs() < 1e-12);
    }

    #[test]
    fn nice_step_needs_a_normal_increment() {
        assert_eq!(nice_step(0.0), None);
        assert_eq!(nice_step(5e-324), None);
        assert_eq!(nice_step(f64::MIN_POSITIVE / 2.0), None);
        assert!(nice_step(f64::MIN_POSITIVE).is_some());
    }
}
