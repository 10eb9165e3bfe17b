// File: crates/stack-chart-core/src/scale.rs
// Summary: Linear value scale and UTC time scale mapping data into pixel space.

use chrono::{DateTime, Utc};

/// Maps a data-space input to a pixel coordinate.
pub trait Scale {
    type Input;
    fn apply(&self, v: Self::Input) -> f64;
    /// Pixel range as (start, end); end may be smaller than start.
    fn range(&self) -> (f64, f64);
}

/// Affine map from `domain` onto `range`.
///
/// A collapsed domain (both bounds equal) maps every input to the middle of
/// the range, the convention of d3-style linear scales.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    d0: f64,
    d1: f64,
    r0: f64,
    r1: f64,
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { d0: domain.0, d1: domain.1, r0: range.0, r1: range.1 }
    }

    pub fn is_collapsed(&self) -> bool { self.d1 == self.d0 }

    #[inline]
    pub fn apply(&self, v: f64) -> f64 {
        let span = self.d1 - self.d0;
        if span == 0.0 {
            return (self.r0 + self.r1) * 0.5;
        }
        self.r0 + (v - self.d0) / span * (self.r1 - self.r0)
    }

    /// Pixel back to data space. A collapsed domain inverts to its low bound.
    #[inline]
    pub fn invert(&self, px: f64) -> f64 {
        let span = self.r1 - self.r0;
        if span == 0.0 || self.is_collapsed() {
            return self.d0;
        }
        self.d0 + (px - self.r0) / span * (self.d1 - self.d0)
    }
}

impl Scale for LinearScale {
    type Input = f64;
    fn apply(&self, v: f64) -> f64 { LinearScale::apply(self, v) }
    fn range(&self) -> (f64, f64) { (self.r0, self.r1) }
}

/// Horizontal time scale over a `[start, end]` date extent, linear in
/// milliseconds since the Unix epoch.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimeScale {
    inner: LinearScale,
}

impl TimeScale {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>, range: (f64, f64)) -> Self {
        let inner = LinearScale::new(
            (start.timestamp_millis() as f64, end.timestamp_millis() as f64),
            range,
        );
        Self { inner }
    }

    #[inline]
    pub fn apply(&self, date: DateTime<Utc>) -> f64 {
        self.inner.apply(date.timestamp_millis() as f64)
    }

    /// Nearest millisecond date under `px`; `None` outside chrono's range.
    pub fn invert(&self, px: f64) -> Option<DateTime<Utc>> {
        let ms = self.inner.invert(px).round();
        if !ms.is_finite() {
            return None;
        }
        DateTime::from_timestamp_millis(ms as i64)
    }
}

impl Scale for TimeScale {
    type Input = DateTime<Utc>;
    fn apply(&self, v: DateTime<Utc>) -> f64 { TimeScale::apply(self, v) }
    fn range(&self) -> (f64, f64) { self.inner.range() }
}
