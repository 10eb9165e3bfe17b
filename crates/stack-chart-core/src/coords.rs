// File: crates/stack-chart-core/src/coords.rs
// Summary: Coordinate mapper combining the date extent and tick domain into x/y pixel functions.

use chrono::{DateTime, Utc};

use crate::scale::{LinearScale, TimeScale};
use crate::series::Frame;
use crate::ticks::TickSet;
use crate::types::Viewport;

/// x/y pixel functions shared by axis and shape rendering.
///
/// x maps `[min(date), max(date)]` onto `[plot_left, plot_right]`; y maps
/// `[0, domain_max]` onto `[plot_bottom, plot_top]`, so larger values sit
/// higher on screen. Either scale collapses to its range midpoint when its
/// extent is a single point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CoordinateMapper {
    x: TimeScale,
    y: LinearScale,
}

impl CoordinateMapper {
    pub fn new(frame: &Frame, viewport: &Viewport, ticks: &TickSet) -> Self {
        Self::from_extent(frame.date_extent(), viewport, ticks.domain_max)
    }

    /// Build from a raw extent. With no observations the extent collapses
    /// onto the Unix epoch.
    pub fn from_extent(
        extent: Option<(DateTime<Utc>, DateTime<Utc>)>,
        viewport: &Viewport,
        domain_max: f64,
    ) -> Self {
        let (start, end) = extent.unwrap_or_default();
        let x = TimeScale::new(start, end, (viewport.plot_left(), viewport.plot_right()));
        let y = LinearScale::new((0.0, domain_max), (viewport.plot_bottom(), viewport.plot_top()));
        Self { x, y }
    }

    #[inline]
    pub fn x(&self, date: DateTime<Utc>) -> f64 { self.x.apply(date) }

    #[inline]
    pub fn y(&self, value: f64) -> f64 { self.y.apply(value) }

    pub fn x_scale(&self) -> &TimeScale { &self.x }
    pub fn y_scale(&self) -> &LinearScale { &self.y }
}
