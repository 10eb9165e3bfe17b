// File: crates/stack-chart-core/src/axis.rs
// Summary: Axis tick layout (pixel positions and labels) for the date and value axes.

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Utc};

use crate::coords::CoordinateMapper;
use crate::error::{ChartError, Result};
use crate::scale::Scale;
use crate::series::Frame;
use crate::ticks::TickSet;

/// Default label format for x ticks (four-digit year).
pub const DEFAULT_DATE_FORMAT: &str = "%Y";

/// A strftime pattern checked up front, so formatting cannot fail later.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DateFormat(String);

impl DateFormat {
    pub fn new(pattern: impl Into<String>) -> Result<Self> {
        let pattern = pattern.into();
        if StrftimeItems::new(&pattern).any(|i| matches!(i, Item::Error)) {
            return Err(ChartError::InvalidOption(format!("bad date format {pattern:?}")));
        }
        Ok(Self(pattern))
    }

    pub fn as_str(&self) -> &str { &self.0 }

    pub fn format(&self, date: DateTime<Utc>) -> String {
        date.format(&self.0).to_string()
    }
}

impl Default for DateFormat {
    fn default() -> Self { Self(DEFAULT_DATE_FORMAT.to_string()) }
}

/// One labelled axis position.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisTick<T> {
    pub value: T,
    pub pixel: f64,
    pub label: String,
}

fn place<S>(scale: &S, value: S::Input, label: String) -> AxisTick<S::Input>
where
    S: Scale,
    S::Input: Copy,
{
    AxisTick { value, pixel: scale.apply(value), label }
}

/// y ticks at their screen rows, labelled with the plain number.
pub fn y_axis_ticks(ticks: &TickSet, mapper: &CoordinateMapper) -> Vec<AxisTick<f64>> {
    y_axis_ticks_with(ticks, mapper, |v| v.to_string())
}

pub fn y_axis_ticks_with<F>(ticks: &TickSet, mapper: &CoordinateMapper, label: F) -> Vec<AxisTick<f64>>
where
    F: Fn(f64) -> String,
{
    ticks
        .ticks
        .iter()
        .map(|&v| place(mapper.y_scale(), v, label(v)))
        .collect()
}

/// One x tick per observation whose index is a multiple of `skip`.
pub fn x_axis_ticks(
    frame: &Frame,
    mapper: &CoordinateMapper,
    skip: usize,
    format: &DateFormat,
) -> Result<Vec<AxisTick<DateTime<Utc>>>> {
    if skip == 0 {
        return Err(ChartError::InvalidOption("x tick skip must be at least 1".into()));
    }
    Ok(frame
        .observations()
        .iter()
        .step_by(skip)
        .map(|o| place(mapper.x_scale(), o.date, format.format(o.date)))
        .collect())
}
