// File: crates/stack-chart-core/src/options.rs
// Summary: Chart options with defaults, TOML loading and validation.

use serde::Deserialize;

use crate::axis::{DateFormat, DEFAULT_DATE_FORMAT};
use crate::error::{ChartError, Result};
use crate::shape::MAX_COLUMN_WIDTH;
use crate::ticks::{DEFAULT_TICK_COUNT, MAX_TICK_COUNT};
use crate::types::{Insets, Viewport, HEIGHT, WIDTH};

/// Renderer-facing knobs. Every field falls back to its default when absent
/// from TOML. `width` is only the starting value; renderers overwrite it on
/// resize.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ChartOptions {
    pub tick_count: usize,
    pub width: f64,
    pub height: f64,
    pub margin: Insets,
    pub x_ticks_skip: usize,
    pub max_column_width: f64,
    pub date_format: String,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            tick_count: DEFAULT_TICK_COUNT,
            width: WIDTH,
            height: HEIGHT,
            margin: Insets::default(),
            x_ticks_skip: 1,
            max_column_width: MAX_COLUMN_WIDTH,
            date_format: DEFAULT_DATE_FORMAT.to_string(),
        }
    }
}

impl ChartOptions {
    /// Parse and validate options from a TOML document.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let opts: ChartOptions = toml::from_str(s)?;
        opts.validate()?;
        Ok(opts)
    }

    pub fn validate(&self) -> Result<()> {
        if self.tick_count == 0 || self.tick_count > MAX_TICK_COUNT {
            return Err(ChartError::InvalidTickCount(self.tick_count));
        }
        if self.x_ticks_skip == 0 {
            return Err(ChartError::InvalidOption("x_ticks_skip must be at least 1".into()));
        }
        if !is_positive(self.width) || !is_positive(self.height) {
            return Err(ChartError::InvalidOption(format!(
                "chart size must be positive, got {}x{}",
                self.width, self.height
            )));
        }
        if !is_positive(self.max_column_width) {
            return Err(ChartError::InvalidOption("max_column_width must be positive".into()));
        }
        self.date_format()?;
        Ok(())
    }

    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.width, self.height, self.margin)
    }

    pub fn date_format(&self) -> Result<DateFormat> {
        DateFormat::new(self.date_format.clone())
    }
}

fn is_positive(v: f64) -> bool {
    v.is_finite() && v > 0.0
}
