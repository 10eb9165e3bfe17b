// File: crates/stack-chart-core/src/chart.rs
// Summary: Chart geometry bundle: layers, y ticks, coordinate mapper and pointer lookup for one frame.

use chrono::{DateTime, Utc};

use crate::coords::CoordinateMapper;
use crate::error::Result;
use crate::pointer;
use crate::series::Frame;
use crate::stack::{self, Layers};
use crate::ticks::{self, TickSet};
use crate::types::Viewport;

/// How the renderer should draw layers. More than one observation draws
/// filled areas; a single observation draws one stacked column.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderMode {
    Area,
    SingleColumn,
}

impl RenderMode {
    pub fn for_len(observations: usize) -> Self {
        if observations > 1 { RenderMode::Area } else { RenderMode::SingleColumn }
    }
}

/// Everything a renderer needs to draw one frame. Holds no reference to the
/// caller's data; recompute whenever the frame, viewport or tick count
/// changes.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartGeometry {
    layers: Layers,
    ticks: TickSet,
    mapper: CoordinateMapper,
    viewport: Viewport,
    extent: Option<(DateTime<Utc>, DateTime<Utc>)>,
    len: usize,
}

impl ChartGeometry {
    pub fn compute(frame: &Frame, viewport: &Viewport, tick_count: usize) -> Result<Self> {
        let layers = stack::frame_layers(frame)?;
        let ticks = ticks::compute_ticks(layers.max_top(), tick_count)?;
        let extent = frame.date_extent();
        let mapper = CoordinateMapper::from_extent(extent, viewport, ticks.domain_max);
        tracing::debug!(
            rows = frame.len(),
            layers = layers.len(),
            domain_max = ticks.domain_max,
            width = viewport.width,
            "computed chart geometry"
        );
        Ok(Self { layers, ticks, mapper, viewport: *viewport, extent, len: frame.len() })
    }

    /// Same data under a new viewport (e.g. after a resize). Layers and
    /// ticks depend only on the data and are carried over.
    pub fn with_viewport(&self, viewport: &Viewport) -> Self {
        let mapper = CoordinateMapper::from_extent(self.extent, viewport, self.ticks.domain_max);
        Self { mapper, viewport: *viewport, ..self.clone() }
    }

    pub fn layers(&self) -> &Layers { &self.layers }
    pub fn ticks(&self) -> &TickSet { &self.ticks }
    pub fn mapper(&self) -> &CoordinateMapper { &self.mapper }
    pub fn viewport(&self) -> &Viewport { &self.viewport }
    pub fn len(&self) -> usize { self.len }
    pub fn is_empty(&self) -> bool { self.len == 0 }

    pub fn render_mode(&self) -> RenderMode {
        RenderMode::for_len(self.len)
    }

    /// Observation index under a pointer at `pixel_x`; `None` with no data.
    pub fn resolve_index(&self, pixel_x: f64) -> Option<usize> {
        pointer::resolve_index(pixel_x, &self.viewport, self.len)
    }
}
