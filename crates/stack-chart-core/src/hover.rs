// File: crates/stack-chart-core/src/hover.rs
// Summary: Caller-owned hover state, change detection for pointer moves, and hover markers/titles.

use crate::axis::DateFormat;
use crate::chart::ChartGeometry;
use crate::series::Frame;

/// What the renderer last reported as hovered. Owned by the caller and
/// passed back in on every pointer event.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HoverState {
    pub index: Option<usize>,
    pub key: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HoverEvent {
    Moved { key: String, index: usize },
    Left,
}

impl HoverState {
    /// Record a pointer over layer `key` at observation `index`. Emits an
    /// event only when either changed.
    pub fn pointer_move(&mut self, key: &str, index: usize) -> Option<HoverEvent> {
        if self.index == Some(index) && self.key.as_deref() == Some(key) {
            return None;
        }
        self.index = Some(index);
        self.key = Some(key.to_string());
        Some(HoverEvent::Moved { key: key.to_string(), index })
    }

    /// Pointer left the chart. The last key is kept; the index is cleared.
    pub fn pointer_leave(&mut self) -> HoverEvent {
        self.index = None;
        HoverEvent::Left
    }
}

/// Guide line and per-series dots for the hovered observation.
#[derive(Clone, Debug, PartialEq)]
pub struct HoverMarkers {
    pub x: f64,
    pub line_top: f64,
    pub line_bottom: f64,
    /// (key, y) at the top edge of each layer, in stacking order.
    pub dots: Vec<(String, f64)>,
}

pub fn hover_markers(geometry: &ChartGeometry, frame: &Frame, index: usize) -> Option<HoverMarkers> {
    let obs = frame.get(index)?;
    let m = geometry.mapper();
    let plot = geometry.viewport().plot_rect();
    let dots = geometry
        .layers()
        .iter()
        .filter_map(|l| l.bands.get(index).map(|b| (l.key.clone(), m.y(b.top))))
        .collect();
    Some(HoverMarkers { x: m.x(obs.date), line_top: plot.top, line_bottom: plot.bottom(), dots })
}

/// Tooltip text: `key: (date, value)` for a hovered row, else just `key`.
pub fn hover_title(frame: &Frame, key: &str, index: Option<usize>, format: &DateFormat) -> String {
    let hovered = index
        .and_then(|i| frame.get(i))
        .and_then(|o| o.value(key).map(|v| (o.date, v)));
    match hovered {
        Some((date, v)) => format!("{key}: ({}, {v})", format.format(date)),
        None => key.to_string(),
    }
}
