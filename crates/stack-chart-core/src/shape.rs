// File: crates/stack-chart-core/src/shape.rs
// Summary: Pixel-space outlines per layer: filled area for series, one stacked column for a single observation.

use crate::chart::{ChartGeometry, RenderMode};
use crate::geometry::{Point, Rect};
use crate::series::Frame;
use crate::stack::Layer;

/// Upper bound on the single-column width, in pixels.
pub const MAX_COLUMN_WIDTH: f64 = 500.0;

#[derive(Clone, Debug, PartialEq)]
pub enum LayerShape {
    /// `upper` follows the band tops left to right, `lower` the baselines.
    Area { key: String, upper: Vec<Point>, lower: Vec<Point> },
    Column { key: String, rect: Rect },
}

impl LayerShape {
    pub fn key(&self) -> &str {
        match self {
            LayerShape::Area { key, .. } | LayerShape::Column { key, .. } => key,
        }
    }

    /// Closed polygon: tops forward, then baselines back.
    pub fn outline(&self) -> Vec<Point> {
        match self {
            LayerShape::Area { upper, lower, .. } => {
                let mut pts = Vec::with_capacity(upper.len() + lower.len());
                pts.extend_from_slice(upper);
                pts.extend(lower.iter().rev().copied());
                pts
            }
            LayerShape::Column { rect, .. } => vec![
                (rect.left, rect.top),
                (rect.right(), rect.top),
                (rect.right(), rect.bottom()),
                (rect.left, rect.bottom()),
            ],
        }
    }
}

/// Width of the single stacked column: half the plot, capped at `max_width`.
pub fn column_width(plot_width: f64, max_width: f64) -> f64 {
    max_width.min(plot_width / 2.0)
}

/// Shapes for every non-empty layer, in stacking order.
///
/// `frame` must be the frame `geometry` was computed from.
pub fn layer_shapes(geometry: &ChartGeometry, frame: &Frame, max_column_width: f64) -> Vec<LayerShape> {
    let mode = geometry.render_mode();
    geometry
        .layers()
        .iter()
        .filter(|l| !l.bands.is_empty())
        .filter_map(|layer| match mode {
            RenderMode::Area => Some(area(geometry, frame, layer)),
            RenderMode::SingleColumn => column(geometry, frame, layer, max_column_width),
        })
        .collect()
}

fn area(geometry: &ChartGeometry, frame: &Frame, layer: &Layer) -> LayerShape {
    let m = geometry.mapper();
    let (upper, lower) = frame
        .observations()
        .iter()
        .zip(&layer.bands)
        .map(|(o, b)| {
            let x = m.x(o.date);
            ((x, m.y(b.top)), (x, m.y(b.baseline)))
        })
        .unzip();
    LayerShape::Area { key: layer.key.clone(), upper, lower }
}

fn column(geometry: &ChartGeometry, frame: &Frame, layer: &Layer, max_width: f64) -> Option<LayerShape> {
    let m = geometry.mapper();
    let band = layer.bands.first()?;
    let date = frame.get(0)?.date;
    let width = column_width(geometry.viewport().plot_width(), max_width);
    let top = m.y(band.top);
    let rect = Rect::from_ltwh(m.x(date) - width / 2.0, top, width, m.y(band.baseline) - top);
    Some(LayerShape::Column { key: layer.key.clone(), rect })
}
