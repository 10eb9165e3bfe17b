// File: crates/stack-chart-core/src/lib.rs
// Summary: Core library entry point; exports the stacked-area data-to-geometry engine.

pub mod axis;
pub mod chart;
pub mod coords;
pub mod error;
pub mod geometry;
pub mod hover;
pub mod options;
pub mod pointer;
pub mod scale;
pub mod series;
pub mod shape;
pub mod stack;
pub mod ticks;
pub mod types;

pub use axis::{x_axis_ticks, y_axis_ticks, AxisTick, DateFormat};
pub use chart::{ChartGeometry, RenderMode};
pub use coords::CoordinateMapper;
pub use error::{ChartError, Result};
pub use hover::{hover_markers, hover_title, HoverEvent, HoverMarkers, HoverState};
pub use options::ChartOptions;
pub use pointer::resolve_index;
pub use scale::{LinearScale, Scale, TimeScale};
pub use series::{Frame, Observation, SeriesKeys};
pub use shape::{layer_shapes, LayerShape};
pub use stack::{build_layers, Band, Layer, Layers};
pub use ticks::{compute_ticks, TickSet, DEFAULT_TICK_COUNT, MAX_TICK_COUNT};
pub use types::{Insets, Viewport};
