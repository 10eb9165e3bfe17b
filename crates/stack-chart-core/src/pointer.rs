// File: crates/stack-chart-core/src/pointer.rs
// Summary: Pointer x position to observation index, used for hover/tap inspection.

use crate::types::Viewport;

/// Map a horizontal pixel (relative to the chart's left edge) to the nearest
/// observation index, assuming observations are evenly spread across the
/// plotting rectangle.
///
/// Irregular date spacing is not taken into account: for a row whose x
/// position sits a fraction `f` of a slot away from its uniform position the
/// result can be off by `round(f)` rows. Positions outside the plot clamp to
/// the first or last index. Returns `None` when there are no observations;
/// a plot with no width resolves to index 0.
pub fn resolve_index(pixel_x: f64, viewport: &Viewport, count: usize) -> Option<usize> {
    if count == 0 {
        return None;
    }
    let last = count - 1;
    let plot_w = viewport.plot_width();
    if last == 0 || pixel_x.is_nan() || plot_w.is_nan() || plot_w <= 0.0 {
        return Some(0);
    }
    let proportion = (pixel_x - viewport.margin.left) / plot_w;
    let raw = (proportion * last as f64).round();
    let index = raw.clamp(0.0, last as f64) as usize;
    tracing::trace!(pixel_x, index, "resolved pointer index");
    Some(index)
}
