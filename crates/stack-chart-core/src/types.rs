// File: crates/stack-chart-core/src/types.rs
// Summary: Shared viewport types and default sizes (margins, plotting rectangle).

use serde::Deserialize;

use crate::geometry::Rect;

/// Default chart width in pixels, used until the renderer reports a measured width.
pub const WIDTH: f64 = 500.0;
/// Default chart height in pixels.
pub const HEIGHT: f64 = 500.0;

/// Screen margins, in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct Insets {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl Insets {
    pub const fn new(left: f64, right: f64, top: f64, bottom: f64) -> Self {
        Self { left, right, top, bottom }
    }
    pub const fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }
    /// Total horizontal inset (left + right).
    pub fn hsum(&self) -> f64 { self.left + self.right }
    /// Total vertical inset (top + bottom).
    pub fn vsum(&self) -> f64 { self.top + self.bottom }
}

impl Default for Insets {
    fn default() -> Self {
        Self::new(60.0, 30.0, 20.0, 30.0)
    }
}

/// Pixel rectangle handed in by the renderer. The engine never measures; it
/// only derives functions of this value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub margin: Insets,
}

impl Viewport {
    pub const fn new(width: f64, height: f64, margin: Insets) -> Self {
        Self { width, height, margin }
    }

    /// Same viewport with a new width, as after a container resize.
    pub fn with_width(mut self, width: f64) -> Self {
        self.width = width;
        self
    }

    pub fn plot_left(&self) -> f64 { self.margin.left }
    pub fn plot_right(&self) -> f64 { self.width - self.margin.right }
    pub fn plot_top(&self) -> f64 { self.margin.top }
    pub fn plot_bottom(&self) -> f64 { self.height - self.margin.bottom }
    pub fn plot_width(&self) -> f64 { self.width - self.margin.hsum() }
    pub fn plot_height(&self) -> f64 { self.height - self.margin.vsum() }

    /// The plotting rectangle inside the margins.
    pub fn plot_rect(&self) -> Rect {
        Rect::from_ltrb(self.plot_left(), self.plot_top(), self.plot_right(), self.plot_bottom())
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(WIDTH, HEIGHT, Insets::default())
    }
}
