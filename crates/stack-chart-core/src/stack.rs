// File: crates/stack-chart-core/src/stack.rs
// Summary: Cumulative stacking of series values into per-key (baseline, top) bands.

use crate::error::Result;
use crate::series::{Frame, Observation, SeriesKeys};

/// Value-space interval one series occupies at one observation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Band {
    pub baseline: f64,
    pub top: f64,
}

impl Band {
    pub fn height(&self) -> f64 { self.top - self.baseline }
}

/// Bands for one series key, aligned index-for-index with the observations.
#[derive(Clone, Debug, PartialEq)]
pub struct Layer {
    pub key: String,
    pub bands: Vec<Band>,
}

/// All layers in stacking order. Rebuilt from scratch on every input change.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Layers(Vec<Layer>);

impl Layers {
    pub fn len(&self) -> usize { self.0.len() }
    pub fn is_empty(&self) -> bool { self.0.is_empty() }
    pub fn iter(&self) -> std::slice::Iter<'_, Layer> { self.0.iter() }
    pub fn as_slice(&self) -> &[Layer] { &self.0 }

    pub fn get(&self, key: &str) -> Option<&Layer> {
        self.0.iter().find(|l| l.key == key)
    }

    /// Tallest fully summed column: the largest top of the last layer,
    /// never below 0.
    pub fn max_top(&self) -> f64 {
        self.0
            .last()
            .map(|l| l.bands.iter().fold(0.0_f64, |m, b| m.max(b.top)))
            .unwrap_or(0.0)
    }
}

impl<'a> IntoIterator for &'a Layers {
    type Item = &'a Layer;
    type IntoIter = std::slice::Iter<'a, Layer>;
    fn into_iter(self) -> Self::IntoIter { self.0.iter() }
}

/// Stack `observations` in `keys` order with a zero baseline and no reordering.
///
/// Fails on the first missing or non-finite value; nothing is zero-filled.
pub fn build_layers(observations: &[Observation], keys: &SeriesKeys) -> Result<Layers> {
    let mut running = vec![0.0_f64; observations.len()];
    let mut layers = Vec::with_capacity(keys.len());
    for key in keys.iter() {
        let mut bands = Vec::with_capacity(observations.len());
        for (row, obs) in observations.iter().enumerate() {
            let v = obs.require(row, key)?;
            let baseline = running[row];
            let top = baseline + v;
            running[row] = top;
            bands.push(Band { baseline, top });
        }
        layers.push(Layer { key: key.to_string(), bands });
    }
    tracing::debug!(rows = observations.len(), keys = keys.len(), "built stack layers");
    Ok(Layers(layers))
}

/// Layers for an already validated frame.
pub fn frame_layers(frame: &Frame) -> Result<Layers> {
    build_layers(frame.observations(), frame.keys())
}
