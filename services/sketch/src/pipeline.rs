//! Per-frame contour pipeline: extract, smooth, rescale, clip.

use isoband::{
    clip_to_box, extract_band, rescale, smooth_all, Band, ClipBox, IsobandResult, OutputSize,
    Polyline, ScalarGrid,
};
use rayon::prelude::*;
use serde::Serialize;
use tracing::debug;

use crate::config::{ConfigError, SketchConfig};

/// Boundary polylines of one band in output coordinates.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Layer {
    pub band_index: usize,
    pub band: Band,
    pub polylines: Vec<Polyline>,
}

#[derive(Debug, Clone)]
pub struct FramePipeline {
    bands: Vec<Band>,
    smoothing_passes: u32,
    output: OutputSize,
    viewport: ClipBox,
}

impl FramePipeline {
    pub fn new(
        bands: Vec<Band>,
        smoothing_passes: u32,
        output: OutputSize,
        viewport: ClipBox,
    ) -> Self {
        Self {
            bands,
            smoothing_passes,
            output,
            viewport,
        }
    }

    pub fn from_config(config: &SketchConfig) -> Result<Self, ConfigError> {
        Ok(Self::new(
            config.bands()?,
            config.smoothing_passes,
            config.output_size(),
            config.viewport(),
        ))
    }

    pub fn bands(&self) -> &[Band] {
        &self.bands
    }

    /// Run every band over `grid`; layers come back in band order.
    pub fn run(&self, grid: &ScalarGrid) -> IsobandResult<Vec<Layer>> {
        let layers: Vec<Layer> = self
            .bands
            .par_iter()
            .enumerate()
            .map(|(band_index, band)| self.run_band(grid, band_index, band))
            .collect::<IsobandResult<_>>()?;

        debug!(
            bands = layers.len(),
            polylines = layers.iter().map(|l| l.polylines.len()).sum::<usize>(),
            "Frame contours ready"
        );
        Ok(layers)
    }

    fn run_band(&self, grid: &ScalarGrid, band_index: usize, band: &Band) -> IsobandResult<Layer> {
        let extracted = extract_band(grid, band)?;
        let smoothed = smooth_all(&extracted, self.smoothing_passes);
        let scaled = rescale(&smoothed, grid.size(), self.output);
        Ok(Layer {
            band_index,
            band: *band,
            polylines: clip_to_box(&scaled, &self.viewport),
        })
    }
}

/// Total point count over all layers.
pub fn point_count(layers: &[Layer]) -> usize {
    layers
        .iter()
        .flat_map(|l| &l.polylines)
        .map(Polyline::len)
        .sum()
}
