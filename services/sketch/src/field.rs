//! Animated noise fields sampled onto the contour grid.

use isoband::{GridSize, IsobandResult, ScalarGrid};
use noise::{Fbm, MultiFractal, NoiseFn, Perlin};

use crate::config::NoiseConfig;

/// Fractal Perlin noise over `(x, y, time)`, normalised to `[0, 1]`.
pub struct NoiseField {
    fbm: Fbm<Perlin>,
    size: GridSize,
}

impl NoiseField {
    pub fn new(config: &NoiseConfig, size: GridSize) -> Self {
        let fbm = Fbm::<Perlin>::new(config.seed)
            .set_octaves(config.octaves)
            .set_frequency(config.frequency);
        Self { fbm, size }
    }

    pub fn size(&self) -> GridSize {
        self.size
    }

    /// Sample the field at `time` on the configured grid.
    ///
    /// Both axes share one scale so the noise is not stretched on
    /// non-square grids.
    pub fn sample(&self, time: f64) -> IsobandResult<ScalarGrid> {
        let scale = self.size.width.max(self.size.height).saturating_sub(1).max(1) as f64;
        ScalarGrid::from_fn(self.size.width, self.size.height, |col, row| {
            let v = self.fbm.get([col as f64 / scale, row as f64 / scale, time]);
            ((v + 1.0) * 0.5).clamp(0.0, 1.0)
        })
    }
}
