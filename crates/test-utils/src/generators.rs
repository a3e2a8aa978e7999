//! Synthetic scalar fields for exercising contour extraction.
//!
//! Every generator returns samples in row-major order (row 0 first) and is
//! fully deterministic, so tests can compare outputs across runs.

use std::f64::consts::PI;

/// Creates a linear ramp along the x axis.
///
/// Each sample is `col / (width - 1)`, so values run from 0.0 on the left
/// column to 1.0 on the right column.
///
/// # Example
///
/// ```
/// use test_utils::create_ramp_grid;
///
/// let grid = create_ramp_grid(5, 2);
/// assert_eq!(grid[0], 0.0);
/// assert_eq!(grid[4], 1.0);
/// assert_eq!(grid[5], 0.0); // row 1 starts again at the left
/// ```
pub fn create_ramp_grid(width: usize, height: usize) -> Vec<f64> {
    let span = width.saturating_sub(1).max(1) as f64;
    let mut data = Vec::with_capacity(width * height);
    for _row in 0..height {
        for col in 0..width {
            data.push(col as f64 / span);
        }
    }
    data
}

/// Creates a single smooth peak centred on the grid.
///
/// Values fall off linearly with distance from the centre: 1.0 at the centre
/// down to 0.0 at `radius` samples away and below.
pub fn create_radial_peak_grid(width: usize, height: usize, radius: f64) -> Vec<f64> {
    let cx = (width as f64 - 1.0) / 2.0;
    let cy = (height as f64 - 1.0) / 2.0;
    let mut data = Vec::with_capacity(width * height);
    for row in 0..height {
        for col in 0..width {
            let d = (col as f64 - cx).hypot(row as f64 - cy);
            data.push((1.0 - d / radius).max(0.0));
        }
    }
    data
}

/// Creates overlapping sine waves with hills and valleys.
///
/// Values stay within `[20.0, 80.0]`, centred on 50.0.
pub fn create_wave_grid(width: usize, height: usize) -> Vec<f64> {
    let mut data = Vec::with_capacity(width * height);
    for row in 0..height {
        for col in 0..width {
            let fx = col as f64 / width as f64;
            let fy = row as f64 / height as f64;

            let v1 = (fx * PI * 4.0).sin() * 12.0;
            let v2 = (fy * PI * 4.0).sin() * 12.0;
            let v3 = ((fx + fy) * PI * 2.0).sin() * 6.0;

            data.push(50.0 + v1 + v2 + v3);
        }
    }
    data
}

/// Creates a checkerboard of `1.0` / `0.0` samples.
///
/// Every interior cell is a saddle, which stresses the ambiguous cases.
pub fn create_saddle_grid(width: usize, height: usize) -> Vec<f64> {
    let mut data = Vec::with_capacity(width * height);
    for row in 0..height {
        for col in 0..width {
            data.push(if (col + row) % 2 == 0 { 1.0 } else { 0.0 });
        }
    }
    data
}

/// Creates pseudo-random samples in `[0.0, 1.0)`.
///
/// Uses a simple hash of position and seed for reproducibility.
pub fn create_noise_grid(width: usize, height: usize, seed: u32) -> Vec<f64> {
    let mut data = Vec::with_capacity(width * height);
    for row in 0..height {
        for col in 0..width {
            let hash = simple_hash(col as u32, row as u32, seed);
            data.push(hash as f64 / (u32::MAX as f64 + 1.0));
        }
    }
    data
}

/// Creates a grid filled with a constant value.
pub fn create_constant_grid(width: usize, height: usize, value: f64) -> Vec<f64> {
    vec![value; width * height]
}

/// Splits row-major samples into nested rows.
pub fn to_rows(data: &[f64], width: usize) -> Vec<Vec<f64>> {
    data.chunks(width).map(<[f64]>::to_vec).collect()
}

/// Simple deterministic hash for reproducible test data.
fn simple_hash(x: u32, y: u32, seed: u32) -> u32 {
    let mut h = seed;
    h = h.wrapping_mul(31).wrapping_add(x);
    h = h.wrapping_mul(31).wrapping_add(y);
    h ^= h >> 16;
    h = h.wrapping_mul(0x85ebca6b);
    h ^= h >> 13;
    h = h.wrapping_mul(0xc2b2ae35);
    h ^= h >> 16;
    h
}
