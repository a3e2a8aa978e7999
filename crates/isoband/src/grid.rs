//! Scalar field samples on a regular grid.

use serde::{Deserialize, Serialize};

use crate::error::{IsobandError, IsobandResult};

/// Number of samples along each axis of a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridSize {
    pub width: usize,
    pub height: usize,
}

impl GridSize {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }
}

/// A rectangular grid of finite samples in row-major order.
///
/// Shape and finiteness are checked once when the grid is built, so
/// extraction only has to validate its bands.
#[derive(Debug, Clone, PartialEq)]
pub struct ScalarGrid {
    width: usize,
    height: usize,
    data: Vec<f64>,
}

impl ScalarGrid {
    /// Build a grid from row-major samples.
    pub fn from_vec(width: usize, height: usize, data: Vec<f64>) -> IsobandResult<Self> {
        if width < 2 || height < 2 {
            return Err(IsobandError::InvalidGrid(format!(
                "need at least 2x2 samples, got {}x{}",
                width, height
            )));
        }
        let expected = sample_count(width, height)?;
        if data.len() != expected {
            return Err(IsobandError::InvalidGrid(format!(
                "{} samples do not fill a {}x{} grid",
                data.len(),
                width,
                height
            )));
        }
        if let Some(index) = data.iter().position(|v| !v.is_finite()) {
            return Err(IsobandError::InvalidGrid(format!(
                "sample at column {}, row {} is not finite",
                index % width,
                index / width
            )));
        }

        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Build a grid from nested rows; every row must have the same length.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> IsobandResult<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);

        if let Some((row, bad)) = rows.iter().enumerate().find(|(_, r)| r.len() != width) {
            return Err(IsobandError::InvalidGrid(format!(
                "row {} has {} samples, expected {}",
                row,
                bad.len(),
                width
            )));
        }

        Self::from_vec(width, height, rows.into_iter().flatten().collect())
    }

    /// Sample `f(column, row)` at every grid point.
    pub fn from_fn(
        width: usize,
        height: usize,
        mut f: impl FnMut(usize, usize) -> f64,
    ) -> IsobandResult<Self> {
        let mut data = Vec::with_capacity(sample_count(width, height)?);
        for row in 0..height {
            for col in 0..width {
                data.push(f(col, row));
            }
        }
        Self::from_vec(width, height, data)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn size(&self) -> GridSize {
        GridSize::new(self.width, self.height)
    }

    /// Sample at `(col, row)`, or `None` outside the grid.
    pub fn get(&self, col: usize, row: usize) -> Option<f64> {
        if col < self.width && row < self.height {
            Some(self.data[row * self.width + col])
        } else {
            None
        }
    }

    /// Sample lookup for indices already known to be in range.
    #[inline]
    pub(crate) fn at(&self, col: usize, row: usize) -> f64 {
        self.data[row * self.width + col]
    }

    /// Row-major samples.
    pub fn values(&self) -> &[f64] {
        &self.data
    }

    /// Smallest and largest sample.
    pub fn min_max(&self) -> (f64, f64) {
        self.data
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), &v| {
                (min.min(v), max.max(v))
            })
    }
}

fn sample_count(width: usize, height: usize) -> IsobandResult<usize> {
    width.checked_mul(height).ok_or_else(|| {
        IsobandError::InvalidGrid(format!("{}x{} samples overflow usize", width, height))
    })
}
