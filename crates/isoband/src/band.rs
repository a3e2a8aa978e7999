//! Threshold bands and level generation.

use serde::{Deserialize, Serialize};

use crate::error::{IsobandError, IsobandResult};

/// A half-open value interval `[lower, upper)`.
///
/// A sample is inside the band when `lower <= value < upper`. The same
/// convention holds for every band, so contiguous bands partition the value
/// range without overlap and a sample equal to a shared threshold belongs to
/// the upper band only.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Band {
    lower: f64,
    upper: f64,
}

impl Band {
    /// Create a band; fails unless `lower < upper`.
    ///
    /// Infinite bounds are allowed so a band can be open on one side.
    pub fn new(lower: f64, upper: f64) -> IsobandResult<Self> {
        if lower.is_nan() || upper.is_nan() {
            return Err(IsobandError::band(lower, upper, "bounds must not be NaN"));
        }
        if lower >= upper {
            return Err(IsobandError::band(lower, upper, "lower must be below upper"));
        }
        Ok(Self { lower, upper })
    }

    /// Band covering everything at or above `threshold`.
    pub fn at_least(threshold: f64) -> IsobandResult<Self> {
        Self::new(threshold, f64::INFINITY)
    }

    pub fn lower(&self) -> f64 {
        self.lower
    }

    pub fn upper(&self) -> f64 {
        self.upper
    }

    /// Whether `value` lies in `[lower, upper)`.
    #[inline]
    pub fn contains(&self, value: f64) -> bool {
        self.lower <= value && value < self.upper
    }

    pub fn midpoint(&self) -> f64 {
        self.lower + (self.upper - self.lower) / 2.0
    }

    /// Re-check the band invariant.
    ///
    /// Bands built through [`Band::new`] always pass; deserialised bands
    /// bypass the constructor and are checked here before extraction.
    pub fn validate(&self) -> IsobandResult<()> {
        Self::new(self.lower, self.upper).map(|_| ())
    }
}

/// Build contiguous bands from strictly increasing thresholds.
///
/// `n` thresholds give `n - 1` bands where `band[i].upper == band[i + 1].lower`.
pub fn bands_from_thresholds(thresholds: &[f64]) -> IsobandResult<Vec<Band>> {
    if thresholds.len() < 2 {
        return Err(IsobandError::InvalidThresholds(format!(
            "need at least 2 thresholds, got {}",
            thresholds.len()
        )));
    }

    thresholds
        .windows(2)
        .map(|pair| {
            Band::new(pair[0], pair[1]).map_err(|_| {
                IsobandError::InvalidThresholds(format!(
                    "thresholds must be strictly increasing, found {} then {}",
                    pair[0], pair[1]
                ))
            })
        })
        .collect()
}

/// Most levels [`generate_levels`] will produce.
pub const MAX_LEVELS: usize = 10_000;

/// Number of levels [`generate_levels`] would produce without the
/// [`MAX_LEVELS`] cap. Saturates at `usize::MAX`.
pub fn level_count(min_value: f64, max_value: f64, interval: f64) -> usize {
    if !(interval > 0.0) || !(max_value > min_value) {
        return 0;
    }

    let first = (min_value / interval).ceil();
    let last = (max_value / interval).floor();
    if last < first {
        return 0;
    }
    (last - first + 1.0) as usize
}

/// Generate threshold levels automatically from a value range and interval.
///
/// Levels are the multiples of `interval` within `[min_value, max_value]`.
/// Returns no levels when there would be more than [`MAX_LEVELS`].
pub fn generate_levels(min_value: f64, max_value: f64, interval: f64) -> Vec<f64> {
    let count = level_count(min_value, max_value, interval);
    if count == 0 || count > MAX_LEVELS {
        return vec![];
    }

    // Index-based stepping avoids drift from repeated addition
    let first = (min_value / interval).ceil();
    (0..count).map(|i| (first + i as f64) * interval).collect()
}
