//! Small hand-checked grids with known contours.

/// 3x3 grid with a single raised centre sample.
///
/// With the band `[0.5, 1.5)` the only boundary is a diamond through the
/// midpoints of the four edges touching the centre.
pub const PEAK_3X3: [[f64; 3]; 3] = [[0.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 0.0]];

/// Expected crossing points for [`PEAK_3X3`] with the band `[0.5, 1.5)`.
pub const PEAK_3X3_CROSSINGS: [(f64, f64); 4] = [(1.0, 0.5), (1.5, 1.0), (1.0, 1.5), (0.5, 1.0)];

/// 2x2 saddle: top-left and bottom-right high, the other diagonal low.
pub const SADDLE_2X2: [[f64; 2]; 2] = [[1.0, 0.0], [0.0, 1.0]];

/// 4x4 grid with a 2x2 raised block in the middle.
pub const PLATEAU_4X4: [[f64; 4]; 4] = [
    [0.0, 0.0, 0.0, 0.0],
    [0.0, 2.0, 2.0, 0.0],
    [0.0, 2.0, 2.0, 0.0],
    [0.0, 0.0, 0.0, 0.0],
];

/// Converts a fixed-size fixture into nested rows.
pub fn rows<const W: usize, const H: usize>(grid: &[[f64; W]; H]) -> Vec<Vec<f64>> {
    grid.iter().map(|row| row.to_vec()).collect()
}
