//! Band boundary extraction using the marching squares algorithm.
//!
//! Each cell is classified by which of its corners fall inside the band,
//! the case table picks the edges to join, and the crossing on each edge is
//! found by linear interpolation. Segments are then chained into polylines.

use rayon::prelude::*;
use tracing::{debug, trace};

use crate::band::Band;
use crate::cases::{mask, segments_for, Edge};
use crate::chain::{chain_tolerance, connect_segments};
use crate::error::IsobandResult;
use crate::geometry::{Point, Polyline};
use crate::grid::ScalarGrid;

/// A line segment between two edge crossings of one cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub start: Point,
    pub end: Point,
}

/// Corner samples of one cell.
#[derive(Debug, Clone, Copy)]
struct Corners {
    tl: f64,
    tr: f64,
    br: f64,
    bl: f64,
}

impl Corners {
    fn mean(&self) -> f64 {
        (self.tl + self.tr + self.br + self.bl) / 4.0
    }
}

/// Emit the band boundary segments for every cell of the grid.
///
/// The band is assumed valid; callers go through [`extract_band`] or
/// [`extract_bands`] which check it first.
pub fn march_band(grid: &ScalarGrid, band: &Band) -> Vec<Segment> {
    let mut segments = Vec::new();

    for row in 0..grid.height() - 1 {
        for col in 0..grid.width() - 1 {
            let c = Corners {
                tl: grid.at(col, row),
                tr: grid.at(col + 1, row),
                br: grid.at(col + 1, row + 1),
                bl: grid.at(col, row + 1),
            };

            let m = mask(
                band.contains(c.tl),
                band.contains(c.tr),
                band.contains(c.br),
                band.contains(c.bl),
            );
            if m == 0 || m == 15 {
                continue;
            }

            // Only the two saddle masks consult the centre
            let centre_inside = (m == 5 || m == 10) && band.contains(c.mean());

            for &(a, b) in segments_for(m, centre_inside) {
                let start = edge_crossing(a, col, row, &c, band);
                let end = edge_crossing(b, col, row, &c, band);
                // Crossings clamped onto a shared corner collapse to a point
                if start != end {
                    segments.push(Segment { start, end });
                }
            }
        }
    }

    segments
}

/// Crossing point of the band boundary on one edge of the cell at `(col, row)`.
///
/// Edges are always interpolated in increasing coordinate order, so a
/// vertical edge shared by two neighbouring cells yields bit-identical
/// points from both sides.
fn edge_crossing(edge: Edge, col: usize, row: usize, c: &Corners, band: &Band) -> Point {
    let x = col as f64;
    let y = row as f64;

    let (p0, p1, v0, v1) = match edge {
        Edge::Top => (Point::new(x, y), Point::new(x + 1.0, y), c.tl, c.tr),
        Edge::Right => (Point::new(x + 1.0, y), Point::new(x + 1.0, y + 1.0), c.tr, c.br),
        Edge::Bottom => (Point::new(x, y + 1.0), Point::new(x + 1.0, y + 1.0), c.bl, c.br),
        Edge::Left => (Point::new(x, y), Point::new(x, y + 1.0), c.tl, c.bl),
    };

    // The outside sample tells which threshold this edge crosses
    let outside = if band.contains(v0) { v1 } else { v0 };
    let threshold = if outside < band.lower() {
        band.lower()
    } else {
        band.upper()
    };

    p0.lerp(&p1, crossing_fraction(v0, v1, threshold))
}

/// Fraction of the way from `v0` to `v1` at which `threshold` is reached,
/// clamped to `[0, 1]`. Equal values give the midpoint.
pub fn crossing_fraction(v0: f64, v1: f64, threshold: f64) -> f64 {
    if v0 == v1 {
        return 0.5;
    }
    ((threshold - v0) / (v1 - v0)).clamp(0.0, 1.0)
}

/// Extract the boundary polylines of one band, in grid-index coordinates.
pub fn extract_band(grid: &ScalarGrid, band: &Band) -> IsobandResult<Vec<Polyline>> {
    band.validate()?;
    Ok(extract_validated(grid, band))
}

fn extract_validated(grid: &ScalarGrid, band: &Band) -> Vec<Polyline> {
    let segments = march_band(grid, band);
    let polylines = connect_segments(&segments, chain_tolerance(grid.size()));

    trace!(
        lower = band.lower(),
        upper = band.upper(),
        segments = segments.len(),
        polylines = polylines.len(),
        "Extracted band"
    );

    polylines
}

/// Extract the boundary polylines of every band, in band order.
///
/// All bands are validated before any work is done.
pub fn extract_bands(grid: &ScalarGrid, bands: &[Band]) -> IsobandResult<Vec<Polyline>> {
    for band in bands {
        band.validate()?;
    }

    let polylines: Vec<Polyline> = bands
        .iter()
        .flat_map(|band| extract_validated(grid, band))
        .collect();

    log_summary(grid, bands, &polylines);
    Ok(polylines)
}

/// Parallel form of [`extract_bands`]; bands are scanned concurrently over
/// the shared read-only grid and the output is identical.
pub fn extract_bands_par(grid: &ScalarGrid, bands: &[Band]) -> IsobandResult<Vec<Polyline>> {
    for band in bands {
        band.validate()?;
    }

    let per_band: Vec<Vec<Polyline>> = bands
        .par_iter()
        .map(|band| extract_validated(grid, band))
        .collect();
    let polylines: Vec<Polyline> = per_band.into_iter().flatten().collect();

    log_summary(grid, bands, &polylines);
    Ok(polylines)
}

/// Classic isolines: each threshold `t` is the boundary of `[t, +inf)`.
pub fn extract_isolines(grid: &ScalarGrid, thresholds: &[f64]) -> IsobandResult<Vec<Polyline>> {
    let bands = thresholds
        .iter()
        .map(|&t| Band::at_least(t))
        .collect::<IsobandResult<Vec<_>>>()?;
    extract_bands(grid, &bands)
}

fn log_summary(grid: &ScalarGrid, bands: &[Band], polylines: &[Polyline]) {
    debug!(
        grid_width = grid.width(),
        grid_height = grid.height(),
        num_bands = bands.len(),
        num_polylines = polylines.len(),
        closed = polylines.iter().filter(|p| p.closed).count(),
        total_points = polylines.iter().map(Polyline::len).sum::<usize>(),
        "Extracted contours"
    );
}
