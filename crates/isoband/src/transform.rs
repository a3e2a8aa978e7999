//! Mapping grid-space polylines onto the output surface.

use crate::geometry::{ClipBox, OutputSize, Point, Polyline};
use crate::grid::GridSize;

/// Per-axis linear map from `[0, samples - 1]` onto `[0, output]`.
#[derive(Debug, Clone, Copy)]
enum AxisMap {
    Linear { span: f64, output: f64 },
    /// Single-sample axis; every coordinate lands on this value.
    Fixed(f64),
}

impl AxisMap {
    fn new(samples: usize, output: f64) -> Self {
        if samples <= 1 {
            AxisMap::Fixed(output / 2.0)
        } else {
            AxisMap::Linear {
                span: (samples - 1) as f64,
                output,
            }
        }
    }

    /// Multiplying before dividing keeps the far edge exactly on `output`.
    #[inline]
    fn apply(&self, v: f64) -> f64 {
        match *self {
            AxisMap::Linear { span, output } => v * output / span,
            AxisMap::Fixed(value) => value,
        }
    }
}

/// Rescale grid-index coordinates to output coordinates.
///
/// Each axis maps `[0, grid_dim - 1]` onto `[0, output_dim]` independently.
/// An axis with a single sample maps every coordinate to the middle of its
/// output range.
pub fn rescale(
    polylines: &[Polyline],
    grid_size: GridSize,
    output_size: OutputSize,
) -> Vec<Polyline> {
    let mx = AxisMap::new(grid_size.width, output_size.width);
    let my = AxisMap::new(grid_size.height, output_size.height);

    polylines
        .iter()
        .map(|line| Polyline {
            points: line
                .points
                .iter()
                .map(|p| Point::new(mx.apply(p.x), my.apply(p.y)))
                .collect(),
            closed: line.closed,
        })
        .collect()
}

/// Portion of a segment kept by the clip box, as parameters along it.
#[derive(Debug, Clone, Copy, PartialEq)]
struct ClipSpan {
    t0: f64,
    t1: f64,
}

/// Liang–Barsky clipping of the segment `a → b` against `bounds`.
fn clip_segment(a: &Point, b: &Point, bounds: &ClipBox) -> Option<ClipSpan> {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let checks = [
        (-dx, a.x - bounds.min_x),
        (dx, bounds.max_x - a.x),
        (-dy, a.y - bounds.min_y),
        (dy, bounds.max_y - a.y),
    ];

    let mut t0: f64 = 0.0;
    let mut t1: f64 = 1.0;

    for (p, q) in checks {
        if p == 0.0 {
            // parallel to this boundary
            if q < 0.0 {
                return None;
            }
        } else {
            let r = q / p;
            if p < 0.0 {
                if r > t1 {
                    return None;
                }
                t0 = t0.max(r);
            } else {
                if r < t0 {
                    return None;
                }
                t1 = t1.min(r);
            }
        }
    }

    Some(ClipSpan { t0, t1 })
}

/// Accumulates the surviving runs of one polyline.
struct RunBuilder {
    runs: Vec<Vec<Point>>,
    current: Vec<Point>,
}

impl RunBuilder {
    fn new() -> Self {
        Self {
            runs: Vec::new(),
            current: Vec::new(),
        }
    }

    fn flush(&mut self) {
        let run = std::mem::take(&mut self.current);
        if run.len() >= 2 {
            self.runs.push(run);
        }
    }
}

/// Clip polylines against an axis-aligned box with inclusive bounds.
///
/// Parts of a polyline outside the box are removed and the remainder is split
/// into separate open polylines. A polyline entirely outside is dropped; one
/// entirely inside comes back unchanged. Point order is preserved.
pub fn clip_to_box(polylines: &[Polyline], bounds: &ClipBox) -> Vec<Polyline> {
    polylines
        .iter()
        .flat_map(|line| clip_polyline(line, bounds))
        .collect()
}

fn clip_polyline(line: &Polyline, bounds: &ClipBox) -> Vec<Polyline> {
    if line.points.len() < 2 {
        return if line.points.iter().all(|p| bounds.contains_point(p)) && !line.is_empty() {
            vec![line.clone()]
        } else {
            vec![]
        };
    }

    let mut builder = RunBuilder::new();
    let mut untouched = true;

    for pair in line.points.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        // A segment that only grazes the box contributes nothing
        let Some(span) = clip_segment(a, b, bounds).filter(|s| s.t0 < s.t1) else {
            untouched = false;
            builder.flush();
            continue;
        };

        let entered = span.t0 > 0.0;
        let exits = span.t1 < 1.0;
        untouched &= !entered && !exits;

        // Unclipped ends keep the original point bit-for-bit
        let start = if entered {
            bounds.clamp(a.lerp(b, span.t0))
        } else {
            *a
        };
        let end = if exits {
            bounds.clamp(a.lerp(b, span.t1))
        } else {
            *b
        };

        if entered || builder.current.is_empty() {
            builder.flush();
            builder.current.push(start);
        }
        builder.current.push(end);

        if exits {
            builder.flush();
        }
    }
    builder.flush();

    if untouched {
        return vec![line.clone()];
    }

    let mut runs = builder.runs;

    // A clipped loop that survives across its seam is one run, not two
    if line.closed && runs.len() > 1 {
        let first_point = line.points[0];
        let starts_at_seam = runs[0].first() == Some(&first_point);
        let ends_at_seam = runs.last().and_then(|r| r.last()) == line.points.last();
        if starts_at_seam && ends_at_seam {
            let head = runs.remove(0);
            if let Some(tail) = runs.last_mut() {
                tail.extend(head.into_iter().skip(1));
            }
        }
    }

    runs.into_iter().map(Polyline::open).collect()
}
