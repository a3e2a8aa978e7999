//! Chaining of cell segments into polylines.

use std::collections::{HashMap, VecDeque};

use crate::extract::Segment;
use crate::geometry::{Point, Polyline};
use crate::grid::GridSize;

/// Endpoint matching tolerance for a grid: machine epsilon scaled by the
/// grid extent.
pub fn chain_tolerance(size: GridSize) -> f64 {
    f64::EPSILON * size.width.max(size.height) as f64
}

type Key = (i64, i64);

fn quantize(p: &Point, tolerance: f64) -> Key {
    ((p.x / tolerance).round() as i64, (p.y / tolerance).round() as i64)
}

/// Index from quantized endpoint to the segment ends sitting on it.
///
/// Entries are `segment * 2` for a start point and `segment * 2 + 1` for an
/// end point, kept in segment order so lookups are deterministic.
struct EndpointIndex {
    tolerance: f64,
    ends: HashMap<Key, Vec<usize>>,
}

impl EndpointIndex {
    fn build(segments: &[Segment], tolerance: f64) -> Self {
        let mut ends: HashMap<Key, Vec<usize>> = HashMap::with_capacity(segments.len() * 2);
        for (i, seg) in segments.iter().enumerate() {
            ends.entry(quantize(&seg.start, tolerance)).or_default().push(i * 2);
            ends.entry(quantize(&seg.end, tolerance)).or_default().push(i * 2 + 1);
        }
        Self { tolerance, ends }
    }

    fn key(&self, p: &Point) -> Key {
        quantize(p, self.tolerance)
    }

    /// Claim the first unused segment touching `p` and return its far end.
    fn take_next(&self, p: &Point, segments: &[Segment], used: &mut [bool]) -> Option<Point> {
        let candidates = self.ends.get(&self.key(p))?;
        let end = candidates.iter().copied().find(|&e| !used[e / 2])?;
        let seg = &segments[end / 2];
        used[end / 2] = true;
        Some(if end % 2 == 0 { seg.end } else { seg.start })
    }
}

/// Connect unordered segments into polylines.
///
/// Each chain is grown forward from its first segment and, unless it closes
/// on itself, backward as well. A closed polyline repeats its first point as
/// its last.
pub fn connect_segments(segments: &[Segment], tolerance: f64) -> Vec<Polyline> {
    if segments.is_empty() {
        return vec![];
    }

    let index = EndpointIndex::build(segments, tolerance);
    let mut used = vec![false; segments.len()];
    let mut polylines = Vec::new();

    for start_idx in 0..segments.len() {
        if used[start_idx] {
            continue;
        }
        used[start_idx] = true;

        let first = segments[start_idx].start;
        let first_key = index.key(&first);
        let mut points = VecDeque::from([first, segments[start_idx].end]);
        let mut closed = false;

        while let Some(&tail) = points.back() {
            match index.take_next(&tail, segments, &mut used) {
                Some(next) if index.key(&next) == first_key => {
                    points.push_back(first);
                    closed = true;
                    break;
                }
                Some(next) => points.push_back(next),
                None => break,
            }
        }

        if !closed {
            while let Some(&head) = points.front() {
                match index.take_next(&head, segments, &mut used) {
                    Some(prev) => points.push_front(prev),
                    None => break,
                }
            }
        }

        polylines.push(Polyline::new(points.into(), closed));
    }

    polylines
}
