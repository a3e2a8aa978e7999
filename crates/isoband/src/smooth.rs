//! Chaikin corner-cutting for extracted polylines.

use crate::geometry::{Point, Polyline};

/// Apply `passes` rounds of Chaikin's corner cutting.
///
/// Closed polylines stay closed. Open polylines keep their endpoints, so
/// lines that end on the grid boundary still end there.
pub fn smooth(polyline: &Polyline, passes: u32) -> Polyline {
    if passes == 0 || polyline.points.len() < 3 {
        return polyline.clone();
    }

    let mut points = polyline.points.clone();
    for _ in 0..passes {
        points = if polyline.closed {
            cut_closed(&points)
        } else {
            cut_open(&points)
        };
    }

    Polyline::new(points, polyline.closed)
}

/// Smooth every polyline in a set.
pub fn smooth_all(polylines: &[Polyline], passes: u32) -> Vec<Polyline> {
    polylines.iter().map(|p| smooth(p, passes)).collect()
}

fn cut(p1: &Point, p2: &Point) -> [Point; 2] {
    [p1.lerp(p2, 0.25), p1.lerp(p2, 0.75)]
}

fn cut_open(points: &[Point]) -> Vec<Point> {
    let mut out = Vec::with_capacity(points.len() * 2);
    out.push(points[0]);
    for w in points.windows(2) {
        out.extend(cut(&w[0], &w[1]));
    }
    out.push(points[points.len() - 1]);
    out
}

fn cut_closed(points: &[Point]) -> Vec<Point> {
    // last point repeats the first
    let ring = &points[..points.len() - 1];
    let mut out = Vec::with_capacity(ring.len() * 2 + 1);
    for i in 0..ring.len() {
        out.extend(cut(&ring[i], &ring[(i + 1) % ring.len()]));
    }
    out.push(out[0]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Polyline {
        Polyline::new(
            vec![
                Point::new(0.0, 0.0),
                Point::new(4.0, 0.0),
                Point::new(4.0, 4.0),
                Point::new(0.0, 4.0),
                Point::new(0.0, 0.0),
            ],
            true,
        )
    }

    #[test]
    fn test_zero_passes_is_identity() {
        assert_eq!(smooth(&square(), 0), square());
    }

    #[test]
    fn test_closed_stays_closed() {
        let s = smooth(&square(), 2);
        assert!(s.closed);
        // 4 corners -> 8 -> 16 distinct points, plus the repeated first
        assert_eq!(s.len(), 17);
        assert_eq!(s.points.first(), s.points.last());
        // corner cutting shortens the loop
        assert!(s.length() < square().length());
    }

    #[test]
    fn test_open_keeps_endpoints() {
        let line = Polyline::open(vec![
            Point::new(0.0, 0.0),
            Point::new(2.0, 2.0),
            Point::new(4.0, 0.0),
        ]);
        let s = smooth(&line, 1);
        assert_eq!(s.points.first(), Some(&Point::new(0.0, 0.0)));
        assert_eq!(s.points.last(), Some(&Point::new(4.0, 0.0)));
        assert_eq!(s.len(), 6);
        assert!(!s.closed);
    }

    #[test]
    fn test_short_lines_untouched() {
        let line = Polyline::open(vec![Point::new(0.0, 0.0), Point::new(1.0, 0.0)]);
        assert_eq!(smooth(&line, 3), line);
    }
}
