//! Tests for rescaling, clipping and smoothing of extracted polylines.

use isoband::{
    clip_to_box, extract_isolines, rescale, smooth_all, ClipBox, GridSize, OutputSize, Point,
    Polyline, ScalarGrid,
};
use test_utils::{assert_coords_approx_eq, create_wave_grid, fixtures};

fn closed(points: &[(f64, f64)]) -> Polyline {
    Polyline::new(points.iter().map(|&(x, y)| Point::new(x, y)).collect(), true)
}

fn open(points: &[(f64, f64)]) -> Polyline {
    Polyline::open(points.iter().map(|&(x, y)| Point::new(x, y)).collect())
}

// ============================================================================
// rescale tests
// ============================================================================

#[test]
fn test_rescale_maps_grid_corners_to_output_corners() {
    let lines = vec![open(&[(0.0, 0.0), (1.0, 0.5), (2.0, 2.0)])];
    let out = rescale(&lines, GridSize::new(3, 3), OutputSize::new(200.0, 100.0));

    assert_eq!(
        out[0].points,
        vec![
            Point::new(0.0, 0.0),
            Point::new(100.0, 25.0),
            Point::new(200.0, 100.0)
        ]
    );
    assert!(!out[0].closed);
}

#[test]
fn test_rescale_axes_independently() {
    let lines = vec![closed(&[(0.0, 0.0), (9.0, 0.0), (9.0, 4.0), (0.0, 0.0)])];
    let out = rescale(&lines, GridSize::new(10, 5), OutputSize::new(90.0, 400.0));

    assert!(out[0].closed);
    assert_eq!(out[0].points[2], Point::new(90.0, 400.0));
    assert_eq!(out[0].points.first(), out[0].points.last());
}

#[test]
fn test_rescale_single_sample_axis_maps_to_middle() {
    let lines = vec![open(&[(0.0, 0.0), (3.0, 0.0)])];
    let out = rescale(&lines, GridSize::new(4, 1), OutputSize::new(30.0, 50.0));
    assert_eq!(out[0].points[0], Point::new(0.0, 25.0));
    assert_eq!(out[0].points[1], Point::new(30.0, 25.0));
}

#[test]
fn test_rescale_extracted_diamond() {
    let grid = ScalarGrid::from_rows(fixtures::rows(&fixtures::PEAK_3X3)).unwrap();
    let lines = extract_isolines(&grid, &[0.5]).unwrap();
    let out = rescale(&lines, grid.size(), OutputSize::new(100.0, 100.0));

    let xs: Vec<f64> = out[0].points.iter().map(|p| p.x).collect();
    let min_x = xs.iter().cloned().fold(f64::INFINITY, f64::min);
    let max_x = xs.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    assert_eq!(min_x, 25.0);
    assert_eq!(max_x, 75.0);
}

// ============================================================================
// clip_to_box tests
// ============================================================================

#[test]
fn test_clip_inside_is_unchanged() {
    let lines = vec![
        closed(&[(1.0, 1.0), (9.0, 1.0), (9.0, 9.0), (1.0, 1.0)]),
        open(&[(0.0, 0.0), (10.0, 10.0)]),
    ];
    let clipped = clip_to_box(&lines, &ClipBox::new(0.0, 0.0, 10.0, 10.0));
    assert_eq!(clipped, lines);
}

#[test]
fn test_clip_outside_is_dropped() {
    let lines = vec![closed(&[
        (20.0, 20.0),
        (30.0, 20.0),
        (30.0, 30.0),
        (20.0, 20.0),
    ])];
    assert!(clip_to_box(&lines, &ClipBox::new(0.0, 0.0, 10.0, 10.0)).is_empty());
}

#[test]
fn test_clip_trims_crossing_line() {
    let lines = vec![open(&[(-5.0, 5.0), (5.0, 5.0), (15.0, 5.0)])];
    let clipped = clip_to_box(&lines, &ClipBox::new(0.0, 0.0, 10.0, 10.0));

    assert_eq!(clipped.len(), 1);
    assert_eq!(
        clipped[0].points,
        vec![Point::new(0.0, 5.0), Point::new(5.0, 5.0), Point::new(10.0, 5.0)]
    );
}

#[test]
fn test_clip_splits_line_leaving_and_returning() {
    let lines = vec![open(&[(2.0, 2.0), (2.0, 12.0), (8.0, 12.0), (8.0, 2.0)])];
    let clipped = clip_to_box(&lines, &ClipBox::new(0.0, 0.0, 10.0, 10.0));

    assert_eq!(clipped.len(), 2);
    assert!(clipped.iter().all(|p| !p.closed && p.len() == 2));

    let a = &clipped[0].points;
    assert_eq!(a[0], Point::new(2.0, 2.0));
    assert_coords_approx_eq!((a[1].x, a[1].y), (2.0, 10.0), 1e-12);

    let b = &clipped[1].points;
    assert_coords_approx_eq!((b[0].x, b[0].y), (8.0, 10.0), 1e-12);
    assert_eq!(b[1], Point::new(8.0, 2.0));
}

#[test]
fn test_clip_closed_loop_merges_across_seam() {
    // starts inside, pokes out to the right and comes back
    let lines = vec![closed(&[
        (5.0, 5.0),
        (15.0, 5.0),
        (15.0, 8.0),
        (5.0, 8.0),
        (5.0, 5.0),
    ])];
    let clipped = clip_to_box(&lines, &ClipBox::new(0.0, 0.0, 10.0, 10.0));

    assert_eq!(clipped.len(), 1);
    assert!(!clipped[0].closed);
    assert_eq!(
        clipped[0].points,
        vec![
            Point::new(10.0, 8.0),
            Point::new(5.0, 8.0),
            Point::new(5.0, 5.0),
            Point::new(10.0, 5.0)
        ]
    );
}

#[test]
fn test_clip_points_stay_in_box() {
    let grid = ScalarGrid::from_vec(64, 64, create_wave_grid(64, 64)).unwrap();
    let lines = extract_isolines(&grid, &[35.0, 47.5, 65.0]).unwrap();
    let scaled = rescale(&lines, grid.size(), OutputSize::new(640.0, 480.0));

    let viewport = ClipBox::new(100.0, 50.0, 500.0, 400.0);
    let clipped = clip_to_box(&scaled, &viewport);

    assert!(!clipped.is_empty());
    for line in &clipped {
        assert!(line.len() >= 2);
        assert!(line.points.iter().all(|p| viewport.contains_point(p)));
    }
}

#[test]
fn test_clip_with_superset_box_is_noop() {
    let grid = ScalarGrid::from_vec(40, 30, create_wave_grid(40, 30)).unwrap();
    let lines = extract_isolines(&grid, &[42.5, 57.5]).unwrap();
    let size = OutputSize::new(400.0, 300.0);
    let scaled = rescale(&lines, grid.size(), size);

    let superset = ClipBox::new(-1.0, -1.0, 401.0, 301.0);
    assert_eq!(clip_to_box(&scaled, &superset), scaled);
    // the exact output surface is a superset too
    assert_eq!(clip_to_box(&scaled, &ClipBox::from_size(size)), scaled);
}

#[test]
fn test_clip_preserves_input_order() {
    let lines = vec![
        open(&[(1.0, 1.0), (2.0, 1.0)]),
        open(&[(50.0, 50.0), (60.0, 50.0)]),
        open(&[(3.0, 3.0), (4.0, 3.0)]),
    ];
    let clipped = clip_to_box(&lines, &ClipBox::new(0.0, 0.0, 10.0, 10.0));
    assert_eq!(clipped, vec![lines[0].clone(), lines[2].clone()]);
}

// ============================================================================
// smoothing over extracted output
// ============================================================================

#[test]
fn test_smoothing_keeps_loops_closed() {
    let grid = ScalarGrid::from_vec(48, 48, create_wave_grid(48, 48)).unwrap();
    let lines = extract_isolines(&grid, &[62.5]).unwrap();
    let smoothed = smooth_all(&lines, 2);

    assert_eq!(smoothed.len(), lines.len());
    for (before, after) in lines.iter().zip(&smoothed) {
        assert_eq!(before.closed, after.closed);
        if after.closed {
            assert_eq!(after.points.first(), after.points.last());
        } else {
            assert_eq!(before.points.first(), after.points.first());
        }
    }
}
