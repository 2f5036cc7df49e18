//! Triangulator tests: cleanup, angles, triangle emission, prefix/reveal.

use super::*;
use crate::error::Error;
use crate::geom::{perp, signed_area, Point2};
use crate::rand::{draw_contour_radial, ContourCfg, ReplayToken};
use nalgebra::vector;

fn pts(raw: &[(f64, f64)]) -> Vec<Point2> {
    raw.iter().map(|&(x, y)| vector![x, y]).collect()
}

/// Signed area of triangle `i` of `fig` (positive = counter-clockwise).
fn triangle_winding(fig: &Figure, i: usize) -> f64 {
    let [a, b, c] = fig.triangle_indices(i);
    let (pa, pb, pc) = (
        fig.vertices()[a].pos,
        fig.vertices()[b].pos,
        fig.vertices()[c].pos,
    );
    perp(pb - pa, pc - pb)
}

#[test]
fn square_two_triangles() {
    let square = pts(&[(0.0, 0.0), (4.0, 0.0), (4.0, 3.0), (0.0, 3.0)]);
    let fig = Figure::from_contour(&square, Color::WHITE).unwrap();
    assert_eq!(fig.poly_count(), 2);
    assert_eq!(fig.indices().len(), 6);
    assert_eq!(fig.indices(), &[1, 2, 3, 0, 1, 3]);
    for v in fig.vertices() {
        assert!((v.angle - 90.0).abs() < 1e-9);
    }
}

#[test]
fn winding_follows_contour_orientation() {
    let ccw = pts(&[(0.0, 0.0), (4.0, 0.0), (4.0, 3.0), (0.0, 3.0)]);
    let cw: Vec<Point2> = ccw.iter().rev().copied().collect();
    let fig_ccw = Figure::from_contour(&ccw, Color::WHITE).unwrap();
    let fig_cw = Figure::from_contour(&cw, Color::WHITE).unwrap();
    for i in 0..fig_ccw.poly_count() {
        assert!(triangle_winding(&fig_ccw, i) > 0.0);
    }
    for i in 0..fig_cw.poly_count() {
        assert!(triangle_winding(&fig_cw, i) < 0.0);
    }
}

#[test]
fn straight_line_vertex_is_dropped() {
    let contour = pts(&[(0.0, 0.0), (2.0, 0.0), (4.0, 0.0), (4.0, 4.0)]);
    let fig = Figure::from_contour(&contour, Color::WHITE).unwrap();
    assert_eq!(fig.vertices().len(), 3);
    assert!(fig.positions().all(|p| p != vector![2.0, 0.0]));
    assert_eq!(fig.poly_count(), 1);
}

#[test]
fn reflex_corner_reads_above_180() {
    // L-shape, counter-clockwise; the inner corner at (1,1) is 270°.
    let contour = pts(&[
        (0.0, 0.0),
        (2.0, 0.0),
        (2.0, 1.0),
        (1.0, 1.0),
        (1.0, 2.0),
        (0.0, 2.0),
    ]);
    let fig = Figure::from_contour(&contour, Color::WHITE).unwrap();
    assert_eq!(fig.poly_count(), 4);
    let inner = fig
        .vertices()
        .iter()
        .find(|v| v.pos == vector![1.0, 1.0])
        .unwrap();
    assert!((inner.angle - 270.0).abs() < 1e-9);
    for i in 0..4 {
        assert!(triangle_winding(&fig, i) > 0.0);
    }
}

#[test]
fn consecutive_and_cyclic_duplicates_removed() {
    let contour = pts(&[
        (0.0, 0.0),
        (0.0, 0.0),
        (4.0, 0.0),
        (4.0, 3.0),
        (4.0, 3.0),
        (0.0, 3.0),
        (0.0, 0.0), // wraps onto the first point
    ]);
    let fig = Figure::from_contour(&contour, Color::WHITE).unwrap();
    assert_eq!(fig.vertices().len(), 4);
    assert_eq!(fig.poly_count(), 2);
}

#[test]
fn degenerate_contours_rejected() {
    // Two distinct points after duplicate removal.
    let short = pts(&[(0.0, 0.0), (0.0, 0.0), (1.0, 1.0)]);
    assert!(matches!(
        Figure::from_contour(&short, Color::WHITE),
        Err(Error::InvalidContour)
    ));
    // Fully collinear loop: interior vertices are 180°, endpoints are 0°
    // spikes, fewer than 3 vertices survive.
    let flat = pts(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (3.0, 0.0)]);
    assert!(matches!(
        Figure::from_contour(&flat, Color::WHITE),
        Err(Error::InvalidContour)
    ));
}

#[test]
fn uniform_color_with_override() {
    let square = pts(&[(0.0, 0.0), (4.0, 0.0), (4.0, 3.0), (0.0, 3.0)]);
    let tint = Color::rgba(0.2, 0.4, 0.6, 1.0);
    let mut fig = Figure::from_contour(&square, tint).unwrap();
    assert_eq!(fig.colors().len(), fig.vertices().len());
    assert!(fig.colors().iter().all(|c| *c == tint));
    fig.colors_mut()[1] = Color::WHITE;
    assert_eq!(fig.colors()[1], Color::WHITE);
    assert_eq!(fig.colors()[0], tint);
}

#[test]
fn prefix_bounds_and_content() {
    let contour = pts(&[(0.0, 0.0), (3.0, 0.0), (4.0, 2.0), (2.0, 4.0), (0.0, 3.0)]);
    let fig = Figure::from_contour(&contour, Color::WHITE).unwrap();
    assert_eq!(fig.poly_count(), 3);

    assert!(matches!(
        fig.prefix(0),
        Err(Error::PrefixOutOfRange { index: 0, len: 3 })
    ));
    assert!(matches!(
        fig.prefix(4),
        Err(Error::PrefixOutOfRange { index: 4, len: 3 })
    ));

    let two = fig.prefix(2).unwrap();
    assert_eq!(two.poly_count(), 2);
    assert_eq!(two.indices(), &fig.indices()[..6]);
    assert_eq!(two.vertices().len(), fig.vertices().len());

    let full = fig.prefix(3).unwrap();
    assert_eq!(full.indices(), fig.indices());
}

#[test]
fn reveal_yields_each_prefix_once() {
    let contour = pts(&[(0.0, 0.0), (3.0, 0.0), (4.0, 2.0), (2.0, 4.0), (0.0, 3.0)]);
    let fig = Figure::from_contour(&contour, Color::WHITE).unwrap();
    let steps: Vec<Figure> = fig.reveal().collect();
    assert_eq!(steps.len(), fig.poly_count());
    for (k, step) in steps.iter().enumerate() {
        assert_eq!(step.poly_count(), k + 1);
        assert_eq!(step.indices(), &fig.indices()[..(k + 1) * 3]);
    }
    // Restartable: a fresh iterator starts over.
    assert_eq!(fig.reveal().count(), fig.poly_count());
}

#[test]
fn random_blobs_triangulate_completely() {
    for index in 0..20 {
        let cfg = ContourCfg {
            vertex_count: 8 + (index as usize % 5) * 7,
            radial_jitter: 0.6,
            ..ContourCfg::default()
        };
        let contour = draw_contour_radial(cfg, ReplayToken { seed: 11, index });
        let orientation = signed_area(&contour);
        let fig = Figure::from_contour(&contour, Color::WHITE).unwrap();
        let n = fig.vertices().len();
        assert_eq!(fig.poly_count(), n - 2);
        assert_eq!(fig.indices().len(), 3 * (n - 2));
        assert!(fig.indices().iter().all(|&i| (i as usize) < n));
        for i in 0..fig.poly_count() {
            let w = triangle_winding(&fig, i);
            assert!(w != 0.0 && (w > 0.0) == (orientation > 0.0));
        }
        // Every vertex is used by at least one triangle.
        let mut used = vec![false; n];
        for &i in fig.indices() {
            used[i as usize] = true;
        }
        assert!(used.iter().all(|&u| u));
    }
}
