//! Curve simplification (target-count Douglas–Peucker).
//!
//! Purpose
//! - Reduce a raw freehand polyline to roughly `target` vertices while
//!   keeping its shape, before the contour is triangulated.
//!
//! Model
//! - Instead of the classic tolerance-driven recursion, the split loop is
//!   driven by a target vertex count: a worklist of index ranges starts with
//!   the whole polyline; each range contributes its maximum-deviation
//!   interior point and is split there. A full sweep over the queued ranges
//!   completes before the size check, so the result can exceed `target` by
//!   the final sweep's insertions. That overshoot is expected behavior, not
//!   a bug.

use crate::geom::{Point2, Seg};

/// Simplify `points` down to roughly `target` vertices.
///
/// Returns an ordered subsequence that always contains the first and last
/// point. Returns the input unchanged when `target < 2` or when the input
/// already has at most `target` points. Pure function; never fails.
pub fn simplify(points: &[Point2], target: usize) -> Vec<Point2> {
    match simplify_indices(points, target) {
        Some(keep) => keep.into_iter().map(|i| points[i]).collect(),
        None => points.to_vec(),
    }
}

/// Index form of [`simplify`]: the sorted indices of the kept points.
///
/// `None` means "input unchanged" (`target < 2` or nothing to remove).
pub fn simplify_indices(points: &[Point2], target: usize) -> Option<Vec<usize>> {
    if target < 2 || points.len() <= target {
        return None;
    }

    let last = points.len() - 1;
    let mut keep = vec![0, last];
    let mut ranges = vec![(0usize, last)];

    while keep.len() < target && !ranges.is_empty() {
        for (from, to) in std::mem::take(&mut ranges) {
            let chord = Seg::new(points[from], points[to]);
            let mut best = 0.0;
            let mut best_at = None;
            for j in (from + 1)..to {
                let d = chord.distance(points[j]);
                if d >= best {
                    best = d;
                    best_at = Some(j);
                }
            }
            let Some(j) = best_at else { continue };
            keep.push(j);
            // Split only where an interior point remains on either side.
            if j - from > 1 {
                ranges.push((from, j));
            }
            if to - j > 1 {
                ranges.push((j, to));
            }
        }
    }

    keep.sort_unstable();
    Some(keep)
}
