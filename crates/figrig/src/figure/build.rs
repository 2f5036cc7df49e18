//! Contour cleanup, interior-angle assignment, and ear-clipping
//! triangulation.
//!
//! Orientation handling: the vertex farthest from the origin is convex with
//! respect to the whole contour, so the perp product of its neighbor edges
//! fixes the winding reference. Angle classification (convex vs reflex) and
//! triangle emission both compare against that sign.

use crate::error::{Error, Result};
use crate::figure::types::{Color, Figure, Vertex};
use crate::geom::{self, Point2};

impl Figure {
    /// Build a triangulated mesh from a closed contour given as an open
    /// point loop (first point not repeated at the end) and a fill color.
    ///
    /// Cleanup removes cyclic consecutive duplicates and vertices whose
    /// interior angle is exactly 180°; fails with
    /// [`Error::InvalidContour`] if fewer than 3 vertices survive.
    pub fn from_contour(points: &[Point2], color: Color) -> Result<Figure> {
        let mut points = points.to_vec();
        dedup_cyclic(&mut points);
        if points.len() < 3 {
            return Err(Error::InvalidContour);
        }
        let reference = winding_reference(&points);
        let vertices = assign_angles(&points, reference);
        if vertices.len() < 3 {
            return Err(Error::InvalidContour);
        }
        let indices = clip_ears(&vertices, reference);
        let colors = vec![color; vertices.len()];
        Ok(Figure::from_parts(vertices, indices, colors))
    }
}

/// Remove consecutive duplicate points, treating the loop as cyclic (a
/// trailing point equal to the first is also dropped).
fn dedup_cyclic(points: &mut Vec<Point2>) {
    points.dedup_by(|a, b| a == b);
    while points.len() > 1 && points.last() == points.first() {
        points.pop();
    }
}

/// Perp product of the neighbor edges at the vertex farthest from the
/// origin. Its sign encodes the contour's overall orientation.
fn winding_reference(points: &[Point2]) -> f64 {
    let far = farthest_from_origin(points);
    let n = points.len();
    let prev = (far + n - 1) % n;
    let next = (far + 1) % n;
    corner_perp(points[prev], points[far], points[next])
}

fn farthest_from_origin(points: &[Point2]) -> usize {
    let mut best = 0.0;
    let mut at = 0;
    for (i, p) in points.iter().enumerate() {
        let d = p.norm();
        if d > best {
            best = d;
            at = i;
        }
    }
    at
}

/// Perp product of the two neighbor-edge vectors at `v`. Equal in sign to
/// the turn of the path `prev -> v -> next`.
#[inline]
fn corner_perp(prev: Point2, v: Point2, next: Point2) -> f64 {
    geom::perp(next - v, prev - v)
}

/// Attach interior angles and drop vertices at exactly 180°.
///
/// The 180° test is exact: neighbor edges anti-parallel (perp product zero,
/// dot product negative). Such vertices carry no shape information. Corners
/// whose perp sign disagrees with the winding reference are reflex and read
/// as `360 − θ`.
fn assign_angles(points: &[Point2], reference: f64) -> Vec<Vertex> {
    let n = points.len();
    let mut vertices = Vec::with_capacity(n);
    for i in 0..n {
        let p = points[i];
        let pv = points[(i + n - 1) % n] - p;
        let nv = points[(i + 1) % n] - p;
        let c = geom::perp(nv, pv);
        let dot = nv.dot(&pv);
        if c == 0.0 && dot < 0.0 {
            continue;
        }
        let cos = (dot / (nv.norm() * pv.norm())).clamp(-1.0, 1.0);
        let mut angle = cos.acos().to_degrees();
        if !geom::same_turn(reference, c) {
            angle = 360.0 - angle;
        }
        vertices.push(Vertex { pos: p, angle });
    }
    vertices
}

/// Iterative ear selection over an explicit liveness arena.
///
/// Each outer iteration retires exactly one vertex, giving `N − 2`
/// triangles for a valid simple polygon.
fn clip_ears(vertices: &[Vertex], reference: f64) -> Vec<u32> {
    let n = vertices.len();
    let mut alive = vec![true; n];
    let tri_count = n - 2;
    let mut indices = Vec::with_capacity(tri_count * 3);
    for _ in 0..tri_count {
        if let Some((prev, ear, next, t)) = select_ear(vertices, &alive) {
            push_triangle(&mut indices, prev, ear, next, t, reference);
            alive[ear] = false;
        }
    }
    indices
}

/// Pick the next ear: the farthest-from-origin active vertex, or, when some
/// other active vertex lies inside its candidate triangle, the first
/// orientation-consistent candidate found by walking forward around the
/// active ring.
fn select_ear(vertices: &[Vertex], alive: &[bool]) -> Option<(usize, usize, usize, f64)> {
    let start = farthest_alive(vertices, alive)?;
    let (prev, next) = alive_neighbors(start, alive);
    let anchor = geom::turn(vertices[prev].pos, vertices[start].pos, vertices[next].pos);
    if ear_is_clear(vertices, alive, prev, start, next) {
        return Some((prev, start, next, anchor));
    }
    let mut cand = next;
    for _ in 0..vertices.len() {
        let (p, nx) = alive_neighbors(cand, alive);
        let t = geom::turn(vertices[p].pos, vertices[cand].pos, vertices[nx].pos);
        if geom::same_turn(anchor, t) && ear_is_clear(vertices, alive, p, cand, nx) {
            return Some((p, cand, nx, t));
        }
        cand = nx;
    }
    None
}

fn farthest_alive(vertices: &[Vertex], alive: &[bool]) -> Option<usize> {
    let mut best = -1.0;
    let mut at = None;
    for (i, v) in vertices.iter().enumerate() {
        if !alive[i] {
            continue;
        }
        let d = v.pos.norm();
        if d > best {
            best = d;
            at = Some(i);
        }
    }
    at
}

/// Nearest active predecessor and successor of `now` on the vertex ring.
fn alive_neighbors(now: usize, alive: &[bool]) -> (usize, usize) {
    let len = alive.len();
    let mut prev = now;
    let mut next = now;
    let mut k = now;
    for _ in 0..len - 1 {
        k = (k + len - 1) % len;
        if alive[k] {
            prev = k;
            break;
        }
    }
    k = now;
    for _ in 0..len - 1 {
        k = (k + 1) % len;
        if alive[k] {
            next = k;
            break;
        }
    }
    (prev, next)
}

/// No other active vertex may lie inside or on the candidate triangle.
fn ear_is_clear(vertices: &[Vertex], alive: &[bool], prev: usize, ear: usize, next: usize) -> bool {
    let (a, b, c) = (vertices[prev].pos, vertices[ear].pos, vertices[next].pos);
    for (j, v) in vertices.iter().enumerate() {
        if !alive[j] || j == prev || j == ear || j == next {
            continue;
        }
        if geom::point_in_triangle(a, b, c, v.pos) {
            return false;
        }
    }
    true
}

/// Emit `(prev, ear, next)` in the order whose winding sign matches the
/// contour's reference orientation.
fn push_triangle(out: &mut Vec<u32>, prev: usize, ear: usize, next: usize, t: f64, reference: f64) {
    if geom::same_turn(reference, t) {
        out.extend([prev as u32, ear as u32, next as u32]);
    } else {
        out.extend([next as u32, ear as u32, prev as u32]);
    }
}
