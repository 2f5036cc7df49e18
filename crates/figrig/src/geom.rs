//! Basic 2D primitives shared by the simplifier and the triangulator.
//!
//! Conventions
//! - Points are `Vector2<f64>` in the drawing plane; input device z is
//!   dropped before anything here runs.
//! - `perp` is the scalar (z-component) cross product; its sign encodes
//!   turn direction under the usual y-up convention.
//! - Containment predicates are closed: boundary points count as inside.

use nalgebra::Vector2;

/// Point in the drawing plane.
pub type Point2 = Vector2<f64>;

/// Scalar cross product (perp product) of `a` and `b`.
#[inline]
pub fn perp(a: Point2, b: Point2) -> f64 {
    a.x * b.y - b.x * a.y
}

/// Turn direction of the path `p1 -> p2 -> p3`.
///
/// Positive for a left (counter-clockwise) turn, negative for a right turn,
/// zero for collinear points.
#[inline]
pub fn turn(p1: Point2, p2: Point2, p3: Point2) -> f64 {
    perp(p2 - p1, p3 - p2)
}

/// Whether two turn values point the same way.
///
/// Zero is grouped with the negative side so that flat configurations do not
/// flip between branches depending on rounding.
#[inline]
pub fn same_turn(a: f64, b: f64) -> bool {
    (a > 0.0 && b > 0.0) || (a <= 0.0 && b <= 0.0)
}

/// Whether `p` lies inside or on the triangle `(t1, t2, t3)`.
///
/// Same-sign test over the three edge perp products; works for either
/// triangle winding. Boundary points classify as inside, which keeps the
/// ear test conservative.
pub fn point_in_triangle(t1: Point2, t2: Point2, t3: Point2, p: Point2) -> bool {
    let z1 = perp(t3 - t2, p - t2);
    let z2 = perp(t1 - t3, p - t3);
    let z3 = perp(t2 - t1, p - t1);
    (z1 >= 0.0 && z2 >= 0.0 && z3 >= 0.0) || (z1 <= 0.0 && z2 <= 0.0 && z3 <= 0.0)
}

/// Signed area of the closed polygon over `points` (first and last joined).
///
/// Positive for counter-clockwise orientation.
pub fn signed_area(points: &[Point2]) -> f64 {
    let n = points.len();
    let mut acc = 0.0;
    for i in 0..n {
        let p = points[i];
        let q = points[(i + 1) % n];
        acc += perp(p, q);
    }
    acc * 0.5
}

/// Centroid of a triangle.
#[inline]
pub fn triangle_centroid(a: Point2, b: Point2, c: Point2) -> Point2 {
    (a + b + c) / 3.0
}

/// Line segment with cached length, used for distance-to-chord queries.
#[derive(Clone, Copy, Debug)]
pub struct Seg {
    pub a: Point2,
    pub b: Point2,
    len: f64,
}

impl Seg {
    #[inline]
    pub fn new(a: Point2, b: Point2) -> Self {
        Self {
            a,
            b,
            len: (b - a).norm(),
        }
    }

    /// Shortest distance from `p` to the segment.
    ///
    /// Perpendicular distance when the projection of `p` falls on the
    /// segment, otherwise distance to the nearer endpoint. A zero-length
    /// segment degenerates to point distance.
    pub fn distance(&self, p: Point2) -> f64 {
        let ab = self.b - self.a;
        let ap = p - self.a;
        if ab.dot(&ap) < 0.0 {
            return ap.norm();
        }
        if (self.a - self.b).dot(&(p - self.b)) < 0.0 {
            return (p - self.b).norm();
        }
        if self.len == 0.0 {
            return ap.norm();
        }
        perp(ab, ap).abs() / self.len
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    #[test]
    fn turn_signs() {
        let o = vector![0.0, 0.0];
        let e = vector![1.0, 0.0];
        assert!(turn(o, e, vector![1.0, 1.0]) > 0.0); // left
        assert!(turn(o, e, vector![1.0, -1.0]) < 0.0); // right
        assert_eq!(turn(o, e, vector![2.0, 0.0]), 0.0); // straight
    }

    #[test]
    fn same_turn_groups_zero_with_negative() {
        assert!(same_turn(1.0, 2.0));
        assert!(same_turn(-1.0, 0.0));
        assert!(!same_turn(0.0, 1.0));
        assert!(!same_turn(-3.0, 0.5));
    }

    #[test]
    fn seg_distance_cases() {
        let s = Seg::new(vector![0.0, 0.0], vector![4.0, 0.0]);
        // Projection inside: perpendicular distance.
        assert!((s.distance(vector![2.0, 3.0]) - 3.0).abs() < 1e-12);
        // Behind a: endpoint distance.
        assert!((s.distance(vector![-3.0, 4.0]) - 5.0).abs() < 1e-12);
        // Beyond b: endpoint distance.
        assert!((s.distance(vector![7.0, 4.0]) - 5.0).abs() < 1e-12);
        // On the segment.
        assert_eq!(s.distance(vector![1.0, 0.0]), 0.0);
        // Degenerate segment.
        let z = Seg::new(vector![1.0, 1.0], vector![1.0, 1.0]);
        assert!((z.distance(vector![4.0, 5.0]) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn triangle_containment_is_closed() {
        let (a, b, c) = (vector![0.0, 0.0], vector![4.0, 0.0], vector![0.0, 4.0]);
        assert!(point_in_triangle(a, b, c, vector![1.0, 1.0]));
        assert!(point_in_triangle(a, b, c, vector![2.0, 0.0])); // edge
        assert!(point_in_triangle(a, b, c, a)); // corner
        assert!(!point_in_triangle(a, b, c, vector![3.0, 3.0]));
        // Winding-independent.
        assert!(point_in_triangle(c, b, a, vector![1.0, 1.0]));
    }

    #[test]
    fn signed_area_orientation() {
        let ccw = [
            vector![0.0, 0.0],
            vector![4.0, 0.0],
            vector![4.0, 3.0],
            vector![0.0, 3.0],
        ];
        assert!((signed_area(&ccw) - 12.0).abs() < 1e-12);
        let cw: Vec<Point2> = ccw.iter().rev().copied().collect();
        assert!((signed_area(&cw) + 12.0).abs() < 1e-12);
    }
}
