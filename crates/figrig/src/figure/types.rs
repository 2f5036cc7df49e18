//! Mesh data types: vertices with interior angles, the immutable `Figure`
//! mesh, prefix meshes, and the progressive-reveal iterator.

use crate::error::{Error, Result};
use crate::geom::{self, Point2};

/// RGBA color attached to each mesh vertex.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgba(1.0, 1.0, 1.0, 1.0);

    #[inline]
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }
}

/// A contour vertex that survived cleanup.
///
/// `angle` is the interior angle in degrees, measured against the polygon's
/// winding reference: reflex corners read as `360 − θ`. Vertices at exactly
/// 180° never make it into a `Figure`.
#[derive(Clone, Copy, Debug)]
pub struct Vertex {
    pub pos: Point2,
    pub angle: f64,
}

/// Triangulated flat mesh built from a closed contour.
///
/// Position and index buffers are fixed at construction; only the color
/// buffer can be rewritten afterwards. `poly_count` is always
/// `indices.len() / 3`.
#[derive(Clone, Debug)]
pub struct Figure {
    vertices: Vec<Vertex>,
    indices: Vec<u32>,
    colors: Vec<Color>,
    poly_count: usize,
}

impl Figure {
    pub(crate) fn from_parts(vertices: Vec<Vertex>, indices: Vec<u32>, colors: Vec<Color>) -> Self {
        let poly_count = indices.len() / 3;
        Self {
            vertices,
            indices,
            colors,
            poly_count,
        }
    }

    #[inline]
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Vertex positions in buffer order.
    pub fn positions(&self) -> impl Iterator<Item = Point2> + '_ {
        self.vertices.iter().map(|v| v.pos)
    }

    /// Flattened triangle index buffer (length `3 * poly_count`).
    #[inline]
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    #[inline]
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    /// Per-vertex color overrides; the only mutation a built mesh allows.
    #[inline]
    pub fn colors_mut(&mut self) -> &mut [Color] {
        &mut self.colors
    }

    #[inline]
    pub fn poly_count(&self) -> usize {
        self.poly_count
    }

    /// Vertex indices of triangle `i`.
    pub fn triangle_indices(&self, i: usize) -> [usize; 3] {
        [
            self.indices[i * 3] as usize,
            self.indices[i * 3 + 1] as usize,
            self.indices[i * 3 + 2] as usize,
        ]
    }

    /// Centroid of triangle `i`.
    pub fn triangle_centroid(&self, i: usize) -> Point2 {
        let [a, b, c] = self.triangle_indices(i);
        geom::triangle_centroid(self.vertices[a].pos, self.vertices[b].pos, self.vertices[c].pos)
    }

    /// Mesh containing only the first `i` triangles, `1 <= i <= poly_count`.
    ///
    /// The prefix keeps the full vertex and color buffers and truncates the
    /// index buffer; it is an independent immutable value.
    pub fn prefix(&self, i: usize) -> Result<Figure> {
        if i < 1 || i > self.poly_count {
            return Err(Error::PrefixOutOfRange {
                index: i,
                len: self.poly_count,
            });
        }
        Ok(Figure {
            vertices: self.vertices.clone(),
            indices: self.indices[..i * 3].to_vec(),
            colors: self.colors.clone(),
            poly_count: i,
        })
    }

    /// Iterator over the prefix meshes `1..=poly_count`, for caller-paced
    /// progressive reveal. Restartable; dropping it early is cancellation.
    pub fn reveal(&self) -> Reveal<'_> {
        Reveal {
            figure: self,
            next: 1,
        }
    }
}

/// See [`Figure::reveal`].
pub struct Reveal<'a> {
    figure: &'a Figure,
    next: usize,
}

impl Iterator for Reveal<'_> {
    type Item = Figure;

    fn next(&mut self) -> Option<Figure> {
        if self.next > self.figure.poly_count {
            return None;
        }
        let i = self.next;
        self.next += 1;
        Some(Figure {
            vertices: self.figure.vertices.clone(),
            indices: self.figure.indices[..i * 3].to_vec(),
            colors: self.figure.colors.clone(),
            poly_count: i,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.figure.poly_count + 1 - self.next.min(self.figure.poly_count + 1);
        (left, Some(left))
    }
}
