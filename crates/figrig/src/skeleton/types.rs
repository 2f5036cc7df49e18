//! Data types for the adjacency graph, bones, bone tree, and weights.
//!
//! Kept small and explicit to make `graph`, `extract`, and `tree` easy to
//! read.

use std::collections::HashMap;

use crate::error::Result;
use crate::figure::Figure;
use crate::geom::Point2;

use super::{extract, graph, tree};

/// Identifier types for clarity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TriId(pub usize);
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BoneId(pub usize);

/// One mesh triangle plus its edge-sharing neighbors and cached centroid.
///
/// Two triangles link iff their index triples share exactly two vertex
/// indices; the degree is therefore 0–3. Built once from a completed mesh,
/// read-only thereafter.
#[derive(Clone, Debug)]
pub struct LinkedTri {
    pub indices: [usize; 3],
    pub centroid: Point2,
    pub links: Vec<TriId>,
}

/// End bones touch the mesh boundary (an extremity of degree ≤ 1); relay
/// bones run between two branch points.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoneKind {
    End,
    Relay,
}

/// Maximal chain of adjacent triangles between two chain extremities.
///
/// `neighbors` holds the bones sharing an extremity triangle with this one
/// (the closed bone and everything spawned at the same junction form a
/// clique).
#[derive(Clone, Debug)]
pub struct Bone {
    pub tris: Vec<TriId>,
    pub kind: BoneKind,
    pub neighbors: Vec<BoneId>,
}

impl Bone {
    pub(crate) fn new() -> Self {
        Self {
            tris: Vec::new(),
            kind: BoneKind::End,
            neighbors: Vec::new(),
        }
    }
}

/// Node of the rooted bone tree, stored flat in breadth-first discovery
/// order (node 0 is the root). Parent and children are positions in the
/// node list, which doubles as the tree index used by the weight table.
#[derive(Clone, Debug)]
pub struct BoneNode {
    pub bone: BoneId,
    pub parent: Option<usize>,
    pub children: Vec<usize>,
}

/// Blend weights of one mesh vertex: 1–4 bone tree-indices in discovery
/// order with the fixed weight row for that influence count. Unused slots
/// stay zeroed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoneWeight {
    pub count: usize,
    pub bones: [usize; 4],
    pub weights: [f32; 4],
}

/// Skeleton derived from a triangulated figure: adjacency graph, bone
/// arena, rooted tree, and per-vertex blend weights. Immutable once built.
#[derive(Clone, Debug)]
pub struct Skeleton {
    tris: Vec<LinkedTri>,
    bones: Vec<Bone>,
    nodes: Vec<BoneNode>,
    weights: Vec<BoneWeight>,
}

impl Skeleton {
    /// Build the full skeleton from a mesh: adjacency graph, bone chains,
    /// longest-bone-rooted tree, then vertex weights.
    ///
    /// Fails with [`crate::Error::DegenerateGraph`] if any mesh vertex ends
    /// up with zero influences; for a mesh built from a valid contour every
    /// vertex belongs to a triangle and hence a bone, so this signals a
    /// logic defect upstream (e.g. feeding a hand-assembled partial mesh).
    pub fn from_figure(figure: &Figure) -> Result<Skeleton> {
        let tris = graph::build_links(figure);
        let bones = extract::extract_bones(&tris);
        let nodes = tree::build_nodes(&bones, &tris);
        let weights = tree::vertex_weights(&nodes, &bones, &tris, figure.vertices().len())?;
        Ok(Skeleton {
            tris,
            bones,
            nodes,
            weights,
        })
    }

    #[inline]
    pub fn tris(&self) -> &[LinkedTri] {
        &self.tris
    }

    #[inline]
    pub fn bones(&self) -> &[Bone] {
        &self.bones
    }

    /// Tree nodes in breadth-first discovery order; `nodes()[0]` is the root.
    #[inline]
    pub fn nodes(&self) -> &[BoneNode] {
        &self.nodes
    }

    /// Per-vertex blend weights, indexed like the mesh vertex buffer.
    #[inline]
    pub fn weights(&self) -> &[BoneWeight] {
        &self.weights
    }

    /// Bone of the tree root (the longest bone).
    #[inline]
    pub fn root(&self) -> BoneId {
        self.nodes[0].bone
    }

    /// Midpoint of the first and last chain-triangle centroids.
    pub fn bone_centroid(&self, id: BoneId) -> Point2 {
        let bone = &self.bones[id.0];
        let head = self.tris[bone.tris[0].0].centroid;
        let tail = self.tris[bone.tris[bone.tris.len() - 1].0].centroid;
        (head + tail) / 2.0
    }

    /// Distance between the first and last chain-triangle centroids.
    pub fn bone_length(&self, id: BoneId) -> f64 {
        let bone = &self.bones[id.0];
        let head = self.tris[bone.tris[0].0].centroid;
        let tail = self.tris[bone.tris[bone.tris.len() - 1].0].centroid;
        (tail - head).norm()
    }

    /// Ordered triangle-centroid polyline along one bone, for bone-outline
    /// rendering.
    pub fn bone_centerline(&self, id: BoneId) -> Vec<Point2> {
        self.bones[id.0]
            .tris
            .iter()
            .map(|t| self.tris[t.0].centroid)
            .collect()
    }

    /// Centerlines of all bones, keyed by bone id.
    pub fn bone_centerlines(&self) -> HashMap<BoneId, Vec<Point2>> {
        (0..self.bones.len())
            .map(|i| (BoneId(i), self.bone_centerline(BoneId(i))))
            .collect()
    }

    /// For each End bone, the world points of chain extremities whose own
    /// triangle has degree < 3. Used externally to seed boundary-detector
    /// markers at the outer tips of the shape.
    pub fn end_markers(&self) -> Vec<(BoneId, Vec<Point2>)> {
        let mut out = Vec::new();
        for (i, bone) in self.bones.iter().enumerate() {
            if bone.kind != BoneKind::End {
                continue;
            }
            let mut ends = Vec::new();
            let head = &self.tris[bone.tris[0].0];
            if head.links.len() < 3 {
                ends.push(head.centroid);
            }
            let tail = &self.tris[bone.tris[bone.tris.len() - 1].0];
            if bone.tris.len() > 1 && tail.links.len() < 3 {
                ends.push(tail.centroid);
            }
            out.push((BoneId(i), ends));
        }
        out
    }
}
