//! Triangle-adjacency skeleton: bones, bone tree, and blend weights.
//!
//! Purpose
//! - Link the mesh triangles that share an edge, decompose that adjacency
//!   graph into maximal chains ("bones"), root a tree over the bones, and
//!   assign every mesh vertex a small set of bone influences so the shape
//!   can be posed by linear skinning.
//!
//! Why this design
//! - Bones live in an arena (`Vec<Bone>` addressed by `BoneId`) and the
//!   tree is a flat `(parent, children)` node list addressed by position,
//!   so the graph-to-tree cross-referencing needs no back-pointers and no
//!   ownership cycles.
//! - The whole structure is built once, in dependency order, and read-only
//!   afterwards.
//!
//! Split for readability: `types.rs` (data types), `graph.rs` (adjacency),
//! `extract.rs` (chain search), `tree.rs` (rooting + weights).

mod extract;
mod graph;
mod tree;
mod types;

pub use types::{Bone, BoneId, BoneKind, BoneNode, BoneWeight, LinkedTri, Skeleton, TriId};
