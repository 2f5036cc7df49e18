//! Freehand contour to skinned 2D figure.
//!
//! Pipeline, in dependency order:
//! - [`simplify`]: reduce a drawn polyline to a target vertex count.
//! - [`figure`]: triangulate the closed contour into an immutable mesh.
//! - [`skeleton`]: link edge-sharing triangles, decompose the adjacency
//!   graph into bones, root a tree, assign per-vertex blend weights.
//! - [`rig`]: bundle mesh and skeleton into the read-only view consumers
//!   render and pose from.
//!
//! Each structure is built exactly once and never mutated afterwards
//! (mesh colors excepted, see [`figure::Figure::colors_mut`]).

pub mod error;
pub mod figure;
pub mod geom;
pub mod rand;
pub mod rig;
pub mod simplify;
pub mod skeleton;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::{Error, Result};
pub use figure::{Color, Figure, Vertex};
pub use rig::{Rig, RigMount};
pub use simplify::simplify;
pub use skeleton::Skeleton;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::figure::{Color, Figure, Reveal, Vertex};
    pub use crate::geom::Point2;
    pub use crate::rand::{draw_contour_radial, ContourCfg, ReplayToken};
    pub use crate::rig::{Rig, RigMount};
    pub use crate::simplify::{simplify, simplify_indices};
    pub use crate::skeleton::{Bone, BoneId, BoneKind, BoneNode, BoneWeight, Skeleton};
    pub use nalgebra::Vector2;
}
