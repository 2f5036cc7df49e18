//! Contour to triangle mesh.
//!
//! Purpose
//! - Clean a freehand closed contour (duplicate and straight-line vertices
//!   removed), attach interior angles to the surviving vertices, and clip
//!   the simple polygon into triangles by iterative ear selection.
//!
//! Why this design
//! - The ear loop works on an explicit arena (vertex array + liveness
//!   bitset) rather than flags on the vertices themselves; the mesh handed
//!   out is immutable except for color overrides.
//! - Each outer iteration retires exactly one vertex, so a valid simple
//!   polygon with no 180° vertices terminates after exactly N−2 ears.
//!
//! Split for readability: `types.rs` (mesh data + prefix/reveal),
//! `build.rs` (cleanup, angle assignment, ear clipping).

mod build;
mod types;

pub use types::{Color, Figure, Reveal, Vertex};

#[cfg(test)]
mod tests;
