//! Crate-wide error taxonomy.
//!
//! Every operation is a call-once computation over fixed input, so there is
//! no retry path: failures surface immediately and no partial result is
//! returned.

use thiserror::Error;

/// Errors surfaced by contour processing, mesh slicing, and rig assembly.
#[derive(Debug, Error)]
pub enum Error {
    /// The contour has fewer than 3 usable vertices once consecutive
    /// duplicates and straight-line (180°) vertices are removed.
    #[error("contour degenerates to fewer than 3 usable vertices")]
    InvalidContour,

    /// A prefix mesh was requested outside `1..=poly_count`.
    #[error("prefix index {index} out of range 1..={len}")]
    PrefixOutOfRange { index: usize, len: usize },

    /// A mesh vertex ended up with zero bone influences. Unreachable for a
    /// mesh built from a valid contour; signals an upstream logic defect,
    /// not recoverable input.
    #[error("vertex {vertex} received no bone influence")]
    DegenerateGraph { vertex: usize },

    /// The mount already carries a rig.
    #[error("target already has a rig attached")]
    AlreadyRigged,
}

pub type Result<T> = std::result::Result<T, Error>;
