//! Mesh + skeleton assembly: the read-only view handed to renderers and
//! rig-wiring code.
//!
//! Purpose
//! - Bundle a finished [`Figure`] with the [`Skeleton`] derived from it and
//!   expose exactly the data external consumers need (buffers, centerlines,
//!   weights, end markers). Pure projection, no geometry is computed here.
//! - [`RigMount`] models the single attachment slot of an external target
//!   (a scene object, a canvas layer). Attaching twice is a caller error.

use std::collections::HashMap;

use log::debug;

use crate::error::{Error, Result};
use crate::figure::{Color, Figure, Vertex};
use crate::geom::Point2;
use crate::skeleton::{BoneId, BoneNode, BoneWeight, Skeleton};

/// Immutable mesh-plus-skeleton bundle.
#[derive(Clone, Debug)]
pub struct Rig {
    figure: Figure,
    skeleton: Skeleton,
}

impl Rig {
    /// Derive the skeleton from `figure` and bundle the two.
    pub fn from_figure(figure: Figure) -> Result<Rig> {
        let skeleton = Skeleton::from_figure(&figure)?;
        Ok(Rig::from_parts(figure, skeleton))
    }

    /// Bundle a figure with a skeleton already built from it.
    pub fn from_parts(figure: Figure, skeleton: Skeleton) -> Rig {
        Rig { figure, skeleton }
    }

    #[inline]
    pub fn figure(&self) -> &Figure {
        &self.figure
    }

    #[inline]
    pub fn skeleton(&self) -> &Skeleton {
        &self.skeleton
    }

    #[inline]
    pub fn vertices(&self) -> &[Vertex] {
        self.figure.vertices()
    }

    #[inline]
    pub fn indices(&self) -> &[u32] {
        self.figure.indices()
    }

    #[inline]
    pub fn colors(&self) -> &[Color] {
        self.figure.colors()
    }

    /// Per-vertex blend weights, aligned with [`Rig::vertices`].
    #[inline]
    pub fn weights(&self) -> &[BoneWeight] {
        self.skeleton.weights()
    }

    /// Bone tree nodes in breadth-first order; node 0 is the root.
    #[inline]
    pub fn nodes(&self) -> &[BoneNode] {
        self.skeleton.nodes()
    }

    #[inline]
    pub fn root(&self) -> BoneId {
        self.skeleton.root()
    }

    /// Triangle-centroid polylines per bone, for bone-outline rendering.
    pub fn bone_centerlines(&self) -> HashMap<BoneId, Vec<Point2>> {
        self.skeleton.bone_centerlines()
    }

    /// Tip points of End bones whose extremity triangle has degree < 3;
    /// used externally to seed boundary-detector markers.
    pub fn end_markers(&self) -> Vec<(BoneId, Vec<Point2>)> {
        self.skeleton.end_markers()
    }
}

/// Single attachment slot for an external target.
#[derive(Debug, Default)]
pub struct RigMount {
    rig: Option<Rig>,
}

impl RigMount {
    pub fn new() -> Self {
        Self { rig: None }
    }

    /// Attach a rig. Fails with [`Error::AlreadyRigged`] if the slot is
    /// occupied; the existing rig is left in place.
    pub fn attach(&mut self, rig: Rig) -> Result<()> {
        if self.rig.is_some() {
            return Err(Error::AlreadyRigged);
        }
        debug!(
            "attached rig: {} vertices, {} bones",
            rig.vertices().len(),
            rig.skeleton().bones().len()
        );
        self.rig = Some(rig);
        Ok(())
    }

    /// Release the slot, returning the rig if one was attached.
    pub fn detach(&mut self) -> Option<Rig> {
        self.rig.take()
    }

    #[inline]
    pub fn rig(&self) -> Option<&Rig> {
        self.rig.as_ref()
    }

    #[inline]
    pub fn is_rigged(&self) -> bool {
        self.rig.is_some()
    }
}
