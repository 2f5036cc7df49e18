//! Random freehand-style contours (radial jitter + replay tokens).
//!
//! Purpose
//! - Deterministic sampler for closed star-shaped contours used by tests,
//!   benches, and demos. Star-shaped-around-the-center outlines are always
//!   simple polygons, so every draw is safe to triangulate.
//!
//! Model
//! - `n` angles spread over [0, 2π) with bounded angular jitter, each given
//!   an independently jittered radius. Unlike a convex-hull sampler the raw
//!   loop is kept, so concave blobs (the interesting case for bone
//!   extraction) appear routinely.
//! - Determinism uses a replay token `(seed, index)` mixed into one RNG.

use crate::geom::Point2;
use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Radial-jitter contour sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct ContourCfg {
    pub vertex_count: usize,
    /// Angular jitter as a fraction of the base spacing Δ=2π/n. Clamped to [0, 0.49].
    pub angle_jitter_frac: f64,
    /// Radial jitter (relative amplitude). Radii = `base_radius * (1 + u)`,
    /// with `u ∈ [-radial_jitter, radial_jitter]`.
    pub radial_jitter: f64,
    pub base_radius: f64,
    /// Offset applied to every point, to move the blob off the origin the
    /// way a freehand stroke sits somewhere on the canvas.
    pub center: Point2,
}

impl Default for ContourCfg {
    fn default() -> Self {
        Self {
            vertex_count: 16,
            angle_jitter_frac: 0.3,
            radial_jitter: 0.4,
            base_radius: 1.0,
            center: Vector2::new(0.0, 0.0),
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing, cheap and stable.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw a random star-shaped closed contour as an open point loop in
/// counter-clockwise order (first point not repeated at the end).
pub fn draw_contour_radial(cfg: ContourCfg, tok: ReplayToken) -> Vec<Point2> {
    let mut rng = tok.to_std_rng();
    let n = cfg.vertex_count.max(3);
    let aj = cfg.angle_jitter_frac.clamp(0.0, 0.49);
    let rj = cfg.radial_jitter.max(0.0);
    let r0 = cfg.base_radius.max(1e-9);
    let delta = 2.0 * std::f64::consts::PI / (n as f64);
    (0..n)
        .map(|k| {
            let th = (k as f64) * delta + (rng.gen::<f64>() * 2.0 - 1.0) * aj * delta;
            let u = (rng.gen::<f64>() * 2.0 - 1.0) * rj;
            let r = (1.0 + u).max(1e-6) * r0;
            cfg.center + Vector2::new(th.cos() * r, th.sin() * r)
        })
        .collect()
}
