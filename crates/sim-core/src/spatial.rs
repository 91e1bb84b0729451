//! Spatial primitives: grid-aligned positions, nearest-neighbour queries,
//! and the Gaussian kernel density estimate used for crowd avoidance.
//!
//! The neighbour query is a full scan kept behind a small function seam so a
//! k-d tree or grid-bucket index can replace it without changing the observed
//! semantics (exact k nearest by squared distance, ties by insertion order).

use serde::{Deserialize, Serialize};

/// A point in the unit square, kept rounded to the simulation grid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Construct a position rounded to the grid resolution implied by
    /// `granularity` (cell size `10^-granularity`).
    pub fn rounded(x: f64, y: f64, granularity: u32) -> Self {
        let scale = 10f64.powi(granularity as i32);
        Self {
            x: (x * scale).round() / scale,
            y: (y * scale).round() / scale,
        }
    }

    /// Squared Euclidean distance to another position.
    pub fn dist_sq(&self, other: Position) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }

    /// Whether both components lie in the closed unit interval.
    pub fn in_unit_square(&self) -> bool {
        (0.0..=1.0).contains(&self.x) && (0.0..=1.0).contains(&self.y)
    }

    /// Whether both components lie strictly inside the open unit interval.
    pub fn strictly_inside(&self) -> bool {
        self.x > 0.0 && self.x < 1.0 && self.y > 0.0 && self.y < 1.0
    }

    /// Map this position to grid cell indices for a field with `scale + 1`
    /// cells per axis. Positions are grid-aligned, so the scaled coordinate
    /// is an integer up to float error; out-of-range positions are a bug in
    /// the caller and abort rather than wrap.
    pub fn cell(&self, scale: usize) -> (usize, usize) {
        let i = (self.x * scale as f64).round();
        let j = (self.y * scale as f64).round();
        assert!(
            i >= 0.0 && j >= 0.0 && i <= scale as f64 && j <= scale as f64,
            "position ({}, {}) outside the unit square",
            self.x,
            self.y
        );
        (i as usize, j as usize)
    }
}

/// Collect the `k` nearest positions to `origin` by squared Euclidean
/// distance. Distance ties keep the order in which candidates were supplied.
pub fn nearest_neighbors(
    origin: Position,
    candidates: impl Iterator<Item = Position>,
    k: usize,
) -> Vec<Position> {
    let mut scored: Vec<(f64, Position)> = candidates
        .map(|p| (origin.dist_sq(p), p))
        .collect();

    // Stable sort preserves supply order among equal distances.
    scored.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal));
    scored.truncate(k);
    scored.into_iter().map(|(_, p)| p).collect()
}

/// A 2-D Gaussian kernel density estimate over a set of sample points.
///
/// Bandwidth follows Scott's rule (`n^(-1/6)` for two dimensions) applied to
/// the sample covariance, matching the common statistical default. When the
/// covariance is singular (fewer than two distinct points, or all samples on
/// one line) the estimate degenerates; `density` then reports zero for every
/// query so that callers fall back to their tie-breaking rule.
#[derive(Debug, Clone)]
pub struct GaussianKde {
    points: Vec<Position>,
    /// Inverse of the bandwidth-scaled covariance matrix, row major.
    inv: [f64; 4],
    /// Normalization constant `n * 2π * sqrt(det)`.
    norm: f64,
    degenerate: bool,
}

const SINGULAR_EPS: f64 = 1e-12;

impl GaussianKde {
    /// Fit the estimate to the given sample points.
    pub fn fit(points: &[Position]) -> Self {
        let n = points.len();
        if n < 2 {
            return Self::degenerate(points);
        }

        let nf = n as f64;
        let mean_x = points.iter().map(|p| p.x).sum::<f64>() / nf;
        let mean_y = points.iter().map(|p| p.y).sum::<f64>() / nf;

        let mut sxx = 0.0;
        let mut syy = 0.0;
        let mut sxy = 0.0;
        for p in points {
            let dx = p.x - mean_x;
            let dy = p.y - mean_y;
            sxx += dx * dx;
            syy += dy * dy;
            sxy += dx * dy;
        }
        // Sample covariance (n - 1 denominator) scaled by the squared
        // Scott factor.
        let ddof = nf - 1.0;
        let factor_sq = nf.powf(-1.0 / 3.0);
        let cxx = sxx / ddof * factor_sq;
        let cyy = syy / ddof * factor_sq;
        let cxy = sxy / ddof * factor_sq;

        let det = cxx * cyy - cxy * cxy;
        if !(det > SINGULAR_EPS) {
            return Self::degenerate(points);
        }

        let inv = [cyy / det, -cxy / det, -cxy / det, cxx / det];
        let norm = nf * std::f64::consts::TAU * det.sqrt();

        Self {
            points: points.to_vec(),
            inv,
            norm,
            degenerate: false,
        }
    }

    fn degenerate(points: &[Position]) -> Self {
        Self {
            points: points.to_vec(),
            inv: [0.0; 4],
            norm: 1.0,
            degenerate: true,
        }
    }

    /// Whether the fit collapsed to the degenerate (constant-zero) estimate.
    pub fn is_degenerate(&self) -> bool {
        self.degenerate
    }

    /// Evaluate the estimated density at a query point.
    pub fn density(&self, at: Position) -> f64 {
        if self.degenerate {
            return 0.0;
        }

        let mut sum = 0.0;
        for p in &self.points {
            let dx = at.x - p.x;
            let dy = at.y - p.y;
            let q = dx * (self.inv[0] * dx + self.inv[1] * dy)
                + dy * (self.inv[2] * dx + self.inv[3] * dy);
            sum += (-0.5 * q).exp();
        }
        sum / self.norm
    }
}
