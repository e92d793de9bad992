//! Basic 2D types and tolerances used by the hull and circle searches.
//!
//! - `Point2`: plain coordinate pair (nalgebra column vector).
//! - `MecCfg`: centralizes epsilons for enclosure, collinearity and the input ceiling.
//!
//! Code cross-refs: `hull::{cull, convex_hull}`, `mec::minimal_bounding_circle_with`

use nalgebra::Vector2;

/// A point in the plane. Value type; identity is its coordinates.
pub type Point2 = Vector2<f64>;

/// Search configuration (tolerances and limits).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MecCfg {
    /// Relative slack for the enclosure test `d² <= r² + eps_rel · r · (r + scale)`.
    pub eps_rel: f64,
    /// Collinearity threshold for circumcircles, relative to `|ab|·|bc|`.
    pub eps_det: f64,
    /// Run the hull culler before gift wrapping.
    pub cull: bool,
    /// Inputs longer than this fail fast with `MecError::TooManyPoints`.
    pub max_points: usize,
}

impl Default for MecCfg {
    fn default() -> Self {
        Self {
            eps_rel: 1e-10,
            eps_det: 1e-12,
            cull: true,
            max_points: 4096,
        }
    }
}

impl MecCfg {
    /// Absolute slack on squared distances for a circle of squared radius `r2`.
    ///
    /// Round-off in `d²` grows with `d` times the coordinate magnitude, so the
    /// slack does too; a zero-radius circle gets none.
    #[inline]
    pub fn slack(&self, r2: f64, scale: f64) -> f64 {
        let r = r2.sqrt();
        self.eps_rel * r * (r + scale)
    }
}
