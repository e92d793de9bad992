//! Result, error and diagnostic types of the circle search.

use std::fmt;

use crate::geom2::{sq_dist, Point2};
use crate::hull::{Corners, CullingBox};

/// Immutable circle `{center, radius}` with `radius >= 0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Circle {
    center: Point2,
    radius: f64,
}

impl Circle {
    /// Negative or NaN radii are clamped to zero.
    #[inline]
    pub fn new(center: Point2, radius: f64) -> Self {
        Self {
            center,
            radius: if radius > 0.0 { radius } else { 0.0 },
        }
    }
    #[inline]
    pub fn center(&self) -> Point2 {
        self.center
    }
    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }
    #[inline]
    pub fn diameter(&self) -> f64 {
        2.0 * self.radius
    }
    #[inline]
    pub fn area(&self) -> f64 {
        std::f64::consts::PI * self.radius * self.radius
    }
    /// Closed-disc membership with slack `eps` on the distance.
    #[inline]
    pub fn contains_eps(&self, p: Point2, eps: f64) -> bool {
        let r = self.radius + eps;
        sq_dist(self.center, p) <= r * r
    }
    /// Closed-disc membership (boundary counts as inside).
    #[inline]
    pub fn contains(&self, p: Point2) -> bool {
        self.contains_eps(p, 0.0)
    }
}

/// Errors surfaced by the circle search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MecError {
    /// No points were supplied.
    EmptyInput,
    /// A coordinate is NaN or infinite.
    NonFinite { index: usize },
    /// The input is longer than `MecCfg::max_points`.
    TooManyPoints { len: usize, max: usize },
}

impl fmt::Display for MecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MecError::EmptyInput => write!(f, "point set is empty (no enclosing circle)"),
            MecError::NonFinite { index } => {
                write!(f, "point {} has a non-finite coordinate", index)
            }
            MecError::TooManyPoints { len, max } => write!(
                f,
                "point set has {} points, above the configured ceiling of {}",
                len, max
            ),
        }
    }
}

impl std::error::Error for MecError {}

/// Per-call record of the intermediate stages.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MecDiagnostics {
    /// Diagonal extremes used to build the culling box (absent when culling is off).
    pub corners: Option<Corners>,
    pub culling_box: Option<CullingBox>,
    /// Points that survived culling.
    pub kept: Vec<Point2>,
    pub hull: Vec<Point2>,
    pub pairs_tested: usize,
    pub triples_tested: usize,
    /// Triples skipped because their circumcircle is unbounded.
    pub triples_collinear: usize,
}
