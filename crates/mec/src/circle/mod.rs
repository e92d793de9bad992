//! Minimum enclosing circle over hull vertices.
//!
//! Pipeline
//! - Validate the input (non-empty, finite, below `MecCfg::max_points`).
//! - Cull, then gift-wrap the survivors into a hull.
//! - Examine every vertex pair (diameter circle) and triple (circumcircle);
//!   keep the smallest that encloses all original points.
//!
//! Tolerance
//! - A point is inside iff `d² <= r² + eps_rel · r · (r + scale)` with `scale`
//!   the largest absolute coordinate (at least 1). Exact boundary points are
//!   always inside.
//!
//! Cost is O(h³·n) for hull size h; intended for tens of points.

mod search;
mod types;

pub use search::{circumcircle, diameter_circle, encloses, search_hull, SearchStats};
pub use types::{Circle, MecDiagnostics, MecError};

use crate::geom2::{first_non_finite, MecCfg, Point2};
use crate::hull::{cull_with_box, gift_wrap};

fn validate(points: &[Point2], cfg: &MecCfg) -> Result<(), MecError> {
    if points.is_empty() {
        return Err(MecError::EmptyInput);
    }
    if points.len() > cfg.max_points {
        return Err(MecError::TooManyPoints {
            len: points.len(),
            max: cfg.max_points,
        });
    }
    if let Some(index) = first_non_finite(points) {
        return Err(MecError::NonFinite { index });
    }
    Ok(())
}

/// Minimum enclosing circle with default tolerances.
pub fn minimal_bounding_circle(points: &[Point2]) -> Result<Circle, MecError> {
    minimal_bounding_circle_with(points, MecCfg::default())
}

/// Minimum enclosing circle with explicit configuration.
pub fn minimal_bounding_circle_with(points: &[Point2], cfg: MecCfg) -> Result<Circle, MecError> {
    minimal_bounding_circle_with_diagnostics(points, cfg).map(|(circle, _)| circle)
}

/// Minimum enclosing circle plus a record of the intermediate stages.
pub fn minimal_bounding_circle_with_diagnostics(
    points: &[Point2],
    cfg: MecCfg,
) -> Result<(Circle, MecDiagnostics), MecError> {
    validate(points, &cfg)?;
    let (kept, corners, culling_box) = if cfg.cull {
        cull_with_box(points)
    } else {
        (points.to_vec(), None, None)
    };
    let hull = gift_wrap(&kept);
    let (circle, stats) = search_hull(&hull, points, &cfg);
    tracing::debug!(
        input = points.len(),
        kept = kept.len(),
        hull = hull.len(),
        pairs = stats.pairs_tested,
        triples = stats.triples_tested,
        radius = circle.radius(),
        "minimal_bounding_circle"
    );
    let diag = MecDiagnostics {
        corners,
        culling_box,
        kept,
        hull,
        pairs_tested: stats.pairs_tested,
        triples_tested: stats.triples_tested,
        triples_collinear: stats.triples_collinear,
    };
    Ok((circle, diag))
}

/// Search a precomputed hull; enclosure is still checked against all of `points`.
pub fn minimal_bounding_circle_of_hull(
    hull: &[Point2],
    points: &[Point2],
    cfg: MecCfg,
) -> Result<Circle, MecError> {
    validate(points, &cfg)?;
    if hull.is_empty() {
        return Err(MecError::EmptyInput);
    }
    Ok(search_hull(hull, points, &cfg).0)
}
