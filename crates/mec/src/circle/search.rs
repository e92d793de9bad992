//! Exhaustive candidate search over hull vertices.
//!
//! Candidates are the diameter circles of all vertex pairs and the
//! circumcircles of all vertex triples. A candidate replaces the current best
//! only if it is strictly smaller and encloses every original point.

use super::types::Circle;
use crate::geom2::{coord_scale, same_point, sq_dist, MecCfg, Point2};

/// Candidate counters of one search.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub pairs_tested: usize,
    pub triples_tested: usize,
    pub triples_collinear: usize,
}

/// Circle with diameter `ab`, as `(center, r²)`.
#[inline]
pub fn diameter_circle(a: Point2, b: Point2) -> (Point2, f64) {
    let center = (a + b) * 0.5;
    (center, sq_dist(center, a))
}

/// Circumcircle of `a, b, c` as `(center, r²)`; `None` when the points are (nearly) collinear.
///
/// The center is the intersection of the perpendicular bisectors of `ab` and
/// `bc`. Each bisector passes through the edge midpoint with direction
/// `(dx, dy) = (-(Δy), Δx)`. Collinearity is judged relative to `|ab|·|bc|`.
pub fn circumcircle(a: Point2, b: Point2, c: Point2, eps_det: f64) -> Option<(Point2, f64)> {
    let x1 = (a.x + b.x) / 2.0;
    let y1 = (a.y + b.y) / 2.0;
    let dy1 = b.x - a.x;
    let dx1 = -(b.y - a.y);

    let x2 = (b.x + c.x) / 2.0;
    let y2 = (b.y + c.y) / 2.0;
    let dy2 = c.x - b.x;
    let dx2 = -(c.y - b.y);

    let den = dx1 * dy2 - dy1 * dx2;
    let lens = dx1.hypot(dy1) * dx2.hypot(dy2);
    if !(den.abs() > eps_det * lens) {
        return None;
    }
    let cx = (y1 * dx1 * dx2 + x2 * dx1 * dy2 - x1 * dy1 * dx2 - y2 * dx1 * dx2) / den;
    // Read y off the less steep bisector; a vertical one has dx == 0.
    let cy = if dx1.abs() >= dx2.abs() {
        (cx - x1) * dy1 / dx1 + y1
    } else {
        (cx - x2) * dy2 / dx2 + y2
    };
    let center = Point2::new(cx, cy);
    let r2 = sq_dist(center, a);
    if !(r2.is_finite() && cx.is_finite() && cy.is_finite()) {
        return None;
    }
    Some((center, r2))
}

/// True if every point except those identical to a `skip` vertex is within `r² + slack`.
pub fn encloses(center: Point2, r2: f64, points: &[Point2], skip: &[Point2], slack: f64) -> bool {
    points
        .iter()
        .filter(|&&p| !skip.iter().any(|&s| same_point(p, s)))
        .all(|&p| sq_dist(center, p) <= r2 + slack)
}

/// Search the pair and triple candidates of `hull`, checking enclosure against `points`.
///
/// Pre: `points` is non-empty and `hull` holds distinct points taken from it.
pub fn search_hull(hull: &[Point2], points: &[Point2], cfg: &MecCfg) -> (Circle, SearchStats) {
    let scale = coord_scale(points);
    let mut stats = SearchStats::default();
    let mut best_center = points[0];
    let mut best_r2 = f64::INFINITY;

    let h = hull.len();
    for i in 0..h {
        for j in (i + 1)..h {
            stats.pairs_tested += 1;
            let (center, r2) = diameter_circle(hull[i], hull[j]);
            if !(r2 < best_r2) {
                continue;
            }
            if !encloses(center, r2, points, &[hull[i], hull[j]], cfg.slack(r2, scale)) {
                continue;
            }
            tracing::trace!(i, j, r2, "pair_improves");
            best_center = center;
            best_r2 = r2;
        }
    }

    for i in 0..h {
        for j in (i + 1)..h {
            for k in (j + 1)..h {
                stats.triples_tested += 1;
                let Some((center, r2)) = circumcircle(hull[i], hull[j], hull[k], cfg.eps_det)
                else {
                    stats.triples_collinear += 1;
                    continue;
                };
                if !(r2 < best_r2) {
                    continue;
                }
                let skip = [hull[i], hull[j], hull[k]];
                if !encloses(center, r2, points, &skip, cfg.slack(r2, scale)) {
                    continue;
                }
                tracing::trace!(i, j, k, r2, "triple_improves");
                best_center = center;
                best_r2 = r2;
            }
        }
    }

    let circle = if best_r2.is_infinite() {
        if h > 1 {
            // Only reachable through round-off; fall back to a bounding circle around the box center.
            tracing::warn!(hull = h, "no candidate enclosed the input; using box-center circle");
            box_center_circle(points)
        } else {
            Circle::new(best_center, 0.0)
        }
    } else {
        Circle::new(best_center, best_r2.sqrt())
    };
    (circle, stats)
}

/// Circle centered on the bounding-box center through the farthest point.
fn box_center_circle(points: &[Point2]) -> Circle {
    let (mut lo, mut hi) = (points[0], points[0]);
    for p in points {
        lo = lo.inf(p);
        hi = hi.sup(p);
    }
    let center = (lo + hi) * 0.5;
    let r2 = points
        .iter()
        .map(|&p| sq_dist(center, p))
        .fold(0.0, f64::max);
    Circle::new(center, r2.sqrt())
}
