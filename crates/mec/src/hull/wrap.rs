//! Gift wrapping (Jarvis march) over an owned working copy.
//!
//! Angles are compared through `angle_value`, a piecewise-linear proxy of the
//! polar angle that preserves ordering without trigonometry.

use super::cfg::{ANGLE_SAME, ANGLE_TIE_EPS};
use crate::geom2::{same_point, sq_dist, Point2};

/// Monotone proxy for the angle of `to - from`, measured from the +x axis, in `[0, 360]`.
///
/// Definition
/// - `t = dy / (|dx| + |dy|)` lies in `[-1, 1]` and is monotone in the angle
///   within each half-plane.
/// - `dx < 0` maps to `t ↦ 2 - t` (quadrants II/III → (90°, 270°)),
///   otherwise `dy < 0` maps to `t ↦ 4 + t` (quadrant IV → [270°, 360°)).
/// - Identical points return 360 (`ANGLE_SAME`), which no real direction reaches.
#[inline]
pub fn angle_value(from: Point2, to: Point2) -> f64 {
    let dx = to.x - from.x;
    let dy = to.y - from.y;
    let l1 = dx.abs() + dy.abs();
    if l1 == 0.0 {
        return ANGLE_SAME;
    }
    let mut t = dy / l1;
    if dx < 0.0 {
        t = 2.0 - t;
    } else if dy < 0.0 {
        t = 4.0 + t;
    }
    t * 90.0
}

/// Lowest point (smallest y, then smallest x).
fn seed_index(points: &[Point2]) -> Option<usize> {
    let mut best: Option<usize> = None;
    for (i, p) in points.iter().enumerate() {
        match best {
            None => best = Some(i),
            Some(b) => {
                let q = points[b];
                if p.y < q.y || (p.y == q.y && p.x < q.x) {
                    best = Some(i);
                }
            }
        }
    }
    best
}

/// Wrap `points` into a hull, starting at the lowest point.
///
/// The input is copied; duplicates of a chosen vertex are dropped with it.
/// Among candidates in the same direction the farthest wins, so collinear
/// interior points never become vertices.
pub fn gift_wrap(points: &[Point2]) -> Vec<Point2> {
    let mut work: Vec<Point2> = points.to_vec();
    let Some(s) = seed_index(&work) else {
        return Vec::new();
    };
    let first = work[s];
    work.retain(|&p| !same_point(p, first));
    let mut hull = vec![first];

    let mut sweep = 0.0_f64;
    while !work.is_empty() {
        let from = hull[hull.len() - 1];
        let mut best: Option<(Point2, f64)> = None;
        for &p in &work {
            let a = angle_value(from, p);
            if a < sweep {
                continue;
            }
            best = match best {
                None => Some((p, a)),
                Some((bp, ba)) => {
                    if a < ba - ANGLE_TIE_EPS
                        || ((a - ba).abs() <= ANGLE_TIE_EPS && sq_dist(from, p) > sq_dist(from, bp))
                    {
                        Some((p, a))
                    } else {
                        Some((bp, ba))
                    }
                }
            };
        }
        let Some((next, next_angle)) = best else {
            // Nothing left ahead of the sweep: the loop closes.
            break;
        };
        let first_angle = angle_value(from, first);
        if first_angle >= sweep && first_angle <= next_angle + ANGLE_TIE_EPS {
            break;
        }
        hull.push(next);
        work.retain(|&p| !same_point(p, next));
        sweep = next_angle;
    }
    hull
}
