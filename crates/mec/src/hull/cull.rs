//! Hull culling: drop points that cannot be convex hull vertices.
//!
//! The four points extremal along the diagonals (`±x ± y`) span a
//! quadrilateral contained in the hull. An axis-aligned box inscribed in that
//! quadrilateral is computed; every point strictly inside the box is interior
//! to the hull and is discarded. Points on the box boundary are kept.
//!
//! Screen convention: "upper" means smaller y, so `top <= bottom`.

use crate::geom2::Point2;

/// The four diagonal extremes, in traversal order.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Corners {
    /// Maximizes `-x - y`.
    pub upper_left: Point2,
    /// Maximizes `x - y`.
    pub upper_right: Point2,
    /// Maximizes `x + y`.
    pub lower_right: Point2,
    /// Maximizes `-x + y`.
    pub lower_left: Point2,
}

impl Corners {
    #[inline]
    pub fn to_array(&self) -> [Point2; 4] {
        [
            self.upper_left,
            self.upper_right,
            self.lower_right,
            self.lower_left,
        ]
    }
}

/// Axis-aligned box inscribed in the corner quadrilateral.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CullingBox {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl CullingBox {
    #[inline]
    pub fn width(&self) -> f64 {
        self.right - self.left
    }
    #[inline]
    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }
    /// Zero (or negative) area: nothing can be strictly inside.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        !(self.width() > 0.0 && self.height() > 0.0)
    }
    /// Strict interior test; boundary points are not contained.
    #[inline]
    pub fn strictly_contains(&self, p: Point2) -> bool {
        p.x > self.left && p.x < self.right && p.y > self.top && p.y < self.bottom
    }
}

/// Find the points extremal toward each diagonal corner. Ties keep the earliest point.
pub fn min_max_corners(points: &[Point2]) -> Option<Corners> {
    let first = *points.first()?;
    let mut c = Corners {
        upper_left: first,
        upper_right: first,
        lower_right: first,
        lower_left: first,
    };
    for &p in &points[1..] {
        if -p.x - p.y > -c.upper_left.x - c.upper_left.y {
            c.upper_left = p;
        }
        if p.x - p.y > c.upper_right.x - c.upper_right.y {
            c.upper_right = p;
        }
        if -p.x + p.y > -c.lower_left.x + c.lower_left.y {
            c.lower_left = p;
        }
        if p.x + p.y > c.lower_right.x + c.lower_right.y {
            c.lower_right = p;
        }
    }
    Some(c)
}

/// Box inscribed in the quadrilateral spanned by `corners`.
pub fn box_from_corners(c: &Corners) -> CullingBox {
    let left = c.upper_left.x.max(c.lower_left.x);
    let top = c.upper_left.y.max(c.upper_right.y);
    let right = c.upper_right.x.min(c.lower_right.x);
    let bottom = c.lower_right.y.min(c.lower_left.y);
    CullingBox {
        left,
        top,
        right,
        bottom,
    }
}

/// Culling box of a point set; `None` for an empty set.
pub fn culling_box(points: &[Point2]) -> Option<CullingBox> {
    min_max_corners(points).map(|c| box_from_corners(&c))
}

/// Culled copy plus the corners and box that produced it.
///
/// With fewer than three points, or a degenerate box, every point is kept.
pub fn cull_with_box(points: &[Point2]) -> (Vec<Point2>, Option<Corners>, Option<CullingBox>) {
    let corners = min_max_corners(points);
    let bx = corners.as_ref().map(box_from_corners);
    let kept = match bx {
        Some(b) if points.len() >= 3 && !b.is_degenerate() => points
            .iter()
            .copied()
            .filter(|&p| !b.strictly_contains(p))
            .collect(),
        _ => points.to_vec(),
    };
    (kept, corners, bx)
}

/// Points that may still be hull vertices (order preserved).
pub fn cull(points: &[Point2]) -> Vec<Point2> {
    let (kept, _, _) = cull_with_box(points);
    tracing::trace!(input = points.len(), kept = kept.len(), "hull_cull");
    kept
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    #[test]
    fn corners_of_diamond() {
        let pts = [
            vector![0.0, -2.0],
            vector![2.0, 0.0],
            vector![0.0, 2.0],
            vector![-2.0, 0.0],
            vector![0.1, 0.1],
        ];
        let c = min_max_corners(&pts).unwrap();
        // -x-y is maximal at (-2,0) and (0,-2); the earliest wins.
        assert_eq!(c.upper_left, pts[0]);
        assert_eq!(c.upper_right, pts[0]);
        assert_eq!(c.lower_right, pts[1]);
        assert_eq!(c.lower_left, pts[2]);
    }

    #[test]
    fn box_inside_square_cloud() {
        let pts = [
            vector![-1.0, -1.0],
            vector![1.0, -1.0],
            vector![1.0, 1.0],
            vector![-1.0, 1.0],
            vector![0.0, 0.0],
            vector![0.5, -0.25],
        ];
        let b = culling_box(&pts).unwrap();
        assert_eq!(
            b,
            CullingBox {
                left: -1.0,
                top: -1.0,
                right: 1.0,
                bottom: 1.0
            }
        );
        let kept = cull(&pts);
        assert_eq!(kept, pts[..4].to_vec());
    }

    #[test]
    fn degenerate_box_keeps_everything() {
        let collinear = [
            vector![0.0, 0.0],
            vector![1.0, 0.0],
            vector![2.0, 0.0],
            vector![3.0, 0.0],
        ];
        let (kept, _, b) = cull_with_box(&collinear);
        assert!(b.unwrap().is_degenerate());
        assert_eq!(kept.len(), 4);

        let coincident = [vector![5.0, 5.0]; 3];
        assert_eq!(cull(&coincident).len(), 3);
        assert_eq!(cull(&coincident[..2]).len(), 2);
        assert!(cull(&[]).is_empty());
    }

    #[test]
    fn boundary_points_are_kept() {
        let pts = [
            vector![0.0, 0.0],
            vector![4.0, 0.0],
            vector![4.0, 4.0],
            vector![0.0, 4.0],
            vector![0.0, 2.0],
            vector![2.0, 2.0],
        ];
        let kept = cull(&pts);
        assert!(kept.contains(&vector![0.0, 2.0]));
        assert!(!kept.contains(&vector![2.0, 2.0]));
    }
}
