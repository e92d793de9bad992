use super::types::Point2;

/// Squared Euclidean distance.
#[inline]
pub fn sq_dist(a: Point2, b: Point2) -> f64 {
    (a - b).norm_squared()
}

/// Exact coordinate identity (structural equality, no tolerance).
#[inline]
pub fn same_point(a: Point2, b: Point2) -> bool {
    a.x == b.x && a.y == b.y
}

/// Magnitude of the largest coordinate, floored at 1 so tolerances never vanish.
pub fn coord_scale(points: &[Point2]) -> f64 {
    points
        .iter()
        .map(|p| p.x.abs().max(p.y.abs()))
        .fold(1.0, f64::max)
}

/// Index of the first non-finite point, if any.
pub fn first_non_finite(points: &[Point2]) -> Option<usize> {
    points
        .iter()
        .position(|p| !(p.x.is_finite() && p.y.is_finite()))
}
