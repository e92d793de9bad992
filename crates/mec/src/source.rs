//! Position sources: where point sets come from.
//!
//! The circle search only consumes coordinates. Anything that can list the
//! current positions of its members (a slice, a `Vec`, a simulation snapshot)
//! implements `PointSource`; range filtering happens here, before the core.

use crate::circle::{minimal_bounding_circle_with, Circle, MecError};
use crate::geom2::{sq_dist, MecCfg, Point2};

/// Supplies a snapshot of positions.
pub trait PointSource {
    fn positions(&self) -> Vec<Point2>;
}

impl PointSource for [Point2] {
    fn positions(&self) -> Vec<Point2> {
        self.to_vec()
    }
}

impl PointSource for Vec<Point2> {
    fn positions(&self) -> Vec<Point2> {
        self.clone()
    }
}

impl<const N: usize> PointSource for [Point2; N] {
    fn positions(&self) -> Vec<Point2> {
        self.to_vec()
    }
}

/// Positions within `range` of `center` (closed disc).
pub fn within_range<S: PointSource + ?Sized>(source: &S, center: Point2, range: f64) -> Vec<Point2> {
    let r2 = range * range;
    source
        .positions()
        .into_iter()
        .filter(|&p| sq_dist(center, p) <= r2)
        .collect()
}

/// Number of positions within `range` of `center`.
pub fn count_within_range<S: PointSource + ?Sized>(source: &S, center: Point2, range: f64) -> usize {
    within_range(source, center, range).len()
}

/// Minimum enclosing circle of the positions within `range` of `center`.
pub fn circle_within_range<S: PointSource + ?Sized>(
    source: &S,
    center: Point2,
    range: f64,
    cfg: MecCfg,
) -> Result<Circle, MecError> {
    let pts = within_range(source, center, range);
    tracing::debug!(in_range = pts.len(), range, "circle_within_range");
    minimal_bounding_circle_with(&pts, cfg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    struct Squad {
        members: Vec<(u32, Point2)>,
    }

    impl PointSource for Squad {
        fn positions(&self) -> Vec<Point2> {
            self.members.iter().map(|&(_, p)| p).collect()
        }
    }

    #[test]
    fn range_filter_is_closed() {
        let pts = [vector![0.0, 0.0], vector![3.0, 4.0], vector![6.0, 8.0]];
        assert_eq!(count_within_range(&pts, vector![0.0, 0.0], 5.0), 2);
        assert_eq!(count_within_range(&pts[..], vector![0.0, 0.0], 4.9), 1);
        assert_eq!(within_range(&pts.to_vec(), vector![6.0, 8.0], 0.0), vec![pts[2]]);
    }

    #[test]
    fn custom_source_feeds_the_search() {
        let squad = Squad {
            members: vec![
                (1, vector![0.0, 0.0]),
                (2, vector![10.0, 0.0]),
                (3, vector![100.0, 100.0]),
            ],
        };
        let c = circle_within_range(&squad, vector![5.0, 0.0], 20.0, MecCfg::default()).unwrap();
        assert!((c.center() - vector![5.0, 0.0]).norm() < 1e-12);
        assert!((c.radius() - 5.0).abs() < 1e-12);

        let none = circle_within_range(&squad, vector![-50.0, -50.0], 1.0, MecCfg::default());
        assert_eq!(none, Err(MecError::EmptyInput));
    }
}
