//! Convex hull of a planar point set: culling + gift wrapping.
//!
//! Purpose
//! - Shrink the candidate set for the circle search to the hull vertices.
//! - Never mutate or alias the caller's points; every stage works on copies.
//!
//! Layout
//! - `cull.rs`: diagonal-extreme corners, inscribed culling box, filtering.
//! - `wrap.rs`: angle-value proxy and the Jarvis march itself.
//! - `cfg.rs`: fixed tolerances for direction ties.
//!
//! Order
//! - The hull starts at the lowest point (smallest y, then smallest x) and
//!   follows increasing `angle_value`, i.e. counterclockwise in a y-up frame.

mod cfg;
mod cull;
mod wrap;

pub use cull::{
    box_from_corners, cull, cull_with_box, culling_box, min_max_corners, Corners, CullingBox,
};
pub use wrap::{angle_value, gift_wrap};

use crate::geom2::Point2;

/// Hull vertices of `points` in sweep order. The input is left unchanged.
pub fn convex_hull(points: &[Point2]) -> Vec<Point2> {
    let hull = gift_wrap(&cull(points));
    tracing::debug!(input = points.len(), hull = hull.len(), "convex_hull");
    hull
}

/// Same as `convex_hull` without the culling pre-pass.
pub fn convex_hull_unculled(points: &[Point2]) -> Vec<Point2> {
    gift_wrap(points)
}

#[cfg(test)]
mod tests;
