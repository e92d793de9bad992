use super::*;
use crate::geom2::rand::{draw_cloud, CloudCfg, CloudShape, PointCount, ReplayToken};
use crate::geom2::{coord_scale, same_point};
use nalgebra::vector;
use proptest::prelude::*;

fn cross(a: Point2, b: Point2, c: Point2) -> f64 {
    let ab = b - a;
    let ac = c - a;
    ab.x * ac.y - ab.y * ac.x
}

/// No point lies strictly outside the hull (left-turn polygon in a y-up frame).
fn assert_contains_all(hull: &[Point2], points: &[Point2]) {
    if hull.len() < 3 {
        return;
    }
    let tol = 1e-9 * coord_scale(points).powi(2);
    for k in 0..hull.len() {
        let a = hull[k];
        let b = hull[(k + 1) % hull.len()];
        for &p in points {
            assert!(
                cross(a, b, p) >= -tol,
                "point {p:?} outside edge {a:?} -> {b:?}"
            );
        }
    }
}

fn assert_subset(hull: &[Point2], points: &[Point2]) {
    for &h in hull {
        assert!(points.iter().any(|&p| same_point(p, h)), "{h:?} not an input point");
    }
}

#[test]
fn hull_of_right_triangle_with_interior() {
    let pts = [
        vector![0.0, 3.0],
        vector![1.0, 1.0],
        vector![4.0, 0.0],
        vector![0.0, 0.0],
    ];
    let hull = convex_hull(&pts);
    assert_eq!(hull, vec![vector![0.0, 0.0], vector![4.0, 0.0], vector![0.0, 3.0]]);
}

#[test]
fn culling_keeps_every_unculled_vertex() {
    for index in 0..50 {
        for shape in [CloudShape::Disc, CloudShape::Square, CloudShape::Ring { inner_frac: 0.9 }] {
            let cfg = CloudCfg {
                count: PointCount::Uniform { min: 3, max: 60 },
                shape,
                ..CloudCfg::default()
            };
            let pts = draw_cloud(cfg, ReplayToken { seed: 11, index });
            let full = convex_hull_unculled(&pts);
            let culled = convex_hull(&pts);
            assert_eq!(full, culled, "shape {shape:?} index {index}");
            assert_subset(&culled, &pts);
            assert_contains_all(&culled, &pts);
        }
    }
}

#[test]
fn hull_is_stable_under_duplicates() {
    let base = [
        vector![0.0, 0.0],
        vector![2.0, 0.0],
        vector![2.0, 2.0],
        vector![0.0, 2.0],
    ];
    let mut doubled = base.to_vec();
    doubled.extend_from_slice(&base);
    doubled.push(vector![1.0, 1.0]);
    assert_eq!(convex_hull(&doubled), convex_hull(&base));
}

fn arb_points(max: usize) -> impl Strategy<Value = Vec<Point2>> {
    prop::collection::vec((-100.0..100.0f64, -100.0..100.0f64), 1..max)
        .prop_map(|v| v.into_iter().map(|(x, y)| vector![x, y]).collect())
}

proptest! {
    #[test]
    fn hull_vertices_come_from_input_and_enclose_it(pts in arb_points(40)) {
        let hull = convex_hull(&pts);
        prop_assert!(!hull.is_empty());
        assert_subset(&hull, &pts);
        assert_contains_all(&hull, &pts);
    }

    #[test]
    fn hull_ignores_input_order(pts in arb_points(30).prop_shuffle()) {
        let mut sorted = pts.clone();
        sorted.sort_by(|a, b| a.x.total_cmp(&b.x).then(a.y.total_cmp(&b.y)));
        prop_assert_eq!(convex_hull(&pts), convex_hull(&sorted));
    }
}
