//! JSON records written by the `circle` and `hull` commands.

use mec::{Circle, MecDiagnostics, Point2};
use serde::Serialize;

fn xy(p: Point2) -> [f64; 2] {
    [p.x, p.y]
}

#[derive(Debug, Serialize)]
pub struct CircleRecord {
    pub center: [f64; 2],
    pub radius: f64,
    pub points: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diagnostics: Option<DiagnosticsRecord>,
}

#[derive(Debug, Serialize)]
pub struct DiagnosticsRecord {
    /// upper-left, upper-right, lower-right, lower-left
    pub corners: Option<[[f64; 2]; 4]>,
    /// left, top, right, bottom
    pub culling_box: Option<[f64; 4]>,
    pub kept: Vec<[f64; 2]>,
    pub hull: Vec<[f64; 2]>,
    pub pairs_tested: usize,
    pub triples_tested: usize,
    pub triples_collinear: usize,
}

#[derive(Debug, Serialize)]
pub struct HullRecord {
    pub points: usize,
    pub hull: Vec<[f64; 2]>,
}

impl CircleRecord {
    pub fn new(circle: Circle, points: usize, diag: Option<&MecDiagnostics>) -> Self {
        Self {
            center: xy(circle.center()),
            radius: circle.radius(),
            points,
            diagnostics: diag.map(DiagnosticsRecord::from),
        }
    }
}

impl From<&MecDiagnostics> for DiagnosticsRecord {
    fn from(d: &MecDiagnostics) -> Self {
        Self {
            corners: d.corners.map(|c| c.to_array().map(xy)),
            culling_box: d
                .culling_box
                .map(|b| [b.left, b.top, b.right, b.bottom]),
            kept: d.kept.iter().copied().map(xy).collect(),
            hull: d.hull.iter().copied().map(xy).collect(),
            pairs_tested: d.pairs_tested,
            triples_tested: d.triples_tested,
            triples_collinear: d.triples_collinear,
        }
    }
}

impl HullRecord {
    pub fn new(hull: &[Point2], points: usize) -> Self {
        Self {
            points,
            hull: hull.iter().copied().map(xy).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mec::{minimal_bounding_circle_with_diagnostics, MecCfg};
    use serde_json::Value;

    #[test]
    fn circle_record_omits_absent_diagnostics() {
        let rec = CircleRecord::new(Circle::new(Point2::new(1.0, 2.0), 3.0), 7, None);
        let v: Value = serde_json::to_value(&rec).unwrap();
        assert_eq!(v["center"][1], 2.0);
        assert_eq!(v["radius"], 3.0);
        assert_eq!(v["points"], 7);
        assert!(v.get("diagnostics").is_none());
    }

    #[test]
    fn diagnostics_are_flattened_to_arrays() {
        let pts = [
            Point2::new(0.0, 0.0),
            Point2::new(2.0, 0.0),
            Point2::new(2.0, 2.0),
            Point2::new(0.0, 2.0),
            Point2::new(1.0, 1.0),
        ];
        let (c, diag) = minimal_bounding_circle_with_diagnostics(&pts, MecCfg::default()).unwrap();
        let rec = CircleRecord::new(c, pts.len(), Some(&diag));
        let v: Value = serde_json::to_value(&rec).unwrap();
        let d = &v["diagnostics"];
        assert_eq!(d["hull"].as_array().unwrap().len(), 4);
        assert_eq!(d["kept"].as_array().unwrap().len(), 4);
        assert_eq!(d["culling_box"], serde_json::json!([0.0, 0.0, 2.0, 2.0]));
        assert_eq!(d["corners"][0], serde_json::json!([0.0, 0.0]));
    }
}
