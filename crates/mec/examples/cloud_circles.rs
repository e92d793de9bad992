//! Print the enclosing circle of a few sampled clouds, with hull statistics.
//!
//! Usage:
//!   cargo run -p mec --example cloud_circles -- disc
//!   cargo run -p mec --example cloud_circles -- ring
//!   cargo run -p mec --example cloud_circles -- square

use mec::geom2::rand::{draw_cloud, CloudCfg, CloudShape, PointCount, ReplayToken};
use mec::{minimal_bounding_circle_with_diagnostics, MecCfg};

fn main() {
    let mode = std::env::args().nth(1).unwrap_or_else(|| "disc".to_string());
    let shape = match mode.as_str() {
        "disc" => CloudShape::Disc,
        "ring" => CloudShape::Ring { inner_frac: 0.9 },
        "square" => CloudShape::Square,
        _ => {
            eprintln!("usage: cloud_circles [disc|ring|square]");
            return;
        }
    };
    let cfg = CloudCfg {
        count: PointCount::Uniform { min: 8, max: 40 },
        shape,
        ..CloudCfg::default()
    };
    for index in 0..5 {
        let pts = draw_cloud(cfg, ReplayToken { seed: 2025, index });
        match minimal_bounding_circle_with_diagnostics(&pts, MecCfg::default()) {
            Ok((c, diag)) => println!(
                "sample {index}: n={} kept={} hull={} center=({:.4}, {:.4}) r={:.4} triples={} (collinear {})",
                pts.len(),
                diag.kept.len(),
                diag.hull.len(),
                c.center().x,
                c.center().y,
                c.radius(),
                diag.triples_tested,
                diag.triples_collinear,
            ),
            Err(err) => eprintln!("sample {index}: {err}"),
        }
    }
}
