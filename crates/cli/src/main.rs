use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use mec::geom2::rand::{draw_cloud, CloudCfg, CloudShape, PointCount, ReplayToken};
use mec::{convex_hull, minimal_bounding_circle_with_diagnostics, MecCfg};
use serde::Serialize;
use serde_json::json;
use std::path::Path;
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

mod input;
mod output;
mod provenance;

use output::{CircleRecord, HullRecord};
use provenance::Payload;

#[derive(Parser)]
#[command(name = "mec-cli")]
#[command(about = "Minimum enclosing circles and convex hulls of planar point sets")]
struct Cmd {
    /// Log stage details (hull size, candidate counts)
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Minimum enclosing circle of the x/y columns of a CSV file
    Circle {
        #[arg(long)]
        input: String,
        /// Write JSON here (plus a provenance sidecar) instead of stdout
        #[arg(long)]
        out: Option<String>,
        /// Skip the hull culling pre-pass
        #[arg(long)]
        no_cull: bool,
        /// Relative enclosure slack
        #[arg(long)]
        eps_rel: Option<f64>,
        /// Fail when the input has more points than this
        #[arg(long)]
        max_points: Option<usize>,
        /// Include corners, culling box, kept points, hull and candidate counts
        #[arg(long)]
        diagnostics: bool,
    },
    /// Convex hull vertices of the x/y columns of a CSV file
    Hull {
        #[arg(long)]
        input: String,
        #[arg(long)]
        out: Option<String>,
    },
    /// Write a reproducible random point cloud as CSV
    Sample {
        #[arg(long, default_value_t = 24)]
        n: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 0)]
        index: u64,
        #[arg(long, value_enum, default_value_t = Shape::Disc)]
        shape: Shape,
        #[arg(long, default_value_t = 1.0)]
        radius: f64,
        #[arg(long)]
        out: String,
    },
    /// Print a small provenance JSON block
    Report,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Shape {
    Disc,
    Ring,
    Square,
}

impl Shape {
    fn to_cloud_shape(self) -> CloudShape {
        match self {
            Shape::Disc => CloudShape::Disc,
            Shape::Ring => CloudShape::Ring { inner_frac: 0.8 },
            Shape::Square => CloudShape::Square,
        }
    }
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = if cmd.verbose { Level::DEBUG } else { Level::INFO };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
    match cmd.action {
        Action::Circle {
            input,
            out,
            no_cull,
            eps_rel,
            max_points,
            diagnostics,
        } => {
            let mut cfg = MecCfg {
                cull: !no_cull,
                ..MecCfg::default()
            };
            if let Some(e) = eps_rel {
                cfg.eps_rel = e;
            }
            if let Some(m) = max_points {
                cfg.max_points = m;
            }
            circle(input, out, cfg, diagnostics)
        }
        Action::Hull { input, out } => hull(input, out),
        Action::Sample {
            n,
            seed,
            index,
            shape,
            radius,
            out,
        } => sample(n, seed, index, shape, radius, out),
        Action::Report => report(),
    }
}

fn circle(input: String, out: Option<String>, cfg: MecCfg, diagnostics: bool) -> Result<()> {
    tracing::info!(input, out = ?out, cull = cfg.cull, "circle");
    let points = input::read_points(&input)?;
    let (c, diag) = minimal_bounding_circle_with_diagnostics(&points, cfg)
        .with_context(|| format!("enclosing circle of {}", input))?;
    tracing::info!(
        hull = diag.hull.len(),
        x = c.center().x,
        y = c.center().y,
        radius = c.radius(),
        "circle_found"
    );
    let record = CircleRecord::new(c, points.len(), diagnostics.then_some(&diag));
    let params = json!({
        "cull": cfg.cull,
        "eps_rel": cfg.eps_rel,
        "eps_det": cfg.eps_det,
        "max_points": cfg.max_points,
        "diagnostics": diagnostics
    });
    emit(&record, out.as_deref(), Payload::new(params).with_input(input))
}

fn hull(input: String, out: Option<String>) -> Result<()> {
    tracing::info!(input, out = ?out, "hull");
    let points = input::read_points(&input)?;
    let hull = convex_hull(&points);
    let record = HullRecord::new(&hull, points.len());
    emit(
        &record,
        out.as_deref(),
        Payload::new(json!({})).with_input(input),
    )
}

fn sample(n: usize, seed: u64, index: u64, shape: Shape, radius: f64, out: String) -> Result<()> {
    tracing::info!(n, seed, index, shape = ?shape, radius, out, "sample");
    let cfg = CloudCfg {
        count: PointCount::Fixed(n),
        shape: shape.to_cloud_shape(),
        radius,
        ..CloudCfg::default()
    };
    let points = draw_cloud(cfg, ReplayToken { seed, index });
    input::write_points(&out, &points)?;
    let params = json!({
        "n": n,
        "seed": seed,
        "index": index,
        "shape": format!("{:?}", shape).to_lowercase(),
        "radius": radius
    });
    provenance::write_sidecar(&out, Payload::new(params))?;
    Ok(())
}

fn report() -> Result<()> {
    let mut obj = provenance::header();
    obj["params"] = json!({});
    obj["outputs"] = json!([]);
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

/// Print `record` or write it to `out` with a provenance sidecar.
fn emit<T: Serialize>(record: &T, out: Option<&str>, payload: Payload) -> Result<()> {
    let Some(out) = out else {
        println!("{}", serde_json::to_string_pretty(record)?);
        return Ok(());
    };
    let out_path = Path::new(out);
    if let Some(parent) = out_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating dir {}", parent.display()))?;
        }
    }
    std::fs::write(out_path, serde_json::to_vec_pretty(record)?)
        .with_context(|| format!("writing {}", out_path.display()))?;
    provenance::write_sidecar(out_path, payload)?;
    Ok(())
}
