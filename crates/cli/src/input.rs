//! CSV point I/O (columns `x`, `y`; extra columns are ignored).

use anyhow::{bail, Context, Result};
use mec::Point2;
use polars::prelude::*;
use std::path::Path;

/// Read the `x` and `y` columns of a headed CSV file as points.
pub fn read_points<P: AsRef<Path>>(path: P) -> Result<Vec<Point2>> {
    let path = path.as_ref();
    let df = LazyCsvReader::new(path)
        .with_has_header(true)
        .with_infer_schema_length(Some(100))
        .finish()
        .with_context(|| format!("opening {}", path.display()))?
        .select([
            col("x").cast(DataType::Float64),
            col("y").cast(DataType::Float64),
        ])
        .collect()
        .with_context(|| format!("reading x/y columns of {}", path.display()))?;
    let xs = df.column("x")?.f64()?;
    let ys = df.column("y")?.f64()?;
    let mut points = Vec::with_capacity(df.height());
    for (row, (x, y)) in xs.into_iter().zip(ys.into_iter()).enumerate() {
        match (x, y) {
            (Some(x), Some(y)) => points.push(Point2::new(x, y)),
            _ => bail!("{}: row {} has a missing coordinate", path.display(), row + 1),
        }
    }
    tracing::info!(path = %path.display(), rows = points.len(), "read_points");
    Ok(points)
}

/// Write points as a headed `x,y` CSV file, creating parent directories.
pub fn write_points<P: AsRef<Path>>(path: P, points: &[Point2]) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating dir {}", parent.display()))?;
        }
    }
    let xs: Vec<f64> = points.iter().map(|p| p.x).collect();
    let ys: Vec<f64> = points.iter().map(|p| p.y).collect();
    let mut df = df!("x" => xs, "y" => ys)?;
    let mut file =
        std::fs::File::create(path).with_context(|| format!("creating {}", path.display()))?;
    CsvWriter::new(&mut file)
        .include_header(true)
        .finish(&mut df)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use mec::geom2::rand::{draw_cloud, CloudCfg, ReplayToken};
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn reads_headed_csv_with_extra_columns() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("pts.csv");
        fs::write(&path, "id,x,y\n1,0,0\n2,4,0\n3,0,3.5\n").unwrap();
        let pts = read_points(&path).unwrap();
        assert_eq!(
            pts,
            vec![
                Point2::new(0.0, 0.0),
                Point2::new(4.0, 0.0),
                Point2::new(0.0, 3.5)
            ]
        );
    }

    #[test]
    fn missing_coordinate_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.csv");
        fs::write(&path, "x,y\n0.0,1.0\n2.0,\n").unwrap();
        assert!(read_points(&path).is_err());
    }

    #[test]
    fn sampled_cloud_survives_a_file_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested/cloud.csv");
        let pts = draw_cloud(CloudCfg::default(), ReplayToken { seed: 8, index: 2 });
        write_points(&path, &pts).unwrap();
        let back = read_points(&path).unwrap();
        assert_eq!(back.len(), pts.len());
        for (a, b) in back.iter().zip(pts.iter()) {
            assert!((a - b).norm() < 1e-12);
        }
    }
}
