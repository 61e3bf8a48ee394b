//! Point-set files: CSV/Parquet via polars (columns `x`, `y`), JSON via serde.

use anyhow::{bail, Context, Result};
use dchull::Point;
use nalgebra::Vector2;
use polars::prelude::*;
use serde::Deserialize;
use std::fs::File;
use std::path::Path;

/// One point in a JSON input: `[x, y]` or `{"x": .., "y": ..}`.
#[derive(Deserialize)]
#[serde(untagged)]
enum PointRecord {
    Pair([f64; 2]),
    Named { x: f64, y: f64 },
}

impl From<PointRecord> for Point {
    fn from(rec: PointRecord) -> Self {
        match rec {
            PointRecord::Pair([x, y]) => Vector2::new(x, y),
            PointRecord::Named { x, y } => Vector2::new(x, y),
        }
    }
}

pub fn read_points(path: &Path) -> Result<Vec<Point>> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "csv" => {
            let df = LazyCsvReader::new(path)
                .with_infer_schema_length(Some(100))
                .finish()?
                .collect()
                .with_context(|| format!("reading {}", path.display()))?;
            frame_to_points(&df)
        }
        "parquet" => {
            let df = LazyFrame::scan_parquet(path, ScanArgsParquet::default())?
                .collect()
                .with_context(|| format!("reading {}", path.display()))?;
            frame_to_points(&df)
        }
        "json" => {
            let bytes =
                std::fs::read(path).with_context(|| format!("reading {}", path.display()))?;
            let records: Vec<PointRecord> = serde_json::from_slice(&bytes)
                .with_context(|| format!("parsing {}", path.display()))?;
            Ok(records.into_iter().map(Point::from).collect())
        }
        other => {
            bail!("unsupported point file extension {other:?} (expected csv, parquet or json)")
        }
    }
}

fn frame_to_points(df: &DataFrame) -> Result<Vec<Point>> {
    let xs = df.column("x").context("column `x`")?.cast(&DataType::Float64)?;
    let ys = df.column("y").context("column `y`")?.cast(&DataType::Float64)?;
    let xs = xs.f64()?;
    let ys = ys.f64()?;
    xs.into_iter()
        .zip(ys.into_iter())
        .enumerate()
        .map(|(row, xy)| match xy {
            (Some(x), Some(y)) => Ok(Vector2::new(x, y)),
            _ => bail!("row {row}: missing coordinate"),
        })
        .collect()
}

pub fn write_points_csv(path: &Path, points: &[Point]) -> Result<()> {
    let xs: Vec<f64> = points.iter().map(|p| p.x).collect();
    let ys: Vec<f64> = points.iter().map(|p| p.y).collect();
    let mut df = df!("x" => xs, "y" => ys)?;
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let mut file =
        File::create(path).with_context(|| format!("creating {}", path.display()))?;
    CsvWriter::new(&mut file)
        .include_header(true)
        .finish(&mut df)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}
