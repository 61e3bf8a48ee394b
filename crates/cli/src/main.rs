use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use dchull::geom2::rand::{sample_points, PointDist, ReplayToken};
use dchull::hull::{convex_hull_with, monotone_chain, MergeObserver, NoopObserver, TangentKind};
use dchull::{Hull, HullCfg, Point};
use nalgebra::Vector2;
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

mod io;
mod provenance;

use provenance::Provenance;

#[derive(Parser)]
#[command(name = "dchull")]
#[command(about = "Planar convex hulls by divide and conquer")]
struct Cmd {
    /// Optional run label; propagated to outputs and logs
    #[arg(long)]
    tag: Option<String>,

    /// Log at debug level
    #[arg(long, short)]
    verbose: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Compute the hull of a point file (csv, parquet or json) and write a JSON report
    Hull {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
        #[arg(long, value_enum, default_value_t = Algo::Dc)]
        algo: Algo,
        /// Log every tangent and merge of the divide-and-conquer driver
        #[arg(long)]
        trace_merges: bool,
    },
    /// Sample a random point set and write it as CSV
    Sample {
        #[arg(long, value_enum, default_value_t = Dist::Disk)]
        dist: Dist,
        #[arg(long)]
        n: usize,
        #[arg(long, default_value_t = 1.0)]
        radius: f64,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 0)]
        index: u64,
        #[arg(long)]
        out: PathBuf,
    },
    /// Print the code revision and crate version as JSON
    Report,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Algo {
    /// Divide and conquer with tangent-walk merges
    Dc,
    /// Andrew's monotone chain (reference)
    Monotone,
}

impl Algo {
    fn as_str(self) -> &'static str {
        match self {
            Algo::Dc => "dc",
            Algo::Monotone => "monotone",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Dist {
    Disk,
    Square,
    Circle,
}

impl Dist {
    fn with_radius(self, radius: f64) -> PointDist {
        match self {
            Dist::Disk => PointDist::UniformDisk { radius },
            Dist::Square => PointDist::UniformSquare { half_width: radius },
            Dist::Circle => PointDist::Circle { radius },
        }
    }
}

/// Logs driver progress (the textual stand-in for drawing tangents and hulls).
#[derive(Default)]
struct TracingObserver {
    merges: usize,
}

impl MergeObserver for TracingObserver {
    fn on_tangent(&mut self, kind: TangentKind, from: Point, to: Point) {
        tracing::info!(?kind, from = ?(from.x, from.y), to = ?(to.x, to.y), "tangent");
    }

    fn on_merge(&mut self, left: &[Point], right: &[Point], merged: &[Point]) {
        self.merges += 1;
        tracing::info!(
            step = self.merges,
            left = left.len(),
            right = right.len(),
            merged = merged.len(),
            "merge"
        );
    }
}

/// Scalar results of one hull run; also the `params` of its provenance sidecar.
#[derive(Serialize)]
struct HullSummary {
    algo: &'static str,
    n_input: usize,
    n_hull: usize,
    area: f64,
    perimeter: f64,
    elapsed_secs: f64,
}

#[derive(Serialize)]
struct HullReport {
    #[serde(flatten)]
    summary: HullSummary,
    hull: Vec<[f64; 2]>,
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = if cmd.verbose { Level::DEBUG } else { Level::INFO };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .init();
    match cmd.action {
        Action::Hull {
            input,
            out,
            algo,
            trace_merges,
        } => hull(&input, &out, algo, trace_merges, cmd.tag),
        Action::Sample {
            dist,
            n,
            radius,
            seed,
            index,
            out,
        } => sample(dist, n, radius, ReplayToken { seed, index }, &out, cmd.tag),
        Action::Report => report(cmd.tag),
    }
}

fn compute(points: &[Point], algo: Algo, trace_merges: bool) -> Result<(Hull, f64)> {
    let cfg = HullCfg::default();
    let t0 = Instant::now();
    let hull = match algo {
        Algo::Dc if trace_merges => {
            let mut obs = TracingObserver::default();
            convex_hull_with(points, &cfg, &mut obs)
        }
        Algo::Dc => convex_hull_with(points, &cfg, &mut NoopObserver),
        Algo::Monotone => monotone_chain(points, &cfg),
    }
    .context("computing convex hull")?;
    Ok((hull, t0.elapsed().as_secs_f64()))
}

fn hull(
    input: &Path,
    out: &Path,
    algo: Algo,
    trace_merges: bool,
    tag: Option<String>,
) -> Result<()> {
    tracing::info!(
        input = %input.display(),
        out = %out.display(),
        algo = algo.as_str(),
        tag = ?tag,
        "hull"
    );
    let points = io::read_points(input)?;
    let (hull, elapsed_secs) = compute(&points, algo, trace_merges)?;
    tracing::info!(
        n_input = points.len(),
        n_hull = hull.len(),
        elapsed_secs,
        "hull computed"
    );

    let report = HullReport {
        summary: HullSummary {
            algo: algo.as_str(),
            n_input: points.len(),
            n_hull: hull.len(),
            area: hull.area(),
            perimeter: hull.perimeter(),
            elapsed_secs,
        },
        hull: hull.vertices().iter().map(|p| [p.x, p.y]).collect(),
    };
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    std::fs::write(out, serde_json::to_vec_pretty(&report)?)
        .with_context(|| format!("writing {}", out.display()))?;

    Provenance::new("hull", tag)
        .input(input)
        .params(&report.summary)?
        .write_for(out)?;
    Ok(())
}

fn sample(
    dist: Dist,
    n: usize,
    radius: f64,
    tok: ReplayToken,
    out: &Path,
    tag: Option<String>,
) -> Result<()> {
    tracing::info!(?dist, n, radius, seed = tok.seed, index = tok.index, "sample");
    let points = sample_points(n, dist.with_radius(radius), Vector2::zeros(), tok);
    io::write_points_csv(out, &points)?;
    let params = serde_json::json!({
        "dist": format!("{dist:?}").to_lowercase(),
        "n": n,
        "radius": radius,
        "seed": tok.seed,
        "index": tok.index,
    });
    Provenance::new("sample", tag).params(&params)?.write_for(out)?;
    Ok(())
}

fn report(tag: Option<String>) -> Result<()> {
    let prov = Provenance::new("report", tag);
    println!("{}", serde_json::to_string_pretty(&prov)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;
    use tempfile::tempdir;

    #[test]
    fn hull_command_writes_report_and_sidecar() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("pts.json");
        std::fs::write(&input, "[[0,0],[4,0],[4,4],[0,4],[2,2]]").unwrap();
        let out = dir.path().join("out").join("hull.json");
        hull(&input, &out, Algo::Dc, false, Some("t1".into())).unwrap();

        let parsed: Value = serde_json::from_slice(&std::fs::read(&out).unwrap()).unwrap();
        assert_eq!(parsed["algo"], "dc");
        assert_eq!(parsed["n_input"], 5);
        assert_eq!(parsed["n_hull"], 4);
        assert_eq!(parsed["hull"][0][0], 0.0);
        assert_eq!(parsed["hull"][1][0], 4.0);
        assert!((parsed["area"].as_f64().unwrap() - 16.0).abs() < 1e-12);

        let side = dir.path().join("out").join("hull.provenance.json");
        let side: Value = serde_json::from_slice(&std::fs::read(side).unwrap()).unwrap();
        assert_eq!(side["command"], "hull");
        assert_eq!(side["tag"], "t1");
        assert_eq!(side["inputs"][0], input.display().to_string());
        assert_eq!(side["params"]["n_hull"], 4);
        assert_eq!(side["params"]["algo"], "dc");
        assert!(side["params"].get("hull").is_none());
    }

    #[test]
    fn sample_then_hull_agrees_across_algorithms() {
        let dir = tempdir().unwrap();
        let pts = dir.path().join("disk.csv");
        let tok = ReplayToken { seed: 4, index: 2 };
        sample(Dist::Disk, 300, 10.0, tok, &pts, None).unwrap();
        let points = io::read_points(&pts).unwrap();
        assert_eq!(points.len(), 300);
        let (dc, _) = compute(&points, Algo::Dc, true).unwrap();
        let (mc, _) = compute(&points, Algo::Monotone, false).unwrap();
        assert_eq!(dc, mc);
        assert!(dc.vertices().iter().all(|p| p.norm() <= 10.0 + 1e-9));
    }

    #[test]
    fn empty_input_is_an_error() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("empty.json");
        std::fs::write(&input, "[]").unwrap();
        let out = dir.path().join("hull.json");
        let err = hull(&input, &out, Algo::Dc, false, None).unwrap_err();
        assert!(format!("{err:#}").contains("empty point set"));
        assert!(!out.exists());
    }
}
