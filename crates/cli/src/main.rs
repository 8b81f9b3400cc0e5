use anyhow::{Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use closest_pair::observe::{StepKind, StepRecorder, TraceObserver};
use closest_pair::pair::{closest_pair_observed, closest_pair_with, Distance, Point, SolveCfg};
use closest_pair::sample::{draw_points, PointCloud, ReplayToken, SampleCfg};
use serde::Serialize;
use serde_json::{json, Value};
use std::path::{Path, PathBuf};
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

mod points;
mod provenance;

#[derive(Parser)]
#[command(name = "closest-pair")]
#[command(about = "Closest pair of points in the plane")]
struct Cmd {
    /// Log verbosity: -v for debug, -vv for a trace record per algorithm step
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Solve a CSV point file (columns x,y) and emit the result as JSON
    Solve {
        #[arg(long)]
        input: PathBuf,
        /// Write the JSON here (plus a provenance sidecar) instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
        #[command(flatten)]
        solve: SolveArgs,
    },
    /// Print the recursion step breakdown for a CSV point file
    Steps {
        #[arg(long)]
        input: PathBuf,
        /// Also list every strip comparison
        #[arg(long)]
        checking: bool,
        #[command(flatten)]
        solve: SolveArgs,
    },
    /// Write a reproducible point cloud as CSV
    Sample {
        #[arg(long, value_enum, default_value_t = Cloud::Uniform)]
        cloud: Cloud,
        #[arg(long, default_value_t = 100)]
        count: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 0)]
        index: u64,
        /// Half-width, spacing, lattice step or column height, depending on the cloud
        #[arg(long, default_value_t = 1.0)]
        scale: f64,
        #[arg(long)]
        out: PathBuf,
    },
    /// Print a small provenance JSON block
    Report,
}

#[derive(Args, Clone, Copy, Debug)]
struct SolveArgs {
    /// Scan the full strip window even once the y-gap reaches the current minimum
    #[arg(long)]
    no_cutoff: bool,
    /// Refuse inputs with more points than this
    #[arg(long)]
    max_points: Option<usize>,
}

impl SolveArgs {
    fn cfg(self) -> SolveCfg {
        SolveCfg {
            y_gap_cutoff: !self.no_cutoff,
            max_points: self.max_points,
        }
    }

    fn params(self) -> Value {
        json!({ "y_gap_cutoff": !self.no_cutoff, "max_points": self.max_points })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Cloud {
    Uniform,
    Collinear,
    Lattice,
    Column,
}

impl Cloud {
    fn to_point_cloud(self, scale: f64) -> PointCloud {
        match self {
            Cloud::Uniform => PointCloud::Uniform { half_width: scale },
            Cloud::Collinear => PointCloud::Collinear {
                spacing: scale,
                jitter: scale * 0.25,
            },
            Cloud::Lattice => PointCloud::Lattice {
                step: scale,
                side: 32,
            },
            Cloud::Column => PointCloud::Column {
                x: 0.0,
                height: scale,
            },
        }
    }
}

/// JSON shape of a solve result.
#[derive(Debug, PartialEq, Serialize)]
struct SolveReport {
    points: usize,
    /// `null` when fewer than two points were given.
    distance: Option<f64>,
    pair: Option<[[f64; 2]; 2]>,
    y_gap_cutoff: bool,
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = match cmd.verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
    match cmd.action {
        Action::Solve { input, out, solve } => run_solve(&input, out.as_deref(), solve),
        Action::Steps {
            input,
            checking,
            solve,
        } => steps(&input, checking, solve),
        Action::Sample {
            cloud,
            count,
            seed,
            index,
            scale,
            out,
        } => sample(cloud, count, ReplayToken { seed, index }, scale, &out),
        Action::Report => report(),
    }
}

fn solve_points(points: &[Point], cfg: SolveCfg) -> Result<SolveReport> {
    let best = if tracing::enabled!(Level::TRACE) {
        closest_pair_observed(points, cfg, &mut TraceObserver)?
    } else {
        closest_pair_with(points, cfg)?
    };
    Ok(SolveReport {
        points: points.len(),
        distance: best.map(|p| p.distance),
        pair: best.map(|p| [[p.a.x, p.a.y], [p.b.x, p.b.y]]),
        y_gap_cutoff: cfg.y_gap_cutoff,
    })
}

fn run_solve(input: &Path, out: Option<&Path>, args: SolveArgs) -> Result<()> {
    tracing::info!(input = %input.display(), out = ?out, "solve");
    let points = points::read_points(input)?;
    let report = solve_points(&points, args.cfg())
        .with_context(|| format!("solving {}", input.display()))?;
    if report.distance.is_none() {
        tracing::warn!(points = report.points, "fewer than two points; distance undefined");
    }
    let text = serde_json::to_string_pretty(&report)?;
    let Some(out) = out else {
        println!("{text}");
        return Ok(());
    };
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(out, &text).with_context(|| format!("writing {}", out.display()))?;
    let mut params = args.params();
    params["input"] = json!(input.to_string_lossy());
    let payload = provenance::Payload::new(params).with_summary(serde_json::to_value(&report)?);
    provenance::write_sidecar(out, payload)?;
    tracing::info!(distance = ?report.distance, out = %out.display(), "solve done");
    Ok(())
}

fn steps(input: &Path, checking: bool, args: SolveArgs) -> Result<()> {
    tracing::info!(input = %input.display(), "steps");
    let points = points::read_points(input)?;
    let mut recorder = StepRecorder::new();
    let best = closest_pair_observed(&points, args.cfg(), &mut recorder)
        .with_context(|| format!("solving {}", input.display()))?;
    println!("Minimum distance found: {:.4}", Distance::of(best.as_ref()));
    print!("{}", recorder.breakdown());
    if checking {
        for (i, step) in recorder.steps().iter().enumerate() {
            if step.kind != StepKind::Checking {
                continue;
            }
            if let Some((a, b)) = step.checking {
                println!(
                    "  Step {}: ({}, {}) vs ({}, {}), best so far {:.4}",
                    i + 1,
                    a.x,
                    a.y,
                    b.x,
                    b.y,
                    step.best
                );
            }
        }
    }
    Ok(())
}

fn sample(cloud: Cloud, count: usize, tok: ReplayToken, scale: f64, out: &Path) -> Result<()> {
    tracing::info!(cloud = ?cloud, count, seed = tok.seed, index = tok.index, "sample");
    let cfg = SampleCfg {
        count,
        cloud: cloud.to_point_cloud(scale),
    };
    let points = draw_points(&cfg, tok)?;
    points::write_points(out, &points)?;
    let params = json!({
        "cloud": format!("{cloud:?}").to_lowercase(),
        "count": count,
        "seed": tok.seed,
        "index": tok.index,
        "scale": scale,
    });
    provenance::write_sidecar(out, provenance::Payload::new(params))?;
    Ok(())
}

fn report() -> Result<()> {
    let doc = provenance::provenance_doc(json!({}), Value::Null, &[]);
    println!("{}", serde_json::to_string_pretty(&doc)?);
    Ok(())
}
