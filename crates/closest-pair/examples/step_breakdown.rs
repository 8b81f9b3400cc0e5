//! Print the recursion steps for a small hand-picked point set.
//!
//! Usage:
//!   cargo run -p closest-pair --example step_breakdown
//!   cargo run -p closest-pair --example step_breakdown -- checking
//!
//! With `checking`, also lists each strip comparison with its pair.

use closest_pair::observe::StepKind;
use closest_pair::prelude::*;

fn main() {
    let verbose = std::env::args().nth(1).as_deref() == Some("checking");
    let points: Vec<Point> = [
        (2.0, 3.0),
        (12.0, 30.0),
        (40.0, 50.0),
        (5.0, 1.0),
        (12.0, 10.0),
        (3.0, 4.0),
        (15.0, 18.0),
        (20.0, 25.0),
        (30.0, 35.0),
        (25.0, 20.0),
    ]
    .iter()
    .map(|&(x, y)| Point::new(x, y))
    .collect();

    let mut rec = StepRecorder::new();
    let best = match closest_pair_observed(&points, SolveCfg::default(), &mut rec) {
        Ok(best) => best,
        Err(e) => {
            eprintln!("error: {e}");
            return;
        }
    };
    let distance = Distance::of(best.as_ref());
    println!("Minimum distance found: {distance:.4}");
    print!("{}", rec.breakdown());
    if verbose {
        for step in rec.steps().iter().filter(|s| s.kind == StepKind::Checking) {
            if let Some((a, b)) = step.checking {
                println!(
                    "  checking ({}, {}) vs ({}, {}) at depth {}, best {:.4}",
                    a.x, a.y, b.x, b.y, step.depth, step.best
                );
            }
        }
    }
}
