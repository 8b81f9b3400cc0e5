//! Closest pair of a planar point set in O(n log n).
//!
//! Purpose
//! - Minimum Euclidean distance over all pairs, optionally with the two
//!   points that realize it.
//!
//! Pipeline
//! - `prepare`: reject non-finite coordinates (and oversized inputs when a
//!   limit is configured), then sort by x once.
//! - `solver::Solver`: split by position, recurse, merge through the
//!   y-sorted strip with a bounded window.
//! - `brute::brute_force`: exhaustive leaf for ≤ 3 points, also exported as
//!   the O(n²) baseline.
//!
//! Fewer than two points is not an error: the distance is `Distance::Undefined`
//! and the witness is `None`.

mod brute;
mod prepare;
mod solver;
mod types;
mod util;

pub use brute::brute_force;
pub use prepare::{prepare, InputError};
pub use solver::{BASE_CASE_MAX, STRIP_WINDOW};
pub use types::{ClosestPair, Distance, Point, SolveCfg};
pub use util::euclidean;

use crate::observe::{NoopObserver, Observer};
use solver::Solver;

/// Minimum pairwise distance, `Distance::Undefined` for fewer than two points.
pub fn closest_pair_distance(points: &[Point]) -> Result<Distance, InputError> {
    let best = closest_pair(points)?;
    Ok(Distance::of(best.as_ref()))
}

/// Closest pair with default settings.
pub fn closest_pair(points: &[Point]) -> Result<Option<ClosestPair>, InputError> {
    closest_pair_with(points, SolveCfg::default())
}

pub fn closest_pair_with(
    points: &[Point],
    cfg: SolveCfg,
) -> Result<Option<ClosestPair>, InputError> {
    closest_pair_observed(points, cfg, &mut NoopObserver)
}

/// Closest pair, reporting every recursion step to `observer`.
///
/// The observer sees the x-sorted working copy, not the caller's order.
pub fn closest_pair_observed<O: Observer>(
    points: &[Point],
    cfg: SolveCfg,
    observer: &mut O,
) -> Result<Option<ClosestPair>, InputError> {
    let xs = prepare(points, &cfg)?;
    tracing::debug!(n = xs.len(), y_gap_cutoff = cfg.y_gap_cutoff, "closest pair: solving");
    let best = Solver::new(cfg, observer).solve(&xs, 0);
    tracing::debug!(distance = ?best.map(|p| p.distance), "closest pair: done");
    Ok(best)
}

/// O(n²) reference over validated input.
pub fn brute_force_distance(points: &[Point]) -> Result<Distance, InputError> {
    prepare::validate_finite(points)?;
    Ok(Distance::of(brute_force(points).as_ref()))
}
